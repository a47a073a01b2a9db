use lazy_static::lazy_static;
use regex::Regex;
use strum_macros::Display;

use crate::error::{Error, Result};
use crate::region::RdsRegion;

lazy_static! {
    /// `<instance>.[<prefix>]<server>.<region>.rds.amazonaws.com`
    ///
    /// The region group accepts any label so that a malformed region is
    /// reported as such instead of as an unsupported host.
    static ref RDS_HOST_PATTERN: Regex = Regex::new(
        r"(?i)^(?P<instance>[^.\s]+(?:\.[^.\s]+)*)\.(?P<prefix>proxy-|cluster-ro-|cluster-custom-|cluster-)?(?P<server>[a-z0-9]+)\.(?P<region>[^.]*)\.rds\.amazonaws\.com$"
    )
    .unwrap();
}

/// Kind of RDS endpoint, derived from the prefix of the server label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "snake_case")]
pub enum EndpointKind {
    Instance,
    Proxy,
    Cluster,
    ClusterReadOnly,
    ClusterCustom,
}

impl EndpointKind {
    fn from_prefix(prefix: Option<&str>) -> Self {
        match prefix.map(str::to_ascii_lowercase).as_deref() {
            Some("proxy-") => Self::Proxy,
            Some("cluster-") => Self::Cluster,
            Some("cluster-ro-") => Self::ClusterReadOnly,
            Some("cluster-custom-") => Self::ClusterCustom,
            _ => Self::Instance,
        }
    }
}

/// A host name that has been confirmed to be an Amazon RDS endpoint, along
/// with the region embedded in it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RdsHost {
    name: String,
    kind: EndpointKind,
    region: RdsRegion,
}

impl RdsHost {
    /// Validates `host` against the RDS endpoint naming convention and
    /// extracts its region.
    ///
    /// Checks run in order and the first failure is returned:
    /// 1. blank host → [`Error::InvalidHost`]
    /// 2. host not shaped like `*.*.<region>.rds.amazonaws.com` →
    ///    [`Error::InvalidHost`]
    /// 3. region label not shaped like `<area>-<direction>-<digits>` →
    ///    [`Error::InvalidRegion`]
    pub fn parse(host: &str) -> Result<Self> {
        if host.trim().is_empty() {
            return Err(Error::invalid_host(host));
        }

        let captures = RDS_HOST_PATTERN
            .captures(host)
            .ok_or_else(|| Error::invalid_host(host))?;

        let label = captures.name("region").map_or("", |m| m.as_str());
        let region = RdsRegion::parse(label).ok_or_else(|| Error::invalid_region(host, label))?;
        let kind = EndpointKind::from_prefix(captures.name("prefix").map(|m| m.as_str()));

        Ok(Self { name: host.to_string(), kind, region })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> EndpointKind {
        self.kind
    }

    pub fn region(&self) -> &RdsRegion {
        &self.region
    }
}
