use std::fmt::Display;

use rds_iam_auth::IamAuthTokenHelper;
use serde::Serialize;

/// What `rds-iam check` prints for an accepted endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EndpointReport {
    pub host: String,
    pub port: u16,
    pub region: String,
    pub kind: String,
}

impl From<&IamAuthTokenHelper> for EndpointReport {
    fn from(helper: &IamAuthTokenHelper) -> Self {
        Self {
            host: helper.host().to_string(),
            port: helper.port(),
            region: helper.region().to_string(),
            kind: helper.endpoint_kind().to_string(),
        }
    }
}

impl Display for EndpointReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "host:   {}", self.host)?;
        writeln!(f, "port:   {}", self.port)?;
        writeln!(f, "region: {}", self.region)?;
        write!(f, "kind:   {}", self.kind)
    }
}
