use std::fmt::Display;

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// `<area>[-<qualifier>...]-<direction>-<digits>`, e.g. `us-east-1` or
    /// `us-gov-west-1`.
    static ref REGION_PATTERN: Regex = Regex::new(r"^[a-z]+(?:-[a-z]+)+-[0-9]+$").unwrap();
}

/// Public AWS regions, including GovCloud and China partitions.
pub const KNOWN_REGIONS: &[&str] = &[
    "af-south-1",
    "ap-east-1",
    "ap-east-2",
    "ap-northeast-1",
    "ap-northeast-2",
    "ap-northeast-3",
    "ap-south-1",
    "ap-south-2",
    "ap-southeast-1",
    "ap-southeast-2",
    "ap-southeast-3",
    "ap-southeast-4",
    "ap-southeast-5",
    "ap-southeast-7",
    "ca-central-1",
    "ca-west-1",
    "cn-north-1",
    "cn-northwest-1",
    "eu-central-1",
    "eu-central-2",
    "eu-north-1",
    "eu-south-1",
    "eu-south-2",
    "eu-west-1",
    "eu-west-2",
    "eu-west-3",
    "il-central-1",
    "me-central-1",
    "me-south-1",
    "mx-central-1",
    "sa-east-1",
    "us-east-1",
    "us-east-2",
    "us-gov-east-1",
    "us-gov-west-1",
    "us-west-1",
    "us-west-2",
];

/// A syntactically valid AWS region identifier, stored lowercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RdsRegion(String);

impl RdsRegion {
    /// Parses a region label, normalizing it to lowercase first. Returns
    /// `None` when the label does not follow the region grammar.
    pub fn parse(label: &str) -> Option<Self> {
        let normalized = label.to_ascii_lowercase();
        REGION_PATTERN
            .is_match(&normalized)
            .then_some(Self(normalized))
    }

    /// Whether the region appears in [`KNOWN_REGIONS`].
    pub fn is_known(&self) -> bool {
        KNOWN_REGIONS.contains(&self.0.as_str())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for RdsRegion {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Display for RdsRegion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
