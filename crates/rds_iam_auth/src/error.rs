use strum_macros::{AsRefStr, Display};

/// Category of an [`Error`], for callers that branch on the failure kind
/// rather than on the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum ErrorKind {
    InvalidHost,
    InvalidRegion,
    UnknownRegion,
    InvalidUser,
    TokenGeneration,
}

/// Errors raised while building an IAM authentication helper or requesting a
/// token through it.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Host is blank, an IP literal, an unqualified name, or otherwise not an
    /// RDS endpoint.
    #[error("Unsupported AWS hostname '{host}': expected an endpoint ending in rds.amazonaws.com")]
    InvalidHost { host: String },

    #[error("Invalid AWS region '{region}' in hostname '{host}'")]
    InvalidRegion { host: String, region: String },

    /// Region is well-formed but not one of the regions this build knows about.
    #[error("Unsupported AWS region '{region}'")]
    UnknownRegion { region: String },

    #[error("Database user must not be blank")]
    InvalidUser,

    #[error("Failed to generate IAM authentication token for user '{user}'")]
    TokenGeneration {
        user: String,
        #[source]
        source: anyhow::Error,
    },
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidHost { .. } => ErrorKind::InvalidHost,
            Self::InvalidRegion { .. } => ErrorKind::InvalidRegion,
            Self::UnknownRegion { .. } => ErrorKind::UnknownRegion,
            Self::InvalidUser => ErrorKind::InvalidUser,
            Self::TokenGeneration { .. } => ErrorKind::TokenGeneration,
        }
    }

    pub(crate) fn invalid_host(host: impl Into<String>) -> Self {
        Self::InvalidHost { host: host.into() }
    }

    pub(crate) fn invalid_region(host: impl Into<String>, region: impl Into<String>) -> Self {
        Self::InvalidRegion { host: host.into(), region: region.into() }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_error_display() {
        let error = Error::invalid_host("localhost");
        assert_eq!(
            error.to_string(),
            "Unsupported AWS hostname 'localhost': expected an endpoint ending in rds.amazonaws.com"
        );

        let error = Error::invalid_region("a.b.fake-1.rds.amazonaws.com", "fake-1");
        assert_eq!(
            error.to_string(),
            "Invalid AWS region 'fake-1' in hostname 'a.b.fake-1.rds.amazonaws.com'"
        );

        let error = Error::UnknownRegion { region: "xx-north-9".to_string() };
        assert_eq!(error.to_string(), "Unsupported AWS region 'xx-north-9'");

        let error = Error::InvalidUser;
        assert_eq!(error.to_string(), "Database user must not be blank");
    }

    #[test]
    fn test_token_generation_keeps_source() {
        let fixture = Error::TokenGeneration {
            user: "app_user".to_string(),
            source: anyhow::anyhow!("credentials expired"),
        };

        let actual = std::error::Error::source(&fixture).map(|e| e.to_string());
        let expected = Some("credentials expired".to_string());

        assert_eq!(actual, expected);
    }

    #[test]
    fn test_error_kind() {
        assert_eq!(Error::invalid_host("").kind(), ErrorKind::InvalidHost);
        assert_eq!(
            Error::invalid_region("h", " ").kind(),
            ErrorKind::InvalidRegion
        );
        assert_eq!(Error::InvalidUser.kind(), ErrorKind::InvalidUser);
        assert_eq!(ErrorKind::InvalidRegion.to_string(), "invalid_region");
        assert_eq!(ErrorKind::TokenGeneration.as_ref(), "token_generation");
    }
}
