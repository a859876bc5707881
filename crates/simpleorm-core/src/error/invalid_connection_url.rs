use super::Error;

/// Error when a connection URL cannot be used.
///
/// Raised for unparsable URLs, unsupported schemes, drivers whose cargo
/// feature is off, and URLs missing a required part such as the database.
#[derive(Debug)]
pub(super) struct InvalidConnectionUrl {
    reason: Box<str>,
}

impl std::error::Error for InvalidConnectionUrl {}

impl core::fmt::Display for InvalidConnectionUrl {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("invalid connection URL: ")?;
        f.write_str(&self.reason)
    }
}

impl Error {
    pub fn invalid_connection_url(reason: impl Into<String>) -> Error {
        let reason = reason.into().into_boxed_str();
        super::ErrorKind::InvalidConnectionUrl(InvalidConnectionUrl { reason }).into()
    }

    pub fn is_invalid_connection_url(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidConnectionUrl(_))
    }
}
