use super::Error;

/// Error raised by the database client library underneath a driver.
///
/// Covers connection failures, statement failures such as "table already
/// exists" or "no such table", and malformed driver URLs. The client's
/// error is kept as the source.
#[derive(Debug)]
pub(super) struct DriverOperationFailed {
    cause: Box<dyn std::error::Error + Send + Sync>,
}

impl std::error::Error for DriverOperationFailed {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&*self.cause)
    }
}

impl core::fmt::Display for DriverOperationFailed {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "{}", self.cause)?;

        let mut next = self.cause.source();
        while let Some(source) = next {
            write!(f, ": {source}")?;
            next = source.source();
        }

        Ok(())
    }
}

impl Error {
    /// Wraps a client library error.
    pub fn driver_operation_failed(err: impl std::error::Error + Send + Sync + 'static) -> Error {
        let cause = Box::new(err);
        super::ErrorKind::DriverOperationFailed(DriverOperationFailed { cause }).into()
    }

    pub fn is_driver_operation_failed(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::DriverOperationFailed(_))
    }
}
