//! Error type shared by the persistence ports.

use crate::domain::Error;

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by repository adapters.
    pub enum RepositoryError {
        /// A connection could not be obtained or was lost.
        Connection => "repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query => "repository query failed: {message}",
    }
}

impl From<RepositoryError> for Error {
    fn from(error: RepositoryError) -> Self {
        match error {
            RepositoryError::Connection { message } => {
                Error::service_unavailable(format!("database unavailable: {message}"))
            }
            RepositoryError::Query { message } => Error::internal(message),
        }
    }
}
