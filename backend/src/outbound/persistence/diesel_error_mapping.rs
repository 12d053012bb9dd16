//! Mapping from pool and Diesel failures to [`RepositoryError`].

use tracing::debug;

use crate::domain::ports::RepositoryError;

use super::pool::PoolError;

pub(crate) fn map_pool_error(error: PoolError) -> RepositoryError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            RepositoryError::connection(message)
        }
    }
}

/// Classify a Diesel error. Closed connections are connection failures; all
/// other failures are query failures with a generic message.
pub(crate) fn map_diesel_error(error: diesel::result::Error) -> RepositoryError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::NotFound => RepositoryError::query("record not found"),
        DieselError::QueryBuilderError(_) => RepositoryError::query("database query error"),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            RepositoryError::connection("database connection error")
        }
        _ => RepositoryError::query("database error"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use diesel::result::{DatabaseErrorKind, Error as DieselError};
    use rstest::rstest;

    #[rstest]
    fn pool_failures_are_connection_errors() {
        let mapped = map_pool_error(PoolError::checkout("timed out"));
        assert_eq!(mapped, RepositoryError::connection("timed out"));
    }

    #[rstest]
    #[case(DieselError::NotFound, RepositoryError::query("record not found"))]
    #[case(
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, Box::new(String::from("gone"))),
        RepositoryError::connection("database connection error")
    )]
    #[case(
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, Box::new(String::from("dup"))),
        RepositoryError::query("database error")
    )]
    fn diesel_failures_are_classified(#[case] error: DieselError, #[case] expected: RepositoryError) {
        assert_eq!(map_diesel_error(error), expected);
    }
}
