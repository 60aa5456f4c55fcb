use crate::serializer::ValidationErrors;
use sea_orm::DbErr;
use thiserror::Error;

/// An error from a catalog operation
#[derive(Error, Debug)]
pub enum Error {
    /// The underlying database operation failed
    #[error("Database Error: {0}")]
    Db(#[from] DbErr),
    /// A payload could not be encoded or decoded as JSON
    #[error("Json Error: {0}")]
    Json(#[from] serde_json::Error),
    /// One or more fields of an input payload were rejected
    #[error("Validation Error: {0}")]
    Validation(ValidationErrors),
    /// No row matched the lookup
    #[error("{entity} not found: {lookup}")]
    NotFound {
        /// Table name of the entity
        entity: &'static str,
        /// The lookup that failed, e.g. `slug=summer-box`
        lookup: String,
    },
    /// The configuration could not be located or parsed
    #[error("Config Error: {0}")]
    Config(String),
}

impl From<ValidationErrors> for Error {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors)
    }
}

impl From<toml::de::Error> for Error {
    fn from(error: toml::de::Error) -> Self {
        Self::Config(error.to_string())
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
    /// A [`Error::NotFound`] for the lookup `field=value`
    pub fn not_found(entity: &'static str, field: &str, value: impl std::fmt::Display) -> Self {
        Self::NotFound {
            entity,
            lookup: format!("{field}={value}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_not_found() {
        let err = Error::not_found("box", "slug", "summer-box");
        assert_eq!(err.to_string(), "box not found: slug=summer-box");
    }

    #[test]
    fn display_db_error() {
        let err: Error = DbErr::Custom("boom".to_owned()).into();
        assert_eq!(err.to_string(), "Database Error: Custom Error: boom");
    }
}
