use thiserror::Error;

pub type SeriesResult<T> = Result<T, SeriesError>;

#[derive(Debug, Error)]
pub enum SeriesError {
    /// A configured data field could not be resolved on a record's shape.
    /// Aborts the extraction call that encountered it.
    #[error("field '{field}' cannot be resolved on record shape '{shape}'")]
    FieldNotFound { field: String, shape: &'static str },

    /// A resolved raw value could not be converted to a usable scalar.
    #[error("cannot coerce value to scalar: {0}")]
    Coercion(String),
}
