//! NumPy decoding error types.

use skpmml_buffers::BufferError;
use skpmml_classdict::DictError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NumpyError {
    #[error("malformed type descriptor `{token}`: {reason}")]
    MalformedDescriptor { token: String, reason: &'static str },
    #[error("truncated buffer: {actual} bytes do not hold {} elements of {item_size} bytes", count_label(.count))]
    TruncatedBuffer {
        item_size: usize,
        count: Option<usize>,
        actual: usize,
    },
    #[error("invalid array shape {shape:?}")]
    InvalidShape { shape: Vec<usize> },
    #[error("malformed npy container: {reason}")]
    MalformedNpy { reason: String },
    #[error(transparent)]
    Attribute(DictError),
    #[error(transparent)]
    Buffer(#[from] BufferError),
}

fn count_label(count: &Option<usize>) -> String {
    match count {
        Some(count) => count.to_string(),
        None => "a whole number of".to_string(),
    }
}

/// Attribute conversions that failed on a NumPy-level check (a malformed
/// `dtype` token, say) surface as that NumPy error, not as a wrapped
/// attribute error.
impl From<DictError> for NumpyError {
    fn from(err: DictError) -> Self {
        match err {
            DictError::InvalidValue {
                class,
                name,
                source,
            } => match source.downcast::<NumpyError>() {
                Ok(numpy) => *numpy,
                Err(source) => NumpyError::Attribute(DictError::InvalidValue {
                    class,
                    name,
                    source,
                }),
            },
            other => NumpyError::Attribute(other),
        }
    }
}

/// Failure to materialize a scalar, carrying the triggering cause.
#[derive(Debug, Error)]
#[error("cannot decode scalar {class}: {cause}")]
pub struct ScalarDecodeError {
    pub class: String,
    #[source]
    pub cause: NumpyError,
}
