//! Attribute dictionary error type.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DictError {
    #[error("{class}: missing attribute `{name}`")]
    MissingAttribute { class: String, name: String },
    #[error("{class}: attribute `{name}` has type {actual}, expected {expected}")]
    TypeMismatch {
        class: String,
        name: String,
        expected: String,
        actual: String,
    },
    #[error("{class}: invalid value for attribute `{name}`: {source}")]
    InvalidValue {
        class: String,
        name: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    #[error("{class}: attributes already populated{}", duplicate_suffix(.name))]
    AlreadyPopulated { class: String, name: Option<String> },
    #[error("{class}: expected {expected} constructor arguments, got {actual}")]
    ArgumentCount {
        class: String,
        expected: usize,
        actual: usize,
    },
}

fn duplicate_suffix(name: &Option<String>) -> String {
    match name {
        Some(name) => format!(" (duplicate `{name}`)"),
        None => String::new(),
    }
}
