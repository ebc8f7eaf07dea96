//! Ensemble encoding error types.

use skpmml_classdict::DictError;
use skpmml_numpy::NumpyError;
use skpmml_pmml::{MiningFunction, MultipleModelMethod, PmmlError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EnsembleError {
    #[error("an ensemble needs at least one estimator")]
    EmptyEnsemble,
    #[error("aggregation method `{method}` is not valid for {function} models")]
    IncompatibleAggregation {
        method: MultipleModelMethod,
        function: MiningFunction,
    },
    #[error("{weights} weights given for {estimators} estimators")]
    WeightCountMismatch { estimators: usize, weights: usize },
    #[error("estimator {index} could not be encoded: {source}")]
    Tree {
        index: usize,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    #[error(transparent)]
    Attribute(#[from] DictError),
    #[error(transparent)]
    Numpy(#[from] NumpyError),
    #[error(transparent)]
    Pmml(#[from] PmmlError),
}

#[derive(Debug, Error)]
pub enum PolicyError {
    #[error("invalid aggregation policy: {0}")]
    Parse(#[from] toml::de::Error),
}
