//! Tree-ensemble encoding of scikit-learn estimators into PMML mining models.
//!
//! An ensemble is an ordered list of per-tree models plus an aggregation
//! method. [`EnsembleEncoder`] checks the list against an
//! [`AggregationPolicy`] and wraps it into an [`EnsembleModel`], which renders
//! as a segmented [`MiningModel`](skpmml_pmml::MiningModel).
//!
//! # Example
//!
//! ```
//! use skpmml_pmml::{DataField, MiningFunction, MultipleModelMethod};
//! use skpmml_sklearn::{EnsembleEncoder, EnsembleError};
//!
//! let fields = vec![DataField::continuous("y"), DataField::continuous("x")];
//! let model = EnsembleEncoder::new()
//!     .encode(
//!         vec!["T1", "T2", "T3"],
//!         MultipleModelMethod::Average,
//!         MiningFunction::Regression,
//!         fields.clone(),
//!     )
//!     .unwrap();
//! assert_eq!(model.members(), ["T1", "T2", "T3"]);
//!
//! let err = EnsembleEncoder::new()
//!     .encode(
//!         vec!["T1"],
//!         MultipleModelMethod::MajorityVote,
//!         MiningFunction::Regression,
//!         fields,
//!     )
//!     .unwrap_err();
//! assert!(matches!(err, EnsembleError::IncompatibleAggregation { .. }));
//! ```

mod ensemble;
mod error;

pub use ensemble::{
    AggregationPolicy, EnsembleEncoder, EnsembleModel, ExtraTreesRegressor,
    RandomForestClassifier, RandomForestRegressor, TreeEncoder,
};
pub use error::{EnsembleError, PolicyError};
