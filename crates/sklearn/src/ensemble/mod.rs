//! Tree ensembles.

mod encoder;
mod forest;
mod model;
mod policy;

pub use encoder::{EnsembleEncoder, TreeEncoder};
pub use forest::{ExtraTreesRegressor, RandomForestClassifier, RandomForestRegressor};
pub use model::EnsembleModel;
pub use policy::AggregationPolicy;
