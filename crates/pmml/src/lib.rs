//! The slice of the PMML document model that skpmml converters populate.
//!
//! Only what an ensemble conversion needs is modelled: the data dictionary,
//! the mining schema, and a [`MiningModel`] whose [`Segmentation`] wraps
//! opaque per-segment models. Segment models are generic so that whatever
//! the per-tree encoder produces can be embedded as long as it serializes.

mod document;
mod error;
mod model;
mod types;

pub use document::{Application, Header, PmmlDocument, PMML_VERSION};
pub use error::PmmlError;
pub use model::{
    Constant, DataDictionary, DataField, MiningField, MiningModel, MiningSchema, Predicate,
    Segment, Segmentation,
};
pub use types::{DataType, FieldUsage, MiningFunction, MultipleModelMethod, OpType};
