//! The encoded ensemble and its rendering into a mining model.

use skpmml_pmml::{
    DataDictionary, DataField, MiningFunction, MiningModel, MiningSchema, MultipleModelMethod,
    PmmlDocument, Predicate, Segment, Segmentation,
};

/// An ordered set of opaque per-tree models plus the metadata that says how
/// their outputs combine.
///
/// Built only by [`EnsembleEncoder`](crate::EnsembleEncoder), which checks
/// that there is at least one member, that the method suits the mining
/// function, and that any weights line up with the members.
#[derive(Debug, Clone, PartialEq)]
pub struct EnsembleModel<M> {
    pub(crate) aggregation_method: MultipleModelMethod,
    pub(crate) mining_function: MiningFunction,
    pub(crate) members: Vec<M>,
    pub(crate) weights: Option<Vec<f64>>,
    pub(crate) data_dictionary: DataDictionary,
    pub(crate) mining_schema: MiningSchema,
}

impl<M> EnsembleModel<M> {
    pub fn aggregation_method(&self) -> MultipleModelMethod {
        self.aggregation_method
    }

    pub fn mining_function(&self) -> MiningFunction {
        self.mining_function
    }

    /// Members in estimator order.
    pub fn members(&self) -> &[M] {
        &self.members
    }

    pub fn weights(&self) -> Option<&[f64]> {
        self.weights.as_deref()
    }

    /// Field descriptors, target first.
    pub fn fields(&self) -> &[DataField] {
        &self.data_dictionary.data_fields
    }

    pub fn mining_schema(&self) -> &MiningSchema {
        &self.mining_schema
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Always `false`; an encoded ensemble has at least one member.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Renders the ensemble as a segmented mining model. Segment ids are
    /// 1-based and follow member order; every segment's predicate is `True`.
    pub fn into_mining_model(self) -> MiningModel<M> {
        let weights = self.weights;
        let segments = self
            .members
            .into_iter()
            .enumerate()
            .map(|(i, model)| Segment {
                id: i + 1,
                predicate: Predicate::True,
                weight: weights.as_ref().and_then(|w| w.get(i).copied()),
                model,
            })
            .collect();
        MiningModel {
            mining_function: self.mining_function,
            mining_schema: self.mining_schema,
            segmentation: Segmentation {
                multiple_model_method: self.aggregation_method,
                segments,
            },
        }
    }

    /// Wraps the ensemble in a complete document.
    pub fn into_document(self) -> PmmlDocument<M>
    where
        M: serde::Serialize,
    {
        let data_dictionary = self.data_dictionary.clone();
        PmmlDocument::new(data_dictionary, self.into_mining_model())
    }
}

impl<M: Clone> EnsembleModel<M> {
    pub fn to_mining_model(&self) -> MiningModel<M> {
        self.clone().into_mining_model()
    }
}
