//! Wrapping per-tree models into one ensemble.

use skpmml_classdict::ClassDict;
use skpmml_pmml::{DataDictionary, DataField, MiningFunction, MiningSchema, MultipleModelMethod};
use tracing::debug;

use crate::{AggregationPolicy, EnsembleError, EnsembleModel};

/// Turns one deserialized tree estimator into a segment model.
///
/// The ensemble encoder never looks inside the result; it only sequences
/// the outputs.
pub trait TreeEncoder {
    type Model;
    type Error: std::error::Error + Send + Sync + 'static;

    fn encode_tree(
        &self,
        estimator: &ClassDict,
        schema: &MiningSchema,
    ) -> Result<Self::Model, Self::Error>;
}

impl<F, M, E> TreeEncoder for F
where
    F: Fn(&ClassDict, &MiningSchema) -> Result<M, E>,
    E: std::error::Error + Send + Sync + 'static,
{
    type Model = M;
    type Error = E;

    fn encode_tree(&self, estimator: &ClassDict, schema: &MiningSchema) -> Result<M, E> {
        self(estimator, schema)
    }
}

/// Builds [`EnsembleModel`]s under an [`AggregationPolicy`].
#[derive(Debug, Clone, Default)]
pub struct EnsembleEncoder {
    policy: AggregationPolicy,
}

impl EnsembleEncoder {
    /// An encoder with the default compatibility table.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: AggregationPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &AggregationPolicy {
        &self.policy
    }

    /// Wraps already encoded members, unweighted.
    pub fn encode<M>(
        &self,
        estimators: Vec<M>,
        method: MultipleModelMethod,
        function: MiningFunction,
        fields: Vec<DataField>,
    ) -> Result<EnsembleModel<M>, EnsembleError> {
        self.encode_weighted(estimators, None, method, function, fields)
    }

    /// Wraps already encoded members with an optional parallel weights
    /// sequence. Members keep their order; nothing is deduplicated.
    pub fn encode_weighted<M>(
        &self,
        estimators: Vec<M>,
        weights: Option<Vec<f64>>,
        method: MultipleModelMethod,
        function: MiningFunction,
        fields: Vec<DataField>,
    ) -> Result<EnsembleModel<M>, EnsembleError> {
        self.check(estimators.len(), weights.as_deref(), method, function)?;
        let (data_dictionary, mining_schema) = schema(fields)?;
        debug!(
            members = estimators.len(),
            %method,
            %function,
            weighted = weights.is_some(),
            "encoded ensemble"
        );
        Ok(EnsembleModel {
            aggregation_method: method,
            mining_function: function,
            members: estimators,
            weights,
            data_dictionary,
            mining_schema,
        })
    }

    /// Runs `tree_encoder` over every estimator in order, then wraps the
    /// results. The first per-tree failure aborts the whole call.
    pub fn encode_trees<E: TreeEncoder>(
        &self,
        tree_encoder: &E,
        estimators: &[ClassDict],
        weights: Option<Vec<f64>>,
        method: MultipleModelMethod,
        function: MiningFunction,
        fields: Vec<DataField>,
    ) -> Result<EnsembleModel<E::Model>, EnsembleError> {
        self.check(estimators.len(), weights.as_deref(), method, function)?;
        let (_, mining_schema) = schema(fields.clone())?;
        let members = estimators
            .iter()
            .enumerate()
            .map(|(index, estimator)| {
                tree_encoder
                    .encode_tree(estimator, &mining_schema)
                    .map_err(|err| EnsembleError::Tree {
                        index,
                        source: Box::new(err),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        self.encode_weighted(members, weights, method, function, fields)
    }

    fn check(
        &self,
        count: usize,
        weights: Option<&[f64]>,
        method: MultipleModelMethod,
        function: MiningFunction,
    ) -> Result<(), EnsembleError> {
        if count == 0 {
            return Err(EnsembleError::EmptyEnsemble);
        }
        if !self.policy.allows(method, function) {
            return Err(EnsembleError::IncompatibleAggregation { method, function });
        }
        if let Some(weights) = weights {
            if weights.len() != count {
                return Err(EnsembleError::WeightCountMismatch {
                    estimators: count,
                    weights: weights.len(),
                });
            }
        }
        Ok(())
    }
}

fn schema(fields: Vec<DataField>) -> Result<(DataDictionary, MiningSchema), EnsembleError> {
    let mining_schema = MiningSchema::from_data_fields(&fields)?;
    Ok((DataDictionary::new(fields)?, mining_schema))
}
