//! Forest estimators: averaged ensembles of decision trees.

use skpmml_classdict::ClassDict;
use skpmml_numpy::{NdArray, NumpyScalar};
use skpmml_pmml::{DataField, DataType, MiningFunction, MultipleModelMethod};

use crate::{EnsembleEncoder, EnsembleError, EnsembleModel, TreeEncoder};

/// The fitted trees of a forest, in fit order.
fn estimators(dict: &ClassDict) -> Result<Vec<ClassDict>, EnsembleError> {
    Ok(dict.get_typed::<Vec<ClassDict>>("estimators_")?)
}

/// `sklearn.ensemble.RandomForestRegressor`.
///
/// The prediction is the mean of the tree predictions.
#[derive(Debug, Clone, PartialEq)]
pub struct RandomForestRegressor {
    dict: ClassDict,
}

impl RandomForestRegressor {
    pub const METHOD: MultipleModelMethod = MultipleModelMethod::Average;
    pub const FUNCTION: MiningFunction = MiningFunction::Regression;

    pub fn new(dict: ClassDict) -> Self {
        Self { dict }
    }

    pub fn dict(&self) -> &ClassDict {
        &self.dict
    }

    pub fn estimators(&self) -> Result<Vec<ClassDict>, EnsembleError> {
        estimators(&self.dict)
    }

    /// Encodes every tree with `tree_encoder` and averages them.
    pub fn encode_model<E: TreeEncoder>(
        &self,
        encoder: &EnsembleEncoder,
        tree_encoder: &E,
        fields: Vec<DataField>,
    ) -> Result<EnsembleModel<E::Model>, EnsembleError> {
        encoder.encode_trees(
            tree_encoder,
            &self.estimators()?,
            None,
            Self::METHOD,
            Self::FUNCTION,
            fields,
        )
    }
}

/// `sklearn.ensemble.ExtraTreesRegressor`. Encodes exactly like
/// [`RandomForestRegressor`]; only the tree induction differs.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtraTreesRegressor {
    inner: RandomForestRegressor,
}

impl ExtraTreesRegressor {
    pub fn new(dict: ClassDict) -> Self {
        Self {
            inner: RandomForestRegressor::new(dict),
        }
    }

    pub fn dict(&self) -> &ClassDict {
        self.inner.dict()
    }

    pub fn estimators(&self) -> Result<Vec<ClassDict>, EnsembleError> {
        self.inner.estimators()
    }

    pub fn encode_model<E: TreeEncoder>(
        &self,
        encoder: &EnsembleEncoder,
        tree_encoder: &E,
        fields: Vec<DataField>,
    ) -> Result<EnsembleModel<E::Model>, EnsembleError> {
        self.inner.encode_model(encoder, tree_encoder, fields)
    }
}

/// `sklearn.ensemble.RandomForestClassifier`.
///
/// Trees emit class probabilities; the forest averages them.
#[derive(Debug, Clone, PartialEq)]
pub struct RandomForestClassifier {
    dict: ClassDict,
}

impl RandomForestClassifier {
    pub const METHOD: MultipleModelMethod = MultipleModelMethod::Average;
    pub const FUNCTION: MiningFunction = MiningFunction::Classification;

    pub fn new(dict: ClassDict) -> Self {
        Self { dict }
    }

    pub fn dict(&self) -> &ClassDict {
        &self.dict
    }

    pub fn estimators(&self) -> Result<Vec<ClassDict>, EnsembleError> {
        estimators(&self.dict)
    }

    /// Class labels from the `classes_` array, in label order.
    pub fn classes(&self) -> Result<Vec<NumpyScalar>, EnsembleError> {
        let array = NdArray::new(self.dict.get_typed::<ClassDict>("classes_")?);
        Ok(array.content()?)
    }

    /// A categorical target field whose values are the class labels.
    pub fn target_field(&self, name: impl Into<String>) -> Result<DataField, EnsembleError> {
        let classes = self.classes()?;
        let data_type = match classes.first() {
            Some(NumpyScalar::Float(_)) => DataType::Double,
            Some(NumpyScalar::Bool(_)) => DataType::Boolean,
            _ => DataType::Integer,
        };
        let values = classes.iter().map(NumpyScalar::to_string).collect();
        Ok(DataField::categorical(name, data_type, values))
    }

    pub fn encode_model<E: TreeEncoder>(
        &self,
        encoder: &EnsembleEncoder,
        tree_encoder: &E,
        fields: Vec<DataField>,
    ) -> Result<EnsembleModel<E::Model>, EnsembleError> {
        encoder.encode_trees(
            tree_encoder,
            &self.estimators()?,
            None,
            Self::METHOD,
            Self::FUNCTION,
            fields,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skpmml_classdict::{AttributeValue, DictError};

    #[test]
    fn estimators_must_be_objects() {
        let forest = RandomForestRegressor::new(
            ClassDict::from_attributes(
                "sklearn.ensemble.forest",
                "RandomForestRegressor",
                [("estimators_", AttributeValue::List(vec![AttributeValue::Int(1)]))],
            )
            .unwrap(),
        );
        assert!(matches!(
            forest.estimators(),
            Err(EnsembleError::Attribute(DictError::TypeMismatch { .. }))
        ));
    }

    #[test]
    fn missing_classes() {
        let forest = RandomForestClassifier::new(
            ClassDict::from_attributes(
                "sklearn.ensemble.forest",
                "RandomForestClassifier",
                [("estimators_", AttributeValue::List(Vec::new()))],
            )
            .unwrap(),
        );
        assert!(matches!(
            forest.classes(),
            Err(EnsembleError::Attribute(DictError::MissingAttribute { .. }))
        ));
    }
}
