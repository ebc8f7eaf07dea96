//! Fields, mining schema and segmentation.

use serde::Serialize;
use skpmml_numpy::NumpyScalar;

use crate::{DataType, FieldUsage, MiningFunction, MultipleModelMethod, OpType, PmmlError};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DataField {
    pub name: String,
    pub op_type: OpType,
    pub data_type: DataType,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<String>,
}

impl DataField {
    pub fn continuous(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            op_type: OpType::Continuous,
            data_type: DataType::Double,
            values: Vec::new(),
        }
    }

    pub fn categorical(name: impl Into<String>, data_type: DataType, values: Vec<String>) -> Self {
        Self {
            name: name.into(),
            op_type: OpType::Categorical,
            data_type,
            values,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DataDictionary {
    pub data_fields: Vec<DataField>,
}

impl DataDictionary {
    pub fn new(data_fields: Vec<DataField>) -> Result<Self, PmmlError> {
        for (i, field) in data_fields.iter().enumerate() {
            if data_fields[..i].iter().any(|f| f.name == field.name) {
                return Err(PmmlError::DuplicateField(field.name.clone()));
            }
        }
        Ok(Self { data_fields })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MiningField {
    pub name: String,
    pub usage_type: FieldUsage,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MiningSchema {
    pub mining_fields: Vec<MiningField>,
}

impl MiningSchema {
    /// The first field is the target, every other field is active.
    pub fn from_data_fields(fields: &[DataField]) -> Result<Self, PmmlError> {
        let (target, active) = fields.split_first().ok_or(PmmlError::NoFields)?;
        let mut mining_fields = Vec::with_capacity(fields.len());
        mining_fields.push(MiningField {
            name: target.name.clone(),
            usage_type: FieldUsage::Target,
        });
        mining_fields.extend(active.iter().map(|f| MiningField {
            name: f.name.clone(),
            usage_type: FieldUsage::Active,
        }));
        Ok(Self { mining_fields })
    }

    pub fn target(&self) -> Option<&MiningField> {
        self.mining_fields
            .iter()
            .find(|f| f.usage_type == FieldUsage::Target)
    }

    pub fn active(&self) -> impl Iterator<Item = &MiningField> {
        self.mining_fields
            .iter()
            .filter(|f| f.usage_type == FieldUsage::Active)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Predicate {
    True,
    False,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment<M> {
    pub id: usize,
    pub predicate: Predicate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    pub model: M,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Segmentation<M> {
    pub multiple_model_method: MultipleModelMethod,
    pub segments: Vec<Segment<M>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MiningModel<M> {
    pub mining_function: MiningFunction,
    pub mining_schema: MiningSchema,
    pub segmentation: Segmentation<M>,
}

/// A literal constant term.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Constant {
    pub value: String,
    pub data_type: DataType,
}

impl From<NumpyScalar> for Constant {
    fn from(scalar: NumpyScalar) -> Self {
        let data_type = match scalar {
            NumpyScalar::Int(_) | NumpyScalar::UInt(_) => DataType::Integer,
            NumpyScalar::Float(_) => DataType::Double,
            NumpyScalar::Bool(_) => DataType::Boolean,
        };
        Self {
            value: scalar.to_string(),
            data_type,
        }
    }
}
