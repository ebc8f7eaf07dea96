//! PMML enumeration tokens.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::PmmlError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OpType {
    Continuous,
    Categorical,
    Ordinal,
}

impl OpType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Continuous => "continuous",
            Self::Categorical => "categorical",
            Self::Ordinal => "ordinal",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DataType {
    Double,
    Float,
    Integer,
    String,
    Boolean,
}

impl DataType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Double => "double",
            Self::Float => "float",
            Self::Integer => "integer",
            Self::String => "string",
            Self::Boolean => "boolean",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldUsage {
    Active,
    Target,
    Predicted,
}

impl FieldUsage {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Target => "target",
            Self::Predicted => "predicted",
        }
    }
}

/// The kind of prediction a model makes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MiningFunction {
    Regression,
    Classification,
}

impl MiningFunction {
    pub const ALL: [MiningFunction; 2] = [Self::Regression, Self::Classification];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Regression => "regression",
            Self::Classification => "classification",
        }
    }
}

impl fmt::Display for MiningFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MiningFunction {
    type Err = PmmlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| PmmlError::UnknownToken {
                kind: "mining function",
                token: s.to_string(),
            })
    }
}

/// How segment outputs combine into one prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MultipleModelMethod {
    Average,
    WeightedAverage,
    Median,
    WeightedMedian,
    Sum,
    WeightedSum,
    MajorityVote,
    WeightedMajorityVote,
    Max,
    SelectFirst,
    SelectAll,
    ModelChain,
}

impl MultipleModelMethod {
    pub const ALL: [MultipleModelMethod; 12] = [
        Self::Average,
        Self::WeightedAverage,
        Self::Median,
        Self::WeightedMedian,
        Self::Sum,
        Self::WeightedSum,
        Self::MajorityVote,
        Self::WeightedMajorityVote,
        Self::Max,
        Self::SelectFirst,
        Self::SelectAll,
        Self::ModelChain,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Average => "average",
            Self::WeightedAverage => "weightedAverage",
            Self::Median => "median",
            Self::WeightedMedian => "weightedMedian",
            Self::Sum => "sum",
            Self::WeightedSum => "weightedSum",
            Self::MajorityVote => "majorityVote",
            Self::WeightedMajorityVote => "weightedMajorityVote",
            Self::Max => "max",
            Self::SelectFirst => "selectFirst",
            Self::SelectAll => "selectAll",
            Self::ModelChain => "modelChain",
        }
    }

    /// The weighted counterpart, if the method has one.
    pub fn weighted(self) -> Option<Self> {
        match self {
            Self::Average => Some(Self::WeightedAverage),
            Self::Median => Some(Self::WeightedMedian),
            Self::Sum => Some(Self::WeightedSum),
            Self::MajorityVote => Some(Self::WeightedMajorityVote),
            _ => None,
        }
    }
}

impl fmt::Display for MultipleModelMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MultipleModelMethod {
    type Err = PmmlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| PmmlError::UnknownToken {
                kind: "multiple model method",
                token: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_tokens_match_as_str() {
        for method in MultipleModelMethod::ALL {
            let json = serde_json::to_value(method).unwrap();
            assert_eq!(json, method.as_str());
            assert_eq!(method.as_str().parse::<MultipleModelMethod>().unwrap(), method);
        }
        for function in MiningFunction::ALL {
            assert_eq!(serde_json::to_value(function).unwrap(), function.as_str());
        }
        assert_eq!(serde_json::to_value(DataType::Double).unwrap(), DataType::Double.as_str());
    }

    #[test]
    fn unknown_tokens() {
        assert!("AVERAGE".parse::<MultipleModelMethod>().is_err());
        assert!("clustering".parse::<MiningFunction>().is_err());
    }
}
