//! Which aggregation methods each mining function accepts.

use std::collections::{BTreeMap, BTreeSet};

use serde::Deserialize;
use skpmml_pmml::{MiningFunction, MultipleModelMethod};

use crate::PolicyError;

/// Compatibility table between mining functions and aggregation methods.
///
/// A mining function missing from the table accepts no method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregationPolicy {
    table: BTreeMap<MiningFunction, BTreeSet<MultipleModelMethod>>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PolicyFile {
    compatibility: BTreeMap<MiningFunction, Vec<MultipleModelMethod>>,
}

fn with_weighted(methods: &[MultipleModelMethod]) -> BTreeSet<MultipleModelMethod> {
    methods
        .iter()
        .flat_map(|&m| std::iter::once(m).chain(m.weighted()))
        .collect()
}

impl Default for AggregationPolicy {
    /// Regression: average, sum, median. Classification: majority vote and
    /// probability averaging. Each method also admits its weighted form.
    fn default() -> Self {
        use MultipleModelMethod::*;
        let mut table = BTreeMap::new();
        table.insert(
            MiningFunction::Regression,
            with_weighted(&[Average, Sum, Median]),
        );
        table.insert(
            MiningFunction::Classification,
            with_weighted(&[MajorityVote, Average]),
        );
        Self { table }
    }
}

impl AggregationPolicy {
    /// A table with no entries; nothing is compatible.
    pub fn empty() -> Self {
        Self {
            table: BTreeMap::new(),
        }
    }

    /// Accepts every method for every mining function.
    pub fn permissive() -> Self {
        let all: BTreeSet<_> = MultipleModelMethod::ALL.into_iter().collect();
        Self {
            table: MiningFunction::ALL
                .into_iter()
                .map(|f| (f, all.clone()))
                .collect(),
        }
    }

    /// Loads a table from TOML:
    ///
    /// ```toml
    /// [compatibility]
    /// regression = ["average", "sum", "median"]
    /// classification = ["majorityVote", "average"]
    /// ```
    pub fn from_toml_str(source: &str) -> Result<Self, PolicyError> {
        let file: PolicyFile = toml::from_str(source)?;
        Ok(Self {
            table: file
                .compatibility
                .into_iter()
                .map(|(function, methods)| (function, methods.into_iter().collect()))
                .collect(),
        })
    }

    /// Replaces the accepted methods for one mining function.
    pub fn with(
        mut self,
        function: MiningFunction,
        methods: impl IntoIterator<Item = MultipleModelMethod>,
    ) -> Self {
        self.table.insert(function, methods.into_iter().collect());
        self
    }

    pub fn allows(&self, method: MultipleModelMethod, function: MiningFunction) -> bool {
        self.table
            .get(&function)
            .is_some_and(|methods| methods.contains(&method))
    }

    pub fn methods(&self, function: MiningFunction) -> impl Iterator<Item = MultipleModelMethod> + '_ {
        self.table.get(&function).into_iter().flatten().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use MiningFunction::*;
    use MultipleModelMethod::*;

    #[test]
    fn default_table() {
        let policy = AggregationPolicy::default();
        for method in [Average, Sum, Median, WeightedAverage, WeightedSum, WeightedMedian] {
            assert!(policy.allows(method, Regression), "{method}");
        }
        assert!(!policy.allows(MajorityVote, Regression));
        assert!(policy.allows(MajorityVote, Classification));
        assert!(policy.allows(Average, Classification));
        assert!(!policy.allows(Sum, Classification));
        assert!(!policy.allows(SelectFirst, Regression));
    }

    #[test]
    fn toml_override() {
        let policy = AggregationPolicy::from_toml_str(
            r#"
            [compatibility]
            regression = ["max"]
            "#,
        )
        .unwrap();
        assert!(policy.allows(Max, Regression));
        assert!(!policy.allows(Average, Regression));
        assert!(!policy.allows(MajorityVote, Classification));
        assert_eq!(policy.methods(Classification).count(), 0);
    }

    #[test]
    fn toml_rejects_unknown_tokens() {
        assert!(AggregationPolicy::from_toml_str(
            "[compatibility]\nregression = [\"AVERAGE\"]\n"
        )
        .is_err());
        assert!(AggregationPolicy::from_toml_str(
            "[compatibility]\nclustering = [\"average\"]\n"
        )
        .is_err());
        assert!(AggregationPolicy::from_toml_str("[weights]\n").is_err());
    }

    #[test]
    fn permissive_and_empty() {
        assert!(AggregationPolicy::permissive().allows(MajorityVote, Regression));
        assert!(!AggregationPolicy::empty().allows(Average, Regression));
        let policy = AggregationPolicy::empty().with(Regression, [Sum]);
        assert!(policy.allows(Sum, Regression));
    }
}
