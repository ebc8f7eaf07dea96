//! Write-once attribute dictionaries for deserialized scikit-learn objects.
//!
//! An external deserializer turns each pickled host object into a
//! [`ClassDict`]: the object's class name plus a flat bag of named
//! [`AttributeValue`]s. Model facets (scalars, arrays, estimators) are thin
//! wrappers that own a `ClassDict` and read typed attributes out of it with
//! [`ClassDict::get_typed`].
//!
//! ```
//! use skpmml_classdict::{AttributeValue, ClassDict};
//!
//! let dict = ClassDict::from_attributes(
//!     "sklearn.ensemble.forest",
//!     "RandomForestRegressor",
//!     [("n_estimators", AttributeValue::Int(10))],
//! )
//! .unwrap();
//! assert_eq!(dict.get_typed::<i64>("n_estimators").unwrap(), 10);
//! assert!(dict.get_typed::<String>("n_estimators").is_err());
//! ```

mod dict;
mod error;
mod value;

pub use dict::ClassDict;
pub use error::DictError;
pub use value::{AttributeError, AttributeValue, FromAttribute};
