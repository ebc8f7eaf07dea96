//! The attribute dictionary backing every deserialized host object.

use indexmap::IndexMap;
use tracing::trace;

use crate::{AttributeError, AttributeValue, DictError, FromAttribute};

/// Named attributes of one deserialized host object.
///
/// The deserializer writes the attributes exactly once through
/// [`ClassDict::populate`] (or [`ClassDict::init_attributes`] for objects
/// rebuilt from positional constructor arguments). Everything after that is
/// read-only access through [`ClassDict::get`] and [`ClassDict::get_typed`].
#[derive(Debug, Clone, PartialEq)]
pub struct ClassDict {
    module: String,
    name: String,
    attributes: IndexMap<String, AttributeValue>,
    populated: bool,
}

impl ClassDict {
    /// Creates an empty, not yet populated dictionary for `module.name`.
    pub fn new(module: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            name: name.into(),
            attributes: IndexMap::new(),
            populated: false,
        }
    }

    /// Creates and populates a dictionary in one step.
    pub fn from_attributes<I, K>(
        module: impl Into<String>,
        name: impl Into<String>,
        attributes: I,
    ) -> Result<Self, DictError>
    where
        I: IntoIterator<Item = (K, AttributeValue)>,
        K: Into<String>,
    {
        let mut dict = Self::new(module, name);
        dict.populate(attributes)?;
        Ok(dict)
    }

    pub fn module(&self) -> &str {
        &self.module
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Fully qualified class name, e.g. `numpy.core.multiarray.scalar`.
    pub fn class_name(&self) -> String {
        format!("{}.{}", self.module, self.name)
    }

    pub fn is_populated(&self) -> bool {
        self.populated
    }

    /// Writes the attributes. Only the first call succeeds.
    pub fn populate<I, K>(&mut self, attributes: I) -> Result<(), DictError>
    where
        I: IntoIterator<Item = (K, AttributeValue)>,
        K: Into<String>,
    {
        if self.populated {
            return Err(DictError::AlreadyPopulated {
                class: self.class_name(),
                name: None,
            });
        }
        let mut staged = IndexMap::new();
        for (key, value) in attributes {
            let key = key.into();
            if staged.contains_key(&key) {
                return Err(DictError::AlreadyPopulated {
                    class: self.class_name(),
                    name: Some(key),
                });
            }
            staged.insert(key, value);
        }
        trace!(class = %self.class_name(), count = staged.len(), "populated class dict");
        self.attributes = staged;
        self.populated = true;
        Ok(())
    }

    /// Populates from positional constructor arguments, pairing each name in
    /// `names` with the argument at the same position.
    pub fn init_attributes(
        &mut self,
        names: &[&str],
        args: Vec<AttributeValue>,
    ) -> Result<(), DictError> {
        if names.len() != args.len() {
            return Err(DictError::ArgumentCount {
                class: self.class_name(),
                expected: names.len(),
                actual: args.len(),
            });
        }
        self.populate(names.iter().copied().zip(args))
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    /// Attribute names in population order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.attributes.keys().map(String::as_str)
    }

    pub fn get(&self, name: &str) -> Result<&AttributeValue, DictError> {
        self.attributes
            .get(name)
            .ok_or_else(|| DictError::MissingAttribute {
                class: self.class_name(),
                name: name.to_string(),
            })
    }

    pub fn get_typed<T: FromAttribute>(&self, name: &str) -> Result<T, DictError> {
        let value = self.get(name)?;
        self.convert(name, value)
    }

    /// Borrows a bytes attribute without copying it.
    pub fn get_bytes(&self, name: &str) -> Result<&[u8], DictError> {
        match self.get(name)? {
            AttributeValue::Bytes(bytes) => Ok(bytes),
            other => Err(DictError::TypeMismatch {
                class: self.class_name(),
                name: name.to_string(),
                expected: "bytes".to_string(),
                actual: other.kind().to_string(),
            }),
        }
    }

    /// Like [`ClassDict::get_typed`], but an absent or `None` attribute is
    /// `Ok(None)`.
    pub fn get_optional<T: FromAttribute>(&self, name: &str) -> Result<Option<T>, DictError> {
        match self.attributes.get(name) {
            None | Some(AttributeValue::None) => Ok(None),
            Some(value) => self.convert(name, value).map(Some),
        }
    }

    fn convert<T: FromAttribute>(&self, name: &str, value: &AttributeValue) -> Result<T, DictError> {
        T::from_attribute(value).map_err(|err| match err {
            AttributeError::Shape { actual } => DictError::TypeMismatch {
                class: self.class_name(),
                name: name.to_string(),
                expected: T::expected().into_owned(),
                actual: actual.into_owned(),
            },
            AttributeError::Invalid(source) => DictError::InvalidValue {
                class: self.class_name(),
                name: name.to_string(),
                source,
            },
        })
    }
}
