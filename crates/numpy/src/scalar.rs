//! `numpy.core.multiarray.scalar`: a single value stored as raw bytes.

use std::fmt;

use skpmml_classdict::{AttributeValue, ClassDict, DictError};

use crate::{BufferDecoder, NumpyError, NumpyScalar, ScalarDecodeError, TypeDescriptor};

/// Positional constructor arguments of a pickled scalar.
pub const SCALAR_INIT_ATTRIBUTES: [&str; 2] = ["dtype", "obj"];

/// A NumPy scalar: a `dtype` plus the raw bytes of exactly one element.
///
/// Decoding happens on every call to [`ScalarValue::value`]. Nothing is
/// cached, so repeated calls see the same stored bytes and return equal
/// values.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarValue {
    dict: ClassDict,
    decoder: BufferDecoder,
}

impl ScalarValue {
    pub fn new(dict: ClassDict) -> Self {
        Self {
            dict,
            decoder: BufferDecoder::new(),
        }
    }

    /// Rebuilds a scalar from its `(dtype, obj)` constructor arguments.
    pub fn from_init_args(
        module: impl Into<String>,
        name: impl Into<String>,
        args: Vec<AttributeValue>,
    ) -> Result<Self, DictError> {
        let mut dict = ClassDict::new(module, name);
        dict.init_attributes(&SCALAR_INIT_ATTRIBUTES, args)?;
        Ok(Self::new(dict))
    }

    pub fn dict(&self) -> &ClassDict {
        &self.dict
    }

    pub fn dtype(&self) -> Result<TypeDescriptor, NumpyError> {
        Ok(self.dict.get_typed::<TypeDescriptor>("dtype")?)
    }

    pub fn value(&self) -> Result<NumpyScalar, ScalarDecodeError> {
        self.decode().map_err(|cause| ScalarDecodeError {
            class: self.dict.class_name(),
            cause,
        })
    }

    fn decode(&self) -> Result<NumpyScalar, NumpyError> {
        let dtype = self.dtype()?;
        let obj = self.dict.get_bytes("obj")?;
        let values = self.decoder.decode(&dtype, obj, 1)?;
        values
            .into_iter()
            .next()
            .ok_or(NumpyError::TruncatedBuffer {
                item_size: dtype.item_size(),
                count: Some(1),
                actual: obj.len(),
            })
    }
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value() {
            Ok(value) => value.fmt(f),
            Err(err) => write!(f, "<invalid scalar: {}>", err.cause),
        }
    }
}
