//! Multi-element arrays reconstructed from a pickle state.

use skpmml_classdict::ClassDict;

use crate::{BufferDecoder, NumpyError, NumpyScalar, TypeDescriptor};

/// A NumPy array facet over its attribute dictionary.
///
/// Expects `shape` (list of ints), `dtype` and `data` (raw bytes).
/// `fortran_order` is optional and defaults to `false`.
#[derive(Debug, Clone, PartialEq)]
pub struct NdArray {
    dict: ClassDict,
    decoder: BufferDecoder,
}

impl NdArray {
    pub fn new(dict: ClassDict) -> Self {
        Self {
            dict,
            decoder: BufferDecoder::new(),
        }
    }

    pub fn dict(&self) -> &ClassDict {
        &self.dict
    }

    pub fn shape(&self) -> Result<Vec<usize>, NumpyError> {
        Ok(self.dict.get_typed::<Vec<usize>>("shape")?)
    }

    pub fn dtype(&self) -> Result<TypeDescriptor, NumpyError> {
        Ok(self.dict.get_typed::<TypeDescriptor>("dtype")?)
    }

    pub fn is_fortran_order(&self) -> Result<bool, NumpyError> {
        Ok(self
            .dict
            .get_optional::<bool>("fortran_order")?
            .unwrap_or(false))
    }

    /// Number of elements. A zero-dimensional array holds one.
    pub fn len(&self) -> Result<usize, NumpyError> {
        element_count(&self.shape()?)
    }

    pub fn is_empty(&self) -> Result<bool, NumpyError> {
        Ok(self.len()? == 0)
    }

    /// Decodes every element in storage order.
    pub fn content(&self) -> Result<Vec<NumpyScalar>, NumpyError> {
        let dtype = self.dtype()?;
        let count = self.len()?;
        let data = self.dict.get_bytes("data")?;
        self.decoder.decode(&dtype, data, count)
    }

    pub fn content_f64(&self) -> Result<Vec<f64>, NumpyError> {
        Ok(self.content()?.iter().map(NumpyScalar::as_f64).collect())
    }
}

pub(crate) fn element_count(shape: &[usize]) -> Result<usize, NumpyError> {
    shape
        .iter()
        .try_fold(1usize, |acc, &dim| acc.checked_mul(dim))
        .ok_or_else(|| NumpyError::InvalidShape {
            shape: shape.to_vec(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use skpmml_classdict::AttributeValue;

    fn array(shape: &[i64], dtype: &str, data: Vec<u8>) -> NdArray {
        let shape = shape.iter().map(|&d| AttributeValue::Int(d)).collect();
        NdArray::new(
            ClassDict::from_attributes(
                "numpy",
                "ndarray",
                [
                    ("shape", AttributeValue::List(shape)),
                    ("dtype", AttributeValue::from(dtype)),
                    ("data", AttributeValue::Bytes(data)),
                ],
            )
            .unwrap(),
        )
    }

    #[test]
    fn two_by_two_int_matrix() {
        let data: Vec<u8> = [1i32, 2, 3, 4].iter().flat_map(|v| v.to_le_bytes()).collect();
        let a = array(&[2, 2], "<i4", data);
        assert_eq!(a.len().unwrap(), 4);
        assert!(!a.is_fortran_order().unwrap());
        assert_eq!(
            a.content().unwrap(),
            [1, 2, 3, 4].map(NumpyScalar::Int)
        );
    }

    #[test]
    fn zero_dimensional_holds_one_element() {
        let a = array(&[], "<f8", 2.0f64.to_le_bytes().to_vec());
        assert_eq!(a.len().unwrap(), 1);
        assert_eq!(a.content_f64().unwrap(), [2.0]);
    }

    #[test]
    fn empty_dimension() {
        let a = array(&[3, 0], "<f8", Vec::new());
        assert!(a.is_empty().unwrap());
        assert!(a.content().unwrap().is_empty());
    }

    #[test]
    fn data_shorter_than_shape() {
        let a = array(&[3], "<f8", vec![0; 16]);
        assert!(matches!(
            a.content(),
            Err(NumpyError::TruncatedBuffer { .. })
        ));
    }

    #[test]
    fn negative_dimension_is_invalid_value() {
        let a = array(&[-1], "<f8", Vec::new());
        assert!(matches!(
            a.shape(),
            Err(NumpyError::Attribute(skpmml_classdict::DictError::InvalidValue { .. }))
        ));
    }

    #[test]
    fn shape_overflow() {
        assert!(matches!(
            element_count(&[usize::MAX, 2]),
            Err(NumpyError::InvalidShape { .. })
        ));
    }
}
