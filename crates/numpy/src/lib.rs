//! NumPy type descriptors, buffer decoding and scalar/array facets.
//!
//! - [`TypeDescriptor`] - parsed array-protocol descriptor (`<f8`, `>i4`, `|b1`)
//! - [`BufferDecoder`] - decodes raw bytes into [`NumpyScalar`] elements
//! - [`ScalarValue`] - `numpy.core.multiarray.scalar` over a [`ClassDict`]
//! - [`NdArray`] - array facet over a [`ClassDict`]
//! - [`read_npy`] - the `.npy` container
//!
//! # Example
//!
//! ```
//! use skpmml_numpy::{decode, NumpyScalar, TypeDescriptor};
//!
//! let descriptor: TypeDescriptor = "<f8".parse().unwrap();
//! let values = decode(&descriptor, &3.5f64.to_le_bytes(), 1).unwrap();
//! assert_eq!(values, [NumpyScalar::Float(3.5)]);
//! ```
//!
//! [`ClassDict`]: skpmml_classdict::ClassDict

mod decode;
mod dtype;
mod error;
mod ndarray;
mod npy;
mod scalar;
mod value;

pub use decode::{decode, BufferDecoder};
pub use dtype::{ByteOrder, Kind, TypeDescriptor};
pub use error::{NumpyError, ScalarDecodeError};
pub use ndarray::NdArray;
pub use npy::{read_npy, NpyArray};
pub use scalar::{ScalarValue, SCALAR_INIT_ATTRIBUTES};
pub use value::NumpyScalar;
