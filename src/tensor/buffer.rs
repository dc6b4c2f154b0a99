use crate::error::{OptionsError, Result};
use ndarray::{ArrayD, IxDyn};
use std::fmt;
use std::sync::Arc;

/// Shared, read-only handle over a numeric buffer.
///
/// Loss options only ever hold a reference to the rescaling weights a kernel
/// will read, so cloning a `Tensor` shares the underlying `ndarray` storage
/// instead of copying it. Two handles compare equal when their shapes and
/// values match; use [`Tensor::same_buffer`] to test identity.
#[derive(Debug)]
pub struct Tensor<T = f64> {
    data: Arc<ArrayD<T>>,
}

impl<T> Clone for Tensor<T> {
    fn clone(&self) -> Self {
        Self {
            data: Arc::clone(&self.data),
        }
    }
}

impl<T> Tensor<T> {
    /// Wraps an existing array without copying it.
    pub fn from_array(data: ArrayD<T>) -> Self {
        Self {
            data: Arc::new(data),
        }
    }

    /// Creates a tensor from a flat vector laid out in row-major order.
    ///
    /// Fails with `InvalidArgument` on `shape` when the element count does not
    /// match the requested shape or the shape's element count overflows.
    pub fn from_vec(data: Vec<T>, shape: &[usize]) -> Result<Self> {
        let total_elements = shape
            .iter()
            .try_fold(1usize, |acc, &dim| acc.checked_mul(dim))
            .ok_or_else(|| {
                OptionsError::invalid_argument(
                    "shape",
                    format!("{shape:?}"),
                    "element count overflows usize",
                )
            })?;
        if data.len() != total_elements {
            return Err(OptionsError::invalid_argument(
                "shape",
                format!("{shape:?}"),
                format!(
                    "data length {} doesn't match shape (expected {})",
                    data.len(),
                    total_elements
                ),
            ));
        }

        ArrayD::from_shape_vec(IxDyn(shape), data)
            .map(Self::from_array)
            .map_err(|e| {
                OptionsError::invalid_argument("shape", format!("{shape:?}"), e.to_string())
            })
    }

    /// Creates a tensor of the given shape with every element set to `value`.
    pub fn full(shape: &[usize], value: T) -> Self
    where
        T: Clone,
    {
        Self::from_array(ArrayD::from_elem(IxDyn(shape), value))
    }

    pub fn shape(&self) -> &[usize] {
        self.data.shape()
    }

    pub fn ndim(&self) -> usize {
        self.data.ndim()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Borrow the underlying array.
    pub fn data(&self) -> &ArrayD<T> {
        &self.data
    }

    /// True when both handles point at the very same buffer.
    pub fn same_buffer(&self, other: &Tensor<T>) -> bool {
        Arc::ptr_eq(&self.data, &other.data)
    }
}

impl<T: Clone + From<u8>> Tensor<T> {
    /// All-ones tensor, the implicit value of an unset class weight.
    pub fn ones(shape: &[usize]) -> Self {
        Self::full(shape, T::from(1))
    }
}

impl<T: PartialEq> PartialEq for Tensor<T> {
    fn eq(&self, other: &Self) -> bool {
        self.same_buffer(other) || *self.data == *other.data
    }
}

impl<T> fmt::Display for Tensor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tensor(shape={:?})", self.shape())
    }
}
