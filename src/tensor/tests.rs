#[cfg(test)]
mod tests {
    use crate::error::OptionsError;
    use crate::tensor::Tensor;
    use approx::assert_relative_eq;
    use ndarray::{ArrayD, IxDyn};

    #[test]
    fn test_tensor_from_vec() {
        let tensor = Tensor::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], &[2, 3]).unwrap();
        assert_eq!(tensor.shape(), &[2, 3]);
        assert_eq!(tensor.ndim(), 2);
        assert_eq!(tensor.len(), 6);
        assert!(!tensor.is_empty());
        assert_relative_eq!(tensor.data().as_slice().unwrap()[5], 6.0);
    }

    #[test]
    fn test_tensor_from_vec_shape_mismatch() {
        let err = Tensor::from_vec(vec![1.0, 2.0, 3.0], &[2, 2]).unwrap_err();
        match err {
            OptionsError::InvalidArgument { argument, value, .. } => {
                assert_eq!(argument, "shape");
                assert_eq!(value, "[2, 2]");
            }
        }
    }

    #[test]
    fn test_tensor_from_vec_shape_overflow() {
        let err = Tensor::<f64>::from_vec(vec![], &[usize::MAX, 2]).unwrap_err();
        assert_eq!(err.argument(), "shape");
        assert!(err.to_string().contains("overflows"));
    }

    #[test]
    fn test_tensor_ones() {
        let ones = Tensor::<f64>::ones(&[4]);
        assert_eq!(ones.shape(), &[4]);
        assert!(ones.data().iter().all(|&w| w == 1.0));
    }

    #[test]
    fn test_clone_shares_buffer() {
        let weight = Tensor::from_vec(vec![0.5, 2.0], &[2]).unwrap();
        let shared = weight.clone();
        assert!(weight.same_buffer(&shared));

        // Equal values in a separate allocation are equal but not the same buffer
        let copy = Tensor::from_vec(vec![0.5, 2.0], &[2]).unwrap();
        assert_eq!(weight, copy);
        assert!(!weight.same_buffer(&copy));
    }

    #[test]
    fn test_tensor_equality_checks_shape() {
        let row = Tensor::from_vec(vec![1.0, 2.0], &[1, 2]).unwrap();
        let flat = Tensor::from_vec(vec![1.0, 2.0], &[2]).unwrap();
        assert_ne!(row, flat);
    }

    #[test]
    fn test_tensor_from_array_and_display() {
        let array = ArrayD::<f32>::zeros(IxDyn(&[3, 1]));
        let tensor = Tensor::from_array(array);
        assert_eq!(tensor.to_string(), "Tensor(shape=[3, 1])");
    }

    #[test]
    fn test_empty_tensor() {
        let empty = Tensor::<f64>::from_vec(vec![], &[0]).unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_tensor_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Tensor<f64>>();
    }
}
