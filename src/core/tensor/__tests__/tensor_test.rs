use crate::core::errors::OperatorError;
use crate::core::tensor::Tensor;
use ndarray::{array, Array1, Array2};

#[test]
fn 형상_조회_테스트() {
    let s = Tensor::Scalar(2.0);
    assert_eq!(s.rank(), 0);
    assert_eq!(s.shape(), Vec::<usize>::new());
    assert_eq!((s.rows(), s.cols(), s.len()), (1, 1, 1));

    let v = Tensor::from(vec![1.0f32, 2.0, 3.0]);
    assert_eq!(v.rank(), 1);
    assert_eq!(v.shape(), vec![3]);
    assert_eq!((v.rows(), v.cols()), (3, 1));

    let m = Tensor::zeros_matrix(4, 0);
    assert_eq!(m.shape(), vec![4, 0]);
    assert_eq!(m.len(), 0);
    assert!(m.is_empty());
}

#[test]
fn f64_입력은_f32로_변환() {
    let v = Tensor::from(array![0.5f64, -1.25]);
    assert_eq!(v, Tensor::Vector(array![0.5f32, -1.25]));

    let m = Tensor::from(Array2::<f64>::ones((2, 2)));
    assert_eq!(m, Tensor::Matrix(Array2::<f32>::ones((2, 2))));
}

#[test]
fn 열_하나짜리_행렬은_벡터로_꺼낼_수_있다() {
    let column = Tensor::Matrix(array![[1.0f32], [2.0]]);
    assert_eq!(column.into_vector().ok(), Some(array![1.0f32, 2.0]));

    let wide = Tensor::Matrix(Array2::<f32>::zeros((2, 3)));
    let e = wide.into_vector().unwrap_err();
    assert_eq!(e, OperatorError::NotAVector { shape: vec![2, 3] });
    assert!(e.to_string().contains("(2, 3)"));

    assert_eq!(
        Tensor::Scalar(1.0).into_vector(),
        Err(OperatorError::NotAVector { shape: vec![] })
    );

    let v = Tensor::Vector(Array1::from(vec![3.0f32]));
    assert_eq!(v.as_vector(), Some(&array![3.0f32]));
}

#[test]
fn 출력에_형상이_포함된다() {
    let v = Tensor::from(vec![1.0f32, 2.0]);
    assert!(v.to_string().starts_with("Tensor(2,)"));

    let m = Tensor::zeros_matrix(2, 3);
    assert!(m.to_string().starts_with("Tensor(2, 3)"));
}
