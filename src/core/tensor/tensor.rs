//! 연산자들이 주고받는 f32 텐서

use crate::core::errors::{format_shape, OperatorError, OperatorResult};
use ndarray::{Array1, Array2, Axis, CowArray, Ix2};
use std::fmt;

/// 스칼라, 벡터(n), 행렬(n×m) 중 하나인 밀집 f32 배열
///
/// 연산자는 입력을 변경하지 않고 항상 새 텐서를 할당한다.
#[derive(Debug, Clone, PartialEq)]
pub enum Tensor {
    Scalar(f32),
    Vector(Array1<f32>),
    Matrix(Array2<f32>),
}

impl Tensor {
    pub fn zeros_vector(n: usize) -> Self {
        Tensor::Vector(Array1::zeros(n))
    }

    pub fn zeros_matrix(rows: usize, cols: usize) -> Self {
        Tensor::Matrix(Array2::zeros((rows, cols)))
    }

    pub fn rank(&self) -> usize {
        match self {
            Tensor::Scalar(_) => 0,
            Tensor::Vector(_) => 1,
            Tensor::Matrix(_) => 2,
        }
    }

    /// 전체 형상. 스칼라는 빈 형상
    pub fn shape(&self) -> Vec<usize> {
        match self {
            Tensor::Scalar(_) => vec![],
            Tensor::Vector(v) => vec![v.len()],
            Tensor::Matrix(m) => vec![m.nrows(), m.ncols()],
        }
    }

    /// 행 수. 스칼라는 1×1로 본다
    pub fn rows(&self) -> usize {
        match self {
            Tensor::Scalar(_) => 1,
            Tensor::Vector(v) => v.len(),
            Tensor::Matrix(m) => m.nrows(),
        }
    }

    /// 열 수. 벡터는 열 하나짜리로 본다
    pub fn cols(&self) -> usize {
        match self {
            Tensor::Scalar(_) | Tensor::Vector(_) => 1,
            Tensor::Matrix(m) => m.ncols(),
        }
    }

    /// 원소 개수
    pub fn len(&self) -> usize {
        match self {
            Tensor::Scalar(_) => 1,
            Tensor::Vector(v) => v.len(),
            Tensor::Matrix(m) => m.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_scalar(&self) -> bool {
        matches!(self, Tensor::Scalar(_))
    }

    pub fn sum(&self) -> f32 {
        match self {
            Tensor::Scalar(s) => *s,
            Tensor::Vector(v) => v.sum(),
            Tensor::Matrix(m) => m.sum(),
        }
    }

    /// 모든 원소에 `f`를 적용한 새 텐서
    pub fn map<F>(&self, f: F) -> Tensor
    where
        F: Fn(f32) -> f32,
    {
        match self {
            Tensor::Scalar(s) => Tensor::Scalar(f(*s)),
            Tensor::Vector(v) => Tensor::Vector(v.mapv(f)),
            Tensor::Matrix(m) => Tensor::Matrix(m.mapv(f)),
        }
    }

    /// 행렬 관점의 뷰. 벡터는 n×1 열, 스칼라는 1×1
    pub(crate) fn as_matrix(&self) -> CowArray<'_, f32, Ix2> {
        match self {
            Tensor::Scalar(s) => CowArray::from(Array2::from_elem((1, 1), *s)),
            Tensor::Vector(v) => CowArray::from(v.view().insert_axis(Axis(1))),
            Tensor::Matrix(m) => CowArray::from(m.view()),
        }
    }

    pub fn as_vector(&self) -> Option<&Array1<f32>> {
        match self {
            Tensor::Vector(v) => Some(v),
            _ => None,
        }
    }

    /// 벡터로 꺼낸다. 열이 하나인 행렬도 벡터로 받아들인다
    pub fn into_vector(self) -> OperatorResult<Array1<f32>> {
        match self {
            Tensor::Vector(v) => Ok(v),
            Tensor::Matrix(m) if m.ncols() == 1 => Ok(m.index_axis_move(Axis(1), 0)),
            other => Err(OperatorError::NotAVector { shape: other.shape() }),
        }
    }
}

impl From<f32> for Tensor {
    fn from(value: f32) -> Self {
        Tensor::Scalar(value)
    }
}

impl From<Vec<f32>> for Tensor {
    fn from(values: Vec<f32>) -> Self {
        Tensor::Vector(Array1::from(values))
    }
}

impl From<Array1<f32>> for Tensor {
    fn from(values: Array1<f32>) -> Self {
        Tensor::Vector(values)
    }
}

impl From<Array2<f32>> for Tensor {
    fn from(values: Array2<f32>) -> Self {
        Tensor::Matrix(values)
    }
}

// f64 입력은 f32로 강제 변환
impl From<Array1<f64>> for Tensor {
    fn from(values: Array1<f64>) -> Self {
        Tensor::Vector(values.mapv(|v| v as f32))
    }
}

impl From<Array2<f64>> for Tensor {
    fn from(values: Array2<f64>) -> Self {
        Tensor::Matrix(values.mapv(|v| v as f32))
    }
}

impl fmt::Display for Tensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tensor{} ", format_shape(&self.shape()))?;
        match self {
            Tensor::Scalar(s) => write!(f, "{}", s),
            Tensor::Vector(v) => write!(f, "{}", v),
            Tensor::Matrix(m) => write!(f, "{}", m),
        }
    }
}
