//! 원소별/행렬 연산자
//!
//! 원소별 이항 연산의 형상 규칙:
//! - 스칼라는 어떤 형상과도 결합된다
//! - 한쪽이라도 열이 하나면 두 피연산자의 행 수가 같아야 한다 (행 브로드캐스트)
//! - 그 외에는 전체 형상이 같아야 한다

use super::Tensor;
use crate::core::errors::{OperatorError, OperatorResult};
use ndarray::{Axis, Zip};

/// 원소별 덧셈
pub fn add(x: &Tensor, y: &Tensor) -> OperatorResult<Tensor> {
    elementwise(x, y, |a, b| a + b)
}

/// 원소별 뺄셈
pub fn sub(x: &Tensor, y: &Tensor) -> OperatorResult<Tensor> {
    elementwise(x, y, |a, b| a - b)
}

/// 원소별 곱셈
pub fn mul(x: &Tensor, y: &Tensor) -> OperatorResult<Tensor> {
    elementwise(x, y, |a, b| a * b)
}

/// 원소별 나눗셈. `0/0 = NaN`, `v/0 = ±Inf` (IEEE-754 그대로)
pub fn div(x: &Tensor, y: &Tensor) -> OperatorResult<Tensor> {
    elementwise(x, y, |a, b| a / b)
}

/// 원소별 거듭제곱. 지수는 스칼라라서 형상 검사가 없다
pub fn pow(x: &Tensor, exponent: f32) -> Tensor {
    x.map(|v| v.powf(exponent))
}

/// 행렬-벡터(행렬) 곱: `x`(p×q) · `y`(q×r) → p×r, r이 1이면 길이 p 벡터
pub fn matvec(x: &Tensor, y: &Tensor) -> OperatorResult<Tensor> {
    let left = x.as_matrix();
    let right = y.as_matrix();

    if left.ncols() != right.nrows() {
        return Err(OperatorError::DimensionMismatch {
            left_cols: left.ncols(),
            right_rows: right.nrows(),
        });
    }

    let product = left.dot(&right);
    if product.ncols() == 1 {
        Ok(Tensor::Vector(product.index_axis_move(Axis(1), 0)))
    } else {
        Ok(Tensor::Matrix(product))
    }
}

/// 두 피연산자가 형상 규칙상 결합 가능한지
pub fn broadcast_compatible(x: &Tensor, y: &Tensor) -> bool {
    if x.is_scalar() || y.is_scalar() {
        return true;
    }
    if x.cols() == 1 || y.cols() == 1 {
        x.rows() == y.rows()
    } else {
        x.shape() == y.shape()
    }
}

fn elementwise<F>(x: &Tensor, y: &Tensor, f: F) -> OperatorResult<Tensor>
where
    F: Fn(f32, f32) -> f32,
{
    let mismatch = || OperatorError::ShapeMismatch {
        left: x.shape(),
        right: y.shape(),
    };

    match (x, y) {
        (Tensor::Scalar(a), Tensor::Scalar(b)) => Ok(Tensor::Scalar(f(*a, *b))),
        (Tensor::Scalar(a), t) => Ok(t.map(|v| f(*a, v))),
        (t, Tensor::Scalar(b)) => Ok(t.map(|v| f(v, *b))),
        (Tensor::Vector(a), Tensor::Vector(b)) => {
            if a.len() != b.len() {
                return Err(mismatch());
            }
            Ok(Tensor::Vector(Zip::from(a).and(b).map_collect(|&p, &q| f(p, q))))
        }
        _ => {
            if !broadcast_compatible(x, y) {
                return Err(mismatch());
            }

            // 열이 하나인 쪽을 상대 열 수로 늘린다 (n×1 과 n×0 이면 n×0)
            let rows = x.rows();
            let cols = if x.cols() == 1 { y.cols() } else { x.cols() };

            let left = x.as_matrix();
            let right = y.as_matrix();
            let left = left.broadcast((rows, cols)).ok_or_else(mismatch)?;
            let right = right.broadcast((rows, cols)).ok_or_else(mismatch)?;

            Ok(Tensor::Matrix(
                Zip::from(&left).and(&right).map_collect(|&p, &q| f(p, q)),
            ))
        }
    }
}
