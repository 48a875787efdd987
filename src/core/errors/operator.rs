//! 연산자 라이브러리의 형상 오류

use super::format_shape;
use thiserror::Error;

/// 원소별/행렬 연산의 형상 위반
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OperatorError {
    /// 원소별 이항 연산에서 브로드캐스트할 수 없는 두 형상
    #[error(
        "ShapeMismatch: cannot combine a tensor of shape {} with a tensor of shape {}; \
         operands must share the same row count when either has one column, \
         and the same full shape otherwise.",
        format_shape(.left),
        format_shape(.right)
    )]
    ShapeMismatch { left: Vec<usize>, right: Vec<usize> },

    /// 행렬-벡터 곱에서 `x.cols != y.rows`
    #[error(
        "DimensionMismatch: left operand has {left_cols} columns but right operand has \
         {right_rows} rows; matrix product requires them to be equal."
    )]
    DimensionMismatch { left_cols: usize, right_rows: usize },

    /// 벡터가 필요한 자리에 열이 둘 이상이거나 0인 텐서
    #[error(
        "NotAVector: expected a vector or a single-column matrix, but got a tensor of shape {}.",
        format_shape(.shape)
    )]
    NotAVector { shape: Vec<usize> },
}

pub type OperatorResult<T> = std::result::Result<T, OperatorError>;
