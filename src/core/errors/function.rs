//! 레이어/모델 호출 중에만 발생하는 에러

use super::OperatorError;
use thiserror::Error;

/// 데이터에 레이어나 모델을 적용할 때 발생하는 에러
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FunctionError {
    #[error(
        "MultihotDimensionMismatch: the multi-hot indicator has length {actual}, \
         but the model's multi-hot dimension `m` is {expected}."
    )]
    MultihotDimensionMismatch { actual: usize, expected: usize },

    #[error(
        "InputDimensionMismatch: the input has length {actual}, \
         but the model's input dimension `n` is {expected}."
    )]
    InputDimensionMismatch { actual: usize, expected: usize },

    /// `indices`는 0부터 센다. 메시지는 1부터 센 위치로 보여준다.
    #[error(
        "HypersphereNaNError: the hypersphere input contains NaN at position(s) {}.",
        render_positions(.indices)
    )]
    HypersphereNaN { indices: Vec<usize> },

    #[error(
        "HypersphereDivideError: all hypersphere inputs are 0, \
         so the input has no direction to project onto the unit hypersphere."
    )]
    HypersphereDivide,

    /// 검사를 건너뛴 호출에서 연산자가 보고한 형상 오류
    #[error(transparent)]
    Operator(#[from] OperatorError),
}

fn render_positions(indices: &[usize]) -> String {
    let positions = indices
        .iter()
        .map(|i| (i + 1).to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{}]", positions)
}

pub type FunctionResult<T> = std::result::Result<T, FunctionError>;
