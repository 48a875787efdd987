//! 모델 생성 중에만 발생하는 에러

use super::format_shape;
use thiserror::Error;

/// 모델을 만들거나 주입된 파라미터를 검증할 때 발생하는 에러
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConstructionError {
    /// `c < 2`
    #[error(
        "HypersphereDomainError: `c` = {c}, but the hypersphere dimension `c` must be \
         greater than or equal to 2."
    )]
    HypersphereDomain { c: i64 },

    /// `n <= c`
    #[error(
        "InputAndHypersphereDomainError: `n` = {n} and `c` = {c}, but the input dimension `n` \
         must be strictly greater than the hypersphere dimension `c`."
    )]
    InputAndHypersphereDomain { n: i64, c: i64 },

    /// `m < 0`
    #[error(
        "MultihotDomainError: `m` = {m}, but the multi-hot dimension `m` must be \
         greater than or equal to 0."
    )]
    MultihotDomain { m: i64 },

    /// `shape(scale) != shape(mhoffset)`
    #[error(
        "MultihotMatrixShapeError: `scale` has shape {} and `mhoffset` has shape {}, \
         but they must have the same shape.",
        format_shape(.scale),
        format_shape(.mhoffset)
    )]
    MultihotMatrixShape { scale: Vec<usize>, mhoffset: Vec<usize> },

    /// `offset`의 형상이 `scale`의 열 수와 맞지 않음
    #[error(
        "MultihotOffsetShapeError: `offset` has shape {}, but given `scale` it must have shape {}.",
        format_shape(.actual),
        format_shape(.expected)
    )]
    MultihotOffsetShape { expected: Vec<usize>, actual: Vec<usize> },

    /// 압축/확장 가중치가 서로의 전치 형상이 아님
    #[error(
        "DenseInverseShapeError: `compress.weight` has shape {} and `expand.weight` has shape {}, \
         but the shape of one must be the reverse of the other.",
        format_shape(.compress),
        format_shape(.expand)
    )]
    DenseInverseShape { compress: Vec<usize>, expand: Vec<usize> },

    /// `2 <= c < n` 위반, 또는 `compress.weight`의 열 수가 `scale`의 행 수와 다름
    #[error("{}", dense_shape_message(.weight, .expected_n))]
    DenseShape { weight: (usize, usize), expected_n: usize },

    /// 선형 맵의 편향 길이가 가중치 행 수와 다름
    #[error(
        "DenseBiasShapeError: `bias` has length {actual}, but a weight with {expected} rows \
         requires a bias of length {expected}."
    )]
    DenseBiasShape { expected: usize, actual: usize },
}

fn dense_shape_message(weight: &(usize, usize), expected_n: &usize) -> String {
    let (c, n) = *weight;
    let mut message = format!("DenseShapeError: `compress.weight` has shape ({}, {}), ", c, n);
    if c < 2 || c >= n {
        message.push_str(&format!(
            "but its shape (c, n) must satisfy 2 ≤ c < n; here c = {} and n = {}.",
            c, n
        ));
    } else {
        message.push_str(&format!(
            "but its column count n = {} must equal the row count of `scale`, {}.",
            n, expected_n
        ));
    }
    message
}

pub type ConstructionResult<T> = std::result::Result<T, ConstructionError>;
