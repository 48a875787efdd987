//! 초구 정규화 레이어 - 벡터를 방향은 유지한 채 단위 노름으로 사영

use crate::core::errors::{FunctionError, FunctionResult};
use crate::core::tensor::{div, pow, Tensor};
use ndarray::Array1;

/// `x / ‖x‖₂`
///
/// 노름을 계산하기 전에 정의역을 검사한다.
/// - NaN 원소가 있으면 `HypersphereNaN` (NaN 인덱스 목록)
/// - 모든 원소가 정확히 0이면 `HypersphereDivide`
///
/// 0이 아닌 원소가 하나뿐인 입력은 부호만 남은 단위 벡터가 된다.
pub fn normalize(x: &Array1<f32>) -> FunctionResult<Array1<f32>> {
    let nan_indices: Vec<usize> = x
        .iter()
        .enumerate()
        .filter(|(_, v)| v.is_nan())
        .map(|(i, _)| i)
        .collect();
    if !nan_indices.is_empty() {
        return Err(FunctionError::HypersphereNaN { indices: nan_indices });
    }

    if x.iter().all(|&v| v == 0.0) {
        return Err(FunctionError::HypersphereDivide);
    }

    // 제곱 전에 최대 절댓값으로 나눠 f32 오버플로/언더플로를 막는다 (peak > 0)
    let peak = x.iter().fold(0.0f32, |a, v| a.max(v.abs()));
    let x = div(&Tensor::Vector(x.to_owned()), &Tensor::Scalar(peak))?;
    let norm = pow(&x, 2.0).sum().sqrt();

    Ok(div(&x, &Tensor::Scalar(norm))?.into_vector()?)
}
