//! 멀티핫 아핀 레이어
//!
//! 인코딩: `y = x ⊙ (1 + scale·h) + mhoffset·h + offset`
//! 디코딩: `x = (y - mhoffset·h - offset) ⊘ (1 + scale·h)`
//!
//! 두 함수는 서로의 정확한 역변환이다 (f32 반올림 오차 범위 내).
//! `m = 0`이면 보정할 그룹이 없으므로 두 변환 모두 항등이다.

use crate::core::errors::{FunctionError, FunctionResult};
use crate::core::model::Cyclops;
use crate::core::tensor::{add, div, matvec, mul, sub, Tensor};
use ndarray::Array1;

/// 멀티핫 인코딩 (순방향)
///
/// `skip_check`가 참이면 길이 검사를 건너뛴다. 반복 호출되는 경로에서 호출자가
/// 이미 검증한 경우에만 쓴다. 이때 잘못된 길이는 연산자 형상 오류로 드러난다.
pub fn encode(
    model: &Cyclops,
    x: &Array1<f32>,
    h: &[i32],
    skip_check: bool,
) -> FunctionResult<Array1<f32>> {
    if !skip_check {
        validate_inputs(model, x.len(), h)?;
    }
    if model.multihot_dim() == 0 {
        return Ok(x.to_owned());
    }

    let h = indicator(h);
    let x = Tensor::Vector(x.to_owned());

    let gain = add(&Tensor::Scalar(1.0), &matvec(model.scale(), &h)?)?;
    let scaled = mul(&x, &gain)?;
    let shifted = add(&scaled, &matvec(model.mhoffset(), &h)?)?;
    let y = add(&shifted, model.offset())?;

    Ok(y.into_vector()?)
}

/// 멀티핫 디코딩 (역방향)
pub fn decode(
    model: &Cyclops,
    y: &Array1<f32>,
    h: &[i32],
    skip_check: bool,
) -> FunctionResult<Array1<f32>> {
    if !skip_check {
        validate_inputs(model, y.len(), h)?;
    }
    if model.multihot_dim() == 0 {
        return Ok(y.to_owned());
    }

    let h = indicator(h);
    let y = Tensor::Vector(y.to_owned());

    let unshifted = sub(&y, &matvec(model.mhoffset(), &h)?)?;
    let centered = sub(&unshifted, model.offset())?;
    let gain = add(&Tensor::Scalar(1.0), &matvec(model.scale(), &h)?)?;
    let x = div(&centered, &gain)?;

    Ok(x.into_vector()?)
}

/// 지시자 길이를 먼저, 입력 길이를 다음으로 검사한다
pub(crate) fn validate_inputs(model: &Cyclops, input_len: usize, h: &[i32]) -> FunctionResult<()> {
    if h.len() != model.multihot_dim() {
        return Err(FunctionError::MultihotDimensionMismatch {
            actual: h.len(),
            expected: model.multihot_dim(),
        });
    }
    if input_len != model.input_dim() {
        return Err(FunctionError::InputDimensionMismatch {
            actual: input_len,
            expected: model.input_dim(),
        });
    }
    Ok(())
}

fn indicator(h: &[i32]) -> Tensor {
    Tensor::Vector(h.iter().map(|&v| v as f32).collect())
}
