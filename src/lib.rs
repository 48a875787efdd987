//! Cyclops 라이브러리
//!
//! 실수 특징 벡터를 위한 대칭 인코더/디코더 모델의 핵심 구성 요소:
//! 형상 검사 연산자, 멀티핫 아핀 레이어, 초구 정규화 레이어, 구조화된 에러 체계

pub mod core;

// 핵심 타입 재수출
pub use crate::core::{
    // 텐서 및 연산자
    add, div, matvec, mul, pow, sub, Tensor,
    // 에러
    ConstructionError, CyclopsError, FunctionError, OperatorError,
    ConstructionResult, FunctionResult, OperatorResult,
    // 모델
    Cyclops, CyclopsConfig, Dense,
    // 레이어
    decode, encode, normalize,
};
