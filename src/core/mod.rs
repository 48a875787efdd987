//! # Cyclops 핵심 모듈
//!
//! 연산자 → 에러 → 모델 파라미터 → 레이어 순으로 쌓인다

pub mod errors;
pub mod layers;
pub mod model;
pub mod tensor;

// 주요 타입들 재수출
pub use errors::*;
pub use layers::*;
pub use model::*;
pub use tensor::*;
