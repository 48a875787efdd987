//! # 텐서와 연산자 라이브러리
//!
//! 랭크 0/1/2 f32 텐서와 형상 규칙을 검사하는 순수 연산자들

pub mod ops;
pub mod tensor;

pub use ops::*;
pub use tensor::Tensor;

#[cfg(test)]
mod __tests__;
