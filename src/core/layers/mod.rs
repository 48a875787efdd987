//! # 미분 가능한 변환 레이어
//!
//! - `hypersphere`: 단위 초구 정규화
//! - `multihot`: 멀티핫 그룹 지시자에 따른 아핀 인코딩/디코딩

pub mod hypersphere;
pub mod multihot;

pub use hypersphere::normalize;
pub use multihot::{decode, encode};
