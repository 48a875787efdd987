//! # Cyclops 모델
//!
//! 검증된 불변 파라미터 묶음과 순방향 합성

pub mod config;
pub mod cyclops;
pub mod dense;

pub use config::CyclopsConfig;
pub use cyclops::Cyclops;
pub use dense::Dense;
