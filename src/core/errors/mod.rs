//! # 에러 체계
//!
//! 연산자 수준의 형상 오류, 모델 생성 오류, 모델/레이어 호출 오류를
//! 서로 겹치지 않는 닫힌 열거형으로 나눈다.

pub mod construction;
pub mod function;
pub mod operator;

pub use construction::*;
pub use function::*;
pub use operator::*;

use thiserror::Error;

/// 두 루트 에러를 하나로 받고 싶은 호출자를 위한 통합 에러
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CyclopsError {
    #[error(transparent)]
    Construction(#[from] ConstructionError),

    #[error(transparent)]
    Function(#[from] FunctionError),
}

impl CyclopsError {
    pub fn is_construction(&self) -> bool {
        matches!(self, Self::Construction(_))
    }

    pub fn is_function(&self) -> bool {
        matches!(self, Self::Function(_))
    }
}

pub type Result<T> = std::result::Result<T, CyclopsError>;

/// 형상을 `(5, 3)` / `(5,)` / `()` 형태로 렌더링
pub fn format_shape(shape: &[usize]) -> String {
    match shape {
        [] => "()".to_string(),
        [n] => format!("({},)", n),
        dims => format!(
            "({})",
            dims.iter().map(|d| d.to_string()).collect::<Vec<_>>().join(", ")
        ),
    }
}
