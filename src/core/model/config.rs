//! 차원 기반 생성 설정

use crate::core::errors::{ConstructionError, ConstructionResult};
use serde::{Deserialize, Serialize};

/// Cyclops 차원 설정 `(n, m, c)`
///
/// 정의역 검사를 표현할 수 있도록 부호 있는 정수를 쓴다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CyclopsConfig {
    /// 입력 차원 n
    pub input_dim: i64,

    /// 멀티핫 그룹 수 m
    #[serde(default)]
    pub multihot_dim: i64,

    /// 초구 차원 c
    #[serde(default = "default_hypersphere_dim")]
    pub hypersphere_dim: i64,
}

fn default_hypersphere_dim() -> i64 {
    2
}

impl CyclopsConfig {
    /// `m = 0`, `c = 2` 기본값으로 설정 생성
    pub fn new(input_dim: i64) -> Self {
        Self {
            input_dim,
            multihot_dim: 0,
            hypersphere_dim: default_hypersphere_dim(),
        }
    }

    pub fn with_multihot_dim(mut self, multihot_dim: i64) -> Self {
        self.multihot_dim = multihot_dim;
        self
    }

    pub fn with_hypersphere_dim(mut self, hypersphere_dim: i64) -> Self {
        self.hypersphere_dim = hypersphere_dim;
        self
    }

    /// `c ≥ 2`, `n > c`, `m ≥ 0` 순서로 검사. 처음 실패한 검사가 보고된다
    pub fn validate(&self) -> ConstructionResult<()> {
        let (n, m, c) = (self.input_dim, self.multihot_dim, self.hypersphere_dim);

        if c < 2 {
            return Err(ConstructionError::HypersphereDomain { c });
        }
        if n <= c {
            return Err(ConstructionError::InputAndHypersphereDomain { n, c });
        }
        if m < 0 {
            return Err(ConstructionError::MultihotDomain { m });
        }
        Ok(())
    }
}
