//! 압축/확장에 쓰는 선형 맵 (가중치 + 편향)

use crate::core::errors::{ConstructionError, ConstructionResult, OperatorResult};
use crate::core::tensor::{add, matvec, Tensor};
use ndarray::{Array1, Array2};
use rand::distributions::{Distribution, Uniform};
use rand::Rng;

/// `y = W·x + b`, `W`는 (out × in)
#[derive(Debug, Clone, PartialEq)]
pub struct Dense {
    weight: Tensor,
    bias: Tensor,
    out_features: usize,
    in_features: usize,
}

impl Dense {
    /// Glorot 균등 분포 가중치, 0 편향으로 초기화
    pub fn new<R: Rng + ?Sized>(in_features: usize, out_features: usize, rng: &mut R) -> Self {
        let limit = (6.0 / (in_features + out_features).max(1) as f32).sqrt();
        let uniform = Uniform::new_inclusive(-limit, limit);

        let weight = Array2::from_shape_fn((out_features, in_features), |_| uniform.sample(&mut *rng));

        Self {
            weight: Tensor::Matrix(weight),
            bias: Tensor::zeros_vector(out_features),
            out_features,
            in_features,
        }
    }

    /// 이미 학습된 가중치와 편향으로 생성. 편향 길이는 가중치 행 수와 같아야 한다
    pub fn from_parts(weight: Array2<f32>, bias: Array1<f32>) -> ConstructionResult<Self> {
        let (out_features, in_features) = weight.dim();
        if bias.len() != out_features {
            return Err(ConstructionError::DenseBiasShape {
                expected: out_features,
                actual: bias.len(),
            });
        }

        Ok(Self {
            weight: Tensor::Matrix(weight),
            bias: Tensor::Vector(bias),
            out_features,
            in_features,
        })
    }

    pub fn weight(&self) -> &Tensor {
        &self.weight
    }

    pub fn bias(&self) -> &Tensor {
        &self.bias
    }

    /// (out, in)
    pub fn weight_shape(&self) -> (usize, usize) {
        (self.out_features, self.in_features)
    }

    pub fn in_features(&self) -> usize {
        self.in_features
    }

    pub fn out_features(&self) -> usize {
        self.out_features
    }

    pub fn nparams(&self) -> usize {
        self.out_features * self.in_features + self.out_features
    }

    pub fn forward(&self, x: &Tensor) -> OperatorResult<Tensor> {
        add(&matvec(&self.weight, x)?, &self.bias)
    }
}
