//! Cyclops 파라미터 묶음과 순방향 합성
//!
//! `model(x, h) = expand(normalize(compress(encode(x, h))))`

use super::{CyclopsConfig, Dense};
use crate::core::errors::{ConstructionError, ConstructionResult, FunctionResult};
use crate::core::layers::{hypersphere, multihot};
use crate::core::tensor::Tensor;
use log::{debug, trace};
use ndarray::{Array1, Array2};
use rand::Rng;
use rand_distr::StandardNormal;
use rayon::prelude::*;
use std::fmt;

/// 생성 후 변하지 않는 Cyclops 파라미터
///
/// - `scale`, `mhoffset`: n×m 멀티핫 보정 행렬
/// - `offset`: m > 0이면 길이 n 벡터, m = 0이면 n×0 행렬
/// - `compress`: n → c 선형 맵, `expand`: c → n 선형 맵
#[derive(Debug, Clone, PartialEq)]
pub struct Cyclops {
    scale: Tensor,
    mhoffset: Tensor,
    offset: Tensor,
    compress: Dense,
    expand: Dense,
}

impl Cyclops {
    /// 차원 `(n, m, c)`로 무작위 초기화된 모델 생성
    ///
    /// 멀티핫 파라미터와 `offset`은 표준정규분포에서, 선형 맵은
    /// [`Dense::new`]의 기본 초기화로 뽑는다. 난수원은 호출자가 넘긴다.
    pub fn from_dimensions<R: Rng + ?Sized>(
        n: i64,
        m: i64,
        c: i64,
        rng: &mut R,
    ) -> ConstructionResult<Self> {
        Self::from_config(
            &CyclopsConfig::new(n).with_multihot_dim(m).with_hypersphere_dim(c),
            rng,
        )
    }

    pub fn from_config<R: Rng + ?Sized>(
        config: &CyclopsConfig,
        rng: &mut R,
    ) -> ConstructionResult<Self> {
        config.validate()?;

        // validate() 통과 후에는 세 값 모두 음수가 아니다
        let n = config.input_dim as usize;
        let m = config.multihot_dim as usize;
        let c = config.hypersphere_dim as usize;

        let scale = Array2::from_shape_fn((n, m), |_| rng.sample::<f32, _>(StandardNormal));
        let mhoffset = Array2::from_shape_fn((n, m), |_| rng.sample::<f32, _>(StandardNormal));
        let offset = if m == 0 {
            Tensor::zeros_matrix(n, 0)
        } else {
            Tensor::Vector(Array1::from_shape_fn(n, |_| rng.sample::<f32, _>(StandardNormal)))
        };
        let compress = Dense::new(n, c, &mut *rng);
        let expand = Dense::new(c, n, &mut *rng);

        let model = Self {
            scale: Tensor::Matrix(scale),
            mhoffset: Tensor::Matrix(mhoffset),
            offset,
            compress,
            expand,
        };
        debug!("Cyclops 생성 (차원 기반): {}", model);

        Ok(model)
    }

    /// 이미 학습된 파라미터를 주입해 모델 생성
    ///
    /// 검사 순서: `scale`/`mhoffset` 형상 → `offset` 형상 → 압축/확장 역형상
    /// → `2 ≤ c < n == scale.rows`. `offset`은 f32로 변환된다.
    pub fn from_parameters(
        scale: Array2<f32>,
        mhoffset: Array2<f32>,
        offset: impl Into<Tensor>,
        compress: Dense,
        expand: Dense,
    ) -> ConstructionResult<Self> {
        let offset = offset.into();

        if scale.dim() != mhoffset.dim() {
            return Err(ConstructionError::MultihotMatrixShape {
                scale: scale.shape().to_vec(),
                mhoffset: mhoffset.shape().to_vec(),
            });
        }

        let (n, m) = scale.dim();
        let expected_offset = if m == 0 { vec![n, 0] } else { vec![n] };
        if offset.shape() != expected_offset {
            return Err(ConstructionError::MultihotOffsetShape {
                expected: expected_offset,
                actual: offset.shape(),
            });
        }

        let (compress_rows, compress_cols) = compress.weight_shape();
        let (expand_rows, expand_cols) = expand.weight_shape();
        if (compress_rows, compress_cols) != (expand_cols, expand_rows) {
            return Err(ConstructionError::DenseInverseShape {
                compress: vec![compress_rows, compress_cols],
                expand: vec![expand_rows, expand_cols],
            });
        }

        if compress_rows < 2 || compress_rows >= compress_cols || compress_cols != n {
            return Err(ConstructionError::DenseShape {
                weight: (compress_rows, compress_cols),
                expected_n: n,
            });
        }

        let model = Self {
            scale: Tensor::Matrix(scale),
            mhoffset: Tensor::Matrix(mhoffset),
            offset,
            compress,
            expand,
        };
        debug!("Cyclops 생성 (파라미터 주입): {}", model);

        Ok(model)
    }

    /// 입력 차원 n
    pub fn input_dim(&self) -> usize {
        self.scale.rows()
    }

    /// 멀티핫 그룹 수 m
    pub fn multihot_dim(&self) -> usize {
        self.scale.cols()
    }

    /// 초구 차원 c
    pub fn hypersphere_dim(&self) -> usize {
        self.compress.out_features()
    }

    pub fn scale(&self) -> &Tensor {
        &self.scale
    }

    pub fn mhoffset(&self) -> &Tensor {
        &self.mhoffset
    }

    pub fn offset(&self) -> &Tensor {
        &self.offset
    }

    pub fn compress(&self) -> &Dense {
        &self.compress
    }

    pub fn expand(&self) -> &Dense {
        &self.expand
    }

    /// 학습 가능한 파라미터 수: `2nm + len(offset) + 2cn + n + c`
    pub fn nparams(&self) -> usize {
        self.scale.len()
            + self.mhoffset.len()
            + self.offset.len()
            + self.compress.nparams()
            + self.expand.nparams()
    }

    pub fn encode(&self, x: &Array1<f32>, h: &[i32], skip_check: bool) -> FunctionResult<Array1<f32>> {
        multihot::encode(self, x, h, skip_check)
    }

    pub fn decode(&self, y: &Array1<f32>, h: &[i32], skip_check: bool) -> FunctionResult<Array1<f32>> {
        multihot::decode(self, y, h, skip_check)
    }

    /// 순방향 호출. `h`가 없으면 빈 지시자로 보며 `m = 0`일 때만 유효하다
    ///
    /// 모든 입력 검사를 수치 연산 전에 끝낸다.
    pub fn forward(&self, x: &Array1<f32>, h: Option<&[i32]>) -> FunctionResult<Array1<f32>> {
        let h = h.unwrap_or(&[]);
        multihot::validate_inputs(self, x.len(), h)?;
        self.run(x, h)
    }

    /// 입력 검사 없이 순방향 호출
    pub fn forward_unchecked(&self, x: &Array1<f32>, h: Option<&[i32]>) -> FunctionResult<Array1<f32>> {
        self.run(x, h.unwrap_or(&[]))
    }

    /// 독립 샘플들을 병렬로 순방향 호출. 출력 순서는 입력 순서와 같다
    pub fn forward_batch(&self, samples: &[(Array1<f32>, Vec<i32>)]) -> FunctionResult<Vec<Array1<f32>>> {
        samples
            .par_iter()
            .map(|(x, h)| self.forward(x, Some(h.as_slice())))
            .collect()
    }

    fn run(&self, x: &Array1<f32>, h: &[i32]) -> FunctionResult<Array1<f32>> {
        trace!("Cyclops 순방향: 입력 길이 {}, 지시자 길이 {}", x.len(), h.len());

        let encoded = multihot::encode(self, x, h, true)?;
        let compressed = self.compress.forward(&Tensor::Vector(encoded))?.into_vector()?;
        let projected = hypersphere::normalize(&compressed)?;
        let expanded = self.expand.forward(&Tensor::Vector(projected))?;

        Ok(expanded.into_vector()?)
    }
}

impl fmt::Display for Cyclops {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Cyclops({} => {} => {}, m = {}, nparams = {})",
            self.input_dim(),
            self.hypersphere_dim(),
            self.input_dim(),
            self.multihot_dim(),
            self.nparams()
        )
    }
}
