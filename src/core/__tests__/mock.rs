//! 손계산 가능한 직교 변환 목업
//!
//! Haar 계열을 정확한 산술로 구현해 시나리오 테스트의 기대값을
//! 손으로 검산할 수 있게 한다. 실제 웨이블릿 경로는 dwt_test가 다룬다

use ndarray::{Array1, Array2};

use crate::core::error::WpError;
use crate::core::transform::WaveletTransform;

/// 쌍별 (a±b)/√2 직교 변환 (b=2)
pub struct PairHaar;

impl WaveletTransform for PairHaar {
    type Coeffs = Array1<f32>;
    const ARITY: usize = 2;

    fn forward(&self, coeffs: &Array1<f32>) -> Result<Vec<Array1<f32>>, WpError> {
        let n = coeffs.len();
        if n < 2 || n % 2 != 0 {
            return Err(WpError::Shape {
                shape: vec![n],
                arity: Self::ARITY,
            });
        }
        let half = n / 2;
        let r = std::f32::consts::FRAC_1_SQRT_2;
        let mut approx = Array1::zeros(half);
        let mut detail = Array1::zeros(half);
        for i in 0..half {
            approx[i] = (coeffs[2 * i] + coeffs[2 * i + 1]) * r;
            detail[i] = (coeffs[2 * i] - coeffs[2 * i + 1]) * r;
        }
        Ok(vec![approx, detail])
    }

    fn inverse(&self, bands: &[Array1<f32>]) -> Result<Array1<f32>, WpError> {
        if bands.len() != 2 || bands[0].len() != bands[1].len() || bands[0].is_empty() {
            return Err(WpError::Shape {
                shape: bands.iter().map(|b| b.len()).collect(),
                arity: Self::ARITY,
            });
        }
        let half = bands[0].len();
        let r = std::f32::consts::FRAC_1_SQRT_2;
        let mut out = Array1::zeros(2 * half);
        for i in 0..half {
            out[2 * i] = (bands[0][i] + bands[1][i]) * r;
            out[2 * i + 1] = (bands[0][i] - bands[1][i]) * r;
        }
        Ok(out)
    }

    fn shape_of(coeffs: &Array1<f32>) -> Vec<usize> {
        vec![coeffs.len()]
    }
}

/// 2×2 블록 아다마르 직교 변환 (b=4). M = H₄/2 이고 M² = I 이므로 역변환도 자기 자신
pub struct QuadHaar;

impl WaveletTransform for QuadHaar {
    type Coeffs = Array2<f32>;
    const ARITY: usize = 4;

    fn forward(&self, coeffs: &Array2<f32>) -> Result<Vec<Array2<f32>>, WpError> {
        let (rows, cols) = coeffs.dim();
        if rows < 2 || cols < 2 || rows % 2 != 0 || cols % 2 != 0 {
            return Err(WpError::Shape {
                shape: vec![rows, cols],
                arity: Self::ARITY,
            });
        }
        let (hr, hc) = (rows / 2, cols / 2);
        let mut bands = vec![Array2::zeros((hr, hc)); 4];
        for i in 0..hr {
            for j in 0..hc {
                let p = coeffs[[2 * i, 2 * j]];
                let q = coeffs[[2 * i, 2 * j + 1]];
                let r = coeffs[[2 * i + 1, 2 * j]];
                let t = coeffs[[2 * i + 1, 2 * j + 1]];
                bands[0][[i, j]] = (p + q + r + t) / 2.0;
                bands[1][[i, j]] = (p - q + r - t) / 2.0;
                bands[2][[i, j]] = (p + q - r - t) / 2.0;
                bands[3][[i, j]] = (p - q - r + t) / 2.0;
            }
        }
        Ok(bands)
    }

    fn inverse(&self, bands: &[Array2<f32>]) -> Result<Array2<f32>, WpError> {
        if bands.len() != 4 || bands.iter().any(|b| b.dim() != bands[0].dim()) || bands[0].is_empty()
        {
            let shape = bands
                .iter()
                .flat_map(|b| {
                    let (r, c) = b.dim();
                    [r, c]
                })
                .collect();
            return Err(WpError::Shape {
                shape,
                arity: Self::ARITY,
            });
        }
        let (hr, hc) = bands[0].dim();
        let mut out = Array2::zeros((2 * hr, 2 * hc));
        for i in 0..hr {
            for j in 0..hc {
                let s = bands[0][[i, j]];
                let h = bands[1][[i, j]];
                let v = bands[2][[i, j]];
                let d = bands[3][[i, j]];
                out[[2 * i, 2 * j]] = (s + h + v + d) / 2.0;
                out[[2 * i, 2 * j + 1]] = (s - h + v - d) / 2.0;
                out[[2 * i + 1, 2 * j]] = (s + h - v - d) / 2.0;
                out[[2 * i + 1, 2 * j + 1]] = (s - h - v + d) / 2.0;
            }
        }
        Ok(out)
    }

    fn shape_of(coeffs: &Array2<f32>) -> Vec<usize> {
        let (r, c) = coeffs.dim();
        vec![r, c]
    }
}

/// 시드 고정 난수 신호
pub fn random_signal(n: usize, seed: u64) -> Array1<f32> {
    use rand::{Rng, SeedableRng};
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    Array1::from_iter((0..n).map(|_| rng.gen_range(-1.0..1.0)))
}

/// 시드 고정 난수 영상
pub fn random_image(rows: usize, cols: usize, seed: u64) -> Array2<f32> {
    use rand::{Rng, SeedableRng};
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    Array2::from_shape_fn((rows, cols), |_| rng.gen_range(-1.0..1.0))
}

/// 가운데 한 점만 1인 임펄스 신호
pub fn impulse_signal(n: usize) -> Array1<f32> {
    let mut s = Array1::zeros(n);
    s[n / 2 - 1] = 1.0;
    s
}
