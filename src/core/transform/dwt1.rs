//! 1차원 단일 레벨 DWT (b=2)

use ndarray::{s, Array1};
use omni_wave::{decompose, reconstruct, wavelet as w};

use super::WaveletTransform;
use crate::core::error::WpError;

/// BIOR 3.1 기반 1D 웨이블릿 변환.
/// forward 결과의 앞 절반이 근사, 뒤 절반이 상세 대역이다
#[derive(Debug, Clone, Copy, Default)]
pub struct Dwt1;

impl WaveletTransform for Dwt1 {
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
        let wavelet = w::BIOR_3_1;
        let mut work = coeffs.clone();
        let mut buffer = Array1::zeros(n + wavelet.window_size() - 2);
        decompose(work.view_mut(), buffer.view_mut(), wavelet);
        let half = n / 2;
        Ok(vec![
            work.slice(s![..half]).to_owned(),
            work.slice(s![half..]).to_owned(),
        ])
    }

    fn inverse(&self, bands: &[Array1<f32>]) -> Result<Array1<f32>, WpError> {
        if bands.len() != Self::ARITY || bands[0].len() != bands[1].len() || bands[0].is_empty() {
            return Err(WpError::Shape {
                shape: bands.iter().map(|b| b.len()).collect(),
                arity: Self::ARITY,
            });
        }
        let half = bands[0].len();
        let wavelet = w::BIOR_3_1;
        let mut work = Array1::zeros(2 * half);
        work.slice_mut(s![..half]).assign(&bands[0]);
        work.slice_mut(s![half..]).assign(&bands[1]);
        let mut buffer = Array1::zeros(2 * half + wavelet.window_size() - 2);
        reconstruct(work.view_mut(), buffer.view_mut(), wavelet);
        Ok(work)
    }

    fn shape_of(coeffs: &Array1<f32>) -> Vec<usize> {
        vec![coeffs.len()]
    }
}
