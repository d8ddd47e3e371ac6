//! 2차원 단일 레벨 DWT (b=4)

use ndarray::{s, Array1, Array2};
use omni_wave::{decompose_2d, reconstruct_2d, wavelet as w};

use super::WaveletTransform;
use crate::core::error::WpError;

/// BIOR 3.1 기반 2D 웨이블릿 변환.
/// forward 결과는 사분면 순서: 근사(LL), 수평(LH), 수직(HL), 대각(HH)
#[derive(Debug, Clone, Copy, Default)]
pub struct Dwt2;

impl WaveletTransform for Dwt2 {
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
        let wavelet = w::BIOR_3_1;
        let mut work = coeffs.clone();
        let mut buffer = Array1::zeros(rows.max(cols) + wavelet.window_size() - 2);
        decompose_2d(work.view_mut(), buffer.view_mut(), wavelet);
        let (hr, hc) = (rows / 2, cols / 2);
        Ok(vec![
            work.slice(s![..hr, ..hc]).to_owned(),
            work.slice(s![..hr, hc..]).to_owned(),
            work.slice(s![hr.., ..hc]).to_owned(),
            work.slice(s![hr.., hc..]).to_owned(),
        ])
    }

    fn inverse(&self, bands: &[Array2<f32>]) -> Result<Array2<f32>, WpError> {
        if bands.len() != Self::ARITY
            || bands.iter().any(|b| b.dim() != bands[0].dim())
            || bands[0].is_empty()
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
        let wavelet = w::BIOR_3_1;
        let mut work = Array2::zeros((2 * hr, 2 * hc));
        work.slice_mut(s![..hr, ..hc]).assign(&bands[0]);
        work.slice_mut(s![..hr, hc..]).assign(&bands[1]);
        work.slice_mut(s![hr.., ..hc]).assign(&bands[2]);
        work.slice_mut(s![hr.., hc..]).assign(&bands[3]);
        let mut buffer = Array1::zeros((2 * hr).max(2 * hc) + wavelet.window_size() - 2);
        reconstruct_2d(work.view_mut(), buffer.view_mut(), wavelet);
        Ok(work)
    }

    fn shape_of(coeffs: &Array2<f32>) -> Vec<usize> {
        let (r, c) = coeffs.dim();
        vec![r, c]
    }
}
