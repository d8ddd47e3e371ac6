//! 변환 프리미티브 경계
//!
//! 엔진은 부대역의 의미를 해석하지 않는다. forward가 내놓은 b개의 배열을
//! inverse가 수치 정밀도 안에서 정확히 되돌린다는 계약만 요구한다

pub mod dwt1;
pub mod dwt2;

pub use dwt1::Dwt1;
pub use dwt2::Dwt2;

use crate::core::error::WpError;

/// 단일 레벨 부대역 분할과 그 역변환
pub trait WaveletTransform {
    /// 계수 배열 타입. 1D 벡터 또는 2D 행렬
    type Coeffs: Clone;

    /// 분기 계수 b: forward가 내놓는 부대역 수
    const ARITY: usize;

    /// 한 레벨 분해. 실패 시 배열 형상을 담은 오류를 낸다
    fn forward(&self, coeffs: &Self::Coeffs) -> Result<Vec<Self::Coeffs>, WpError>;

    /// forward의 대수적 역. 변조되지 않은 분해에 대해서만 정의되며,
    /// 맞지 않는 배열에는 조용히 저하되지 않고 실패해야 한다
    fn inverse(&self, bands: &[Self::Coeffs]) -> Result<Self::Coeffs, WpError>;

    /// 진단용 형상 벡터
    fn shape_of(coeffs: &Self::Coeffs) -> Vec<usize>;
}
