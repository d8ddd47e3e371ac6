//! 비용 모델: 계수 배열 → 비음수 스칼라
//!
//! 동적 계획법이 성립하려면 비용이 비음수이고 서로소 배열에 대해
//! 가산적이어야 한다. 이 계약은 호출자 책임이며 기계적으로 검사하지 않는다

use ndarray::{Array, Dimension};

/// 고정 임계값 비용: |c| > theta 인 성분의 개수
pub fn threshold_cost<D: Dimension>(theta: f32) -> impl Fn(&Array<f32, D>) -> f32 {
    move |coeffs| coeffs.iter().filter(|c| c.abs() > theta).count() as f32
}

/// 섀넌형 엔트로피 비용: -Σ c²·log2|c|.
/// 0 성분은 0·log(0) 특이점을 피해 관례상 정확히 0을 기여한다
pub fn shannon_cost<D: Dimension>(coeffs: &Array<f32, D>) -> f32 {
    coeffs
        .iter()
        .filter(|&&c| c != 0.0)
        .map(|&c| -c * c * c.abs().log2())
        .sum()
}
