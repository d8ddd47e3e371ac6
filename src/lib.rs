//! 웨이블릿 패킷 최적 기저(best basis) 라이브러리
//!
//! 신호(1D)나 영상(2D)을 분기 계수 b(1D=2, 2D=4)의 완전 분해 트리로 전개한 뒤,
//! 가산적 비용 모델을 최소화하는 트리 절단을 동적 계획법으로 선택하고
//! 그 절단으로부터 원 배열을 무손실 복원한다

pub mod core;

// 핵심 모듈들 재수출
pub use crate::core::{
    // 트리 및 노드
    Node, WaveletPacketTree,
    // 변환 프리미티브 경계
    Dwt1, Dwt2, WaveletTransform,
    // 비용 모델
    shannon_cost, threshold_cost,
    // 알고리즘
    basis_cost, best_basis, collect, mark, reconstruct, traverse,
    // 오류
    WpError,
};

// 편의 타입 별칭들
pub type Tree1 = WaveletPacketTree<ndarray::Array1<f32>>;
pub type Tree2 = WaveletPacketTree<ndarray::Array2<f32>>;
