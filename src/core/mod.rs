//! # 최적 기저 핵심 모듈
//!
//! 트리 구축(builder) → 마킹/절단 추출(selector) → 복원(synthesis) 순서로 흐른다

pub mod builder;
pub mod cost;
pub mod error;
pub mod node;
pub mod packet;
pub mod selector;
pub mod synthesis;
pub mod transform;

// 주요 타입들 재수출
pub use builder::collect;
pub use cost::{shannon_cost, threshold_cost};
pub use error::WpError;
pub use node::{Node, WaveletPacketTree};
pub use packet::{basis_cost, best_basis};
pub use selector::{mark, traverse};
pub use synthesis::reconstruct;
pub use transform::{Dwt1, Dwt2, WaveletTransform};

// 각 모듈이 자체 테스트를 포함함
#[cfg(test)]
mod __tests__;
