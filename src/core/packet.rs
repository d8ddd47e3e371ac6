//! 분석/합성 파이프라인 진입점

use log::debug;

use crate::core::builder::collect;
use crate::core::error::WpError;
use crate::core::node::Node;
use crate::core::selector::{mark, traverse};
use crate::core::transform::WaveletTransform;

/// collect → mark → traverse 를 이어 최적 기저를 돌려준다.
/// 반환은 (level, index) 오름차순이며 [`reconstruct`](crate::core::reconstruct)가
/// 이 순서 그대로 소비할 수 있다
pub fn best_basis<T, F>(
    signal: &T::Coeffs,
    transform: &T,
    cost: F,
    depth: usize,
) -> Result<Vec<Node<T::Coeffs>>, WpError>
where
    T: WaveletTransform + Sync,
    T::Coeffs: Send + Sync,
    F: Fn(&T::Coeffs) -> f32 + Sync,
{
    let mut tree = collect(signal, transform, depth)?;
    mark(&mut tree, cost);
    let ids = traverse(&tree);
    let basis = tree.into_basis(&ids);
    debug!(
        "최적 기저: 노드 {}개, 총 비용 {:.6}",
        basis.len(),
        basis_cost(&basis)
    );
    Ok(basis)
}

/// 기저의 총 비용. mark가 기록한 자기 비용의 합
pub fn basis_cost<C>(nodes: &[Node<C>]) -> f32 {
    nodes.iter().map(|n| n.cost).sum()
}
