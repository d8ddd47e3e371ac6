//! 완전 분해 트리 구축

use log::debug;
use rayon::prelude::*;

use crate::core::error::WpError;
use crate::core::node::{Node, WaveletPacketTree};
use crate::core::transform::WaveletTransform;

/// 신호를 깊이 제한 완전 트리로 전개한다.
/// 레벨 l의 부모 p가 레벨 l+1의 자식 b·p … b·p+b-1 을 만들며,
/// 총 b + b² + … + b^depth 개의 노드가 생긴다.
/// forward 실패는 감싸서 즉시 전파하고 재시도하지 않는다
pub fn collect<T>(
    signal: &T::Coeffs,
    transform: &T,
    depth: usize,
) -> Result<WaveletPacketTree<T::Coeffs>, WpError>
where
    T: WaveletTransform + Sync,
    T::Coeffs: Send + Sync,
{
    if depth == 0 {
        return Err(WpError::Shape {
            shape: T::shape_of(signal),
            arity: T::ARITY,
        });
    }

    let mut tree = WaveletPacketTree::new(T::ARITY);

    // 원 신호의 첫 분할이 레벨 0의 b개 노드가 된다
    let roots = transform
        .forward(signal)
        .map_err(|e| transform_error::<T>(signal, 0, 0, e))?;
    tree.push_level(
        roots
            .into_iter()
            .enumerate()
            .map(|(k, c)| Node::new(c, 0, k))
            .collect(),
    );

    for l in 0..depth - 1 {
        // 형제 부분트리는 서로소이므로 부모 단위로 병렬 분해한다.
        // 오류는 인덱스가 가장 작은 부모의 것을 보고해 진단을 결정적으로 만든다
        let results: Vec<Result<Vec<T::Coeffs>, WpError>> = tree
            .level(l)
            .par_iter()
            .map(|parent| {
                transform.forward(&parent.coeffs).map_err(|e| {
                    transform_error::<T>(&parent.coeffs, l + 1, T::ARITY * parent.index, e)
                })
            })
            .collect();
        let mut bands = Vec::with_capacity(results.len());
        for result in results {
            bands.push(result?);
        }

        let children = bands
            .into_iter()
            .enumerate()
            .flat_map(|(p, cs)| {
                cs.into_iter()
                    .enumerate()
                    .map(move |(k, c)| Node::new(c, l + 1, T::ARITY * p + k))
            })
            .collect();
        tree.push_level(children);
    }

    debug!(
        "트리 구축 완료: 분기 {}, 깊이 {}, 노드 {}개",
        T::ARITY,
        tree.depth(),
        tree.total_nodes()
    );
    Ok(tree)
}

/// forward 실패를 생성 중이던 첫 자식의 좌표와 부모 형상으로 감싼다
fn transform_error<T: WaveletTransform>(
    coeffs: &T::Coeffs,
    level: usize,
    index: usize,
    source: WpError,
) -> WpError {
    WpError::Transform {
        level,
        index,
        shape: T::shape_of(coeffs),
        reason: source.to_string(),
    }
}
