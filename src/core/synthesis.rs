//! 절단으로부터의 신호 복원
//!
//! 항상 가장 깊은 완전 형제 그룹부터 병합한다. inverse는 같은 부모의 같은
//! 레벨 분해에서 나온 b개의 배열만 받아들이므로 이 순서는 정확성 조건이다

use std::collections::{BTreeMap, BTreeSet};

use log::error;

use crate::core::error::WpError;
use crate::core::node::Node;
use crate::core::transform::WaveletTransform;

/// 올바른 트리 절단인 노드 집합을 원 신호로 병합한다.
/// 입력은 병합 전에 좌표 수준에서 전부 검증하며, 위반 시 병합을 시작하지 않는다.
/// inverse 실패는 관련된 모든 노드의 좌표/형상을 보고하고 중단한다
pub fn reconstruct<T>(nodes: Vec<Node<T::Coeffs>>, transform: &T) -> Result<T::Coeffs, WpError>
where
    T: WaveletTransform,
{
    validate_cut(&nodes, T::ARITY)?;

    // 레벨 버킷 작업 목록: 항상 최심 레벨을 통째로 한 단계 올린다
    let mut buckets: BTreeMap<usize, BTreeMap<usize, Node<T::Coeffs>>> = BTreeMap::new();
    for node in nodes {
        buckets.entry(node.level).or_default().insert(node.index, node);
    }

    while let Some((&deepest, _)) = buckets.last_key_value() {
        if deepest == 0 {
            break;
        }
        let level = buckets.remove(&deepest).unwrap_or_default();
        let mut level_nodes: Vec<Node<T::Coeffs>> = level.into_values().collect();
        debug_assert_eq!(level_nodes.len() % T::ARITY, 0);

        while !level_nodes.is_empty() {
            // 검증을 통과했으므로 인덱스순 b개씩이 곧 형제 그룹이다
            let group: Vec<Node<T::Coeffs>> = level_nodes.drain(..T::ARITY).collect();
            let parent_index = group[0].index / T::ARITY;
            let meta: Vec<(usize, usize, Vec<usize>)> = group
                .iter()
                .map(|n| (n.level, n.index, T::shape_of(&n.coeffs)))
                .collect();
            let bands: Vec<T::Coeffs> = group.into_iter().map(|n| n.coeffs).collect();
            let merged = transform
                .inverse(&bands)
                .map_err(|e| inverse_error(&meta, e))?;
            buckets
                .entry(deepest - 1)
                .or_default()
                .insert(parent_index, Node::new(merged, deepest - 1, parent_index));
        }
    }

    // 남은 것은 레벨 0의 b개 노드. 마지막 역변환이 원 신호를 돌려준다
    let roots: Vec<Node<T::Coeffs>> = buckets
        .remove(&0)
        .unwrap_or_default()
        .into_values()
        .collect();
    let meta: Vec<(usize, usize, Vec<usize>)> = roots
        .iter()
        .map(|n| (n.level, n.index, T::shape_of(&n.coeffs)))
        .collect();
    let bands: Vec<T::Coeffs> = roots.into_iter().map(|n| n.coeffs).collect();
    transform
        .inverse(&bands)
        .map_err(|e| inverse_error(&meta, e))
}

/// 좌표만으로 병합을 건식 실행해 트리 절단 여부를 확인한다.
/// 중복, 범위 초과, 불완전한 형제 그룹, 조상과의 겹침을 모두 잡는다
fn validate_cut<C>(nodes: &[Node<C>], arity: usize) -> Result<(), WpError> {
    if nodes.is_empty() {
        return Err(WpError::Precondition {
            reason: "빈 노드 집합".into(),
        });
    }

    let mut buckets: BTreeMap<usize, BTreeSet<usize>> = BTreeMap::new();
    for node in nodes {
        let width = arity.pow(node.level as u32 + 1);
        if node.index >= width {
            return Err(WpError::Precondition {
                reason: format!(
                    "레벨 {}의 인덱스 {}가 범위를 벗어남 (노드 수 {})",
                    node.level, node.index, width
                ),
            });
        }
        if !buckets.entry(node.level).or_default().insert(node.index) {
            return Err(WpError::Precondition {
                reason: format!("중복 노드 (level={}, index={})", node.level, node.index),
            });
        }
    }

    while let Some((&deepest, _)) = buckets.last_key_value() {
        if deepest == 0 {
            break;
        }
        let indices: Vec<usize> = buckets
            .remove(&deepest)
            .unwrap_or_default()
            .into_iter()
            .collect();
        for chunk in indices.chunks(arity) {
            if chunk.len() != arity
                || chunk[0] % arity != 0
                || chunk[arity - 1] != chunk[0] + arity - 1
            {
                return Err(WpError::Precondition {
                    reason: format!("레벨 {}의 불완전한 형제 그룹 {:?}", deepest, chunk),
                });
            }
            let parent = chunk[0] / arity;
            if !buckets.entry(deepest - 1).or_default().insert(parent) {
                return Err(WpError::Precondition {
                    reason: format!(
                        "겹치는 절단: 병합 결과가 기존 노드 (level={}, index={})와 충돌",
                        deepest - 1,
                        parent
                    ),
                });
            }
        }
    }

    let roots = buckets.remove(&0).unwrap_or_default();
    if roots.len() != arity || roots.iter().copied().ne(0..arity) {
        return Err(WpError::Precondition {
            reason: format!("레벨 0이 뿌리 {}개를 모두 덮지 못함: {:?}", arity, roots),
        });
    }
    Ok(())
}

/// 실패한 역변환에 관련된 모든 노드의 좌표/형상을 로그와 오류에 담는다
fn inverse_error(meta: &[(usize, usize, Vec<usize>)], source: WpError) -> WpError {
    for (level, index, shape) in meta {
        error!(
            "역변환 실패 노드: level={}, index={}, shape={:?}",
            level, index, shape
        );
    }
    let (level, index, shape) = meta[0].clone();
    let detail = meta
        .iter()
        .map(|(l, i, s)| format!("({},{}) {:?}", l, i, s))
        .collect::<Vec<_>>()
        .join(", ");
    WpError::Transform {
        level,
        index,
        shape,
        reason: format!("{}; 관련 노드: {}", source, detail),
    }
}
