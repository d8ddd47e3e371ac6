//! 최소 비용 트리 절단의 동적 계획법 선택기

use rayon::prelude::*;

use crate::core::node::WaveletPacketTree;

/// 상향식 2패스 마킹.
/// 모든 노드에 자기 비용(cost)과 부분트리 최소 비용(best)을 기록한다.
/// 트리 불변식은 collect가 보장하므로 실패하지 않으며, 재호출해도 결과가 같다
pub fn mark<C, F>(tree: &mut WaveletPacketTree<C>, cost: F)
where
    C: Send + Sync,
    F: Fn(&C) -> f32 + Sync,
{
    let arity = tree.arity();
    let depth = tree.depth();
    if depth == 0 {
        return;
    }
    let levels = tree.levels_mut();

    // 1패스: 최심 레벨은 비교할 자식이 없으므로 best = cost
    levels[depth - 1].par_iter_mut().for_each(|node| {
        let cp = cost(&node.coeffs);
        node.cost = cp;
        node.best = cp;
    });

    // 2패스: 내부 레벨을 아래에서 위로.
    // 동점이면 부모를 남겨 절단을 얕게 하고 선택 노드 수를 줄인다
    for l in (0..depth - 1).rev() {
        let (upper, lower) = levels.split_at_mut(l + 1);
        let children = &lower[0];
        upper[l].par_iter_mut().for_each(|node| {
            let base = arity * node.index;
            let cc: f32 = children[base..base + arity].iter().map(|ch| ch.best).sum();
            let cp = cost(&node.coeffs);
            node.cost = cp;
            node.best = if cp <= cc { cp } else { cc };
        });
    }
}

/// 하향식 절단 추출.
/// best == cost 인 노드에서 멈추고, 아니면 b개의 자식으로 내려간다.
/// 반환된 좌표 집합은 뿌리-잎 경로마다 정확히 한 번 교차하는 최소 비용 절단이며,
/// (level, index) 오름차순으로 정렬된다. 합성기의 병합 규율이 이 순서에 의존한다
pub fn traverse<C>(tree: &WaveletPacketTree<C>) -> Vec<(usize, usize)> {
    let mut out = Vec::new();
    for root in 0..tree.arity() {
        visit(tree, 0, root, &mut out);
    }
    out.sort_unstable();
    out
}

fn visit<C>(tree: &WaveletPacketTree<C>, level: usize, index: usize, out: &mut Vec<(usize, usize)>) {
    let node = tree.node(level, index);
    // best는 cost 또는 자식 합을 그대로 복사한 값이므로 동등 비교가 정확하다
    if node.best == node.cost {
        out.push((level, index));
    } else {
        let base = tree.arity() * index;
        for k in 0..tree.arity() {
            visit(tree, level + 1, base + k, out);
        }
    }
}
