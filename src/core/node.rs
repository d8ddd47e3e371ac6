//! 트리 노드와 레벨 버킷 저장소

use std::collections::HashSet;

/// 계수 배열 하나와 트리 좌표, 비용 장부를 담는 노드
#[derive(Debug, Clone)]
pub struct Node<C> {
    /// 부대역 계수 배열
    pub coeffs: C,
    /// 분해 깊이. 0 = 원 신호의 첫 분할
    pub level: usize,
    /// 같은 레벨 안에서의 위치. (l, i)의 자식은 (l+1, b·i) … (l+1, b·i+b-1)
    pub index: usize,
    /// 활성 비용 모델에 따른 자기 비용. mark 단계에서 기록된다
    pub cost: f32,
    /// 이 노드를 뿌리로 하는 부분트리의 최소 달성 비용
    pub best: f32,
}

impl<C> Node<C> {
    pub fn new(coeffs: C, level: usize, index: usize) -> Self {
        Node {
            coeffs,
            level,
            index,
            cost: 0.0,
            best: 0.0,
        }
    }

    /// (level, index) 정렬 키. 얕은 레벨, 작은 인덱스 우선
    pub fn order_key(&self) -> (usize, usize) {
        (self.level, self.index)
    }
}

/// 레벨별 버킷으로 노드를 소유하는 평면 저장소.
/// 이웃은 포인터가 아니라 (level, index) 산술로 찾는다.
/// 레벨 l은 b^(l+1)개의 노드를 담고, 원 신호 자체는 노드가 아니다
#[derive(Debug, Clone)]
pub struct WaveletPacketTree<C> {
    levels: Vec<Vec<Node<C>>>,
    arity: usize,
}

impl<C> WaveletPacketTree<C> {
    pub(crate) fn new(arity: usize) -> Self {
        WaveletPacketTree {
            levels: Vec::new(),
            arity,
        }
    }

    /// 분기 계수 b
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// 저장된 레벨 수 (분해 깊이)
    pub fn depth(&self) -> usize {
        self.levels.len()
    }

    pub fn total_nodes(&self) -> usize {
        self.levels.iter().map(|l| l.len()).sum()
    }

    pub fn node(&self, level: usize, index: usize) -> &Node<C> {
        &self.levels[level][index]
    }

    pub fn level(&self, level: usize) -> &[Node<C>] {
        &self.levels[level]
    }

    pub(crate) fn push_level(&mut self, nodes: Vec<Node<C>>) {
        debug_assert_eq!(nodes.len(), self.arity.pow(self.levels.len() as u32 + 1));
        self.levels.push(nodes);
    }

    pub(crate) fn levels_mut(&mut self) -> &mut Vec<Vec<Node<C>>> {
        &mut self.levels
    }

    /// 선택된 좌표의 노드들을 꺼내며 트리를 소진한다.
    /// 반환 순서는 (level, index) 오름차순
    pub fn into_basis(self, ids: &[(usize, usize)]) -> Vec<Node<C>> {
        let wanted: HashSet<(usize, usize)> = ids.iter().copied().collect();
        let mut out: Vec<Node<C>> = self
            .levels
            .into_iter()
            .flatten()
            .filter(|n| wanted.contains(&n.order_key()))
            .collect();
        out.sort_by_key(Node::order_key);
        out
    }
}
