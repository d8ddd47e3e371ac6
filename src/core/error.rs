//! 공통 오류 타입

use thiserror::Error;

/// 웨이블릿 패킷 엔진의 오류.
/// 재시도나 부분 결과 없이 즉시 전파되며 진단 맥락을 그대로 담는다
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WpError {
    /// 배열 형상이 분기 계수나 분해 깊이와 맞지 않음
    #[error("분해 불가능한 배열 형상 {shape:?} (분기 계수 {arity})")]
    Shape { shape: Vec<usize>, arity: usize },

    /// 변환 프리미티브(forward/inverse) 실패.
    /// 문제가 된 좌표와 형상을 담는다
    #[error("변환 실패 (level={level}, index={index}, shape={shape:?}): {reason}")]
    Transform {
        level: usize,
        index: usize,
        shape: Vec<usize>,
        reason: String,
    },

    /// 복원 입력이 올바른 트리 절단이 아님
    #[error("트리 절단 전제조건 위반: {reason}")]
    Precondition { reason: String },
}
