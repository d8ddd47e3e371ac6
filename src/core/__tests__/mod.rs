pub mod mock;


// 통합 테스트: 목업 변환으로 분석-합성 전체 경로 확인
#[test]
fn 모듈간_전체_경로_테스트() {
    use self::mock::{random_signal, PairHaar};
    use super::{best_basis, reconstruct, threshold_cost};

    let signal = random_signal(32, 7);
    let basis = best_basis(&signal, &PairHaar, threshold_cost(0.1), 4).unwrap();
    assert!(!basis.is_empty(), "기저가 비어 있음");

    let restored = reconstruct(basis, &PairHaar).unwrap();
    let max_diff = signal
        .iter()
        .zip(restored.iter())
        .map(|(a, b)| (a - b).abs())
        .fold(0.0f32, f32::max);
    assert!(max_diff < 1e-4, "복원 오차 과대: {}", max_diff);

    println!("✅ collect → mark → traverse → reconstruct 왕복 확인");
}
