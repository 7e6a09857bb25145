//! Built-in dataset: the Optuna execution flow.
//!
//! Pure data. Copy, icons, and accent colors for the six workflow stages,
//! the pruning box, and the GridSearchCV-vs-Optuna comparison table.

use crate::comparison::{
    AdaptiveCandidate, AdaptiveColumn, ComparisonTable, ExhaustiveColumn,
};
use crate::content::{FlowContent, FlowHeader, PruningInfo};
use crate::step::{ColorToken, Step, StepId};

fn step(
    id: u32,
    title: &str,
    code: &str,
    description: &str,
    detail: &str,
    icon: &str,
    accent: &str,
) -> Step {
    Step {
        id: StepId(id),
        title: title.into(),
        code: code.into(),
        description: description.into(),
        detail: detail.into(),
        icon: icon.into(),
        accent: ColorToken::new(accent),
    }
}

/// The bundled Optuna flow content. Always passes
/// [`FlowContent::validate`].
pub fn optuna_flow() -> FlowContent {
    FlowContent {
        header: FlowHeader {
            logo_glyph: "O".into(),
            title: "Optuna 실행 흐름도".into(),
            subtitle: "하이퍼파라미터 최적화가 이루어지는 과정".into(),
        },
        steps: vec![
            step(
                1,
                "Study 생성",
                "study = optuna.create_study(direction=\"maximize\")",
                "최적화 세션을 시작한다\ndirection: minimize(손실) or maximize(정확도)",
                "Study = 전체 최적화 실험 공간",
                "🎯",
                "#6366f1",
            ),
            step(
                2,
                "Trial 시작",
                "study.optimize(objective, n_trials=100)",
                "Trial 1회 = 파라미터 조합 1세트 시도\n100번 반복하며 최적값 탐색",
                "Trial #1 → #2 → ... → #100",
                "🔄",
                "#8b5cf6",
            ),
            step(
                3,
                "파라미터 제안 (Suggest)",
                "trial.suggest_float(\"lr\", 1e-5, 1e-1, log=True)\ntrial.suggest_int(\"max_depth\", 2, 32)",
                "Sampler(TPE)가 이전 결과를 학습해서\n유망한 파라미터 영역을 집중 제안",
                "GridSearch와의 핵심 차이점!",
                "💡",
                "#a855f7",
            ),
            step(
                4,
                "모델 학습 & 평가",
                "model.fit(X_train, y_train)\nscore = cross_val_score(model, X, y, cv=5).mean()",
                "제안받은 파라미터로 모델을 학습하고\n성능(accuracy, F1 등)을 측정",
                "objective 함수 안에서 실행",
                "⚙️",
                "#ec4899",
            ),
            step(
                5,
                "결과 기록 & 학습",
                "return score  # Optuna가 자동 기록",
                "이번 Trial 결과를 저장하고\n다음 Trial의 Suggest에 반영",
                "베이지안 최적화의 핵심 루프",
                "📊",
                "#f43f5e",
            ),
            step(
                6,
                "최적 결과 확인",
                "study.best_params\nstudy.best_value",
                "모든 Trial 중 가장 좋은\n파라미터 조합과 성능을 반환",
                "최종 결과!",
                "🏆",
                "#ef4444",
            ),
        ],
        pruning: PruningInfo {
            title: "⚡ Pruning (조기 중단)".into(),
            description: "학습 중간에 성능이 안 나오면 해당 Trial을 중단하고 다음으로 넘어간다"
                .into(),
            code: "if trial.should_prune(): raise optuna.TrialPruned()".into(),
        },
        comparison: ComparisonTable {
            header_label: "🆚 GridSearchCV vs Optuna 탐색 방식 비교".into(),
            exhaustive: ExhaustiveColumn {
                label: "GridSearchCV".into(),
                accent: ColorToken::new("#ef4444"),
                candidates: vec![
                    "C=0.1".into(),
                    "C=1.0".into(),
                    "C=10".into(),
                    "C=100".into(),
                    "...모든 조합".into(),
                ],
                summary: "→ 순서대로 전부 시도 (무식한 탐색)".into(),
            },
            adaptive: AdaptiveColumn {
                label: "Optuna (TPE)".into(),
                accent: ColorToken::new("#6366f1"),
                candidates: vec![
                    AdaptiveCandidate {
                        value: "C=5.2".into(),
                        note: "랜덤 시작".into(),
                    },
                    AdaptiveCandidate {
                        value: "C=8.1".into(),
                        note: "↑ 좋았으니 근처 탐색".into(),
                    },
                    AdaptiveCandidate {
                        value: "C=7.3".into(),
                        note: "↑ 더 좁혀봄".into(),
                    },
                    AdaptiveCandidate {
                        value: "C=7.8".into(),
                        note: "✓ 최적 근처 집중!".into(),
                    },
                ],
                summary: "→ 결과를 학습해서 똑똑하게 탐색".into(),
            },
        },
        footer_hint: "각 단계를 클릭하면 추가 설명을 볼 수 있습니다".into(),
    }
}
