//! 검증 결과 타입

use serde::Serialize;

/// 검사 항목
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckKind {
    /// 관찰 맥락 입력 길이
    Context,
    /// 관찰 근거 입력 길이
    Evidence,
    /// 전체 글자수
    Length,
    /// 줄바꿈 없음
    SingleParagraph,
    /// 허용 문장부호만 사용
    Punctuation,
    /// 금지 주체 표현
    BannedSubject,
    /// 이름 추정 표현
    NameLeak,
    /// 문장 수
    SentenceCount,
    /// n번째 문장(1부터)의 명사형 종결
    Ending(usize),
    /// 부정 표현
    NegativePhrase,
}

impl CheckKind {
    /// 실패해도 `passed()`를 막지 않는 주의 항목
    ///
    /// 이름 추정은 일반 명사에도 걸리고, 부정 표현은 완화 권장 수준입니다.
    pub fn is_advisory(self) -> bool {
        matches!(self, CheckKind::NameLeak | CheckKind::NegativePhrase)
    }
}

/// 검사 하나의 결과
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    pub kind: CheckKind,
    pub passed: bool,
    pub message: String,
}

impl CheckResult {
    pub fn new(kind: CheckKind, passed: bool, message: impl Into<String>) -> Self {
        Self {
            kind,
            passed,
            message: message.into(),
        }
    }
}

/// 검증 보고서
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    /// 검사 순서대로의 결과
    pub checks: Vec<CheckResult>,
    /// 실패 항목별 수정 제안 (중복 없음)
    pub suggestions: Vec<String>,
    /// 문장 수 계산에 사용한 분리 결과
    pub sentences: Vec<String>,
    /// 공백을 정리한 검사 대상 본문
    pub text: String,
}

impl ValidationReport {
    /// 주의 항목을 제외한 모든 검사 통과 여부
    pub fn passed(&self) -> bool {
        self.checks
            .iter()
            .all(|c| c.passed || c.kind.is_advisory())
    }

    /// 해당 항목의 첫 번째 결과
    pub fn check(&self, kind: CheckKind) -> Option<&CheckResult> {
        self.checks.iter().find(|c| c.kind == kind)
    }

    /// 실패한 검사 (주의 항목 포함)
    pub fn failures(&self) -> impl Iterator<Item = &CheckResult> {
        self.checks.iter().filter(|c| !c.passed)
    }

    pub(crate) fn push(&mut self, check: CheckResult) {
        self.checks.push(check);
    }

    pub(crate) fn suggest(&mut self, suggestion: &str) {
        if !self.suggestions.iter().any(|s| s == suggestion) {
            self.suggestions.push(suggestion.to_string());
        }
    }
}
