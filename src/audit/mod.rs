//! 기록 규칙 검증과 자동 교정

mod autofix;
mod report;
pub mod rules;
mod validator;

pub use autofix::auto_fix_with;
pub use report::{CheckKind, CheckResult, ValidationReport};
pub use validator::{banned_subjects, negative_phrases, possible_names, validate_with};

use crate::config::RefinerConfig;

/// 기본 설정으로 검증
pub fn validate(text: &str, context: &str, evidence: &str) -> ValidationReport {
    validate_with(text, context, evidence, &RefinerConfig::default())
}

/// 기본 설정으로 자동 교정
pub fn auto_fix(text: &str) -> String {
    auto_fix_with(text, &RefinerConfig::default())
}
