pub mod audit;
pub mod config;
pub mod core;
pub mod draft;
pub mod persona;
pub mod refine;

pub use audit::{CheckKind, CheckResult, ValidationReport};
pub use config::RefinerConfig;
pub use persona::PersonaMode;
pub use refine::Refiner;

/// 원문 → 5문장 기록체 (기본 설정)
pub fn normalize(raw: &str) -> String {
    Refiner::new().normalize(raw)
}

/// 기록체 → 말투 변환
pub fn convert_persona(text: &str, mode: PersonaMode) -> String {
    persona::convert(text, mode)
}

/// 기록 규칙 검증 (기본 설정)
pub fn validate(text: &str, context: &str, evidence: &str) -> ValidationReport {
    audit::validate(text, context, evidence)
}

/// 자동 교정 (기본 설정)
pub fn auto_fix(text: &str) -> String {
    audit::auto_fix(text)
}
