//! 정규식 치환 규칙 공통 타입
//!
//! 규칙 테이블은 `&'static` 데이터로 두고, 프로세스당 한 번만 컴파일합니다.
//! 컴파일에 실패한 패턴은 경고 후 테이블에서 빠지므로 해당 단계는
//! 항등 변환으로 동작합니다.

use regex::Regex;

/// (패턴, 치환문) 쌍
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternRule {
    pub pattern: &'static str,
    pub replacement: &'static str,
}

/// 컴파일된 치환 규칙
#[derive(Debug)]
pub struct CompiledRule {
    pub source: PatternRule,
    pub regex: Regex,
}

impl CompiledRule {
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    pub fn replace_all(&self, text: &str) -> String {
        self.regex
            .replace_all(text, self.source.replacement)
            .into_owned()
    }
}

/// 패턴 하나 컴파일 (실패 시 None)
pub fn compile_pattern(pattern: &str) -> Option<Regex> {
    match Regex::new(pattern) {
        Ok(re) => Some(re),
        Err(e) => {
            log::warn!("정규식 컴파일 실패, 규칙 무시: {} ({})", pattern, e);
            None
        }
    }
}

/// 테이블 순서를 유지하며 컴파일
pub fn compile_table(rules: &[PatternRule]) -> Vec<CompiledRule> {
    rules
        .iter()
        .filter_map(|&source| {
            compile_pattern(source.pattern).map(|regex| CompiledRule { source, regex })
        })
        .collect()
}

/// 모든 규칙을 순서대로 적용
pub fn apply_all(rules: &[CompiledRule], text: &str) -> String {
    rules
        .iter()
        .fold(text.to_string(), |acc, rule| rule.replace_all(&acc))
}
