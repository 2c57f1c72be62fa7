//! 문장 단위 기록체 변환
//!
//! 화자 표현 제거 → 이름 추정 표현 제거 → 긍정 재구성 → 종결어미 변환 순서로
//! 한 문장을 처리합니다. 문장을 버리는 경우는 없습니다.

use lazy_static::lazy_static;
use regex::Regex;

use crate::core::patterns::{apply_all, compile_pattern, compile_table, CompiledRule};
use crate::core::segmenter::{ends_canonically, Sentence};

use super::rules::{
    DEFAULT_ENDING, ENDING_RULES, NAME_PARTICLE_PATTERN, OPENERS, REFRAMING_RULES,
};

lazy_static! {
    static ref NAME_PARTICLE: Option<Regex> = compile_pattern(NAME_PARTICLE_PATTERN);
    static ref REFRAMING: Vec<CompiledRule> = compile_table(REFRAMING_RULES);
}

/// 한 문장을 기록체로 변환 (끝에 마침표 포함)
pub fn normalize_sentence(unit: &str) -> String {
    let mut body = refine_body(unit);
    body.push('.');
    body
}

/// 한 문장을 기록체로 변환 (마침표 없는 본문)
pub fn refine_body(unit: &str) -> String {
    let sentence = Sentence::parse(unit);
    if !sentence.terminator.is_empty() && sentence.terminator != "." {
        log::trace!("문장부호 '{}' → '.'", sentence.terminator);
    }

    let text = strip_opener(sentence.body);
    let text = strip_name_particles(text);
    let text = reframe(&text);
    let text = apply_ending_rules(text.trim());
    log::trace!("기록체 변환: '{}' → '{}'", unit, text);
    text
}

/// 문장 앞 화자/호칭 표현 하나 제거
pub fn strip_opener(text: &str) -> &str {
    OPENERS
        .iter()
        .find_map(|opener| text.strip_prefix(*opener))
        .map_or(text, str::trim_start)
}

/// `OO는 `, `OO가 ` 형태 제거 (이름이 아닌 명사도 함께 지워질 수 있음)
pub fn strip_name_particles(text: &str) -> String {
    match NAME_PARTICLE.as_ref() {
        Some(re) => re.replace_all(text, "").into_owned(),
        None => text.to_string(),
    }
}

/// 결핍 표현을 성장 표현으로 치환
pub fn reframe(text: &str) -> String {
    apply_all(&REFRAMING, text)
}

/// 첫 번째로 맞는 종결어미 규칙 적용, 없으면 기본 어미 추가
pub fn apply_ending_rules(text: &str) -> String {
    for rule in ENDING_RULES {
        if let Some(rewritten) = rule.apply(text) {
            log::trace!("종결어미 규칙 '{}' 적용", rule.name);
            return rewritten;
        }
    }
    if ends_canonically(text) {
        text.to_string()
    } else {
        format!("{}{}", text, DEFAULT_ENDING)
    }
}
