//! 규칙 위반 자동 교정
//!
//! 어떤 입력이든 5문장 문자열을 돌려줍니다. 결과가 모든 검사를 통과한다는
//! 보장은 없으므로 호출 측에서 다시 검증해야 합니다.

use crate::config::RefinerConfig;
use crate::core::patterns::apply_all;
use crate::core::segmenter::{collapse_whitespace, ends_canonically, split_terminated};
use crate::refine::rules::DEFAULT_ENDING;
use crate::refine::{fit_sentence_count, render, LengthGovernor};

use super::rules::{BANNED_SUBJECTS, FORBIDDEN_PUNCTUATION, NEGATIVE_RULES};

/// 설정을 지정하여 자동 교정
pub fn auto_fix_with(text: &str, config: &RefinerConfig) -> String {
    let cleaned = clean(text);
    log::debug!("auto_fix: 정리 후 '{}'", cleaned);

    let mut bodies: Vec<String> = split_units(&cleaned)
        .iter()
        .map(|unit| fix_ending(unit, &config.filler_sentence))
        .collect();
    fit_sentence_count(&mut bodies, &config.filler_sentence);
    LengthGovernor::for_fix(config).govern(&mut bodies);
    render(&bodies)
}

/// 줄바꿈/금지 문장부호/금지 주체 제거 후 부정 표현 치환
fn clean(text: &str) -> String {
    let stripped: String = collapse_whitespace(text)
        .chars()
        .filter(|c| !FORBIDDEN_PUNCTUATION.contains(c))
        .collect();
    let without_subjects = BANNED_SUBJECTS
        .iter()
        .fold(stripped, |acc, subject| acc.replace(subject, ""));
    collapse_whitespace(&apply_all(&NEGATIVE_RULES, &without_subjects))
}

/// 마침표 기준으로 나누고, 한 덩어리뿐이면 쉼표 기준으로 나눔
fn split_units(text: &str) -> Vec<String> {
    let units = split_terminated(text);
    if units.len() > 1 {
        return units;
    }
    text.split(',')
        .map(str::trim)
        .filter(|u| !u.is_empty())
        .map(String::from)
        .collect()
}

fn fix_ending(unit: &str, filler: &str) -> String {
    let body = unit.trim().trim_end_matches(['.', ',']).trim_end();
    let body = if body.is_empty() { filler.trim() } else { body };
    if ends_canonically(body) {
        body.to_string()
    } else {
        format!("{}{}", body, DEFAULT_ENDING)
    }
}
