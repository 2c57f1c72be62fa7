//! 기록 규칙 검사
//!
//! 모든 검사를 항상 수행하며, 실패는 보고서에 데이터로 남깁니다.

use crate::config::RefinerConfig;
use crate::core::segmenter::{
    collapse_whitespace, ends_canonically, split_terminated, SENTENCE_COUNT,
};

use super::report::{CheckKind, CheckResult, ValidationReport};
use super::rules::{is_allowed_char, BANNED_SUBJECTS, NAME_REGEX, NEGATIVE_RULES};

const SUGGEST_CONTEXT: &str = "관찰 맥락(시기·활동)을 함께 입력";
const SUGGEST_EVIDENCE: &str = "관찰 근거가 되는 구체적인 행동을 10자 이상 입력";
const SUGGEST_LENGTH: &str = "가장 긴 문장부터 수식어를 줄여 글자수 상한 이내로 조정";
const SUGGEST_PARAGRAPH: &str = "줄바꿈을 없애고 한 문단으로 작성";
const SUGGEST_PUNCTUATION: &str = "허용 문장부호는 마침표(.), 쉼표(,), 중간점(·)만 남기고 나머지 제거";
const SUGGEST_SUBJECT: &str = "'학생은/그는/그녀는' 같은 주체 표현을 삭제하고 행동 중심으로 시작";
const SUGGEST_NAME: &str = "이름으로 보일 수 있는 'OO는/OO가' 형태를 '또래와/친구와' 같은 표현으로 변경";
const SUGGEST_COUNT: &str = "마침표로 정확히 5문장이 되도록 재구성";
const SUGGEST_ENDING: &str = "각 문장을 '~함/~음/~임' 형태로 마무리";
const SUGGEST_NEGATIVE: &str = "부정 단어를 '시도/도전/키워가고 있음' 같은 성장형 표현으로 치환";

/// 이름 추정 표현 중 메시지에 보여줄 개수
const NAME_HITS_SHOWN: usize = 5;

fn ok_or(passed: bool, failure: &str) -> &str {
    if passed {
        "OK"
    } else {
        failure
    }
}

/// 설정을 지정하여 검증
pub fn validate_with(
    text: &str,
    context: &str,
    evidence: &str,
    config: &RefinerConfig,
) -> ValidationReport {
    let raw = collapse_whitespace(text);
    let mut report = ValidationReport::default();

    let context_ok = context.trim().chars().count() >= config.min_context_chars;
    report.push(CheckResult::new(
        CheckKind::Context,
        context_ok,
        format!("관찰 맥락 입력 {}", ok_or(context_ok, "부족")),
    ));

    let evidence_ok = evidence.trim().chars().count() >= config.min_evidence_chars;
    report.push(CheckResult::new(
        CheckKind::Evidence,
        evidence_ok,
        format!(
            "관찰 근거 입력 {}",
            ok_or(
                evidence_ok,
                &format!("부족({}자 이상 권장)", config.min_evidence_chars)
            )
        ),
    ));

    let total = raw.chars().count();
    let length_ok = total <= config.max_chars;
    report.push(CheckResult::new(
        CheckKind::Length,
        length_ok,
        format!("글자수 {}/{}", total, config.max_chars),
    ));

    let paragraph_ok = !text.contains(['\n', '\r']);
    report.push(CheckResult::new(
        CheckKind::SingleParagraph,
        paragraph_ok,
        format!("1문단(줄바꿈 없음) {}", ok_or(paragraph_ok, "NG")),
    ));

    let punctuation_ok = raw.chars().all(is_allowed_char);
    report.push(CheckResult::new(
        CheckKind::Punctuation,
        punctuation_ok,
        format!("문장부호 제한(. , · 만) {}", ok_or(punctuation_ok, "NG")),
    ));

    let subjects = banned_subjects(&raw);
    report.push(CheckResult::new(
        CheckKind::BannedSubject,
        subjects.is_empty(),
        format!(
            "금지 주체(학생은/그는/그녀는 등) {}",
            ok_or(subjects.is_empty(), &format!("NG: {}", subjects.join(", ")))
        ),
    ));

    let names = possible_names(&raw, config.name_hit_cap);
    report.push(CheckResult::new(
        CheckKind::NameLeak,
        names.is_empty(),
        format!("이름 추정 표현 {}", ok_or(names.is_empty(), &name_warning(&names))),
    ));

    let sentences = split_terminated(&raw);
    let count_ok = sentences.len() == SENTENCE_COUNT;
    report.push(CheckResult::new(
        CheckKind::SentenceCount,
        count_ok,
        format!("문장 수 {}/{}", sentences.len(), SENTENCE_COUNT),
    ));

    let mut endings_ok = true;
    for (idx, sentence) in sentences.iter().enumerate() {
        let ok = ends_canonically(sentence);
        endings_ok &= ok;
        report.push(CheckResult::new(
            CheckKind::Ending(idx + 1),
            ok,
            format!("{}문장 종결(~함/~음/~임) {}", idx + 1, ok_or(ok, "NG")),
        ));
    }

    let negatives = negative_phrases(&raw);
    report.push(CheckResult::new(
        CheckKind::NegativePhrase,
        negatives.is_empty(),
        format!(
            "부정표현 감지 {}",
            ok_or(negatives.is_empty(), "주의(완화 권장)")
        ),
    ));

    let suggestions = [
        (context_ok, SUGGEST_CONTEXT),
        (evidence_ok, SUGGEST_EVIDENCE),
        (length_ok, SUGGEST_LENGTH),
        (paragraph_ok, SUGGEST_PARAGRAPH),
        (punctuation_ok, SUGGEST_PUNCTUATION),
        (subjects.is_empty(), SUGGEST_SUBJECT),
        (names.is_empty(), SUGGEST_NAME),
        (count_ok, SUGGEST_COUNT),
        (endings_ok, SUGGEST_ENDING),
        (negatives.is_empty(), SUGGEST_NEGATIVE),
    ];
    for (passed, suggestion) in suggestions {
        if !passed {
            report.suggest(suggestion);
        }
    }

    log::debug!(
        "validate: {}개 검사 중 {}개 실패",
        report.checks.len(),
        report.failures().count()
    );
    report.sentences = sentences;
    report.text = raw;
    report
}

/// 본문에 포함된 금지 주체 표현
pub fn banned_subjects(text: &str) -> Vec<&'static str> {
    BANNED_SUBJECTS
        .iter()
        .copied()
        .filter(|subject| text.contains(subject))
        .collect()
}

/// 이름 + 조사로 보이는 표현 (최대 `cap`개)
pub fn possible_names(text: &str, cap: usize) -> Vec<String> {
    let Some(re) = NAME_REGEX.as_ref() else {
        return Vec::new();
    };
    re.find_iter(text)
        .take(cap)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// 본문에서 발견된 부정 표현 패턴
pub fn negative_phrases(text: &str) -> Vec<&'static str> {
    NEGATIVE_RULES
        .iter()
        .filter(|rule| rule.is_match(text))
        .map(|rule| rule.source.pattern)
        .collect()
}

fn name_warning(names: &[String]) -> String {
    let shown: Vec<&str> = names
        .iter()
        .take(NAME_HITS_SHOWN)
        .map(String::as_str)
        .collect();
    let ellipsis = if names.len() > NAME_HITS_SHOWN { "..." } else { "" };
    format!("주의: {}{}", shown.join(", "), ellipsis)
}
