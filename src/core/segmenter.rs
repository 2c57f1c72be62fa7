//! 문장 분리기
//!
//! 짧은 관찰 메모를 위한 휴리스틱 분리기입니다. 줄바꿈, 문장부호,
//! 명사형 종결(함/음/임) 뒤 공백 순으로 경계를 찾습니다.

use super::unicode::has_mieum_tail;

/// 기록 문장 수
pub const SENTENCE_COUNT: usize = 5;

/// 문장 끝 문장부호
const TERMINATORS: [char; 3] = ['.', '!', '?'];

/// 문장부호 없이도 문장 경계로 보는 종결 글자
const ENDING_MARKERS: [char; 3] = ['함', '음', '임'];

/// 문장 본문과 끝 문장부호
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sentence<'a> {
    /// 문장부호를 뗀 본문 (앞뒤 공백 제거)
    pub body: &'a str,
    /// 끝 문장부호 묶음 (없으면 빈 문자열)
    pub terminator: &'a str,
}

impl<'a> Sentence<'a> {
    pub fn parse(text: &'a str) -> Self {
        let trimmed = text.trim();
        // `잘함. .`처럼 공백을 사이에 둔 부호 묶음도 모두 떼어냄
        let body = trimmed.trim_end_matches(|c: char| TERMINATORS.contains(&c) || c.is_whitespace());
        Self {
            body,
            terminator: &trimmed[body.len()..],
        }
    }
}

/// 명사형 종결 여부 (마지막 글자의 받침이 ㅁ)
///
/// 정규화기와 검증기가 공유하는 유일한 종결 판정 기준입니다.
/// 함/음/임 및 됨/김/남 같은 축약형이 모두 여기에 해당합니다.
pub fn ends_canonically(text: &str) -> bool {
    Sentence::parse(text)
        .body
        .chars()
        .next_back()
        .is_some_and(has_mieum_tail)
}

/// 연속 공백을 하나로 줄이고 앞뒤 공백 제거
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// 원문을 최대 5개의 문장 단위로 분리
///
/// 1. 줄 단위로 5개 이상이면 앞 5개
/// 2. 문장부호/종결 글자 기준으로 5개 이상이면 앞 5개
/// 3. 줄 단위 결과가 더 많으면 줄 단위 결과
/// 4. 그 외에는 문장부호 기준 결과 (5개 미만일 수 있음)
///
/// 한 줄에 문장이 여럿이면 줄 안에서도 같은 경계로 다시 나눕니다.
pub fn segment(text: &str) -> Vec<String> {
    let lines: Vec<String> = text
        .lines()
        .flat_map(|line| split_rough(&collapse_whitespace(line)))
        .collect();
    if lines.len() >= SENTENCE_COUNT {
        return lines.into_iter().take(SENTENCE_COUNT).collect();
    }

    let rough = split_rough(&collapse_whitespace(text));
    if rough.len() >= SENTENCE_COUNT {
        return rough.into_iter().take(SENTENCE_COUNT).collect();
    }

    if !lines.is_empty() && lines.len() > rough.len() {
        log::debug!("segment: 줄 단위 분리 사용 ({}개)", lines.len());
        return lines;
    }
    rough
}

/// 공백 앞 글자가 문장부호이거나 종결 글자이면 경계
fn split_rough(collapsed: &str) -> Vec<String> {
    split_at(collapsed, |prev| {
        TERMINATORS.contains(&prev) || ENDING_MARKERS.contains(&prev)
    })
}

/// 문장부호 뒤에서만 분리 (개수 제한 없음)
///
/// 검증기의 문장 수 계산과 자동 교정의 재분리에 사용합니다.
/// 각 조각은 문장부호를 포함한 채로 반환됩니다.
pub fn split_terminated(text: &str) -> Vec<String> {
    split_at(&collapse_whitespace(text), |prev| TERMINATORS.contains(&prev))
}

fn split_at(text: &str, is_boundary: impl Fn(char) -> bool) -> Vec<String> {
    let mut units = Vec::new();
    let mut start = 0;
    let mut prev: Option<char> = None;

    for (idx, c) in text.char_indices() {
        if c.is_whitespace() && prev.is_some_and(&is_boundary) {
            units.push(&text[start..idx]);
            start = idx;
        }
        prev = Some(c);
    }
    units.push(&text[start..]);

    // 부호만 남은 조각(`.`, `!?`)은 문장이 아님
    units
        .into_iter()
        .map(str::trim)
        .filter(|u| !Sentence::parse(u).body.is_empty())
        .map(String::from)
        .collect()
}
