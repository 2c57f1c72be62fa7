//! 글자수 상한 적용
//!
//! 가장 긴 문장부터 서술어 앞부분을 일정 글자씩 잘라냅니다. 마지막 어절
//! (서술어)은 남겨 두므로 잘라낸 뒤에도 명사형 종결이 유지됩니다.
//! 한 번에 잘라내는 글자 수(step)는 문장 끝을 자를 때와 같고, 자르는 위치만
//! 서술어 앞으로 옮겼습니다.

use crate::config::RefinerConfig;

/// 문장 본문들을 `". "`로 잇고 끝에 마침표를 붙임
pub fn render(bodies: &[String]) -> String {
    if bodies.is_empty() {
        return String::new();
    }
    let mut out = bodies.join(". ");
    out.push('.');
    out
}

/// `render` 결과의 글자 수
pub fn rendered_len(bodies: &[String]) -> usize {
    if bodies.is_empty() {
        return 0;
    }
    let chars: usize = bodies.iter().map(|b| b.chars().count()).sum();
    chars + 2 * (bodies.len() - 1) + 1
}

/// 가장 긴 문장을 반복해서 줄이는 글자수 조정기
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthGovernor {
    /// 전체 글자수 상한
    pub max_chars: usize,
    /// 가장 긴 문장이 이 길이 이하이면 중단
    pub floor: usize,
    /// 한 번에 잘라내는 글자 수
    pub step: usize,
}

impl LengthGovernor {
    /// 정규화 단계용 (하한 20, 단위 5)
    pub fn for_normalize(config: &RefinerConfig) -> Self {
        Self {
            max_chars: config.max_chars,
            floor: config.trim_floor,
            step: config.trim_step,
        }
    }

    /// 자동 교정 단계용 (하한 25, 단위 8)
    pub fn for_fix(config: &RefinerConfig) -> Self {
        Self {
            max_chars: config.max_chars,
            floor: config.fix_trim_floor,
            step: config.fix_trim_step,
        }
    }

    /// 상한을 만족하거나 더 줄일 수 없을 때까지 줄임
    ///
    /// 이미 상한 이내이면 아무것도 바꾸지 않습니다.
    pub fn govern(&self, bodies: &mut [String]) {
        while rendered_len(bodies) > self.max_chars {
            let Some((idx, len)) = longest(bodies) else {
                break;
            };
            if len <= self.floor {
                log::debug!(
                    "글자수 {}/{} 초과지만 가장 긴 문장({}자)이 하한 이하",
                    rendered_len(bodies),
                    self.max_chars,
                    len
                );
                break;
            }
            match trim_before_predicate(&bodies[idx], self.step) {
                Some(trimmed) => bodies[idx] = trimmed,
                None => break,
            }
        }
    }
}

/// 가장 긴 문장의 (위치, 글자 수). 길이가 같으면 앞 문장
fn longest(bodies: &[String]) -> Option<(usize, usize)> {
    let mut best: Option<(usize, usize)> = None;
    for (idx, body) in bodies.iter().enumerate() {
        let len = body.chars().count();
        if best.map_or(true, |(_, max)| len > max) {
            best = Some((idx, len));
        }
    }
    best
}

/// 마지막 어절 앞에서 `step`글자를 잘라냄 (줄어들지 않으면 None)
///
/// 어절이 하나뿐이면 마지막 글자 앞에서 잘라냅니다.
fn trim_before_predicate(body: &str, step: usize) -> Option<String> {
    let trimmed = match body.rfind(' ') {
        Some(idx) => {
            let head = drop_tail_chars(&body[..idx], step);
            let predicate = &body[idx + 1..];
            if head.is_empty() {
                predicate.to_string()
            } else {
                format!("{} {}", head, predicate)
            }
        }
        None => {
            let last = body.chars().next_back()?;
            let head = &body[..body.len() - last.len_utf8()];
            format!("{}{}", drop_tail_chars(head, step), last)
        }
    };
    (trimmed.chars().count() < body.chars().count()).then_some(trimmed)
}

fn drop_tail_chars(text: &str, count: usize) -> &str {
    let keep = text.chars().count().saturating_sub(count);
    let end = text
        .char_indices()
        .nth(keep)
        .map_or(text.len(), |(idx, _)| idx);
    text[..end].trim_end()
}
