//! 기록체 → 학부모용 말투 변환
//!
//! 문장부호 단위로 나눈 뒤 각 문장의 명사형 종결을 합쇼체(공지용) 또는
//! 해요체(소통용)로 바꿉니다. 알아볼 수 없는 종결은 원문 그대로 둡니다.

mod conjugate;

pub use conjugate::{conjugate, EndingShape};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::segmenter::Sentence;

/// 출력 말투
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PersonaMode {
    /// 기록체 그대로 (유아발달상황)
    #[default]
    #[serde(alias = "default")]
    Plain,
    /// 합쇼체 (학부모 공지)
    Polite,
    /// 해요체 (학부모 소통)
    Soft,
}

impl PersonaMode {
    pub const ALL: [PersonaMode; 3] = [PersonaMode::Plain, PersonaMode::Polite, PersonaMode::Soft];

    /// 화면 표시용 이름
    pub fn label(self) -> &'static str {
        match self {
            PersonaMode::Plain => "유아발달상황",
            PersonaMode::Polite => "학부모님께 (공지)",
            PersonaMode::Soft => "학부모님께 (소통)",
        }
    }

    fn key(self) -> &'static str {
        match self {
            PersonaMode::Plain => "plain",
            PersonaMode::Polite => "polite",
            PersonaMode::Soft => "soft",
        }
    }
}

impl fmt::Display for PersonaMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// 알 수 없는 말투 이름
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPersona(pub String);

impl fmt::Display for UnknownPersona {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "알 수 없는 말투: {} (plain, polite, soft 중 하나)",
            self.0
        )
    }
}

impl std::error::Error for UnknownPersona {}

impl FromStr for PersonaMode {
    type Err = UnknownPersona;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plain" | "default" => Ok(PersonaMode::Plain),
            "polite" | "formal" | "formal-polite" => Ok(PersonaMode::Polite),
            "soft" | "casual" | "soft-colloquial" => Ok(PersonaMode::Soft),
            _ => Err(UnknownPersona(s.to_string())),
        }
    }
}

/// 기록체 문단을 말투에 맞게 변환
///
/// `Plain`은 입력을 그대로 돌려줍니다. 그 외에는 문장 사이 공백 하나로
/// 다시 이어 붙이며, 문장부호가 없는 마지막 조각도 버리지 않습니다.
pub fn convert(text: &str, mode: PersonaMode) -> String {
    if mode == PersonaMode::Plain {
        return text.to_string();
    }

    let converted: Vec<String> = split_chunks(text)
        .into_iter()
        .map(|chunk| {
            let sentence = Sentence::parse(chunk);
            match conjugate(sentence.body, mode) {
                Some(body) => format!("{}.", body),
                None => {
                    log::debug!("말투 변환 불가, 원문 유지: '{}'", chunk);
                    chunk.to_string()
                }
            }
        })
        .collect();
    converted.join(" ")
}

/// 문장부호 묶음 뒤에서 자름. 끝의 부호 없는 조각도 포함
fn split_chunks(text: &str) -> Vec<&str> {
    let mut chunks = Vec::new();
    let mut start = 0;
    let mut prev_terminal = false;

    for (idx, c) in text.char_indices() {
        let terminal = matches!(c, '.' | '!' | '?');
        if prev_terminal && !terminal {
            chunks.push(&text[start..idx]);
            start = idx;
        }
        prev_terminal = terminal;
    }
    chunks.push(&text[start..]);

    chunks
        .into_iter()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .collect()
}
