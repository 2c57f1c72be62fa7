//! 명사형 종결 → 합쇼체/해요체 활용
//!
//! 사전 없이 마지막 음절의 받침과 모음만 보고 어미를 고릅니다.
//! 불규칙 용언은 처리하지 않습니다.

use crate::core::unicode::{
    has_final_consonant, has_mieum_tail, strip_final_consonant, tail, vowel, vowel_class,
    Syllable, VowelClass,
};

use super::PersonaMode;

/// 해요체에서 모양만으로는 틀리는 종결 (동사 `보이다`의 명사형 등)
const SOFT_OVERRIDES: &[(&str, &str)] = &[("보임", "보여요")];

/// 문장 끝 모양
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndingShape {
    /// ㅆ 받침 + 음 (했음, 쌓았음, 있음)
    Past,
    /// 함
    Ha,
    /// 임
    Copula,
    /// 됨
    Doe,
    /// 그 밖의 음 (많음, 먹음)
    Eum,
    /// 그 밖의 ㅁ 받침 (즐김, 나타남, 봄)
    MieumFinal,
    /// 받침 없는 어간 (보이, 가)
    OpenStem,
    /// ㅁ 이외의 받침 (먹, 좋)
    ClosedStem,
}

impl EndingShape {
    /// 본문 끝 모양 판별 (한글로 끝나지 않으면 None)
    pub fn detect(body: &str) -> Option<Self> {
        let mut chars = body.chars().rev();
        let last = chars.next()?;
        let before = chars.next();
        let syllable = Syllable::decode(last)?;

        let shape = match last {
            '음' if before
                .and_then(Syllable::decode)
                .is_some_and(|s| s.tail == tail::SSANGSIOS) =>
            {
                Self::Past
            }
            '함' => Self::Ha,
            '임' => Self::Copula,
            '됨' => Self::Doe,
            '음' => Self::Eum,
            _ if has_mieum_tail(last) => Self::MieumFinal,
            _ if syllable.has_tail() => Self::ClosedStem,
            _ => Self::OpenStem,
        };
        Some(shape)
    }
}

/// 마침표 없는 본문을 말투에 맞게 활용 (모르는 모양이면 None)
pub fn conjugate(body: &str, mode: PersonaMode) -> Option<String> {
    let shape = EndingShape::detect(body)?;
    let last = body.chars().next_back()?;
    let stem = &body[..body.len() - last.len_utf8()];

    let converted = match mode {
        PersonaMode::Plain => body.to_string(),
        PersonaMode::Polite => polite(body, stem, last, shape),
        PersonaMode::Soft => soft(body, stem, last, shape),
    };
    Some(converted)
}

/// 합쇼체: 했음 → 했습니다, 함 → 합니다, 즐김 → 즐깁니다
fn polite(body: &str, stem: &str, last: char, shape: EndingShape) -> String {
    match shape {
        EndingShape::Past | EndingShape::Eum => format!("{}습니다", stem),
        EndingShape::Ha
        | EndingShape::Copula
        | EndingShape::Doe
        | EndingShape::MieumFinal
        | EndingShape::OpenStem => format!("{}{}니다", stem, set_tail(last, tail::BIEUP)),
        EndingShape::ClosedStem => format!("{}습니다", body),
    }
}

/// 해요체: 했음 → 했어요, 함 → 해요, 많음 → 많아요, 즐김 → 즐겨요
fn soft(body: &str, stem: &str, last: char, shape: EndingShape) -> String {
    if let Some((ending, replacement)) = SOFT_OVERRIDES
        .iter()
        .find(|(ending, _)| body.ends_with(ending))
    {
        return format!("{}{}", &body[..body.len() - ending.len()], replacement);
    }

    match shape {
        EndingShape::Past => format!("{}어요", stem),
        EndingShape::Ha => format!("{}해요", stem),
        EndingShape::Doe => format!("{}돼요", stem),
        EndingShape::Copula => match stem.chars().next_back() {
            Some(prev) if !has_final_consonant(prev) => format!("{}예요", stem),
            _ => format!("{}이에요", stem),
        },
        EndingShape::Eum => {
            let harmony = stem.chars().next_back().map_or(VowelClass::Dark, vowel_class);
            format!("{}{}", stem, harmony_suffix(harmony))
        }
        EndingShape::MieumFinal => contract(stem, strip_final_consonant(last)),
        EndingShape::OpenStem => contract(stem, last),
        EndingShape::ClosedStem => format!("{}{}", body, harmony_suffix(vowel_class(last))),
    }
}

fn harmony_suffix(class: VowelClass) -> &'static str {
    match class {
        VowelClass::Bright => "아요",
        VowelClass::Dark => "어요",
    }
}

fn set_tail(c: char, new_tail: u32) -> char {
    Syllable::decode(c)
        .and_then(|s| s.with_tail(new_tail).compose())
        .unwrap_or(c)
}

/// 받침 없는 어간 + 아요/어요 축약
///
/// 가 → 가요, 보 → 봐요, 배우 → 배워요, 즐기 → 즐겨요, 기쁘 → 기뻐요
fn contract(prefix: &str, open: char) -> String {
    if open == '하' {
        return format!("{}해요", prefix);
    }
    let Some(syllable) = Syllable::decode(open) else {
        return format!("{}{}어요", prefix, open);
    };

    let fused = match syllable.vowel {
        vowel::A | vowel::AE | vowel::EO | vowel::E | vowel::YEO => Some(syllable),
        vowel::O => Some(syllable.with_vowel(vowel::WA)),
        vowel::U => Some(syllable.with_vowel(vowel::WO)),
        vowel::I => Some(syllable.with_vowel(vowel::YEO)),
        vowel::OE => Some(syllable.with_vowel(vowel::WAE)),
        vowel::EU => {
            let prev = prefix.chars().next_back().map_or(VowelClass::Dark, vowel_class);
            Some(syllable.with_vowel(match prev {
                VowelClass::Bright => vowel::A,
                VowelClass::Dark => vowel::EO,
            }))
        }
        _ => None,
    };

    match fused.and_then(Syllable::compose) {
        Some(c) => format!("{}{}요", prefix, c),
        None => format!("{}{}{}", prefix, open, harmony_suffix(syllable.vowel_class())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn polite_of(body: &str) -> Option<String> {
        conjugate(body, PersonaMode::Polite)
    }

    fn soft_of(body: &str) -> Option<String> {
        conjugate(body, PersonaMode::Soft)
    }

    #[test]
    fn test_detect_shapes() {
        assert_eq!(EndingShape::detect("쌓았음"), Some(EndingShape::Past));
        assert_eq!(EndingShape::detect("흥미가 있음"), Some(EndingShape::Past));
        assert_eq!(EndingShape::detect("참여함"), Some(EndingShape::Ha));
        assert_eq!(EndingShape::detect("인상적임"), Some(EndingShape::Copula));
        assert_eq!(EndingShape::detect("확장됨"), Some(EndingShape::Doe));
        assert_eq!(EndingShape::detect("많음"), Some(EndingShape::Eum));
        assert_eq!(EndingShape::detect("즐김"), Some(EndingShape::MieumFinal));
        assert_eq!(EndingShape::detect("보이"), Some(EndingShape::OpenStem));
        assert_eq!(EndingShape::detect("먹"), Some(EndingShape::ClosedStem));
        assert_eq!(EndingShape::detect("hello"), None);
        assert_eq!(EndingShape::detect(""), None);
    }

    #[test]
    fn test_polite() {
        assert_eq!(polite_of("블록을 쌓았음").as_deref(), Some("블록을 쌓았습니다"));
        assert_eq!(polite_of("놀이에 참여함").as_deref(), Some("놀이에 참여합니다"));
        assert_eq!(polite_of("인상적임").as_deref(), Some("인상적입니다"));
        assert_eq!(polite_of("표현력이 확장됨").as_deref(), Some("표현력이 확장됩니다"));
        assert_eq!(polite_of("흥미가 많음").as_deref(), Some("흥미가 많습니다"));
        assert_eq!(polite_of("탐구를 즐김").as_deref(), Some("탐구를 즐깁니다"));
        assert_eq!(polite_of("변화가 나타남").as_deref(), Some("변화가 나타납니다"));
        assert_eq!(polite_of("배려하는 태도를 보이").as_deref(), Some("배려하는 태도를 보입니다"));
        assert_eq!(polite_of("밥을 먹").as_deref(), Some("밥을 먹습니다"));
        assert_eq!(polite_of("ok"), None);
    }

    #[test]
    fn test_soft_fixed_endings() {
        assert_eq!(soft_of("블록을 쌓았음").as_deref(), Some("블록을 쌓았어요"));
        assert_eq!(soft_of("흥미가 있음").as_deref(), Some("흥미가 있어요"));
        assert_eq!(soft_of("놀이에 참여함").as_deref(), Some("놀이에 참여해요"));
        assert_eq!(soft_of("표현력이 확장됨").as_deref(), Some("표현력이 확장돼요"));
    }

    #[test]
    fn test_soft_copula_by_final_consonant() {
        assert_eq!(soft_of("인상적임").as_deref(), Some("인상적이에요"));
        assert_eq!(soft_of("좋은 친구임").as_deref(), Some("좋은 친구예요"));
        assert_eq!(soft_of("임").as_deref(), Some("이에요"));
        // 동사 보이다는 예외 표로 처리
        assert_eq!(soft_of("창의적인 태도를 보임").as_deref(), Some("창의적인 태도를 보여요"));
        assert_eq!(soft_of("돋보임").as_deref(), Some("돋보여요"));
    }

    #[test]
    fn test_soft_vowel_harmony() {
        assert_eq!(soft_of("흥미가 많음").as_deref(), Some("흥미가 많아요"));
        assert_eq!(soft_of("기분이 좋음").as_deref(), Some("기분이 좋아요"));
        assert_eq!(soft_of("잘 먹음").as_deref(), Some("잘 먹어요"));
        assert_eq!(soft_of("밥을 먹").as_deref(), Some("밥을 먹어요"));
        assert_eq!(soft_of("손을 잡").as_deref(), Some("손을 잡아요"));
    }

    #[test]
    fn test_soft_contraction() {
        assert_eq!(soft_of("탐구를 즐김").as_deref(), Some("탐구를 즐겨요"));
        assert_eq!(soft_of("변화가 나타남").as_deref(), Some("변화가 나타나요"));
        assert_eq!(soft_of("그림을 봄").as_deref(), Some("그림을 봐요"));
        assert_eq!(soft_of("노래를 배움").as_deref(), Some("노래를 배워요"));
        assert_eq!(soft_of("마음이 기쁨").as_deref(), Some("마음이 기뻐요"));
        assert_eq!(soft_of("하루가 바쁨").as_deref(), Some("하루가 바빠요"));
        assert_eq!(soft_of("밖에 감").as_deref(), Some("밖에 가요"));
        assert_eq!(soft_of("친구를 기다리").as_deref(), Some("친구를 기다려요"));
    }

    #[test]
    fn test_unrecognized_is_none() {
        assert_eq!(soft_of("OK"), None);
        assert_eq!(soft_of("123"), None);
        assert_eq!(soft_of(""), None);
    }
}
