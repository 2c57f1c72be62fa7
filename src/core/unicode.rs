//! 유니코드 한글 음절 분해/조합 유틸리티
//!
//! 종결어미 판별, 모음조화, 받침 변형에 필요한 최소한의 음절 연산만 제공합니다.
//! 모든 함수는 전역 상태 없이 코드포인트 산술만으로 동작합니다.

/// 한글 음절 시작 코드포인트 (가)
const HANGUL_SYLLABLE_BASE: u32 = 0xAC00;
/// 한글 음절 마지막 코드포인트 (힣)
const HANGUL_SYLLABLE_LAST: u32 = 0xD7A3;

/// 초성 개수
const CHOSEONG_COUNT: u32 = 19;
/// 중성 개수
const JUNGSEONG_COUNT: u32 = 21;
/// 종성 개수 (종성 없음 포함)
const JONGSEONG_COUNT: u32 = 28;

/// 중성 인덱스: 0=ㅏ 1=ㅐ 2=ㅑ 3=ㅒ 4=ㅓ 5=ㅔ 6=ㅕ 7=ㅖ 8=ㅗ 9=ㅘ 10=ㅙ
///              11=ㅚ 12=ㅛ 13=ㅜ 14=ㅝ 15=ㅞ 16=ㅟ 17=ㅠ 18=ㅡ 19=ㅢ 20=ㅣ
pub mod vowel {
    pub const A: u32 = 0;
    pub const AE: u32 = 1;
    pub const YA: u32 = 2;
    pub const EO: u32 = 4;
    pub const E: u32 = 5;
    pub const YEO: u32 = 6;
    pub const O: u32 = 8;
    pub const WA: u32 = 9;
    pub const WAE: u32 = 10;
    pub const OE: u32 = 11;
    pub const U: u32 = 13;
    pub const WO: u32 = 14;
    pub const EU: u32 = 18;
    pub const I: u32 = 20;
}

/// 종성 인덱스 중 어미 처리에 쓰는 것들
pub mod tail {
    pub const NONE: u32 = 0;
    /// ㅁ: 명사형 어미 `-(으)ㅁ`
    pub const MIEUM: u32 = 16;
    /// ㅂ: 합쇼체 `-ㅂ니다`
    pub const BIEUP: u32 = 17;
    /// ㅆ: 과거 시제 `-았/었-`
    pub const SSANGSIOS: u32 = 20;
}

/// 모음조화 분류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VowelClass {
    /// 양성모음 (ㅏ, ㅑ, ㅗ) → `-아요`
    Bright,
    /// 그 외 → `-어요`
    Dark,
}

/// 완성형 한글 한 글자의 초성/중성/종성 인덱스
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Syllable {
    /// 초성 인덱스 (0~18)
    pub lead: u32,
    /// 중성 인덱스 (0~20)
    pub vowel: u32,
    /// 종성 인덱스 (0~27, 0 = 종성 없음)
    pub tail: u32,
}

impl Syllable {
    /// 완성형 한글을 초성/중성/종성으로 분해 (한글이 아니면 None)
    pub fn decode(c: char) -> Option<Self> {
        let code = c as u32;
        if !(HANGUL_SYLLABLE_BASE..=HANGUL_SYLLABLE_LAST).contains(&code) {
            return None;
        }
        let offset = code - HANGUL_SYLLABLE_BASE;
        Some(Self {
            lead: offset / (JUNGSEONG_COUNT * JONGSEONG_COUNT),
            vowel: (offset / JONGSEONG_COUNT) % JUNGSEONG_COUNT,
            tail: offset % JONGSEONG_COUNT,
        })
    }

    /// 인덱스로 완성형 한글 생성 (범위를 벗어나면 None)
    pub fn compose(self) -> Option<char> {
        if self.lead >= CHOSEONG_COUNT
            || self.vowel >= JUNGSEONG_COUNT
            || self.tail >= JONGSEONG_COUNT
        {
            return None;
        }
        let code = HANGUL_SYLLABLE_BASE
            + (self.lead * JUNGSEONG_COUNT + self.vowel) * JONGSEONG_COUNT
            + self.tail;
        char::from_u32(code)
    }

    /// 종성만 바꾼 음절
    pub fn with_tail(self, tail: u32) -> Self {
        Self { tail, ..self }
    }

    /// 중성만 바꾼 음절
    pub fn with_vowel(self, vowel: u32) -> Self {
        Self { vowel, ..self }
    }

    pub fn has_tail(self) -> bool {
        self.tail != tail::NONE
    }

    pub fn vowel_class(self) -> VowelClass {
        match self.vowel {
            vowel::A | vowel::YA | vowel::O => VowelClass::Bright,
            _ => VowelClass::Dark,
        }
    }
}

/// 문자가 완성형 한글(가-힣)인지 확인
pub fn is_complete_hangul(c: char) -> bool {
    Syllable::decode(c).is_some()
}

/// 받침 유무. 한글이 아닌 문자는 false
pub fn has_final_consonant(c: char) -> bool {
    Syllable::decode(c).is_some_and(Syllable::has_tail)
}

/// 모음조화 분류. 한글이 아닌 문자는 Dark
pub fn vowel_class(c: char) -> VowelClass {
    Syllable::decode(c).map_or(VowelClass::Dark, Syllable::vowel_class)
}

/// 받침이 ㅁ인지 확인 (명사형 종결 판별용)
pub fn has_mieum_tail(c: char) -> bool {
    Syllable::decode(c).is_some_and(|s| s.tail == tail::MIEUM)
}

/// ㅁ 받침을 떼어낸 글자 반환 (감 → 가). ㅁ 받침이 아니면 그대로
pub fn strip_final_consonant(c: char) -> char {
    match Syllable::decode(c) {
        Some(s) if s.tail == tail::MIEUM => s.with_tail(tail::NONE).compose().unwrap_or(c),
        _ => c,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_and_compose() {
        // 가 = ㄱ(0) + ㅏ(0) + 종성 없음
        assert_eq!(Syllable::decode('가'), Some(Syllable { lead: 0, vowel: 0, tail: 0 }));
        // 한 = ㅎ(18) + ㅏ(0) + ㄴ(4)
        assert_eq!(Syllable::decode('한'), Some(Syllable { lead: 18, vowel: 0, tail: 4 }));
        // 함 = ㅎ(18) + ㅏ(0) + ㅁ(16)
        assert_eq!(Syllable::decode('함').map(|s| s.tail), Some(tail::MIEUM));

        for c in ['가', '각', '한', '글', '힣', '쌓', '았'] {
            assert_eq!(Syllable::decode(c).and_then(Syllable::compose), Some(c));
        }

        // 한글이 아닌 문자
        assert_eq!(Syllable::decode('a'), None);
        assert_eq!(Syllable::decode('ㄱ'), None);
        assert_eq!(Syllable::decode('.'), None);
    }

    #[test]
    fn test_compose_out_of_range() {
        assert_eq!(Syllable { lead: 19, vowel: 0, tail: 0 }.compose(), None);
        assert_eq!(Syllable { lead: 0, vowel: 21, tail: 0 }.compose(), None);
        assert_eq!(Syllable { lead: 0, vowel: 0, tail: 28 }.compose(), None);
    }

    #[test]
    fn test_has_final_consonant() {
        assert!(has_final_consonant('함'));
        assert!(has_final_consonant('생'));
        assert!(has_final_consonant('았'));
        assert!(!has_final_consonant('가'));
        assert!(!has_final_consonant('구'));
        // 한글이 아니면 false
        assert!(!has_final_consonant('a'));
        assert!(!has_final_consonant('ㅁ'));
        assert!(!has_final_consonant(' '));
    }

    #[test]
    fn test_vowel_class() {
        // 양성: ㅏ, ㅑ, ㅗ
        assert_eq!(vowel_class('많'), VowelClass::Bright);
        assert_eq!(vowel_class('야'), VowelClass::Bright);
        assert_eq!(vowel_class('좋'), VowelClass::Bright);
        // 음성 및 중성
        assert_eq!(vowel_class('먹'), VowelClass::Dark);
        assert_eq!(vowel_class('있'), VowelClass::Dark);
        assert_eq!(vowel_class('웃'), VowelClass::Dark);
        assert_eq!(vowel_class('와'), VowelClass::Dark);
        // 한글이 아니면 Dark
        assert_eq!(vowel_class('x'), VowelClass::Dark);
    }

    #[test]
    fn test_strip_final_consonant() {
        assert_eq!(strip_final_consonant('감'), '가');
        assert_eq!(strip_final_consonant('봄'), '보');
        assert_eq!(strip_final_consonant('김'), '기');
        // ㅁ 받침이 아니면 그대로
        assert_eq!(strip_final_consonant('각'), '각');
        assert_eq!(strip_final_consonant('가'), '가');
        assert_eq!(strip_final_consonant('a'), 'a');
    }

    #[test]
    fn test_with_tail_mutation() {
        // 남 → 납 (ㅁ → ㅂ)
        let s = Syllable::decode('남').unwrap();
        assert_eq!(s.with_tail(tail::BIEUP).compose(), Some('납'));
        // 보 → 봐 (ㅗ → ㅘ)
        let s = Syllable::decode('보').unwrap();
        assert_eq!(s.with_vowel(vowel::WA).compose(), Some('봐'));
    }
}
