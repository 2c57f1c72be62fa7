//! 기록체 정규화 규칙 테이블
//!
//! 종결어미 테이블은 순서가 곧 의미입니다. 시제가 붙은 구체적인 규칙이
//! 일반적인 `-하다` 계열보다 앞에 있어야 하며, 첫 번째로 맞는 규칙만
//! 적용됩니다.

use crate::core::patterns::PatternRule;
use crate::core::unicode::{tail, Syllable};

/// 어간 조건
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StemGuard {
    /// 조건 없음
    Any,
    /// 어미 바로 앞 글자가 ㅆ 받침 (과거 시제 `-았/었-`)
    PastTense,
}

/// 문장 끝 어미 → 명사형 종결 규칙
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndingRule {
    pub name: &'static str,
    /// 문장 끝에 올 수 있는 어미 후보
    pub suffixes: &'static [&'static str],
    /// 어미를 대체할 종결형
    pub replacement: &'static str,
    pub guard: StemGuard,
}

impl EndingRule {
    /// 규칙이 맞으면 치환된 문장 반환
    ///
    /// 여러 후보가 맞으면 가장 긴 어미를 치환합니다.
    pub fn apply(&self, text: &str) -> Option<String> {
        let stem = self
            .suffixes
            .iter()
            .filter_map(|suffix| text.strip_suffix(*suffix))
            .filter(|stem| self.guard_holds(stem))
            .min_by_key(|stem| stem.len())?;
        Some(format!("{}{}", stem, self.replacement))
    }

    fn guard_holds(&self, stem: &str) -> bool {
        match self.guard {
            StemGuard::Any => true,
            StemGuard::PastTense => stem
                .chars()
                .next_back()
                .and_then(Syllable::decode)
                .is_some_and(|s| s.tail == tail::SSANGSIOS),
        }
    }
}

const fn rule(
    name: &'static str,
    suffixes: &'static [&'static str],
    replacement: &'static str,
) -> EndingRule {
    EndingRule {
        name,
        suffixes,
        replacement,
        guard: StemGuard::Any,
    }
}

/// 종결어미 규칙 (순서 유지 필수)
pub const ENDING_RULES: &[EndingRule] = &[
    rule("did", &["했습니다", "했어요", "했음", "했다", "했어"], "했음"),
    rule("looked", &["보였습니다", "보였어요", "보였다", "보였어"], "보였음"),
    rule("played", &["놀았습니다", "놀았어요", "놀았다", "놀았어"], "놀았음"),
    rule("ate", &["먹었습니다", "먹었어요", "먹었다", "먹었어"], "먹었음"),
    rule("fought", &["싸웠습니다", "싸웠어요", "싸웠다", "싸웠어"], "갈등이 있었음"),
    rule("does", &["합니다", "해요", "한다", "해"], "함"),
    rule("is", &["입니다", "이에요", "이야", "이라서"], "임"),
    rule("has", &["있습니다", "있어요", "있다", "있어"], "있음"),
    rule("lacks", &["없습니다", "없어요", "없다", "없어"], "없음"),
    rule("becomes", &["됩니다", "되어요", "돼요", "된다", "돼"], "됨"),
    rule("do-dict", &["하다"], "함"),
    rule("be-dict", &["이다"], "임"),
    rule("good", &["좋습니다", "좋아요", "좋다", "좋아"], "좋음"),
    rule("seems", &["보입니다", "보여요", "보인다", "보여"], "보임"),
    rule("appears", &["나타납니다", "나타나요", "나타난다", "나타나"], "나타남"),
    rule("enjoys", &["즐깁니다", "즐겨요", "즐긴다", "즐겨"], "즐김"),
    EndingRule {
        name: "past",
        suffixes: &["습니다", "어요", "다", "어"],
        replacement: "음",
        guard: StemGuard::PastTense,
    },
];

/// 어떤 규칙도 맞지 않고 명사형 종결도 아닐 때 붙이는 어미
pub const DEFAULT_ENDING: &str = "함";

/// 문장 앞에서 지우는 화자/호칭 표현
pub const OPENERS: &[&str] = &[
    "나는",
    "제가",
    "선생님이 보기에",
    "00이는",
    "XX이는",
    "철수는",
    "영희는",
];

/// 이름 + 주격/보조사 + 공백 (2~4음절). 이름이 아닌 명사도 지워질 수 있음
pub const NAME_PARTICLE_PATTERN: &str = "([가-힣]{2,4})(이가|이는|는|가) ";

/// 결핍 표현 → 성장 표현
pub const REFRAMING_RULES: &[PatternRule] = &[
    PatternRule {
        pattern: "산만하(고|며|지만)",
        replacement: "호기심이 많고 활력이 넘치나",
    },
    PatternRule {
        pattern: "산만함",
        replacement: "다양한 관심사를 보임",
    },
    PatternRule {
        pattern: "고집이 세(고|며)",
        replacement: "자기 주관이 뚜렷하$1",
    },
    PatternRule {
        pattern: "느리(고|며)",
        replacement: "신중하게 탐색하$1",
    },
    PatternRule {
        pattern: "말이 없(고|며)",
        replacement: "경청하는 자세를 보이$1",
    },
    PatternRule {
        pattern: "싸우(고|며)",
        replacement: "갈등 해결 과정을 경험하$1",
    },
    PatternRule {
        pattern: "울(고|며)",
        replacement: "감정 표현에 솔직하$1",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ending_rule_order() {
        // 순서가 바뀌면 구체 규칙이 일반 규칙에 가려짐
        let names: Vec<&str> = ENDING_RULES.iter().map(|r| r.name).collect();
        assert_eq!(
            names,
            vec![
                "did", "looked", "played", "ate", "fought", "does", "is", "has", "lacks",
                "becomes", "do-dict", "be-dict", "good", "seems", "appears", "enjoys", "past",
            ]
        );
    }

    #[test]
    fn test_specific_past_precedes_generic() {
        let position = |name: &str| ENDING_RULES.iter().position(|r| r.name == name).unwrap();
        assert!(position("did") < position("does"));
        assert!(position("fought") < position("past"));
        assert!(position("does") < position("do-dict"));
        assert_eq!(position("past"), ENDING_RULES.len() - 1);
    }

    #[test]
    fn test_rule_apply_longest_suffix() {
        let does = ENDING_RULES[5];
        assert_eq!(does.apply("정리를 해요").as_deref(), Some("정리를 함"));
        assert_eq!(does.apply("노래를 한다").as_deref(), Some("노래를 함"));
        assert_eq!(does.apply("노래를 했다"), None);
    }

    #[test]
    fn test_past_guard() {
        let past = ENDING_RULES.last().unwrap();
        assert_eq!(past.apply("블록을 쌓았다").as_deref(), Some("블록을 쌓았음"));
        assert_eq!(past.apply("책을 읽었어요").as_deref(), Some("책을 읽었음"));
        assert_eq!(past.apply("밖으로 갔습니다").as_deref(), Some("밖으로 갔음"));
        // ㅆ 받침이 아니면 적용하지 않음
        assert_eq!(past.apply("블록을 쌓는다"), None);
        assert_eq!(past.apply("다"), None);
    }

    #[test]
    fn test_fought_rewrites_phrase() {
        let fought = ENDING_RULES[4];
        assert_eq!(
            fought.apply("친구와 싸웠다").as_deref(),
            Some("친구와 갈등이 있었음")
        );
    }
}
