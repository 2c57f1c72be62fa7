//! 검증/자동 교정 규칙 테이블

use lazy_static::lazy_static;
use regex::Regex;

use crate::core::patterns::{compile_pattern, compile_table, CompiledRule, PatternRule};
use crate::core::unicode::is_complete_hangul;

/// 기록에 쓰면 안 되는 주체 표현
pub const BANNED_SUBJECTS: &[&str] = &[
    "학생은",
    "학생이",
    "그는",
    "그가",
    "그녀는",
    "그녀가",
    "이 유아는",
    "해당 유아는",
];

/// 부정 표현 → 성장형 표현 (검출과 치환에 함께 사용)
pub const NEGATIVE_MAP: &[PatternRule] = &[
    PatternRule { pattern: "못함", replacement: "도전해봄" },
    PatternRule { pattern: "못하", replacement: "시도해보" },
    PatternRule { pattern: "어려워함", replacement: "도전해가고 있음" },
    PatternRule { pattern: "어려워하", replacement: "도전해가" },
    PatternRule { pattern: "산만함", replacement: "관심을 넓혀가고 있음" },
    PatternRule { pattern: r"주의가\s*짧음", replacement: "집중을 길러가고 있음" },
    PatternRule { pattern: r"목소리가\s*작음", replacement: "표현에 자신감을 키워가고 있음" },
    PatternRule { pattern: "느림", replacement: "차분히 진행함" },
    PatternRule { pattern: "소극적", replacement: "차분히 참여해가고 있음" },
    PatternRule { pattern: "공격적", replacement: "감정을 조절해가고 있음" },
    PatternRule { pattern: r"자주\s*울음", replacement: "감정을 표현하고 조절해가고 있음" },
];

/// 이름 + 조사 추정 패턴. 일반 명사도 걸리므로 주의 수준으로만 사용
pub const NAME_PATTERN: &str =
    r"([가-힣]{2,4})(은|는|이|가|을|를|와|과|에게|한테|에서|으로|로)\b";

/// 자동 교정 시 지우는 문장부호
pub const FORBIDDEN_PUNCTUATION: &[char] = &[
    '!', '?', ';', ':', '"', '\'', '“', '”', '‘', '’', '(', ')', '[', ']', '{', '}', '<', '>',
    '《', '》', '【', '】', '~', '`', '@', '#', '$', '%', '^', '&', '*', '_', '+', '=', '|', '\\',
    '/', '…', '—', '–', '-',
];

lazy_static! {
    pub(crate) static ref NEGATIVE_RULES: Vec<CompiledRule> = compile_table(NEGATIVE_MAP);
    pub(crate) static ref NAME_REGEX: Option<Regex> = compile_pattern(NAME_PATTERN);
}

/// 허용 문자: 숫자, 영문, 완성형 한글, 공백, `.` `,` `·`
pub fn is_allowed_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || is_complete_hangul(c)
        || c.is_whitespace()
        || matches!(c, '.' | ',' | '·')
}
