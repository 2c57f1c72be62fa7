//! 관찰 양식 → 기록 초안
//!
//! 관찰 근거를 세 가지 관점(창의성, 사회성, 발달)의 5문장 틀에 끼워 넣고
//! 정규화기를 통과시켜 초안을 만듭니다.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::RefinerConfig;
use crate::core::segmenter::collapse_whitespace;
use crate::refine::Refiner;

/// 이름이 비었을 때 쓰는 호칭
const DEFAULT_NAME: &str = "유아";

/// 영역을 지정하지 않은 한 줄 초안의 표기
const INTEGRATED: &str = "integrated";

/// 누리과정 5개 영역
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Domain {
    #[serde(rename = "k_phy")]
    PhysicalHealth,
    #[serde(rename = "k_com")]
    Communication,
    #[serde(rename = "k_soc")]
    Social,
    #[serde(rename = "k_art")]
    Art,
    #[serde(rename = "k_nat")]
    Nature,
}

impl Domain {
    pub const ALL: [Domain; 5] = [
        Domain::PhysicalHealth,
        Domain::Communication,
        Domain::Social,
        Domain::Art,
        Domain::Nature,
    ];

    /// 영역 이름
    pub fn label(self) -> &'static str {
        match self {
            Domain::PhysicalHealth => "신체운동·건강",
            Domain::Communication => "의사소통",
            Domain::Social => "사회관계",
            Domain::Art => "예술경험",
            Domain::Nature => "자연탐구",
        }
    }

    /// 기록 항목 코드
    pub fn field_code(self) -> &'static str {
        match self {
            Domain::PhysicalHealth => "k_phy",
            Domain::Communication => "k_com",
            Domain::Social => "k_soc",
            Domain::Art => "k_art",
            Domain::Nature => "k_nat",
        }
    }

    /// 관찰 키워드 프리셋
    pub fn preset_tags(self) -> &'static [&'static str] {
        match self {
            Domain::PhysicalHealth => &[
                "소근육 조절",
                "대근육 이동",
                "균형",
                "도구 안전사용",
                "위생 실천",
                "휴식/식사 습관",
            ],
            Domain::Communication => &[
                "질문하기",
                "경험 설명",
                "짧은 문장",
                "단어 확장",
                "듣고 반응",
                "말 순서 지키기",
            ],
            Domain::Social => &[
                "양보",
                "협력",
                "규칙 이해",
                "차례 기다림",
                "감정 조절",
                "도움 요청/제안",
            ],
            Domain::Art => &[
                "노래 따라부름",
                "리듬/움직임",
                "재료 탐색",
                "색·선 표현",
                "작품 설명",
                "감상 반응",
            ],
            Domain::Nature => &["관찰", "비교", "분류", "수 세기", "규칙성", "예측/추론"],
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Domain {
    type Err = String;

    /// 영역 이름 또는 항목 코드
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Domain::ALL
            .into_iter()
            .find(|d| d.label() == s || d.field_code() == s)
            .ok_or_else(|| format!("알 수 없는 영역: {}", s))
    }
}

/// 관찰 입력 양식
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservationForm {
    pub student_name: String,
    pub age: String,
    /// 관찰 시기 (예: 3월 2주)
    pub period: String,
    /// 활동명
    pub activity: String,
    /// 관찰한 행동
    pub observation: String,
}

impl ObservationForm {
    /// 시기 + 활동
    pub fn context(&self) -> String {
        collapse_whitespace(&format!("{} {}", self.period, self.activity))
    }
}

/// 초안 하나
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DraftSuggestion {
    pub id: u32,
    /// 초안 관점 (창의성/사회성/발달)
    pub tag: &'static str,
    pub text: String,
}

/// 키워드 한 줄 초안
pub fn smart_draft(keywords: &str, domain: Option<Domain>) -> String {
    let domain = domain.map_or(INTEGRATED, Domain::field_code);
    format!("[{}] {} 관련 활동에 적극적으로 참여함.", domain, keywords.trim())
}

/// 관찰 양식으로 세 가지 5문장 초안 생성 (관찰 내용이 비면 없음)
pub fn suggest_drafts(form: &ObservationForm, config: &RefinerConfig) -> Vec<DraftSuggestion> {
    let evidence = collapse_whitespace(&form.observation);
    if evidence.is_empty() {
        return Vec::new();
    }

    let name = match form.student_name.trim() {
        "" => DEFAULT_NAME,
        name => name,
    };
    let context = form.context();
    let refiner = Refiner::with_config(config.clone());

    let templates = [
        ("창의성", creative_template(name, &context, &evidence)),
        ("사회성", social_template(&context, &evidence)),
        ("발달", developmental_template(name, &context, &evidence)),
    ];
    log::debug!("초안 {}개 생성: 맥락 '{}'", templates.len(), context);

    templates
        .into_iter()
        .zip(1..)
        .map(|((tag, draft), id)| DraftSuggestion {
            id,
            tag,
            text: refiner.normalize(&draft),
        })
        .collect()
}

fn creative_template(name: &str, context: &str, evidence: &str) -> String {
    [
        format!("{}는 {} 상황에서 {} 모습을 보임.", name, context, evidence),
        "친구들과 함께 놀이를 확장하며 새로운 아이디어를 제안하는 등 창의적인 태도를 나타냄."
            .to_string(),
        "활동 도구를 능숙하게 사용하며 소근육 조절 능력이 발달된 모습을 보임.".to_string(),
        "자신의 생각을 구체적인 언어로 표현하며 또래와의 의사소통을 즐김.".to_string(),
        "자연물이나 주변 사물의 변화에 관심을 가지고 지속적으로 탐구하는 태도를 유지함."
            .to_string(),
    ]
    .join("\n")
}

fn social_template(context: &str, evidence: &str) -> String {
    [
        format!("{} 활동 중 {} 하며 친구를 배려하는 태도를 보임.", context, evidence),
        "갈등 상황에서 자신의 감정을 솔직하게 표현하고 타인의 입장을 이해하려 노력함."
            .to_string(),
        "규칙을 준수하며 공동의 목표를 위해 협력하는 모습이 인상적임.".to_string(),
        "신체 활동에 적극적으로 참여하며 건강한 생활 습관을 형성해가고 있음.".to_string(),
        "노래와 움직임을 통해 자신의 경험을 다양하게 표현하는 예술적 감수성을 보임."
            .to_string(),
    ]
    .join("\n")
}

fn developmental_template(name: &str, context: &str, evidence: &str) -> String {
    [
        format!(
            "{}는 {} 활동에서 {} 행동을 통해 끈기 있는 모습을 보임.",
            name, context, evidence
        ),
        "스스로 문제를 해결하려는 의지를 보이며 탐구 과정 자체를 즐김.".to_string(),
        "경험한 내용을 문장으로 구성하여 조리 있게 말하며 언어 표현력이 확장됨.".to_string(),
        "다양한 예술 재료를 활용하여 독창적인 작품을 만드는 것에 흥미를 느낌.".to_string(),
        "친구의 의견을 경청하고 존중하며 원만한 사회적 관계를 형성하고 있음.".to_string(),
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::segmenter::{ends_canonically, segment, SENTENCE_COUNT};

    fn form(name: &str, observation: &str) -> ObservationForm {
        ObservationForm {
            student_name: name.to_string(),
            age: "5세".to_string(),
            period: "봄".to_string(),
            activity: "블록놀이".to_string(),
            observation: observation.to_string(),
        }
    }

    #[test]
    fn test_smart_draft() {
        assert_eq!(
            smart_draft("블록 쌓기", None),
            "[integrated] 블록 쌓기 관련 활동에 적극적으로 참여함."
        );
        assert_eq!(
            smart_draft("질문하기", Some(Domain::Communication)),
            "[k_com] 질문하기 관련 활동에 적극적으로 참여함."
        );
    }

    #[test]
    fn test_empty_observation_gives_nothing() {
        assert!(suggest_drafts(&form("민준", ""), &RefinerConfig::default()).is_empty());
        assert!(suggest_drafts(&form("민준", "  \n "), &RefinerConfig::default()).is_empty());
    }

    #[test]
    fn test_three_normalized_drafts() {
        let drafts = suggest_drafts(&form("", "블록을 높이 쌓음"), &RefinerConfig::default());
        let tags: Vec<&str> = drafts.iter().map(|d| d.tag).collect();
        assert_eq!(tags, vec!["창의성", "사회성", "발달"]);
        assert_eq!(drafts.iter().map(|d| d.id).collect::<Vec<_>>(), vec![1, 2, 3]);

        for draft in &drafts {
            let sentences = segment(&draft.text);
            assert_eq!(sentences.len(), SENTENCE_COUNT, "{}", draft.text);
            assert!(sentences.iter().all(|s| ends_canonically(s)), "{}", draft.text);
            assert!(draft.text.chars().count() <= 500);
        }
        // 기본 호칭 + 조사는 정규화에서 제거됨
        assert!(drafts[0]
            .text
            .starts_with("봄 블록놀이 상황에서 블록을 높이 쌓음 모습을 보임."));
    }

    #[test]
    fn test_name_removed_from_drafts() {
        let drafts = suggest_drafts(&form("민준", "블록을 높이 쌓음"), &RefinerConfig::default());
        assert!(drafts.iter().all(|d| !d.text.contains("민준")));
    }

    #[test]
    fn test_observation_line_breaks_collapsed() {
        let drafts =
            suggest_drafts(&form("", "블록을\n높이 쌓음"), &RefinerConfig::default());
        assert!(drafts[0].text.contains("블록을 높이 쌓음"));
    }

    #[test]
    fn test_domain_lookup() {
        assert_eq!("k_soc".parse::<Domain>(), Ok(Domain::Social));
        assert_eq!("자연탐구".parse::<Domain>(), Ok(Domain::Nature));
        assert!("수학".parse::<Domain>().is_err());
        for domain in Domain::ALL {
            assert_eq!(domain.preset_tags().len(), 6);
        }
        let json = serde_json::to_string(&Domain::Art).unwrap();
        assert_eq!(json, "\"k_art\"");
    }

    #[test]
    fn test_form_deserialize_with_missing_fields() {
        let form: ObservationForm =
            serde_json::from_str(r#"{"observation": "친구에게 블록을 양보함"}"#).unwrap();
        assert_eq!(form.student_name, "");
        assert_eq!(form.context(), "");
    }
}
