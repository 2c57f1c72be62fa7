//! 관찰 메모 → 기록체 정규화
//!
//! 원문을 문장 단위로 나누고, 문장마다 긍정 재구성과 종결어미 변환을 거친 뒤
//! 정확히 5문장으로 맞추고 글자수 상한을 적용합니다.
//!
//! ```
//! use saenggibu::refine::Refiner;
//!
//! let refiner = Refiner::new();
//! let record = refiner.normalize("철수는 친구와 블록을 쌓았다");
//! assert!(record.starts_with("친구와 블록을 쌓았음."));
//! ```

mod ending;
mod length;
pub mod rules;

pub use ending::{
    apply_ending_rules, normalize_sentence, reframe, refine_body, strip_name_particles,
    strip_opener,
};
pub use length::{render, rendered_len, LengthGovernor};

use crate::audit::{self, ValidationReport};
use crate::config::RefinerConfig;
use crate::core::segmenter::{segment, SENTENCE_COUNT};
use crate::persona::{self, PersonaMode};

/// 설정을 들고 다니는 정제기
///
/// 상태가 없으므로 여러 스레드에서 공유해도 됩니다.
#[derive(Debug, Clone, Default)]
pub struct Refiner {
    config: RefinerConfig,
}

impl Refiner {
    /// 기본 설정으로 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// 설정을 지정하여 생성
    pub fn with_config(config: RefinerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RefinerConfig {
        &self.config
    }

    /// 원문 → 5문장 기록체
    pub fn normalize(&self, raw: &str) -> String {
        let units = segment(raw);
        log::debug!("normalize: {}개 문장 단위", units.len());

        let mut bodies: Vec<String> = units.iter().map(|unit| refine_body(unit)).collect();
        fit_sentence_count(&mut bodies, &self.config.filler_sentence);
        LengthGovernor::for_normalize(&self.config).govern(&mut bodies);
        render(&bodies)
    }

    /// 기록체 → 말투 변환
    pub fn convert_persona(&self, text: &str, mode: PersonaMode) -> String {
        persona::convert(text, mode)
    }

    /// 규칙 검사 보고서
    pub fn validate(&self, text: &str, context: &str, evidence: &str) -> ValidationReport {
        audit::validate_with(text, context, evidence, &self.config)
    }

    /// 규칙에 맞게 자동 교정
    pub fn auto_fix(&self, text: &str) -> String {
        audit::auto_fix_with(text, &self.config)
    }
}

/// 5문장보다 많으면 자르고, 적으면 채움 문장을 덧붙임
pub(crate) fn fit_sentence_count(bodies: &mut Vec<String>, filler: &str) {
    bodies.truncate(SENTENCE_COUNT);
    if bodies.len() < SENTENCE_COUNT {
        let filler = apply_ending_rules(filler.trim());
        bodies.resize(SENTENCE_COUNT, filler);
    }
}
