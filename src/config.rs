//! 정제기 설정 로드/저장 (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// 설정 파일 로드/저장 에러
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 읽기/쓰기 실패
    Io(std::io::Error),
    /// JSON 파싱/직렬화 실패
    Parse(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "설정 파일 입출력 오류: {}", e),
            ConfigError::Parse(s) => write!(f, "설정 JSON 오류: {}", s),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

/// 정제 파이프라인 설정
///
/// 모든 호출에 명시적으로 전달되며 전역 상태를 두지 않습니다.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct RefinerConfig {
    /// 전체 글자수 상한
    #[serde(default = "default_max_chars")]
    pub max_chars: usize,
    /// 정규화 시 이 길이 이하의 문장은 더 줄이지 않음
    #[serde(default = "default_trim_floor")]
    pub trim_floor: usize,
    /// 정규화 시 한 번에 잘라내는 글자 수
    #[serde(default = "default_trim_step")]
    pub trim_step: usize,
    /// 자동 교정 시 줄이기 하한
    #[serde(default = "default_fix_trim_floor")]
    pub fix_trim_floor: usize,
    /// 자동 교정 시 한 번에 잘라내는 글자 수
    #[serde(default = "default_fix_trim_step")]
    pub fix_trim_step: usize,
    /// 관찰 맥락 최소 글자 수
    #[serde(default = "default_min_context_chars")]
    pub min_context_chars: usize,
    /// 관찰 근거 최소 글자 수
    #[serde(default = "default_min_evidence_chars")]
    pub min_evidence_chars: usize,
    /// 이름 추정 표현 최대 수집 개수
    #[serde(default = "default_name_hit_cap")]
    pub name_hit_cap: usize,
    /// 문장 수가 모자랄 때 채우는 문장
    #[serde(default = "default_filler_sentence")]
    pub filler_sentence: String,
}

fn default_max_chars() -> usize {
    500
}

fn default_trim_floor() -> usize {
    20
}

fn default_trim_step() -> usize {
    5
}

fn default_fix_trim_floor() -> usize {
    25
}

fn default_fix_trim_step() -> usize {
    8
}

fn default_min_context_chars() -> usize {
    4
}

fn default_min_evidence_chars() -> usize {
    10
}

fn default_name_hit_cap() -> usize {
    10
}

fn default_filler_sentence() -> String {
    "관찰 내용이 추가로 필요함".to_string()
}

impl Default for RefinerConfig {
    fn default() -> Self {
        Self {
            max_chars: default_max_chars(),
            trim_floor: default_trim_floor(),
            trim_step: default_trim_step(),
            fix_trim_floor: default_fix_trim_floor(),
            fix_trim_step: default_fix_trim_step(),
            min_context_chars: default_min_context_chars(),
            min_evidence_chars: default_min_evidence_chars(),
            name_hit_cap: default_name_hit_cap(),
            filler_sentence: default_filler_sentence(),
        }
    }
}

impl RefinerConfig {
    /// 기본 설정 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// 글자수 상한 설정
    pub fn with_max_chars(mut self, max_chars: usize) -> Self {
        self.max_chars = max_chars;
        self
    }

    /// 정규화 줄이기 하한/단위 설정
    pub fn with_trim(mut self, floor: usize, step: usize) -> Self {
        self.trim_floor = floor;
        self.trim_step = step;
        self
    }

    /// 자동 교정 줄이기 하한/단위 설정
    pub fn with_fix_trim(mut self, floor: usize, step: usize) -> Self {
        self.fix_trim_floor = floor;
        self.fix_trim_step = step;
        self
    }

    /// 채움 문장 설정
    pub fn with_filler(mut self, filler: impl Into<String>) -> Self {
        self.filler_sentence = filler.into();
        self
    }
}

/// 기본 설정 파일 경로: ~/.config/saenggibu/config.json
pub fn config_path() -> PathBuf {
    let home = std::env::var("HOME")
        .ok()
        .map(PathBuf::from)
        .filter(|p| p.is_absolute() && p.is_dir())
        .unwrap_or_else(|| PathBuf::from("/var/tmp"));
    home.join(".config").join("saenggibu").join("config.json")
}

/// 지정한 경로에서 설정 로드
pub fn load_config_from(path: &Path) -> Result<RefinerConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
}

/// 기본 경로에서 설정 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config() -> RefinerConfig {
    let path = config_path();
    match load_config_from(&path) {
        Ok(config) => config,
        Err(ConfigError::Io(_)) => RefinerConfig::default(),
        Err(e) => {
            log::warn!("{} ({}), 기본 설정 사용", e, path.display());
            RefinerConfig::default()
        }
    }
}

/// 설정 파일 저장
pub fn save_config(config: &RefinerConfig, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json =
        serde_json::to_string_pretty(config).map_err(|e| ConfigError::Parse(e.to_string()))?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RefinerConfig::default();
        assert_eq!(config.max_chars, 500);
        assert_eq!(config.trim_floor, 20);
        assert_eq!(config.trim_step, 5);
        assert_eq!(config.fix_trim_floor, 25);
        assert_eq!(config.fix_trim_step, 8);
        assert_eq!(config.filler_sentence, "관찰 내용이 추가로 필요함");
    }

    #[test]
    fn test_builder_pattern() {
        let config = RefinerConfig::new()
            .with_max_chars(300)
            .with_trim(10, 3)
            .with_filler("추가 관찰이 필요함");
        assert_eq!(config.max_chars, 300);
        assert_eq!(config.trim_floor, 10);
        assert_eq!(config.trim_step, 3);
        assert_eq!(config.filler_sentence, "추가 관찰이 필요함");
    }

    #[test]
    fn test_backward_compat_missing_field() {
        // 이전 설정 파일에 일부 필드만 있는 경우 나머지는 기본값
        let json = r#"{"max_chars": 400}"#;
        let config: RefinerConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.max_chars, 400);
        assert_eq!(config.trim_floor, 20);
        assert_eq!(config.name_hit_cap, 10);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = RefinerConfig::new().with_max_chars(450);

        save_config(&config, &path).unwrap();
        let loaded = load_config_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.json");
        assert!(matches!(load_config_from(&missing), Err(ConfigError::Io(_))));

        let broken = dir.path().join("broken.json");
        fs::write(&broken, "{ not json").unwrap();
        assert!(matches!(load_config_from(&broken), Err(ConfigError::Parse(_))));
    }
}
