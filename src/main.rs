//! saenggibu - 유아 관찰 기록 정제 CLI

use std::fmt;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand, ValueEnum};

use saenggibu::config::{load_config, load_config_from, ConfigError};
use saenggibu::draft::{smart_draft, suggest_drafts, Domain, ObservationForm};
use saenggibu::{PersonaMode, Refiner, RefinerConfig};

#[derive(Debug, Parser)]
#[command(name = "saenggibu", version, about = "유아 관찰 메모를 5문장 기록체로 정제")]
struct Cli {
    /// 설정 파일 (기본: ~/.config/saenggibu/config.json)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// 원문을 5문장 기록체로 변환
    Normalize(InputArgs),

    /// 기록체를 학부모용 말투로 변환
    Persona {
        #[command(flatten)]
        input: InputArgs,

        /// 출력 말투
        #[arg(short, long, value_enum, default_value = "polite")]
        mode: Tone,
    },

    /// 기록 규칙 검사
    Validate {
        #[command(flatten)]
        input: InputArgs,

        /// 관찰 맥락 (시기·활동)
        #[arg(long, default_value = "")]
        context: String,

        /// 관찰 근거
        #[arg(long, default_value = "")]
        evidence: String,

        /// 보고서를 JSON으로 출력
        #[arg(long)]
        json: bool,
    },

    /// 규칙 위반 자동 교정
    Fix(InputArgs),

    /// 관찰 양식(JSON)으로 초안 생성
    Draft {
        /// 관찰 양식 JSON 파일 (없으면 표준 입력)
        #[arg(value_name = "FILE")]
        form: Option<PathBuf>,

        /// 한 줄 초안용 키워드 (지정 시 양식 대신 사용)
        #[arg(short, long)]
        keywords: Option<String>,

        /// 한 줄 초안 영역 (k_phy, 의사소통 등)
        #[arg(short, long)]
        domain: Option<String>,
    },
}

#[derive(Debug, clap::Args)]
struct InputArgs {
    /// 입력 파일 (없으면 표준 입력)
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Tone {
    /// 기록체 그대로
    Plain,
    /// 합쇼체 (공지)
    Polite,
    /// 해요체 (소통)
    Soft,
}

impl From<Tone> for PersonaMode {
    fn from(tone: Tone) -> Self {
        match tone {
            Tone::Plain => PersonaMode::Plain,
            Tone::Polite => PersonaMode::Polite,
            Tone::Soft => PersonaMode::Soft,
        }
    }
}

/// CLI 실행 에러
#[derive(Debug)]
enum CliError {
    Io(io::Error),
    Config(ConfigError),
    Json(serde_json::Error),
    Usage(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(e) => write!(f, "입출력 오류: {}", e),
            CliError::Config(e) => write!(f, "{}", e),
            CliError::Json(e) => write!(f, "JSON 오류: {}", e),
            CliError::Usage(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for CliError {}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        CliError::Io(e)
    }
}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        CliError::Config(e)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Json(e)
    }
}

fn main() {
    // 로깅 초기화 (error/warn만 출력)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("오류: {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = match &cli.config {
        Some(path) => load_config_from(path)?,
        None => load_config(),
    };
    log::debug!("설정: {:?}", config);
    let refiner = Refiner::with_config(config);

    match cli.command {
        Command::Normalize(input) => {
            println!("{}", refiner.normalize(&read_input(input.file.as_deref())?));
        }
        Command::Persona { input, mode } => {
            let text = read_input(input.file.as_deref())?;
            let mode = PersonaMode::from(mode);
            log::info!("말투: {}", mode.label());
            println!("{}", refiner.convert_persona(text.trim(), mode));
        }
        Command::Validate {
            input,
            context,
            evidence,
            json,
        } => {
            let text = read_input(input.file.as_deref())?;
            let report = refiner.validate(&text, &context, &evidence);
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                for check in &report.checks {
                    println!("[{}] {}", if check.passed { "OK" } else { "NG" }, check.message);
                }
                for suggestion in &report.suggestions {
                    println!("- {}", suggestion);
                }
            }
            if !report.passed() {
                process::exit(2);
            }
        }
        Command::Fix(input) => {
            println!("{}", refiner.auto_fix(&read_input(input.file.as_deref())?));
        }
        Command::Draft {
            form,
            keywords,
            domain,
        } => draft(form.as_deref(), keywords, domain, refiner.config())?,
    }
    Ok(())
}

fn draft(
    form: Option<&Path>,
    keywords: Option<String>,
    domain: Option<String>,
    config: &RefinerConfig,
) -> Result<(), CliError> {
    let domain = domain
        .map(|d| d.parse::<Domain>())
        .transpose()
        .map_err(CliError::Usage)?;

    if let Some(keywords) = keywords {
        println!("{}", smart_draft(&keywords, domain));
        return Ok(());
    }

    let form: ObservationForm = serde_json::from_str(&read_input(form)?)?;
    let drafts = suggest_drafts(&form, config);
    if drafts.is_empty() {
        return Err(CliError::Usage("관찰 내용(observation)이 비어 있습니다".to_string()));
    }
    println!("{}", serde_json::to_string_pretty(&drafts)?);
    Ok(())
}

/// 파일 또는 표준 입력 전체 읽기
fn read_input(path: Option<&Path>) -> Result<String, CliError> {
    match path {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}
