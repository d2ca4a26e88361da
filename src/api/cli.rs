//! Ядро CLI `poker_hands_cli`: аргументы, запуск и настройка логов.
//!
//! Бинарь в `src/bin` только разбирает аргументы, вызывает [`run`] и
//! превращает результат в код выхода.

use clap::Parser;

use crate::domain::split_tokens;

use super::errors::ApiError;
use super::queries::{evaluate, EvaluateRequest};

/// Сравнить две 5-карточные покерные руки.
#[derive(Clone, Debug, Parser, PartialEq, Eq)]
#[command(name = "poker_hands_cli", version)]
pub struct CliArgs {
    /// Белая рука: 5 карт через пробел или запятую, например "2C 3H 4S 8C AH".
    #[arg(long)]
    pub white: String,

    /// Чёрная рука, в том же формате.
    #[arg(long)]
    pub black: String,

    /// Печатать полный отчёт в JSON вместо одной строки.
    #[arg(long)]
    pub json: bool,

    /// Подробность логов в stderr: -v info, -vv debug, -vvv trace.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl EvaluateRequest {
    /// Запрос из двух строк вида "8H 8C 8D QS KD" или "8H,8C,8D,QS,KD".
    pub fn from_notation(white: &str, black: &str) -> Self {
        Self {
            white: split_tokens(white).into_iter().map(String::from).collect(),
            black: split_tokens(black).into_iter().map(String::from).collect(),
        }
    }
}

/// Сыграть партию по аргументам CLI и вернуть то, что печатается в stdout:
/// строку вердикта или pretty JSON отчёта при `--json`.
pub fn run(args: &CliArgs) -> Result<String, ApiError> {
    let request = EvaluateRequest::from_notation(&args.white, &args.black);
    log::debug!("request: {:?}", request);

    let report = evaluate(&request)?;
    if !args.json {
        return Ok(report.summary);
    }
    Ok(serde_json::to_string_pretty(&report)?)
}

/// Логи только в терминал (stderr), stdout остаётся под результат.
pub fn log(verbose: u8) {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    if let Err(e) = simplelog::TermLogger::init(
        level_filter(verbose),
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    ) {
        eprintln!("[CLI] логгер не инициализирован: {e}");
    }
}

/// Число флагов `-v` → уровень логов.
pub const fn level_filter(verbose: u8) -> log::LevelFilter {
    match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    }
}
