//! # Logging モジュール
//!
//! ターゲット形状定義ツールのログ出力を設定します。
//!
//! 出力先はコンソール（コンパクト形式）、日毎ローテーションのJSONファイル、
//! またはその両方から選択できます。ファイルへの書き込みは tracing-appender の
//! 非同期ライターを経由するため、形状の構築や表示をブロックしません。
//! RUST_LOG 環境変数が設定されている場合はそちらのフィルタが優先されます。

use std::str::FromStr;
use tracing::Level;
use tracing_appender::{non_blocking, rolling};
use tracing_subscriber::{
    fmt,
    fmt::format::{Compact, DefaultFields, Format, Json, JsonFields},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
    Registry,
};

/// ログファイル名のプレフィックス（logs/rktgeom.2025-01-01 のような日毎ファイルになる）
const LOG_FILE_PREFIX: &str = "rktgeom";

/// ログの出力先
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LogOutput {
    /// 標準出力へのコンパクト形式のみ
    Console,
    /// 日毎ローテーションのJSONファイルのみ
    File,
    /// コンソールとファイルの併用
    Both,
}

impl FromStr for LogOutput {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // ヘルプに載せている3つの表記のみ受理（大文字小文字は問わない）
        match s.to_ascii_lowercase().as_str() {
            "console" => Ok(LogOutput::Console),
            "file" => Ok(LogOutput::File),
            "both" => Ok(LogOutput::Both),
            _ => Err(format!("無効な出力先: '{}'. 利用可能: console, file, both", s)),
        }
    }
}

/// ログ設定
///
/// CLIの --log-level / --log-output / --log-dir に1対1で対応します。
/// ログファイル名のプレフィックスは固定です。
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// 出力するログレベルの下限
    pub level: Level,
    /// 出力先の組み合わせ
    pub output: LogOutput,
    /// ログファイルの出力ディレクトリ（File / Both の場合に使用）
    pub log_dir: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            output: LogOutput::Console,
            log_dir: "logs".to_string(),
        }
    }
}

/// ログシステムを初期化
///
/// 出力先の指定に応じてコンソールレイヤとファイルレイヤを組み合わせ、
/// グローバルなsubscriberとして登録します。登録はプロセスにつき1回しか
/// できないため、この関数も1回だけ呼び出せます。ファイル出力を含む場合、
/// ログディレクトリは無ければここで作成されます。
///
/// # 引数
///
/// * `config` - レベル・出力先・ディレクトリの設定
///
/// # 戻り値
///
/// 登録に成功した場合は Ok(())、ディレクトリ作成や登録に失敗した場合はエラー
///
/// # 例
///
/// ```rust
/// use rktgeom::logging::{init_logging, LogConfig};
///
/// init_logging(LogConfig::default()).expect("ログ初期化に失敗");
/// ```
pub fn init_logging(config: LogConfig) -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.level.to_string()))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = Registry::default().with(env_filter);

    match config.output {
        LogOutput::Console => registry.with(console_layer()).init(),
        LogOutput::File => registry.with(file_layer(&config)?).init(),
        LogOutput::Both => registry
            .with(console_layer())
            .with(file_layer(&config)?)
            .init(),
    }

    Ok(())
}

/// 全出力先で共通のフォーマットオプション
///
/// ターゲット（モジュールパス）は表示し、スレッドIDとソース位置は省略します。
fn base_layer<S>() -> fmt::Layer<S> {
    fmt::layer()
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
}

/// コンソール向けのコンパクト形式レイヤ
fn console_layer<S>() -> fmt::Layer<S, DefaultFields, Format<Compact>> {
    base_layer().compact()
}

/// 日毎ローテーションのJSONファイルレイヤ
///
/// ログディレクトリが無ければ作成します。
fn file_layer<S>(
    config: &LogConfig,
) -> Result<fmt::Layer<S, JsonFields, Format<Json>, non_blocking::NonBlocking>, std::io::Error> {
    std::fs::create_dir_all(&config.log_dir)?;

    let appender = rolling::daily(&config.log_dir, LOG_FILE_PREFIX);
    let (writer, guard) = non_blocking(appender);

    // ガードを落とすと書き込みスレッドが終了するため、プロセス終了までリークさせる
    std::mem::forget(guard);

    Ok(base_layer().with_writer(writer).json())
}

/// ログレベル文字列を解釈
///
/// tracing の `Level` が受理する表記（大文字小文字を問わない）をそのまま使い、
/// 解釈できない場合は警告を表示して INFO にフォールバックします。
pub fn parse_log_level(level_str: &str) -> Level {
    match Level::from_str(level_str) {
        Ok(level) => level,
        Err(_) => {
            eprintln!(
                "警告: ログレベル '{}' を解釈できません。INFO で続行します",
                level_str
            );
            Level::INFO
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_output_from_str() {
        assert_eq!(LogOutput::from_str("console"), Ok(LogOutput::Console));
        assert_eq!(LogOutput::from_str("FILE"), Ok(LogOutput::File));
        assert_eq!(LogOutput::from_str("Both"), Ok(LogOutput::Both));
        assert!(LogOutput::from_str("stderr").is_err());
    }

    #[test]
    fn test_log_output_rejects_undocumented_spellings() {
        // ヘルプに載せている console / file / both 以外は受理しない
        assert!(LogOutput::from_str("stdout").is_err());
        assert!(LogOutput::from_str("all").is_err());
    }

    #[test]
    fn test_parse_log_level() {
        assert_eq!(parse_log_level("debug"), Level::DEBUG);
        assert_eq!(parse_log_level("INFO"), Level::INFO);
        assert_eq!(parse_log_level("Trace"), Level::TRACE);
        assert_eq!(parse_log_level("invalid"), Level::INFO);
    }

    #[test]
    fn test_default_config() {
        let config = LogConfig::default();
        assert_eq!(config.level, Level::INFO);
        assert_eq!(config.output, LogOutput::Console);
        assert_eq!(config.log_dir, "logs");
    }
}
