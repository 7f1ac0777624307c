use colored::Colorize;
use procfile_core::{Logger, PlatformEnv};
use tracing_subscriber::EnvFilter;

/// 標準出力にビルドログを出すLogger
pub struct ConsoleLogger;

impl Logger for ConsoleLogger {
    fn info(&self, message: &str) {
        println!("{} {}", "[INFO]".cyan(), message);
    }
}

/// tracingの初期化
///
/// RUST_LOG が優先。未設定なら BP_DEBUG の有無でレベルを決める。
/// 標準出力はビルドログ用なので、診断ログはstderrに出す。
pub fn init_tracing(platform: &PlatformEnv) {
    let level = if platform.is_debug() { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

/// 引数エラー時の使い方表示
pub fn print_usage(args: &str) {
    let program = std::env::args()
        .next()
        .unwrap_or_else(|| env!("CARGO_BIN_NAME").to_string());
    println!("Usage: {} {}", program, args);
}
