//! オペレーター向けログ出力

use crate::launch::ProcessEntry;

/// プロセスが1つもない場合の表示
pub const NO_PROCESSES: &str = "(none)";

/// ビルドログの出力先
///
/// launch.toml の書き出し処理はこのトレイト経由でのみ進捗を報告します。
pub trait Logger {
    fn info(&self, message: &str);
}

/// `tracing` にログを流すLogger
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        tracing::info!("{}", message);
    }
}

/// プロセスタイプ名をカンマ区切りで整形（空の場合は `(none)`）
pub fn format_process_names(processes: &[ProcessEntry]) -> String {
    if processes.is_empty() {
        return NO_PROCESSES.to_string();
    }

    processes
        .iter()
        .map(|process| process.r#type.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
