mod logging;

use clap::Parser;
use colored::Colorize;
use logging::ConsoleLogger;
use procfile_core::{LaunchOptions, PlatformEnv, write_launch_metadata};
use std::path::PathBuf;
use std::process::ExitCode;

/// プラットフォームディレクトリを読めなかった場合
const EXIT_PLATFORM_ERROR: u8 = 1;
/// Procfileの読み込み・launch.tomlの書き出しに失敗した場合
const EXIT_RELEASE_ERROR: u8 = 3;

#[derive(Parser)]
#[command(name = "release")]
#[command(about = "ProcfileからプロセスタイプをLaunchメタデータに書き出す", long_about = None)]
struct Cli {
    /// アプリケーションディレクトリ
    app_dir: PathBuf,
    /// レイヤーディレクトリ（launch.tomlの出力先）
    layers_dir: PathBuf,
    /// プラットフォームディレクトリ
    platform_dir: PathBuf,
}

fn main() -> ExitCode {
    // 引数が3つでない場合は使い方を表示して正常終了
    let Ok(cli) = Cli::try_parse() else {
        logging::print_usage("APP_DIR LAYERS_DIR PLATFORM_DIR");
        return ExitCode::SUCCESS;
    };

    let platform = match PlatformEnv::load(&cli.platform_dir) {
        Ok(platform) => platform,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            return ExitCode::from(EXIT_PLATFORM_ERROR);
        }
    };
    logging::init_tracing(&platform);

    match write_launch_metadata(
        &cli.app_dir,
        &cli.layers_dir,
        &LaunchOptions::default(),
        &ConsoleLogger,
    ) {
        Ok(processes) => {
            tracing::debug!(processes = processes.len(), "Release finished");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Release failed");
            eprintln!("{} {}", "Error:".red().bold(), e.user_message());
            ExitCode::from(EXIT_RELEASE_ERROR)
        }
    }
}
