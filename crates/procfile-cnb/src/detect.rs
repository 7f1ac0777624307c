mod logging;

use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use logging::ConsoleLogger;
use procfile_core::{BuildPlan, Logger, PlatformEnv, has_procfile};
use std::path::PathBuf;
use std::process::ExitCode;

/// detect失敗（このビルドパックは適用されない）
const EXIT_DETECT_FAIL: u8 = 100;
const EXIT_ERROR: u8 = 1;

#[derive(Parser)]
#[command(name = "detect")]
#[command(about = "アプリケーションにProcfileがあるか判定する", long_about = None)]
struct Cli {
    /// プラットフォームディレクトリ
    platform_dir: PathBuf,
    /// ビルドプランの出力先
    build_plan: PathBuf,
    /// アプリケーションディレクトリ（省略時はカレントディレクトリ）
    #[arg(long, env = "CNB_APP_DIR")]
    app_dir: Option<PathBuf>,
}

fn main() -> ExitCode {
    let Ok(cli) = Cli::try_parse() else {
        logging::print_usage("PLATFORM_DIR BUILD_PLAN [--app-dir APP_DIR]");
        return ExitCode::SUCCESS;
    };

    let platform = match PlatformEnv::load(&cli.platform_dir) {
        Ok(platform) => platform,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            return ExitCode::from(EXIT_ERROR);
        }
    };
    logging::init_tracing(&platform);

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(EXIT_DETECT_FAIL),
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Procfileがあればビルドプランを書き出してtrueを返す
fn run(cli: &Cli) -> anyhow::Result<bool> {
    let app_dir = match &cli.app_dir {
        Some(dir) => dir.clone(),
        None => std::env::current_dir().context("Failed to resolve current directory")?,
    };

    if !has_procfile(&app_dir) {
        tracing::debug!(app_dir = %app_dir.display(), "No Procfile found");
        return Ok(false);
    }

    BuildPlan::procfile()
        .write(&cli.build_plan)
        .with_context(|| format!("Failed to write build plan: {}", cli.build_plan.display()))?;
    ConsoleLogger.info("Procfile detected");

    Ok(true)
}
