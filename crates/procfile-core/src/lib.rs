//! procfile-cnb コア
//!
//! アプリケーションの `Procfile` を読み込み、起動可能なプロセスタイプを
//! `launch.toml` として書き出すためのライブラリです。
//!
//! # 概要
//!
//! - **procfile**: `Procfile` の読み込みとパース（`type: command` のマッピング）
//! - **launch**: プロセス一覧の構築と `launch.toml` への書き出し
//! - **detect**: `Procfile` の有無によるdetect判定とビルドプラン
//! - **platform**: CNBプラットフォームディレクトリの環境変数
//! - **log**: オペレーター向けログ出力の抽象

pub mod detect;
pub mod error;
pub mod launch;
pub mod log;
pub mod platform;
pub mod procfile;

pub use detect::*;
pub use error::*;
pub use launch::*;
pub use log::*;
pub use platform::*;
pub use procfile::*;
