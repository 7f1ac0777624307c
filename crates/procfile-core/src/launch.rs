//! launch.toml の生成
//!
//! ProcfileTable をプロセス一覧に変換し、レイヤーディレクトリの
//! `launch.toml` に書き出します。

use crate::error::{ReleaseError, Result};
use crate::log::{Logger, format_process_names};
use crate::procfile::{ProcfileTable, read_procfile};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::debug;

/// レイヤーディレクトリ直下のlaunchメタデータのファイル名
pub const LAUNCH_FILE_NAME: &str = "launch.toml";

/// デフォルトプロセスとして扱うプロセスタイプ名
pub const DEFAULT_PROCESS_TYPE: &str = "web";

/// launch.toml の1プロセス
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessEntry {
    /// プロセスタイプ名
    #[serde(rename = "type")]
    pub r#type: String,
    /// シェルコマンド（未解釈）
    pub command: String,
    /// デフォルトプロセスかどうか（trueの場合のみ出力）
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub default: bool,
}

/// launch.toml 全体
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchMetadata {
    #[serde(default)]
    pub processes: Vec<ProcessEntry>,
}

/// デフォルトプロセスの選択方針
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DefaultProcess {
    /// `web` という名前のプロセスだけをデフォルトにする
    #[default]
    Web,
    /// default フラグを一切出力しない
    Disabled,
}

/// launch.toml 書き出しのオプション
#[derive(Debug, Clone, Default)]
pub struct LaunchOptions {
    pub default_process: DefaultProcess,
}

impl LaunchMetadata {
    /// ProcfileTable からプロセス一覧を構築（テーブルの順序を維持）
    pub fn from_table(table: ProcfileTable, default_process: DefaultProcess) -> Self {
        let processes = table
            .into_iter()
            .map(|(process_type, command)| {
                let default = default_process == DefaultProcess::Web
                    && process_type == DEFAULT_PROCESS_TYPE;
                ProcessEntry {
                    r#type: process_type,
                    command,
                    default,
                }
            })
            .collect();

        Self { processes }
    }

    /// デフォルトに指定されたプロセス
    pub fn default_process(&self) -> Option<&ProcessEntry> {
        self.processes.iter().find(|process| process.default)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    /// レイヤーディレクトリに launch.toml を書き出す
    ///
    /// 既存のファイルは完全に置き換えます。
    #[tracing::instrument(skip(self, layers_dir), fields(layers_dir = %layers_dir.display()))]
    pub fn write(&self, layers_dir: &Path) -> Result<()> {
        // ファイルに触る前にエンコードしておく（失敗時に既存の内容を壊さない）
        let document = self.to_toml()?;

        std::fs::create_dir_all(layers_dir).map_err(|e| ReleaseError::io(layers_dir, e))?;

        let path = layers_dir.join(LAUNCH_FILE_NAME);
        let mut file = File::create(&path).map_err(|e| ReleaseError::io(&path, e))?;
        file.write_all(document.as_bytes())
            .and_then(|()| file.flush())
            .map_err(|e| ReleaseError::io(&path, e))?;

        debug!(
            path = %path.display(),
            processes = self.processes.len(),
            "Wrote launch metadata"
        );
        Ok(())
    }
}

/// Procfileを読み込み、launch.toml を書き出す
///
/// Procfileの読み込みやパースに失敗した場合は何も書き出しません。
/// 書き出したプロセス一覧を返します（空の場合も含む）。
#[tracing::instrument(skip_all, fields(app_dir = %app_dir.display(), layers_dir = %layers_dir.display()))]
pub fn write_launch_metadata(
    app_dir: &Path,
    layers_dir: &Path,
    options: &LaunchOptions,
    log: &dyn Logger,
) -> Result<Vec<ProcessEntry>> {
    log.info("Discovering process types");

    let table = read_procfile(app_dir)?;
    let launch = LaunchMetadata::from_table(table, options.default_process);
    launch.write(layers_dir)?;

    log.info(&format!(
        "Procfile declares types -> {}",
        format_process_names(&launch.processes)
    ));

    Ok(launch.processes)
}
