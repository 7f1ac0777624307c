//! CNBプラットフォームディレクトリ
//!
//! `<platform>/env/` 内の各ファイルが1つの環境変数を表します
//! （ファイル名が変数名）。ここでは変数が設定されているかだけを扱い、
//! ファイルの内容は読みません。

use crate::error::{ReleaseError, Result};
use std::collections::BTreeSet;
use std::path::Path;
use tracing::debug;

/// デバッグログを有効にする環境変数
pub const DEBUG_ENV: &str = "BP_DEBUG";

/// プラットフォームから渡された環境変数
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlatformEnv {
    names: BTreeSet<String>,
}

impl PlatformEnv {
    /// プラットフォームディレクトリから環境変数名を読み込む
    ///
    /// `env/` ディレクトリが存在しない場合は空として扱います。
    #[tracing::instrument(skip(platform_dir), fields(platform_dir = %platform_dir.display()))]
    pub fn load(platform_dir: &Path) -> Result<Self> {
        let env_dir = platform_dir.join("env");
        let entries = match std::fs::read_dir(&env_dir) {
            Ok(entries) => entries,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!(env_dir = %env_dir.display(), "Platform env directory not found");
                return Ok(Self::default());
            }
            Err(err) => return Err(ReleaseError::io(&env_dir, err)),
        };

        let mut names = BTreeSet::new();
        for entry in entries {
            let entry = entry.map_err(|e| ReleaseError::io(&env_dir, e))?;
            if !entry.path().is_file() {
                continue;
            }

            // 変数名として扱えないファイル名は無視
            match entry.file_name().into_string() {
                Ok(name) => {
                    names.insert(name);
                }
                Err(name) => debug!(file = ?name, "Skipping non UTF-8 platform env name"),
            }
        }

        debug!(count = names.len(), "Loaded platform env");
        Ok(Self { names })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// BP_DEBUG が設定されているか（値は問わない）
    pub fn is_debug(&self) -> bool {
        self.contains(DEBUG_ENV)
    }
}
