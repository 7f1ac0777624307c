//! Procfileの読み込みとパース
//!
//! `Procfile` は `type: command` 形式のフラットなYAMLマッピングです。
//! 値はシェルコマンドとしてそのまま扱い、解釈はしません。

use crate::error::{ParseError, ReleaseError, Result};
use serde_yaml::Value;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, warn};

/// アプリケーションルート直下のProcfileのファイル名
pub const PROCFILE_NAME: &str = "Procfile";

/// プロセスタイプ名 → コマンド のテーブル
///
/// キーは一意です。反復順序はProcfile内の記述順に従います。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcfileTable {
    entries: Vec<(String, String)>,
}

impl ProcfileTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// エントリを追加。同名のプロセスタイプがあれば置き換え、古いコマンドを返す
    pub fn insert(
        &mut self,
        process_type: impl Into<String>,
        command: impl Into<String>,
    ) -> Option<String> {
        let process_type = process_type.into();
        let command = command.into();

        match self.entries.iter_mut().find(|(name, _)| *name == process_type) {
            Some((_, existing)) => Some(std::mem::replace(existing, command)),
            None => {
                self.entries.push((process_type, command));
                None
            }
        }
    }

    pub fn get(&self, process_type: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(name, _)| name == process_type)
            .map(|(_, command)| command.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// プロセスタイプ名の一覧（記述順）
    pub fn process_types(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }
}

impl IntoIterator for ProcfileTable {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl FromStr for ProcfileTable {
    type Err = ParseError;

    fn from_str(input: &str) -> std::result::Result<Self, Self::Err> {
        // 空行とコメントだけのファイルは空のテーブル
        if is_blank_document(input) {
            return Ok(Self::new());
        }

        let mapping = match serde_yaml::from_str::<Value>(input)? {
            Value::Null => return Ok(Self::new()),
            Value::Mapping(mapping) => mapping,
            other => return Err(ParseError::NotAMapping(kind_of(&other))),
        };

        let mut table = Self::new();
        for (key, value) in mapping {
            let process_type = match &key {
                Value::Null => return Err(ParseError::EmptyProcessType),
                key => scalar_text(key).ok_or(ParseError::InvalidProcessType(kind_of(key)))?,
            };
            if process_type.trim().is_empty() {
                return Err(ParseError::EmptyProcessType);
            }

            let command = match scalar_text(&value) {
                Some(command) if !command.trim().is_empty() => command,
                Some(_) => return Err(ParseError::EmptyCommand(process_type)),
                None if value.is_null() => return Err(ParseError::EmptyCommand(process_type)),
                None => {
                    return Err(ParseError::InvalidCommand {
                        process_type,
                        found: kind_of(&value),
                    });
                }
            };

            // `1` と `"1"` のように、別のキーが同じ文字列になる場合
            if table.get(&process_type).is_some() {
                return Err(ParseError::DuplicateProcessType(process_type));
            }
            table.insert(process_type, command);
        }

        Ok(table)
    }
}

/// アプリケーションディレクトリからProcfileを読み込む
///
/// Procfileが存在しない場合は空のテーブルを返します（エラーではありません）。
#[tracing::instrument(skip(app_dir), fields(app_dir = %app_dir.display()))]
pub fn read_procfile(app_dir: &Path) -> Result<ProcfileTable> {
    let path = app_dir.join(PROCFILE_NAME);

    let contents = match std::fs::read_to_string(&path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "Procfile not found");
            return Ok(ProcfileTable::new());
        }
        Err(err) => return Err(ReleaseError::io(&path, err)),
    };

    let table: ProcfileTable = contents.parse()?;
    if table.is_empty() {
        warn!(path = %path.display(), "Empty file, no processes defined");
    }
    debug!(
        path = %path.display(),
        count = table.len(),
        types = ?table.process_types().collect::<Vec<_>>(),
        "Parsed Procfile"
    );

    Ok(table)
}

fn is_blank_document(input: &str) -> bool {
    input.lines().all(|line| {
        let line = line.trim();
        line.is_empty() || line.starts_with('#')
    })
}

/// スカラー値を文字列として取り出す（文字列・数値・真偽値のみ）
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}
