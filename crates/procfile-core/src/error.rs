use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReleaseError {
    #[error("IO error: {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Procfile is not in a valid format: {0}")]
    Parse(#[from] ParseError),

    #[error("Failed to encode launch metadata: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// `Procfile` の内容に関するエラー
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("{0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("expected a mapping of process types to commands, found {0}")]
    NotAMapping(&'static str),

    #[error("process type name cannot be empty")]
    EmptyProcessType,

    #[error("process type name must be a string, found {0}")]
    InvalidProcessType(&'static str),

    #[error("duplicate process type `{0}`")]
    DuplicateProcessType(String),

    #[error("command for process type `{0}` cannot be empty")]
    EmptyCommand(String),

    #[error("command for process type `{process_type}` must be a string, found {found}")]
    InvalidCommand {
        process_type: String,
        found: &'static str,
    },
}

impl ReleaseError {
    /// パス付きのIOエラーを生成
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        ReleaseError::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// ユーザー向けの分かりやすいエラーメッセージ
    pub fn user_message(&self) -> String {
        match self {
            ReleaseError::Io { path, source } if path.ends_with("Procfile") => {
                format!(
                    "Cannot read Procfile contents: {}\n\
                     \n\
                     Please ensure the Procfile in the root of your application is a readable \
                     UTF-8 encoded file and try again.\n\
                     \n\
                     Underlying cause was: {}",
                    path.display(),
                    source
                )
            }
            ReleaseError::Parse(err) => {
                format!(
                    "Invalid Procfile: {}\n\
                     \n\
                     Each line must declare a process type and its command, for example:\n\
                     \x20   web: node index.js",
                    err
                )
            }
            _ => format!("{}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, ReleaseError>;
