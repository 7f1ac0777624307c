//! detect判定とビルドプラン

use crate::error::{ReleaseError, Result};
use crate::procfile::PROCFILE_NAME;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// ビルドプランで提供・要求する名前
pub const BUILD_PLAN_NAME: &str = "procfile";

/// アプリケーションルート直下にProcfileがあるか
pub fn has_procfile(app_dir: &Path) -> bool {
    app_dir.join(PROCFILE_NAME).is_file()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildPlanEntry {
    pub name: String,
}

/// detect時に書き出すビルドプラン
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildPlan {
    #[serde(default)]
    pub provides: Vec<BuildPlanEntry>,
    #[serde(default)]
    pub requires: Vec<BuildPlanEntry>,
}

impl BuildPlan {
    /// `procfile` を提供し、かつ要求するプラン
    pub fn procfile() -> Self {
        let entry = BuildPlanEntry {
            name: BUILD_PLAN_NAME.to_string(),
        };
        Self {
            provides: vec![entry.clone()],
            requires: vec![entry],
        }
    }

    /// ビルドプランファイルに書き出す
    pub fn write(&self, path: &Path) -> Result<()> {
        let document = toml::to_string(self)?;
        std::fs::write(path, document).map_err(|e| ReleaseError::io(path, e))?;
        debug!(path = %path.display(), "Wrote build plan");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_has_procfile() {
        let app_dir = tempdir().unwrap();
        fs::write(
            app_dir.path().join("Procfile"),
            "julie_andrews: supercalifragilisticexpialidocious",
        )
        .unwrap();

        assert!(has_procfile(app_dir.path()));
    }

    #[test]
    fn test_missing_procfile() {
        let app_dir = tempdir().unwrap();
        assert!(!has_procfile(app_dir.path()));
    }

    #[test]
    fn test_procfile_directory_is_not_detected() {
        let app_dir = tempdir().unwrap();
        fs::create_dir(app_dir.path().join("Procfile")).unwrap();
        assert!(!has_procfile(app_dir.path()));
    }

    #[test]
    fn test_write_build_plan() {
        let dir = tempdir().unwrap();
        let plan_path = dir.path().join("plan.toml");

        BuildPlan::procfile().write(&plan_path).unwrap();

        let content = fs::read_to_string(&plan_path).unwrap();
        assert!(content.contains("[[provides]]"));
        assert!(content.contains("[[requires]]"));

        let plan: BuildPlan = toml::from_str(&content).unwrap();
        assert_eq!(plan, BuildPlan::procfile());
    }
}
