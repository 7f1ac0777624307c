use procfile_core::LaunchMetadata;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// app / layers / platform ディレクトリを持つテスト用の作業領域
pub struct TestApp {
    pub root: TempDir,
}

impl TestApp {
    pub fn new() -> Self {
        let root = tempfile::tempdir().unwrap();
        fs::create_dir_all(root.path().join("app")).unwrap();
        fs::create_dir_all(root.path().join("platform")).unwrap();
        Self { root }
    }

    pub fn write_procfile(&self, content: &str) {
        fs::write(self.app_dir().join("Procfile"), content).unwrap();
    }

    #[allow(dead_code)]
    pub fn set_platform_env(&self, name: &str, value: impl AsRef<[u8]>) {
        let env_dir = self.platform_dir().join("env");
        fs::create_dir_all(&env_dir).unwrap();
        fs::write(env_dir.join(name), value).unwrap();
    }

    pub fn app_dir(&self) -> PathBuf {
        self.root.path().join("app")
    }

    #[allow(dead_code)]
    pub fn layers_dir(&self) -> PathBuf {
        self.root.path().join("layers")
    }

    pub fn platform_dir(&self) -> PathBuf {
        self.root.path().join("platform")
    }

    #[allow(dead_code)]
    pub fn launch_toml(&self) -> LaunchMetadata {
        let content = fs::read_to_string(self.layers_dir().join("launch.toml")).unwrap();
        toml::from_str(&content).unwrap()
    }
}
