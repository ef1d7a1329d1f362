use assert_cmd::Command;
use tempfile::TempDir;

/// Isolated data directory plus a command builder pointed at it.
pub struct TestFixture {
    data_dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            data_dir: TempDir::new().expect("create temp data dir"),
        }
    }

    pub fn data_dir(&self) -> &std::path::Path {
        self.data_dir.path()
    }

    /// Point the config at a local endpoint.
    pub fn with_endpoint(self, endpoint: &str) -> Self {
        let config = format!("endpoint = \"{}\"\ndebounce_ms = 500\n", endpoint);
        std::fs::write(self.data_dir().join("config.toml"), config).expect("write config");
        self
    }

    #[allow(deprecated)]
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("tagview").expect("tagview binary");
        cmd.arg("--data-dir").arg(self.data_dir());
        cmd
    }
}
