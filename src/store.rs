use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};

use crate::model::{ClientConfig, ClientState};

mod session_store;
mod state_token;

pub use self::session_store::{FileSessionStore, MemorySessionStore, SessionStore};

pub const HOME_ENV: &str = "CHECKLIST_HOME";
pub const URL_ENV: &str = "CHECKLIST_URL";
const APP_DIR: &str = "checklist";

/// Tool-owned directory holding `config.json` and `state.json`.
#[derive(Clone, Debug)]
pub struct LocalStore {
    root: PathBuf,
}

impl LocalStore {
    /// `--data-dir`, then `$CHECKLIST_HOME`, then the platform data dir.
    pub fn resolve_root(flag: Option<PathBuf>) -> Result<PathBuf> {
        if let Some(p) = flag {
            return Ok(p);
        }
        if let Some(p) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
            return Ok(PathBuf::from(p));
        }
        dirs::data_dir()
            .map(|d| d.join(APP_DIR))
            .ok_or_else(|| anyhow!("no data directory available (set {} or --data-dir)", HOME_ENV))
    }

    /// Opens the store, creating the directory on first use.
    pub fn open(root: &Path) -> Result<Self> {
        fs::create_dir_all(root)
            .with_context(|| format!("create data dir {}", root.display()))?;
        Ok(Self {
            root: root.to_path_buf(),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn log_path(&self) -> PathBuf {
        self.root.join("checklist.log")
    }

    pub fn read_config(&self) -> Result<ClientConfig> {
        let path = self.root.join("config.json");
        if !path.exists() {
            return Ok(ClientConfig::default());
        }
        let bytes = fs::read(&path).context("read config.json")?;
        let cfg: ClientConfig = serde_json::from_slice(&bytes).context("parse config.json")?;
        if cfg.version != 1 {
            anyhow::bail!("unsupported config version {}", cfg.version);
        }
        Ok(cfg)
    }

    /// `config.json` with the base URL overridden by `url_flag`, then
    /// `$CHECKLIST_URL`.
    pub fn effective_config(&self, url_flag: Option<&str>) -> Result<ClientConfig> {
        let env_url = std::env::var(URL_ENV).ok();
        let mut cfg = self.read_config()?;
        if let Some(url) = url_flag
            .or(env_url.as_deref())
            .map(str::trim)
            .filter(|u| !u.is_empty())
        {
            cfg.base_url = url.to_string();
        }
        cfg.base_url = cfg.base_url.trim_end_matches('/').to_string();
        Ok(cfg)
    }

    pub fn write_config(&self, cfg: &ClientConfig) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(cfg).context("serialize config")?;
        write_atomic(&self.root.join("config.json"), &bytes).context("write config.json")?;
        Ok(())
    }

    pub fn read_state(&self) -> Result<ClientState> {
        let path = self.root.join("state.json");
        if !path.exists() {
            return Ok(ClientState {
                version: 1,
                token: None,
            });
        }
        let bytes = fs::read(&path).context("read state.json")?;
        let st: ClientState = serde_json::from_slice(&bytes).context("parse state.json")?;
        if st.version != 1 {
            anyhow::bail!("unsupported client state version {}", st.version);
        }
        Ok(st)
    }

    pub fn write_state(&self, st: &ClientState) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(st).context("serialize state")?;
        write_atomic(&self.root.join("state.json"), &bytes).context("write state.json")?;
        Ok(())
    }
}

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("create parent directories")?;
    }
    let tmp = path.with_extension(format!("tmp.{}", std::process::id()));
    fs::write(&tmp, bytes).with_context(|| format!("write temp file {}", tmp.display()))?;
    fs::rename(&tmp, path)
        .with_context(|| format!("rename {} -> {}", tmp.display(), path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_files_yield_defaults() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let store = LocalStore::open(&dir.path().join("nested"))?;
        assert_eq!(store.read_config()?, ClientConfig::default());
        assert_eq!(store.read_state()?.token, None);
        Ok(())
    }

    #[test]
    fn config_round_trips_through_disk() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let store = LocalStore::open(dir.path())?;
        let cfg = ClientConfig {
            version: 1,
            base_url: "http://127.0.0.1:9/api".to_string(),
            request_timeout_secs: Some(5),
        };
        store.write_config(&cfg)?;
        assert_eq!(store.read_config()?, cfg);
        Ok(())
    }

    #[test]
    fn unknown_state_version_is_rejected() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let store = LocalStore::open(dir.path())?;
        fs::write(dir.path().join("state.json"), br#"{"version":7,"token":"x"}"#)?;
        let err = store.read_state().unwrap_err();
        assert!(format!("{:#}", err).contains("unsupported client state version 7"));
        Ok(())
    }

    #[test]
    fn url_flag_overrides_config_file() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let store = LocalStore::open(dir.path())?;
        store.write_config(&ClientConfig {
            version: 1,
            base_url: "http://from-file/api".to_string(),
            request_timeout_secs: None,
        })?;
        let cfg = store.effective_config(Some("http://from-flag/api/"))?;
        assert_eq!(cfg.base_url, "http://from-flag/api");
        Ok(())
    }

    #[test]
    fn explicit_root_wins_over_environment() -> Result<()> {
        let root = LocalStore::resolve_root(Some(PathBuf::from("/tmp/explicit")))?;
        assert_eq!(root, PathBuf::from("/tmp/explicit"));
        Ok(())
    }
}
