use std::process::{Child, Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};

pub struct ServerGuard {
    /// Client-facing base URL, including the `/api` prefix.
    pub base_url: String,
    _tmp: tempfile::TempDir,
    child: Child,
}

impl Drop for ServerGuard {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

pub fn spawn_server() -> Result<ServerGuard> {
    let tmp = tempfile::tempdir().context("create server tempdir")?;
    let addr_file = tmp.path().join("addr.txt");

    let child = Command::new(env!("CARGO_BIN_EXE_checklist-server"))
        .args([
            "--addr",
            "127.0.0.1:0",
            "--addr-file",
            addr_file.to_str().unwrap(),
        ])
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .context("spawn checklist-server")?;

    let root = read_addr_file(&addr_file)?;
    wait_for_healthz(&root)?;

    Ok(ServerGuard {
        base_url: format!("{}/api", root),
        _tmp: tmp,
        child,
    })
}

fn read_addr_file(addr_file: &std::path::Path) -> Result<String> {
    let start = Instant::now();
    loop {
        if start.elapsed() > Duration::from_secs(5) {
            anyhow::bail!("addr file not written at {}", addr_file.display());
        }

        if let Ok(s) = std::fs::read_to_string(addr_file) {
            let s = s.trim();
            if !s.is_empty() {
                return Ok(format!("http://{}", s));
            }
        }
        thread::sleep(Duration::from_millis(10));
    }
}

pub fn wait_for_healthz(root: &str) -> Result<()> {
    let client = reqwest::blocking::Client::new();
    let start = Instant::now();
    loop {
        if start.elapsed() > Duration::from_secs(5) {
            anyhow::bail!("server did not become healthy at {}/healthz", root);
        }
        match client.get(format!("{}/healthz", root)).send() {
            Ok(resp) if resp.status().is_success() => return Ok(()),
            _ => {
                thread::sleep(Duration::from_millis(50));
            }
        }
    }
}

#[allow(dead_code)]
pub fn client_for(guard: &ServerGuard) -> Result<checklist::remote::RemoteClient> {
    let config = checklist::model::ClientConfig {
        base_url: guard.base_url.clone(),
        ..Default::default()
    };
    checklist::remote::RemoteClient::new(&config)
}

#[allow(dead_code)]
pub fn run_cli(data_dir: &std::path::Path, args: &[&str]) -> Result<std::process::Output> {
    Command::new(env!("CARGO_BIN_EXE_checklist"))
        .arg("--data-dir")
        .arg(data_dir)
        .args(args)
        .env_remove("CHECKLIST_URL")
        .output()
        .with_context(|| format!("run checklist {:?}", args))
}
