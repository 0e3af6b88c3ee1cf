use anyhow::{Context, Result};
use std::net::TcpListener;
use std::path::PathBuf;
use std::process::{Child, Command, Stdio};
use std::time::{Duration, Instant};
use uuid::Uuid;

const STARTUP_TIMEOUT: Duration = Duration::from_secs(60);
const POLL_INTERVAL: Duration = Duration::from_millis(100);
const REPORT_EVERY: Duration = Duration::from_secs(5);

/// A `web` server process with its own port and optional sync file.
pub struct TestServer {
    url: String,
    process: Option<Child>,
    sync_path: Option<PathBuf>,
}

impl TestServer {
    pub async fn start() -> Result<Self> {
        Self::launch(None).await
    }

    /// Start a server whose `/api/sync` serves `payload`.
    pub async fn start_with_sync(payload: serde_json::Value) -> Result<Self> {
        Self::launch(Some(payload)).await
    }

    async fn launch(payload: Option<serde_json::Value>) -> Result<Self> {
        let port = free_port()?;

        let sync_path = match payload {
            Some(payload) => {
                let path = std::env::temp_dir().join(format!("linguaromana-e2e-{}.json", Uuid::new_v4()));
                std::fs::write(&path, serde_json::to_vec_pretty(&payload)?)
                    .with_context(|| format!("writing sync file {}", path.display()))?;
                Some(path)
            }
            None => None,
        };

        let mut command = Command::new("cargo");
        command
            .args(["run", "--package", "web", "--features", "server"])
            .env("APP_MODE", "local")
            .env("PORT", port.to_string())
            .env("IP", "127.0.0.1")
            .env_remove("BACKEND_URL")
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        match &sync_path {
            Some(path) => command.env("LINGUAROMANA_SYNC_FILE", path),
            None => command.env_remove("LINGUAROMANA_SYNC_FILE"),
        };
        let process = command.spawn().context("starting web server")?;

        let server = Self {
            url: format!("http://127.0.0.1:{port}"),
            process: Some(process),
            sync_path,
        };
        server.wait_until_ready().await?;
        Ok(server)
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Polls the home page; the first run also compiles the web package.
    async fn wait_until_ready(&self) -> Result<()> {
        let started = Instant::now();
        let mut last_report = started;
        while started.elapsed() < STARTUP_TIMEOUT {
            if let Ok(response) = reqwest::get(&self.url).await {
                if response.status().is_success() {
                    return Ok(());
                }
            }
            if last_report.elapsed() >= REPORT_EVERY {
                eprintln!("e2e: {} not up after {}s", self.url, started.elapsed().as_secs());
                last_report = Instant::now();
            }
            tokio::time::sleep(POLL_INTERVAL).await;
        }
        anyhow::bail!("{} did not answer within {}s", self.url, STARTUP_TIMEOUT.as_secs())
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(mut process) = self.process.take() {
            if let Err(e) = process.kill() {
                eprintln!("e2e: could not stop server: {e}");
            }
            let _ = process.wait();
        }
        if let Some(path) = self.sync_path.take() {
            let _ = std::fs::remove_file(path);
        }
    }
}

fn free_port() -> Result<u16> {
    let listener = TcpListener::bind("127.0.0.1:0").context("binding an ephemeral port")?;
    Ok(listener.local_addr()?.port())
}
