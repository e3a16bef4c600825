//! Playwright browser automation
//!
//! Rust controls Playwright through a single long-lived Node process running
//! the embedded `driver.js`. The driver owns one browser page for the whole
//! scenario; the Rust side sends one [`Command`] per line on its stdin and
//! reads one [`Response`] per line from its stdout. Scenario steps therefore
//! share page state, which a script-per-step model cannot provide.

use std::fmt;
use std::path::Path;
use std::process::Stdio;
use std::time::Duration;

use tempfile::TempDir;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Lines};
use tokio::process::{Child, ChildStdin, ChildStdout, Command as TokioCommand};
use tokio::time::timeout;
use tracing::{debug, warn};

use crate::config::SuiteConfig;
use crate::error::{E2eError, E2eResult};
use crate::protocol::{Command, LoadState, Locator, Request, Response, WaitState};

const DRIVER_JS: &str = include_str!("driver.js");

/// Margin on top of the navigation timeout before the Rust side gives up on
/// a driver reply. The driver enforces the real timeouts; this only catches
/// a wedged process.
const REPLY_MARGIN: Duration = Duration::from_secs(15);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Browser {
    #[default]
    Chromium,
    Firefox,
    Webkit,
}

impl Browser {
    pub fn as_str(&self) -> &'static str {
        match self {
            Browser::Chromium => "chromium",
            Browser::Firefox => "firefox",
            Browser::Webkit => "webkit",
        }
    }

    /// Lenient parse; anything unrecognized falls back to Chromium.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "firefox" => Browser::Firefox,
            "webkit" => Browser::Webkit,
            _ => Browser::Chromium,
        }
    }
}

/// Handle to the persistent browser session.
pub struct PlaywrightDriver {
    child: Child,
    stdin: ChildStdin,
    lines: Lines<BufReader<ChildStdout>>,
    reply_timeout: Duration,
    next_id: u64,
    // Keeps the staged driver script alive for the child's lifetime.
    _script_dir: TempDir,
}

impl fmt::Debug for PlaywrightDriver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlaywrightDriver")
            .field("pid", &self.child.id())
            .field("next_id", &self.next_id)
            .finish()
    }
}

impl PlaywrightDriver {
    /// Launch a browser session for the given suite configuration.
    pub async fn launch(config: &SuiteConfig) -> E2eResult<Self> {
        Self::check_playwright_installed()?;

        let script_dir = tempfile::tempdir()?;
        let script_path = script_dir.path().join("driver.js");
        std::fs::write(&script_path, DRIVER_JS)?;

        let driver_config = serde_json::json!({
            "browser": config.browser.as_str(),
            "headless": config.headless,
            "viewport_width": config.viewport_width,
            "viewport_height": config.viewport_height,
            "command_timeout_ms": config.command_timeout.as_millis() as u64,
            "navigation_timeout_ms": config.navigation_timeout.as_millis() as u64,
        });

        debug!("Spawning Playwright driver: {}", driver_config);

        let mut child = TokioCommand::new("node")
            .arg(&script_path)
            .arg(driver_config.to_string())
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| E2eError::DriverStartup(format!("failed to spawn node: {e}")))?;

        let stdin = child
            .stdin
            .take()
            .ok_or_else(|| E2eError::DriverStartup("driver stdin unavailable".into()))?;
        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| E2eError::DriverStartup("driver stdout unavailable".into()))?;
        let stderr = child
            .stderr
            .take()
            .ok_or_else(|| E2eError::DriverStartup("driver stderr unavailable".into()))?;

        // Forward driver diagnostics to the log stream.
        tokio::spawn(async move {
            let mut lines = BufReader::new(stderr).lines();
            while let Ok(Some(line)) = lines.next_line().await {
                debug!(target: "playwright", "{}", line);
            }
        });

        Ok(Self {
            child,
            stdin,
            lines: BufReader::new(stdout).lines(),
            reply_timeout: config.navigation_timeout + REPLY_MARGIN,
            next_id: 1,
            _script_dir: script_dir,
        })
    }

    /// Check that Node can resolve the playwright package.
    fn check_playwright_installed() -> E2eResult<()> {
        let status = std::process::Command::new("node")
            .args(["-e", "require('playwright')"])
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();

        match status {
            Ok(status) if status.success() => Ok(()),
            _ => Err(E2eError::PlaywrightNotFound),
        }
    }

    /// Send one command and wait for its reply.
    async fn send(&mut self, command: Command) -> E2eResult<serde_json::Value> {
        let id = self.next_id;
        self.next_id += 1;

        debug!("driver <- {}", command.describe());

        let line = serde_json::to_string(&Request { id, command: &command })?;
        self.stdin.write_all(line.as_bytes()).await?;
        self.stdin.write_all(b"\n").await?;
        self.stdin.flush().await?;

        loop {
            let line = timeout(self.reply_timeout, self.lines.next_line())
                .await
                .map_err(|_| E2eError::ReplyTimeout(command.describe()))??
                .ok_or(E2eError::DriverExited)?;

            let resp: Response = match serde_json::from_str(&line) {
                Ok(resp) => resp,
                Err(e) => {
                    warn!("Discarding unparseable driver line ({e}): {line}");
                    continue;
                }
            };

            if resp.id != id as i64 {
                warn!("Discarding stale driver reply for id {}", resp.id);
                continue;
            }

            if resp.ok {
                return Ok(resp.value);
            }
            return Err(E2eError::Driver(format!(
                "{}: {}",
                command.describe(),
                resp.error.unwrap_or_else(|| "unknown error".into())
            )));
        }
    }

    pub async fn goto(&mut self, url: &str, wait_until: Option<LoadState>) -> E2eResult<()> {
        self.send(Command::Goto {
            url: url.to_string(),
            wait_until,
        })
        .await?;
        Ok(())
    }

    pub async fn wait_load(&mut self, state: LoadState) -> E2eResult<()> {
        self.send(Command::WaitLoad { state }).await?;
        Ok(())
    }

    pub async fn sleep(&mut self, duration: Duration) -> E2eResult<()> {
        self.send(Command::Sleep {
            ms: duration.as_millis() as u64,
        })
        .await?;
        Ok(())
    }

    pub async fn click(&mut self, locator: Locator) -> E2eResult<()> {
        self.send(Command::Click { locator }).await?;
        Ok(())
    }

    pub async fn check(&mut self, locator: Locator) -> E2eResult<()> {
        self.send(Command::Check { locator }).await?;
        Ok(())
    }

    pub async fn is_checked(&mut self, locator: Locator) -> E2eResult<bool> {
        let value = self.send(Command::IsChecked { locator }).await?;
        value
            .as_bool()
            .ok_or_else(|| E2eError::Protocol(format!("expected bool, got {value}")))
    }

    pub async fn wait_for(
        &mut self,
        locator: Locator,
        state: WaitState,
        timeout_ms: u64,
    ) -> E2eResult<()> {
        self.send(Command::WaitFor {
            locator,
            state,
            timeout_ms,
        })
        .await?;
        Ok(())
    }

    pub async fn wait_checked(&mut self, locator: Locator, timeout_ms: u64) -> E2eResult<()> {
        self.send(Command::WaitChecked {
            locator,
            timeout_ms,
        })
        .await?;
        Ok(())
    }

    pub async fn attribute(&mut self, locator: Locator, name: &str) -> E2eResult<Option<String>> {
        let value = self
            .send(Command::Attribute {
                locator,
                name: name.to_string(),
            })
            .await?;
        match value {
            serde_json::Value::Null => Ok(None),
            serde_json::Value::String(s) => Ok(Some(s)),
            other => Err(E2eError::Protocol(format!(
                "expected string or null, got {other}"
            ))),
        }
    }

    pub async fn inner_text(&mut self, locator: Locator) -> E2eResult<String> {
        let value = self.send(Command::InnerText { locator }).await?;
        value
            .as_str()
            .map(|s| s.to_string())
            .ok_or_else(|| E2eError::Protocol(format!("expected string, got {value}")))
    }

    pub async fn count(&mut self, locator: Locator) -> E2eResult<usize> {
        let value = self.send(Command::Count { locator }).await?;
        value
            .as_u64()
            .map(|n| n as usize)
            .ok_or_else(|| E2eError::Protocol(format!("expected number, got {value}")))
    }

    pub async fn title(&mut self) -> E2eResult<String> {
        let value = self.send(Command::Title).await?;
        value
            .as_str()
            .map(|s| s.to_string())
            .ok_or_else(|| E2eError::Protocol(format!("expected string, got {value}")))
    }

    pub async fn current_url(&mut self) -> E2eResult<String> {
        let value = self.send(Command::Url).await?;
        value
            .as_str()
            .map(|s| s.to_string())
            .ok_or_else(|| E2eError::Protocol(format!("expected string, got {value}")))
    }

    pub async fn screenshot(&mut self, path: &Path, full_page: bool) -> E2eResult<()> {
        self.send(Command::Screenshot {
            path: path.to_path_buf(),
            full_page,
        })
        .await?;
        Ok(())
    }

    /// Close the browser and reap the driver process.
    pub async fn close(mut self) -> E2eResult<()> {
        // Best effort: the driver exits on shutdown; kill_on_drop covers a
        // wedged process.
        let _ = self.send(Command::Shutdown).await;
        let _ = timeout(Duration::from_secs(5), self.child.wait()).await;
        Ok(())
    }
}
