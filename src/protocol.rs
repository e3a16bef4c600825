//! Wire protocol between the Rust side and the Node driver
//!
//! Each request is a single JSON line on the driver's stdin: an `id` plus an
//! internally tagged [`Command`]. The driver answers with exactly one JSON
//! line per request. Locators are serialized as chains so the driver can
//! rebuild the same `locator().filter().locator().nth()` call sequence that
//! Playwright expects.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A command executed by the driver against the live page.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum Command {
    /// Navigate the page to an absolute URL.
    Goto {
        url: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        wait_until: Option<LoadState>,
    },

    /// Wait for the page to reach a load state.
    WaitLoad { state: LoadState },

    /// Fixed delay (use sparingly).
    Sleep { ms: u64 },

    /// Click an element.
    Click { locator: Locator },

    /// Check a checkbox.
    Check { locator: Locator },

    /// Report the checked state of a checkbox.
    IsChecked { locator: Locator },

    /// Wait for an element to reach a state.
    WaitFor {
        locator: Locator,
        state: WaitState,
        timeout_ms: u64,
    },

    /// Poll a checkbox until it reports checked.
    WaitChecked { locator: Locator, timeout_ms: u64 },

    /// Read an attribute value (null when absent).
    Attribute { locator: Locator, name: String },

    /// Read the rendered text of an element.
    InnerText { locator: Locator },

    /// Count matching elements.
    Count { locator: Locator },

    /// Read the page title.
    Title,

    /// Read the current page URL.
    Url,

    /// Capture a screenshot to the given path.
    Screenshot { path: PathBuf, full_page: bool },

    /// Close the browser and exit the driver process.
    Shutdown,
}

/// One request line: id plus command.
#[derive(Debug, Serialize)]
pub struct Request<'a> {
    pub id: u64,
    #[serde(flatten)]
    pub command: &'a Command,
}

/// One response line from the driver.
#[derive(Debug, Deserialize)]
pub struct Response {
    pub id: i64,
    pub ok: bool,
    #[serde(default)]
    pub value: serde_json::Value,
    #[serde(default)]
    pub error: Option<String>,
}

/// Page load states, matching Playwright's `waitForLoadState`.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LoadState {
    Load,
    DomContentLoaded,
    NetworkIdle,
}

/// Element states, matching Playwright's `waitFor`.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WaitState {
    #[default]
    Visible,
    Hidden,
    Attached,
    Detached,
}

/// A locator chain, mirroring Playwright locator composition.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Locator {
    pub chain: Vec<LocatorStep>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum LocatorStep {
    /// Descend by CSS (or any Playwright selector).
    Css { selector: String },
    /// Keep only elements containing this text.
    HasText { text: String },
    /// Narrow to the element at this index.
    Nth { index: u32 },
}

impl Locator {
    pub fn css(selector: impl Into<String>) -> Self {
        Self {
            chain: vec![LocatorStep::Css {
                selector: selector.into(),
            }],
        }
    }

    pub fn descend(mut self, selector: impl Into<String>) -> Self {
        self.chain.push(LocatorStep::Css {
            selector: selector.into(),
        });
        self
    }

    pub fn has_text(mut self, text: impl Into<String>) -> Self {
        self.chain.push(LocatorStep::HasText { text: text.into() });
        self
    }

    pub fn nth(mut self, index: u32) -> Self {
        self.chain.push(LocatorStep::Nth { index });
        self
    }

    pub fn first(self) -> Self {
        self.nth(0)
    }

    /// Short description for timeouts and log lines.
    pub fn describe(&self) -> String {
        self.chain
            .iter()
            .map(|step| match step {
                LocatorStep::Css { selector } => selector.clone(),
                LocatorStep::HasText { text } => format!(":has-text({text})"),
                LocatorStep::Nth { index } => format!(">> nth={index}"),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Command {
    /// Short name for timeouts and log lines.
    pub fn describe(&self) -> String {
        match self {
            Command::Goto { url, .. } => format!("goto:{url}"),
            Command::WaitLoad { state } => format!("wait_load:{state:?}"),
            Command::Sleep { ms } => format!("sleep:{ms}ms"),
            Command::Click { locator } => format!("click:{}", locator.describe()),
            Command::Check { locator } => format!("check:{}", locator.describe()),
            Command::IsChecked { locator } => format!("is_checked:{}", locator.describe()),
            Command::WaitFor { locator, .. } => format!("wait_for:{}", locator.describe()),
            Command::WaitChecked { locator, .. } => {
                format!("wait_checked:{}", locator.describe())
            }
            Command::Attribute { locator, name } => {
                format!("attribute:{}@{}", locator.describe(), name)
            }
            Command::InnerText { locator } => format!("inner_text:{}", locator.describe()),
            Command::Count { locator } => format!("count:{}", locator.describe()),
            Command::Title => "title".to_string(),
            Command::Url => "url".to_string(),
            Command::Screenshot { path, .. } => format!("screenshot:{}", path.display()),
            Command::Shutdown => "shutdown".to_string(),
        }
    }
}
