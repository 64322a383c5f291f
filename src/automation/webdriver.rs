//! A small W3C WebDriver client: just enough to open a browser session,
//! move its window and load a page.

use reqwest::blocking::Client;
use reqwest::{Method, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

use super::WindowPositioner;
use crate::config::WebDriverConfig;
use crate::error::{Error, Result};
use crate::monitor::Point;

/// Every WebDriver response wraps its payload in `{"value": ...}`.
#[derive(Deserialize)]
struct Envelope<T> {
    value: T,
}

#[derive(Deserialize)]
struct ErrorValue {
    error: String,
    #[serde(default)]
    message: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct NewSession {
    session_id: String,
}

/// Browser window geometry as reported by the remote end.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct WindowRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

/// Turn a raw response into the `value` payload or a WebDriver error.
fn decode<T: DeserializeOwned>(status: StatusCode, body: &str) -> Result<T> {
    if !status.is_success() {
        return Err(match serde_json::from_str::<Envelope<ErrorValue>>(body) {
            Ok(envelope) => Error::WebDriver {
                error: envelope.value.error,
                message: envelope.value.message,
            },
            Err(_) => Error::WebDriver {
                error: "unknown error".to_string(),
                message: format!("HTTP {}: {}", status, body.trim()),
            },
        });
    }
    serde_json::from_str::<Envelope<T>>(body)
        .map(|envelope| envelope.value)
        .map_err(Error::MalformedResponse)
}

fn execute<T: DeserializeOwned>(
    http: &Client,
    method: Method,
    url: &str,
    body: Option<Value>,
) -> Result<T> {
    log::debug!("WebDriver {} {}", method, url);
    let mut request = http.request(method, url);
    if let Some(body) = body {
        request = request.json(&body);
    }
    let response = request.send()?;
    let status = response.status();
    let text = response.text()?;
    decode(status, &text)
}

pub struct WebDriverClient {
    http: Client,
    base_url: String,
    session_id: String,
}

impl WebDriverClient {
    /// Start a new browser session on the configured remote end.
    pub fn new_session(config: &WebDriverConfig) -> Result<Self> {
        let http = Client::new();
        let base_url = config.url.trim_end_matches('/').to_string();
        let capabilities = json!({
            "capabilities": {
                "alwaysMatch": { "browserName": config.browser }
            }
        });
        let session: NewSession = execute(
            &http,
            Method::POST,
            &format!("{}/session", base_url),
            Some(capabilities),
        )?;
        log::info!(
            "Started {} session {} on {}",
            config.browser,
            session.session_id,
            base_url
        );
        Ok(Self {
            http,
            base_url,
            session_id: session.session_id,
        })
    }

    /// Reuse a session that is already running.
    pub fn attach(url: &str, session_id: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: url.trim_end_matches('/').to_string(),
            session_id: session_id.into(),
        }
    }

    /// Start or attach depending on whether a session id is configured.
    pub fn connect(config: &WebDriverConfig) -> Result<Self> {
        match &config.session_id {
            Some(id) => {
                log::info!("Attaching to WebDriver session {}", id);
                Ok(Self::attach(&config.url, id.clone()))
            }
            None => Self::new_session(config),
        }
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    fn session_url(&self, command: &str) -> String {
        format!("{}/session/{}/{}", self.base_url, self.session_id, command)
    }

    pub fn window_rect(&self) -> Result<WindowRect> {
        execute(&self.http, Method::GET, &self.session_url("window/rect"), None)
    }

    pub fn navigate(&self, url: &str) -> Result<()> {
        let _: Value = execute(
            &self.http,
            Method::POST,
            &self.session_url("url"),
            Some(json!({ "url": url })),
        )?;
        Ok(())
    }
}

impl WindowPositioner for WebDriverClient {
    fn set_window_position(&self, position: Point) -> Result<()> {
        let rect: WindowRect = execute(
            &self.http,
            Method::POST,
            &self.session_url("window/rect"),
            Some(json!({ "x": position.x, "y": position.y })),
        )?;
        log::debug!("Browser window now at {:?}", rect);
        Ok(())
    }
}
