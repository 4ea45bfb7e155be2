use serde_json::Value;
use yansi::Paint;
use std::sync::atomic::{AtomicBool, Ordering};

use super::cancel::CancelToken;
use super::error::BackendError;

static SILENT: AtomicBool = AtomicBool::new(false);

pub fn set_silent(silent: bool) {
    SILENT.store(silent, Ordering::Relaxed);
}

fn log_output(msg: String) {
    if !SILENT.load(Ordering::Relaxed) {
        println!("{}", msg);
    }
}

fn log_request(method: &str, url: &str, body: Option<&Value>) {
    let mut parts = Vec::new();
    parts.push(Paint::new("curl").fg(yansi::Color::Green).bold().to_string());
    parts.push(format!("-X {}", Paint::new(method).fg(yansi::Color::Yellow).bold()));
    parts.push(format!("'{}'", Paint::new(url).fg(yansi::Color::Cyan)));

    if let Some(d) = body {
        parts.push(format!("{} {}",
            Paint::new("-H").fg(yansi::Color::Magenta),
            Paint::new("'Content-Type: application/json'").fg(yansi::Color::Magenta)
        ));
        let json_str = serde_json::to_string_pretty(d).unwrap_or_default();
        let escaped_json = json_str.replace('\'', "'\\''");
        parts.push(format!("{} {}",
            Paint::new("-d").fg(yansi::Color::Blue),
            Paint::new(format!("'{}'", escaped_json)).fg(yansi::Color::White)
        ));
    }
    log_output(format!("Request:\n{}", parts.join(" ")));
}

/// Core HTTP call against the backend.
///
/// Sends one request (no retries), waits for the full body and returns it as text.
/// A non-2xx status is an error; the body of such responses is never parsed.
/// Both the send and the body read race against `cancel`.
pub async fn api_call(
    client: &reqwest::Client,
    backend_url: &str,
    method: &str,
    endpoint: &str,
    body: Option<Value>,
    cancel: &CancelToken,
) -> Result<String, BackendError> {
    let url = format!("{}{}", backend_url, endpoint);
    log_request(method, &url, body.as_ref());

    if cancel.is_cancelled() {
        return Err(BackendError::Cancelled);
    }

    let mut req = match method {
        "POST" => client.post(&url),
        "PUT" => client.put(&url),
        "DELETE" => client.delete(&url),
        _ => client.get(&url),
    };
    if let Some(ref b) = body {
        req = req.json(b);
    }

    let resp = tokio::select! {
        biased;
        _ = cancel.cancelled() => return Err(BackendError::Cancelled),
        sent = req.send() => sent.map_err(|e| BackendError::Network(e.to_string()))?,
    };

    let status = resp.status();
    let text = tokio::select! {
        biased;
        _ = cancel.cancelled() => return Err(BackendError::Cancelled),
        read = resp.text() => read.map_err(|e| BackendError::Network(e.to_string()))?,
    };

    if !status.is_success() {
        log_output(format!("Response:\n{}", Paint::new(format!("HTTP {}: {}", status, text)).fg(yansi::Color::Red)));
        return Err(BackendError::Status(status.as_u16()));
    }

    // Grayed out so the request line stays the thing you notice
    log_output(format!("Response:\n{}", Paint::new(&text).rgb(100, 100, 100)));
    Ok(text)
}
