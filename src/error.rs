//! Error types for the editor.
//!
//! The editor is presentational: nothing here is surfaced to callers of the
//! view. These errors exist for the few fallible edges (config file, config
//! watching, webview creation, the document affordance lock) and are logged
//! where they are absorbed.

use thiserror::Error;

/// Errors that can occur around the editor
#[derive(Error, Debug)]
pub enum EditorError {
    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file parse error from serde_json
    #[error("Config parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// File watcher error from notify
    #[error("Watch error: {0}")]
    Watch(#[from] notify::Error),

    /// Child webviews are not available on this platform
    #[error("WebView not supported on this platform")]
    WebViewUnsupported,

    /// The platform refused to create the webview
    #[error("Failed to create WebView: {0}")]
    WebView(String),

    /// Another owner already holds the document cursor/selection lock
    #[error("Document affordances already held by owner {holder}")]
    AffordancesHeld { holder: u64 },

    /// No config directory on this platform
    #[error("No config directory available")]
    NoConfigDir,
}

/// Result type alias for editor operations
pub type EditorResult<T> = Result<T, EditorError>;

impl From<wry::Error> for EditorError {
    fn from(e: wry::Error) -> Self {
        EditorError::WebView(format!("{:?}", e))
    }
}
