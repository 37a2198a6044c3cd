use std::path::PathBuf;

/// Well-known identifier of the completion assistant extension.
///
/// The same identifier doubles as this bridge's provider id when the
/// resolver is registered with the assistant's runtime.
pub const CONSUMER_EXTENSION_ID: &str = "completion-assistant";

/// Provider API version requested from the consumer extension.
pub const PROVIDER_API_VERSION: &str = "v1";

/// Method identifier of the single remote call the bridge forwards.
pub const RESOLVE_CONTEXT_METHOD: &str = "context/resolveContext";

/// The one bridging protocol version this build speaks. Negotiation is
/// exact-match only; anything else means the integration stays off.
pub const SUPPORTED_PROTOCOL_VERSION: &str = "1";

/// Language the resolver is scoped to.
pub const SOURCE_LANGUAGE: &str = "csharp";

/// Returns the path to the data directory for context-bridge.
/// Uses $XDG_DATA_HOME/context-bridge if XDG_DATA_HOME is set,
/// otherwise falls back to ~/.local/share/context-bridge,
/// or ./context-bridge if neither is available.
pub fn data_dir() -> PathBuf {
    data_dir_with_env(std::env::var("XDG_DATA_HOME").ok(), dirs::home_dir())
}

/// Returns the path to the log file.
pub fn log_path() -> PathBuf {
    data_dir().join("context-bridge.log")
}

fn data_dir_with_env(xdg_data_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let data_dir = xdg_data_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".local/share")))
        .unwrap_or_else(|| PathBuf::from("."));

    data_dir.join("context-bridge")
}
