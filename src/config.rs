use tracing::{debug, warn};

pub const DEFAULT_SERVER_URL: &str = "ws://localhost:3000";
/// localStorage key remembering a server override.
pub const SERVER_URL_KEY: &str = "grid_duel_server_url";
/// Query parameter that overrides the server, e.g. `?server=ws://host:3000`.
pub const SERVER_QUERY_PARAM: &str = "server";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub server_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
        }
    }
}

impl ClientConfig {
    /// Query parameter first, then localStorage, then the default endpoint.
    pub fn load() -> Self {
        let from_query = query_override();
        if let Some(url) = &from_query {
            persist_override(url);
        }
        let config = Self::resolve(from_query, stored_override());
        debug!(server_url = %config.server_url, "client config resolved");
        config
    }

    pub fn resolve(query: Option<String>, stored: Option<String>) -> Self {
        let server_url = [query, stored]
            .into_iter()
            .flatten()
            .map(|s| s.trim().to_string())
            .find(|s| is_socket_url(s))
            .unwrap_or_else(|| DEFAULT_SERVER_URL.to_string());
        Self { server_url }
    }
}

fn is_socket_url(s: &str) -> bool {
    s.starts_with("ws://") || s.starts_with("wss://")
}

fn query_override() -> Option<String> {
    let search = web_sys::window()?.location().search().ok()?;
    let params = web_sys::UrlSearchParams::new_with_str(&search).ok()?;
    params.get(SERVER_QUERY_PARAM)
}

fn stored_override() -> Option<String> {
    let store = web_sys::window()?.local_storage().ok().flatten()?;
    store.get_item(SERVER_URL_KEY).ok().flatten()
}

fn persist_override(url: &str) {
    if !is_socket_url(url.trim()) {
        warn!(url, "ignoring server override that is not a ws:// or wss:// url");
        return;
    }
    if let Some(win) = web_sys::window() {
        if let Ok(Some(store)) = win.local_storage() {
            let _ = store.set_item(SERVER_URL_KEY, url.trim());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoint() {
        assert_eq!(ClientConfig::default().server_url, "ws://localhost:3000");
        assert_eq!(ClientConfig::resolve(None, None), ClientConfig::default());
    }

    #[test]
    fn test_query_beats_storage() {
        let config = ClientConfig::resolve(
            Some("ws://game.example:4000".into()),
            Some("ws://stored:3000".into()),
        );
        assert_eq!(config.server_url, "ws://game.example:4000");
    }

    #[test]
    fn test_storage_used_without_query() {
        let config = ClientConfig::resolve(None, Some(" wss://stored:3000 ".into()));
        assert_eq!(config.server_url, "wss://stored:3000");
    }

    #[test]
    fn test_non_socket_urls_fall_through() {
        let config = ClientConfig::resolve(Some("http://nope".into()), Some("".into()));
        assert_eq!(config.server_url, DEFAULT_SERVER_URL);
    }
}
