//! API utilities for frontend-backend communication

/// Port the backend listens on (see `[server] port` in config.toml)
pub const BACKEND_PORT: &str = "3000";

/// Get the base URL for API requests
///
/// When the page is served by the backend itself the API is same-origin and
/// the base is empty; otherwise (e.g. `trunk serve`) the backend is assumed
/// on the same host at [`BACKEND_PORT`].
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    let port = location.port().unwrap_or_default();
    base_for(&protocol, &hostname, &port)
}

/// API base for a page served from `protocol//hostname:port`
fn base_for(protocol: &str, hostname: &str, port: &str) -> String {
    if port == BACKEND_PORT {
        return String::new();
    }
    format!("{}//{}:{}", protocol, hostname, BACKEND_PORT)
}

/// Build a full API URL from a path starting with "/api/"
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_origin_when_served_by_backend() {
        assert_eq!(base_for("http:", "localhost", "3000"), "");
    }

    #[test]
    fn test_dev_server_points_at_backend_port() {
        assert_eq!(base_for("http:", "localhost", "8080"), "http://localhost:3000");
        assert_eq!(base_for("https:", "hostel.example", ""), "https://hostel.example:3000");
    }
}
