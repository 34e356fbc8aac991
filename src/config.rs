//! Runtime configuration: tournament defaults and web server binding.
//!
//! Override the bind address with env: HOST (e.g. 0.0.0.0), PORT (e.g. 8080).

/// League points for a win, unless the tournament sets its own.
pub const DEFAULT_WIN_POINTS: u32 = 3;
/// League points for a draw, unless the tournament sets its own.
pub const DEFAULT_DRAW_POINTS: u32 = 1;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Read HOST and PORT from the environment, falling back to 0.0.0.0:8080.
    pub fn from_env() -> Self {
        Self::from_vars(std::env::var("HOST").ok(), std::env::var("PORT").ok())
    }

    fn from_vars(host: Option<String>, port: Option<String>) -> Self {
        let defaults = Self::default();
        let host = host
            .map(|h| h.trim().to_string())
            .filter(|h| !h.is_empty())
            .unwrap_or(defaults.host);
        let port = match port {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                log::warn!("Ignoring invalid PORT '{}', using {}", raw, DEFAULT_PORT);
                defaults.port
            }),
            None => defaults.port,
        };
        Self { host, port }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_unset() {
        let cfg = ServerConfig::from_vars(None, None);
        assert_eq!(cfg, ServerConfig::default());
    }

    #[test]
    fn reads_host_and_port() {
        let cfg = ServerConfig::from_vars(Some("127.0.0.1".into()), Some("9000".into()));
        assert_eq!(cfg.host, "127.0.0.1");
        assert_eq!(cfg.port, 9000);
    }

    #[test]
    fn bad_port_falls_back() {
        let cfg = ServerConfig::from_vars(Some(" ".into()), Some("eighty".into()));
        assert_eq!(cfg.host, "0.0.0.0");
        assert_eq!(cfg.port, 8080);
    }
}
