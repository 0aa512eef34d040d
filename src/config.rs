use std::net::{IpAddr, SocketAddr};

use clap::Args;

/// Server configuration, read from flags with environment variable fallbacks.
///
/// | Flag            | Env           | Default                 |
/// |-----------------|---------------|-------------------------|
/// | `--host`        | `HOST`        | `0.0.0.0`               |
/// | `--port`        | `PORT`        | `5000`                  |
/// | `--env`         | `ENV`         | `development`           |
/// | `--cors-origin` | `CORS_ORIGIN` | `http://localhost:3000` |
#[derive(Debug, Clone, Args)]
pub struct ServerConfig {
    /// Bind address
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// Bind port
    #[arg(long, env = "PORT", default_value_t = 5000)]
    pub port: u16,

    /// Deployment environment name, reported by the health check
    #[arg(long = "env", env = "ENV", default_value = "development")]
    pub environment: String,

    /// The only origin browsers may call the API from
    #[arg(long, env = "CORS_ORIGIN", default_value = "http://localhost:3000")]
    pub cors_origin: String,
}

impl ServerConfig {
    #[must_use]
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    #[must_use]
    pub fn debug(&self) -> bool {
        self.environment == "development"
    }

    /// Log filter used when `RUST_LOG` is not set.
    #[must_use]
    pub fn default_log_filter(&self) -> &'static str {
        if self.debug() {
            "worktime=debug,tower_http=debug"
        } else {
            "worktime=info,tower_http=info"
        }
    }
}

#[cfg(test)]
mod test {
    use clap::Parser;

    use crate::config::ServerConfig;

    #[derive(Parser)]
    struct Wrapper {
        #[command(flatten)]
        config: ServerConfig,
    }

    #[test]
    fn test_flags() {
        let Wrapper { config } = Wrapper::parse_from([
            "worktime",
            "--host",
            "127.0.0.1",
            "--port",
            "8080",
            "--env",
            "production",
            "--cors-origin",
            "https://example.com",
        ]);
        assert_eq!(config.addr().to_string(), "127.0.0.1:8080");
        assert_eq!(config.environment, "production");
        assert_eq!(config.cors_origin, "https://example.com");
        assert!(!config.debug());
        assert_eq!(config.default_log_filter(), "worktime=info,tower_http=info");
    }

    #[test]
    fn test_invalid_port() {
        assert!(Wrapper::try_parse_from(["worktime", "--port", "70000"]).is_err());
        assert!(Wrapper::try_parse_from(["worktime", "--host", "localhost:80"]).is_err());
    }
}
