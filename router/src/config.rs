use anyhow::{Context, Result};
use axum::http::HeaderValue;
use clap::Parser;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

const DEFAULT_ORIGINS: [&str; 2] = ["http://localhost:3000", "http://localhost:3001"];

#[derive(Parser, Debug)]
#[clap(version, about = "HTTP API behind the CAPACITOR text editor")]
pub struct Args {
    #[clap(long, env = "CAPACITOR_HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,
    #[clap(short, long, env = "CAPACITOR_PORT", default_value = "8000")]
    pub port: u16,
    /// Origin allowed to call the API from a browser. Repeat for several.
    #[clap(
        long = "allowed-origin",
        env = "CAPACITOR_ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_values = DEFAULT_ORIGINS
    )]
    pub allowed_origins: Vec<String>,
    #[clap(long, env = "CAPACITOR_SERVICE_NAME", default_value = "CAPACITOR")]
    pub service_name: String,
}

/// Settings fixed at start-up and handed to [`crate::routes::app`].
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub allowed_origins: Vec<HeaderValue>,
    pub host: IpAddr,
    pub port: u16,
    pub service_name: String,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            allowed_origins: DEFAULT_ORIGINS
                .into_iter()
                .map(HeaderValue::from_static)
                .collect(),
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 8000,
            service_name: "CAPACITOR".to_string(),
        }
    }
}

impl TryFrom<Args> for ServerConfig {
    type Error = anyhow::Error;

    fn try_from(args: Args) -> Result<Self> {
        let allowed_origins = args
            .allowed_origins
            .iter()
            .map(|origin| {
                HeaderValue::from_str(origin.trim())
                    .with_context(|| format!("invalid allowed origin {origin:?}"))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            allowed_origins,
            host: args.host,
            port: args.port,
            service_name: args.service_name,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["capacitor_router"]).unwrap();
        let config = ServerConfig::try_from(args).unwrap();

        assert_eq!(config.socket_addr(), "0.0.0.0:8000".parse().unwrap());
        assert_eq!(config.service_name, "CAPACITOR");
        assert_eq!(
            config.allowed_origins,
            ServerConfig::default().allowed_origins
        );
    }

    #[test]
    fn overrides() {
        let args = Args::try_parse_from([
            "capacitor_router",
            "--host",
            "127.0.0.1",
            "--port",
            "9000",
            "--allowed-origin",
            "https://editor.example.com",
            "--allowed-origin",
            "http://localhost:5173",
        ])
        .unwrap();
        let config = ServerConfig::try_from(args).unwrap();

        assert_eq!(config.socket_addr(), "127.0.0.1:9000".parse().unwrap());
        assert_eq!(
            config.allowed_origins,
            vec![
                HeaderValue::from_static("https://editor.example.com"),
                HeaderValue::from_static("http://localhost:5173"),
            ]
        );
    }

    #[test]
    fn comma_separated_origins() {
        let args = Args::try_parse_from([
            "capacitor_router",
            "--allowed-origin",
            "http://a.test,http://b.test",
        ])
        .unwrap();
        assert_eq!(args.allowed_origins, vec!["http://a.test", "http://b.test"]);
    }

    #[test]
    fn rejects_invalid_origin() {
        let args = Args::try_parse_from(["capacitor_router", "--allowed-origin", "http://a\nb"])
            .unwrap();
        assert!(ServerConfig::try_from(args).is_err());
    }

    #[test]
    fn rejects_invalid_port() {
        assert!(Args::try_parse_from(["capacitor_router", "--port", "70000"]).is_err());
    }
}
