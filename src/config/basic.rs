use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr};
use std::path::PathBuf;
use url::Url;

/// Basic (core) configuration managed by Figment.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BasicConfig {
    /// HTTP server listen address (e.g., "0.0.0.0", "127.0.0.1").
    /// TOML: `basic.listen_addr`. Default: `0.0.0.0`.
    #[serde(default = "default_listen_ip")]
    pub listen_addr: IpAddr,

    /// HTTP server listen port.
    /// TOML: `basic.listen_port`. Default: `9000`.
    #[serde(default = "default_listen_port")]
    pub listen_port: u16,

    /// Database URL for SQLite.
    /// TOML: `basic.database_url`. Default: `sqlite://db/bazaar.sqlite3`.
    #[serde(default = "default_database_url")]
    pub database_url: String,

    /// Log level for tracing subscriber initialization (e.g., "error", "warn", "info", "debug", "trace").
    /// TOML: `basic.loglevel`. Default: `info`.
    #[serde(default = "default_loglevel")]
    pub loglevel: String,

    /// Frontend origin allowed by CORS.
    /// TOML: `basic.front_origin`. Default: `http://localhost:3000`.
    #[serde(default = "default_front_origin")]
    pub front_origin: Url,

    /// Directory where uploaded images are stored.
    /// TOML: `basic.image_dir`. Default: `images`.
    #[serde(default = "default_image_dir")]
    pub image_dir: PathBuf,
}

impl Default for BasicConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_ip(),
            listen_port: default_listen_port(),
            database_url: default_database_url(),
            loglevel: default_loglevel(),
            front_origin: default_front_origin(),
            image_dir: default_image_dir(),
        }
    }
}

/// Default IP address for the HTTP server listen address.
fn default_listen_ip() -> IpAddr {
    Ipv4Addr::new(0, 0, 0, 0).into()
}

/// Default port for the HTTP server.
fn default_listen_port() -> u16 {
    9000
}

fn default_database_url() -> String {
    "sqlite://db/bazaar.sqlite3".to_string()
}

fn default_loglevel() -> String {
    "info".to_string()
}

fn default_front_origin() -> Url {
    Url::parse("http://localhost:3000").expect("default front origin must parse")
}

fn default_image_dir() -> PathBuf {
    PathBuf::from("images")
}
