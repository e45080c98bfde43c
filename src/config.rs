use crate::source::DEFAULT_INVALIDATE_AFTER;
use anyhow::Result;
use log::LevelFilter;
use serde::Deserialize;
use std::{
    fs::File,
    net::{Ipv4Addr, SocketAddr},
    path::Path,
    time::Duration,
};

#[derive(Deserialize, Debug)]
#[serde(default)]
pub(crate) struct Config {
    pub(crate) log_level: LevelFilter,
    pub(crate) server: ServerOptions,
    pub(crate) fetch: FetchOptions,
    pub(crate) cache: CacheOptions,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: LevelFilter::Info,
            server: ServerOptions::default(),
            fetch: FetchOptions::default(),
            cache: CacheOptions::default(),
        }
    }
}

impl Config {
    pub(crate) fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        Ok(serde_yaml::from_reader(file)?)
    }
}

#[derive(Deserialize, Debug)]
#[serde(default)]
pub(crate) struct ServerOptions {
    pub(crate) listen: SocketAddr,
}

impl Default for ServerOptions {
    fn default() -> Self {
        Self {
            listen: SocketAddr::from((Ipv4Addr::UNSPECIFIED, 8080)),
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub(crate) struct FetchOptions {
    #[serde(with = "humantime_serde")]
    pub(crate) timeout: Duration,
    pub(crate) user_agent: String,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(5),
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

#[derive(Deserialize, Debug)]
#[serde(default)]
pub(crate) struct CacheOptions {
    /// Lookup count at which a cached page is dropped and fetched again.
    pub(crate) invalidate_after: u32,
}

impl Default for CacheOptions {
    fn default() -> Self {
        Self {
            invalidate_after: DEFAULT_INVALIDATE_AFTER,
        }
    }
}
