use std::{net::{Ipv4Addr, SocketAddr}, path::PathBuf};
use sitewriter::Url;

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
	#[error("{key} is set to '{value}', which isn't a valid {expected}")]
	BadValue {
		key: &'static str,
		value: String,
		expected: &'static str
	},
	#[error("{key} points to {path:?}, which doesn't exist or isn't a directory")]
	NotADirectory {
		key: &'static str,
		path: PathBuf
	},
	#[error("SITE_URL must be an absolute http:// or https:// url (got '{0}')")]
	BadSiteUrl(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
	pub port: u16,
	/// Listen on every interface instead of just loopback (e.g. when not behind a local proxy)
	pub bind_all: bool,
	/// Where trunk put the built frontend
	pub dist_dir: PathBuf,
	/// Photos, the logo, etc. Served under `/assets`
	pub asset_dir: PathBuf,
	/// The page's own address, always with a trailing slash
	pub site_url: Url,
}

impl Config {
	/// Reads everything from the environment, with `.env` filling in whatever isn't set
	pub fn from_env() -> Result<Self, ConfigError> {
		Self::from_lookup(|key| dotenv::var(key).ok())
	}

	pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
		fn parsed<T: std::str::FromStr>(
			lookup: &impl Fn(&str) -> Option<String>,
			key: &'static str,
			default: T,
			expected: &'static str
		) -> Result<T, ConfigError> {
			match lookup(key) {
				None => Ok(default),
				Some(value) => value.trim()
					.parse()
					.map_err(|_| ConfigError::BadValue { key, value, expected })
			}
		}

		let dir = |key: &'static str, default: &str| {
			let path = PathBuf::from(lookup(key).filter(|d| !d.is_empty()).unwrap_or_else(|| default.into()));
			if path.is_dir() {
				Ok(path)
			} else {
				Err(ConfigError::NotADirectory { key, path })
			}
		};

		let port = parsed(&lookup, "BACKEND_PORT", 8080, "port number")?;
		let bind_all = parsed(&lookup, "BIND_ALL", false, "boolean (true/false)")?;
		let dist_dir = dir("DIST_DIR", "frontend/dist")?;
		let asset_dir = dir("ASSET_DIR", "assets")?;

		let raw_url = lookup("SITE_URL").unwrap_or_else(|| "https://velvethandlebear.com".into());
		let site_url = match Url::parse(&format!("{}/", raw_url.trim_end_matches('/'))) {
			Ok(url) if matches!(url.scheme(), "http" | "https") && url.has_host() => url,
			_ => return Err(ConfigError::BadSiteUrl(raw_url)),
		};

		Ok(Self { port, bind_all, dist_dir, asset_dir, site_url })
	}

	#[must_use]
	pub fn addr(&self) -> SocketAddr {
		let ip = if self.bind_all { Ipv4Addr::UNSPECIFIED } else { Ipv4Addr::LOCALHOST };
		SocketAddr::from((ip, self.port))
	}
}
