use std::{
	net::{IpAddr, Ipv4Addr},
	path::PathBuf,
	str::FromStr
};

#[derive(Clone, Debug)]
pub struct Config {
	pub host: IpAddr,
	pub port: u16,
	/// Where `trunk build` put the frontend
	pub dist_dir: PathBuf
}

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
	#[error("{key} was set to '{value}', which isn't a valid {kind}")]
	Invalid {
		key: &'static str,
		value: String,
		kind: &'static str
	},
	#[error("DIST_DIR ({0:?}) doesn't point to a directory; build the frontend (`trunk build` in frontend/) or point DIST_DIR at its output")]
	MissingDist(PathBuf)
}

impl Config {
	/// Reads from the environment, with `.env` filling in anything that isn't set
	pub fn from_env() -> Result<Self, ConfigError> {
		Self::from_lookup(|key| dotenv::var(key).ok())
	}

	pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
		fn parsed<T: FromStr>(
			lookup: &impl Fn(&str) -> Option<String>,
			key: &'static str,
			default: T,
			kind: &'static str
		) -> Result<T, ConfigError> {
			match lookup(key).filter(|v| !v.is_empty()) {
				None => Ok(default),
				Some(value) => value.parse()
					.map_err(|_| ConfigError::Invalid { key, value, kind })
			}
		}

		let host = parsed(&lookup, "BACKEND_HOST", IpAddr::V4(Ipv4Addr::LOCALHOST), "ip address")?;
		let port = parsed(&lookup, "BACKEND_PORT", 8080, "port")?;
		let dist_dir = parsed(&lookup, "DIST_DIR", PathBuf::from("frontend/dist"), "path")?;

		if !dist_dir.is_dir() {
			return Err(ConfigError::MissingDist(dist_dir));
		}

		Ok(Self { host, port, dist_dir })
	}
}

#[cfg(test)]
mod tests {
	use std::collections::HashMap;

	use super::*;

	fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
		let vars = vars.iter()
			.map(|(k, v)| ((*k).to_string(), (*v).to_string()))
			.collect::<HashMap<_, _>>();

		move |key| vars.get(key).cloned()
	}

	fn temp_dir() -> String {
		std::env::temp_dir().to_string_lossy().into_owned()
	}

	#[test]
	fn defaults_fill_in() {
		let dist = temp_dir();
		let config = Config::from_lookup(lookup(&[("DIST_DIR", dist.as_str())])).unwrap();

		assert_eq!(config.port, 8080);
		assert_eq!(config.host, IpAddr::V4(Ipv4Addr::LOCALHOST));
		assert_eq!(config.dist_dir, PathBuf::from(dist));
	}

	#[test]
	fn explicit_values_win() {
		let dist = temp_dir();
		let config = Config::from_lookup(lookup(&[
			("DIST_DIR", dist.as_str()),
			("BACKEND_PORT", "3000"),
			("BACKEND_HOST", "0.0.0.0")
		])).unwrap();

		assert_eq!(config.port, 3000);
		assert_eq!(config.host, IpAddr::V4(Ipv4Addr::UNSPECIFIED));
	}

	#[test]
	fn bad_port_is_rejected() {
		let dist = temp_dir();
		let err = Config::from_lookup(lookup(&[("DIST_DIR", dist.as_str()), ("BACKEND_PORT", "eighty")]))
			.unwrap_err();

		assert!(matches!(err, ConfigError::Invalid { key: "BACKEND_PORT", .. }));
	}

	#[test]
	fn missing_dist_is_rejected() {
		let err = Config::from_lookup(lookup(&[("DIST_DIR", "/definitely/not/a/real/dist")]))
			.unwrap_err();

		assert!(matches!(err, ConfigError::MissingDist(_)));
	}
}
