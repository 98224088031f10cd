use std::fmt;

#[derive(Debug)]
pub enum ConfigError {
	Io(std::io::Error),
	Yaml(serde_yaml::Error),
	Quake(quake::Error),
	/// Grid spacing, tick rate or scene size that cannot drive a simulation.
	Invalid(String),
}

impl fmt::Display for ConfigError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ConfigError::Io(e) => write!(f, "failed to read config: {}", e),
			ConfigError::Yaml(e) => write!(f, "failed to parse config: {}", e),
			ConfigError::Quake(e) => write!(f, "invalid world: {}", e),
			ConfigError::Invalid(msg) => write!(f, "invalid config: {}", msg),
		}
	}
}

impl std::error::Error for ConfigError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			ConfigError::Io(e) => Some(e),
			ConfigError::Yaml(e) => Some(e),
			ConfigError::Quake(e) => Some(e),
			ConfigError::Invalid(_) => None,
		}
	}
}

impl From<std::io::Error> for ConfigError {
	fn from(e: std::io::Error) -> Self {
		ConfigError::Io(e)
	}
}

impl From<serde_yaml::Error> for ConfigError {
	fn from(e: serde_yaml::Error) -> Self {
		ConfigError::Yaml(e)
	}
}

impl From<quake::Error> for ConfigError {
	fn from(e: quake::Error) -> Self {
		ConfigError::Quake(e)
	}
}
