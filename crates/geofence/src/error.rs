use std::{error::Error, fmt, io};

#[derive(Debug)]
pub enum ConfigError {
    Io(io::Error),
    Parse(serde_json::Error),
    InvalidSite { name: String, reason: String },
}

impl ConfigError {
    pub fn invalid_site(name: impl Into<String>, reason: impl fmt::Display) -> Self {
        Self::InvalidSite {
            name: name.into(),
            reason: reason.to_string(),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(why) => write!(f, "could not read site file: {}", why),
            Self::Parse(why) => write!(f, "could not parse site file: {}", why),
            Self::InvalidSite { name, reason } => {
                write!(f, "invalid site '{}': {}", name, reason)
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(why) => Some(why),
            Self::Parse(why) => Some(why),
            Self::InvalidSite { .. } => None,
        }
    }
}

impl From<io::Error> for ConfigError {
    fn from(why: io::Error) -> Self {
        Self::Io(why)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(why: serde_json::Error) -> Self {
        Self::Parse(why)
    }
}

pub type ConfigResult<T> = Result<T, ConfigError>;
