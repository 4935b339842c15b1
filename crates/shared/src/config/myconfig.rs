use anyhow::{Result, anyhow};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub is_dev: bool,
    pub enable_file_log: bool,
    pub log_dir: Option<String>,
    pub strict_registry: bool,
}

impl Config {
    pub fn init() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let is_dev = parse_flag("DEV_MODE", lookup("DEV_MODE"))?;
        let enable_file_log = parse_flag("ENABLE_FILE_LOG", lookup("ENABLE_FILE_LOG"))?;
        let strict_registry = parse_flag("STRICT_REGISTRY", lookup("STRICT_REGISTRY"))?;
        let log_dir = lookup("LOG_DIR").filter(|dir| !dir.trim().is_empty());

        Ok(Self {
            is_dev,
            enable_file_log,
            log_dir,
            strict_registry,
        })
    }
}

fn parse_flag(name: &str, value: Option<String>) -> Result<bool> {
    match value.as_deref() {
        None | Some("") => Ok(false),
        Some("true") | Some("1") => Ok(true),
        Some("false") | Some("0") => Ok(false),
        Some(other) => Err(anyhow!("{name} must be 'true' or 'false', got '{other}'")),
    }
}
