//! Profile configuration
//!
//! 使用 JSON 文件存储多个 DNS 服务商配置（profile），启动时加载一次，
//! 显式传递给命令处理函数。

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use dnscli_provider::{ProviderCredentials, ProviderType};
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$";

/// Configuration layer error type
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read or write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("profile name must not be empty")]
    EmptyName,

    #[error("profile already exists: {0}")]
    DuplicateName(String),

    /// 配置名不存在
    #[error("no such profile: {0} (see `dnscli config list`)")]
    UnknownProfile(String),

    #[error("no profile selected; pass -N <name> or run `dnscli config add`")]
    NoDefault,

    #[error("invalid e-mail address: {0}")]
    InvalidEmail(String),

    /// 非交互模式下缺少的凭证字段
    #[error("missing credentials for {provider}: {fields}")]
    MissingCredentials {
        provider: ProviderType,
        fields: String,
    },
}

/// One named provider account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(rename = "type")]
    pub provider_type: ProviderType,
    #[serde(default)]
    pub credentials: ProviderCredentials,
}

/// Config file contents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    #[serde(default)]
    pub configs: BTreeMap<String, Profile>,
}

/// `<config_dir>/dnscli/config.json`
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("dnscli")
        .join("config.json")
}

/// 邮箱格式校验
pub fn validate_email(email: &str) -> Result<(), ConfigError> {
    let valid = Regex::new(EMAIL_PATTERN).is_ok_and(|re| re.is_match(email));
    if valid {
        Ok(())
    } else {
        Err(ConfigError::InvalidEmail(email.to_string()))
    }
}

/// Fails with the command-line flags still needed for `provider_type`.
pub fn require_complete(
    provider_type: ProviderType,
    credentials: &ProviderCredentials,
) -> Result<(), ConfigError> {
    let missing = credentials.missing_fields(provider_type);
    if missing.is_empty() {
        return Ok(());
    }
    Err(ConfigError::MissingCredentials {
        provider: provider_type,
        fields: missing
            .iter()
            .map(|f| format!("--{} ({})", f.key.replace('_', "-"), f.label))
            .collect::<Vec<_>>()
            .join(", "),
    })
}

impl Config {
    /// Reads `path`. A missing file is an empty config.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Writes the config as pretty JSON, creating the parent directory.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let io_err = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(io_err)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content).map_err(io_err)?;

        // 文件中包含密钥，仅所有者可读写
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(path, fs::Permissions::from_mode(0o600)).map_err(io_err)?;
        }

        tracing::debug!("saved {} profile(s) to {}", self.configs.len(), path.display());
        Ok(())
    }

    /// Profile names in sorted order.
    pub fn profile_names(&self) -> Vec<&str> {
        self.configs.keys().map(String::as_str).collect()
    }

    /// The profile named by `name`, or the default one.
    pub fn resolve<'a>(&'a self, name: Option<&'a str>) -> Result<(&'a str, &'a Profile), ConfigError> {
        let name = name
            .filter(|n| !n.trim().is_empty())
            .or(self.default.as_deref())
            .ok_or(ConfigError::NoDefault)?;

        self.configs
            .get(name)
            .map(|profile| (name, profile))
            .ok_or_else(|| ConfigError::UnknownProfile(name.to_string()))
    }

    pub fn set_default(&mut self, name: &str) -> Result<(), ConfigError> {
        if !self.configs.contains_key(name) {
            return Err(ConfigError::UnknownProfile(name.to_string()));
        }
        self.default = Some(name.to_string());
        Ok(())
    }

    /// Adds a new profile after validating it.
    ///
    /// The first profile always becomes the default.
    pub fn add_profile(
        &mut self,
        name: &str,
        profile: Profile,
        make_default: bool,
    ) -> Result<(), ConfigError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ConfigError::EmptyName);
        }
        if self.configs.contains_key(name) {
            return Err(ConfigError::DuplicateName(name.to_string()));
        }
        if let Some(email) = profile.credentials.get("api_email") {
            validate_email(email)?;
        }

        require_complete(profile.provider_type, &profile.credentials)?;

        self.configs.insert(name.to_string(), profile);
        if make_default || self.default.is_none() {
            self.default = Some(name.to_string());
        }
        Ok(())
    }
}
