//! Command handlers

mod config;
mod domain;
mod record;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use dnscli_provider::{DnsProvider, ProviderCredentials, ProviderType, create_provider};

use crate::cli::{Cli, Command};
use crate::config::{Config, ConfigError, Profile, default_path, require_complete};

/// 命令执行所需的上下文：配置在启动时加载一次
pub struct Session {
    pub config_path: PathBuf,
    pub config: Config,
    pub profile_name: Option<String>,
    pub overrides: ProviderCredentials,
}

impl Session {
    pub fn load(cli: &Cli) -> anyhow::Result<Self> {
        let config_path = cli.config.clone().unwrap_or_else(default_path);
        let config = Config::load(&config_path)?;
        tracing::debug!(
            "loaded {} profile(s) from {}",
            config.configs.len(),
            config_path.display()
        );

        Ok(Self {
            config_path,
            config,
            profile_name: cli.profile.clone(),
            overrides: cli.credentials.to_credentials(),
        })
    }

    /// 解析当前 profile，用命令行凭证逐项覆盖后构造 provider
    pub fn connect(&self) -> anyhow::Result<(ProviderType, Arc<dyn DnsProvider>)> {
        let (name, profile) = self.config.resolve(self.profile_name.as_deref())?;
        let (provider_type, credentials) = assemble_credentials(profile, &self.overrides)?;
        tracing::info!("using profile {name} ({provider_type})");

        let provider = create_provider(provider_type, &credentials)
            .with_context(|| format!("cannot initialise profile '{name}'"))?;
        Ok((provider_type, provider))
    }
}

/// Stored credentials with command-line overrides applied, checked for completeness.
fn assemble_credentials(
    profile: &Profile,
    overrides: &ProviderCredentials,
) -> Result<(ProviderType, ProviderCredentials), ConfigError> {
    let credentials = profile.credentials.clone().overlay(overrides);
    require_complete(profile.provider_type, &credentials)?;
    Ok((profile.provider_type, credentials))
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut session = Session::load(&cli)?;

    match cli.command {
        Command::Config(cmd) => config::run(&mut session, cmd),
        Command::Record(cmd) => record::run(&session, cmd).await,
        Command::Domain(cmd) => domain::run(&session, cmd).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_replace_stored_fields() {
        let profile = Profile {
            provider_type: ProviderType::Aliyun,
            credentials: ProviderCredentials {
                secret_id: Some("stored-id".into()),
                secret_key: Some("stored-key".into()),
                ..Default::default()
            },
        };
        let overrides = ProviderCredentials {
            secret_key: Some("flag-key".into()),
            ..Default::default()
        };

        let (provider_type, credentials) = assemble_credentials(&profile, &overrides).unwrap();
        assert_eq!(provider_type, ProviderType::Aliyun);
        assert_eq!(credentials.secret_id.as_deref(), Some("stored-id"));
        assert_eq!(credentials.secret_key.as_deref(), Some("flag-key"));
    }

    #[test]
    fn incomplete_credentials_name_the_flags() {
        let profile = Profile {
            provider_type: ProviderType::Cloudflare,
            credentials: ProviderCredentials::default(),
        };
        let err = assemble_credentials(&profile, &ProviderCredentials::default()).unwrap_err();
        assert!(err.to_string().contains("--api-token"), "{err}");
    }
}
