//! `dnscli config ...`

use dnscli_provider::{ProviderType, mask_secret};

use super::Session;
use crate::cli::ConfigCommand;
use crate::config::Profile;

pub fn run(session: &mut Session, cmd: ConfigCommand) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Add {
            name,
            provider,
            default,
        } => {
            let provider_type: ProviderType = provider.parse()?;
            let profile = Profile {
                provider_type,
                credentials: session.overrides.clone(),
            };
            session.config.add_profile(&name, profile, default)?;
            session.config.save(&session.config_path)?;
            println!("已添加配置: {name} ({provider_type})");
        }
        ConfigCommand::List => {
            for line in list_lines(session) {
                println!("{line}");
            }
        }
        ConfigCommand::SetDefault { name } => {
            if session.config.default.as_deref() != Some(name.as_str()) {
                session.config.set_default(&name)?;
                session.config.save(&session.config_path)?;
            }
            println!("默认配置: {name}");
        }
    }
    Ok(())
}

/// `* name (type)  field=mask...`，默认配置以 `*` 标记
fn list_lines(session: &Session) -> Vec<String> {
    let default = session.config.default.as_deref();
    session
        .config
        .configs
        .iter()
        .map(|(name, profile)| {
            let marker = if Some(name.as_str()) == default { '*' } else { ' ' };
            let secrets: Vec<String> = ["secret_id", "api_token", "api_key", "api_email"]
                .into_iter()
                .filter_map(|key| {
                    let value = profile.credentials.get(key)?;
                    // 邮箱不是密钥，原样显示
                    let shown = if key == "api_email" {
                        value.to_string()
                    } else {
                        mask_secret(value)
                    };
                    Some(format!("{key}={shown}"))
                })
                .collect();
            format!(
                "{marker} {name} ({})  {}",
                profile.provider_type,
                secrets.join(" ")
            )
            .trim_end()
            .to_string()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use dnscli_provider::ProviderCredentials;
    use std::path::PathBuf;

    fn session() -> Session {
        let mut config = Config::default();
        config
            .add_profile(
                "ali",
                Profile {
                    provider_type: ProviderType::Aliyun,
                    credentials: ProviderCredentials {
                        secret_id: Some("LTAI5tTestKeyId".into()),
                        secret_key: Some("very-secret-value".into()),
                        ..Default::default()
                    },
                },
                false,
            )
            .unwrap();
        config
            .add_profile(
                "cf",
                Profile {
                    provider_type: ProviderType::Cloudflare,
                    credentials: ProviderCredentials {
                        api_key: Some("0123456789abcdef".into()),
                        api_email: Some("ops@example.com".into()),
                        ..Default::default()
                    },
                },
                false,
            )
            .unwrap();
        Session {
            config_path: PathBuf::from("unused.json"),
            config,
            profile_name: None,
            overrides: ProviderCredentials::default(),
        }
    }

    #[test]
    fn list_marks_default_and_masks_secrets() {
        let lines = list_lines(&session());
        assert_eq!(lines[0], "* ali (aliyun)  secret_id=LTAI****");
        assert_eq!(lines[1], "  cf (cloudflare)  api_key=0123**** api_email=ops@example.com");
        assert!(lines.iter().all(|l| !l.contains("very-secret-value")));
    }

    #[test]
    fn add_and_set_default_persist() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session();
        session.config_path = dir.path().join("config.json");
        session.overrides = ProviderCredentials {
            secret_id: Some("id".into()),
            secret_key: Some("key".into()),
            ..Default::default()
        };

        run(
            &mut session,
            ConfigCommand::Add {
                name: "tx".into(),
                provider: "dnspod".into(),
                default: false,
            },
        )
        .unwrap();
        run(&mut session, ConfigCommand::SetDefault { name: "tx".into() }).unwrap();

        let saved = Config::load(&session.config_path).unwrap();
        assert_eq!(saved.default.as_deref(), Some("tx"));
        assert_eq!(saved.configs["tx"].provider_type, ProviderType::Tencent);
    }

    #[test]
    fn add_rejects_unknown_provider() {
        let mut session = session();
        let err = run(
            &mut session,
            ConfigCommand::Add {
                name: "x".into(),
                provider: "unknown-vendor".into(),
                default: false,
            },
        )
        .unwrap_err();
        assert!(err.to_string().contains("unknown-vendor"), "{err}");
    }
}
