//! `dnscli domain ...`

use super::Session;
use crate::cli::DomainCommand;
use crate::table;

pub async fn run(session: &Session, cmd: DomainCommand) -> anyhow::Result<()> {
    match cmd {
        DomainCommand::List => {
            let (_, provider) = session.connect()?;
            let domains = provider.describe_domains().await?;
            let rows: Vec<Vec<String>> = domains
                .into_iter()
                .map(|d| {
                    vec![
                        d.name,
                        d.status.to_string(),
                        d.created.unwrap_or_default(),
                    ]
                })
                .collect();
            println!("{}", table::render(&["DOMAIN", "STATUS", "CREATED"], &rows));
        }
    }
    Ok(())
}
