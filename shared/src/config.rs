use std::{collections::BTreeMap, env, time::Duration};

use anyhow::{bail, Context, Result};

const DEFAULT_EMAIL_API_URL: &str = "https://api.emailjs.com";
const DEFAULT_PROVIDER_ALIASES: &str =
    "claudia@foreing.tech=claudia,valentina@foreing.tech=valentina,valeria@foreing.tech=valeria";

pub struct AppConfig {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub email: EmailConfig,
    pub provider_aliases: BTreeMap<String, String>,
}

impl AppConfig {
    pub fn new() -> Result<Self> {
        let database = DatabaseConfig {
            host: env::var("DATABASE_HOST").context("DATABASE_HOST must be set")?,
            port: env::var("DATABASE_PORT")
                .context("DATABASE_PORT must be set")?
                .parse()
                .context("Failed to parse DATABASE_PORT")?,
            username: env::var("DATABASE_USERNAME").context("DATABASE_USERNAME must be set")?,
            password: env::var("DATABASE_PASSWORD").context("DATABASE_PASSWORD must be set")?,
            database: env::var("DATABASE_NAME").context("DATABASE_NAME must be set")?,
        };
        let server = ServerConfig {
            port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "8080".into())
                .parse()
                .context("Failed to parse SERVER_PORT")?,
        };
        let email = EmailConfig {
            api_url: env::var("EMAIL_API_URL").unwrap_or_else(|_| DEFAULT_EMAIL_API_URL.into()),
            service_id: env::var("EMAIL_SERVICE_ID").ok(),
            public_key: env::var("EMAIL_PUBLIC_KEY").ok(),
            provider_template: env::var("EMAIL_TEMPLATE_PROVIDER").ok(),
            requester_template: env::var("EMAIL_TEMPLATE_REQUESTER").ok(),
            timeout: Duration::from_secs(
                env::var("EMAIL_TIMEOUT_SECS")
                    .unwrap_or_else(|_| "10".into())
                    .parse()
                    .context("Failed to parse EMAIL_TIMEOUT_SECS")?,
            ),
        };
        let provider_aliases = parse_provider_aliases(
            &env::var("PROVIDER_ALIASES").unwrap_or_else(|_| DEFAULT_PROVIDER_ALIASES.into()),
        )?;

        Ok(Self {
            database,
            server,
            email,
            provider_aliases,
        })
    }
}

pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub database: String,
}

pub struct ServerConfig {
    pub port: u16,
}

#[derive(Clone, Debug)]
pub struct EmailConfig {
    pub api_url: String,
    pub service_id: Option<String>,
    pub public_key: Option<String>,
    pub provider_template: Option<String>,
    pub requester_template: Option<String>,
    pub timeout: Duration,
}

/// Parses `email=id` pairs separated by commas. Emails are lower-cased.
pub fn parse_provider_aliases(raw: &str) -> Result<BTreeMap<String, String>> {
    let mut aliases = BTreeMap::new();
    for pair in raw.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let Some((email, id)) = pair.split_once('=') else {
            bail!("Invalid PROVIDER_ALIASES entry: {pair}");
        };
        let (email, id) = (email.trim(), id.trim());
        if email.is_empty() || id.is_empty() {
            bail!("Invalid PROVIDER_ALIASES entry: {pair}");
        }
        aliases.insert(email.to_lowercase(), id.to_string());
    }
    Ok(aliases)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_aliases_cover_the_founders() {
        let aliases = parse_provider_aliases(DEFAULT_PROVIDER_ALIASES).unwrap();
        assert_eq!(aliases.len(), 3);
        assert_eq!(aliases["claudia@foreing.tech"], "claudia");
        assert_eq!(aliases["valeria@foreing.tech"], "valeria");
    }

    #[test]
    fn alias_emails_are_lowercased_and_trimmed() {
        let aliases = parse_provider_aliases(" Ana@Studio.dev = ana , ").unwrap();
        assert_eq!(aliases.get("ana@studio.dev").map(String::as_str), Some("ana"));
    }

    #[test]
    fn rejects_malformed_alias_entries() {
        assert!(parse_provider_aliases("no-separator").is_err());
        assert!(parse_provider_aliases("=id").is_err());
        assert!(parse_provider_aliases("mail@x.dev=").is_err());
    }

    #[test]
    fn empty_alias_table_is_allowed() {
        assert!(parse_provider_aliases("").unwrap().is_empty());
    }
}
