use anyhow::{Context, Result, ensure};
use clap::Parser;
use std::env;

/// Centralized application configuration.
/// Combines environment variables and CLI arguments.
#[derive(Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub storage_dir: String,
    pub database_url: String,
    /// Scheme and authority public object URLs are issued under.
    pub public_url: String,
    pub bucket: String,
    pub admin_username: Option<String>,
    pub admin_password: Option<String>,
    pub session_ttl_hours: i64,
}

// Hand-written so the admin password never reaches the logs.
impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("storage_dir", &self.storage_dir)
            .field("database_url", &self.database_url)
            .field("public_url", &self.public_url)
            .field("bucket", &self.bucket)
            .field("admin_username", &self.admin_username)
            .field("admin_password", &self.admin_password.as_ref().map(|_| "***"))
            .field("session_ttl_hours", &self.session_ttl_hours)
            .finish()
    }
}

/// Command-line + environment configuration.
#[derive(Parser, Debug, Default)]
#[command(author, version, about = "Photography studio portfolio site")]
pub struct Args {
    /// Host to bind to (overrides PORTFOLIO_HOST)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind to (overrides PORTFOLIO_PORT)
    #[arg(long)]
    pub port: Option<u16>,

    /// Directory where uploaded objects are stored (overrides PORTFOLIO_STORAGE_DIR)
    #[arg(long)]
    pub storage_dir: Option<String>,

    /// Database URL (overrides PORTFOLIO_DATABASE_URL)
    #[arg(long)]
    pub database_url: Option<String>,

    /// Base URL public image links are issued under (overrides PORTFOLIO_PUBLIC_URL)
    #[arg(long)]
    pub public_url: Option<String>,

    /// Storage bucket name (overrides PORTFOLIO_BUCKET)
    #[arg(long)]
    pub bucket: Option<String>,

    /// Admin console username (overrides PORTFOLIO_ADMIN_USERNAME)
    #[arg(long)]
    pub admin_username: Option<String>,

    /// Admin console password (overrides PORTFOLIO_ADMIN_PASSWORD)
    #[arg(long)]
    pub admin_password: Option<String>,

    /// Admin session lifetime in hours (overrides PORTFOLIO_SESSION_TTL_HOURS)
    #[arg(long)]
    pub session_ttl_hours: Option<i64>,

    /// Run migrations and exit
    #[arg(long)]
    pub migrate: bool,
}

/// Read a numeric environment variable, using `default` when it is unset.
fn env_number<T>(name: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(value) => value
            .parse::<T>()
            .with_context(|| format!("parsing {} value `{}`", name, value)),
        Err(env::VarError::NotPresent) => Ok(default),
        Err(err) => Err(err).with_context(|| format!("reading {}", name)),
    }
}

/// Longest accepted admin session, one year.
pub const MAX_SESSION_TTL_HOURS: i64 = 24 * 365;

fn env_optional(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.is_empty())
}

impl AppConfig {
    /// Parse environment variables + CLI args into AppConfig and migrate flag.
    pub fn from_env_and_args() -> Result<(Self, bool)> {
        let args = Args::parse();
        let migrate = args.migrate;
        Ok((Self::merge(args)?, migrate))
    }

    /// CLI values win over environment values, which win over defaults.
    pub fn merge(args: Args) -> Result<Self> {
        let env_host = env::var("PORTFOLIO_HOST").unwrap_or_else(|_| "0.0.0.0".into());
        let env_port = env_number("PORTFOLIO_PORT", 3000u16)?;
        let env_storage =
            env::var("PORTFOLIO_STORAGE_DIR").unwrap_or_else(|_| "./data/objects".into());
        let env_db = env::var("PORTFOLIO_DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://./data/meta/portfolio.db".into());
        let env_bucket = env::var("PORTFOLIO_BUCKET").unwrap_or_else(|_| "portfolio".into());
        let env_ttl = env_number("PORTFOLIO_SESSION_TTL_HOURS", 12i64)?;

        let session_ttl_hours = args.session_ttl_hours.unwrap_or(env_ttl);
        ensure!(
            (1..=MAX_SESSION_TTL_HOURS).contains(&session_ttl_hours),
            "session TTL must be between 1 and {} hours, got {}",
            MAX_SESSION_TTL_HOURS,
            session_ttl_hours
        );

        let host = args.host.unwrap_or(env_host);
        let port = args.port.unwrap_or(env_port);
        let public_url = args
            .public_url
            .or_else(|| env_optional("PORTFOLIO_PUBLIC_URL"))
            .unwrap_or_else(|| {
                let shown_host = if matches!(host.as_str(), "0.0.0.0" | "::") {
                    "localhost"
                } else {
                    host.as_str()
                };
                format!("http://{}:{}", shown_host, port)
            });

        Ok(Self {
            host,
            port,
            storage_dir: args.storage_dir.unwrap_or(env_storage),
            database_url: args.database_url.unwrap_or(env_db),
            public_url,
            bucket: args.bucket.unwrap_or(env_bucket),
            admin_username: args
                .admin_username
                .or_else(|| env_optional("PORTFOLIO_ADMIN_USERNAME")),
            admin_password: args
                .admin_password
                .or_else(|| env_optional("PORTFOLIO_ADMIN_PASSWORD")),
            session_ttl_hours,
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_values_take_precedence() {
        let cfg = AppConfig::merge(Args {
            host: Some("127.0.0.1".into()),
            port: Some(8080),
            bucket: Some("studio".into()),
            admin_username: Some("owner".into()),
            admin_password: Some("pw".into()),
            ..Args::default()
        })
        .unwrap();

        assert_eq!(cfg.addr(), "127.0.0.1:8080");
        assert_eq!(cfg.bucket, "studio");
        assert_eq!(cfg.public_url, "http://127.0.0.1:8080");
        assert_eq!(cfg.admin_username.as_deref(), Some("owner"));
    }

    #[test]
    fn session_ttl_must_be_positive_and_bounded() {
        for hours in [0, -3, MAX_SESSION_TTL_HOURS + 1, 2_500_000_000] {
            let err = AppConfig::merge(Args {
                session_ttl_hours: Some(hours),
                ..Args::default()
            })
            .unwrap_err();
            assert!(err.to_string().contains("session TTL"), "{err}");
        }

        let cfg = AppConfig::merge(Args {
            session_ttl_hours: Some(MAX_SESSION_TTL_HOURS),
            ..Args::default()
        })
        .unwrap();
        assert_eq!(cfg.session_ttl_hours, MAX_SESSION_TTL_HOURS);
    }

    #[test]
    fn debug_output_hides_the_password() {
        let cfg = AppConfig::merge(Args {
            admin_password: Some("hunter2".into()),
            ..Args::default()
        })
        .unwrap();
        let shown = format!("{:?}", cfg);
        assert!(!shown.contains("hunter2"));
        assert!(shown.contains("***"));
    }
}
