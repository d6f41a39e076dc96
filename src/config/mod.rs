use anyhow::{anyhow, Result};
use std::{env, fs, io::ErrorKind, path::Path};

use useradmin_core::{entities::Role, policy::AdminPolicy};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "useradmin.toml";

const ENV_NAME_DB_URL: &str = "DATABASE_URL";
const ENV_NAME_JWT_SECRET: &str = "JWT_SECRET";

pub struct Config {
    pub db: Db,
    pub webserver: WebServer,
    pub auth: Auth,
    pub policy: AdminPolicy,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::try_from(raw_config)?;
        if let Ok(db_url) = env::var(ENV_NAME_DB_URL) {
            cfg.db.conn_sqlite = db_url;
        }
        if let Ok(secret) = env::var(ENV_NAME_JWT_SECRET) {
            cfg.auth.jwt_secret = Some(secret);
        }
        Ok(cfg)
    }
}

pub struct Db {
    /// SQLite connection
    pub conn_sqlite: String,
    pub conn_pool_size: u8,
}

pub struct WebServer {
    pub enable_cors: bool,
}

pub struct Auth {
    jwt_secret: Option<String>,
    pub token_valid_for: time::Duration,
}

impl Auth {
    pub fn jwt_secret(&self) -> Result<&str> {
        self.jwt_secret
            .as_deref()
            .filter(|secret| !secret.is_empty())
            .ok_or_else(|| {
                anyhow!("No JWT secret configured: set 'auth.jwt-secret' or {ENV_NAME_JWT_SECRET}")
            })
    }
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            db,
            webserver,
            auth,
            policy,
        } = from;

        let raw::Db {
            connection_sqlite,
            connection_pool_size,
        } = db.unwrap_or_default();

        if connection_pool_size == 0 {
            return Err(anyhow!("The connection pool must not be empty"));
        }
        let db = Db {
            conn_sqlite: connection_sqlite,
            conn_pool_size: connection_pool_size,
        };

        let raw::WebServer { cors } = webserver.unwrap_or_default();
        let webserver = WebServer { enable_cors: cors };

        let raw::Auth {
            jwt_secret,
            token_valid_for,
        } = auth.unwrap_or_default();
        let auth = Auth {
            jwt_secret,
            token_valid_for: token_valid_for.try_into()?,
        };

        let raw::Policy {
            privileged_role,
            user_subcollections,
            authorize_disable,
        } = policy.unwrap_or_default();

        if privileged_role.trim().is_empty() {
            return Err(anyhow!("No privileged role defined"));
        }
        if user_subcollections.iter().any(|name| name.trim().is_empty()) {
            return Err(anyhow!("Empty sub-collection name"));
        }
        if user_subcollections.is_empty() {
            log::warn!("No user sub-collections configured: only accounts and profiles are deleted");
        }
        let policy = AdminPolicy {
            privileged_role: Role::new(privileged_role),
            user_subcollections,
            authorize_disable,
        };

        Ok(Self {
            db,
            webserver,
            auth,
            policy,
        })
    }
}
