use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use useradmin_core::entities::Uid;
use useradmin_db_sqlite::{run_embedded_database_migrations, Connections};
use useradmin_webserver::{jwt::JwtState, Cfg};

use crate::config::Config;

#[derive(Parser)]
#[command(version, about = "Administrate user accounts and their data", long_about = None)]
struct Args {
    /// Configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// URL to the database
    #[arg(long, value_name = "DATABASE_URL")]
    db_url: Option<String>,

    /// Allow requests from any origin
    #[arg(long)]
    enable_cors: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the web server (default)
    Serve,
    /// Print a bearer token that identifies the given caller
    IssueToken {
        /// Account id of the caller
        uid: String,
    },
}

pub async fn run() -> Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    let mut cfg = Config::try_load_from_file_or_default(args.config.as_deref())?;
    if let Some(db_url) = args.db_url {
        cfg.db.conn_sqlite = db_url;
    }
    if args.enable_cors {
        cfg.webserver.enable_cors = true;
    }

    match args.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(cfg).await,
        Command::IssueToken { uid } => issue_token(&cfg, &uid),
    }
}

async fn serve(cfg: Config) -> Result<()> {
    let Config {
        db,
        webserver,
        auth,
        policy,
    } = cfg;
    let jwt_secret = auth.jwt_secret()?.to_owned();

    log::info!("Connecting to SQLite database {}", db.conn_sqlite);
    let connections = Connections::init(&db.conn_sqlite, db.conn_pool_size.into())?;
    run_embedded_database_migrations(connections.exclusive()?)?;

    let web_cfg = Cfg {
        policy,
        jwt_secret,
        token_valid_for: auth.token_valid_for,
    };
    useradmin_webserver::run(connections, webserver.enable_cors, web_cfg).await;
    Ok(())
}

fn issue_token(cfg: &Config, uid: &str) -> Result<()> {
    let uid: Uid = uid.parse()?;
    let jwt_state = JwtState::new(cfg.auth.jwt_secret()?, cfg.auth.token_valid_for);
    let token = jwt_state.generate_token(&uid)?;
    println!("{token}");
    Ok(())
}
