use anyhow::{Context, Result};
use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use kcadmin::config::Config;
use kcadmin::keycloak::{format_api_error, Keycloak};
use kcadmin::resource::{load_realm_file, Realms};
use serde::Serialize;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::fmt::writer::MakeWriterExt;

/// Command-line client for the Keycloak admin API
#[derive(Parser, Debug)]
#[command(name = "kcadmin", version, about, long_about = None)]
struct Args {
    /// Keycloak base URL
    #[arg(short, long, global = true)]
    server: Option<String>,

    /// Realm to authenticate against
    #[arg(short = 'r', long = "realm", global = true)]
    auth_realm: Option<String>,

    /// OpenID client used to obtain tokens
    #[arg(long, global = true)]
    client_id: Option<String>,

    /// Admin user (password read from KCADMIN_PASSWORD)
    #[arg(short, long, global = true)]
    username: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json", global = true)]
    output: OutputFormat,

    /// Log level for debugging
    #[arg(long, value_enum, default_value = "off", global = true)]
    log_level: LogLevel,

    /// Remember the connection flags in the config file
    #[arg(long, global = true)]
    save_config: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Manage realms
    #[command(subcommand)]
    Realms(RealmsCommand),
}

#[derive(Subcommand, Debug)]
enum RealmsCommand {
    /// List all realms
    List,
    /// Show one realm (defaults to default_realm)
    Get { realm: Option<String> },
    /// Show key providers and active keys
    Keys { realm: Option<String> },
    /// Create a realm from an export file
    Import {
        file: PathBuf,
        /// Realm to pick from a file holding several realms
        #[arg(short, long)]
        name: Option<String>,
    },
    /// Replace a realm with the content of a file
    Update { realm: String, file: PathBuf },
    /// Delete a realm
    Delete { realm: String },
    /// Clear server caches (all of them when no flag is given)
    ClearCache(ClearCacheArgs),
    /// List admin events
    AdminEvents {
        realm: String,
        /// Delete the events instead of listing them
        #[arg(long)]
        delete: bool,
    },
}

#[derive(ClapArgs, Debug)]
struct ClearCacheArgs {
    realm: String,
    #[arg(long)]
    keys: bool,
    #[arg(long)]
    realms: bool,
    #[arg(long)]
    users: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Json,
    Yaml,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_tracing_level(self) -> Option<Level> {
        match self {
            LogLevel::Off => None,
            LogLevel::Error => Some(Level::ERROR),
            LogLevel::Warn => Some(Level::WARN),
            LogLevel::Info => Some(Level::INFO),
            LogLevel::Debug => Some(Level::DEBUG),
            LogLevel::Trace => Some(Level::TRACE),
        }
    }
}

fn setup_logging(level: LogLevel) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let tracing_level = level.to_tracing_level()?;

    let log_path = get_log_path();

    if let Some(parent) = log_path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }

    let file = match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Logging disabled, cannot open {}: {}", log_path.display(), e);
            return None;
        },
    };

    let (non_blocking, guard) = tracing_appender::non_blocking(file);

    tracing_subscriber::fmt()
        .with_max_level(tracing_level)
        .with_writer(non_blocking.with_max_level(tracing_level))
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("kcadmin started with log level: {:?}", level);
    tracing::info!("Log file: {:?}", log_path);

    Some(guard)
}

fn get_log_path() -> PathBuf {
    if let Some(config_dir) = dirs::config_dir() {
        return config_dir.join("kcadmin").join("kcadmin.log");
    }
    if let Some(home) = dirs::home_dir() {
        return home.join(".kcadmin").join("kcadmin.log");
    }
    PathBuf::from("kcadmin.log")
}

fn print<T: Serialize>(format: OutputFormat, value: &T) -> Result<()> {
    let text = render(format, value).context("Failed to render output")?;
    println!("{}", text.trim_end());
    Ok(())
}

fn render<T: Serialize>(format: OutputFormat, value: &T) -> Result<String> {
    let text = match format {
        OutputFormat::Json => serde_json::to_string_pretty(value)?,
        OutputFormat::Yaml => serde_yaml::to_string(value)?,
    };
    Ok(text)
}

/// User-facing text for a failed command
fn describe_failure(err: &anyhow::Error) -> String {
    match err.downcast_ref::<kcadmin::Error>() {
        Some(api_error) => format_api_error(api_error),
        None => format!("{:#}", err),
    }
}

async fn run_realms(
    realms: &Realms,
    config: &Config,
    command: RealmsCommand,
    output: OutputFormat,
) -> Result<()> {
    match command {
        RealmsCommand::List => {
            let all = realms.all().await?;
            tracing::info!("Loaded {} realms", all.count());
            print(output, &all)
        },
        RealmsCommand::Get { realm } => {
            let realm = config.effective_realm(realm.as_deref())?;
            print(output, &realms.get(&realm).await?)
        },
        RealmsCommand::Keys { realm } => {
            let realm = config.effective_realm(realm.as_deref())?;
            print(output, &realms.keys(&realm).await?)
        },
        RealmsCommand::Import { file, name } => {
            let created = realms.import(file, name.as_deref()).await?;
            print(output, &created)
        },
        RealmsCommand::Update { realm, file } => {
            let updated = load_realm_file(&file, None).await?;
            print(output, &realms.update(&realm, &updated).await?)
        },
        RealmsCommand::Delete { realm } => Ok(realms.delete(&realm).await?),
        RealmsCommand::ClearCache(args) => {
            let all = !(args.keys || args.realms || args.users);
            if all || args.keys {
                realms.clear_keys_cache(&args.realm).await?;
            }
            if all || args.realms {
                realms.clear_realm_cache(&args.realm).await?;
            }
            if all || args.users {
                realms.clear_user_cache(&args.realm).await?;
            }
            Ok(())
        },
        RealmsCommand::AdminEvents { realm, delete } => {
            if delete {
                Ok(realms.delete_admin_events(&realm).await?)
            } else {
                print(output, &realms.admin_events(&realm).await?)
            }
        },
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let _log_guard = setup_logging(args.log_level);

    let overrides = Config {
        server_url: args.server.clone(),
        auth_realm: args.auth_realm.clone(),
        client_id: args.client_id.clone(),
        username: args.username.clone(),
        default_realm: None,
    };
    let config = Config::load().merge(overrides);

    if args.save_config {
        config.save().context("Failed to save configuration")?;
    }

    let settings = config.connection_settings()?;
    tracing::info!(
        "Using server: {}, auth realm: {}",
        settings.server_url,
        settings.auth_realm
    );

    let keycloak = Keycloak::new(&settings)?;

    let result = match args.command {
        Command::Realms(command) => {
            run_realms(&keycloak.realms(), &config, command, args.output).await
        },
    };

    if let Err(err) = result {
        tracing::error!("Command failed: {:#}", err);
        eprintln!("Error: {}", describe_failure(&err));
        std::process::exit(1);
    }

    Ok(())
}
