mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use google_objects::auth::find_credentials;
use google_objects::{Config, Credentials, GoogleClient};

#[derive(Parser, Debug)]
#[command(name = "google-objects", version, about = "Inspect and edit Google Sheets and Slides")]
struct Args {
    /// Credentials file (authorized_user JSON or {"access_token": ...})
    #[arg(long, global = true)]
    credentials: Option<PathBuf>,

    /// Bearer token to use instead of a credentials file
    #[arg(long, global = true, env = "GOOGLE_OBJECTS_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Config file (defaults to ~/.google-objects/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Summarize a spreadsheet's sheets and named ranges
    Spreadsheet { id: String },
    /// Print the rows of a range as JSON lines
    Values { id: String, range: String },
    /// Append one row after the table in a range
    Append {
        id: String,
        range: String,
        #[arg(required = true)]
        cells: Vec<String>,
    },
    /// Summarize a presentation's pages and elements
    Presentation { id: String },
    /// List the distinct tags found in a presentation's slides
    Tags {
        id: String,
        #[arg(long, default_value = r"\{\{.*?\}\}")]
        pattern: String,
    },
    /// Replace text throughout a presentation
    Replace {
        id: String,
        find: String,
        replace: String,
        #[arg(long)]
        match_case: bool,
    },
}

fn load_config(args: &Args) -> anyhow::Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(path) = &args.credentials {
        config.credentials = Some(path.clone());
    }
    Ok(config)
}

async fn connect(args: &Args, config: &Config) -> anyhow::Result<GoogleClient> {
    let credentials = match (&args.token, &args.credentials) {
        (Some(token), _) => Credentials::from_token(token.as_str()),
        (None, Some(path)) => Credentials::from_file(path)?,
        (None, None) => find_credentials(config)?,
    };
    Ok(GoogleClient::from_credentials(&credentials, config).await?)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = load_config(&args)?;
    let client = connect(&args, &config).await?;

    match args.command {
        Command::Spreadsheet { id } => commands::spreadsheet(client, &config, &id).await,
        Command::Values { id, range } => commands::values(client, &config, &id, &range).await,
        Command::Append { id, range, cells } => {
            commands::append(client, &config, &id, &range, cells).await
        }
        Command::Presentation { id } => commands::presentation(client, &config, &id).await,
        Command::Tags { id, pattern } => commands::tags(client, &config, &id, &pattern).await,
        Command::Replace {
            id,
            find,
            replace,
            match_case,
        } => commands::replace(client, &config, &id, &find, &replace, match_case).await,
    }
}
