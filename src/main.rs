use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};
use uuid::Uuid;

use docchat::cli::{load_history, read_upload, render_response, Commands};
use docchat::{ApiClient, BuildProfile, EndpointConfig, ReqwestTransport};

#[derive(Parser)]
#[command(name = "docchat")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Backend root URL; overrides VITE_API_GATEWAY_URL and the build default
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let endpoint = match cli.base_url.as_deref() {
        Some(url) => EndpointConfig::new(url),
        None => EndpointConfig::from_env()?,
    };
    let client = ApiClient::new(endpoint, Arc::new(ReqwestTransport::new()));
    info!(
        "Using backend {} ({} build)",
        client.endpoint().base_url(),
        BuildProfile::current().as_str()
    );

    match cli.command {
        Commands::Upload { path, session_id } => {
            let session_id = session_id.unwrap_or_else(|| Uuid::new_v4().to_string());
            let upload = read_upload(&path, &session_id)?;
            if upload.file.is_empty() {
                warn!("{} is empty", path.display());
            }
            info!(
                "Uploading {} ({} bytes)",
                upload.file.file_name(),
                upload.file.len()
            );

            let response = client.upload_file(&upload).await?;
            println!("Session: {}", session_id);
            println!("{}", render_response(&response));
        }

        Commands::Query {
            query,
            session_id,
            doc_id,
            history,
        } => {
            let history = history.as_deref().map(load_history).transpose()?;
            let response = client
                .send_query(&query, &session_id, &doc_id, history.as_deref())
                .await?;
            println!("{}", render_response(&response));
        }

        Commands::Info => {
            let app = client.app_info().await?;
            println!("{} {}", app.name, app.version);
            println!("{}", app.description);
        }
    }

    Ok(())
}

#[cfg(test)]
mod cli_tests {
    use super::*;

    #[test]
    fn query_requires_session_and_doc() {
        let res = Cli::try_parse_from(["docchat", "query", "what is this?"]);
        assert!(res.is_err());

        let res = Cli::try_parse_from([
            "docchat",
            "query",
            "what is this?",
            "--session-id",
            "s",
            "--doc-id",
            "d",
        ]);
        assert!(res.is_ok());
    }

    #[test]
    fn base_url_is_global() {
        let cli = Cli::try_parse_from(["docchat", "info", "--base-url", "http://localhost:9000"])
            .unwrap();
        assert_eq!(cli.base_url.as_deref(), Some("http://localhost:9000"));
    }

    #[test]
    fn upload_session_is_optional() {
        let cli = Cli::try_parse_from(["docchat", "upload", "paper.pdf"]).unwrap();
        match cli.command {
            Commands::Upload { session_id, .. } => assert!(session_id.is_none()),
            _ => panic!("expected upload command"),
        }
    }
}
