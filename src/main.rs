use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tokio::net::TcpListener;
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

use jscodebot::connector::api::Router;
use jscodebot::connector::web::{self, AppState};
use jscodebot::connector::{DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_PROVIDER};
use jscodebot::{Commands, Container, ContainerConfig, HuggingFaceConfig};

#[derive(Parser)]
#[command(name = "jscodebot")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Hugging Face API key
    #[arg(long, global = true, env = "HF_TOKEN", hide_env_values = true, default_value = "")]
    api_key: String,

    /// Inference provider behind the Hugging Face router
    #[arg(long, global = true, env = "HF_PROVIDER", default_value = DEFAULT_PROVIDER)]
    provider: String,

    #[arg(long, global = true, env = "HF_MODEL", default_value = DEFAULT_MODEL)]
    model: String,

    /// OpenAI-compatible base URL; `/chat/completions` is appended
    #[arg(long, global = true, env = "HF_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Client-side request timeout; unset waits as long as the service does
    #[arg(long, global = true, env = "HF_TIMEOUT_SECS")]
    timeout_secs: Option<u64>,

    /// Answer with a canned snippet instead of calling the inference service
    #[arg(long, global = true)]
    mock_llm: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env is normal; the variables may come from the environment.
    let dotenv = dotenvy::dotenv();

    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    if let Ok(path) = dotenv {
        debug!("Loaded environment from {}", path.display());
    }

    let inference = HuggingFaceConfig {
        api_key: cli.api_key,
        provider: cli.provider,
        model: cli.model,
        base_url: cli.base_url,
        timeout: cli.timeout_secs.map(Duration::from_secs),
    };
    debug!("Inference settings: {:?}", inference);

    let container = Container::new(ContainerConfig {
        mock_llm: cli.mock_llm,
        inference,
    })?;

    match cli.command {
        Commands::Serve { port, public } => {
            let addr = web::bind_address(public, port);
            let listener = TcpListener::bind(addr).await?;
            info!(
                "Using model {}{}",
                container.model_name(),
                if container.mock_llm() { " (mock)" } else { "" }
            );
            web::serve(listener, AppState::from_container(&container)).await?;
        }
        command => {
            let router = Router::new(&container);
            let output = router.route(command).await?;
            println!("{}", output);
        }
    }

    Ok(())
}
