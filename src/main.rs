use clap::Parser;
use std::{net::SocketAddr, path::PathBuf};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,roster=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    if let Some(path) = &cli.activities
        && !path.is_file()
    {
        panic!("activities file not found: {}", path.display());
    }

    tracing::info!("listening on http://{}", cli.bind);

    let config = roster::config::AppConfig {
        activities_file: cli.activities,
    };
    roster::serve(cli.bind, config).await;
}

#[derive(Parser, Debug)]
#[command(name = "roster", version, about = "Small activity sign-up server")]
struct Cli {
    #[arg(long, default_value = "127.0.0.1:8000")]
    bind: SocketAddr,
    #[arg(long, env = "ROSTER_ACTIVITIES")]
    activities: Option<PathBuf>,
}
