use axum::Router;
use clap::Parser;
use std::net::SocketAddr;
use tower_http::cors::CorsLayer;
use tracing::{error, info, Level};
use wordcloud_vibes::api::{self, AppState};
use wordcloud_vibes::config::PipelineConfig;
use wordcloud_vibes::pipeline::run_with_config;
use wordcloud_vibes::render::Rendering;
use wordcloud_vibes::sources;

#[derive(Parser, Debug)]
#[command(name = "wordcloud-vibes")]
#[command(about = "Word Cloud Vibes - word frequencies and themed cloud rendering")]
struct Args {
    /// Server port
    #[arg(short, long, default_value = "8080")]
    port: u16,

    /// Number of ranked words published per run (1-50)
    #[arg(short = 'k', long, default_value = "50", value_parser = parse_top_k)]
    top_k: usize,

    /// Log pipeline runs at debug level
    #[arg(short, long, default_value = "false")]
    verbose: bool,

    /// Analyze a known title once and print the result instead of serving
    #[arg(long, conflicts_with = "text")]
    title: Option<String>,

    /// Analyze the given text once and print the result instead of serving
    #[arg(long)]
    text: Option<String>,
}

fn parse_top_k(raw: &str) -> Result<usize, String> {
    let top_k: usize = raw
        .parse()
        .map_err(|e| format!("'{}' is not a number: {}", raw, e))?;
    PipelineConfig::with_top_k(top_k)
        .map(|config| config.top_k)
        .map_err(|e| e.to_string())
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .init();

    let config = PipelineConfig { top_k: args.top_k };

    let one_shot = match (&args.title, &args.text) {
        (Some(title), _) => Some(sources::lookup(title).to_string()),
        (None, Some(text)) => Some(text.clone()),
        (None, None) => None,
    };

    if let Some(text) = one_shot {
        std::process::exit(print_analysis(&text, &config));
    }

    info!("Word Cloud Vibes");
    info!("Publishing top {} words per run", config.top_k);

    let app = Router::new()
        .merge(api::routes(AppState::new(config)))
        .layer(CorsLayer::permissive());

    let addr = SocketAddr::from(([0, 0, 0, 0], args.port));
    info!("Server listening on {}", addr);

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("Server error: {}", e);
        std::process::exit(1);
    }
}

fn print_analysis(text: &str, config: &PipelineConfig) -> i32 {
    if text.is_empty() {
        info!("Empty text, nothing to analyze");
        return 0;
    }

    let output = match run_with_config(text, config) {
        Ok(output) => output,
        Err(e) => {
            error!("Analysis failed: {}", e);
            return 1;
        }
    };

    match serde_json::to_string_pretty(&Rendering::new(output)) {
        Ok(json) => {
            println!("{}", json);
            0
        }
        Err(e) => {
            error!("Failed to serialize result: {}", e);
            1
        }
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(err) => error!("Error setting up shutdown handler: {}", err),
    }
}
