use clap::Parser;
use phishguard_classifiers::{load_pipeline, UrlPredictor};
use phishguard_demo::cli::{Cli, Commands};
use phishguard_demo::models::{DemoConfig, ModelStatus};
use phishguard_demo::server::run_server;
use phishguard_demo::state::AppState;
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Start {
            port,
            address,
            model,
            verbose,
        } => {
            // Initialize logging
            init_logging(verbose);

            let addr: SocketAddr = format!("{}:{}", address, port).parse()?;

            // Load the artifact once at startup. A failure is reported and
            // the server still starts; every request then reports the
            // unavailable model instead of crashing.
            let load_result = load_pipeline(&model);
            let model_status = match &load_result {
                Ok(pipeline) => ModelStatus::Loaded {
                    name: pipeline.name().to_string(),
                    classes: pipeline.classes().to_vec(),
                    vocabulary_size: pipeline.vocabulary_size(),
                },
                Err(err) => ModelStatus::Unavailable {
                    error: err.to_string(),
                },
            };
            let predictor = UrlPredictor::from_load(load_result);

            println!();
            println!("  ╔══════════════════════════════════════════╗");
            println!("  ║                                          ║");
            println!("  ║   PhishGuard                             ║");
            println!("  ║   Phishing URL Detector Demo             ║");
            println!("  ║                                          ║");
            println!("  ╚══════════════════════════════════════════╝");
            println!();
            println!("  Model:   {}", model);
            println!(
                "  Status:  {}",
                if model_status.is_loaded() {
                    "loaded"
                } else {
                    "unavailable"
                }
            );
            println!();
            println!("  Open http://{} in your browser", addr);
            println!();

            let config = DemoConfig { model_path: model };
            let state = AppState::new(config, predictor, model_status);
            run_server(state, addr).await?;
        }

        Commands::Check { model, url } => {
            init_logging(false);

            let predictor = UrlPredictor::from_load(load_pipeline(&model));
            let scores = predictor.predict(&url).await;
            println!("{}", serde_json::to_string_pretty(&scores)?);
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        "phishguard_demo=debug,phishguard_classifiers=debug,tower_http=debug"
    } else {
        "phishguard_demo=info,phishguard_classifiers=info,tower_http=warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
