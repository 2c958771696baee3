use anyhow::Result;
use litreview::application::{
    ports::{ArticleSourcePort, QueryAnalyzerPort, SummarizerPort},
    services::ApplicationServices,
};
use litreview::config::AppConfig;
use litreview::infrastructure::{
    http::build_client,
    openai::{OpenAiQueryAnalyzer, OpenAiSummarizer},
    pubmed::EutilsArticleSource,
};
use litreview::presentation::http::{routes::build_router, state::HttpState};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    let client = build_client(config.http_timeout())?;

    let source: Arc<ArticleSourcePort> = Arc::new(EutilsArticleSource::new(
        client.clone(),
        config.eutils().clone(),
    ));
    let analyzer: Arc<QueryAnalyzerPort> = Arc::new(OpenAiQueryAnalyzer::new(
        client.clone(),
        config.openai().clone(),
    ));
    let summarizer = config.summarize_results().then(|| {
        Arc::new(OpenAiSummarizer::new(client, config.openai().clone())) as Arc<SummarizerPort>
    });

    let services = Arc::new(ApplicationServices::new(source, analyzer, summarizer));
    let state = HttpState { services };

    let app = build_router(state, config.allowed_origins());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!(
        model = %config.openai().model,
        ncbi_key = config.eutils().api_key.is_some(),
        summarize = config.summarize_results(),
        "listening on {address}"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,reqwest=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install CTRL+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
