mod cli;

use crate::cli::{StorageBackendArg, CLI};
use anyhow::Context;
use clap::Parser;
use std::sync::Arc;
use tinyurl_core::RecordStore;
use tinyurl_gateway::{AllowedOrigins, App, AppState};
use tinyurl_generator::Fnv1aGenerator;
use tinyurl_redirector::ResolveService;
use tinyurl_shortener::CreateService;
use tinyurl_storage::{DynamoDbConfig, DynamoDbRepository, InMemoryRepository};
use tinyurl_telemetry::TelemetryConfig;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CLI::try_parse()?;

    let _telemetry = tinyurl_telemetry::init(
        TelemetryConfig::builder()
            .service_name("tinyurl-gateway")
            .format(config.log_format)
            .otlp_endpoint(config.otlp_endpoint.clone())
            .build(),
    )?;

    info!(
        listen_addr = %config.listen_addr,
        storage_backend = %config.storage,
        collision_policy = %config.collision_policy,
        allowed_origins = %config.allowed_origins,
        "starting gateway server"
    );

    match config.storage {
        StorageBackendArg::InMemory => run_server(&config, InMemoryRepository::new()).await?,
        StorageBackendArg::DynamoDb => {
            let table_name = config
                .table_name
                .clone()
                .context("table name is required when storage backend is dynamodb")?;
            let repository = DynamoDbRepository::connect(
                DynamoDbConfig::builder()
                    .table_name(table_name)
                    .region(config.region.clone())
                    .endpoint_url(config.endpoint_url.clone())
                    .build(),
            )
            .await;
            run_server(&config, repository).await?
        }
    }

    Ok(())
}

async fn run_server<R: RecordStore + Clone>(config: &CLI, repository: R) -> anyhow::Result<()> {
    let shortener = CreateService::new(repository.clone(), Fnv1aGenerator::new())
        .with_collision_policy(config.collision_policy.into());
    let redirector = ResolveService::new(repository);

    let mut state = AppState::new(Arc::new(shortener), Arc::new(redirector));
    if let Some(public_origin) = &config.public_origin {
        state = state.with_public_origin(public_origin.clone());
    }
    let app = App::router(state, &AllowedOrigins::parse(&config.allowed_origins));

    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.listen_addr))?;
    info!(listen_addr = %listener.local_addr()?, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("gateway server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("shutdown signal received");
}
