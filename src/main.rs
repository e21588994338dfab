use std::{future::IntoFuture, process, sync::Arc, time::Duration};

use registrar::{
    application::{error::AppError, repos::DocumentStore},
    config,
    infra::{
        db::PostgresDocuments,
        error::InfraError,
        http::{self, AdminState},
        memory::MemoryDocuments,
        telemetry,
    },
};
use tokio::sync::oneshot;
use tracing::{Dispatch, Level, dispatcher, error, info, warn};
use tracing_subscriber::fmt as tracing_fmt;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        report_application_error(&error);
        process::exit(1);
    }
}

fn report_application_error(error: &AppError) {
    if dispatcher::has_been_set() {
        error!(error = %error, "application error");
        return;
    }

    let subscriber = tracing_fmt().with_max_level(Level::ERROR).finish();
    let dispatch = Dispatch::new(subscriber);
    dispatcher::with_default(&dispatch, || {
        error!(error = %error, "application error");
    });
}

async fn run() -> Result<(), AppError> {
    let (cli_args, settings) = config::load_with_cli()
        .map_err(|err| AppError::from(InfraError::configuration(err.to_string())))?;

    let command = cli_args
        .command
        .unwrap_or(config::Command::Serve(Box::<config::ServeArgs>::default()));

    telemetry::init(&settings.logging).map_err(AppError::from)?;

    match command {
        config::Command::Serve(_) => run_serve(settings).await,
    }
}

async fn run_serve(settings: config::Settings) -> Result<(), AppError> {
    let store = init_store(&settings).await?;
    let state = AdminState::new(store, &settings.admin);
    serve_http(&settings, state).await
}

async fn init_store(settings: &config::Settings) -> Result<Arc<dyn DocumentStore>, AppError> {
    let Some(database_url) = settings.database.url.as_deref() else {
        warn!(
            target = "registrar::startup",
            "database url is not configured; records are kept in memory and lost on exit"
        );
        return Ok(Arc::new(MemoryDocuments::new()));
    };

    let pool = PostgresDocuments::connect(database_url, settings.database.max_connections.get())
        .await
        .map_err(|err| AppError::from(InfraError::database(err.to_string())))?;

    PostgresDocuments::run_migrations(&pool)
        .await
        .map_err(|err| AppError::from(InfraError::database(err.to_string())))?;

    info!(target = "registrar::startup", "connected to postgres document store");
    Ok(Arc::new(PostgresDocuments::new(pool)))
}

async fn serve_http(settings: &config::Settings, state: AdminState) -> Result<(), AppError> {
    let router = http::build_admin_router(state);

    let listener = tokio::net::TcpListener::bind(settings.server.addr)
        .await
        .map_err(|err| AppError::from(InfraError::from(err)))?;

    info!(
        target = "registrar::startup",
        addr = %settings.server.addr,
        "dashboard listening"
    );

    let (stopping_tx, stopping_rx) = oneshot::channel::<()>();
    let server = axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(async move {
            shutdown_signal().await;
            let _ = stopping_tx.send(());
        })
        .into_future();
    tokio::pin!(server);

    let grace = settings.server.graceful_shutdown;
    tokio::select! {
        result = &mut server => {
            result.map_err(|err| AppError::from(InfraError::from(err)))?;
        }
        _ = drain_deadline(stopping_rx, grace) => {
            warn!(
                target = "registrar::shutdown",
                grace_seconds = grace.as_secs(),
                "graceful shutdown timed out; dropping open connections"
            );
        }
    }

    info!(target = "registrar::shutdown", "server stopped");
    Ok(())
}

/// Resolves `grace` after shutdown began; never resolves if it did not.
async fn drain_deadline(stopping: oneshot::Receiver<()>, grace: Duration) {
    if stopping.await.is_ok() {
        tokio::time::sleep(grace).await;
    } else {
        std::future::pending::<()>().await;
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            error!(error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                error!(error = %err, "failed to listen for SIGTERM");
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

    info!(target = "registrar::shutdown", "shutdown signal received");
}
