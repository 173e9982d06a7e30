use anyhow::Context;
use application::{BuscaUsuarioHandler, InclusaoUsuarioHandler, ListagemUsuarioHandler};
use axum::{
    extract::DefaultBodyLimit,
    routing::get,
    Router,
};
use configuration::{Settings, StorageBackend};
use core_types::UsuarioRepository;
use database::{InMemoryUsuarioRepository, PgUsuarioRepository};
use std::sync::Arc;
use tower_http::{
    cors::{AllowHeaders, AllowOrigin, Any, CorsLayer, ExposeHeaders},
    trace::TraceLayer,
};

pub mod error;
pub mod handlers;

/// The shared application state that all handlers can access.
///
/// Built once at start-up; the handlers share one repository.
#[derive(Clone)]
pub struct AppState {
    pub repository: Arc<dyn UsuarioRepository>,
    pub inclusao: InclusaoUsuarioHandler,
    pub busca: BuscaUsuarioHandler,
    pub listagem: ListagemUsuarioHandler,
}

impl AppState {
    /// Wires every handler around the given repository.
    pub fn new(repository: Arc<dyn UsuarioRepository>) -> Self {
        Self {
            inclusao: InclusaoUsuarioHandler::new(repository.clone()),
            busca: BuscaUsuarioHandler::new(repository.clone()),
            listagem: ListagemUsuarioHandler::new(repository.clone()),
            repository,
        }
    }

    /// Builds the configured store and the handlers around it.
    ///
    /// For PostgreSQL this connects and creates the schema, retrying both as
    /// configured. A database still unreachable after that is a start-up error.
    pub async fn from_settings(settings: &Settings) -> anyhow::Result<Self> {
        let repository: Arc<dyn UsuarioRepository> = match settings.database.backend {
            StorageBackend::Postgres => {
                let pool = database::connect_and_migrate(settings)
                    .await
                    .context("connect to the database and create the schema")?;
                Arc::new(PgUsuarioRepository::new(pool))
            }
            StorageBackend::Memory => {
                tracing::warn!("Using the in-memory store; data will not survive a restart.");
                Arc::new(InMemoryUsuarioRepository::new())
            }
        };
        tracing::info!(backend = %settings.database.backend, "Storage ready.");
        Ok(Self::new(repository))
    }
}

/// Defines the application routes and middleware.
pub fn router(state: AppState, body_limit_bytes: usize) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::any())
        .allow_methods(Any)
        .allow_headers(AllowHeaders::any())
        .expose_headers(ExposeHeaders::any());

    Router::new()
        .route("/api/health", get(handlers::health))
        .route(
            "/api/usuarios",
            get(handlers::get_usuarios).post(handlers::create_usuario),
        )
        .route("/api/usuarios/:id", get(handlers::get_usuario_by_id))
        .with_state(Arc::new(state))
        .layer(cors)
        // Logs every incoming request and its response status.
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(body_limit_bytes))
}

/// Configures and runs the web server until Ctrl-C.
pub async fn run_server(settings: &Settings) -> anyhow::Result<()> {
    let state = AppState::from_settings(settings).await?;
    let app = router(state, settings.server.body_limit_bytes);

    let addr = settings.server.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("bind {addr}"))?;
    tracing::info!("Web server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("Web server stopped.");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for Ctrl-C.");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received.");
}
