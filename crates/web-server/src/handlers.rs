use crate::{error::AppError, AppState};
use application::{
    BuscaUsuarioQuery, InclusaoUsuarioCommand, InclusaoUsuarioResponse, ListagemUsuarioQuery,
};
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use core_types::Usuario;
use std::sync::Arc;

/// # GET /api/usuarios/:id
pub async fn get_usuario_by_id(
    Path(id): Path<i32>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<Usuario>, AppError> {
    state
        .busca
        .handle(BuscaUsuarioQuery { id })
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Usuario {id} not found")))
}

/// # GET /api/usuarios
/// Every stored user, in the store's default order.
pub async fn get_usuarios(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Usuario>>, AppError> {
    let usuarios = state.listagem.handle(ListagemUsuarioQuery).await?;
    Ok(Json(usuarios))
}

/// # POST /api/usuarios
/// Creates a user and answers 201 with a `Location` header pointing at it.
pub async fn create_usuario(
    State(state): State<Arc<AppState>>,
    Json(command): Json<InclusaoUsuarioCommand>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1], Json<InclusaoUsuarioResponse>), AppError> {
    let response = state.inclusao.handle(command).await?;
    let location = format!("/api/usuarios/{}", response.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(response)))
}

/// # GET /api/health
pub async fn health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.repository.ping().await {
        Ok(()) => (StatusCode::OK, "OK"),
        Err(e) => {
            tracing::warn!(error = %e, "Health check failed.");
            (StatusCode::SERVICE_UNAVAILABLE, "UNAVAILABLE")
        }
    }
}
