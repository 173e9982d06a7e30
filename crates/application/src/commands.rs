use chrono::{DateTime, Utc};
use core_types::{CoreError, NovoUsuario, Usuario, UsuarioRepository};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// The payload accepted by `POST /api/usuarios`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InclusaoUsuarioCommand {
    pub nome: String,
    pub email: String,
}

/// What a successful creation returns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InclusaoUsuarioResponse {
    pub id: i32,
    pub nome: String,
    pub email: String,
    pub data_criacao: DateTime<Utc>,
}

impl From<Usuario> for InclusaoUsuarioResponse {
    fn from(usuario: Usuario) -> Self {
        Self {
            id: usuario.id,
            nome: usuario.nome,
            email: usuario.email,
            data_criacao: usuario.data_criacao,
        }
    }
}

/// Creates users: stamps the creation time, stores the row and shapes the response.
#[derive(Clone)]
pub struct InclusaoUsuarioHandler {
    repository: Arc<dyn UsuarioRepository>,
}

impl InclusaoUsuarioHandler {
    pub fn new(repository: Arc<dyn UsuarioRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        command: InclusaoUsuarioCommand,
    ) -> Result<InclusaoUsuarioResponse, CoreError> {
        let usuario = NovoUsuario::new(command.nome, command.email);
        let usuario = self.repository.add(usuario).await?;
        tracing::info!(id = usuario.id, "Usuario created.");
        Ok(usuario.into())
    }
}
