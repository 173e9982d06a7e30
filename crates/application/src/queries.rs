use core_types::{CoreError, Usuario, UsuarioRepository};
use std::sync::Arc;

/// Look up a single user by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuscaUsuarioQuery {
    pub id: i32,
}

/// List every user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListagemUsuarioQuery;

#[derive(Clone)]
pub struct BuscaUsuarioHandler {
    repository: Arc<dyn UsuarioRepository>,
}

impl BuscaUsuarioHandler {
    pub fn new(repository: Arc<dyn UsuarioRepository>) -> Self {
        Self { repository }
    }

    /// `Ok(None)` when no user has the requested id.
    pub async fn handle(&self, query: BuscaUsuarioQuery) -> Result<Option<Usuario>, CoreError> {
        let usuario = self.repository.find(query.id).await?;
        if usuario.is_none() {
            tracing::debug!(id = query.id, "Usuario not found.");
        }
        Ok(usuario)
    }
}

#[derive(Clone)]
pub struct ListagemUsuarioHandler {
    repository: Arc<dyn UsuarioRepository>,
}

impl ListagemUsuarioHandler {
    pub fn new(repository: Arc<dyn UsuarioRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, _query: ListagemUsuarioQuery) -> Result<Vec<Usuario>, CoreError> {
        let usuarios = self.repository.list().await?;
        tracing::debug!(count = usuarios.len(), "Listed usuarios.");
        Ok(usuarios)
    }
}
