use async_trait::async_trait;
use core_types::{CoreError, NovoUsuario, Usuario, UsuarioRepository};
use std::sync::atomic::{AtomicI32, Ordering};
use thiserror::Error;
use tokio::sync::RwLock;

#[derive(Error, Debug)]
#[error("No usuario ids left after {last}.")]
pub struct IdsExhausted {
    pub last: i32,
}

/// A process-local `UsuarioRepository`.
///
/// Ids start at 1 and are handed out by an atomic counter, so concurrent
/// inserts never share an id. When the counter reaches `i32::MAX`, `add`
/// fails instead of wrapping to negative ids. `list` returns users in insertion order.
#[derive(Debug)]
pub struct InMemoryUsuarioRepository {
    next_id: AtomicI32,
    usuarios: RwLock<Vec<Usuario>>,
}

impl InMemoryUsuarioRepository {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    fn starting_at(first_id: i32) -> Self {
        Self {
            next_id: AtomicI32::new(first_id),
            usuarios: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemoryUsuarioRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UsuarioRepository for InMemoryUsuarioRepository {
    async fn find(&self, id: i32) -> Result<Option<Usuario>, CoreError> {
        let usuarios = self.usuarios.read().await;
        Ok(usuarios.iter().find(|u| u.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<Usuario>, CoreError> {
        Ok(self.usuarios.read().await.clone())
    }

    async fn add(&self, usuario: NovoUsuario) -> Result<Usuario, CoreError> {
        let mut usuarios = self.usuarios.write().await;
        let id = self
            .next_id
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_add(1))
            .map_err(|last| CoreError::storage(IdsExhausted { last: last - 1 }))?;
        let usuario = usuario.with_id(id);
        usuarios.push(usuario.clone());
        Ok(usuario)
    }
}
