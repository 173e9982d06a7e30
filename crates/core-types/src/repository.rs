use crate::error::CoreError;
use crate::structs::{NovoUsuario, Usuario};
use async_trait::async_trait;

/// The data-access contract for `Usuario`.
///
/// Implementations are thin pass-throughs to a store: no validation, no
/// uniqueness checks beyond what the store's schema imposes. The web layer
/// only ever sees this trait, so a SQL store and an in-process store can be
/// swapped at start-up.
#[async_trait]
pub trait UsuarioRepository: Send + Sync {
    /// Returns the user with the given id, or `None` when there is no such row.
    async fn find(&self, id: i32) -> Result<Option<Usuario>, CoreError>;

    /// Returns every stored user in the store's default order.
    async fn list(&self) -> Result<Vec<Usuario>, CoreError>;

    /// Persists a new user and returns it with the id generated by the store.
    async fn add(&self, usuario: NovoUsuario) -> Result<Usuario, CoreError>;

    /// Checks that the store is reachable.
    async fn ping(&self) -> Result<(), CoreError> {
        Ok(())
    }
}
