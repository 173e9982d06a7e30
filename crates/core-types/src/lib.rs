//! # Charging Core Types
//!
//! The domain layer: the `Usuario` entity and the `UsuarioRepository`
//! contract that every storage backend implements. As the bottom crate of
//! the workspace it has no knowledge of SQL or HTTP.

pub mod error;
pub mod repository;
pub mod structs;

// Re-export the core types to provide a clean public API.
pub use error::CoreError;
pub use repository::UsuarioRepository;
pub use structs::{NovoUsuario, Usuario};
