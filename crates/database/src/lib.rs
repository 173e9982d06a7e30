//! # Charging Database Crate
//!
//! The infrastructure layer: the stores behind the `UsuarioRepository`
//! contract defined in `core-types`.
//!
//! - `connect` / `run_migrations` / `connect_and_migrate`: build the
//!   PostgreSQL pool and create the `Usuarios` table, retrying at start-up.
//! - `PgUsuarioRepository`: the PostgreSQL store.
//! - `InMemoryUsuarioRepository`: a process-local store for development and tests.
//! - `DbError`: the errors this crate returns.

pub mod connection;
pub mod error;
pub mod memory;
pub mod repository;

pub use connection::{connect, connect_and_migrate, run_migrations};
pub use error::DbError;
pub use memory::InMemoryUsuarioRepository;
pub use repository::{DbUsuario, PgUsuarioRepository};
