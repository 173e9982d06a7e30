//! # Charging Application Crate
//!
//! Command and query handlers sitting between the HTTP layer and the
//! repository. Each handler is built once at start-up around a shared
//! `UsuarioRepository` and is cheap to clone.

pub mod commands;
pub mod queries;

pub use commands::{InclusaoUsuarioCommand, InclusaoUsuarioHandler, InclusaoUsuarioResponse};
pub use queries::{BuscaUsuarioHandler, BuscaUsuarioQuery, ListagemUsuarioHandler, ListagemUsuarioQuery};
