use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

/// A persisted user. The `id` is always the one generated by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Usuario {
    pub id: i32,
    pub nome: String,
    pub email: String,
    /// Set once at creation and never changed afterwards.
    pub data_criacao: DateTime<Utc>,
}

/// A user that has not been stored yet and therefore has no id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NovoUsuario {
    pub nome: String,
    pub email: String,
    pub data_criacao: DateTime<Utc>,
}

impl NovoUsuario {
    /// Creates a new user stamped with the current UTC time.
    ///
    /// The stamp is truncated to microseconds, the precision SQL timestamp
    /// columns keep, so a stored user reads back exactly as it was created.
    pub fn new(nome: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            nome: nome.into(),
            email: email.into(),
            data_criacao: Utc::now().trunc_subsecs(6),
        }
    }

    /// Attaches the id generated by the store, producing the persisted entity.
    pub fn with_id(self, id: i32) -> Usuario {
        Usuario {
            id,
            nome: self.nome,
            email: self.email,
            data_criacao: self.data_criacao,
        }
    }
}
