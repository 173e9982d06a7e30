use crate::DbError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use core_types::{CoreError, NovoUsuario, Usuario, UsuarioRepository};
use sqlx::postgres::PgPool;
use sqlx::FromRow;

/// A row of the `Usuarios` table, as read back from PostgreSQL.
///
/// Rows are mapped into the domain `Usuario` explicitly; nothing here
/// tracks changes or writes back implicitly.
#[derive(FromRow, Debug, Clone)]
pub struct DbUsuario {
    pub id: i32,
    pub nome: String,
    pub email: String,
    pub data_criacao: DateTime<Utc>,
}

impl From<DbUsuario> for Usuario {
    fn from(row: DbUsuario) -> Self {
        Usuario {
            id: row.id,
            nome: row.nome,
            email: row.email,
            data_criacao: row.data_criacao,
        }
    }
}

const SELECT_USUARIOS: &str = r#"SELECT "Id" AS id, "Nome" AS nome, "Email" AS email, "DataCriacao" AS data_criacao FROM "Usuarios""#;

const SELECT_USUARIO_BY_ID: &str = r#"SELECT "Id" AS id, "Nome" AS nome, "Email" AS email, "DataCriacao" AS data_criacao FROM "Usuarios" WHERE "Id" = $1"#;

/// The PostgreSQL-backed `UsuarioRepository`.
///
/// Every method is a single statement on the shared pool, committed on its own.
#[derive(Debug, Clone)]
pub struct PgUsuarioRepository {
    pool: PgPool,
}

impl PgUsuarioRepository {
    /// Creates a new `PgUsuarioRepository` with a shared database connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub async fn find_usuario(&self, id: i32) -> Result<Option<Usuario>, DbError> {
        let row = sqlx::query_as::<_, DbUsuario>(SELECT_USUARIO_BY_ID)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(Usuario::from))
    }

    /// Fetches every user. No `ORDER BY`: the order is whatever the store returns.
    pub async fn list_usuarios(&self) -> Result<Vec<Usuario>, DbError> {
        let rows = sqlx::query_as::<_, DbUsuario>(SELECT_USUARIOS)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(Usuario::from).collect())
    }

    /// Inserts a user and reads back the id generated by the `SERIAL` column.
    pub async fn insert_usuario(&self, usuario: NovoUsuario) -> Result<Usuario, DbError> {
        let id: i32 = sqlx::query_scalar(
            r#"INSERT INTO "Usuarios" ("Nome", "Email", "DataCriacao") VALUES ($1, $2, $3) RETURNING "Id""#,
        )
        .bind(&usuario.nome)
        .bind(&usuario.email)
        .bind(usuario.data_criacao)
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!(id, "Inserted usuario.");
        Ok(usuario.with_id(id))
    }
}

#[async_trait]
impl UsuarioRepository for PgUsuarioRepository {
    async fn find(&self, id: i32) -> Result<Option<Usuario>, CoreError> {
        Ok(self.find_usuario(id).await?)
    }

    async fn list(&self) -> Result<Vec<Usuario>, CoreError> {
        Ok(self.list_usuarios().await?)
    }

    async fn add(&self, usuario: NovoUsuario) -> Result<Usuario, CoreError> {
        Ok(self.insert_usuario(usuario).await?)
    }

    async fn ping(&self) -> Result<(), CoreError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(CoreError::storage)?;
        Ok(())
    }
}
