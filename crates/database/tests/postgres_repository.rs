//! Tests against a live PostgreSQL instance.
//!
//! Run with `DATABASE_URL=postgres://... cargo test -p database -- --ignored`.

use anyhow::{Context, Result};
use core_types::{NovoUsuario, UsuarioRepository};
use database::{run_migrations, PgUsuarioRepository};
use sqlx::postgres::PgPoolOptions;

async fn repository() -> Result<PgUsuarioRepository> {
    let url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&url)
        .await
        .context("connect to postgres")?;
    run_migrations(&pool).await.context("run migrations")?;
    Ok(PgUsuarioRepository::new(pool))
}

fn unique_email(prefix: &str) -> String {
    let nanos = chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default();
    format!("{prefix}-{nanos}@email.com")
}

#[tokio::test]
#[ignore = "requires DATABASE_URL pointing at a PostgreSQL instance"]
async fn add_then_find_round_trips() -> Result<()> {
    let repo = repository().await?;
    let email = unique_email("jose");

    let created = repo.add(NovoUsuario::new("José Carlos", email.clone())).await?;
    assert!(created.id > 0);

    let found = repo.find(created.id).await?.context("created usuario not found")?;
    assert_eq!(found.nome, "José Carlos");
    assert_eq!(found.email, email);
    assert_eq!(found.data_criacao, created.data_criacao);
    Ok(())
}

#[tokio::test]
#[ignore = "requires DATABASE_URL pointing at a PostgreSQL instance"]
async fn find_unknown_id_is_none() -> Result<()> {
    let repo = repository().await?;
    assert!(repo.find(i32::MAX).await?.is_none());
    Ok(())
}

#[tokio::test]
#[ignore = "requires DATABASE_URL pointing at a PostgreSQL instance"]
async fn list_contains_every_created_usuario() -> Result<()> {
    let repo = repository().await?;
    let first = repo.add(NovoUsuario::new("José Carlos", unique_email("jose"))).await?;
    let second = repo.add(NovoUsuario::new("Maria Eduarda", unique_email("maria"))).await?;
    assert_ne!(first.id, second.id);

    let ids: Vec<i32> = repo.list().await?.into_iter().map(|u| u.id).collect();
    assert!(ids.contains(&first.id));
    assert!(ids.contains(&second.id));

    repo.ping().await?;
    Ok(())
}

#[tokio::test]
#[ignore = "requires DATABASE_URL pointing at a PostgreSQL instance"]
async fn schema_keeps_mixed_case_names() -> Result<()> {
    let repo = repository().await?;
    let columns: Vec<String> = sqlx::query_scalar(
        "SELECT column_name::text FROM information_schema.columns WHERE table_name = 'Usuarios' ORDER BY ordinal_position",
    )
    .fetch_all(repo.pool())
    .await?;

    assert_eq!(columns, vec!["Id", "Nome", "Email", "DataCriacao"]);
    Ok(())
}
