use std::path::Path;

use anyhow::Context;
use tourdb_db::SeedPlace;

/// Apply pending migrations and report how many ran.
///
/// # Errors
///
/// Returns an error if any migration fails.
pub(crate) async fn run_migrate(pool: &sqlx::PgPool) -> anyhow::Result<()> {
    let applied = tourdb_db::run_migrations(pool).await?;
    println!("applied {applied} migration(s)");
    Ok(())
}

/// Read a JSON array of places from `file` and insert them.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, a coordinate is
/// out of range, or the inserts fail.
pub(crate) async fn run_seed(pool: &sqlx::PgPool, file: &Path) -> anyhow::Result<()> {
    let places = read_seed_file(file)?;
    let ids = tourdb_db::seed_places(pool, &places).await?;
    println!("seeded {} place(s) from {}", ids.len(), file.display());
    Ok(())
}

pub(crate) fn read_seed_file(file: &Path) -> anyhow::Result<Vec<SeedPlace>> {
    let raw = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read seed file {}", file.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse seed file {}", file.display()))
}
