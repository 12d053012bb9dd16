//! Shared embedded PostgreSQL helpers for integration tests.
//!
//! Each test gets a fresh database cloned from a template that already has
//! the embedded migrations applied. The template name carries a hash of the
//! migrations directory so schema changes produce a new template.

use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};
use std::time::Duration;

use pg_embedded_setup_unpriv::test_support::hash_directory;
use pg_embedded_setup_unpriv::{ClusterHandle, TemporaryDatabase};
use picnic_backend::outbound::persistence::run_migrations_blocking;
use postgres::{Client, NoTls};
use uuid::Uuid;

use super::format_postgres_error;

static TEMPLATE_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

const TEMPLATE_NAME_PREFIX: &str = "picnic_template";
const TEMPLATE_PROVISION_RETRIES: usize = 5;
const TEMPLATE_PROVISION_RETRY_DELAY: Duration = Duration::from_millis(500);

fn migrations_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("migrations")
}

fn template_database_name() -> Result<String, String> {
    let hash = hash_directory(migrations_dir()).map_err(|err| format!("hash migrations: {err}"))?;
    let short_hash = hash.get(..8).unwrap_or(&hash);
    Ok(format!("{TEMPLATE_NAME_PREFIX}_{short_hash}"))
}

/// Create or reuse the template database with migrations applied.
fn ensure_template_database(cluster: &ClusterHandle) -> Result<String, String> {
    let template_name = template_database_name()?;
    let _lock = TEMPLATE_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|err| err.into_inner());

    let exists = cluster
        .database_exists(template_name.as_str())
        .map_err(|err| format!("template check: {err:?}"))?;
    if !exists {
        cluster
            .create_database(template_name.as_str())
            .map_err(|err| format!("create template: {err:?}"))?;
        let url = cluster.connection().database_url(&template_name);
        run_migrations_blocking(&url).map_err(|err| format!("migrate template: {err}"))?;
    }
    Ok(template_name)
}

/// Provision a temporary database cloned from the migration template.
pub fn provision_template_database(cluster: &ClusterHandle) -> Result<TemporaryDatabase, String> {
    let mut last_error = String::from("create database from template: no attempt made");
    for attempt in 1..=TEMPLATE_PROVISION_RETRIES {
        let outcome = ensure_template_database(cluster).and_then(|template_name| {
            let db_name = format!("test_{}", Uuid::new_v4());
            cluster
                .temporary_database_from_template(db_name.as_str(), template_name.as_str())
                .map_err(|err| format!("create database from template: {err:?}"))
        });
        match outcome {
            Ok(database) => return Ok(database),
            Err(error) => {
                last_error = format!("attempt {attempt}/{TEMPLATE_PROVISION_RETRIES}: {error}");
            }
        }
        if attempt < TEMPLATE_PROVISION_RETRIES {
            std::thread::sleep(TEMPLATE_PROVISION_RETRY_DELAY);
        }
    }
    Err(last_error)
}

/// Drop `table` to simulate schema loss.
pub fn drop_table(url: &str, table: &str) -> Result<(), String> {
    let mut client = Client::connect(url, NoTls).map_err(|err| format_postgres_error(&err))?;
    let escaped = table.replace('"', "\"\"");
    client
        .batch_execute(format!(r#"DROP TABLE IF EXISTS "{escaped}""#).as_str())
        .map_err(|err| format_postgres_error(&err))
}
