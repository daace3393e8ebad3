use anyhow::Result;
use rusqlite::Connection;
use std::path::Path;
use tracing::info;

const SCHEMA: &str = "
    CREATE TABLE canali (
        id              INTEGER PRIMARY KEY,
        nome            TEXT NOT NULL,
        numero_iscritti INTEGER NOT NULL DEFAULT 0,
        categoria       TEXT NOT NULL
    );

    CREATE TABLE video (
        id          INTEGER PRIMARY KEY,
        canale_id   INTEGER NOT NULL,
        titolo      TEXT NOT NULL,
        durata      INTEGER NOT NULL,
        immagine    TEXT
    );
";

/// Creates the store file with both tables if nothing exists at `path`.
/// Returns `true` when the file was created. An existing file is left untouched.
pub fn ensure_schema(path: &Path) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let conn = Connection::open(path)?;
    conn.execute_batch(SCHEMA)?;
    conn.close().map_err(|(_, e)| e)?;

    info!("Created schema at {}", path.display());
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_names(path: &Path) -> Vec<String> {
        let conn = Connection::open(path).unwrap();
        let mut stmt = conn
            .prepare("SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name")
            .unwrap();
        stmt.query_map([], |row| row.get(0))
            .unwrap()
            .collect::<std::result::Result<Vec<String>, _>>()
            .unwrap()
    }

    #[test]
    fn creates_both_tables_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.db");

        assert!(ensure_schema(&path).unwrap());
        assert_eq!(table_names(&path), vec!["canali", "video"]);

        assert!(!ensure_schema(&path).unwrap());
        assert_eq!(table_names(&path), vec!["canali", "video"]);
    }

    #[test]
    fn creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data").join("nested").join("app.db");

        assert!(ensure_schema(&path).unwrap());
        assert!(path.exists());
    }

    #[test]
    fn existing_file_is_not_touched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.db");
        Connection::open(&path)
            .unwrap()
            .execute_batch("CREATE TABLE other (x INTEGER);")
            .unwrap();

        assert!(!ensure_schema(&path).unwrap());
        assert_eq!(table_names(&path), vec!["other"]);
    }
}
