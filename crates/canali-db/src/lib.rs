pub mod queries;
pub mod schema;

use anyhow::Result;
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

pub use schema::ensure_schema;

/// Location of the single-file store. Hands out one [`Handle`] per request;
/// connections are never shared between requests.
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    /// Creates the schema if the file does not exist yet.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        ensure_schema(&path)?;

        info!("Store ready at {}", path.display());
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// A request-scoped handle. Nothing is opened until the first `acquire`.
    pub fn handle(&self) -> Handle {
        Handle {
            path: self.path.clone(),
            conn: None,
        }
    }
}

/// Request-scoped connection, opened lazily and closed on `release` or drop.
pub struct Handle {
    path: PathBuf,
    conn: Option<Connection>,
}

impl Handle {
    /// Opens the connection on first use; later calls return the same one.
    pub fn acquire(&mut self) -> Result<&Connection> {
        let conn = match self.conn.take() {
            Some(conn) => conn,
            None => {
                debug!("Opening store handle on {}", self.path.display());
                Connection::open(&self.path)?
            }
        };
        let conn: &Connection = self.conn.insert(conn);
        Ok(conn)
    }

    pub fn is_open(&self) -> bool {
        self.conn.is_some()
    }

    /// Closes the connection. No-op if it was never acquired.
    pub fn release(&mut self) {
        if let Some(conn) = self.conn.take() {
            match conn.close() {
                Ok(()) => debug!("Released store handle"),
                Err((_, e)) => warn!("Failed to close store handle: {}", e),
            }
        }
    }
}

impl Drop for Handle {
    fn drop(&mut self) {
        self.release();
    }
}
