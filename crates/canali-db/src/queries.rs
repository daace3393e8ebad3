use anyhow::Result;
use canali_types::{Channel, NewChannel, NewVideo, Video};
use rusqlite::{Connection, OptionalExtension, Row};
use tracing::info;

use crate::Handle;

impl Handle {
    // -- Channels --

    /// All channels, newest first.
    pub fn list_channels(&mut self) -> Result<Vec<Channel>> {
        query_channels(self.acquire()?)
    }

    pub fn get_channel(&mut self, id: i64) -> Result<Option<Channel>> {
        query_channel(self.acquire()?, id)
    }

    /// Inserts and commits a channel, returning its new id.
    pub fn create_channel(&mut self, channel: &NewChannel) -> Result<i64> {
        let conn = self.acquire()?;
        conn.execute(
            "INSERT INTO canali (nome, numero_iscritti, categoria) VALUES (?1, ?2, ?3)",
            (&channel.name, channel.subscriber_count, &channel.category),
        )?;
        let id = conn.last_insert_rowid();

        info!("Created channel {} ({})", id, channel.name);
        Ok(id)
    }

    // -- Videos --

    /// Videos of one channel, newest first.
    pub fn list_videos(&mut self, channel_id: i64) -> Result<Vec<Video>> {
        query_videos(self.acquire()?, channel_id)
    }

    /// Inserts and commits a video, returning its new id. The caller checks
    /// that the channel exists; the store does not.
    pub fn create_video(&mut self, video: &NewVideo) -> Result<i64> {
        let conn = self.acquire()?;
        conn.execute(
            "INSERT INTO video (canale_id, titolo, durata, immagine) VALUES (?1, ?2, ?3, ?4)",
            rusqlite::params![
                video.channel_id,
                &video.title,
                video.duration,
                &video.thumbnail
            ],
        )?;
        let id = conn.last_insert_rowid();

        info!("Created video {} on channel {}", id, video.channel_id);
        Ok(id)
    }
}

fn channel_from_row(row: &Row<'_>) -> rusqlite::Result<Channel> {
    Ok(Channel {
        id: row.get(0)?,
        name: row.get(1)?,
        subscriber_count: row.get(2)?,
        category: row.get(3)?,
    })
}

fn query_channels(conn: &Connection) -> Result<Vec<Channel>> {
    let mut stmt = conn.prepare(
        "SELECT id, nome, numero_iscritti, categoria FROM canali ORDER BY id DESC",
    )?;

    let rows = stmt
        .query_map([], channel_from_row)?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(rows)
}

fn query_channel(conn: &Connection, id: i64) -> Result<Option<Channel>> {
    let mut stmt =
        conn.prepare("SELECT id, nome, numero_iscritti, categoria FROM canali WHERE id = ?1")?;

    let row = stmt.query_row([id], channel_from_row).optional()?;

    Ok(row)
}

fn query_videos(conn: &Connection, channel_id: i64) -> Result<Vec<Video>> {
    let mut stmt = conn.prepare(
        "SELECT id, canale_id, titolo, durata, immagine
         FROM video
         WHERE canale_id = ?1
         ORDER BY id DESC",
    )?;

    let rows = stmt
        .query_map([channel_id], |row| {
            Ok(Video {
                id: row.get(0)?,
                channel_id: row.get(1)?,
                title: row.get(2)?,
                duration: row.get(3)?,
                thumbnail: row.get(4)?,
            })
        })?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(rows)
}
