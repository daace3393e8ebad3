/// A top-level catalog entry. Identifiers are assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Channel {
    pub id: i64,
    pub name: String,
    pub subscriber_count: i64,
    pub category: String,
}

/// A video listed under a channel. `duration` is in seconds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Video {
    pub id: i64,
    pub channel_id: i64,
    pub title: String,
    pub duration: i64,
    pub thumbnail: Option<String>,
}

// -- Insert payloads --
// Only produced by form validation, so every field already holds a checked value.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewChannel {
    pub name: String,
    pub subscriber_count: i64,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewVideo {
    pub channel_id: i64,
    pub title: String,
    pub duration: i64,
    pub thumbnail: Option<String>,
}
