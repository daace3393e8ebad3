pub mod channels;
pub mod error;
pub mod state;
pub mod videos;
pub mod views;

use axum::{Router, routing::get};

pub use error::WebError;
pub use state::{AppState, AppStateInner};

pub const CHANNELS_PATH: &str = "/canali";
pub const NEW_CHANNEL_PATH: &str = "/canali/nuovo";

pub fn channel_path(channel_id: i64) -> String {
    format!("{}/{}", CHANNELS_PATH, channel_id)
}

pub fn new_video_path(channel_id: i64) -> String {
    format!("{}/{}/video/nuovo", CHANNELS_PATH, channel_id)
}

/// All routes of the catalog. Tracing and other layers are added by the caller.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(channels::index))
        .route(CHANNELS_PATH, get(channels::list_channels))
        .route(
            NEW_CHANNEL_PATH,
            get(channels::new_channel_form).post(channels::create_channel),
        )
        .route("/canali/{channel_id}", get(channels::view_channel))
        .route(
            "/canali/{channel_id}/video/nuovo",
            get(videos::new_video_form).post(videos::create_video),
        )
        .with_state(state)
}
