use axum::{
    Form,
    extract::{Path, State},
    response::{Redirect, Response},
};
use tracing::debug;

use canali_types::ChannelForm;

use crate::error::WebError;
use crate::state::{AppState, Outcome};
use crate::views::View;
use crate::CHANNELS_PATH;

/// GET / — the channel list is the home page.
pub async fn index() -> Redirect {
    Redirect::to(CHANNELS_PATH)
}

/// GET /canali
pub async fn list_channels(State(state): State<AppState>) -> Result<Response, WebError> {
    let channels = state.with_store(|db| db.list_channels()).await?;
    state.respond(Outcome::Render(View::ChannelList { channels }))
}

/// GET /canali/nuovo
pub async fn new_channel_form(State(state): State<AppState>) -> Result<Response, WebError> {
    state.respond(Outcome::Render(View::ChannelForm { error: None }))
}

/// POST /canali/nuovo — on success redirect to the list so a refresh does not resubmit.
/// Entered values are not echoed back on a validation error.
pub async fn create_channel(
    State(state): State<AppState>,
    Form(form): Form<ChannelForm>,
) -> Result<Response, WebError> {
    let channel = match form.validate() {
        Ok(channel) => channel,
        Err(e) => {
            debug!("Rejected channel form: {}", e);
            return state.respond(Outcome::Render(View::ChannelForm { error: Some(e) }));
        }
    };

    state
        .with_store(move |db| db.create_channel(&channel))
        .await?;

    state.respond(Outcome::Redirect(CHANNELS_PATH.to_string()))
}

/// GET /canali/{channel_id} — unknown ids fall back to the list.
pub async fn view_channel(
    State(state): State<AppState>,
    Path(channel_id): Path<i64>,
) -> Result<Response, WebError> {
    let outcome = state
        .with_store(move |db| {
            let Some(channel) = db.get_channel(channel_id)? else {
                debug!("Channel {} not found, redirecting", channel_id);
                return Ok(Outcome::Redirect(CHANNELS_PATH.to_string()));
            };
            let videos = db.list_videos(channel.id)?;
            Ok(Outcome::Render(View::ChannelDetail { channel, videos }))
        })
        .await?;

    state.respond(outcome)
}
