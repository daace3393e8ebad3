use axum::{
    Form,
    extract::{Path, State},
    response::Response,
};
use tracing::debug;

use canali_types::VideoForm;

use crate::error::WebError;
use crate::state::{AppState, Outcome};
use crate::views::View;
use crate::{CHANNELS_PATH, channel_path};

/// GET /canali/{channel_id}/video/nuovo
pub async fn new_video_form(
    State(state): State<AppState>,
    Path(channel_id): Path<i64>,
) -> Result<Response, WebError> {
    let outcome = state
        .with_store(move |db| {
            Ok(match db.get_channel(channel_id)? {
                Some(channel) => Outcome::Render(View::VideoForm {
                    channel,
                    error: None,
                }),
                None => Outcome::Redirect(CHANNELS_PATH.to_string()),
            })
        })
        .await?;

    state.respond(outcome)
}

/// POST /canali/{channel_id}/video/nuovo — the parent channel is checked
/// before the form; an unknown channel redirects without looking at the body.
pub async fn create_video(
    State(state): State<AppState>,
    Path(channel_id): Path<i64>,
    Form(form): Form<VideoForm>,
) -> Result<Response, WebError> {
    let outcome = state
        .with_store(move |db| {
            let Some(channel) = db.get_channel(channel_id)? else {
                debug!("Channel {} not found, redirecting", channel_id);
                return Ok(Outcome::Redirect(CHANNELS_PATH.to_string()));
            };

            match form.validate(channel.id) {
                Ok(video) => {
                    db.create_video(&video)?;
                    Ok(Outcome::Redirect(channel_path(channel.id)))
                }
                Err(e) => {
                    debug!("Rejected video form for channel {}: {}", channel.id, e);
                    Ok(Outcome::Render(View::VideoForm {
                        channel,
                        error: Some(e),
                    }))
                }
            }
        })
        .await?;

    state.respond(outcome)
}
