use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

/// Failures that are not the user's fault. Validation problems never end up
/// here; they are rendered back into the form.
#[derive(Debug, Error)]
pub enum WebError {
    #[error("store error: {0:#}")]
    Store(#[from] anyhow::Error),
    #[error("blocking task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
    #[error("render error in {template}: {source:#}")]
    Render {
        template: &'static str,
        source: anyhow::Error,
    },
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        error!("{}", self);
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_error_is_500() {
        let response = WebError::Store(anyhow::anyhow!("disk I/O error")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn render_error_names_template() {
        let err = WebError::Render {
            template: "canali.html",
            source: anyhow::anyhow!("boom"),
        };
        assert_eq!(err.to_string(), "render error in canali.html: boom");
    }
}
