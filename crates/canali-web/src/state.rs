use std::sync::Arc;

use axum::response::{Html, IntoResponse, Redirect, Response};

use canali_db::{Handle, Store};

use crate::error::WebError;
use crate::views::{HtmlRenderer, Renderer, View};

pub type AppState = Arc<AppStateInner>;

pub struct AppStateInner {
    pub store: Store,
    pub renderer: Box<dyn Renderer>,
}

/// What a handler decided to do once its store work is done.
#[derive(Debug)]
pub enum Outcome {
    Render(View),
    Redirect(String),
}

impl AppStateInner {
    pub fn new(store: Store) -> Self {
        Self::with_renderer(store, Box::new(HtmlRenderer))
    }

    pub fn with_renderer(store: Store, renderer: Box<dyn Renderer>) -> Self {
        Self { store, renderer }
    }

    /// Runs `f` on a blocking thread with a fresh request-scoped handle.
    /// The handle is released when `f` returns, whatever the result.
    pub async fn with_store<F, T>(&self, f: F) -> Result<T, WebError>
    where
        F: FnOnce(&mut Handle) -> anyhow::Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let mut handle = self.store.handle();
        let result = tokio::task::spawn_blocking(move || {
            let result = f(&mut handle);
            handle.release();
            result
        })
        .await??;

        Ok(result)
    }

    pub fn respond(&self, outcome: Outcome) -> Result<Response, WebError> {
        match outcome {
            Outcome::Render(view) => {
                let page = self.renderer.render(&view).map_err(|source| WebError::Render {
                    template: view.template_name(),
                    source,
                })?;
                Ok(Html(page).into_response())
            }
            Outcome::Redirect(to) => Ok(Redirect::to(&to).into_response()),
        }
    }
}
