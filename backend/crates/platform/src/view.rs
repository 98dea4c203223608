//! View rendering
//!
//! Handlers never build markup. They hand a view name and a serializable model to a
//! [`ViewRenderer`] and get a page back. [`HtmlRenderer`] is the built-in renderer: a bare
//! HTML document carrying the model as escaped JSON, which is enough for browsers and
//! for tests that want to inspect the model. Swap in a template engine by implementing
//! the trait.

use std::sync::Arc;

use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ViewError {
    #[error("Unknown view: {0}")]
    UnknownView(String),

    #[error("View model could not be serialized: {0}")]
    Model(#[from] serde_json::Error),
}

pub trait ViewRenderer: Send + Sync + 'static {
    /// Render `view` with `model` into a complete HTML document
    fn render(&self, view: &str, model: &Value) -> Result<String, ViewError>;
}

pub type SharedRenderer = Arc<dyn ViewRenderer>;

/// Minimal HTML renderer
///
/// The document title comes from the model's `title` field when present.
#[derive(Debug, Clone, Default)]
pub struct HtmlRenderer;

impl HtmlRenderer {
    pub fn shared() -> SharedRenderer {
        Arc::new(Self)
    }
}

impl ViewRenderer for HtmlRenderer {
    fn render(&self, view: &str, model: &Value) -> Result<String, ViewError> {
        if view.is_empty() {
            return Err(ViewError::UnknownView(view.to_string()));
        }

        let title = model
            .get("title")
            .and_then(Value::as_str)
            .unwrap_or(view);
        let body = serde_json::to_string_pretty(model)?;

        Ok(format!(
            "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>{}</title></head>\n\
             <body data-view=\"{}\">\n<pre id=\"model\">{}</pre>\n</body>\n</html>\n",
            escape_html(title),
            escape_html(view),
            escape_html(&body),
        ))
    }
}

/// Render into a `200 OK` HTML response
pub fn render_view<M: Serialize>(renderer: &dyn ViewRenderer, view: &str, model: &M) -> Response {
    render_view_with_status(renderer, StatusCode::OK, view, model)
}

/// Render with an explicit status; a rendering failure becomes a bare 500
pub fn render_view_with_status<M: Serialize>(
    renderer: &dyn ViewRenderer,
    status: StatusCode,
    view: &str,
    model: &M,
) -> Response {
    let rendered = serde_json::to_value(model)
        .map_err(ViewError::from)
        .and_then(|model| renderer.render(view, &model));

    match rendered {
        Ok(html) => (
            status,
            [(
                header::CONTENT_TYPE,
                HeaderValue::from_static("text/html; charset=utf-8"),
            )],
            html,
        )
            .into_response(),
        Err(e) => {
            tracing::error!(view, error = %e, "View rendering failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// `302 Found` to `location` (axum's `Redirect::to` answers 303)
pub fn found(location: &str) -> Response {
    match HeaderValue::from_str(location) {
        Ok(value) => (StatusCode::FOUND, [(header::LOCATION, value)]).into_response(),
        Err(_) => {
            tracing::error!(location, "Redirect target is not a valid header value");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(ch),
        }
    }
    out
}
