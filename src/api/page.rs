use std::borrow::Cow;

use axum::{extract::State, response::Html};
use tera::{Context, Tera};

use crate::api::{PagePath, error::ApiError};

/// Reads the checkout page from disk on every call and renders it with an
/// empty context.
#[tracing::instrument(skip_all)]
pub async fn render(State(page): State<PagePath>) -> Result<Html<String>, ApiError> {
    let source = tokio::fs::read_to_string(page.as_path())
        .await
        .map_err(ApiError::LoadTemplate)?;

    let source = only_variable_tags(&source);

    let html =
        Tera::one_off(&source, &Context::new(), true).map_err(ApiError::RenderTemplate)?;

    Ok(Html(html))
}

/// Only `{{ }}` is template syntax on the page. Block and comment openers
/// are re-emitted as string literals so inline CSS and scripts stay intact.
fn only_variable_tags(source: &str) -> Cow<'_, str> {
    if !source.contains("{%") && !source.contains("{#") {
        return Cow::Borrowed(source);
    }

    Cow::Owned(
        source
            .replace("{%", r#"{{ "{%" }}"#)
            .replace("{#", r#"{{ "{#" }}"#),
    )
}
