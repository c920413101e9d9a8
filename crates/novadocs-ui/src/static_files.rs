//! The wildcard route serving the packaged UI: exact asset lookup first,
//! SPA fallback to the transformed index document for everything else.

use std::sync::Arc;

use axum::Router;
use axum::extract::State;
use axum::http::{StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use rust_embed::Embed;

use crate::config::UiConfig;
use crate::error::UiError;
use crate::{index, mime};

#[derive(Embed)]
#[folder = "assets"]
struct Assets;

/// Captured once at registration, shared read-only across requests.
struct UiState {
    config: UiConfig,
    mount: String,
    api_docs_path: String,
}

/// Build the UI router: the mount path, the mount path with a trailing
/// slash, and a wildcard below it, all handled by [`handle_request`].
/// With `enabled = false` the returned router has no routes.
///
/// `api_docs_path` is where the host serves its OpenAPI document; it is
/// injected into the index page for the frontend to fetch.
pub fn router(config: UiConfig, api_docs_path: &str) -> Router {
    if !config.enabled {
        tracing::debug!("NovaDocs UI disabled, registering no routes");
        return Router::new();
    }

    let mount = config.normalized_path();
    let state = Arc::new(UiState {
        mount: mount.clone(),
        api_docs_path: api_docs_path.to_string(),
        config,
    });

    let wildcard = if mount == "/" {
        "/{*path}".to_string()
    } else {
        format!("{mount}/{{*path}}")
    };

    let mut router = Router::new()
        .route(&mount, get(handle_request))
        .route(&wildcard, get(handle_request));
    if mount != "/" {
        router = router.route(&format!("{mount}/"), get(handle_request));
    }
    router.with_state(state)
}

async fn handle_request(State(state): State<Arc<UiState>>, uri: Uri) -> Response {
    // The registered routes all lie under the mount prefix; a path without
    // it is not ours to answer.
    let Some(relative) = relative_path(uri.path(), &state.mount) else {
        return StatusCode::NOT_FOUND.into_response();
    };

    if relative.is_empty() {
        return serve_index(&state);
    }

    let key = format!("{}/{relative}", state.config.version);
    match Assets::get(&key) {
        Some(file) => {
            let content_type = mime::content_type_for(relative);
            tracing::debug!("serving {key} as {content_type}");
            (
                [
                    (header::CONTENT_TYPE, content_type),
                    (header::CACHE_CONTROL, "max-age=3600"),
                ],
                file.data,
            )
                .into_response()
        }
        None => {
            // Not a packaged file: hand the URL to the frontend router.
            tracing::debug!("no asset at {key}, falling back to index");
            serve_index(&state)
        }
    }
}

/// Portion of the request path after the first occurrence of the mount
/// prefix, with one leading slash stripped. `None` when the path does not
/// contain the prefix.
fn relative_path<'a>(path: &'a str, mount: &str) -> Option<&'a str> {
    let at = path.find(mount)?;
    let relative = &path[at + mount.len()..];
    Some(relative.strip_prefix('/').unwrap_or(relative))
}

fn serve_index(state: &UiState) -> Response {
    match render_index(state) {
        Ok(html) => ([(header::CONTENT_TYPE, "text/html")], html).into_response(),
        Err(e) => {
            tracing::error!("cannot serve index.html: {e}");
            e.into_response()
        }
    }
}

fn render_index(state: &UiState) -> Result<String, UiError> {
    let key = format!("{}/index.html", state.config.version);
    let file =
        Assets::get(&key).ok_or_else(|| UiError::IndexMissing(state.config.version.clone()))?;
    let html = String::from_utf8(file.data.into_owned())?;
    Ok(index::render(&html, &state.config, &state.api_docs_path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_path_strips_mount_and_one_slash() {
        assert_eq!(
            relative_path("/novadocs/app.js", "/novadocs"),
            Some("app.js")
        );
        assert_eq!(relative_path("/novadocs/", "/novadocs"), Some(""));
        assert_eq!(relative_path("/novadocs", "/novadocs"), Some(""));
    }

    #[test]
    fn relative_path_keeps_inner_slashes() {
        assert_eq!(
            relative_path("/novadocs/img/logo.svg", "/novadocs"),
            Some("img/logo.svg")
        );
    }

    #[test]
    fn relative_path_uses_first_occurrence_of_the_prefix() {
        assert_eq!(
            relative_path("/ctx/novadocs/style.css", "/novadocs"),
            Some("style.css")
        );
    }

    #[test]
    fn relative_path_without_the_prefix_is_none() {
        assert_eq!(relative_path("/elsewhere/app.js", "/novadocs"), None);
    }

    #[test]
    fn bundled_assets_match_the_crate_version() {
        let key = format!("{}/index.html", env!("CARGO_PKG_VERSION"));
        assert!(
            Assets::get(&key).is_some(),
            "packaged assets out of sync with the crate version"
        );
    }
}
