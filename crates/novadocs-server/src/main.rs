use std::net::SocketAddr;
use std::path::PathBuf;

use axum::routing::get;
use axum::{Json, Router};
use clap::Parser;
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;

use novadocs_ui::UiConfig;

#[derive(Parser)]
#[command(name = "novadocs-server")]
#[command(about = "NovaDocs demo host — serves the embedded API-documentation viewer")]
struct Cli {
    /// Path to the configuration file (TOML); defaults apply without one
    #[arg(long, short)]
    config: Option<PathBuf>,
}

/// Host config: listener address plus the `[ui]` section and the
/// `[api_docs]` section the UI's document path is sourced from.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ServerConfig {
    #[serde(default = "default_listen_addr")]
    listen_addr: String,
    #[serde(default)]
    ui: UiConfig,
    #[serde(default)]
    api_docs: ApiDocsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ApiDocsConfig {
    #[serde(default = "default_api_docs_path")]
    path: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            ui: UiConfig::default(),
            api_docs: ApiDocsConfig::default(),
        }
    }
}

impl Default for ApiDocsConfig {
    fn default() -> Self {
        Self {
            path: default_api_docs_path(),
        }
    }
}

fn default_listen_addr() -> String {
    "0.0.0.0:8080".to_string()
}
fn default_api_docs_path() -> String {
    "/v3/api-docs".to_string()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("novadocs=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let config: ServerConfig = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from {}", path.display());
            let content = std::fs::read_to_string(path)?;
            toml::from_str(&content)?
        }
        None => ServerConfig::default(),
    };

    let app = Router::new()
        .route(&config.api_docs.path, get(openapi_document))
        .merge(novadocs_ui::router(
            config.ui.clone(),
            &config.api_docs.path,
        ))
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = config.listen_addr.parse()?;
    tracing::info!("Starting NovaDocs server on http://{addr}");
    if config.ui.enabled {
        tracing::info!("  UI mounted at {}", config.ui.normalized_path());
    } else {
        tracing::info!("  UI disabled");
    }
    tracing::info!("  OpenAPI document at {}", config.api_docs.path);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Stand-in OpenAPI document. A real host replaces this route with its own
/// generated description; the UI only needs the path to fetch it from.
async fn openapi_document() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "openapi": "3.0.1",
        "info": {
            "title": "NovaDocs Demo API",
            "description": "Built-in document served by novadocs-server.",
            "version": env!("CARGO_PKG_VERSION"),
        },
        "paths": {
            "/status": {
                "get": {
                    "summary": "Server status",
                    "operationId": "getStatus",
                    "tags": ["system"],
                    "responses": {
                        "200": {
                            "description": "Current status",
                            "content": {
                                "application/json": {
                                    "schema": { "$ref": "#/components/schemas/Status" }
                                }
                            }
                        }
                    }
                }
            },
            "/items": {
                "get": {
                    "summary": "List items",
                    "operationId": "listItems",
                    "tags": ["items"],
                    "responses": {
                        "200": {
                            "description": "All known items",
                            "content": {
                                "application/json": {
                                    "schema": {
                                        "type": "array",
                                        "items": { "$ref": "#/components/schemas/Item" }
                                    }
                                }
                            }
                        }
                    }
                },
                "post": {
                    "summary": "Create an item",
                    "operationId": "createItem",
                    "tags": ["items"],
                    "requestBody": {
                        "required": true,
                        "content": {
                            "application/json": {
                                "schema": { "$ref": "#/components/schemas/Item" }
                            }
                        }
                    },
                    "responses": {
                        "201": { "description": "Created" }
                    }
                }
            },
            "/items/{id}": {
                "get": {
                    "summary": "Fetch one item",
                    "operationId": "getItem",
                    "tags": ["items"],
                    "parameters": [{
                        "name": "id",
                        "in": "path",
                        "required": true,
                        "schema": { "type": "integer", "format": "int64" }
                    }],
                    "responses": {
                        "200": {
                            "description": "The item",
                            "content": {
                                "application/json": {
                                    "schema": { "$ref": "#/components/schemas/Item" }
                                }
                            }
                        },
                        "404": { "description": "No such item" }
                    }
                },
                "delete": {
                    "summary": "Delete an item",
                    "operationId": "deleteItem",
                    "tags": ["items"],
                    "parameters": [{
                        "name": "id",
                        "in": "path",
                        "required": true,
                        "schema": { "type": "integer", "format": "int64" }
                    }],
                    "responses": {
                        "204": { "description": "Deleted" }
                    }
                }
            }
        },
        "components": {
            "schemas": {
                "Status": {
                    "type": "object",
                    "properties": {
                        "version": { "type": "string" },
                        "uptime_seconds": { "type": "integer", "format": "int64" }
                    }
                },
                "Item": {
                    "type": "object",
                    "required": ["id", "name"],
                    "properties": {
                        "id": { "type": "integer", "format": "int64" },
                        "name": { "type": "string" },
                        "description": { "type": "string" }
                    }
                }
            }
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config: ServerConfig = toml::from_str("").expect("parse empty config");
        assert_eq!(config.listen_addr, "0.0.0.0:8080");
        assert!(config.ui.enabled);
        assert_eq!(config.ui.path, "/novadocs");
        assert_eq!(config.api_docs.path, "/v3/api-docs");
    }

    #[test]
    fn sections_override_defaults() {
        let config: ServerConfig = toml::from_str(
            r##"
            listen_addr = "127.0.0.1:9000"

            [ui]
            path = "/docs"

            [ui.theme]
            primary_color = "#0a0a0a"

            [ui.layout]
            type = "single-pane"

            [api_docs]
            path = "/openapi.json"
            "##,
        )
        .expect("parse config");

        assert_eq!(config.listen_addr, "127.0.0.1:9000");
        assert_eq!(config.ui.path, "/docs");
        assert_eq!(config.ui.theme.primary_color, "#0a0a0a");
        assert_eq!(config.ui.theme.secondary_color, "#424242");
        assert_eq!(config.ui.layout.layout_type, "single-pane");
        assert_eq!(config.api_docs.path, "/openapi.json");
    }

    #[test]
    fn ui_can_be_disabled() {
        let config: ServerConfig = toml::from_str(
            r#"
            [ui]
            enabled = false
            "#,
        )
        .expect("parse config");
        assert!(!config.ui.enabled);
    }
}
