use serde::{Deserialize, Serialize};

/// NovaDocs UI configuration, typically the `[ui]` section of the host's
/// config file. Captured once at route registration and immutable afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Whether the UI routes are registered at all.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// URL prefix the UI is served under.
    #[serde(default = "default_path")]
    pub path: String,
    /// Versioned subdirectory of the packaged assets to serve.
    /// Defaults to this crate's own version, which matches the bundled build.
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub layout: LayoutConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    #[serde(default = "default_primary_color")]
    pub primary_color: String,
    #[serde(default = "default_secondary_color")]
    pub secondary_color: String,
    #[serde(default = "default_font_family")]
    pub font_family: String,
    /// Extra CSS file to include. Declared for hosts that post-process the
    /// UI; the router itself does not consume it.
    #[serde(default)]
    pub custom_css_path: Option<String>,
    /// Extra JavaScript file to include. Same status as `custom_css_path`.
    #[serde(default)]
    pub custom_js_path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Pane arrangement: "three-pane", "two-pane" or "single-pane".
    #[serde(rename = "type", default = "default_layout_type")]
    pub layout_type: String,
}

impl UiConfig {
    /// Mount path with a leading slash; an empty path collapses to "/".
    pub fn normalized_path(&self) -> String {
        if self.path.is_empty() {
            return "/".to_string();
        }
        if self.path.starts_with('/') {
            self.path.clone()
        } else {
            format!("/{}", self.path)
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            path: default_path(),
            version: default_version(),
            theme: ThemeConfig::default(),
            layout: LayoutConfig::default(),
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            primary_color: default_primary_color(),
            secondary_color: default_secondary_color(),
            font_family: default_font_family(),
            custom_css_path: None,
            custom_js_path: None,
        }
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            layout_type: default_layout_type(),
        }
    }
}

fn default_enabled() -> bool {
    true
}
fn default_path() -> String {
    "/novadocs".to_string()
}
fn default_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
fn default_primary_color() -> String {
    "#1976d2".to_string()
}
fn default_secondary_color() -> String {
    "#424242".to_string()
}
fn default_font_family() -> String {
    "Inter, system-ui, Avenir, Helvetica, Arial, sans-serif".to_string()
}
fn default_layout_type() -> String {
    "three-pane".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = UiConfig::default();
        assert!(config.enabled);
        assert_eq!(config.path, "/novadocs");
        assert_eq!(config.version, env!("CARGO_PKG_VERSION"));
        assert_eq!(config.theme.primary_color, "#1976d2");
        assert_eq!(config.theme.secondary_color, "#424242");
        assert_eq!(config.layout.layout_type, "three-pane");
        assert!(config.theme.custom_css_path.is_none());
        assert!(config.theme.custom_js_path.is_none());
    }

    #[test]
    fn normalized_path_adds_leading_slash() {
        let config = UiConfig {
            path: "docs".to_string(),
            ..UiConfig::default()
        };
        assert_eq!(config.normalized_path(), "/docs");
    }

    #[test]
    fn normalized_path_keeps_existing_slash() {
        let config = UiConfig {
            path: "/docs".to_string(),
            ..UiConfig::default()
        };
        assert_eq!(config.normalized_path(), "/docs");
    }

    #[test]
    fn normalized_path_empty_collapses_to_root() {
        let config = UiConfig {
            path: String::new(),
            ..UiConfig::default()
        };
        assert_eq!(config.normalized_path(), "/");
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let config: UiConfig = toml::from_str(
            r##"
            path = "/api-docs-ui"

            [theme]
            primary_color = "#112233"
            "##,
        )
        .unwrap();
        assert!(config.enabled);
        assert_eq!(config.path, "/api-docs-ui");
        assert_eq!(config.theme.primary_color, "#112233");
        assert_eq!(config.theme.secondary_color, "#424242");
        assert_eq!(config.layout.layout_type, "three-pane");
    }

    #[test]
    fn layout_type_uses_type_key() {
        let config: UiConfig = toml::from_str(
            r#"
            [layout]
            type = "two-pane"
            "#,
        )
        .unwrap();
        assert_eq!(config.layout.layout_type, "two-pane");
    }
}
