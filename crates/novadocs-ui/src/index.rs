//! Index document rendering: configuration injection and asset path
//! rewriting. Plain text transformations, no HTML parsing — matches inside
//! inline scripts or comments are rewritten too, which is accepted.

use crate::config::UiConfig;

/// Transform the raw `index.html` for serving under `mount`: inject the
/// runtime configuration block before the first `</head>`, then prefix
///`src`/`href` asset references with the mount path. Deterministic for a
/// given input and configuration.
pub(crate) fn render(html: &str, config: &UiConfig, api_docs_path: &str) -> String {
    let mount = config.normalized_path();
    let script = config_script(config, api_docs_path, &mount);
    let html = html.replacen("</head>", &format!("{script}</head>"), 1);
    rewrite_asset_paths(&html, &mount)
}

/// The `window.__NOVADOCS_CONFIG__` block the frontend reads at startup.
/// Values are interpolated verbatim — a quote character in a theme value
/// will break the markup, the frontend contract has no escaping.
fn config_script(config: &UiConfig, api_docs_path: &str, mount: &str) -> String {
    format!(
        r#"<script>
  window.__NOVADOCS_CONFIG__ = {{
    basePath: '{mount}',
    apiDocsPath: '{api_docs_path}',
    title: 'API Documentation',
    theme: {{
      primaryColor: '{primary}',
      secondaryColor: '{secondary}',
      fontFamily: '{font}'
    }},
    layout: {{
      type: '{layout}'
    }}
  }};
</script>
"#,
        primary = config.theme.primary_color,
        secondary = config.theme.secondary_color,
        font = config.theme.font_family,
        layout = config.layout.layout_type,
    )
}

/// Rewrite `src="./`, `href="./` and the remaining absolute `src="/`,
/// `href="/` reference prefixes to start with the mount path. One
/// left-to-right pass; rewritten output is never rescanned, so a reference
/// is prefixed exactly once. Dot-relative forms are matched before absolute
/// ones at each position.
fn rewrite_asset_paths(html: &str, mount: &str) -> String {
    let src_to = format!("src=\"{mount}/");
    let href_to = format!("href=\"{mount}/");
    let rules = [
        ("src=\"./", src_to.as_str()),
        ("href=\"./", href_to.as_str()),
        ("src=\"/", src_to.as_str()),
        ("href=\"/", href_to.as_str()),
    ];

    let mut out = String::with_capacity(html.len() + 64);
    let mut rest = html;
    'scan: while !rest.is_empty() {
        for (pattern, replacement) in rules {
            if let Some(tail) = rest.strip_prefix(pattern) {
                out.push_str(replacement);
                rest = tail;
                continue 'scan;
            }
        }
        let mut chars = rest.chars();
        if let Some(c) = chars.next() {
            out.push(c);
            rest = chars.as_str();
        }
    }
    out
}
