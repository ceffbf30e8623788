//! Shared HTML fragments.

/// Escape text for use in element content and quoted attributes.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Spinner shown while a page waits on the API.
pub fn render_loading(message: &str) -> String {
    format!(
        r#"<div class="loading" data-state="loading">
    <div class="spinner"></div>
    <p>{}</p>
</div>"#,
        escape_html(message)
    )
}

/// API failure notice. The message is shown as-is; there is no retry.
pub fn render_api_error(message: &str) -> String {
    format!(
        r#"<div class="api-error" data-state="error">
    <strong>API Error:</strong> {}
    <p>Make sure the API server is running: <code>pnpm dev</code></p>
</div>"#,
        escape_html(message)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom's & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom&#39;s &amp; Jerry&#39;s&lt;/a&gt;"
        );
    }

    #[test]
    fn test_api_error_escapes_message() {
        let html = render_api_error("Request failed: <refused>");
        assert!(html.contains("Request failed: &lt;refused&gt;"));
    }
}
