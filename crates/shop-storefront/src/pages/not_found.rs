use super::{PageStatus, PageView};
use crate::config::SiteConfig;
use crate::head::SeoHead;
use crate::html::escape_html;

/// Page for paths that match no route.
pub fn render_not_found(site: &SiteConfig, path: &str) -> PageView {
    let body = format!(
        r#"<div class="not-found">
    <h1>Page Not Found</h1>
    <p>Nothing lives at <code>{}</code>.</p>
    <a href="/">Back to Home</a>
</div>"#,
        escape_html(path)
    );

    PageView {
        body,
        seo: Some(SeoHead::new(
            format!("Page Not Found - {}", site.name),
            "The page you're looking for doesn't exist.",
        )),
        status: PageStatus::NotFound,
    }
}
