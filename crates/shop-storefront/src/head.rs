//! The session document head and the metadata updater.
//!
//! The served HTML never contains page metadata. It is written into the live
//! document after each render, which crawlers that don't run scripts never see.

use crate::html::escape_html;

/// Metadata a page asks for after it renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeoHead {
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
    /// Defaults to `"website"`.
    pub og_type: Option<String>,
    /// Falls back to the document location.
    pub canonical_url: Option<String>,
}

impl SeoHead {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            image_url: None,
            og_type: None,
            canonical_url: None,
        }
    }

    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    pub fn with_og_type(mut self, og_type: impl Into<String>) -> Self {
        self.og_type = Some(og_type.into());
        self
    }

    pub fn with_canonical_url(mut self, url: impl Into<String>) -> Self {
        self.canonical_url = Some(url.into());
        self
    }
}

/// Attribute a meta tag is keyed by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetaKey {
    /// `<meta name="...">`
    Name(String),
    /// `<meta property="...">`
    Property(String),
}

impl MetaKey {
    pub fn name(name: impl Into<String>) -> Self {
        MetaKey::Name(name.into())
    }

    pub fn property(property: impl Into<String>) -> Self {
        MetaKey::Property(property.into())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaTag {
    pub key: MetaKey,
    pub content: String,
}

impl MetaTag {
    fn render(&self) -> String {
        let (attr, value) = match &self.key {
            MetaKey::Name(v) => ("name", v),
            MetaKey::Property(v) => ("property", v),
        };
        format!(
            r#"<meta {}="{}" content="{}">"#,
            attr,
            escape_html(value),
            escape_html(&self.content)
        )
    }
}

/// In-memory stand-in for the browser document of one session.
#[derive(Debug, Clone)]
pub struct Document {
    title: String,
    location: String,
    meta: Vec<MetaTag>,
}

impl Document {
    /// A fresh document as served: a title, no page metadata.
    pub fn new(title: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            location: location.into(),
            meta: Vec::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn set_location(&mut self, location: impl Into<String>) {
        self.location = location.into();
    }

    pub fn meta_tags(&self) -> &[MetaTag] {
        &self.meta
    }

    /// Content of the tag keyed by `key`.
    pub fn meta(&self, key: &MetaKey) -> Option<&str> {
        self.meta
            .iter()
            .find(|tag| tag.key == *key)
            .map(|tag| tag.content.as_str())
    }

    /// Update the tag keyed by `key`, appending it if missing.
    pub fn set_meta(&mut self, key: MetaKey, content: impl Into<String>) {
        let content = content.into();
        match self.meta.iter_mut().find(|tag| tag.key == key) {
            Some(tag) => tag.content = content,
            None => self.meta.push(MetaTag { key, content }),
        }
    }

    /// Write the page metadata into the head.
    ///
    /// Tags are matched by attribute, so repeated calls overwrite rather than
    /// duplicate.
    pub fn apply_seo(&mut self, seo: &SeoHead) {
        self.title = seo.title.clone();
        self.set_meta(MetaKey::name("description"), seo.description.clone());

        let image = seo.image_url.clone().unwrap_or_default();
        let og_url = seo
            .canonical_url
            .clone()
            .unwrap_or_else(|| self.location.clone());

        let og_tags = [
            ("og:title", seo.title.clone()),
            ("og:description", seo.description.clone()),
            ("og:type", seo.og_type.clone().unwrap_or_else(|| "website".to_string())),
            ("og:image", image.clone()),
            ("og:url", og_url),
        ];
        for (property, content) in og_tags {
            self.set_meta(MetaKey::property(property), content);
        }

        let twitter_tags = [
            ("twitter:card", "summary_large_image".to_string()),
            ("twitter:title", seo.title.clone()),
            ("twitter:description", seo.description.clone()),
            ("twitter:image", image),
        ];
        for (name, content) in twitter_tags {
            self.set_meta(MetaKey::name(name), content);
        }

        tracing::warn!(
            title = %seo.title,
            "meta tags were set by script; crawlers that do not execute scripts will not see them"
        );
    }

    /// Serialize the current head.
    pub fn render_head(&self) -> String {
        let mut html = String::new();
        html.push_str("<head>\n");
        html.push_str("<meta charset=\"UTF-8\">\n");
        html.push_str(&format!("<title>{}</title>\n", escape_html(&self.title)));
        for tag in &self.meta {
            html.push_str(&tag.render());
            html.push('\n');
        }
        html.push_str("</head>\n");
        html
    }

    /// The HTML every route serves before scripts run: an empty mount point.
    pub fn initial_html(title: &str) -> String {
        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{}</title>
</head>
<body>
<div id="root"></div>
<script type="module" src="/src/main.tsx"></script>
</body>
</html>
"#,
            escape_html(title)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn document() -> Document {
        Document::new("FakeShop", "https://fakeshop.example.com/cart")
    }

    #[test]
    fn test_apply_seo_sets_title_and_tags() {
        let mut doc = document();
        doc.apply_seo(&SeoHead::new("Your Cart - FakeShop", "Review items"));

        assert_eq!(doc.title(), "Your Cart - FakeShop");
        assert_eq!(doc.meta(&MetaKey::name("description")), Some("Review items"));
        assert_eq!(doc.meta(&MetaKey::property("og:type")), Some("website"));
        assert_eq!(doc.meta(&MetaKey::property("og:image")), Some(""));
        assert_eq!(
            doc.meta(&MetaKey::property("og:url")),
            Some("https://fakeshop.example.com/cart")
        );
        assert_eq!(
            doc.meta(&MetaKey::name("twitter:card")),
            Some("summary_large_image")
        );
        assert_eq!(doc.meta_tags().len(), 10);
    }

    #[test]
    fn test_apply_seo_twice_does_not_duplicate() {
        let mut doc = document();
        doc.apply_seo(&SeoHead::new("First", "one"));
        doc.apply_seo(
            &SeoHead::new("Lamp - FakeShop", "Warm light")
                .with_image("https://img.test/lamp.jpg")
                .with_og_type("product")
                .with_canonical_url("https://fakeshop.example.com/products/1"),
        );

        assert_eq!(doc.meta_tags().len(), 10);
        assert_eq!(doc.meta(&MetaKey::property("og:title")), Some("Lamp - FakeShop"));
        assert_eq!(doc.meta(&MetaKey::property("og:type")), Some("product"));
        assert_eq!(
            doc.meta(&MetaKey::property("og:url")),
            Some("https://fakeshop.example.com/products/1")
        );
        assert_eq!(
            doc.meta(&MetaKey::name("twitter:image")),
            Some("https://img.test/lamp.jpg")
        );
    }

    #[test]
    fn test_name_and_property_keys_are_distinct() {
        let mut doc = document();
        doc.set_meta(MetaKey::name("og:title"), "by name");
        doc.set_meta(MetaKey::property("og:title"), "by property");
        assert_eq!(doc.meta_tags().len(), 2);
    }

    #[test]
    fn test_render_head_escapes_content() {
        let mut doc = document();
        doc.apply_seo(&SeoHead::new("Tom & Jerry", "\"quoted\""));
        let head = doc.render_head();

        assert!(head.contains("<title>Tom &amp; Jerry</title>"));
        assert!(head.contains(r#"<meta name="description" content="&quot;quoted&quot;">"#));
    }

    #[test]
    fn test_initial_html_is_empty_shell() {
        let html = Document::initial_html("FakeShop");
        assert!(html.contains(r#"<div id="root"></div>"#));
        assert!(!html.contains("og:title"));
        assert!(!html.contains("description"));
    }
}
