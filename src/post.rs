//! Input record describing the post a card set is generated for.

use time::OffsetDateTime;
use time::macros::format_description;

use crate::foundation::error::{CardError, CardResult};

/// Maximum number of characters taken from `content` when no excerpt exists.
pub const CONTENT_EXCERPT_CHARS: usize = 300;

/// A blog/community post as supplied by the caller. Never mutated.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ShareablePost {
    pub title: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub meta_description: Option<String>,
    /// Full body; may contain HTML markup.
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub featured_image_url: Option<String>,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub color_palette: Option<String>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub published_at: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(default)]
    pub author_name: Option<String>,
}

impl ShareablePost {
    /// Parse a post from JSON bytes.
    pub fn from_json(bytes: &[u8]) -> CardResult<Self> {
        serde_json::from_slice(bytes)
            .map_err(|e| CardError::validation(format!("invalid post json: {e}")))
    }

    /// Slug used in output file names.
    pub fn file_slug(&self) -> String {
        let explicit = self
            .slug
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(slug::slugify);
        let s = explicit.unwrap_or_else(|| slug::slugify(&self.title));
        if s.is_empty() { "post".to_owned() } else { s }
    }

    /// Text shown under the title on the summary card.
    ///
    /// Explicit excerpt, else meta description, else the leading characters of
    /// the body with markup stripped.
    pub fn summary_text(&self) -> String {
        let pick = |v: &Option<String>| {
            v.as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_owned)
        };
        if let Some(s) = pick(&self.excerpt).or_else(|| pick(&self.meta_description)) {
            return s;
        }
        let plain = strip_html(&self.content);
        plain.chars().take(CONTENT_EXCERPT_CHARS).collect::<String>()
    }

    /// Publication date (falling back to creation date) as `Jan 5, 2026`.
    pub fn date_label(&self) -> String {
        let ts = self.published_at.unwrap_or(self.created_at);
        let fmt = format_description!("[month repr:short] [day padding:none], [year]");
        ts.format(&fmt).unwrap_or_default()
    }

    /// Upper-cased category with separators turned into spaces.
    pub fn category_label(&self) -> String {
        self.category
            .trim()
            .chars()
            .map(|c| if c == '_' || c == '-' { ' ' } else { c })
            .collect::<String>()
            .to_uppercase()
    }

    /// Trimmed author display name, if any.
    pub fn author(&self) -> Option<&str> {
        self.author_name
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// Non-empty tags in input order.
    pub fn clean_tags(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(|t| t.trim()).filter(|t| !t.is_empty())
    }
}

/// Remove markup tags, decode the handful of entities editors emit, and collapse whitespace.
pub fn strip_html(html: &str) -> String {
    let mut text = String::with_capacity(html.len());
    let mut in_tag = false;
    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => {
                in_tag = false;
                text.push(' ');
            }
            _ if !in_tag => text.push(c),
            _ => {}
        }
    }

    let decoded = text
        .replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&");

    decoded.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
#[path = "../tests/unit/post.rs"]
mod tests;
