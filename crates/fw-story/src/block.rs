//! Story blocks and their plain-text rendering rules.
//!
//! Every block carries a `type` tag. Tags map onto a closed set of
//! [`BlockKind`]s, and each kind onto one [`RenderRule`]. Tags we do not know
//! become [`BlockKind::Unknown`] and render their text verbatim.

use serde_json::Value;

use crate::fields;

/// Tag assumed when a block has no `type`.
const DEFAULT_TAG: &str = "paragraph";

/// Known block types, plus a catch-all for everything else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockKind {
    Paragraph,
    Markdown,
    Html,
    Quote,
    Bullet,
    /// Section separator in the wiki editor.
    Pagefold,
    Heading,
    Code,
    Image,
    Reference,
    Transclusion,
    /// Any tag not listed above; holds the original tag.
    Unknown(String),
}

impl BlockKind {
    /// Resolve a `type` tag.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "paragraph" => Self::Paragraph,
            "markdown" => Self::Markdown,
            "html" => Self::Html,
            "quote" => Self::Quote,
            "bullet" => Self::Bullet,
            "pagefold" => Self::Pagefold,
            "heading" => Self::Heading,
            "code" => Self::Code,
            "image" => Self::Image,
            "reference" => Self::Reference,
            "transclusion" => Self::Transclusion,
            other => Self::Unknown(other.to_owned()),
        }
    }

    /// The tag this kind was resolved from.
    pub fn tag(&self) -> &str {
        match self {
            Self::Paragraph => "paragraph",
            Self::Markdown => "markdown",
            Self::Html => "html",
            Self::Quote => "quote",
            Self::Bullet => "bullet",
            Self::Pagefold => "pagefold",
            Self::Heading => "heading",
            Self::Code => "code",
            Self::Image => "image",
            Self::Reference => "reference",
            Self::Transclusion => "transclusion",
            Self::Unknown(tag) => tag,
        }
    }

    /// Rendering rule for this kind.
    pub fn rule(&self) -> RenderRule {
        match self {
            Self::Paragraph | Self::Markdown | Self::Html | Self::Quote | Self::Unknown(_) => {
                RenderRule::Verbatim
            }
            Self::Bullet => RenderRule::Bullets,
            Self::Pagefold | Self::Heading => RenderRule::Heading,
            Self::Code => RenderRule::Code,
            Self::Image => RenderRule::Image,
            Self::Reference | Self::Transclusion => RenderRule::Reference,
        }
    }
}

/// How a block's fields become text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderRule {
    /// Text as-is, no markup interpretation.
    Verbatim,
    /// One `- ` line per non-blank line of text.
    Bullets,
    /// `# ` followed by the trimmed text.
    Heading,
    /// Every line indented by four spaces.
    Code,
    /// `[img]` with optional caption and URL.
    Image,
    /// `↗` with the referenced slug and site.
    Reference,
}

/// A single story entry.
///
/// Optional fields only hold non-empty values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub kind: BlockKind,
    pub text: String,
    /// Image caption.
    pub caption: Option<String>,
    /// Image location, from `url`, or from `href` when `url` is missing.
    pub url: Option<String>,
    /// Referenced page slug.
    pub slug: Option<String>,
    /// Site hosting the referenced page.
    pub site: Option<String>,
}

impl Block {
    /// Create a block with only a kind and text.
    pub fn new(kind: BlockKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            caption: None,
            url: None,
            slug: None,
            site: None,
        }
    }

    /// Read a block from a story entry.
    ///
    /// Returns `None` if the entry is not a JSON object.
    pub fn from_value(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;
        Some(Self {
            kind: BlockKind::from_tag(&fields::string_or(obj, "type", DEFAULT_TAG)),
            text: fields::string_or(obj, "text", ""),
            caption: fields::non_empty(obj, "caption"),
            url: fields::opt_string(obj, "url")
                .or_else(|| fields::opt_string(obj, "href"))
                .filter(|url| !url.is_empty()),
            slug: fields::non_empty(obj, "slug"),
            site: fields::non_empty(obj, "site"),
        })
    }

    /// Render the block to text, possibly spanning several lines.
    ///
    /// Returns `None` when there is nothing to show.
    pub fn render(&self) -> Option<String> {
        let rendered = match self.kind.rule() {
            RenderRule::Verbatim => self.text.clone(),
            RenderRule::Bullets => bullets(&self.text),
            RenderRule::Heading => format!("# {}", self.text.trim()),
            RenderRule::Code => indented(&self.text),
            RenderRule::Image => self.image(),
            RenderRule::Reference => self.reference(),
        };
        (!rendered.is_empty()).then_some(rendered)
    }

    fn image(&self) -> String {
        match (&self.caption, &self.url) {
            (Some(caption), Some(url)) => format!("[img] {caption} <{url}>"),
            (None, Some(url)) => format!("[img] {url}"),
            (_, None) => "[img]".to_owned(),
        }
    }

    fn reference(&self) -> String {
        match (&self.slug, &self.site) {
            (Some(slug), Some(site)) => format!("↗ {slug} @{site}"),
            (Some(slug), None) => format!("↗ {slug}"),
            (None, _) => "↗ reference".to_owned(),
        }
    }
}

/// Prefix every non-blank line with `- `, dropping blank lines.
fn bullets(text: &str) -> String {
    text.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| format!("- {line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Indent every line, blank ones included, by four spaces.
fn indented(text: &str) -> String {
    let mut out = text
        .split('\n')
        .map(|line| format!("    {line}"))
        .collect::<Vec<_>>()
        .join("\n");
    out.truncate(out.trim_end().len());
    out
}
