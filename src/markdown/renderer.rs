//! Devlog content rendering.
//!
//! Entry content is markdown with custom extensions. Rendering runs the tag
//! preprocessor, hands the result to comrak (GFM extensions, raw HTML allowed
//! so gallery wrappers pass through), then rewrites the produced HTML in
//! place: images become positioned lightbox figures, `video|` links become
//! embedded players, off-site anchors open in new tabs, and bare code blocks
//! get a default language class for the downstream highlighter.

use anyhow::Result;
use comrak::Options;

use super::directive::{ImageDirective, VideoDirective};
use super::preprocess::preprocess;
use crate::components::media;

/// Renders devlog markdown to HTML fragments.
///
/// A renderer is pure and reusable: it holds comrak options and the optional
/// site host used to decide which anchors are external. Directive parsing
/// never fails, so the only way rendering degrades is toward default layout,
/// never toward an error shown to the reader.
pub struct MarkupRenderer<'a> {
    options: Options<'a>,
    site_host: Option<String>,
}

impl<'a> MarkupRenderer<'a> {
    /// Creates a renderer with GFM extensions enabled.
    ///
    /// Raw HTML is allowed through: the preprocessor emits gallery container
    /// elements directly into the markdown stream, and entry content is
    /// studio-authored, not untrusted input.
    pub fn new() -> Self {
        let mut options = Options::default();

        options.extension.strikethrough = true;
        options.extension.table = true;
        options.extension.autolink = true;
        options.extension.tasklist = true;

        options.render.unsafe_ = true;

        Self {
            options,
            site_host: None,
        }
    }

    /// Creates a renderer that treats links to `host` as internal.
    ///
    /// Absolute links whose host differs gain `target="_blank"` and
    /// `rel="noopener noreferrer"`; without a configured host every absolute
    /// link counts as external.
    pub fn with_site_host(host: impl Into<String>) -> Self {
        let mut renderer = Self::new();
        renderer.site_host = Some(host.into());
        renderer
    }

    /// Renders raw entry content to an HTML fragment.
    ///
    /// Empty input renders to an empty fragment. Custom tags are rewritten
    /// first, then comrak parses the markdown, then the media, link, and
    /// code-block passes rewrite the HTML string.
    pub fn render(&self, content: &str) -> Result<String> {
        if content.is_empty() {
            return Ok(String::new());
        }

        let markdown = preprocess(content);
        let html = comrak::markdown_to_html(&markdown, &self.options);

        let html = self.expand_images(&html);
        let html = self.expand_video_links(&html);
        let html = self.decorate_external_links(&html);
        Ok(default_code_language(&html))
    }

    /// Replaces every `<img>` tag with a positioned lightbox figure.
    ///
    /// The alt attribute carries the pipe-delimited directive fields; they
    /// are decoded, parsed (malformed values coerce to defaults), and the
    /// whole tag is rewritten through the media component.
    fn expand_images(&self, html: &str) -> String {
        let mut result = String::with_capacity(html.len());
        let mut pos = 0;

        while let Some(found) = html[pos..].find("<img ") {
            let tag_start = pos + found;
            let tag_end = match html[tag_start..].find('>') {
                Some(p) => tag_start + p + 1,
                None => break,
            };

            result.push_str(&html[pos..tag_start]);

            let tag = &html[tag_start..tag_end];
            match attr_value(tag, "src") {
                Some(src) => {
                    let alt = attr_value(tag, "alt").unwrap_or_default();
                    let directive = ImageDirective::parse(&html_decode(&alt));
                    let src = html_decode(&src);
                    result.push_str(&media::image_figure(&directive, &src).into_string());
                }
                None => result.push_str(tag),
            }

            pos = tag_end;
        }

        result.push_str(&html[pos..]);
        result
    }

    /// Replaces anchors whose text begins with `video|` by embedded players.
    ///
    /// Anything else is left for the external-link pass. Anchors without a
    /// well-formed closing tag are copied through unchanged.
    fn expand_video_links(&self, html: &str) -> String {
        let mut result = String::with_capacity(html.len());
        let mut pos = 0;

        while let Some(found) = html[pos..].find("<a ") {
            let tag_start = pos + found;
            let parsed = parse_anchor(&html[tag_start..]);

            result.push_str(&html[pos..tag_start]);

            match parsed {
                Some(anchor) => {
                    let text = html_decode(anchor.text);
                    let href = html_decode(anchor.href);
                    match VideoDirective::parse(&text, &href) {
                        Some(directive) => {
                            result.push_str(&media::video_embed(&directive).into_string());
                        }
                        None => result.push_str(&html[tag_start..tag_start + anchor.len]),
                    }
                    pos = tag_start + anchor.len;
                }
                None => {
                    result.push_str("<a ");
                    pos = tag_start + 3;
                }
            }
        }

        result.push_str(&html[pos..]);
        result
    }

    /// Adds `target="_blank" rel="noopener noreferrer"` to off-site anchors.
    ///
    /// Only absolute http(s) hrefs qualify; relative links and in-page
    /// anchors stay as-is.
    fn decorate_external_links(&self, html: &str) -> String {
        let mut result = String::with_capacity(html.len());
        let mut pos = 0;

        while let Some(found) = html[pos..].find("<a ") {
            let tag_start = pos + found;
            let open_end = match html[tag_start..].find('>') {
                Some(p) => tag_start + p,
                None => break,
            };

            result.push_str(&html[pos..tag_start]);

            let open_tag = &html[tag_start..open_end];
            let is_external = attr_value(open_tag, "href")
                .map(|href| self.is_external(&href))
                .unwrap_or(false);

            result.push_str(open_tag);
            if is_external && !open_tag.contains("target=") {
                result.push_str(" target=\"_blank\" rel=\"noopener noreferrer\"");
            }

            pos = open_end;
        }

        result.push_str(&html[pos..]);
        result
    }

    fn is_external(&self, href: &str) -> bool {
        if !href.starts_with("http://") && !href.starts_with("https://") {
            return false;
        }
        match &self.site_host {
            Some(host) => !href.contains(host.as_str()),
            None => true,
        }
    }
}

impl<'a> Default for MarkupRenderer<'a> {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders raw devlog content with default settings.
///
/// This is the entry point page controllers call whenever a reader opens an
/// entry. Pure with respect to its input; rendering never surfaces an error,
/// degrading to an empty fragment instead of breaking the page.
pub fn render_content_markup(raw_text: &str) -> String {
    MarkupRenderer::new()
        .render(raw_text)
        .unwrap_or_else(|_| String::new())
}

/// Gives bare fenced code blocks a default language class.
///
/// Comrak emits `<pre><code>` when no language hint is supplied; the
/// highlighter and stylesheet key off `language-*` classes, so those blocks
/// become `language-text`.
fn default_code_language(html: &str) -> String {
    html.replace("<pre><code>", "<pre><code class=\"language-text\">")
}

/// Extracts a double-quoted attribute value from a single tag's text.
fn attr_value(tag: &str, name: &str) -> Option<String> {
    let marker = format!("{name}=\"");
    let start = tag.find(&marker)? + marker.len();
    let end = tag[start..].find('"')? + start;
    Some(tag[start..end].to_string())
}

/// A scanned `<a ...>text</a>` element.
struct Anchor<'h> {
    href: &'h str,
    text: &'h str,
    /// Total byte length of the element from `<a` through `</a>`.
    len: usize,
}

/// Scans one anchor element at the start of `html`.
fn parse_anchor(html: &str) -> Option<Anchor<'_>> {
    let open_end = html.find('>')?;
    let open_tag = &html[..open_end];

    let href_marker = "href=\"";
    let href_start = open_tag.find(href_marker)? + href_marker.len();
    let href_end = open_tag[href_start..].find('"')? + href_start;

    let text_start = open_end + 1;
    let close = html[text_start..].find("</a>")?;

    Some(Anchor {
        href: &html[href_start..href_end],
        text: &html[text_start..text_start + close],
        len: text_start + close + "</a>".len(),
    })
}

/// Decodes the HTML entities comrak produces in attribute values and text.
fn html_decode(html: &str) -> String {
    html.replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_basic_markdown() {
        // Arrange
        let renderer = MarkupRenderer::new();
        let markdown = "# Patch Notes\n\nThis is **bold** text.";

        // Act
        let html = renderer.render(markdown).expect("Should render markdown");

        // Assert
        assert!(html.contains("<h1>"), "Should contain h1 tag");
        assert!(html.contains("Patch Notes"), "Should contain heading text");
        assert!(html.contains("<strong>"), "Should contain strong tag");
    }

    #[test]
    fn test_render_empty_content() {
        // Arrange
        let renderer = MarkupRenderer::new();

        // Act
        let html = renderer.render("").expect("Empty input should render");

        // Assert
        assert_eq!(html, "", "Empty content renders to an empty fragment");
    }

    #[test]
    fn test_image_without_directive_fields_uses_defaults() {
        // Arrange
        let renderer = MarkupRenderer::new();
        let markdown = "![screenshot](https://x/pic.png)";

        // Act
        let html = renderer.render(markdown).expect("Should render");

        // Assert
        assert!(
            html.contains("class=\"image-container\""),
            "Missing position yields the unmarked center default: {}",
            html
        );
        assert!(
            !html.contains("image-left") && !html.contains("image-right"),
            "No position modifier class for the default"
        );
        assert!(html.contains("lightbox-trigger"), "Image should be a lightbox trigger");
        assert!(
            html.contains("data-lightbox=\"https://x/pic.png\""),
            "Source stored for the overlay: {}",
            html
        );
    }

    #[test]
    fn test_image_directive_with_position_size_caption() {
        // Arrange
        let renderer = MarkupRenderer::new();
        let markdown = "![Concept art|right|large|Early station concept](https://x/art.jpg)";

        // Act
        let html = renderer.render(markdown).expect("Should render");

        // Assert
        assert!(
            html.contains("class=\"image-container image-right image-large\""),
            "Modifier classes encode non-default position and size: {}",
            html
        );
        assert!(
            html.contains("<div class=\"image-caption\">Early station concept</div>"),
            "Caption block should render: {}",
            html
        );
        assert!(html.contains("alt=\"Concept art\""), "Alt text is the first field");
        assert!(
            !html.contains("class=\"clear\""),
            "Right-floating image needs no clearing element"
        );
    }

    #[test]
    fn test_image_invalid_position_behaves_as_omitted() {
        // Arrange
        let renderer = MarkupRenderer::new();
        let invalid = "![a|diagonal|medium|c](https://x/p.png)";
        let omitted = "![a||medium|c](https://x/p.png)";

        // Act
        let invalid_html = renderer.render(invalid).expect("Should render");
        let omitted_html = renderer.render(omitted).expect("Should render");

        // Assert
        assert_eq!(
            invalid_html, omitted_html,
            "Invalid position must behave identically to a missing field"
        );
    }

    #[test]
    fn test_center_image_gets_clearing_element() {
        // Arrange
        let renderer = MarkupRenderer::new();
        let markdown = "![a|center|medium|c](https://x/p.png)";

        // Act
        let html = renderer.render(markdown).expect("Should render");

        // Assert
        assert!(
            html.contains("<div class=\"clear\"></div>"),
            "Center placement appends a clearing element: {}",
            html
        );
    }

    #[test]
    fn test_video_link_youtube_watch_form() {
        // Arrange
        let renderer = MarkupRenderer::new();
        let markdown = "[video|center|medium](https://www.youtube.com/watch?v=abc123&t=5)";

        // Act
        let html = renderer.render(markdown).expect("Should render");

        // Assert
        assert!(
            html.contains("src=\"https://www.youtube.com/embed/abc123\""),
            "watch?v= URL should normalize to embed form: {}",
            html
        );
        assert!(html.contains("responsive-iframe"), "YouTube embeds via iframe");
        assert!(!html.contains("<a "), "Video directive replaces the anchor entirely");
    }

    #[test]
    fn test_video_link_short_form_matches_watch_form() {
        // Arrange
        let renderer = MarkupRenderer::new();

        // Act
        let short = renderer
            .render("[video|center|medium](https://youtu.be/abc123)")
            .expect("Should render");
        let watch = renderer
            .render("[video|center|medium](https://www.youtube.com/watch?v=abc123&t=5)")
            .expect("Should render");

        // Assert
        assert_eq!(short, watch, "Both YouTube URL forms normalize identically");
    }

    #[test]
    fn test_video_link_direct_file() {
        // Arrange
        let renderer = MarkupRenderer::new();
        let markdown = "[video|full|full](https://cdn.x/trailer.mp4)";

        // Act
        let html = renderer.render(markdown).expect("Should render");

        // Assert
        assert!(html.contains("<video controls"), "Direct files use a native element");
        assert!(
            html.contains("class=\"video-container video-full video-full\""),
            "Full position and full size both add modifiers: {}",
            html
        );
    }

    #[test]
    fn test_ordinary_link_is_not_a_video() {
        // Arrange
        let renderer = MarkupRenderer::new();
        let markdown = "[our trailer](https://youtu.be/abc123)";

        // Act
        let html = renderer.render(markdown).expect("Should render");

        // Assert
        assert!(html.contains("<a "), "Plain link text renders as an anchor");
        assert!(!html.contains("iframe"), "No video embed without the video| prefix");
    }

    #[test]
    fn test_external_link_opens_in_new_tab() {
        // Arrange
        let renderer = MarkupRenderer::with_site_host("studio.example");
        let markdown = "[press kit](https://othersite.example/kit)";

        // Act
        let html = renderer.render(markdown).expect("Should render");

        // Assert
        assert!(
            html.contains("target=\"_blank\" rel=\"noopener noreferrer\""),
            "Off-site links open in a new tab without window handle leakage: {}",
            html
        );
    }

    #[test]
    fn test_same_host_link_stays_plain() {
        // Arrange
        let renderer = MarkupRenderer::with_site_host("studio.example");
        let markdown = "[devlog](https://studio.example/devlog)";

        // Act
        let html = renderer.render(markdown).expect("Should render");

        // Assert
        assert!(!html.contains("target=\"_blank\""), "Same-host links are internal: {}", html);
    }

    #[test]
    fn test_relative_link_stays_plain() {
        // Arrange
        let renderer = MarkupRenderer::new();
        let markdown = "[about](about.html)";

        // Act
        let html = renderer.render(markdown).expect("Should render");

        // Assert
        assert!(
            !html.contains("target=\"_blank\""),
            "Relative links are never external: {}",
            html
        );
    }

    #[test]
    fn test_code_block_with_language() {
        // Arrange
        let renderer = MarkupRenderer::new();
        let markdown = "```rust\nfn main() {}\n```";

        // Act
        let html = renderer.render(markdown).expect("Should render");

        // Assert
        assert!(
            html.contains("<code class=\"language-rust\">"),
            "Language hint becomes a class for the highlighter: {}",
            html
        );
    }

    #[test]
    fn test_code_block_without_language_defaults_to_text() {
        // Arrange
        let renderer = MarkupRenderer::new();
        let markdown = "```\nplain stuff\n```";

        // Act
        let html = renderer.render(markdown).expect("Should render");

        // Assert
        assert!(
            html.contains("<code class=\"language-text\">"),
            "Bare fences default to the text language class: {}",
            html
        );
    }

    #[test]
    fn test_gallery_block_passes_through() {
        // Arrange
        let renderer = MarkupRenderer::new();
        let markdown = "{{gallery-start}}A{{gallery-end}}";

        // Act
        let html = renderer.render(markdown).expect("Should render");

        // Assert
        assert!(
            html.contains("<div class=\"image-gallery\">A</div>"),
            "Gallery wrapper survives the markdown parser intact: {}",
            html
        );
    }

    #[test]
    fn test_legacy_image_block_full_pipeline() {
        // Arrange
        let renderer = MarkupRenderer::new();
        let markdown = "{{image-left}} http://x/y.png caption {{/image-left}}";

        // Act
        let html = renderer.render(markdown).expect("Should render");

        // Assert
        assert!(
            html.contains("class=\"image-container image-left\""),
            "Legacy block flows through preprocessing into a floated figure: {}",
            html
        );
        assert!(
            html.contains("<div class=\"image-caption\">caption</div>"),
            "Legacy caption survives the rewrite: {}",
            html
        );
    }

    #[test]
    fn test_legacy_video_block_full_pipeline() {
        // Arrange
        let renderer = MarkupRenderer::new();
        let markdown = "{{video-center}} https://youtu.be/abc123 {{/video-center}}";

        // Act
        let html = renderer.render(markdown).expect("Should render");

        // Assert
        assert!(
            html.contains("src=\"https://www.youtube.com/embed/abc123\""),
            "Legacy video block embeds like the canonical form: {}",
            html
        );
    }

    #[test]
    fn test_image_syntax_inside_code_block_untouched() {
        // Arrange
        let renderer = MarkupRenderer::new();
        let markdown = "```text\n![alt|left](https://x/p.png)\n```";

        // Act
        let html = renderer.render(markdown).expect("Should render");

        // Assert
        assert!(
            !html.contains("image-container"),
            "Image syntax inside code fences is literal, not a directive: {}",
            html
        );
    }

    #[test]
    fn test_render_content_markup_entry_point() {
        // Arrange & Act
        let html = render_content_markup("![x](https://x/p.png)");
        let empty = render_content_markup("");

        // Assert
        assert!(html.contains("image-container"), "Entry point runs the full pipeline");
        assert_eq!(empty, "", "Empty input yields an empty fragment");
    }

    #[test]
    fn test_alt_entities_round_trip() {
        // Arrange: quotes in the caption get entity-encoded by comrak
        let renderer = MarkupRenderer::new();
        let markdown = "![alt|center|medium|the \"big\" one](https://x/p.png)";

        // Act
        let html = renderer.render(markdown).expect("Should render");

        // Assert
        assert!(
            html.contains("the &quot;big&quot; one"),
            "Caption entities decode for parsing and re-escape on emission: {}",
            html
        );
    }
}
