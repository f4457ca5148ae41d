//! Custom tag preprocessing for devlog content.
//!
//! Devlog entries mix standard markdown with `{{...}}`-delimited extensions:
//! gallery blocks, a deprecated image block syntax, and a centered video
//! block. This module rewrites those extensions into forms the downstream
//! markdown pipeline already understands, using explicit string scanning
//! rather than layered regex passes so the three rewrites cannot interfere
//! with each other.

const GALLERY_START: &str = "{{gallery-start}}";
const GALLERY_END: &str = "{{gallery-end}}";
const VIDEO_START: &str = "{{video-center}}";
const VIDEO_END: &str = "{{/video-center}}";
const IMAGE_OPEN: &str = "{{image";

/// Alignment suffixes accepted by the legacy image block syntax.
const LEGACY_ALIGNMENTS: &[&str] = &["left", "right", "center"];

/// Runs all custom tag rewrites in order.
///
/// Gallery blocks first (their content is kept literal), then legacy image
/// blocks, then centered video blocks. The function is pure and total: input
/// without custom tags is returned unchanged, and output containing only
/// canonical syntax is a fixed point of a second run.
pub fn preprocess(text: &str) -> String {
    let text = expand_gallery_sections(text);
    let text = expand_legacy_image_tags(&text);
    expand_video_center_tags(&text)
}

/// Replaces `{{gallery-start}}...{{gallery-end}}` regions with a gallery
/// container element.
///
/// The content between the markers is copied into the container byte for
/// byte, with no further processing. Matching is non-greedy: each start
/// marker pairs with the nearest end marker. An unterminated start marker
/// leaves the remainder of the text untouched so no content is dropped.
pub fn expand_gallery_sections(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pos = 0;

    while let Some(start) = text[pos..].find(GALLERY_START) {
        let start = pos + start;
        let inner_start = start + GALLERY_START.len();

        match text[inner_start..].find(GALLERY_END) {
            Some(end) => {
                let inner_end = inner_start + end;
                out.push_str(&text[pos..start]);
                out.push_str("<div class=\"image-gallery\">");
                out.push_str(&text[inner_start..inner_end]);
                out.push_str("</div>");
                pos = inner_end + GALLERY_END.len();
            }
            None => break,
        }
    }

    out.push_str(&text[pos..]);
    out
}

/// Replaces the deprecated `{{image[-align]}} url caption {{/image[-align]}}`
/// block with a canonical pipe-delimited image directive.
///
/// The alignment suffix is optional and defaults to center; size is always
/// medium for legacy blocks. The closing tag must carry the same alignment
/// suffix as the opening tag; mismatched pairs are left unrendered rather
/// than guessed at. URLs must be http(s) and captions are single-line, as in
/// the original authored content.
pub fn expand_legacy_image_tags(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pos = 0;

    while let Some(found) = text[pos..].find(IMAGE_OPEN) {
        let open_start = pos + found;
        out.push_str(&text[pos..open_start]);

        match parse_legacy_image(&text[open_start..]) {
            Some((consumed, rewritten)) => {
                out.push_str(&rewritten);
                pos = open_start + consumed;
            }
            None => {
                // Not a well-formed block. Emit the brace pair and keep
                // scanning after it so overlapping candidates are still found.
                out.push_str("{{");
                pos = open_start + 2;
            }
        }
    }

    out.push_str(&text[pos..]);
    out
}

/// Attempts to parse one legacy image block at the start of `text`.
///
/// Returns the number of bytes consumed and the canonical directive string,
/// or None if the block is malformed.
fn parse_legacy_image(text: &str) -> Option<(usize, String)> {
    let rest = &text[IMAGE_OPEN.len()..];

    // Optional alignment suffix: "-left", "-right", or "-center".
    let (alignment, header_len) = if rest.starts_with("}}") {
        (None, IMAGE_OPEN.len() + 2)
    } else if let Some(after_dash) = rest.strip_prefix('-') {
        let close = after_dash.find("}}")?;
        let token = &after_dash[..close];
        if !LEGACY_ALIGNMENTS.contains(&token) {
            return None;
        }
        (Some(token), IMAGE_OPEN.len() + 1 + close + 2)
    } else {
        return None;
    };

    let body = &text[header_len..];
    let url_start = body.len() - body.trim_start().len();
    let body = &body[url_start..];

    if !body.starts_with("http://") && !body.starts_with("https://") {
        return None;
    }

    // URL runs to the first whitespace or the start of the closing tag.
    let url_end = body
        .find(|c: char| c.is_whitespace())
        .unwrap_or(body.len())
        .min(body.find("{{").unwrap_or(body.len()));
    let url = &body[..url_end];

    let close_tag = match alignment {
        Some(align) => format!("{{{{/image-{align}}}}}"),
        None => "{{/image}}".to_string(),
    };

    let after_url = &body[url_end..];
    let close_pos = after_url.find(&close_tag)?;

    let caption = after_url[..close_pos].trim();
    if caption.contains('\n') {
        return None;
    }

    let align = alignment.unwrap_or("center");
    let consumed = header_len + url_start + url_end + close_pos + close_tag.len();
    let rewritten = format!("![{caption}|{align}|medium|{caption}]({url})");
    Some((consumed, rewritten))
}

/// Replaces `{{video-center}} url {{/video-center}}` with the canonical
/// `[video|center|medium](url)` link form, trimming whitespace around the URL.
pub fn expand_video_center_tags(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pos = 0;

    while let Some(start) = text[pos..].find(VIDEO_START) {
        let start = pos + start;
        let inner_start = start + VIDEO_START.len();

        match text[inner_start..].find(VIDEO_END) {
            Some(end) => {
                let inner_end = inner_start + end;
                let url = text[inner_start..inner_end].trim();
                out.push_str(&text[pos..start]);
                out.push_str(&format!("[video|center|medium]({url})"));
                pos = inner_end + VIDEO_END.len();
            }
            None => break,
        }
    }

    out.push_str(&text[pos..]);
    out
}
