//! Typed layout directives parsed from pipe-delimited attribute strings.
//!
//! Image alt text and video link text carry optional `|`-separated layout
//! fields (position, size, caption). Parsing is total: unknown or missing
//! tokens coerce to defaults and never fail, so a malformed directive
//! degrades to a plainly positioned element instead of breaking the page.

/// Horizontal placement of an image or video container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Position {
    Left,
    Right,
    #[default]
    Center,
    Full,
}

impl Position {
    /// Parses a position token, coercing anything unrecognized to Center.
    pub fn parse(token: &str) -> Self {
        match token {
            "left" => Position::Left,
            "right" => Position::Right,
            "center" => Position::Center,
            "full" => Position::Full,
            _ => Position::Center,
        }
    }

    /// Token form used in CSS modifier classes.
    pub fn as_str(self) -> &'static str {
        match self {
            Position::Left => "left",
            Position::Right => "right",
            Position::Center => "center",
            Position::Full => "full",
        }
    }

    /// Center is the unmarked default: no modifier class is emitted for it.
    pub fn is_default(self) -> bool {
        self == Position::Center
    }

    /// Left and right placements float beside following content and need no
    /// clearing element; center and full placements get one.
    pub fn floats(self) -> bool {
        matches!(self, Position::Left | Position::Right)
    }
}

/// Rendered width of an image or video container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MediaSize {
    Small,
    #[default]
    Medium,
    Large,
    Full,
}

impl MediaSize {
    /// Parses a size token, coercing anything unrecognized to Medium.
    pub fn parse(token: &str) -> Self {
        match token {
            "small" => MediaSize::Small,
            "medium" => MediaSize::Medium,
            "large" => MediaSize::Large,
            "full" => MediaSize::Full,
            _ => MediaSize::Medium,
        }
    }

    /// Token form used in CSS modifier classes.
    pub fn as_str(self) -> &'static str {
        match self {
            MediaSize::Small => "small",
            MediaSize::Medium => "medium",
            MediaSize::Large => "large",
            MediaSize::Full => "full",
        }
    }

    /// Medium is the unmarked default: no modifier class is emitted for it.
    pub fn is_default(self) -> bool {
        self == MediaSize::Medium
    }
}

/// Layout attributes parsed from an image token's alt field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageDirective {
    pub alt: String,
    pub position: Position,
    pub size: MediaSize,
    pub caption: String,
}

impl ImageDirective {
    /// Parses `alt|position|size|caption` with any trailing fields omitted.
    ///
    /// Fields are trimmed; missing or invalid position/size fall back to
    /// center/medium. Never fails.
    pub fn parse(alt_field: &str) -> Self {
        let mut parts = alt_field.split('|').map(str::trim);
        let alt = parts.next().unwrap_or("").to_string();
        let position = Position::parse(parts.next().unwrap_or(""));
        let size = MediaSize::parse(parts.next().unwrap_or(""));
        let caption = parts.next().unwrap_or("").to_string();

        Self {
            alt,
            position,
            size,
            caption,
        }
    }
}

/// How a video URL is embedded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VideoSource {
    /// YouTube or Vimeo, embedded via a responsive iframe.
    Embed(String),
    /// Direct file URL, embedded via a native video element.
    File(String),
}

/// Layout attributes parsed from a `video|position|size` link token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoDirective {
    pub position: Position,
    pub size: MediaSize,
    pub source: VideoSource,
}

impl VideoDirective {
    /// Recognizes a video directive in link text.
    ///
    /// Returns None unless the text begins with the literal `video|` prefix;
    /// ordinary links are rendered as anchors elsewhere. Position and size
    /// fields follow the same default rules as image directives.
    pub fn parse(link_text: &str, href: &str) -> Option<Self> {
        if !link_text.starts_with("video|") {
            return None;
        }

        let mut parts = link_text.split('|').map(str::trim);
        parts.next(); // "video" marker
        let position = Position::parse(parts.next().unwrap_or(""));
        let size = MediaSize::parse(parts.next().unwrap_or(""));

        Some(Self {
            position,
            size,
            source: classify_video_url(href),
        })
    }
}

/// Classifies a video URL as iframe-embeddable or a direct file.
///
/// YouTube watch and short-link forms are normalized to the embed URL;
/// Vimeo and already-embeddable YouTube URLs pass through unchanged.
pub fn classify_video_url(href: &str) -> VideoSource {
    if href.contains("youtube.com") || href.contains("youtu.be") {
        VideoSource::Embed(youtube_embed_url(href))
    } else if href.contains("vimeo.com") {
        VideoSource::Embed(href.to_string())
    } else {
        VideoSource::File(href.to_string())
    }
}

/// Converts YouTube `watch?v=` and `youtu.be/` URL forms to embed form.
fn youtube_embed_url(href: &str) -> String {
    if let Some(rest) = href.split("youtube.com/watch?v=").nth(1) {
        let id = rest.split('&').next().unwrap_or(rest);
        return format!("https://www.youtube.com/embed/{id}");
    }
    if let Some(id) = href.split("youtu.be/").nth(1) {
        return format!("https://www.youtube.com/embed/{id}");
    }
    href.to_string()
}
