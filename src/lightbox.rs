//! Lightbox overlay controller.
//!
//! One shared overlay previews any image marked as a lightbox trigger. The
//! controller is an explicit owned state machine with `open`/`close` as its
//! only mutators, handed to whatever view needs it instead of being poked at
//! from scattered handlers. The Escape key has exactly one consumer per
//! press: an open lightbox always wins, and only a closed lightbox lets the
//! press fall through to the entry detail overlay.
//!
//! The browser-side mirror of this logic ships as `assets/lightbox.js`.

/// Current overlay state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
enum LightboxState {
    #[default]
    Closed,
    Open {
        src: String,
        alt: String,
    },
}

/// The shared image preview overlay.
#[derive(Debug, Clone, Default)]
pub struct Lightbox {
    state: LightboxState,
}

impl Lightbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, LightboxState::Open { .. })
    }

    /// Source of the currently displayed image, if open.
    pub fn current_src(&self) -> Option<&str> {
        match &self.state {
            LightboxState::Open { src, .. } => Some(src),
            LightboxState::Closed => None,
        }
    }

    /// Alt text of the currently displayed image, if open.
    pub fn current_alt(&self) -> Option<&str> {
        match &self.state {
            LightboxState::Open { alt, .. } => Some(alt),
            LightboxState::Closed => None,
        }
    }

    /// Opens the overlay on the given image.
    pub fn open(&mut self, src: impl Into<String>, alt: impl Into<String>) {
        self.state = LightboxState::Open {
            src: src.into(),
            alt: alt.into(),
        };
    }

    /// Closes the overlay, dropping the stored source so any in-flight
    /// image load is abandoned.
    pub fn close(&mut self) {
        self.state = LightboxState::Closed;
    }

    /// Handles a click on a lightbox trigger element.
    ///
    /// The trigger's stored `data-lightbox` source wins; a trigger without
    /// one falls back to its native source attribute. A later click always
    /// replaces whatever an earlier trigger displayed.
    pub fn trigger_clicked(&mut self, data_src: Option<&str>, native_src: &str, alt: &str) {
        let src = data_src.unwrap_or(native_src);
        self.open(src, alt);
    }
}

/// The entry detail overlay owned by the devlog view.
///
/// Modeled here only as far as the Escape-key contract requires: the
/// lightbox must intercept Escape first, and this overlay closes only when
/// the lightbox was already closed.
#[derive(Debug, Clone, Default)]
pub struct EntryOverlay {
    open: bool,
}

impl EntryOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}

/// Which component consumed an Escape press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscapeOutcome {
    ClosedLightbox,
    ClosedOverlay,
    Ignored,
}

/// Dispatches one Escape press to exactly one consumer.
///
/// An open lightbox takes priority and closes; otherwise an open entry
/// overlay closes; with both already closed the press is ignored.
pub fn dispatch_escape(lightbox: &mut Lightbox, overlay: &mut EntryOverlay) -> EscapeOutcome {
    if lightbox.is_open() {
        lightbox.close();
        return EscapeOutcome::ClosedLightbox;
    }
    if overlay.is_open() {
        overlay.close();
        return EscapeOutcome::ClosedOverlay;
    }
    EscapeOutcome::Ignored
}
