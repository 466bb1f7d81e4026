//! Display state for a text label that shows deck results.
//!
//! Nothing here renders. A front end reads [`Label::is_visible`] and
//! [`Label::text`] and draws them however it likes.

use alloc::string::String;

/// Shown or hidden state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Visibility {
    visible: bool,
}

impl Visibility {
    /// Returns whether the element is shown.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    /// Shows or hides the element.
    pub const fn set(&mut self, visible: bool) {
        self.visible = visible;
    }
}

/// Text content.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Content {
    text: String,
}

impl Content {
    /// The current text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replaces the text.
    pub fn set(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Removes all text.
    pub fn clear(&mut self) {
        self.text.clear();
    }
}

/// A label composed of a [`Visibility`] and a [`Content`].
///
/// # Example
///
/// ```
/// use deckrs::{Card, Label, Rank, Suit, format_cards};
///
/// let mut label = Label::new();
/// label.display(format_cards(&[Card::new(Suit::Hearts, Rank::King)]));
/// assert!(label.is_visible());
/// assert_eq!(label.text(), "Kh");
///
/// label.switch(false);
/// assert_eq!(label.text(), "");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Label {
    /// Shown or hidden state.
    pub visibility: Visibility,
    /// Text content.
    pub content: Content,
}

impl Label {
    /// Creates a hidden, empty label.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows or hides the label. Hiding also clears its text.
    pub fn switch(&mut self, enabled: bool) {
        self.visibility.set(enabled);
        if !enabled {
            self.content.clear();
        }
    }

    /// Shows the label with the given text.
    pub fn display(&mut self, text: impl Into<String>) {
        self.visibility.set(true);
        self.content.set(text);
    }

    /// Returns whether the label is shown.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visibility.is_visible()
    }

    /// The current text.
    #[must_use]
    pub fn text(&self) -> &str {
        self.content.text()
    }
}
