//! Text output model.
//!
//! Typed text lives in two parts: the committed text and a pending word.
//! Characters extend the pending word; committing moves it into the text,
//! separated from what came before by a single space. What the user sees is
//! always `committed + pending`.

/// Receiver of committed characters and words.
pub trait OutputSink {
    /// Append `text` (a character or a whole word) to the pending word.
    fn append_character(&mut self, text: &str);

    /// Commit the pending word, then make sure the text ends with a space.
    fn append_space(&mut self);

    /// Move a non-blank pending word into the committed text.
    fn commit_word(&mut self);

    /// Delete the last character of the pending word, or of the committed
    /// text when the pending word is empty.
    fn backspace(&mut self);

    /// Drop all text.
    fn clear(&mut self);

    /// Committed text followed by the pending word.
    fn text(&self) -> String;
}

/// In-memory [`OutputSink`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputBuffer {
    committed: String,
    pending: String,
}

impl OutputBuffer {
    /// Create an empty buffer.
    pub const fn new() -> Self {
        Self { committed: String::new(), pending: String::new() }
    }

    /// Append `text` straight to the committed text, bypassing the pending
    /// word. Used for prompts and banner lines.
    pub fn append_raw(&mut self, text: &str) {
        self.committed.push_str(text);
    }

    /// The committed part of the text.
    pub fn committed(&self) -> &str {
        &self.committed
    }

    /// The pending word.
    pub fn pending(&self) -> &str {
        &self.pending
    }
}

impl OutputSink for OutputBuffer {
    fn append_character(&mut self, text: &str) {
        self.pending.push_str(text);
    }

    fn append_space(&mut self) {
        self.commit_word();
        if !self.committed.is_empty() && !self.committed.ends_with(' ') {
            self.committed.push(' ');
        }
    }

    fn commit_word(&mut self) {
        if self.pending.trim().is_empty() {
            return;
        }
        if !self.committed.is_empty() && !self.committed.ends_with(' ') {
            self.committed.push(' ');
        }
        self.committed.push_str(&self.pending);
        self.pending.clear();
    }

    fn backspace(&mut self) {
        if self.pending.pop().is_none() {
            let _ = self.committed.pop();
        }
    }

    fn clear(&mut self) {
        self.committed.clear();
        self.pending.clear();
    }

    fn text(&self) -> String {
        format!("{}{}", self.committed, self.pending)
    }
}
