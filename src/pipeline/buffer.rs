/// Text accumulated in one reveal pane.
///
/// Once the buffer holds more than `cap` characters it drops the oldest
/// ones, keeping the most recent `retain`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealBuffer {
    text: String,
    /// Length of `text` in characters
    chars: usize,
    cap: usize,
    retain: usize,
}

impl RevealBuffer {
    pub fn new(cap: usize, retain: usize) -> Self {
        let cap = cap.max(1);
        Self {
            text: String::new(),
            chars: 0,
            cap,
            retain: retain.clamp(1, cap),
        }
    }

    /// Append one character; returns true when older text was dropped
    pub fn push(&mut self, ch: char) -> bool {
        self.text.push(ch);
        self.chars += 1;

        if self.chars <= self.cap {
            return false;
        }

        let dropped = self.chars - self.retain;
        let cut = self
            .text
            .char_indices()
            .nth(dropped)
            .map(|(index, _)| index)
            .unwrap_or(self.text.len());
        self.text.drain(..cut);
        self.chars = self.retain;
        true
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Length in characters
    pub fn len(&self) -> usize {
        self.chars
    }

    pub fn is_empty(&self) -> bool {
        self.chars == 0
    }
}
