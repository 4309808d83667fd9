//! Single-line text buffer with a character-based cursor

/// Editable text with a cursor measured in characters, not bytes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    buffer: String,
    cursor_position: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> &str {
        &self.buffer
    }

    pub fn cursor_position(&self) -> usize {
        self.cursor_position
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    fn byte_pos(&self, char_index: usize) -> usize {
        self.buffer.chars().take(char_index).map(char::len_utf8).sum()
    }

    pub fn insert(&mut self, c: char) {
        let byte_pos = self.byte_pos(self.cursor_position);
        self.buffer.insert(byte_pos, c);
        self.cursor_position += 1;
    }

    /// Remove the character before the cursor. Returns whether text changed.
    pub fn backspace(&mut self) -> bool {
        if self.cursor_position == 0 {
            return false;
        }
        let byte_pos = self.byte_pos(self.cursor_position - 1);
        self.buffer.remove(byte_pos);
        self.cursor_position -= 1;
        true
    }

    /// Remove the character under the cursor. Returns whether text changed.
    pub fn delete(&mut self) -> bool {
        if self.cursor_position >= self.buffer.chars().count() {
            return false;
        }
        let byte_pos = self.byte_pos(self.cursor_position);
        self.buffer.remove(byte_pos);
        true
    }

    pub fn move_left(&mut self) {
        self.cursor_position = self.cursor_position.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor_position < self.buffer.chars().count() {
            self.cursor_position += 1;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor_position = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor_position = self.buffer.chars().count();
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor_position = 0;
    }
}
