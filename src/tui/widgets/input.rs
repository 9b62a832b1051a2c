//! Text input widget
//!
//! A single-line text field with a character-indexed cursor and optional
//! masking for secrets.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Widget,
};

/// Character drawn in place of each masked character
const MASK_CHAR: char = '•';

/// A simple text input widget
#[derive(Debug, Clone)]
pub struct TextInput {
    /// Current text content
    pub content: String,
    /// Cursor position, in characters
    pub cursor: usize,
    /// Whether the input is focused
    pub focused: bool,
    /// Whether to hide the content
    pub masked: bool,
    /// Placeholder text
    pub placeholder: String,
    /// Label
    pub label: String,
}

impl TextInput {
    /// Create a new text input
    pub fn new() -> Self {
        Self {
            content: String::new(),
            cursor: 0,
            focused: false,
            masked: false,
            placeholder: String::new(),
            label: String::new(),
        }
    }

    /// Set the label
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set the placeholder
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set focused state
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Hide the content behind mask characters
    pub fn masked(mut self, masked: bool) -> Self {
        self.masked = masked;
        self
    }

    /// Set content
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.set_content(content);
        self
    }

    /// Replace the content and move the cursor to the end
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.cursor = self.char_len();
    }

    fn char_len(&self) -> usize {
        self.content.chars().count()
    }

    /// Byte offset of the character at `index`
    fn byte_offset(&self, index: usize) -> usize {
        self.content
            .char_indices()
            .nth(index)
            .map(|(offset, _)| offset)
            .unwrap_or(self.content.len())
    }

    /// Insert a character at the cursor
    pub fn insert(&mut self, c: char) {
        let offset = self.byte_offset(self.cursor);
        self.content.insert(offset, c);
        self.cursor += 1;
    }

    /// Delete character before cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let offset = self.byte_offset(self.cursor);
            self.content.remove(offset);
        }
    }

    /// Delete character at cursor
    pub fn delete(&mut self) {
        if self.cursor < self.char_len() {
            let offset = self.byte_offset(self.cursor);
            self.content.remove(offset);
        }
    }

    /// Move cursor left
    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    /// Move cursor right
    pub fn move_right(&mut self) {
        if self.cursor < self.char_len() {
            self.cursor += 1;
        }
    }

    /// Move cursor to start
    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    /// Move cursor to end
    pub fn move_end(&mut self) {
        self.cursor = self.char_len();
    }

    /// Clear the content
    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    /// Get the current content
    pub fn value(&self) -> &str {
        &self.content
    }

    /// Text to draw, masked if needed
    pub fn display_value(&self) -> String {
        if self.masked {
            std::iter::repeat(MASK_CHAR).take(self.char_len()).collect()
        } else {
            self.content.clone()
        }
    }
}

impl Default for TextInput {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for TextInput {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let label_width = if self.label.is_empty() {
            0
        } else {
            self.label.chars().count() + 2
        };

        let input_start = area.x + label_width as u16;

        if !self.label.is_empty() {
            let label_style = if self.focused {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().fg(Color::Yellow)
            };
            let label_line = Line::from(vec![
                Span::styled(self.label.as_str(), label_style),
                Span::raw(": "),
            ]);
            buf.set_line(area.x, area.y, &label_line, label_width as u16);
        }

        let showing_placeholder = self.content.is_empty() && !self.focused;
        let display_text = if showing_placeholder {
            self.placeholder.clone()
        } else {
            self.display_value()
        };

        let text_style = if showing_placeholder {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::White)
        };

        buf.set_string(input_start, area.y, &display_text, text_style);

        if self.focused {
            let cursor_x = input_start + self.cursor as u16;
            if cursor_x < area.x + area.width {
                let cursor_char = display_text.chars().nth(self.cursor).unwrap_or(' ');
                buf.set_string(
                    cursor_x,
                    area.y,
                    cursor_char.to_string(),
                    Style::default().fg(Color::Black).bg(Color::Cyan),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_backspace() {
        let mut input = TextInput::new();
        for c in "abc".chars() {
            input.insert(c);
        }
        assert_eq!(input.value(), "abc");
        input.backspace();
        assert_eq!(input.value(), "ab");
        assert_eq!(input.cursor, 2);
    }

    #[test]
    fn test_multibyte_editing() {
        let mut input = TextInput::new().content("São");
        assert_eq!(input.cursor, 3);
        input.move_left();
        input.move_left();
        input.insert('ã');
        assert_eq!(input.value(), "Sãão");
        input.backspace();
        input.delete();
        assert_eq!(input.value(), "So");
    }

    #[test]
    fn test_cursor_bounds() {
        let mut input = TextInput::new().content("ab");
        input.move_right();
        assert_eq!(input.cursor, 2);
        input.move_start();
        input.move_left();
        assert_eq!(input.cursor, 0);
        input.delete();
        assert_eq!(input.value(), "b");
        input.move_end();
        assert_eq!(input.cursor, 1);
    }

    #[test]
    fn test_masked_display() {
        let input = TextInput::new().masked(true).content("senha1");
        assert_eq!(input.display_value(), "••••••");
        assert_eq!(input.value(), "senha1");
    }

    #[test]
    fn test_render_masks_content() {
        let area = Rect::new(0, 0, 20, 1);
        let mut buf = Buffer::empty(area);
        TextInput::new()
            .label("Senha")
            .masked(true)
            .content("abc")
            .render(area, &mut buf);

        let rendered: String = (0..area.width)
            .map(|x| buf[(x, 0)].symbol().to_string())
            .collect();
        assert!(rendered.starts_with("Senha: •••"));
        assert!(!rendered.contains("abc"));
    }
}
