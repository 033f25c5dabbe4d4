use anyhow::{anyhow, Result};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use crate::models::InsertCommand;

/// State of the "add word" form on the main screen.
#[derive(Default, Clone)]
pub(crate) struct WordForm {
    pub(crate) word: String,
    pub(crate) translation: String,
    pub(crate) active: WordField,
}

/// Fields available within the word form.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub(crate) enum WordField {
    #[default]
    Word,
    Translation,
}

impl WordField {
    pub(crate) fn label(self) -> &'static str {
        match self {
            WordField::Word => "Word",
            WordField::Translation => "Translation",
        }
    }

    fn placeholder(self) -> &'static str {
        match self {
            WordField::Word => "<English word>",
            WordField::Translation => "<Translation>",
        }
    }
}

impl WordForm {
    /// Swap focus between the word and translation fields.
    pub(crate) fn toggle_field(&mut self) {
        self.active = match self.active {
            WordField::Word => WordField::Translation,
            WordField::Translation => WordField::Word,
        };
    }

    /// Append a character to the active field, ignoring control characters.
    pub(crate) fn push_char(&mut self, ch: char) -> bool {
        if ch.is_control() {
            return false;
        }
        self.value_mut(self.active).push(ch);
        true
    }

    /// Remove the last character from the active field.
    pub(crate) fn backspace(&mut self) {
        self.value_mut(self.active).pop();
    }

    /// Turn the inputs into a command for the store. Only a blank word is
    /// refused; the translation may be left empty.
    pub(crate) fn to_command(&self) -> Result<InsertCommand> {
        let word = self.word.trim();
        if word.is_empty() {
            return Err(anyhow!("Word is required."));
        }
        Ok(InsertCommand::new(word, self.translation.trim()))
    }

    /// Reset both fields after a successful save and focus the word again.
    pub(crate) fn clear(&mut self) {
        *self = Self::default();
    }

    /// Render a single line for the form widget.
    pub(crate) fn build_line(&self, field: WordField) -> Line<'static> {
        let value = self.value(field);
        let is_active = self.active == field;

        let display = if value.is_empty() {
            field.placeholder().to_string()
        } else {
            value.to_string()
        };

        let style = if is_active {
            Style::default().fg(Color::Yellow)
        } else if value.is_empty() {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
        };

        Line::from(vec![
            Span::raw(format!("{}: ", field.label())),
            Span::styled(display, style),
        ])
    }

    /// Terminal column of the cursor inside the rendered line for `field`:
    /// the label prefix plus the display width of the typed value. Wide glyphs
    /// count as two cells and the result saturates instead of overflowing.
    pub(crate) fn cursor_offset(&self, field: WordField) -> u16 {
        let prefix = field.label().width() + ": ".len();
        let cells = prefix.saturating_add(self.value(field).width());
        u16::try_from(cells).unwrap_or(u16::MAX)
    }

    fn value(&self, field: WordField) -> &str {
        match field {
            WordField::Word => &self.word,
            WordField::Translation => &self.translation,
        }
    }

    fn value_mut(&mut self, field: WordField) -> &mut String {
        match field {
            WordField::Word => &mut self.word,
            WordField::Translation => &mut self.translation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typing_goes_to_the_active_field() {
        let mut form = WordForm::default();
        for ch in "Cat".chars() {
            form.push_char(ch);
        }
        form.toggle_field();
        for ch in "Кот".chars() {
            form.push_char(ch);
        }
        form.backspace();

        assert_eq!(form.word, "Cat");
        assert_eq!(form.translation, "Ко");
        assert_eq!(form.cursor_offset(WordField::Translation), 15);
    }

    #[test]
    fn cursor_offset_uses_display_width() {
        let form = WordForm {
            word: "日本".into(),
            translation: String::new(),
            active: WordField::Word,
        };
        assert_eq!(form.cursor_offset(WordField::Word), "Word: ".len() as u16 + 4);
    }

    #[test]
    fn cursor_offset_saturates_on_huge_input() {
        let form = WordForm {
            word: "a".repeat(70_000),
            translation: String::new(),
            active: WordField::Word,
        };
        assert_eq!(form.cursor_offset(WordField::Word), u16::MAX);
    }

    #[test]
    fn control_characters_are_ignored() {
        let mut form = WordForm::default();
        assert!(!form.push_char('\n'));
        assert!(form.word.is_empty());
    }

    #[test]
    fn blank_word_is_refused() {
        let form = WordForm {
            word: "   ".into(),
            translation: "что-то".into(),
            active: WordField::Word,
        };
        assert!(form.to_command().is_err());
    }

    #[test]
    fn command_keeps_case_and_trims_whitespace() {
        let form = WordForm {
            word: " Hello ".into(),
            translation: "Привет".into(),
            active: WordField::Translation,
        };
        assert_eq!(
            form.to_command().unwrap(),
            InsertCommand::new("Hello", "Привет")
        );
    }

    #[test]
    fn clear_resets_focus() {
        let mut form = WordForm::default();
        form.push_char('a');
        form.toggle_field();
        form.clear();
        assert!(form.word.is_empty());
        assert_eq!(form.active, WordField::Word);
    }
}
