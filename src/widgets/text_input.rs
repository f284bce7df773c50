use super::text_edit;
use crate::core::FieldId;
use crate::terminal::{KeyCode, KeyEvent, KeyModifiers};
use crate::ui::span::{Span, SpanLine};
use crate::ui::style::{Color, Style};
use crate::widgets::traits::{InteractionResult, TextAction, WidgetAction};
use unicode_width::UnicodeWidthChar;

/// Single-line editor bound to one form field.
#[derive(Debug, Clone)]
pub struct TextInput {
    field: FieldId,
    value: String,
    cursor: usize,
}

impl TextInput {
    pub fn new(field: impl Into<FieldId>, value: impl Into<String>) -> Self {
        let value = value.into();
        let cursor = text_edit::char_count(&value);
        Self {
            field: field.into(),
            value,
            cursor,
        }
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Display column of the cursor within the value.
    pub fn cursor_col(&self) -> u16 {
        let width: usize = self
            .value
            .chars()
            .take(self.cursor)
            .map(|ch| UnicodeWidthChar::width(ch).unwrap_or(0))
            .sum();
        width.min(u16::MAX as usize) as u16
    }

    pub fn draw(&self) -> SpanLine {
        if self.value.is_empty() {
            vec![Span::styled(self.field.clone(), Style::new().color(Color::DarkGrey))]
        } else {
            vec![Span::new(self.value.clone())]
        }
    }

    pub fn on_key(&mut self, key: KeyEvent) -> InteractionResult {
        match key.code {
            KeyCode::Char(ch)
                if !key.modifiers.contains(KeyModifiers::CONTROL)
                    && !key.modifiers.contains(KeyModifiers::ALT) =>
            {
                text_edit::insert_char(&mut self.value, &mut self.cursor, ch);
                self.edited_result()
            }
            KeyCode::Backspace => {
                if text_edit::backspace_char(&mut self.value, &mut self.cursor) {
                    return self.edited_result();
                }
                InteractionResult::ignored()
            }
            KeyCode::Delete => {
                if text_edit::delete_char(&mut self.value, &mut self.cursor) {
                    return self.edited_result();
                }
                InteractionResult::ignored()
            }
            KeyCode::Left => moved(text_edit::move_left(&mut self.cursor, &self.value)),
            KeyCode::Right => moved(text_edit::move_right(&mut self.cursor, &self.value)),
            KeyCode::Home => {
                self.cursor = 0;
                InteractionResult::handled()
            }
            KeyCode::End => {
                self.cursor = text_edit::char_count(&self.value);
                InteractionResult::handled()
            }
            KeyCode::Enter => InteractionResult::input_done(),
            _ => InteractionResult::ignored(),
        }
    }

    pub fn on_text_action(&mut self, action: TextAction) -> InteractionResult {
        let changed = match action {
            TextAction::DeleteWordLeft => {
                text_edit::delete_word_left(&mut self.value, &mut self.cursor)
            }
            TextAction::DeleteWordRight => {
                text_edit::delete_word_right(&mut self.value, &mut self.cursor)
            }
        };
        if changed {
            self.edited_result()
        } else {
            InteractionResult::ignored()
        }
    }

    fn edited_result(&self) -> InteractionResult {
        InteractionResult::with_action(WidgetAction::ValueChanged {
            field: self.field.clone(),
            value: self.value.clone(),
        })
    }
}

fn moved(changed: bool) -> InteractionResult {
    if changed {
        InteractionResult::handled()
    } else {
        InteractionResult::ignored()
    }
}

#[cfg(test)]
mod tests {
    use super::TextInput;
    use crate::terminal::{KeyCode, KeyEvent, KeyModifiers};
    use crate::widgets::traits::WidgetAction;

    #[test]
    fn typing_emits_value_changes() {
        let mut input = TextInput::new("city", "");
        input.on_key(KeyEvent::plain(KeyCode::Char('O')));
        let result = input.on_key(KeyEvent::plain(KeyCode::Char('k')));

        assert_eq!(
            result.actions,
            vec![WidgetAction::ValueChanged {
                field: "city".into(),
                value: "Ok".into()
            }]
        );
        assert_eq!(input.cursor_col(), 2);
    }

    #[test]
    fn control_chords_are_not_inserted() {
        let mut input = TextInput::new("city", "Oslo");
        let result = input.on_key(KeyEvent {
            code: KeyCode::Char('n'),
            modifiers: KeyModifiers::CONTROL,
        });
        assert!(!result.handled);
        assert_eq!(input.value(), "Oslo");
    }

    #[test]
    fn shifted_chars_are_inserted() {
        let mut input = TextInput::new("city", "");
        input.on_key(KeyEvent {
            code: KeyCode::Char('R'),
            modifiers: KeyModifiers::SHIFT,
        });
        assert_eq!(input.value(), "R");
    }

    #[test]
    fn enter_signals_done() {
        let mut input = TextInput::new("cvv", "123");
        let result = input.on_key(KeyEvent::plain(KeyCode::Enter));
        assert_eq!(result.actions, vec![WidgetAction::InputDone]);
    }

    #[test]
    fn cursor_starts_at_end_of_existing_value() {
        let mut input = TextInput::new("zipCode", "12345");
        assert_eq!(input.cursor(), 5);
        input.on_key(KeyEvent::plain(KeyCode::Home));
        input.on_key(KeyEvent::plain(KeyCode::Delete));
        assert_eq!(input.value(), "2345");
    }
}
