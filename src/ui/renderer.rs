use crate::state::app_state::AppState;
use crate::terminal::CursorPos;
use crate::ui::span::{Span, SpanLine};
use crate::ui::style::{Color, Style};
use unicode_width::UnicodeWidthStr;

pub const KEY_HINT: &str =
    "Tab/Shift+Tab fields  •  Enter next  •  Ctrl+N next  •  Ctrl+P previous  •  Ctrl+S submit  •  Ctrl+C quit";

#[derive(Debug, Default, Clone)]
pub struct RenderFrame {
    pub lines: Vec<SpanLine>,
    pub cursor: Option<CursorPos>,
}

pub struct Renderer;

impl Renderer {
    pub fn render(state: &AppState) -> RenderFrame {
        let mut frame = RenderFrame::default();
        let wizard = state.wizard();
        let step = state.current_step();

        frame.lines.push(vec![
            Span::styled(step.title, Style::new().color(Color::Cyan).bold()),
            Span::styled(
                format!(" ({}/{})", wizard.step() + 1, wizard.steps().len()),
                Style::new().color(Color::DarkGrey),
            ),
        ]);
        frame.lines.push(Vec::new());

        let label_width = step
            .fields
            .iter()
            .map(|field| UnicodeWidthStr::width(*field))
            .max()
            .unwrap_or(0);

        for (index, input) in state.inputs().iter().enumerate() {
            let focused = state.focused_index() == Some(index);
            let marker = if focused { "› " } else { "  " };
            let label = format!("{marker}{:<label_width$}  ", input.field());
            let label_style = if focused {
                Style::new().color(Color::White).bold()
            } else {
                Style::new().color(Color::DarkGrey)
            };

            if focused && !state.has_alert() {
                let col = UnicodeWidthStr::width(label.as_str()) as u16 + input.cursor_col();
                frame.cursor = Some(CursorPos {
                    col,
                    row: frame.lines.len() as u16,
                });
            }

            let mut line = vec![Span::styled(label, label_style)];
            line.extend(input.draw());
            frame.lines.push(line);
        }

        frame.lines.push(Vec::new());
        frame.lines.push(button_row(state));

        if let Some(status) = state.status() {
            frame.lines.push(Vec::new());
            frame
                .lines
                .push(vec![Span::styled(status, Style::new().color(Color::Green))]);
        }

        if let Some(alert) = state.alert() {
            frame.lines.push(Vec::new());
            frame.lines.push(vec![Span::styled(
                format!("! {alert}"),
                Style::new().color(Color::Red).bold(),
            )]);
            frame.lines.push(vec![Span::styled(
                "Press any key to continue",
                Style::new().color(Color::DarkGrey),
            )]);
        }

        frame.lines.push(Vec::new());
        frame
            .lines
            .push(vec![Span::styled(KEY_HINT, Style::new().color(Color::Yellow))]);

        frame
    }
}

fn button_row(state: &AppState) -> SpanLine {
    let wizard = state.wizard();
    let button = Style::new().color(Color::Cyan);
    let mut row = Vec::new();
    if !wizard.is_first_step() {
        row.push(Span::styled("[ Previous ]", button));
        row.push(Span::new("  "));
    }
    if wizard.is_last_step() {
        row.push(Span::styled("[ Submit ]", button.bold()));
    } else {
        row.push(Span::styled("[ Next ]", button.bold()));
    }
    row
}
