//! Bordered single-line input field rendering.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthChar;

use crate::domain::text_input_state::TextInputState;

use super::styles;

/// Prompt symbol shown before the input text.
const PROMPT_SYMBOL: &str = "> ";

const MASK_CHAR: char = '•';

/// How a field shows its contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldOptions<'a> {
    pub title: &'a str,
    pub placeholder: &'a str,
    pub focused: bool,
    pub masked: bool,
}

pub fn render_text_field(
    frame: &mut Frame<'_>,
    area: Rect,
    input: &TextInputState,
    options: FieldOptions<'_>,
) {
    let border_style = if options.focused {
        styles::active_panel_border_style()
    } else {
        styles::inactive_panel_border_style()
    };

    let line = build_field_line(input, options);
    let paragraph = Paragraph::new(line).block(
        Block::default()
            .title(options.title.to_owned())
            .borders(Borders::ALL)
            .border_style(border_style),
    );
    frame.render_widget(paragraph, area);

    if options.focused {
        let inner_right = area.x.saturating_add(area.width.saturating_sub(2));
        let cursor_x = area
            .x
            .saturating_add(1)
            .saturating_add(PROMPT_SYMBOL.len() as u16)
            .saturating_add(cursor_offset(input, options.masked))
            .min(inner_right);
        frame.set_cursor_position((cursor_x, area.y.saturating_add(1)));
    }
}

fn build_field_line(input: &TextInputState, options: FieldOptions<'_>) -> Line<'static> {
    let prompt = Span::styled(PROMPT_SYMBOL.to_owned(), styles::input_prompt_style());

    if input.is_empty() && !options.focused {
        return Line::from(vec![
            prompt,
            Span::styled(options.placeholder.to_owned(), styles::placeholder_style()),
        ]);
    }

    Line::from(vec![
        prompt,
        Span::styled(display_text(input, options.masked), styles::input_text_style()),
    ])
}

fn display_text(input: &TextInputState, masked: bool) -> String {
    if masked {
        MASK_CHAR.to_string().repeat(input.char_count())
    } else {
        input.text().to_owned()
    }
}

/// Terminal columns between the start of the text and the cursor.
fn cursor_offset(input: &TextInputState, masked: bool) -> u16 {
    let columns: usize = if masked {
        input.cursor_position()
    } else {
        input
            .text()
            .chars()
            .take(input.cursor_position())
            .map(|ch| ch.width().unwrap_or(0))
            .sum()
    };

    columns.min(u16::MAX as usize) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(focused: bool, masked: bool) -> FieldOptions<'static> {
        FieldOptions {
            title: "E-posta",
            placeholder: "ornek@eposta.com",
            focused,
            masked,
        }
    }

    fn line_text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn shows_placeholder_when_empty_and_unfocused() {
        let line = build_field_line(&TextInputState::default(), options(false, false));

        let text = line_text(&line);
        assert!(text.starts_with(PROMPT_SYMBOL));
        assert!(text.contains("ornek@eposta.com"));
    }

    #[test]
    fn hides_placeholder_when_focused() {
        let line = build_field_line(&TextInputState::default(), options(true, false));

        assert_eq!(line_text(&line), PROMPT_SYMBOL);
    }

    #[test]
    fn masks_password_characters() {
        let input = TextInputState::from_text("Abc1!");

        let line = build_field_line(&input, options(false, true));

        assert_eq!(line_text(&line), "> •••••");
    }

    #[test]
    fn cursor_offset_counts_wide_characters() {
        let input = TextInputState::from_text("a界");

        assert_eq!(cursor_offset(&input, false), 3);
        assert_eq!(cursor_offset(&input, true), 2);
    }
}
