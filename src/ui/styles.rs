//! Style definitions for the UI components.

use ratatui::style::{Color, Modifier, Style};

// =============================================================================
// Panels and forms
// =============================================================================

/// Border of the focused panel or field.
pub fn active_panel_border_style() -> Style {
    Style::default().fg(Color::Cyan)
}

pub fn inactive_panel_border_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Screen titles such as "Giriş Yap".
pub fn title_style() -> Style {
    Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

pub fn input_prompt_style() -> Style {
    Style::default().fg(Color::Cyan)
}

pub fn input_text_style() -> Style {
    Style::default().fg(Color::White)
}

/// Placeholder text in empty inputs (dimmed italic).
pub fn placeholder_style() -> Style {
    Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::ITALIC)
}

/// Inline form error (red).
pub fn error_style() -> Style {
    Style::default().fg(Color::Red)
}

pub fn success_style() -> Style {
    Style::default()
        .fg(Color::Green)
        .add_modifier(Modifier::BOLD)
}

/// Submit button; dimmed while disabled or loading.
pub fn button_style(enabled: bool) -> Style {
    if enabled {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray).bg(Color::Black)
    }
}

/// Password checklist entry, green once the rule holds.
pub fn requirement_style(met: bool) -> Style {
    if met {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

/// Key hints in the status line.
pub fn hint_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

// =============================================================================
// Chat list styles
// =============================================================================

/// Style for chat name (bold, bright).
pub fn chat_name_style() -> Style {
    Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

/// Style for message preview text (dimmed).
pub fn chat_preview_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Style for unread count badge (green).
pub fn unread_count_style() -> Style {
    Style::default().fg(Color::Green)
}

pub fn timestamp_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Initials badge for users and chats.
pub fn avatar_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

/// "Çevrimiçi" and member count subtitles.
pub fn presence_style() -> Style {
    Style::default().fg(Color::Green)
}

// =============================================================================
// Message list styles
// =============================================================================

/// Style for message sender name (white, bold).
pub fn message_sender_style() -> Style {
    Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

pub fn message_time_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

pub fn incoming_message_style() -> Style {
    Style::default().fg(Color::White)
}

/// The viewer's own messages.
pub fn outgoing_message_style() -> Style {
    Style::default().fg(Color::Cyan)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_name_style_is_bold_white() {
        let style = chat_name_style();
        assert_eq!(style.fg, Some(Color::White));
        assert!(style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn unread_count_style_is_green() {
        let style = unread_count_style();
        assert_eq!(style.fg, Some(Color::Green));
    }

    #[test]
    fn disabled_button_is_dimmed() {
        assert_eq!(button_style(false).fg, Some(Color::DarkGray));
        assert_eq!(button_style(true).bg, Some(Color::Cyan));
    }

    #[test]
    fn requirement_style_tracks_rule_state() {
        assert_eq!(requirement_style(true).fg, Some(Color::Green));
        assert_eq!(requirement_style(false).fg, Some(Color::DarkGray));
    }
}
