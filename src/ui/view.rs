use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::domain::{
    session::Screen,
    shell_state::{ActivePane, ShellState},
};

use super::{auth_view, chat_view, styles};

const SPLASH_TEXT: &str = "Yükleniyor...";

pub fn render(frame: &mut Frame<'_>, state: &ShellState) {
    let [content_area, status_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .areas(frame.area());

    if state.session().is_restoring() {
        let [_, middle, _] = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage(50),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .areas(content_area);
        frame.render_widget(
            Paragraph::new(SPLASH_TEXT).alignment(Alignment::Center),
            middle,
        );
        return;
    }

    match state.session().session() {
        Some(session) => chat_view::render_chat_screen(
            frame,
            content_area,
            state.chat(),
            state.profile_name(),
            session.uid(),
        ),
        None => match state.screen() {
            Screen::Register => auth_view::render_register(frame, content_area, state.register()),
            Screen::Reset => auth_view::render_reset(frame, content_area, state.reset()),
            Screen::Login | Screen::Main => {
                auth_view::render_login(frame, content_area, state.login())
            }
        },
    }

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(status_line(state), styles::hint_style()))),
        status_area,
    );
}

/// Key hints for the current screen and pane.
fn status_line(state: &ShellState) -> String {
    let hints = match state.screen() {
        Screen::Login => "Tab: alan  Enter: giriş  Ctrl+R: kayıt  Ctrl+F: parola sıfırla",
        Screen::Register => "Tab: alan  Enter: kayıt ol  Esc: girişe dön",
        Screen::Reset if state.reset().success => "Enter: girişe dön",
        Screen::Reset => "Enter: gönder  Esc: girişe dön",
        Screen::Main => match state.chat().active_pane {
            ActivePane::ChatList => "j/k: seç  Enter: aç  /: ara  i: yaz  l: çıkış yap  q: kapat",
            ActivePane::Search => "Yazarak filtreleyin  Enter/Esc: listeye dön",
            ActivePane::MessageInput => "Enter: gönder  Esc: listeye dön",
        },
    };

    format!("{} | Ctrl+C: kapat | {}", state.screen().as_label(), hints)
}

#[cfg(test)]
mod tests {
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::{
        domain::session::Session, infra::mock_conversations::MockConversationRepository,
        usecases::conversations::refresh_chat_list,
    };

    fn rendered_text(state: &ShellState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 32)).expect("test terminal");
        terminal
            .draw(|frame| render(frame, state))
            .expect("frame must render");

        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn restoring_state_shows_splash() {
        let text = rendered_text(&ShellState::default());

        assert!(text.contains(SPLASH_TEXT));
        assert!(!text.contains("Giriş Yap"));
    }

    #[test]
    fn login_screen_renders_form_and_error() {
        let mut state = ShellState::default();
        state.session_mut().sign_out();
        state.login_mut().status.fail("Parola hatalı");

        let text = rendered_text(&state);

        assert!(text.contains("Giriş Yap"));
        assert!(text.contains("E-posta"));
        assert!(text.contains("Parola hatalı"));
    }

    #[test]
    fn chat_screen_renders_sidebar_and_conversations() {
        let mut state = ShellState::default();
        state.complete_login(Session::new("uid-1"));
        refresh_chat_list(&MockConversationRepository, &mut state.chat_mut().chat_list);

        let text = rendered_text(&state);

        assert!(text.contains("Kullanıcı"));
        assert!(text.contains("Ahmet Yılmaz"));
        assert!(text.contains("Proje Grubu"));
    }

    #[test]
    fn status_line_names_screen_and_hints() {
        let mut state = ShellState::default();
        state.session_mut().sign_out();

        let line = status_line(&state);

        assert!(line.starts_with("login"));
        assert!(line.contains("Ctrl+R"));
    }

    #[test]
    fn status_line_after_reset_success_offers_return() {
        let mut state = ShellState::default();
        state
            .session_mut()
            .navigate(Screen::Reset)
            .expect("reset reachable while signed out");
        state.reset_mut().mark_sent();

        assert!(status_line(&state).ends_with("Enter: girişe dön"));
    }
}
