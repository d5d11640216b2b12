//! Login, registration and password reset screens.

use ratatui::{
    layout::{Constraint, Direction, Flex, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::{
    domain::{
        forms::{FormStatus, LoginField, LoginForm, RegisterField, RegisterForm, ResetForm},
        password_policy::PasswordCheck,
    },
    usecases::{
        login::LOGIN_LOADING_LABEL, register::REGISTER_LOADING_LABEL,
        reset_password::RESET_LOADING_LABEL,
    },
};

use super::{
    styles,
    text_input::{render_text_field, FieldOptions},
};

const CARD_WIDTH: u16 = 56;
const FIELD_HEIGHT: u16 = 3;
const EMAIL_PLACEHOLDER: &str = "ornek@eposta.com";

pub fn render_login(frame: &mut Frame<'_>, area: Rect, form: &LoginForm) {
    let card = centered_card(area, 15);
    let [title_area, email_area, password_area, error_area, button_area, links_area] =
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(FIELD_HEIGHT),
                Constraint::Length(FIELD_HEIGHT),
                Constraint::Length(2),
                Constraint::Length(1),
                Constraint::Length(2),
            ])
            .areas(inner(frame, card, "Sohbet"));

    render_title(frame, title_area, "Giriş Yap");
    render_text_field(
        frame,
        email_area,
        &form.email,
        FieldOptions {
            title: "E-posta",
            placeholder: EMAIL_PLACEHOLDER,
            focused: form.focus == LoginField::Email,
            masked: false,
        },
    );
    render_text_field(
        frame,
        password_area,
        &form.password,
        FieldOptions {
            title: "Parola",
            placeholder: "Parolanız",
            focused: form.focus == LoginField::Password,
            masked: true,
        },
    );
    render_error(frame, error_area, &form.status);
    render_button(
        frame,
        button_area,
        submit_label(&form.status, "Giriş Yap", LOGIN_LOADING_LABEL),
        !form.status.loading,
    );

    let links = Paragraph::new(vec![
        Line::from(Span::styled("Ctrl+F  Parolamı unuttum", styles::hint_style())),
        Line::from(Span::styled("Ctrl+R  Hesabınız yok mu? Kayıt olun", styles::hint_style())),
    ]);
    frame.render_widget(links, links_area);
}

pub fn render_register(frame: &mut Frame<'_>, area: Rect, form: &RegisterForm) {
    let check = form.password_check();
    let checklist = if form.password.is_empty() {
        Vec::new()
    } else {
        requirement_lines(&check)
    };

    let card = centered_card(area, 16 + checklist.len() as u16);
    let [title_area, username_area, email_area, password_area, checklist_area, error_area, button_area, links_area] =
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(FIELD_HEIGHT),
                Constraint::Length(FIELD_HEIGHT),
                Constraint::Length(FIELD_HEIGHT),
                Constraint::Length(checklist.len() as u16),
                Constraint::Length(2),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .areas(inner(frame, card, "Sohbet"));

    render_title(frame, title_area, "Kayıt Ol");
    render_text_field(
        frame,
        username_area,
        &form.username,
        FieldOptions {
            title: "Kullanıcı adı",
            placeholder: "Görünen adınız",
            focused: form.focus == RegisterField::Username,
            masked: false,
        },
    );
    render_text_field(
        frame,
        email_area,
        &form.email,
        FieldOptions {
            title: "E-posta",
            placeholder: EMAIL_PLACEHOLDER,
            focused: form.focus == RegisterField::Email,
            masked: false,
        },
    );
    render_text_field(
        frame,
        password_area,
        &form.password,
        FieldOptions {
            title: "Parola",
            placeholder: "Güçlü bir parola",
            focused: form.focus == RegisterField::Password,
            masked: true,
        },
    );
    frame.render_widget(Paragraph::new(checklist), checklist_area);
    render_error(frame, error_area, &form.status);
    render_button(
        frame,
        button_area,
        submit_label(&form.status, "Kayıt Ol", REGISTER_LOADING_LABEL),
        form.can_submit(),
    );
    frame.render_widget(
        Paragraph::new(Span::styled(
            "Esc  Zaten hesabınız var mı? Giriş yapın",
            styles::hint_style(),
        )),
        links_area,
    );
}

pub fn render_reset(frame: &mut Frame<'_>, area: Rect, form: &ResetForm) {
    if form.success {
        render_reset_sent(frame, area);
        return;
    }

    let card = centered_card(area, 13);
    let [title_area, help_area, email_area, error_area, button_area, links_area] =
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(2),
                Constraint::Length(FIELD_HEIGHT),
                Constraint::Length(2),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .areas(inner(frame, card, "Sohbet"));

    render_title(frame, title_area, "Parolamı Unuttum");
    frame.render_widget(
        Paragraph::new(
            "E-posta adresinizi girin, size parola sıfırlama bağlantısı gönderelim.",
        )
        .wrap(Wrap { trim: true }),
        help_area,
    );
    render_text_field(
        frame,
        email_area,
        &form.email,
        FieldOptions {
            title: "E-posta",
            placeholder: EMAIL_PLACEHOLDER,
            focused: true,
            masked: false,
        },
    );
    render_error(frame, error_area, &form.status);
    render_button(
        frame,
        button_area,
        submit_label(&form.status, "Sıfırlama Bağlantısı Gönder", RESET_LOADING_LABEL),
        !form.status.loading,
    );
    frame.render_widget(
        Paragraph::new(Span::styled("Esc  Girişe dön", styles::hint_style())),
        links_area,
    );
}

fn render_reset_sent(frame: &mut Frame<'_>, area: Rect) {
    let card = centered_card(area, 8);
    let lines = vec![
        Line::from(Span::styled("E-posta gönderildi!", styles::success_style())),
        Line::default(),
        Line::from("Parola sıfırlama bağlantısı e-posta adresinize gönderildi."),
        Line::default(),
        Line::from(Span::styled("Enter  Girişe dön", styles::hint_style())),
    ];

    let inner_area = inner(frame, card, "Sohbet");
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner_area);
}

/// Checklist lines for the password rules, ticked when met.
fn requirement_lines(check: &PasswordCheck) -> Vec<Line<'static>> {
    check
        .requirements()
        .into_iter()
        .map(|(met, label)| {
            let mark = if met { "✓" } else { "○" };
            Line::from(Span::styled(
                format!("{mark} {label}"),
                styles::requirement_style(met),
            ))
        })
        .collect()
}

fn submit_label<'a>(status: &FormStatus, idle: &'a str, loading: &'a str) -> &'a str {
    if status.loading {
        loading
    } else {
        idle
    }
}

fn centered_card(area: Rect, height: u16) -> Rect {
    let [vertical] = Layout::vertical([Constraint::Length(height.saturating_add(2))])
        .flex(Flex::Center)
        .areas(area);
    let [card] = Layout::horizontal([Constraint::Length(CARD_WIDTH)])
        .flex(Flex::Center)
        .areas(vertical);
    card
}

fn inner(frame: &mut Frame<'_>, card: Rect, title: &str) -> Rect {
    let block = Block::default()
        .title(title.to_owned())
        .borders(Borders::ALL)
        .border_style(styles::inactive_panel_border_style());
    let inner_area = block.inner(card);
    frame.render_widget(block, card);
    inner_area
}

fn render_title(frame: &mut Frame<'_>, area: Rect, title: &str) {
    frame.render_widget(
        Paragraph::new(Span::styled(title.to_owned(), styles::title_style())),
        area,
    );
}

fn render_error(frame: &mut Frame<'_>, area: Rect, status: &FormStatus) {
    if let Some(error) = &status.error {
        frame.render_widget(
            Paragraph::new(Span::styled(error.clone(), styles::error_style()))
                .wrap(Wrap { trim: true }),
            area,
        );
    }
}

fn render_button(frame: &mut Frame<'_>, area: Rect, label: &str, enabled: bool) {
    frame.render_widget(
        Paragraph::new(Span::styled(format!(" {label} "), styles::button_style(enabled))),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn submit_label_switches_while_loading() {
        let mut status = FormStatus::default();
        assert_eq!(submit_label(&status, "Giriş Yap", LOGIN_LOADING_LABEL), "Giriş Yap");

        status.begin_submit();

        assert_eq!(
            submit_label(&status, "Giriş Yap", LOGIN_LOADING_LABEL),
            "Giriş yapılıyor..."
        );
    }

    #[test]
    fn requirement_lines_tick_met_rules() {
        let lines = requirement_lines(&PasswordCheck::evaluate("abcdefgh"));

        assert_eq!(lines.len(), 5);
        assert_eq!(line_text(&lines[0]), "✓ En az 8 karakter");
        assert_eq!(line_text(&lines[1]), "○ Büyük harf içermeli");
        assert_eq!(line_text(&lines[2]), "✓ Küçük harf içermeli");
    }

    #[test]
    fn centered_card_fits_inside_area() {
        let area = Rect::new(0, 0, 100, 40);

        let card = centered_card(area, 10);

        assert_eq!(card.width, CARD_WIDTH);
        assert_eq!(card.height, 12);
        assert!(card.x > 0 && card.y > 0);
    }
}
