use crate::profile::ProfileState;
use crate::shortlink::ShortLinkState;
use crate::ui::app::App;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_ERROR, STATUS_OK};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, app: &App) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);

        let (status_color, who) = match app.profile_state() {
            ProfileState::Loading => (HEADER_SEPARATOR, "loading…".to_string()),
            ProfileState::Loaded(profile) => (STATUS_OK, profile.name.clone()),
            ProfileState::Failed { .. } => (STATUS_ERROR, "no profile".to_string()),
        };
        let link = match app.short_link() {
            ShortLinkState::Idle => "no short link".to_string(),
            ShortLinkState::Pending { .. } => "shortening…".to_string(),
            ShortLinkState::Ready(result) => result.short_url.clone(),
            ShortLinkState::Failed { .. } => "short link failed".to_string(),
        };

        let mut spans = vec![
            Span::styled("  ", text_style),
            Span::styled("●", Style::default().fg(status_color)),
            Span::styled("  ", text_style),
            Span::styled(who, text_style),
        ];
        for part in [
            app.face().to_string(),
            format!("theme: {}", app.theme().label()),
            link,
        ] {
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled(part, text_style));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
