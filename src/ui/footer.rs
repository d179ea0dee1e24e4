use crate::profile::ProfileState;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

const CARD_HINTS: &str =
    " f/click: Flip │ Tab: Focus │ Enter: Activate │ t: Theme │ e: Export │ s: Shorten │ c: Copy link │ q: Quit";
const LOADING_HINTS: &str = " t: Theme │ q: Quit";
const FAILED_HINTS: &str = " r: Retry │ q: Quit";

pub struct Footer;

impl Footer {
    pub fn new() -> Self {
        Self
    }

    pub fn hints(profile: &ProfileState) -> &'static str {
        match profile {
            ProfileState::Loading => LOADING_HINTS,
            ProfileState::Loaded(_) => CARD_HINTS,
            ProfileState::Failed { .. } => FAILED_HINTS,
        }
    }

    pub fn widget(&self, area: Rect, profile: &ProfileState) -> Paragraph<'static> {
        let hints = Self::hints(profile);
        let version = format!("v{} ", VERSION);

        // Char count, not byte count, for the box-drawing separators
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(hints.chars().count())
            .saturating_sub(version.chars().count());

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
