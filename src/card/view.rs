//! Rendering of the two faces into a buffer.

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Paragraph, Widget};

use crate::card::{CardAction, CardContent, CopyTarget, Face};
use crate::qr::{QrError, QrMatrix};
use crate::ui::theme::{Theme, ThemeTokens};

/// Columns kept for the contact rows before the QR column takes the rest.
const CONTACT_MIN_WIDTH: u16 = 30;
const LABEL_WIDTH: usize = 10;
const QR_CAPTION: &str = "Scan to visit my website";

/// Per-frame inputs that are not part of the profile.
#[derive(Debug, Clone, Copy, Default)]
pub struct FaceContext<'a> {
    pub focused: Option<CardAction>,
    pub copied: Option<CopyTarget>,
    pub short_link: Option<&'a str>,
}

/// Where the back face puts its children, relative to the face area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackLayout {
    pub actions: Vec<(CardAction, Rect)>,
    /// Right-hand column holding the QR code or a notice.
    pub column: Rect,
    /// `None` when no arrangement of the symbol fits the column.
    pub qr: Option<QrPlacement>,
    /// Present only when a row is left under the QR code.
    pub caption: Option<Rect>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QrPlacement {
    pub rect: Rect,
    pub quiet_zone: usize,
}

impl BackLayout {
    pub fn action_at(&self, column: u16, row: u16) -> Option<CardAction> {
        self.actions
            .iter()
            .find(|(_, rect)| {
                column >= rect.x && column < rect.right() && row >= rect.y && row < rect.bottom()
            })
            .map(|(action, _)| *action)
    }

    /// Single row in the middle of the column for non-QR messages.
    pub fn notice(&self) -> Rect {
        let column = self.column;
        Rect::new(column.x, column.y + column.height / 2, column.width, 1)
    }
}

/// Arrangements tried in order until one fits: full border with caption,
/// then a thinner border, then the symbol alone.
const QR_ARRANGEMENTS: [(usize, bool); 4] = [
    (QrMatrix::QUIET_ZONE, true),
    (QrMatrix::MIN_QUIET_ZONE, true),
    (QrMatrix::QUIET_ZONE, false),
    (QrMatrix::MIN_QUIET_ZONE, false),
];

pub fn back_layout(area: Rect, qr: Option<&QrMatrix>) -> BackLayout {
    let inner = inset(area);
    let preferred_cols = qr.map_or(0, |matrix| matrix.text_size(QrMatrix::QUIET_ZONE).0);
    let right_width = preferred_cols
        .max(QR_CAPTION.len() as u16)
        .min(inner.width.saturating_sub(CONTACT_MIN_WIDTH));
    let right = Rect {
        x: inner.right().saturating_sub(right_width),
        y: inner.y,
        width: right_width,
        height: inner.height,
    };
    let left = Rect {
        x: inner.x.saturating_add(1),
        y: inner.y.saturating_add(1),
        width: inner.width.saturating_sub(right_width).saturating_sub(2),
        height: inner.height.saturating_sub(1),
    };

    let actions = CardAction::ALL
        .iter()
        .enumerate()
        .map(|(idx, action)| {
            let y = left.y.saturating_add(idx as u16 * 2);
            (*action, Rect::new(left.x, y, left.width, 1))
        })
        .filter(|(_, rect)| rect.y < left.bottom())
        .collect();

    let arrangement = qr.and_then(|matrix| {
        QR_ARRANGEMENTS.iter().find_map(|&(quiet_zone, with_caption)| {
            let (cols, rows) = matrix.text_size(quiet_zone);
            let block = rows.saturating_add(u16::from(with_caption));
            (cols <= right.width && block <= right.height).then(|| {
                let rect = Rect {
                    x: right.x + (right.width - cols) / 2,
                    y: right.y + (right.height - block) / 2,
                    width: cols,
                    height: rows,
                };
                (QrPlacement { rect, quiet_zone }, with_caption)
            })
        })
    });

    let caption = arrangement
        .filter(|(_, with_caption)| *with_caption)
        .map(|(placement, _)| Rect::new(right.x, placement.rect.bottom(), right.width, 1));

    BackLayout {
        actions,
        column: right,
        qr: arrangement.map(|(placement, _)| placement),
        caption,
    }
}

pub fn render_face(
    face: Face,
    content: &CardContent,
    theme: Theme,
    ctx: &FaceContext<'_>,
    area: Rect,
    buf: &mut Buffer,
) {
    let tokens = theme.tokens();
    match face {
        Face::Front => render_front(content, &tokens, area, buf),
        Face::Back => render_back(content, &tokens, ctx, area, buf),
    }
}

fn face_block(tokens: &ThemeTokens, bg: ratatui::style::Color) -> Block<'static> {
    Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::new().fg(tokens.border).bg(bg))
        .style(Style::new().fg(tokens.face_fg).bg(bg))
}

fn render_front(content: &CardContent, tokens: &ThemeTokens, area: Rect, buf: &mut Buffer) {
    let block = face_block(tokens, tokens.face_bg);
    let inner = block.inner(area);
    block.render(area, buf);

    let profile = &content.profile;
    let lines = vec![
        Line::styled(
            profile.name.clone(),
            Style::new().fg(tokens.face_fg).add_modifier(Modifier::BOLD),
        ),
        Line::raw(""),
        Line::styled(profile.title.clone(), Style::new().fg(tokens.accent)),
        Line::styled(profile.company.clone(), Style::new().fg(tokens.muted)),
    ];
    let top = inner.y + inner.height.saturating_sub(lines.len() as u16) / 2;
    let text_area = Rect {
        y: top,
        height: inner.bottom().saturating_sub(top),
        ..inner
    };
    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .render(text_area, buf);

    if inner.height > 6 {
        let hint = Rect::new(inner.x, inner.bottom() - 1, inner.width, 1);
        Paragraph::new(Line::styled(
            "click or Enter to flip",
            Style::new().fg(tokens.muted).add_modifier(Modifier::DIM),
        ))
        .alignment(Alignment::Center)
        .render(hint, buf);
    }
}

fn render_back(
    content: &CardContent,
    tokens: &ThemeTokens,
    ctx: &FaceContext<'_>,
    area: Rect,
    buf: &mut Buffer,
) {
    face_block(tokens, tokens.back_bg).render(area, buf);

    let qr = content.qr.as_ref().ok();
    let layout = back_layout(area, qr);
    let profile = &content.profile;

    for (action, rect) in &layout.actions {
        let value = match action {
            CardAction::CopyPhone => profile.phone.clone(),
            CardAction::CopyEmail => profile.email.clone(),
            CardAction::OpenLinkedIn => display_url(profile.linkedin.as_str()),
            CardAction::OpenGithub => display_url(profile.github.as_str()),
            CardAction::OpenWebsite => display_url(profile.website.as_str()),
            CardAction::CopyShortLink => ctx
                .short_link
                .map(str::to_string)
                .unwrap_or_else(|| "press s to create".to_string()),
        };

        let focused = ctx.focused == Some(*action);
        let row_style = if focused {
            Style::new()
                .fg(tokens.face_fg)
                .bg(tokens.button_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::new().fg(tokens.face_fg).bg(tokens.back_bg)
        };
        buf.set_style(*rect, row_style);

        let marker = if action.is_link() { " ↗" } else { "" };
        let label = format!("{:<width$}", format!("{}{}", action.label(), marker), width = LABEL_WIDTH);
        let label_style = row_style.fg(tokens.muted);
        let (x, _) = buf.set_stringn(rect.x, rect.y, &label, rect.width as usize, label_style);

        let value_style = if action.is_link() {
            row_style.fg(tokens.link)
        } else {
            row_style
        };
        let remaining = rect.right().saturating_sub(x) as usize;
        let copied = action.copy_target().is_some() && action.copy_target() == ctx.copied;
        let badge = if copied { "  ✓ Copied" } else { "" };
        let value_width = remaining.saturating_sub(badge.chars().count());
        let (x, _) = buf.set_stringn(x, rect.y, &value, value_width, value_style);
        if copied {
            let remaining = rect.right().saturating_sub(x) as usize;
            buf.set_stringn(x, rect.y, badge, remaining, row_style.fg(tokens.success));
        }
    }

    let notice = match (&content.qr, layout.qr) {
        (Ok(matrix), Some(placement)) => {
            let style = Style::new().fg(tokens.qr_fg).bg(tokens.qr_bg);
            let lines = matrix.half_block_lines(placement.quiet_zone);
            for (offset, line) in lines.iter().enumerate() {
                buf.set_string(placement.rect.x, placement.rect.y + offset as u16, line, style);
            }
            if let Some(caption) = layout.caption {
                Paragraph::new(Line::styled(QR_CAPTION, Style::new().fg(tokens.muted)))
                    .alignment(Alignment::Center)
                    .render(caption, buf);
            }
            None
        }
        (Ok(_), None) => Some("enlarge the card to show the QR"),
        (Err(QrError::DataTooLong { .. }), _) => Some("website too long for QR"),
        (Err(QrError::Encode(_)), _) => Some("QR code unavailable"),
    };
    if let Some(text) = notice {
        Paragraph::new(Line::styled(text, Style::new().fg(tokens.muted)))
            .alignment(Alignment::Center)
            .render(layout.notice(), buf);
    }
}

fn inset(area: Rect) -> Rect {
    Rect {
        x: area.x.saturating_add(1),
        y: area.y.saturating_add(1),
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}

fn display_url(url: &str) -> String {
    let without_scheme = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url);
    without_scheme.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{MIN_FACE_HEIGHT, MIN_FACE_WIDTH};

    #[test]
    fn display_url_drops_scheme_and_trailing_slash() {
        assert_eq!(display_url("https://github.com/alex/"), "github.com/alex");
        assert_eq!(display_url("http://example.com"), "example.com");
    }

    #[test]
    fn actions_stack_two_rows_apart() {
        let qr = QrMatrix::encode("https://example.com/alex").unwrap();
        let layout = back_layout(Rect::new(0, 0, 78, 24), Some(&qr));
        assert_eq!(layout.actions.len(), CardAction::ALL.len());
        assert_eq!(layout.actions[0].1.y, 2);
        assert_eq!(layout.actions[1].1.y, 4);
        assert!(layout.qr.is_some());
        assert_eq!(layout.action_at(3, 4), Some(CardAction::CopyEmail));
        assert_eq!(layout.action_at(3, 3), None);
    }

    #[test]
    fn long_website_keeps_its_qr_without_the_caption() {
        let url = format!("https://example.com/{}", "a".repeat(80));
        let qr = QrMatrix::encode(&url).unwrap();
        let layout = back_layout(Rect::new(0, 0, 78, 24), Some(&qr));
        let placement = layout.qr.expect("QR still placed");
        assert_eq!(placement.quiet_zone, QrMatrix::MIN_QUIET_ZONE);
        assert_eq!(placement.rect.height, 22);
        assert!(layout.caption.is_none());
        assert!(placement.rect.bottom() <= 23);
    }

    #[test]
    fn typical_website_fits_the_smallest_face() {
        let qr = QrMatrix::encode("https://alexchen.dev/portfolio").unwrap();
        let area = Rect::new(0, 0, MIN_FACE_WIDTH, MIN_FACE_HEIGHT);
        let layout = back_layout(area, Some(&qr));
        let placement = layout.qr.expect("QR fits the minimum face");
        assert!(placement.rect.right() < area.right());
        assert!(layout.actions.iter().all(|(_, rect)| rect.right() <= placement.rect.x));
    }

    #[test]
    fn oversized_qr_is_left_out() {
        let qr = QrMatrix::encode(&format!("https://example.com/{}", "a".repeat(600))).unwrap();
        let layout = back_layout(Rect::new(0, 0, 78, 24), Some(&qr));
        assert!(layout.qr.is_none());
        assert!(layout.caption.is_none());
    }

    fn back_text(content: &CardContent) -> String {
        let area = Rect::new(0, 0, 78, 24);
        let mut buf = Buffer::empty(area);
        render_face(Face::Back, content, Theme::Dark, &FaceContext::default(), area, &mut buf);
        (0..area.height)
            .map(|y| (0..area.width).map(|x| buf[(x, y)].symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn content_with_website(website: &str) -> CardContent {
        let json = format!(
            r#"{{"name":"Alex Chen","title":"Staff Engineer","company":"Example Corp",
                "phone":"+1-555-0100","email":"alex@example.com",
                "linkedin":"https://www.linkedin.com/in/alex","github":"https://github.com/alex",
                "website":"{website}"}}"#
        );
        CardContent::new(std::sync::Arc::new(crate::profile::Profile::from_json(&json).unwrap()))
    }

    #[test]
    fn notices_tell_no_room_apart_from_too_long() {
        let no_room = content_with_website(&format!("https://example.com/{}", "a".repeat(600)));
        let text = back_text(&no_room);
        assert!(text.contains("enlarge the card"));
        assert!(!text.contains("too long"));

        let too_long = content_with_website(&format!("https://example.com/{}", "a".repeat(5000)));
        let text = back_text(&too_long);
        assert!(text.contains("website too long for QR"));
    }
}
