use crate::card::view::FaceContext;
use crate::card::{CardContent, Face, FaceSurface, FlipTransition};
use crate::profile::ProfileState;
use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{card_rect, centered_rect_by_size, layout_regions};
use crate::ui::theme::{HEADER_TEXT, STATUS_ERROR, STATUS_OK};
use crate::ui::toast::{ToastLevel, ToastState};
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Clear, Paragraph, Wrap};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let layout = layout_regions(area);

    frame.render_widget(Header::new().widget(app), layout.header);
    frame.render_widget(Clear, layout.body);
    match app.profile_state() {
        ProfileState::Loading => draw_message(
            frame,
            layout.body,
            vec![Line::styled("Loading profile…", Style::default().fg(HEADER_TEXT))],
        ),
        ProfileState::Failed { message } => draw_message(
            frame,
            layout.body,
            vec![
                Line::styled(
                    format!("Failed to load profile: {message}"),
                    Style::default().fg(STATUS_ERROR),
                ),
                Line::raw(""),
                Line::styled(
                    "Press r to retry or q to quit",
                    Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM),
                ),
            ],
        ),
        ProfileState::Loaded(_) => {
            if let Some(content) = app.content() {
                draw_card(frame.buffer_mut(), layout.body, app, content);
            }
        }
    }
    draw_toast(frame, layout.toast, app.toast());
    frame.render_widget(
        Footer::new().widget(layout.footer, app.profile_state()),
        layout.footer,
    );
}

fn draw_message(frame: &mut Frame<'_>, body: Rect, lines: Vec<Line<'static>>) {
    let height = lines.len() as u16;
    let area = centered_rect_by_size(body.width, height, body);
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        area,
    );
}

/// Blit the face that is up onto the screen, squeezed while a flip runs.
fn draw_card(buf: &mut Buffer, body: Rect, app: &App, content: &CardContent) {
    let transition = app.transition();
    let face = if transition.shows_outgoing() {
        app.face().opposite()
    } else {
        app.face()
    };
    let Some(surface) = app.surfaces().get(face) else {
        return;
    };
    let interactive = face == Face::Back && !transition.is_active();
    let ctx = if interactive {
        app.face_context()
    } else {
        FaceContext {
            short_link: app.short_link().short_url(),
            ..FaceContext::default()
        }
    };
    let Some(rendered) = surface.render(content, app.theme(), &ctx, face.card_rotation()) else {
        return;
    };
    blit(buf, card_rect(body, surface.size()), surface, &rendered, transition);
}

fn blit(
    buf: &mut Buffer,
    card: Rect,
    surface: &FaceSurface,
    rendered: &Buffer,
    transition: FlipTransition,
) {
    let full_width = surface.size().0 as u32;
    let visible = ((card.width as f32) * transition.width_factor()).round() as u16;
    let visible = visible.clamp(1, card.width.max(1));
    let left = card.x + (card.width - visible.min(card.width)) / 2;

    for row in 0..card.height {
        for col in 0..visible.min(card.width) {
            let src_x = if transition.is_active() {
                (col as u32 * full_width / visible as u32) as u16
            } else {
                col
            };
            if let Some(cell) = rendered.cell((src_x, row)) {
                buf[(left + col, card.y + row)] = cell.clone();
            }
        }
    }
}

fn draw_toast(frame: &mut Frame<'_>, area: Rect, toast: &ToastState) {
    let (Some(message), Some(level)) = (toast.message(), toast.level()) else {
        return;
    };
    let color = match level {
        ToastLevel::Info => HEADER_TEXT,
        ToastLevel::Success => STATUS_OK,
        ToastLevel::Error => STATUS_ERROR,
    };
    frame.render_widget(
        Paragraph::new(Line::styled(
            message.to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        area,
    );
}
