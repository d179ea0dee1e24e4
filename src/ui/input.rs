use crate::card::view::back_layout;
use crate::card::{CopyTarget, Face};
use crate::profile::ProfileState;
use crate::ui::app::{App, Focus};
use crate::ui::layout::{card_rect, layout_regions};
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Position, Rect};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.request_quit();
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.request_quit(),
        KeyCode::Esc => match app.focus() {
            Focus::Action(_) => app.clear_focus(),
            Focus::Card => app.request_quit(),
        },
        KeyCode::Char('r') => {
            if matches!(app.profile_state(), ProfileState::Failed { .. }) {
                app.load_profile();
            }
        }
        KeyCode::Char('t') => app.toggle_theme(),
        _ if app.content().is_none() => {}
        KeyCode::Enter | KeyCode::Char(' ') => app.activate_focused(),
        KeyCode::Char('f') => app.toggle(),
        KeyCode::Tab | KeyCode::Down => app.move_focus(true),
        KeyCode::BackTab | KeyCode::Up => app.move_focus(false),
        KeyCode::Char('e') => app.export_both_faces(),
        KeyCode::Char('s') => app.shorten(),
        KeyCode::Char('c') => app.copy(CopyTarget::ShortLink),
        _ => {}
    }
}

/// Left click on the card flips it, unless it lands on a back-face action,
/// which then runs instead.
pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }
    let Some((cols, rows)) = app.size() else {
        return;
    };
    let Some(face_size) = app.surfaces().get(app.face()).map(|surface| surface.size()) else {
        return;
    };

    let screen = Rect::new(0, 0, cols, rows);
    let card = card_rect(layout_regions(screen).body, face_size);
    let click = Position::new(mouse.column, mouse.row);
    if !card.contains(click) {
        if app.toast().is_visible() {
            app.dismiss_toast();
        }
        return;
    }

    // Mid-flip the rows are squeezed; a click then only flips.
    if app.face() == Face::Back && !app.transition().is_active() {
        let qr = app.content().and_then(|content| content.qr.as_ref().ok());
        let layout = back_layout(Rect::new(0, 0, face_size.0, face_size.1), qr);
        if let Some(action) = layout.action_at(mouse.column - card.x, mouse.row - card.y) {
            app.activate(action);
            return;
        }
    }
    app.toggle();
}
