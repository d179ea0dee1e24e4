use ratatui::layout::{Constraint, Layout, Rect};

/// Screen regions, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub header: Rect,
    pub body: Rect,
    pub toast: Rect,
    pub footer: Rect,
}

pub fn layout_regions(area: Rect) -> ScreenLayout {
    let [header, body, toast, footer] = Layout::vertical([
        Constraint::Length(3.min(area.height)),
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(3),
    ])
    .areas(area);
    ScreenLayout {
        header,
        body,
        toast,
        footer,
    }
}

/// Where a face of `face_size` sits inside `body`: centered and clipped.
pub fn card_rect(body: Rect, face_size: (u16, u16)) -> Rect {
    centered_rect_by_size(face_size.0, face_size.1, body)
}

pub fn centered_rect_by_size(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
