use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

use crate::card::view::{render_face, FaceContext};
use crate::card::CardContent;
use crate::ui::theme::Theme;

/// One renderable side of the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Face {
    Front,
    Back,
}

impl Face {
    pub fn opposite(self) -> Self {
        match self {
            Face::Front => Face::Back,
            Face::Back => Face::Front,
        }
    }

    /// Transform the face carries while mounted on the card.
    pub fn resting_transform(self) -> FaceTransform {
        match self {
            Face::Front => FaceTransform::Identity,
            Face::Back => FaceTransform::RotatedY180,
        }
    }

    /// Rotation of the whole card when this face points at the viewer.
    pub fn card_rotation(self) -> FaceTransform {
        self.resting_transform()
    }
}

impl std::fmt::Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Face::Front => write!(f, "front"),
            Face::Back => write!(f, "back"),
        }
    }
}

/// Rotation about the vertical axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FaceTransform {
    #[default]
    Identity,
    RotatedY180,
}

impl FaceTransform {
    /// Apply `self`, then `other`.
    pub fn then(self, other: FaceTransform) -> FaceTransform {
        if self == other {
            FaceTransform::Identity
        } else {
            FaceTransform::RotatedY180
        }
    }

    pub fn is_mirrored(self) -> bool {
        self == FaceTransform::RotatedY180
    }
}

/// A mounted face: its size in cells and current transform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaceSurface {
    face: Face,
    width: u16,
    height: u16,
    transform: FaceTransform,
}

impl FaceSurface {
    pub fn new(face: Face, width: u16, height: u16) -> Self {
        Self {
            face,
            width,
            height,
            transform: face.resting_transform(),
        }
    }

    pub fn face(&self) -> Face {
        self.face
    }

    pub fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    pub fn transform(&self) -> FaceTransform {
        self.transform
    }

    pub fn set_transform(&mut self, transform: FaceTransform) {
        self.transform = transform;
    }

    /// Render off-screen as seen through `viewer`.
    ///
    /// Returns `None` for a zero-sized surface.
    pub fn render(
        &self,
        content: &CardContent,
        theme: Theme,
        ctx: &FaceContext<'_>,
        viewer: FaceTransform,
    ) -> Option<Buffer> {
        if self.width == 0 || self.height == 0 {
            return None;
        }
        let area = Rect::new(0, 0, self.width, self.height);
        let mut buffer = Buffer::empty(area);
        render_face(self.face, content, theme, ctx, area, &mut buffer);
        if self.transform.then(viewer).is_mirrored() {
            mirror_horizontally(&mut buffer);
        }
        Some(buffer)
    }
}

fn mirror_horizontally(buffer: &mut Buffer) {
    let area = buffer.area;
    for y in area.top()..area.bottom() {
        for offset in 0..area.width / 2 {
            let left = (area.x + offset, y);
            let right = (area.right() - 1 - offset, y);
            let cell = buffer[left].clone();
            buffer[left] = buffer[right].clone();
            buffer[right] = cell;
        }
    }
}

/// Mount points for both faces. Faces mount once content exists.
#[derive(Debug, Clone, Default)]
pub struct FaceSurfaces {
    front: Option<FaceSurface>,
    back: Option<FaceSurface>,
}

impl FaceSurfaces {
    pub fn mount(&mut self, width: u16, height: u16) {
        self.mount_face(Face::Front, width, height);
        self.mount_face(Face::Back, width, height);
    }

    /// (Re)mount one face at its resting transform.
    pub fn mount_face(&mut self, face: Face, width: u16, height: u16) {
        *self.slot(face) = Some(FaceSurface::new(face, width, height));
    }

    pub fn unmount(&mut self, face: Face) {
        *self.slot(face) = None;
    }

    pub fn get(&self, face: Face) -> Option<&FaceSurface> {
        match face {
            Face::Front => self.front.as_ref(),
            Face::Back => self.back.as_ref(),
        }
    }

    pub fn get_mut(&mut self, face: Face) -> Option<&mut FaceSurface> {
        self.slot(face).as_mut()
    }

    pub fn is_mounted(&self, face: Face) -> bool {
        self.get(face).is_some()
    }

    fn slot(&mut self, face: Face) -> &mut Option<FaceSurface> {
        match face {
            Face::Front => &mut self.front,
            Face::Back => &mut self.back,
        }
    }
}
