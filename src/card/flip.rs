use crate::card::Face;
use crate::ui::mvi::{Intent, Reducer, UiState};

/// Which face is up. The face is a pure function of the flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FlipState {
    is_flipped: bool,
}

impl UiState for FlipState {}

impl FlipState {
    pub fn is_flipped(&self) -> bool {
        self.is_flipped
    }

    pub fn face(&self) -> Face {
        if self.is_flipped {
            Face::Back
        } else {
            Face::Front
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum FlipIntent {
    Toggle,
}

impl Intent for FlipIntent {}

pub struct FlipReducer;

impl Reducer for FlipReducer {
    type State = FlipState;
    type Intent = FlipIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FlipIntent::Toggle => FlipState {
                is_flipped: !state.is_flipped,
            },
        }
    }
}

/// Render-only flip animation, counted down in ticks.
///
/// Never consulted for the flip state itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FlipTransition {
    frames_left: u8,
}

impl FlipTransition {
    pub const FRAMES: u8 = 6;

    /// Start a flip, or run the one in flight back the way it came.
    pub fn start(&mut self) {
        self.frames_left = if self.frames_left == 0 {
            Self::FRAMES
        } else {
            Self::FRAMES - self.frames_left
        };
    }

    pub fn tick(&mut self) {
        self.frames_left = self.frames_left.saturating_sub(1);
    }

    pub fn is_active(&self) -> bool {
        self.frames_left > 0
    }

    /// Visible card width relative to rest: 1.0 at the ends, 0.0 edge-on.
    pub fn width_factor(&self) -> f32 {
        if self.frames_left == 0 {
            return 1.0;
        }
        let half = Self::FRAMES as f32 / 2.0;
        (self.frames_left as f32 - half).abs() / half
    }

    /// True during the first half, while the previous face is still up.
    pub fn shows_outgoing(&self) -> bool {
        self.frames_left * 2 > Self::FRAMES
    }
}
