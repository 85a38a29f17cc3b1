use crate::core::Vec2;

/// Day repels and despawns at the walls, night spawns and piles up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Mode {
    Day,
    #[default]
    Night,
}

impl Mode {
    pub fn from_is_day(is_day: bool) -> Self {
        if is_day { Mode::Day } else { Mode::Night }
    }

    #[inline]
    pub fn is_day(self) -> bool {
        self == Mode::Day
    }
}

/// Per-step inputs from the driver: where the pointer is and which mode is on.
#[derive(Clone, Copy, Debug, Default)]
pub struct StepContext {
    pub pointer: Vec2,
    pub mode: Mode,
}

impl StepContext {
    /// Non-finite pointer coordinates are read as 0.
    pub fn new(pointer_x: f32, pointer_y: f32, mode: Mode) -> Self {
        let finite = |v: f32| if v.is_finite() { v } else { 0.0 };
        Self {
            pointer: Vec2::new(finite(pointer_x), finite(pointer_y)),
            mode,
        }
    }

    pub fn day(pointer_x: f32, pointer_y: f32) -> Self {
        Self::new(pointer_x, pointer_y, Mode::Day)
    }

    pub fn night(pointer_x: f32, pointer_y: f32) -> Self {
        Self::new(pointer_x, pointer_y, Mode::Night)
    }

    #[inline]
    pub fn is_day(&self) -> bool {
        self.mode.is_day()
    }
}
