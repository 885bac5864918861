use crate::{data_structures::color::Color, settings::BlendMode};

impl BlendMode {
    /// Composites `incoming` onto `existing`, component-wise over all four
    /// channels. Results are not clamped.
    #[inline]
    pub fn combine(self, existing: Color, incoming: Color) -> Color {
        match self {
            BlendMode::Replace => incoming,
            BlendMode::Add => existing + incoming,
            BlendMode::Multiply => existing * incoming,
        }
    }
}

/// Free-function form of [`BlendMode::combine`].
#[inline]
pub fn combine(existing: Color, incoming: Color, mode: BlendMode) -> Color {
    mode.combine(existing, incoming)
}
