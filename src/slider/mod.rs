//! Slider components: the generic linear control contract, a concrete
//! in-process control, and the logarithmic wrapper that composes them.

mod linear;
mod log;
mod tick;

pub use linear::LinearSlider;
pub use log::LogSlider;
pub use tick::{DecadeTicks, Tick};

use crate::notify::Notifier;

/// Orientation of a slider control.
///
/// Purely descriptive: rendering and input handling stay with the embedding
/// host, which reads the orientation back when laying the control out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

/// The capability a [`LogSlider`] requires from the linear control it wraps.
///
/// This is the integration contract with a generic integer-valued slider:
/// an inclusive linear range, a current position, and a position-changed
/// notification. Any control that can express these three things can carry a
/// logarithmic mapping, which keeps the mapping logic independent of any UI
/// toolkit. [`LinearSlider`] is the in-process implementation used by
/// default.
pub trait LinearControl {
    /// Returns the inclusive `(minimum, maximum)` linear range.
    fn range(&self) -> (i32, i32);

    /// Replaces the linear range, keeping `maximum >= minimum` and clamping
    /// the current position into the new range.
    fn set_range(&mut self, minimum: i32, maximum: i32);

    /// Returns the current linear position.
    fn position(&self) -> i32;

    /// Assigns the position, clamped into range.
    ///
    /// Implementations fire [`LinearControl::position_changed`] exactly once
    /// when the stored position actually changes, and not at all for a
    /// same-value assignment.
    fn set_position(&mut self, position: i32);

    /// The position-changed notification source.
    fn position_changed(&self) -> &Notifier<i32>;
}
