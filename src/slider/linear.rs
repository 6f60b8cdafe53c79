use super::{LinearControl, Orientation};
use crate::notify::Notifier;

/// An in-process integer slider control.
///
/// `LinearSlider` holds the state a generic slider exposes to the rest of an
/// application: an inclusive integer range, a current position and a
/// position-changed notification. Assignments are clamped into range, and
/// the notification fires exactly once per actual position change, so
/// assigning the current position again is silent.
///
/// The default range is `[0, 99]`.
///
/// # Examples
///
/// ```rust
/// use skala::{LinearControl, LinearSlider};
///
/// let mut slider = LinearSlider::new();
/// assert_eq!(slider.range(), (0, 99));
///
/// slider.set_position(150);
/// assert_eq!(slider.position(), 99); // clamped
/// ```
pub struct LinearSlider {
    minimum: i32,
    maximum: i32,
    position: i32,
    orientation: Orientation,
    position_changed: Notifier<i32>,
}

impl LinearSlider {
    /// Creates a horizontal slider over the default range `[0, 99]`.
    pub fn new() -> Self {
        Self::with_orientation(Orientation::Horizontal)
    }

    /// Creates a slider with the given orientation.
    pub fn with_orientation(orientation: Orientation) -> Self {
        Self {
            minimum: 0,
            maximum: 99,
            position: 0,
            orientation,
            position_changed: Notifier::new(),
        }
    }

    /// Returns the slider's orientation.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    fn move_to(&mut self, position: i32) {
        let clamped = position.clamp(self.minimum, self.maximum);
        if clamped != self.position {
            self.position = clamped;
            self.position_changed.notify(clamped);
        }
    }
}

impl Default for LinearSlider {
    fn default() -> Self {
        Self::new()
    }
}

impl LinearControl for LinearSlider {
    fn range(&self) -> (i32, i32) {
        (self.minimum, self.maximum)
    }

    fn set_range(&mut self, minimum: i32, maximum: i32) {
        self.minimum = minimum;
        self.maximum = maximum.max(minimum);
        self.move_to(self.position);
    }

    fn position(&self) -> i32 {
        self.position
    }

    fn set_position(&mut self, position: i32) {
        self.move_to(position);
    }

    fn position_changed(&self) -> &Notifier<i32> {
        &self.position_changed
    }
}
