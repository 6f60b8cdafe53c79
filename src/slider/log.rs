use std::cell::RefCell;
use std::rc::Rc;

use num_traits::Float;

use super::{DecadeTicks, LinearControl, LinearSlider, Orientation, Tick};
use crate::notify::Notifier;
use crate::range::LogRange;

/// A slider whose linear position maps onto a logarithmic value range.
///
/// `LogSlider` composes a [`LogRange`] mapping with any integer control
/// implementing [`LinearControl`]. At construction it fixes the control's
/// range to the mapping's linear domain `[0, 1000]` and subscribes to the
/// control's position-changed notification; every position change, whatever
/// caused it, is re-emitted as a logarithmic-value-changed notification
/// carrying the recomputed value. That relay is the only origin of the
/// notification, and it runs synchronously on the same call stack as the
/// underlying position change.
///
/// Invalid inputs (non-positive or inverted bounds, out-of-range values) are
/// refused without touching existing state; the setters report this through
/// their `bool` result and are otherwise silent.
///
/// # Type Parameters
///
/// - `D`: Domain type of the logarithmic values (typically `f64`)
/// - `C`: The wrapped linear control (defaults to [`LinearSlider`])
///
/// # Examples
///
/// ## Picking a Value
///
/// ```rust
/// use skala::LogSlider;
///
/// let mut slider = LogSlider::<f64>::new();
///
/// // Default bounds (1.0, 100.0): 10 sits at the middle of [0, 1000]
/// assert!(slider.set_log_value(10.0));
/// assert!((slider.position() - 500).abs() <= 1);
/// assert!((slider.log_value() - 10.0).abs() < 0.1);
/// ```
///
/// ## An Audio-Style Frequency Range
///
/// ```rust
/// use skala::LogSlider;
///
/// let mut slider = LogSlider::<f64>::new();
/// assert!(slider.set_log_range(20.0, 20_000.0));
///
/// assert!(slider.set_log_value(20.0));
/// assert_eq!(slider.position(), 0);
///
/// assert!(slider.set_log_value(20_000.0));
/// assert_eq!(slider.position(), 1000);
///
/// // Out-of-range values are refused and nothing moves
/// assert!(!slider.set_log_value(40_000.0));
/// assert_eq!(slider.position(), 1000);
/// ```
///
/// ## Listening for Value Changes
///
/// ```rust
/// use skala::LogSlider;
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// let mut slider = LogSlider::<f64>::new();
///
/// let seen = Rc::new(Cell::new(0.0));
/// let inner = Rc::clone(&seen);
/// slider.on_log_value_changed(move |value| inner.set(value));
///
/// // The host toolkit dragging the thumb and programmatic assignment both
/// // arrive through the same relay
/// slider.set_position(1000);
/// assert!((seen.get() - 100.0).abs() < 1e-9);
/// ```
pub struct LogSlider<D = f64, C = LinearSlider>
where
    D: Float,
    C: LinearControl,
{
    control: C,
    range: Rc<RefCell<LogRange<D>>>,
    log_value_changed: Notifier<D>,
}

impl<D> LogSlider<D, LinearSlider>
where
    D: Float + 'static,
{
    /// Creates a horizontal slider around a fresh [`LinearSlider`].
    pub fn new() -> Self {
        Self::wrap(LinearSlider::new())
    }

    /// Creates a slider with the given orientation.
    pub fn with_orientation(orientation: Orientation) -> Self {
        Self::wrap(LinearSlider::with_orientation(orientation))
    }

    /// Returns the wrapped slider's orientation.
    pub fn orientation(&self) -> Orientation {
        self.control.orientation()
    }
}

impl<D> Default for LogSlider<D, LinearSlider>
where
    D: Float + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<D, C> LogSlider<D, C>
where
    D: Float + 'static,
    C: LinearControl,
{
    /// Wraps an existing control.
    ///
    /// The control's range is set to the mapping's linear domain and the
    /// relay is subscribed before the call returns, so every later position
    /// change produces exactly one logarithmic-value-changed notification.
    pub fn wrap(mut control: C) -> Self {
        let range = Rc::new(RefCell::new(LogRange::new()));
        let (lin_min, lin_max) = range.borrow().linear_domain();
        control.set_range(lin_min, lin_max);

        let log_value_changed = Notifier::new();
        let relay_range = Rc::clone(&range);
        let relay_out = log_value_changed.clone();
        control.position_changed().subscribe(move |position| {
            let value = relay_range.borrow().linear_to_log(position);
            relay_out.notify(value);
        });

        Self {
            control,
            range,
            log_value_changed,
        }
    }

    /// Returns the lower logarithmic bound.
    pub fn log_minimum(&self) -> D {
        self.range.borrow().log_minimum()
    }

    /// Returns the upper logarithmic bound.
    pub fn log_maximum(&self) -> D {
        self.range.borrow().log_maximum()
    }

    /// Replaces the logarithmic bounds.
    ///
    /// Returns `false` and changes nothing for non-positive or inverted
    /// bounds. The linear position never moves and no notification fires;
    /// [`LogSlider::log_value`] recomputes under the new bounds from the
    /// position already set.
    pub fn set_log_range(&mut self, min: D, max: D) -> bool {
        self.range.borrow_mut().set_log_range(min, max)
    }

    /// Returns the logarithmic value at the current position.
    pub fn log_value(&self) -> D {
        self.range.borrow().linear_to_log(self.control.position())
    }

    /// Moves the slider to the position for `value`.
    ///
    /// Returns `false` and leaves the position unchanged for values outside
    /// the logarithmic bounds. An accepted value is converted through the
    /// mapping and assigned to the control, driving the ordinary
    /// notification chain.
    pub fn set_log_value(&mut self, value: D) -> bool {
        let linear = {
            let range = self.range.borrow();
            if !range.contains(value) {
                return false;
            }
            range.log_to_linear(value)
        };

        self.control.set_position(linear);
        true
    }

    /// Returns the raw linear position.
    pub fn position(&self) -> i32 {
        self.control.position()
    }

    /// Assigns the raw linear position, clamped into the linear domain.
    pub fn set_position(&mut self, position: i32) {
        self.control.set_position(position);
    }

    /// Registers `listener` to run on every logarithmic value change.
    pub fn on_log_value_changed<F>(&self, listener: F)
    where
        F: FnMut(D) + 'static,
    {
        self.log_value_changed.subscribe(listener);
    }

    /// Returns the wrapped control.
    pub fn control(&self) -> &C {
        &self.control
    }

    /// Returns a copy of the current mapping.
    pub fn log_range(&self) -> LogRange<D> {
        *self.range.borrow()
    }

    /// Returns an iterator over decade tick marks for the current bounds.
    pub fn tick_iter(&self) -> DecadeTicks<D> {
        DecadeTicks::new(*self.range.borrow())
    }

    /// Collects the decade tick marks for the current bounds.
    ///
    /// Major ticks (level 0) sit at powers of ten, minor ticks (level 1) at
    /// the integer multiples in between, each carrying the linear position a
    /// host needs to draw it alongside the control.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use skala::LogSlider;
    ///
    /// let slider = LogSlider::<f64>::new();
    /// let majors: Vec<_> = slider
    ///     .ticks()
    ///     .into_iter()
    ///     .filter(|t| t.level == 0)
    ///     .map(|t| t.value)
    ///     .collect();
    ///
    /// assert_eq!(majors, vec![1.0, 10.0, 100.0]);
    /// ```
    pub fn ticks(&self) -> Vec<Tick<D>> {
        self.tick_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record<C: LinearControl>(slider: &LogSlider<f64, C>) -> Rc<RefCell<Vec<f64>>> {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let inner = Rc::clone(&seen);
        slider.on_log_value_changed(move |value| inner.borrow_mut().push(value));
        seen
    }

    #[test]
    fn test_defaults() {
        let slider = LogSlider::<f64>::new();

        assert_eq!(slider.log_minimum(), 1.0);
        assert_eq!(slider.log_maximum(), 100.0);
        assert_eq!(slider.position(), 0);
        assert_eq!(slider.control().range(), (0, 1000));
        assert!((slider.log_value() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_set_log_value_moves_to_the_midpoint() {
        let mut slider = LogSlider::<f64>::new();

        assert!(slider.set_log_value(10.0));
        assert!((slider.position() - 500).abs() <= 1);
        assert!((slider.log_value() / 10.0 - 1.0).abs() < 0.01);
    }

    #[test]
    fn test_set_log_value_rejects_out_of_range_values() {
        let mut slider = LogSlider::<f64>::new();
        assert!(slider.set_log_value(10.0));
        let position = slider.position();

        let seen = record(&slider);
        assert!(!slider.set_log_value(150.0));
        assert!(!slider.set_log_value(0.5));
        assert!(!slider.set_log_value(-2.0));

        assert_eq!(slider.position(), position);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_set_log_range_recomputes_without_moving() {
        let mut slider = LogSlider::<f64>::new();
        assert!(slider.set_log_value(10.0));
        let position = slider.position();

        let seen = record(&slider);
        assert!(slider.set_log_range(1.0, 10_000.0));

        // Same position, new bounds: the derived value follows.
        assert_eq!(slider.position(), position);
        assert!((slider.log_value() / 100.0 - 1.0).abs() < 0.02);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_set_log_range_rejects_invalid_bounds() {
        let mut slider = LogSlider::<f64>::new();

        assert!(!slider.set_log_range(-1.0, 50.0));
        assert!(!slider.set_log_range(50.0, 50.0));

        assert_eq!(slider.log_minimum(), 1.0);
        assert_eq!(slider.log_maximum(), 100.0);
    }

    #[test]
    fn test_every_position_change_relays_exactly_once() {
        let mut slider = LogSlider::<f64>::new();
        let seen = record(&slider);

        slider.set_position(250);
        assert_eq!(seen.borrow().len(), 1);

        // Same value again: no position change, no notification.
        slider.set_position(250);
        assert_eq!(seen.borrow().len(), 1);

        assert!(slider.set_log_value(50.0));
        assert_eq!(seen.borrow().len(), 2);

        assert!(slider.set_log_range(2.0, 64.0));
        assert_eq!(seen.borrow().len(), 2);
    }

    #[test]
    fn test_relay_carries_the_recomputed_value() {
        let mut slider = LogSlider::<f64>::new();
        let seen = record(&slider);

        slider.set_position(250);
        assert_eq!(*seen.borrow(), vec![slider.log_value()]);

        assert!(slider.set_log_value(50.0));
        let last = *seen.borrow().last().unwrap();
        assert_eq!(last, slider.log_value());
        assert!((last / 50.0 - 1.0).abs() < 0.01);
    }

    #[test]
    fn test_boundary_positions_are_exact() {
        let mut slider = LogSlider::<f64>::new();
        assert!(slider.set_log_range(20.0, 20_000.0));

        assert!(slider.set_log_value(20_000.0));
        assert_eq!(slider.position(), 1000);

        assert!(slider.set_log_value(20.0));
        assert_eq!(slider.position(), 0);
    }

    #[test]
    fn test_orientation_constructors() {
        let horizontal = LogSlider::<f64>::new();
        assert_eq!(horizontal.orientation(), Orientation::Horizontal);

        let vertical = LogSlider::<f64>::with_orientation(Orientation::Vertical);
        assert_eq!(vertical.orientation(), Orientation::Vertical);
    }

    #[test]
    fn test_ticks_follow_the_current_bounds() {
        let mut slider = LogSlider::<f64>::new();
        assert!(slider.set_log_range(20.0, 500.0));

        let ticks = slider.ticks();
        let values: Vec<_> = ticks.iter().map(|t| t.value).collect();
        assert_eq!(
            values,
            vec![
                20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0, 90.0, 100.0, 200.0, 300.0, 400.0, 500.0
            ]
        );
        assert!(ticks.iter().all(|t| (0..=1000).contains(&t.position)));
    }

    // A minimal foreign control, standing in for a host toolkit's slider.
    struct HostControl {
        minimum: i32,
        maximum: i32,
        position: i32,
        position_changed: Notifier<i32>,
    }

    impl HostControl {
        fn new() -> Self {
            Self {
                minimum: 0,
                maximum: 10,
                position: 3,
                position_changed: Notifier::new(),
            }
        }
    }

    impl LinearControl for HostControl {
        fn range(&self) -> (i32, i32) {
            (self.minimum, self.maximum)
        }

        fn set_range(&mut self, minimum: i32, maximum: i32) {
            self.minimum = minimum;
            self.maximum = maximum.max(minimum);
            let clamped = self.position.clamp(self.minimum, self.maximum);
            if clamped != self.position {
                self.position = clamped;
                self.position_changed.notify(clamped);
            }
        }

        fn position(&self) -> i32 {
            self.position
        }

        fn set_position(&mut self, position: i32) {
            let clamped = position.clamp(self.minimum, self.maximum);
            if clamped != self.position {
                self.position = clamped;
                self.position_changed.notify(clamped);
            }
        }

        fn position_changed(&self) -> &Notifier<i32> {
            &self.position_changed
        }
    }

    #[test]
    fn test_wrap_adopts_a_foreign_control() {
        let mut slider: LogSlider<f64, HostControl> = LogSlider::wrap(HostControl::new());
        assert_eq!(slider.control().range(), (0, 1000));

        let seen = record(&slider);
        assert!(slider.set_log_value(10.0));

        assert!((slider.position() - 500).abs() <= 1);
        assert_eq!(seen.borrow().len(), 1);
    }
}
