use num_traits::Float;

/// Logarithmic range mapping: converts between a fixed-resolution linear
/// integer domain and a continuous logarithmic value range.
///
/// `LogRange` owns a pair of strictly positive logarithmic bounds and an
/// integer linear domain, and maps bidirectionally between them. Equal steps
/// in linear position correspond to equal *multiplicative* steps in the
/// logarithmic value, which is what makes a physically linear slider gesture
/// usable for quantities spanning several orders of magnitude (frequencies,
/// gain factors, zoom levels).
///
/// The logarithmic value is never stored: it is always recomputed from a
/// linear position, so it cannot go stale.
///
/// # Type Parameters
///
/// - `D`: Domain type of the logarithmic values (typically `f64`)
///
/// # Range Invariant
///
/// `log_min > 0`, `log_max > 0` and `log_min < log_max` hold at all times.
/// [`LogRange::set_log_range`] refuses any assignment that would break this
/// and leaves the previous bounds in place.
///
/// # Examples
///
/// ## Basic Usage
///
/// ```rust
/// use skala::LogRange;
///
/// // Default bounds (1.0, 100.0) over the linear domain [0, 1000]
/// let range = LogRange::<f64>::new();
///
/// assert_eq!(range.log_to_linear(1.0), 0);
/// assert_eq!(range.log_to_linear(100.0), 1000);
///
/// // The geometric midpoint sits at the middle of the linear domain
/// let mid = range.linear_to_log(500);
/// assert!((mid - 10.0).abs() < 1e-9);
/// ```
///
/// ## Changing the Bounds
///
/// ```rust
/// use skala::LogRange;
///
/// let mut range = LogRange::<f64>::new();
///
/// assert!(range.set_log_range(20.0, 20_000.0));
/// assert_eq!(range.log_to_linear(20.0), 0);
/// assert_eq!(range.log_to_linear(20_000.0), 1000);
///
/// // Non-positive or inverted bounds are refused and nothing changes
/// assert!(!range.set_log_range(-1.0, 50.0));
/// assert_eq!(range.log_minimum(), 20.0);
/// assert_eq!(range.log_maximum(), 20_000.0);
/// ```
///
/// ## Truncation
///
/// Mapping into the integer domain truncates toward zero rather than
/// rounding, which biases positions slightly downward:
///
/// ```rust
/// use skala::LogRange;
///
/// let range = LogRange::<f64>::new();
/// assert_eq!(range.log_to_linear(9.99), 499);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogRange<D = f64>
where
    D: Float,
{
    log_min: D,
    log_max: D,
    lin_min: i32,
    lin_max: i32,
}

impl<D> LogRange<D>
where
    D: Float,
{
    /// Creates a mapping with bounds `(1.0, 100.0)` over the linear domain
    /// `[0, 1000]`.
    ///
    /// A thousand linear steps give sub-percent resolution across the range.
    pub fn new() -> Self {
        Self::with_linear_domain(0, 1000)
    }

    /// Creates a mapping with the default bounds `(1.0, 100.0)` over a
    /// caller-chosen linear domain.
    ///
    /// Callers keep `lin_min <= lin_max`; an empty domain (`lin_min ==
    /// lin_max`) is tolerated and collapses every conversion to the lower
    /// edge.
    ///
    /// # Examples
    ///
    /// ```
    /// use skala::LogRange;
    ///
    /// let range = LogRange::<f64>::with_linear_domain(0, 127);
    /// assert_eq!(range.linear_domain(), (0, 127));
    /// assert_eq!(range.log_to_linear(100.0), 127);
    /// ```
    pub fn with_linear_domain(lin_min: i32, lin_max: i32) -> Self {
        Self {
            log_min: D::one(),
            log_max: D::from(100.0).unwrap(),
            lin_min,
            lin_max,
        }
    }

    /// Returns the lower logarithmic bound.
    pub fn log_minimum(&self) -> D {
        self.log_min
    }

    /// Returns the upper logarithmic bound.
    pub fn log_maximum(&self) -> D {
        self.log_max
    }

    /// Returns the inclusive `(minimum, maximum)` linear domain.
    pub fn linear_domain(&self) -> (i32, i32) {
        (self.lin_min, self.lin_max)
    }

    /// Replaces the logarithmic bounds.
    ///
    /// Returns `false` and leaves the bounds unchanged if `min <= 0`,
    /// `max <= 0` or `min >= max`. Linear positions are untouched either
    /// way, so a value recomputed from the same position after a successful
    /// call will differ.
    pub fn set_log_range(&mut self, min: D, max: D) -> bool {
        if min <= D::zero() || max <= D::zero() || min >= max {
            return false;
        }

        self.log_min = min;
        self.log_max = max;
        true
    }

    /// Returns true if `value` lies within the logarithmic bounds, inclusive.
    pub fn contains(&self, value: D) -> bool {
        value >= self.log_min && value <= self.log_max
    }

    /// Converts a linear position to its logarithmic value.
    ///
    /// An empty linear domain returns the lower logarithmic bound. Positions
    /// outside the linear domain are not clamped and extrapolate along the
    /// same curve.
    pub fn linear_to_log(&self, linear: i32) -> D {
        if self.lin_max == self.lin_min {
            return self.log_min;
        }

        let offset = D::from(linear - self.lin_min).unwrap();
        let span = D::from(self.lin_max - self.lin_min).unwrap();
        let ratio = offset / span;

        let ln_min = self.log_min.ln();
        let ln_max = self.log_max.ln();

        (ln_min + ratio * (ln_max - ln_min)).exp()
    }

    /// Converts a logarithmic value to its linear position, truncating
    /// toward zero.
    ///
    /// Zero and negative values have no logarithm and map to the linear
    /// minimum, as do all values when the bounds have equal logarithms.
    /// Values outside the bounds are not clamped and extrapolate along the
    /// same curve.
    pub fn log_to_linear(&self, value: D) -> i32 {
        if value <= D::zero() {
            return self.lin_min;
        }

        let ln_min = self.log_min.ln();
        let ln_max = self.log_max.ln();

        if ln_max == ln_min {
            return self.lin_min;
        }

        let ratio = (value.ln() - ln_min) / (ln_max - ln_min);
        let span = D::from(self.lin_max - self.lin_min).unwrap();

        // The f64 -> i32 cast saturates, keeping extreme inputs finite.
        let steps = (ratio * span).trunc().to_f64().unwrap_or(0.0) as i32;
        self.lin_min.saturating_add(steps)
    }
}

impl<D> Default for LogRange<D>
where
    D: Float,
{
    fn default() -> Self {
        Self::new()
    }
}
