//! Logarithmic slider mapping library
//!
//! `skala` provides the value-mapping core of a logarithmic slider: a control
//! whose physically linear thumb position picks a value on a logarithmic
//! curve. It exists so an application can offer quantities spanning several
//! orders of magnitude (frequencies, gain factors, zoom levels) through an
//! ordinary linear sliding gesture, while the semantic value moves in equal
//! ratios instead of equal differences.
//!
//! Painting, styling, input handling and layout stay with whatever host
//! toolkit embeds the control; this crate owns the mapping, the validation
//! and the notification relay.
//!
//! # Core Concepts
//!
//! ## Mapping
//!
//! [`LogRange`] converts between a fixed-resolution linear integer domain
//! and a continuous logarithmic value range. Equal steps in linear position
//! correspond to equal multiplicative steps in value, and the logarithmic
//! value is always recomputed from the linear position, never stored. The
//! mapping is a plain value type, usable and testable without any UI
//! runtime.
//!
//! ## Sliders
//!
//! [`LinearControl`] is the contract a generic integer slider has to offer:
//! a linear range, a clamped position and a position-changed notification.
//! [`LinearSlider`] implements it in-process, and [`LogSlider`] composes a
//! control with a [`LogRange`], relaying every position change as a
//! logarithmic-value-changed notification.
//!
//! ## Notifications
//!
//! [`Notifier`] delivers values synchronously to boxed listeners on the
//! caller's stack. Both the linear and the logarithmic notification surfaces
//! are built on it; nothing is queued and nothing crosses a thread boundary.
//!
//! ## Ticks
//!
//! [`DecadeTicks`] generates logarithmically spaced tick marks (majors at
//! powers of ten, minors in between) with their linear positions, for hosts
//! that draw a scale alongside the control.
//!
//! # Examples
//!
//! ## Basic Mapping
//!
//! ```rust
//! use skala::LogRange;
//!
//! // Default bounds (1.0, 100.0) over the linear domain [0, 1000]
//! let range = LogRange::<f64>::new();
//!
//! assert_eq!(range.log_to_linear(1.0), 0);
//! assert_eq!(range.log_to_linear(100.0), 1000);
//!
//! // Halfway along the slider sits the geometric midpoint
//! let mid = range.linear_to_log(500);
//! assert!((mid - 10.0).abs() < 1e-9);
//! ```
//!
//! ## A Composed Slider
//!
//! ```rust
//! use skala::LogSlider;
//!
//! let mut slider = LogSlider::<f64>::new();
//!
//! assert!(slider.set_log_value(10.0));
//! assert!((slider.position() - 500).abs() <= 1);
//! assert!((slider.log_value() - 10.0).abs() < 0.1);
//! ```
//!
//! ## Listening for Value Changes
//!
//! ```rust
//! use skala::LogSlider;
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let mut slider = LogSlider::<f64>::new();
//!
//! let seen = Rc::new(Cell::new(0.0));
//! let inner = Rc::clone(&seen);
//! slider.on_log_value_changed(move |value| inner.set(value));
//!
//! slider.set_position(1000);
//! assert!((seen.get() - 100.0).abs() < 1e-9);
//! ```
//!
//! ## Changing the Range
//!
//! ```rust
//! use skala::LogSlider;
//!
//! let mut slider = LogSlider::<f64>::new();
//!
//! assert!(slider.set_log_range(20.0, 20_000.0));
//! assert!(slider.set_log_value(20_000.0));
//! assert_eq!(slider.position(), 1000);
//!
//! // Invalid bounds are refused and nothing changes
//! assert!(!slider.set_log_range(-1.0, 50.0));
//! assert_eq!(slider.log_minimum(), 20.0);
//! ```

pub mod notify;
pub mod range;
pub mod slider;

pub use num_traits::Float;
pub use notify::Notifier;
pub use range::LogRange;
pub use slider::{DecadeTicks, LinearControl, LinearSlider, LogSlider, Orientation, Tick};
