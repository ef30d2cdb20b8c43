//! Core types for the calculator form.
//!
//! ## Overview
//!
//! - [`Unit`] is the distance unit system, kilometers or miles
//! - [`Preset`] names the popular race distances, always stored in km
//! - [`Pace`] and [`TotalTime`] are whole-second durations shown on the form
//! - [`ActiveMode`] selects which of the two durations is the input
//! - [`Field`] and [`Edit`] describe a single user edit
//!
//! ## Usage Example
//!
//! ```rust
//! use pacer::types::{Edit, Field, Preset, Unit};
//!
//! let edit = Edit::from_input(Field::Preset, "half").unwrap();
//! assert_eq!(edit, Edit::SelectPreset(Preset::HalfMarathon));
//!
//! let edit = Edit::from_input(Field::PaceSeconds, "not a number").unwrap();
//! assert_eq!(edit, Edit::SetPaceSeconds(0));
//!
//! assert_eq!("mi".parse::<Unit>().unwrap(), Unit::Miles);
//! ```

mod duration;
mod edit;
mod mode;
mod preset;
mod unit;

pub use duration::{Pace, TotalTime};
pub use edit::{Edit, Field};
pub use mode::ActiveMode;
pub use preset::Preset;
pub use unit::Unit;
