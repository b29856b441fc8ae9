//! Data model for bookings, styles and placecards.

mod booking;
mod font;
mod placecard;
mod style;

pub use booking::*;
pub use font::*;
pub use placecard::*;
pub use style::*;
