//! Booking export parsing.

mod bookings;

pub use bookings::{parse_bookings, parse_bookings_file, BookingTable};
