pub mod date;
pub mod number;

pub use date::{parse_any_datetime, parse_iso_datetime, parse_local_datetime};
pub use number::{has_digits, parse_number};
