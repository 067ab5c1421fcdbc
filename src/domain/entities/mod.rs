pub mod calendar_date;
pub mod holiday;

pub use calendar_date::*;
pub use holiday::*;
