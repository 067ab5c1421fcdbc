pub mod holiday_merge;
pub mod local_holidays;

pub use holiday_merge::merge_holidays;
pub use local_holidays::local_holidays;
