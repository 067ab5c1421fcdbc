pub mod clock;
pub mod hijri_converter;
pub mod holiday_provider;

pub use clock::Clock;
pub use hijri_converter::HijriConverter;
pub use holiday_provider::HolidayProvider;
