pub mod holiday_service;

pub use holiday_service::HolidayService;
