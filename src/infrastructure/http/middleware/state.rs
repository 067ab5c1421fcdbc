use crate::application::services::HolidayService;

#[derive(Clone)]
pub struct AppState {
    pub holiday_service: HolidayService,
}

impl AppState {
    pub fn new(holiday_service: HolidayService) -> Self {
        Self { holiday_service }
    }
}
