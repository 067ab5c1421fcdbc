pub mod aladhan;
pub mod api_ninjas;

pub use aladhan::AladhanHijriConverter;
pub use api_ninjas::ApiNinjasHolidayProvider;
