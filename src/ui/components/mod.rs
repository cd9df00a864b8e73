pub mod app;
pub mod booking_form;
pub mod booking_page;
pub mod date_picker;
pub mod time_slot_select;
pub mod toast;
pub mod toast_context;

pub use app::App;
pub use booking_form::BookingForm;
pub use booking_page::BookingPage;
pub use date_picker::DatePicker;
pub use time_slot_select::TimeSlotSelect;
pub use toast::ToastViewport;
pub use toast_context::{use_toast, ToastContext, ToastProvider};
