pub mod calendar;
pub mod login;

pub use calendar::reduce_calendar;
pub use login::reduce_login;
