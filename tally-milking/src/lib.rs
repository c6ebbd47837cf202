pub mod models;
pub mod schedule;

pub use models::{DayLog, MilkRecord, MilkYields};
pub use schedule::{MilkingError, WeeklySchedule};
