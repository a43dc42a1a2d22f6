pub mod error;
pub mod output;
pub mod time_format;

pub use error::{AppError, AppResult};
pub use output::{OutputStyle, print_error, print_success, print_warning};
pub use time_format::{format_datetime, to_iso8601};
