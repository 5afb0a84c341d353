mod datetime;
pub use datetime::*;
mod timezone;
pub use timezone::*;
