pub mod address;
pub mod utils;

pub use address::address::Address;
pub use utils::time::{current_time, Clock, SystemClock};
