//! Search toolbar — text input and the execution-time readout.

mod execute_time;
mod search_bar;

pub use execute_time::ExecuteTime;
pub use search_bar::SearchBar;
