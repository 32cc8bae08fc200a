pub mod credit;
pub mod scoreboard;

pub use credit::{attribute_clicks, evaluate};
pub use scoreboard::Scoreboard;
