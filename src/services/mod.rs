pub mod switch;

pub use switch::{DisableOutcome, SwitchService, SwitchStatus};
