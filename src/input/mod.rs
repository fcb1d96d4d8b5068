pub mod events;

pub use events::{AppEvent, EventQueue};
