pub mod alert;
pub mod empty_state;
pub mod navbar;
pub mod pagination;
pub mod search_bar;
pub mod toast;

pub use alert::alert;
pub use empty_state::empty_state;
pub use pagination::pagination;
pub use search_bar::{SearchBarConfig, search_bar};
