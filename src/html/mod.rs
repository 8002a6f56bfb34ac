pub mod attrs;
pub mod classes;

pub use attrs::{attr_value, is_visible};
pub use classes::has_class;
