mod generator;

pub use generator::{generate_redirects, redirect_page};
