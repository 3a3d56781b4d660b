pub mod handlers;
pub mod selector;
pub mod templates;
