pub mod books;
pub mod catalog;
pub mod core;
pub mod redirect;
pub mod utils;
