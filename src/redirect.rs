pub mod controller;
pub mod domain;
