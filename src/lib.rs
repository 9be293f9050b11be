pub mod catalog;
pub mod common;
pub mod frontend;
pub mod models;
pub mod services;
pub mod site;
