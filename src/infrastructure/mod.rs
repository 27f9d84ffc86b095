pub mod backend;
pub mod database;
pub mod fs;
pub mod mail;
pub mod repositories;
pub mod system;
