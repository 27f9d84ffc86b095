// src/application/ports/mod.rs
pub mod mailer;
pub mod site_writer;
pub mod time;
pub mod util;
