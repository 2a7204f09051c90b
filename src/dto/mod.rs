//! DTO modules that bridge services with the front end.

pub mod contacts;
pub mod email;
