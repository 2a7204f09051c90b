//! Wire models exchanged with the CRM API and the client configuration.

pub mod config;
pub mod contact;
pub mod email;
pub mod error;
pub mod event;
