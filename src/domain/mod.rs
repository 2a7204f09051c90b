//! Domain aggregates exposed by the contacts service layer.

pub mod contact;
pub mod email;
pub mod event;
pub mod filter;
pub mod page;
pub mod query;
pub mod types;
