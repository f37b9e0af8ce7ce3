//! Website audit core: domain types, HTML extraction, scoring policies and
//! the auditors that collect signals over the network.

pub mod domain;
pub mod extraction;
pub mod policies;
pub mod services;
