//! Core domain types for Autoquote

pub mod quote;
pub mod vehicle;
