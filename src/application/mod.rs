/// Application layer - Use cases and DTOs
///
/// This layer contains the application logic that orchestrates
/// the audit engine and the lead store through ports.
pub mod dto;
pub mod factories;
pub mod read_models;
pub mod use_cases;
