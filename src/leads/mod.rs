//! Lead capture: the record shape, its identifier and form validation.

mod lead;
mod lead_id;
mod submission;

pub use lead::Lead;
pub use lead_id::LeadId;
pub use submission::{normalize_website_url, LeadSubmission, NewLead};
