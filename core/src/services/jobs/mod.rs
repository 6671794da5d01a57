//! Job lifecycle service: creation, listing, owner-gated mutation.

mod service;


pub use service::{JobDraft, JobService};
