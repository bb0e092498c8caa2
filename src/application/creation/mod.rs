//! Guided market creation use case.
//!
//! ```text
//! prepare ──► [BITR approval] ──► pool transaction ──► backend confirm
//!    │               │                   │                   │
//!    ▼               ▼                   ▼                   ▼
//!  Failed          Failed              Failed        Created (warning only)
//! ```

pub mod approval;
pub mod confirm;
pub mod context;
pub mod executor;
pub mod orchestrator;
