//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! ```text
//!                  ┌──────────────────────────┐
//!                  │   Inbound (operator)     │
//!                  └────────────┬─────────────┘
//!                               ▼
//!                  ┌──────────────────────────┐
//!                  │       Application        │
//!                  │   (creation workflow)    │
//!                  └────────────┬─────────────┘
//!          ┌────────────────────┼────────────────────┐
//!          ▼                    ▼                    ▼
//!   ┌─────────────┐     ┌───────────────┐     ┌────────────┐
//!   │   Backend   │     │ Wallet/Chain  │     │  Status +  │
//!   │  (reqwest)  │     │    (alloy)    │     │   prompt   │
//!   └─────────────┘     └───────────────┘     └────────────┘
//! ```

pub mod inbound;
pub mod outbound;
