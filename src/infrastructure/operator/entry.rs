//! Concrete operator consumed by inbound adapters.

/// Operator backed by the TOML configuration, the HTTP backend and a local
/// key wallet. Stateless: every call parses the configuration it is given.
#[derive(Debug, Clone, Copy, Default)]
pub struct Operator;
