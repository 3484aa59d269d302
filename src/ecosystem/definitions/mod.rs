//! Static per-ecosystem definitions backing the registry

pub(super) mod jvm;
pub(super) mod node;
pub(super) mod python;
pub(super) mod rust;
