//! Flavor-text generation: templates, static pools, and the
//! relationship-driven line resolver.

pub mod pools;
pub mod relationship;
pub mod template;

pub use relationship::{affinity_between, interaction_line, relation_kind, role_pair_key};
