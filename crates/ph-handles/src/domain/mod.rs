//! # Domain Module
//!
//! Core domain types and pure logic for Project Handles.

pub mod entities;
pub mod errors;
pub mod invariants;
pub mod namehash;
pub mod value_objects;

pub use entities::*;
pub use errors::*;
pub use invariants::*;
pub use namehash::{child_node, keccak256, labelhash, namehash, namehash_record, tld_node};
pub use value_objects::*;
