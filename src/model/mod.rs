//! # Pedigree Model
//!
//! Plain data: people, their gender tags, and the handles that link them.
//! No traversal and no edge mutation live here; see [`crate::graph`].

pub mod gender;
pub mod person;

pub use gender::{Gender, GENDER_ALIASES, get_gender, genders_string_mappings};
pub use person::{ParentRole, Person, PersonId, UNKNOWN_NAME, get_related_persons_name};
