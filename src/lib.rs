//! # pedigree-graph: Genealogical Relationship Graph
//!
//! An in-memory pedigree: people linked by father/mother/child edges, with
//! gender-consistency rules, cycle prevention and depth-bounded ancestry
//! queries.
//!
//! ## Design Principles
//!
//! 1. **Handles, not pointers**: `FamilyGraph` owns every `Person`; edges are `PersonId`s
//! 2. **Edits are atomic**: every editor operation validates first, then mutates
//! 3. **Edges are mirrored**: `child.father == f` iff `child ∈ f.children`
//! 4. **Acyclic ancestry**: no person is ever its own ancestor
//!
//! ## Quick Start
//!
//! ```rust
//! use pedigree_graph::{FamilyGraph, Gender};
//!
//! # fn example() -> pedigree_graph::Result<()> {
//! let mut graph = FamilyGraph::new();
//! let kid = graph.add_person("kid", Gender::Unknown);
//! let dad = graph.add_person("dad", Gender::Male);
//! let mom = graph.add_person_with_code("mom", "f")?;
//!
//! graph.set_father(kid, dad)?;
//! graph.add_child(mom, kid)?;
//!
//! assert_eq!(graph.parents(kid)?.len(), 2);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod graph;
pub mod sync;

// ============================================================================
// Re-exports
// ============================================================================

pub use model::{
    Gender, Person, PersonId, ParentRole,
    get_gender, genders_string_mappings, get_related_persons_name,
};
pub use graph::{FamilyGraph, GraphConfig, ReassignPolicy};
pub use sync::SharedFamilyGraph;

// ============================================================================
// Error Types
// ============================================================================

/// The single error kind raised for every invariant violation.
///
/// Message wording is part of the public contract: callers match on
/// substrings such as `"is not male"` or `"would create ancestor cycle"`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RelatedPersonError {
    #[error("unrecognized gender code '{code}'; valid codes are: {mappings}")]
    UnknownGenderCode { code: String, mappings: String },

    #[error("cannot set '{candidate}' as {role} of '{child}': '{candidate}' is not {}", .role.required_gender_word())]
    WrongParentGender { role: ParentRole, child: String, candidate: String },

    #[error("{role} is not set and cannot be removed from '{person}' as it is not set")]
    RelationshipNotSet { role: ParentRole, person: String },

    #[error("cannot remove {role} '{parent}' of '{person}': '{person}' is not one of {} children", .role.pronoun())]
    InconsistentRelationship { role: ParentRole, person: String, parent: String },

    #[error("'{child}' is not one of the children of '{parent}'")]
    NotAChild { parent: String, child: String },

    #[error("'{person}' cannot add him/herself as a child")]
    SelfParent { person: String },

    #[error("making '{parent}' a parent of '{child}' would create ancestor cycle")]
    AncestorCycle { parent: String, child: String },

    #[error("cannot add child '{child}' to '{parent}' with unknown gender")]
    UnknownParentGender { parent: String, child: String },

    #[error("max_depth ({max_depth}) cannot be less than min_depth ({min_depth})")]
    InvalidDepthRange { min_depth: usize, max_depth: usize },

    #[error("'{person}' already has a {role} ('{current}')")]
    ParentAlreadySet { role: ParentRole, person: String, current: String },

    #[error("cannot change gender of '{person}' to {gender}: '{person}' is the {role} of {children} children")]
    GenderConflict { person: String, gender: Gender, role: ParentRole, children: usize },

    #[error("no person with id {0}")]
    NotFound(PersonId),
}

pub type Result<T> = std::result::Result<T, RelatedPersonError>;
