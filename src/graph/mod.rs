//! # Family Graph
//!
//! The arena that owns every [`Person`] and the only place edges change.
//!
//! | Concern | Module | Description |
//! |---------|--------|-------------|
//! | Store | `mod.rs` | Person creation, lookup, configuration |
//! | Editor | `relationships` | Father/mother/child edits that keep edges mirrored |
//! | Queries | `ancestry` | Depth-bounded ancestor sets, reachability |
//!
//! ## Limitations
//!
//! - **No internal locking**: edits take `&mut self`. Wrap the graph in
//!   [`crate::SharedFamilyGraph`] to share it between threads.
//! - **Handles are per graph**: a `PersonId` from one graph means nothing in another.

pub mod relationships;
pub mod ancestry;

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::model::*;
use crate::{RelatedPersonError, Result};

// ============================================================================
// Configuration
// ============================================================================

/// What `set_father` / `set_mother` do when the slot already holds a
/// different parent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReassignPolicy {
    /// Drop the child from the old parent's children, then link the new one.
    #[default]
    Replace,
    /// Fail with `ParentAlreadySet`; the old parent must be removed first.
    Reject,
}

/// Graph-wide settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphConfig {
    pub reassign: ReassignPolicy,
}

// ============================================================================
// FamilyGraph
// ============================================================================

/// In-memory pedigree store.
#[derive(Debug, Clone)]
pub struct FamilyGraph {
    persons: HashMap<PersonId, Person>,
    next_person_id: u64,
    config: GraphConfig,
}

impl FamilyGraph {
    pub fn new() -> Self {
        Self::with_config(GraphConfig::default())
    }

    pub fn with_config(config: GraphConfig) -> Self {
        Self {
            persons: HashMap::new(),
            next_person_id: 1,
            config,
        }
    }

    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    // ========================================================================
    // Person creation
    // ========================================================================

    /// Create an unlinked person and return its handle.
    pub fn add_person(&mut self, name: impl Into<String>, gender: Gender) -> PersonId {
        let id = PersonId(self.next_person_id);
        self.next_person_id += 1;

        let person = Person::new(id, name, gender);
        debug!(person = %id, name = %person.name, gender = %gender, "person added");
        self.persons.insert(id, person);
        id
    }

    /// Like [`add_person`](Self::add_person), resolving the gender from a
    /// code such as `"m"`, `"Female"` or `"NA"`.
    pub fn add_person_with_code(&mut self, name: impl Into<String>, code: &str) -> Result<PersonId> {
        let gender = get_gender(code)?;
        Ok(self.add_person(name, gender))
    }

    // ========================================================================
    // Lookup
    // ========================================================================

    pub fn person(&self, id: PersonId) -> Result<&Person> {
        self.persons.get(&id).ok_or(RelatedPersonError::NotFound(id))
    }

    pub(crate) fn person_mut(&mut self, id: PersonId) -> Result<&mut Person> {
        self.persons.get_mut(&id).ok_or(RelatedPersonError::NotFound(id))
    }

    pub fn contains(&self, id: PersonId) -> bool {
        self.persons.contains_key(&id)
    }

    /// Every person carrying `name`, ordered by handle. Names need not be unique.
    pub fn persons_named(&self, name: &str) -> Vec<&Person> {
        let mut found: Vec<&Person> = self.persons.values().filter(|p| p.name == name).collect();
        found.sort_by_key(|p| p.id);
        found
    }

    pub fn len(&self) -> usize {
        self.persons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Person> {
        self.persons.values()
    }

    /// Name behind an optional handle, `"NA"` for an empty or dangling slot.
    pub fn related_name(&self, id: Option<PersonId>) -> &str {
        get_related_persons_name(id.and_then(|id| self.persons.get(&id)))
    }

    /// One-line summary, e.g. `kid (NA) father: dad, mother: NA, children: 0`.
    pub fn describe(&self, id: PersonId) -> Result<String> {
        let p = self.person(id)?;
        Ok(format!(
            "{} ({}) father: {}, mother: {}, children: {}",
            p.name,
            p.gender,
            self.related_name(p.father),
            self.related_name(p.mother),
            p.children.len(),
        ))
    }

    pub(crate) fn name_of(&self, id: PersonId) -> String {
        self.related_name(Some(id)).to_string()
    }
}

impl Default for FamilyGraph {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================
