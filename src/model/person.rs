//! Person node in the pedigree graph.

use hashbrown::HashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::Gender;

/// Sentinel shown for an empty relationship slot.
pub const UNKNOWN_NAME: &str = "NA";

/// Opaque person handle, unique within one `FamilyGraph`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PersonId(pub u64);

impl std::fmt::Display for PersonId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which parent slot an edge occupies on the child.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParentRole {
    Father,
    Mother,
}

impl ParentRole {
    /// The slot a parent of `gender` fills, if any.
    pub fn for_gender(gender: Gender) -> Option<Self> {
        match gender {
            Gender::Male => Some(ParentRole::Father),
            Gender::Female => Some(ParentRole::Mother),
            Gender::Unknown => None,
        }
    }

    pub fn required_gender(self) -> Gender {
        match self {
            ParentRole::Father => Gender::Male,
            ParentRole::Mother => Gender::Female,
        }
    }

    pub fn required_gender_word(self) -> &'static str {
        match self {
            ParentRole::Father => "male",
            ParentRole::Mother => "female",
        }
    }

    pub fn pronoun(self) -> &'static str {
        match self {
            ParentRole::Father => "his",
            ParentRole::Mother => "her",
        }
    }
}

impl std::fmt::Display for ParentRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            ParentRole::Father => "father",
            ParentRole::Mother => "mother",
        })
    }
}

/// A person and its parent/child edges.
///
/// Edges are handles into the owning graph. Fields are only writable
/// inside the crate so every edit goes through the relationship editor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub(crate) id: PersonId,
    pub(crate) name: String,
    pub(crate) gender: Gender,
    pub(crate) father: Option<PersonId>,
    pub(crate) mother: Option<PersonId>,
    pub(crate) children: HashSet<PersonId>,
}

impl Person {
    pub(crate) fn new(id: PersonId, name: impl Into<String>, gender: Gender) -> Self {
        Self {
            id,
            name: name.into(),
            gender,
            father: None,
            mother: None,
            children: HashSet::new(),
        }
    }

    pub fn id(&self) -> PersonId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn father(&self) -> Option<PersonId> {
        self.father
    }

    pub fn mother(&self) -> Option<PersonId> {
        self.mother
    }

    /// The handle in the given parent slot.
    pub fn parent(&self, role: ParentRole) -> Option<PersonId> {
        match role {
            ParentRole::Father => self.father,
            ParentRole::Mother => self.mother,
        }
    }

    pub(crate) fn parent_slot_mut(&mut self, role: ParentRole) -> &mut Option<PersonId> {
        match role {
            ParentRole::Father => &mut self.father,
            ParentRole::Mother => &mut self.mother,
        }
    }

    pub fn children(&self) -> &HashSet<PersonId> {
        &self.children
    }

    pub fn has_child(&self, child: PersonId) -> bool {
        self.children.contains(&child)
    }

    /// Father then mother, skipping empty slots.
    pub fn parent_ids(&self) -> SmallVec<[PersonId; 2]> {
        self.father.into_iter().chain(self.mother).collect()
    }

    /// True if this person fills the father or mother slot of any child.
    pub fn is_parent(&self) -> bool {
        !self.children.is_empty()
    }
}

/// Name of `person`, or `"NA"` when the slot is empty. Never fails.
pub fn get_related_persons_name(person: Option<&Person>) -> &str {
    person.map_or(UNKNOWN_NAME, |p| p.name.as_str())
}
