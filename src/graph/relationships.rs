//! Relationship editor: the only code that writes father/mother/children.
//!
//! Every operation validates against the current graph before touching an
//! edge, so an `Err` always leaves the graph exactly as it was.

use tracing::{debug, warn};

use crate::model::*;
use crate::{RelatedPersonError, Result};
use super::{FamilyGraph, ReassignPolicy};

impl FamilyGraph {
    // ========================================================================
    // Parent slots
    // ========================================================================

    /// Make `candidate` the father of `child`. The candidate must be male.
    pub fn set_father(&mut self, child: PersonId, candidate: PersonId) -> Result<()> {
        self.set_parent(ParentRole::Father, child, candidate)
    }

    /// Make `candidate` the mother of `child`. The candidate must be female.
    pub fn set_mother(&mut self, child: PersonId, candidate: PersonId) -> Result<()> {
        self.set_parent(ParentRole::Mother, child, candidate)
    }

    /// Clear the father slot of `child` and its mirror. Returns the former father.
    pub fn remove_father(&mut self, child: PersonId) -> Result<PersonId> {
        self.remove_parent(ParentRole::Father, child)
    }

    /// Clear the mother slot of `child` and its mirror. Returns the former mother.
    pub fn remove_mother(&mut self, child: PersonId) -> Result<PersonId> {
        self.remove_parent(ParentRole::Mother, child)
    }

    /// Fill the `role` slot of `child` with `candidate` and mirror the edge.
    pub fn set_parent(&mut self, role: ParentRole, child: PersonId, candidate: PersonId) -> Result<()> {
        let child_p = self.person(child)?;
        let candidate_p = self.person(candidate)?;

        if candidate_p.gender != role.required_gender() {
            return Err(RelatedPersonError::WrongParentGender {
                role,
                child: child_p.name.clone(),
                candidate: candidate_p.name.clone(),
            });
        }

        let current = child_p.parent(role);
        if current == Some(candidate) && candidate_p.has_child(child) {
            return Ok(());
        }

        if candidate == child || self.is_ancestor(child, candidate)? {
            return Err(RelatedPersonError::AncestorCycle {
                parent: candidate_p.name.clone(),
                child: child_p.name.clone(),
            });
        }

        if let Some(old) = current.filter(|old| *old != candidate) {
            match self.config.reassign {
                ReassignPolicy::Reject => {
                    return Err(RelatedPersonError::ParentAlreadySet {
                        role,
                        person: child_p.name.clone(),
                        current: self.name_of(old),
                    });
                }
                ReassignPolicy::Replace => {
                    if let Some(old_p) = self.persons.get_mut(&old) {
                        old_p.children.remove(&child);
                    }
                    debug!(child = %child, old = %old, %role, "previous parent unlinked");
                }
            }
        }

        *self.person_mut(child)?.parent_slot_mut(role) = Some(candidate);
        self.person_mut(candidate)?.children.insert(child);
        debug!(child = %child, parent = %candidate, %role, "parent set");
        Ok(())
    }

    /// Empty the `role` slot of `child`. The parent must list `child`.
    pub fn remove_parent(&mut self, role: ParentRole, child: PersonId) -> Result<PersonId> {
        let child_p = self.person(child)?;
        let Some(parent) = child_p.parent(role) else {
            return Err(RelatedPersonError::RelationshipNotSet {
                role,
                person: child_p.name.clone(),
            });
        };

        let listed = self.persons.get(&parent).is_some_and(|p| p.has_child(child));
        if !listed {
            warn!(child = %child, parent = %parent, %role, "one-sided parent edge");
            return Err(RelatedPersonError::InconsistentRelationship {
                role,
                person: child_p.name.clone(),
                parent: self.name_of(parent),
            });
        }

        *self.person_mut(child)?.parent_slot_mut(role) = None;
        self.person_mut(parent)?.children.remove(&child);
        debug!(child = %child, parent = %parent, %role, "parent removed");
        Ok(parent)
    }

    // ========================================================================
    // Children
    // ========================================================================

    /// Link `candidate` as a child of `parent`, filling the father or mother
    /// slot according to the parent's gender.
    pub fn add_child(&mut self, parent: PersonId, candidate: PersonId) -> Result<()> {
        let parent_p = self.person(parent)?;
        let candidate_p = self.person(candidate)?;

        let Some(role) = ParentRole::for_gender(parent_p.gender) else {
            return Err(RelatedPersonError::UnknownParentGender {
                parent: parent_p.name.clone(),
                child: candidate_p.name.clone(),
            });
        };
        if parent == candidate {
            return Err(RelatedPersonError::SelfParent {
                person: parent_p.name.clone(),
            });
        }

        self.set_parent(role, candidate, parent)
    }

    /// Drop the edge between `parent` and `child`, whichever slot it occupies.
    pub fn remove_child(&mut self, parent: PersonId, child: PersonId) -> Result<()> {
        let parent_p = self.person(parent)?;
        let child_p = self.person(child)?;

        let role = [ParentRole::Father, ParentRole::Mother]
            .into_iter()
            .find(|role| child_p.parent(*role) == Some(parent));
        let Some(role) = role else {
            return Err(RelatedPersonError::NotAChild {
                parent: parent_p.name.clone(),
                child: child_p.name.clone(),
            });
        };

        self.remove_parent(role, child).map(|_| ())
    }

    // ========================================================================
    // Gender and lifecycle
    // ========================================================================

    /// Change a person's gender. Refused while the person fills a parent
    /// slot that the new gender could not fill.
    pub fn set_gender(&mut self, id: PersonId, gender: Gender) -> Result<()> {
        let p = self.person(id)?;
        if p.gender == gender {
            return Ok(());
        }

        if let Some(role) = ParentRole::for_gender(p.gender) {
            if p.is_parent() && gender != role.required_gender() {
                return Err(RelatedPersonError::GenderConflict {
                    person: p.name.clone(),
                    gender,
                    role,
                    children: p.children.len(),
                });
            }
        }

        self.person_mut(id)?.gender = gender;
        debug!(person = %id, %gender, "gender changed");
        Ok(())
    }

    /// Remove every edge that touches `id`, in both directions.
    pub fn detach_person(&mut self, id: PersonId) -> Result<()> {
        let p = self.person_mut(id)?;
        let parents = p.parent_ids();
        let children: Vec<PersonId> = p.children.drain().collect();
        p.father = None;
        p.mother = None;

        for parent in &parents {
            if let Some(parent_p) = self.persons.get_mut(parent) {
                parent_p.children.remove(&id);
            }
        }
        for child in &children {
            if let Some(child_p) = self.persons.get_mut(child) {
                if child_p.father == Some(id) {
                    child_p.father = None;
                }
                if child_p.mother == Some(id) {
                    child_p.mother = None;
                }
            }
        }

        debug!(person = %id, parents = parents.len(), children = children.len(), "person detached");
        Ok(())
    }

    /// Detach `id` and drop it from the graph. Its handle becomes invalid.
    pub fn remove_person(&mut self, id: PersonId) -> Result<Person> {
        self.detach_person(id)?;
        self.persons.remove(&id).ok_or(RelatedPersonError::NotFound(id))
    }
}

// ============================================================================
// Tests
// ============================================================================
