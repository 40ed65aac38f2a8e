//! Ancestry queries: read-only traversal over father/mother edges.
//!
//! Depth 0 is the person itself, depth `d` every person reachable by exactly
//! `d` parent edges. Results are sets, so an ancestor reached along several
//! paths appears once.

use hashbrown::HashSet;
use tracing::{trace, warn};

use crate::model::*;
use crate::{RelatedPersonError, Result};
use super::FamilyGraph;

impl FamilyGraph {
    /// Union of all ancestors at depths `min_depth..=max_depth`.
    /// `max_depth = None` walks until no parent edges remain.
    pub fn ancestors(
        &self,
        id: PersonId,
        min_depth: usize,
        max_depth: Option<usize>,
    ) -> Result<HashSet<PersonId>> {
        if let Some(max_depth) = max_depth {
            if max_depth < min_depth {
                return Err(RelatedPersonError::InvalidDepthRange { min_depth, max_depth });
            }
        }
        self.person(id)?;

        let mut result = HashSet::new();
        let mut frontier: HashSet<PersonId> = HashSet::from([id]);
        let mut depth = 0;

        loop {
            if depth >= min_depth {
                result.extend(frontier.iter().copied());
            }
            if frontier.is_empty() || max_depth.is_some_and(|max| depth >= max) {
                break;
            }
            // A path longer than the graph must revisit a node.
            if depth >= self.persons.len() {
                warn!(person = %id, depth, "ancestor walk exceeded graph size; edges contain a cycle");
                break;
            }

            frontier = frontier
                .iter()
                .filter_map(|p| self.persons.get(p))
                .flat_map(|p| p.parent_ids())
                .collect();
            depth += 1;
            trace!(person = %id, depth, width = frontier.len(), "ancestor level");
        }

        Ok(result)
    }

    pub fn parents(&self, id: PersonId) -> Result<HashSet<PersonId>> {
        self.ancestors(id, 1, Some(1))
    }

    pub fn grandparents(&self, id: PersonId) -> Result<HashSet<PersonId>> {
        self.ancestors(id, 2, Some(2))
    }

    /// Every ancestor at depth ≥ 1, excluding `id` itself.
    pub fn all_ancestors(&self, id: PersonId) -> Result<HashSet<PersonId>> {
        self.ancestors(id, 1, None)
    }

    /// All ancestors minus the parents.
    pub fn grandparents_and_earlier(&self, id: PersonId) -> Result<HashSet<PersonId>> {
        let parents = self.parents(id)?;
        Ok(self
            .all_ancestors(id)?
            .into_iter()
            .filter(|a| !parents.contains(a))
            .collect())
    }

    /// True if `candidate` is in the ancestor closure of `of`.
    ///
    /// Stops at the first hit instead of building the whole closure.
    pub fn is_ancestor(&self, candidate: PersonId, of: PersonId) -> Result<bool> {
        let start = self.person(of)?;
        let mut visited = HashSet::new();
        let mut to_visit: Vec<PersonId> = start.parent_ids().into_vec();

        while let Some(current) = to_visit.pop() {
            if current == candidate {
                return Ok(true);
            }
            if visited.insert(current) {
                if let Some(p) = self.persons.get(&current) {
                    to_visit.extend(p.parent_ids());
                }
            }
        }
        Ok(false)
    }

    /// Every person reachable downward through children, excluding `id`.
    pub fn descendants(&self, id: PersonId) -> Result<HashSet<PersonId>> {
        let start = self.person(id)?;
        let mut descendants = HashSet::new();
        let mut to_visit: Vec<PersonId> = start.children.iter().copied().collect();

        while let Some(current) = to_visit.pop() {
            if descendants.insert(current) {
                if let Some(p) = self.persons.get(&current) {
                    to_visit.extend(p.children.iter().copied());
                }
            }
        }
        Ok(descendants)
    }
}

// ============================================================================
// Tests
// ============================================================================
