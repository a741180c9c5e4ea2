//! Concept store - the canonical, sorted list of concepts
//!
//! Invariants held after every public call:
//! - at most one concept per case-folded name
//! - concepts sorted by Hungarian collation of their names
//!
//! Saving is two-phase: [`ConceptStore::propose_save`] reports a naming
//! collision without touching the list, [`ConceptStore::confirm_save`] applies
//! or drops the proposal. The caller owns the "overwrite?" prompt in between.

use std::fmt;
#[cfg(debug_assertions)]
use std::cmp::Ordering;

use crate::collation;
use crate::csv;
use crate::error::{ExportError, StoreError};

use super::concept::{name_key, Concept};

/// Identifies a pending save proposal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SaveToken(u64);

impl fmt::Display for SaveToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Answer to an overwrite prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveDecision {
    /// Replace the colliding concept
    Overwrite,
    /// Abort the save, nothing changes
    Cancel,
}

/// Result of [`ConceptStore::propose_save`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveProposal {
    pub token: SaveToken,
    /// A different concept already using the new name, if any
    pub collision: Option<Concept>,
}

impl SaveProposal {
    pub fn needs_confirmation(&self) -> bool {
        self.collision.is_some()
    }
}

/// Result of a completed save
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved {
        /// Name of the saved concept (the new selection)
        name: String,
        /// Position of the saved concept after sorting
        index: usize,
        /// Concepts removed to make room: the pre-edit record and/or the
        /// overwritten collision
        removed: Vec<Concept>,
    },
    Declined,
}

/// Counts reported by [`ConceptStore::import`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub added: usize,
    /// Records skipped because the name was already taken
    pub duplicates: usize,
    /// Lines skipped because they had fewer than two fields
    pub malformed: usize,
}

#[derive(Debug, Clone)]
struct PendingSave {
    token: SaveToken,
    revision: u64,
    original: Option<String>,
    concept: Concept,
    has_collision: bool,
}

/// Owns the concept list
#[derive(Debug, Clone, Default)]
pub struct ConceptStore {
    concepts: Vec<Concept>,
    /// Mutations since the last acknowledged export
    dirty: bool,
    /// Bumped on every mutation; invalidates older save proposals
    revision: u64,
    next_token: u64,
    pending: Option<PendingSave>,
}

impl ConceptStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from arbitrary concepts, keeping the last of any
    /// case-equal names. The result is sorted and clean.
    pub fn from_concepts(concepts: impl IntoIterator<Item = Concept>) -> Self {
        let mut store = Self::new();
        for concept in concepts {
            let concept = concept.trimmed();
            if concept.name.is_empty() {
                continue;
            }
            store.insert_replacing(concept);
        }
        store.sort();
        store
    }

    pub fn concepts(&self) -> &[Concept] {
        &self.concepts
    }

    pub fn len(&self) -> usize {
        self.concepts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.concepts.is_empty()
    }

    /// Whether there are changes not yet exported
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Host acknowledged a successful export
    pub fn mark_exported(&mut self) {
        self.dirty = false;
    }

    /// Case-insensitive lookup
    pub fn find_by_name(&self, name: &str) -> Option<&Concept> {
        self.position_of(name).map(|index| &self.concepts[index])
    }

    pub fn position_of(&self, name: &str) -> Option<usize> {
        let key = name_key(name);
        self.concepts.iter().position(|c| c.key() == key)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position_of(name).is_some()
    }

    /// Concepts whose name contains `query`, case-insensitively, in store order
    pub fn filter<'a>(&'a self, query: &str) -> impl Iterator<Item = &'a Concept> + 'a {
        let query = query.to_lowercase();
        self.concepts
            .iter()
            .filter(move |c| c.name.to_lowercase().contains(&query))
    }

    /// Insert a concept, replacing a case-equal one in place
    ///
    /// The caller must have resolved the collision already. Returns the index
    /// after sorting.
    pub fn create(&mut self, concept: Concept) -> Result<usize, StoreError> {
        let concept = concept.trimmed();
        if concept.name.is_empty() {
            return Err(StoreError::EmptyName);
        }

        let name = concept.name.clone();
        self.insert_replacing(concept);
        self.sort();
        self.touch();
        tracing::debug!(name = %name, count = self.len(), "created concept");
        Ok(self.position_of(&name).unwrap_or(0))
    }

    /// Remove a concept by name
    pub fn remove(&mut self, name: &str) -> Option<Concept> {
        let index = self.position_of(name)?;
        let removed = self.concepts.remove(index);
        self.touch();
        tracing::debug!(name = %removed.name, "removed concept");
        Some(removed)
    }

    /// First phase of a save
    ///
    /// `original` is the pre-edit name when editing, `None` when creating.
    /// A collision is reported only when the new name belongs to a concept
    /// other than `original`; renaming only the case of a name overwrites its
    /// own slot without asking. Replaces any earlier pending proposal.
    pub fn propose_save(
        &mut self,
        original: Option<&str>,
        concept: Concept,
    ) -> Result<SaveProposal, StoreError> {
        let concept = concept.trimmed();
        if concept.name.is_empty() {
            return Err(StoreError::EmptyName);
        }

        let is_self = original.is_some_and(|original| name_key(original) == concept.key());
        let collision = if is_self {
            None
        } else {
            self.find_by_name(&concept.name).cloned()
        };

        self.next_token += 1;
        let token = SaveToken(self.next_token);
        self.pending = Some(PendingSave {
            token,
            revision: self.revision,
            original: original.map(str::to_string),
            concept,
            has_collision: collision.is_some(),
        });

        if let Some(existing) = &collision {
            tracing::debug!(%token, existing = %existing.name, "save needs overwrite confirmation");
        }

        Ok(SaveProposal { token, collision })
    }

    /// Second phase of a save
    ///
    /// `Cancel` drops the proposal and leaves the store untouched. `Overwrite`
    /// removes the original identity (if still present), removes any concept
    /// holding the new name, inserts the new concept and re-sorts.
    pub fn confirm_save(
        &mut self,
        token: SaveToken,
        decision: SaveDecision,
    ) -> Result<SaveOutcome, StoreError> {
        let pending = match self.pending.take() {
            Some(pending) if pending.token == token && pending.revision == self.revision => {
                pending
            }
            other => {
                // Keep a newer proposal alive when an old token shows up
                self.pending = other.filter(|p| p.token != token);
                return Err(StoreError::StaleProposal(token));
            }
        };

        if decision == SaveDecision::Cancel {
            tracing::debug!(%token, "save declined");
            return Ok(SaveOutcome::Declined);
        }

        let mut removed = Vec::new();
        if let Some(original) = &pending.original {
            if let Some(index) = self.position_of(original) {
                removed.push(self.concepts.remove(index));
            }
        }
        if let Some(index) = self.position_of(&pending.concept.name) {
            removed.push(self.concepts.remove(index));
        }

        let name = pending.concept.name.clone();
        self.concepts.push(pending.concept);
        self.sort();
        self.touch();

        let index = self.position_of(&name).unwrap_or(0);
        tracing::debug!(
            name = %name,
            index,
            removed = removed.len(),
            overwrote = pending.has_collision,
            "saved concept"
        );
        Ok(SaveOutcome::Saved {
            name,
            index,
            removed,
        })
    }

    /// Both save phases in one call; `confirm` is asked only on collision
    pub fn save(
        &mut self,
        original: Option<&str>,
        concept: Concept,
        confirm: impl FnOnce(&Concept) -> bool,
    ) -> Result<SaveOutcome, StoreError> {
        let proposal = self.propose_save(original, concept)?;
        let decision = match &proposal.collision {
            Some(existing) if !confirm(existing) => SaveDecision::Cancel,
            _ => SaveDecision::Overwrite,
        };
        self.confirm_save(proposal.token, decision)
    }

    /// Whether `token` is the proposal currently awaiting a decision
    pub fn is_pending(&self, token: SaveToken) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|p| p.token == token && p.revision == self.revision)
    }

    /// Merge records in order, skipping names already present
    ///
    /// Records are trimmed first and blank names skipped. Each record is
    /// checked against the store as it is at that moment, so the first
    /// occurrence of a name within the batch wins. Returns the number of
    /// records added.
    pub fn merge(&mut self, concepts: impl IntoIterator<Item = Concept>) -> usize {
        let mut added = 0;
        for concept in concepts {
            let concept = concept.trimmed();
            if concept.name.is_empty() || self.contains(&concept.name) {
                continue;
            }
            self.concepts.push(concept);
            added += 1;
        }

        if added > 0 {
            self.sort();
            self.touch();
        }
        added
    }

    /// Parse import text and merge it
    pub fn import(&mut self, text: &str) -> ImportSummary {
        let parsed = csv::parse_records(text);
        let total = parsed.concepts.len();
        let added = self.merge(parsed.concepts);
        let summary = ImportSummary {
            added,
            duplicates: total - added,
            malformed: parsed.malformed,
        };
        tracing::info!(
            added = summary.added,
            duplicates = summary.duplicates,
            malformed = summary.malformed,
            delimiter = ?parsed.delimiter,
            header = parsed.has_header,
            "imported concepts"
        );
        summary
    }

    /// Serialize the store for download; refuses an empty store
    ///
    /// Does not clear the dirty flag, see [`ConceptStore::mark_exported`].
    pub fn export(&self) -> Result<String, ExportError> {
        if self.concepts.is_empty() {
            return Err(ExportError::Empty);
        }
        csv::serialize(&self.concepts)
    }

    /// Stable sort by Hungarian collation of the name
    pub fn sort(&mut self) {
        self.concepts
            .sort_by(|a, b| collation::compare(&a.name, &b.name));
    }

    /// Check sort order and name uniqueness (debug builds only)
    #[cfg(debug_assertions)]
    pub fn assert_invariants(&self) {
        for pair in self.concepts.windows(2) {
            debug_assert!(
                collation::compare(&pair[0].name, &pair[1].name) != Ordering::Greater,
                "Concepts out of order: {:?} before {:?}",
                pair[0].name,
                pair[1].name
            );
        }
        let mut keys: Vec<String> = self.concepts.iter().map(Concept::key).collect();
        keys.sort();
        keys.dedup();
        debug_assert_eq!(keys.len(), self.concepts.len(), "Duplicate concept names");
    }

    /// No-op in release builds
    #[cfg(not(debug_assertions))]
    #[inline]
    pub fn assert_invariants(&self) {}

    fn insert_replacing(&mut self, concept: Concept) {
        match self.position_of(&concept.name) {
            Some(index) => self.concepts[index] = concept,
            None => self.concepts.push(concept),
        }
    }

    fn touch(&mut self) {
        self.dirty = true;
        self.revision += 1;
    }
}
