//! Section registry: the per-term lists of sections a user can switch between.
//!
//! Sections are created on demand and never removed. Each term owns an
//! independent list capped at [`MAX_SECTIONS_PER_TERM`]; ids are `"YA-1"`,
//! `"YA-2"`, ... in creation order. The registry itself is in-memory state;
//! a section's document only comes into existence on its first save.

use std::collections::HashMap;

use log::{info, warn};

use crate::models::{SectionId, Term};

/// Maximum number of sections a single term may hold.
pub const MAX_SECTIONS_PER_TERM: usize = 10;

/// Outcome of a section-add request.
///
/// Hitting the cap is an expected outcome the caller surfaces to the user,
/// not a fault, so it is a value rather than an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionAdd {
    /// A new section was created with this id.
    Added(SectionId),
    /// The term is already at capacity; nothing changed.
    AtCapacity,
}

/// Per-term section lists.
///
/// # Examples
///
/// ```
/// use timetable_rust::sections::{SectionAdd, SectionRegistry};
/// use timetable_rust::models::{Semester, Term};
///
/// let mut registry = SectionRegistry::new();
/// let term = Term::new(1, Semester::First);
///
/// match registry.add_section(&term) {
///     SectionAdd::Added(id) => assert_eq!(id.as_str(), "YA-1"),
///     SectionAdd::AtCapacity => unreachable!(),
/// }
/// assert_eq!(registry.sections(&term).len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SectionRegistry {
    by_term: HashMap<Term, Vec<SectionId>>,
}

impl SectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sections of a term in creation order. Unseen terms have none.
    pub fn sections(&self, term: &Term) -> &[SectionId] {
        self.by_term.get(term).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Create the next section for a term, unless the term is at capacity.
    pub fn add_section(&mut self, term: &Term) -> SectionAdd {
        let sections = self.by_term.entry(*term).or_default();
        if sections.len() >= MAX_SECTIONS_PER_TERM {
            warn!(
                "Refusing to add section to {}: already at the {} section cap",
                term, MAX_SECTIONS_PER_TERM
            );
            return SectionAdd::AtCapacity;
        }

        let id = SectionId::new(format!("YA-{}", sections.len() + 1));
        sections.push(id.clone());
        info!("Added section {} to {}", id, term);
        SectionAdd::Added(id)
    }

    /// Whether a term already has this section.
    pub fn contains(&self, term: &Term, section: &SectionId) -> bool {
        self.sections(term).iter().any(|s| s == section)
    }

    /// Number of sections a term currently has.
    pub fn section_count(&self, term: &Term) -> usize {
        self.sections(term).len()
    }
}
