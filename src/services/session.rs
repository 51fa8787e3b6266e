//! Stateful editing session for one user's timetables.
//!
//! A [`PlannerSession`] ties the pieces together: who is signed in, which
//! term-and-section slot is active, the working [`Timetable`] for that slot,
//! and whether it has unsaved edits. Store access goes through the service
//! functions in [`super::timetables`]; the session adds the lifecycle rules
//! around them.
//!
//! The load lifecycle is explicit:
//!
//! ```text
//! Unloaded ──begin_activation──▶ Loading ──apply_loaded──▶ Loaded { dirty }
//!     ▲                             │
//!     └────────sign_out────────────┘
//! ```
//!
//! Activation is split into [`PlannerSession::begin_activation`] (synchronous
//! bookkeeping), [`PlannerSession::fetch`] (the store read) and
//! [`PlannerSession::apply_loaded`] (installing the result) so a caller
//! driving concurrent UI events can be honest about what happens when the
//! selection changes mid-load: every activation bumps a generation counter,
//! and a fetched timetable is only installed if its ticket is still current.
//! [`PlannerSession::activate`] chains the three for the common case.
//!
//! Section bookkeeping never requires sign-in; only the store-touching
//! operations (activation and save) do, and the section registry survives
//! sign-out untouched.

use std::sync::Arc;

use log::{debug, info, warn};
use thiserror::Error;

use crate::curriculum::Curriculum;
use crate::models::{CourseCode, SectionId, SlotKey, Term, UserId, Weekday};
use crate::sections::{SectionAdd, SectionRegistry};
use crate::services::timetables::{self, SaveError};
use crate::services::validation::ScheduleIncomplete;
use crate::store::{DocumentStore, StoreError, StoreResult};
use crate::timetable::Timetable;

/// Load state of the active slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    /// No slot is active, or the selection was reset.
    #[default]
    Unloaded,
    /// A slot is active and its stored timetable is being fetched.
    Loading,
    /// The active slot's timetable is in memory; `dirty` tracks unsaved edits.
    Loaded { dirty: bool },
}

/// Errors from session operations.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("No user is signed in")]
    NotSignedIn,

    #[error("No term and section is active")]
    NoActiveSlot,

    #[error("No timetable is loaded")]
    NotLoaded,

    #[error("Section {section} is not registered for {term}")]
    UnknownSection { term: Term, section: SectionId },

    #[error(transparent)]
    Incomplete(#[from] ScheduleIncomplete),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<SaveError> for SessionError {
    fn from(err: SaveError) -> Self {
        match err {
            SaveError::Incomplete(incomplete) => SessionError::Incomplete(incomplete),
            SaveError::Store(store) => SessionError::Store(store),
        }
    }
}

/// Outcome of a save request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The timetable was validated and written.
    Saved,
    /// There were no unsaved edits; the store was not touched.
    Clean,
}

/// Handle for one in-flight activation.
///
/// Carries the user and slot the fetch should read, pinned at activation
/// time, plus the generation that decides whether the result still matters.
#[derive(Debug, Clone)]
pub struct LoadTicket {
    user: UserId,
    slot: SlotKey,
    generation: u64,
}

impl LoadTicket {
    /// The slot this ticket is loading.
    pub fn slot(&self) -> &SlotKey {
        &self.slot
    }
}

/// One user's editing session.
pub struct PlannerSession {
    store: Arc<dyn DocumentStore>,
    curriculum: Curriculum,
    user: Option<UserId>,
    registry: SectionRegistry,
    active: Option<SlotKey>,
    timetable: Timetable,
    state: LoadState,
    generation: u64,
}

impl PlannerSession {
    /// Create a session over a store, using the built-in curriculum.
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self::with_curriculum(store, Curriculum::builtin().clone())
    }

    /// Create a session with an explicit curriculum table.
    pub fn with_curriculum(store: Arc<dyn DocumentStore>, curriculum: Curriculum) -> Self {
        Self {
            store,
            curriculum,
            user: None,
            registry: SectionRegistry::new(),
            active: None,
            timetable: Timetable::new(),
            state: LoadState::Unloaded,
            generation: 0,
        }
    }

    pub fn user(&self) -> Option<&UserId> {
        self.user.as_ref()
    }

    pub fn active_slot(&self) -> Option<&SlotKey> {
        self.active.as_ref()
    }

    /// Read-only view of the working timetable.
    pub fn timetable(&self) -> &Timetable {
        &self.timetable
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self.state, LoadState::Loaded { .. })
    }

    pub fn is_dirty(&self) -> bool {
        matches!(self.state, LoadState::Loaded { dirty: true })
    }

    /// Sign a user in, resetting any previous selection.
    pub fn sign_in(&mut self, user: UserId) {
        info!("Signing in {}", user);
        self.user = Some(user);
        self.reset_selection();
    }

    /// Sign the current user out. The section registry is kept.
    pub fn sign_out(&mut self) {
        if let Some(user) = self.user.take() {
            info!("Signing out {}", user);
        }
        self.reset_selection();
    }

    /// Drops the selection and invalidates any in-flight load ticket.
    fn reset_selection(&mut self) {
        self.generation += 1;
        self.active = None;
        self.timetable.clear();
        self.state = LoadState::Unloaded;
    }

    /// Create the next section for a term. Works signed out.
    pub fn add_section(&mut self, term: &Term) -> SectionAdd {
        self.registry.add_section(term)
    }

    /// Sections registered for a term, in creation order.
    pub fn sections(&self, term: &Term) -> &[SectionId] {
        self.registry.sections(term)
    }

    /// Make a slot active and stage a load of its stored timetable.
    ///
    /// Clears the working timetable, moves the session to `Loading` and
    /// returns the ticket to pass to [`PlannerSession::fetch`] and
    /// [`PlannerSession::apply_loaded`]. Requires a signed-in user and a
    /// section previously created through [`PlannerSession::add_section`].
    pub fn begin_activation(&mut self, slot: SlotKey) -> Result<LoadTicket, SessionError> {
        let user = self.user.clone().ok_or(SessionError::NotSignedIn)?;
        if !self.registry.contains(&slot.term, &slot.section) {
            return Err(SessionError::UnknownSection {
                term: slot.term,
                section: slot.section,
            });
        }

        self.generation += 1;
        self.active = Some(slot.clone());
        self.timetable.clear();
        self.state = LoadState::Loading;
        info!("Activating slot {}", slot);

        Ok(LoadTicket {
            user,
            slot,
            generation: self.generation,
        })
    }

    /// Read the ticket's timetable from the store.
    ///
    /// Takes `&self` so the read can run while the caller keeps handling
    /// other events; the session is not mutated until
    /// [`PlannerSession::apply_loaded`].
    pub async fn fetch(&self, ticket: &LoadTicket) -> StoreResult<Timetable> {
        timetables::load_timetable(self.store.as_ref(), &ticket.user, &ticket.slot).await
    }

    /// Install a fetched timetable if its ticket is still current.
    ///
    /// Returns `false` and leaves the session untouched when the selection
    /// has moved on since the ticket was issued (another activation, a
    /// sign-in or a sign-out).
    pub fn apply_loaded(&mut self, ticket: &LoadTicket, timetable: Timetable) -> bool {
        if ticket.generation != self.generation {
            warn!("Dropping stale load of {}: selection changed", ticket.slot);
            return false;
        }

        self.timetable = timetable;
        self.state = LoadState::Loaded { dirty: false };
        true
    }

    /// Activate a slot and load its timetable in one call.
    ///
    /// On a store failure the session stays in `Loading` for the chosen
    /// slot; activating again retries the read.
    pub async fn activate(&mut self, slot: SlotKey) -> Result<(), SessionError> {
        let ticket = self.begin_activation(slot)?;
        let loaded = self.fetch(&ticket).await?;
        self.apply_loaded(&ticket, loaded);
        Ok(())
    }

    /// Apply one edit to the loaded timetable.
    ///
    /// Returns whether the timetable changed; a changed timetable marks the
    /// session dirty. Editing requires a loaded slot.
    pub fn edit(
        &mut self,
        course: CourseCode,
        day: Weekday,
        time_range: &str,
    ) -> Result<bool, SessionError> {
        if !self.is_loaded() {
            return Err(SessionError::NotLoaded);
        }

        let changed = self.timetable.set_assignment(course, day, time_range);
        if changed {
            self.state = LoadState::Loaded { dirty: true };
        }
        Ok(changed)
    }

    /// Persist the active slot's timetable if it has unsaved edits.
    ///
    /// A clean session returns [`SaveOutcome::Clean`] without touching the
    /// store. A failed save (incomplete schedule or store error) leaves the
    /// session dirty so the edits are not silently considered persisted.
    pub async fn save(&mut self) -> Result<SaveOutcome, SessionError> {
        let user = self.user.as_ref().ok_or(SessionError::NotSignedIn)?;
        let slot = self.active.as_ref().ok_or(SessionError::NoActiveSlot)?;
        let dirty = match self.state {
            LoadState::Loaded { dirty } => dirty,
            _ => return Err(SessionError::NotLoaded),
        };

        if !dirty {
            debug!("Timetable for {} is unchanged, skipping save", slot);
            return Ok(SaveOutcome::Clean);
        }

        timetables::save_timetable(
            self.store.as_ref(),
            user,
            slot,
            &self.timetable,
            &self.curriculum,
        )
        .await?;

        self.state = LoadState::Loaded { dirty: false };
        Ok(SaveOutcome::Saved)
    }
}
