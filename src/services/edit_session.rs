// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Edit session lifecycle for a single user record.
//!
//! ```text
//! Idle --begin--> Editing --submit--> Submitting --+--> Succeeded --(delay)--> Idle
//!                    ^                              |
//!                    +---------- Failed <-----------+
//! ```
//!
//! The session holds a copy of the editable fields, never the record
//! itself. On a successful save the updated record is reconciled into the
//! owning collection by identity. On failure the working copy is kept
//! exactly as entered so the user can correct it and retry.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::error::{AppError, Result};
use crate::models::{CollectionResult, EditableField, Identity, Record, UserForm};
use crate::services::ApiClient;

/// Submission state of an open session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitState {
    Idle,
    Submitting,
    Succeeded,
    Failed(String),
}

/// Overall phase of the manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditPhase {
    Idle,
    Editing,
    Submitting,
    Succeeded,
    Failed,
}

/// An in-progress edit of one record.
#[derive(Debug, Clone)]
pub struct EditSession {
    target: Option<Identity>,
    form: UserForm,
    state: SubmitState,
    generation: u64,
}

impl EditSession {
    /// Identity the update will be addressed to, if the record had one.
    pub fn target(&self) -> Option<&Identity> {
        self.target.as_ref()
    }

    /// Current working copy.
    pub fn form(&self) -> &UserForm {
        &self.form
    }

    pub fn state(&self) -> &SubmitState {
        &self.state
    }

    /// Inline error to show on the form, if the last save failed.
    pub fn error(&self) -> Option<&str> {
        match &self.state {
            SubmitState::Failed(reason) => Some(reason),
            _ => None,
        }
    }
}

/// A save that has been started but not yet completed.
#[derive(Debug, Clone)]
pub struct PendingSave {
    pub identity: Identity,
    pub payload: UserForm,
    generation: u64,
}

/// Aborts the auto-close task when dropped.
struct CloseTimer(JoinHandle<()>);

impl Drop for CloseTimer {
    fn drop(&mut self) {
        self.0.abort();
    }
}

/// Owns at most one edit session and its auto-close timer.
pub struct EditSessionManager {
    session: Option<EditSession>,
    close_delay: Duration,
    close_timer: Option<CloseTimer>,
    generation: u64,
    close_tx: mpsc::UnboundedSender<u64>,
    close_rx: mpsc::UnboundedReceiver<u64>,
}

impl EditSessionManager {
    /// `close_delay` is how long a successful save stays visible.
    pub fn new(close_delay: Duration) -> Self {
        let (close_tx, close_rx) = mpsc::unbounded_channel();
        Self {
            session: None,
            close_delay,
            close_timer: None,
            generation: 0,
            close_tx,
            close_rx,
        }
    }

    pub fn session(&self) -> Option<&EditSession> {
        self.session.as_ref()
    }

    pub fn phase(&self) -> EditPhase {
        match self.session.as_ref().map(|s| &s.state) {
            None => EditPhase::Idle,
            Some(SubmitState::Idle) => EditPhase::Editing,
            Some(SubmitState::Submitting) => EditPhase::Submitting,
            Some(SubmitState::Succeeded) => EditPhase::Succeeded,
            Some(SubmitState::Failed(_)) => EditPhase::Failed,
        }
    }

    /// Whether an auto-close is scheduled.
    pub fn is_close_pending(&self) -> bool {
        self.close_timer.is_some()
    }

    /// Open a session on `record`, replacing any open one.
    ///
    /// Rejected while another save is in flight. A pending auto-close from
    /// a previous session is cancelled.
    pub fn begin(&mut self, record: &Record) -> Result<()> {
        if self.phase() == EditPhase::Submitting {
            return Err(AppError::EditInProgress);
        }

        let target = match record.identity() {
            Ok(id) => Some(id),
            Err(_) => {
                tracing::warn!("Editing a record without identity, saving will be refused");
                None
            }
        };

        self.close_timer = None;
        self.generation += 1;
        self.session = Some(EditSession {
            target,
            form: UserForm::from_record(record),
            state: SubmitState::Idle,
            generation: self.generation,
        });
        Ok(())
    }

    /// Change one field of the working copy.
    pub fn update_field(&mut self, field: EditableField, value: impl Into<String>) -> Result<()> {
        let session = self.session.as_mut().ok_or(AppError::NoActiveSession)?;
        session.form.set(field, value.into());
        Ok(())
    }

    /// Move the open session to `Submitting` and hand out what to send.
    ///
    /// A session without identity goes straight to `Failed` and no request
    /// must be made.
    pub fn begin_submit(&mut self) -> Result<PendingSave> {
        let session = self.session.as_mut().ok_or(AppError::NoActiveSession)?;
        if session.state == SubmitState::Submitting {
            return Err(AppError::EditInProgress);
        }

        let Some(identity) = session.target.clone() else {
            session.state = SubmitState::Failed(AppError::NoIdentity.reason());
            return Err(AppError::NoIdentity);
        };

        self.close_timer = None;
        session.state = SubmitState::Submitting;
        Ok(PendingSave {
            identity,
            payload: session.form.clone(),
            generation: session.generation,
        })
    }

    /// Apply the outcome of a save started with [`begin_submit`].
    ///
    /// A successful update is always reconciled into `collection`, even if
    /// the session was cancelled meanwhile, since the server has already
    /// applied it. The record is matched by the identity the save was
    /// addressed to, not by whatever identity the response carries. The
    /// session itself only changes if it is still the one the save was
    /// started from. Outside a tokio runtime no auto-close is scheduled.
    ///
    /// [`begin_submit`]: Self::begin_submit
    pub fn complete_submit(
        &mut self,
        pending: PendingSave,
        outcome: Result<Record>,
        collection: &mut CollectionResult,
    ) {
        let current = self
            .session
            .as_mut()
            .filter(|s| s.generation == pending.generation);

        match outcome {
            Ok(updated) => {
                collection.reconcile_as(&pending.identity, updated);
                tracing::info!(identity = %pending.identity, "User updated");
                if let Some(session) = current {
                    session.state = SubmitState::Succeeded;
                    self.schedule_close();
                }
            }
            Err(e) => {
                tracing::warn!(identity = %pending.identity, error = %e, "Error updating user");
                if let Some(session) = current {
                    session.state = SubmitState::Failed(e.reason());
                }
            }
        }
    }

    /// Save the working copy and reconcile the result into `collection`.
    ///
    /// Network and server failures are reported through the returned
    /// state, never as an error. `Err` only means there was nothing to
    /// submit or a save is already running.
    pub async fn submit(
        &mut self,
        api: &ApiClient,
        collection: &mut CollectionResult,
    ) -> Result<SubmitState> {
        let pending = match self.begin_submit() {
            Ok(pending) => pending,
            Err(AppError::NoIdentity) => {
                return Ok(SubmitState::Failed(AppError::NoIdentity.reason()))
            }
            Err(e) => return Err(e),
        };

        let outcome = api.patch_user(&pending.identity, &pending.payload).await;
        self.complete_submit(pending, outcome, collection);

        Ok(self
            .session
            .as_ref()
            .map(|s| s.state.clone())
            .unwrap_or(SubmitState::Idle))
    }

    /// Discard the open session, whatever its state.
    pub fn cancel(&mut self) {
        self.close_timer = None;
        self.generation += 1;
        self.session = None;
    }

    /// Wait for the scheduled auto-close to fire and close the session.
    ///
    /// Returns `false` immediately when nothing is scheduled.
    pub async fn wait_for_auto_close(&mut self) -> bool {
        while self.close_timer.is_some() {
            let Some(generation) = self.close_rx.recv().await else {
                return false;
            };
            if self.fire_close(generation) {
                return true;
            }
        }
        false
    }

    /// Apply an auto-close that has already fired, without waiting.
    pub fn poll_auto_close(&mut self) -> bool {
        while let Ok(generation) = self.close_rx.try_recv() {
            if self.fire_close(generation) {
                return true;
            }
        }
        false
    }

    fn schedule_close(&mut self) {
        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            tracing::warn!("No async runtime, edit session will not auto-close");
            return;
        };

        let tx = self.close_tx.clone();
        let generation = self.generation;
        let delay = self.close_delay;
        self.close_timer = Some(CloseTimer(runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(generation);
        })));
    }

    fn fire_close(&mut self, generation: u64) -> bool {
        let still_current = self
            .session
            .as_ref()
            .is_some_and(|s| s.generation == generation && s.state == SubmitState::Succeeded);
        if !still_current {
            return false;
        }

        tracing::debug!("Closing edit session after successful save");
        self.close_timer = None;
        self.session = None;
        true
    }
}
