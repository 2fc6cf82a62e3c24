//! Play table
//!
//! The catalog maps play ids to plays. It is owned by the caller and only
//! ever borrowed while a statement is computed.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use core_kernel::PlayId;

use crate::error::StatementError;
use crate::play::Play;

/// Mapping from play id to play
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayCatalog {
    plays: BTreeMap<PlayId, Play>,
}

impl PlayCatalog {
    /// Creates an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a play, builder style
    pub fn with_play(mut self, play_id: impl Into<PlayId>, play: Play) -> Self {
        self.insert(play_id, play);
        self
    }

    /// Adds or replaces a play, returning the previous entry
    pub fn insert(&mut self, play_id: impl Into<PlayId>, play: Play) -> Option<Play> {
        self.plays.insert(play_id.into(), play)
    }

    /// Looks up a play, failing if the id is not in the catalog
    pub fn resolve(&self, play_id: &PlayId) -> Result<&Play, StatementError> {
        self.plays
            .get(play_id)
            .ok_or_else(|| StatementError::unresolved(play_id))
    }

    /// Returns the number of plays
    pub fn len(&self) -> usize {
        self.plays.len()
    }

    /// Returns true if the catalog has no plays
    pub fn is_empty(&self) -> bool {
        self.plays.is_empty()
    }
}
