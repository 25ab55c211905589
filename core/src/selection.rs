//! Pointer/brush selection state
//!
//! Models the user's current choice on the trend view. Every incoming
//! event replaces the whole state - the last event wins, nothing merges.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Current selection on the trend view.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Selection {
    /// Nothing selected; every derivation sees the full table.
    #[default]
    None,
    /// Single point click, by place.
    Point(u32),
    /// Brush/multi selection, by place set.
    Multi(HashSet<u32>),
}

impl Selection {
    pub fn point(place: u32) -> Self {
        Selection::Point(place)
    }

    pub fn multi<I>(places: I) -> Self
    where
        I: IntoIterator<Item = u32>,
    {
        Selection::Multi(places.into_iter().collect())
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Selection::None)
    }

    /// Whether the given place is part of the selection.
    pub fn contains(&self, place: u32) -> bool {
        match self {
            Selection::None => false,
            Selection::Point(selected) => *selected == place,
            Selection::Multi(selected) => selected.contains(&place),
        }
    }
}
