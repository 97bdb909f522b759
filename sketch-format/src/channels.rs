//! Per-stroke extension channel maps
//!
//! A stroke stores optional per-point data (timestamp, pressure, ...) as a flat
//! array of numbers on every control point. The channel map names each slot of
//! that array so consumers can look a slot up once and then index directly.

use ahash::RandomState;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Mapping from extension channel name to its position in a control point's
/// extension values.
///
/// Names are case-sensitive and unique. The map may be sparse: indices do not
/// need to be contiguous or start at zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExtensionChannels {
    slots: HashMap<String, usize, RandomState>,
}

impl ExtensionChannels {
    /// Create an empty channel map
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a map assigning positions in iteration order.
    ///
    /// This matches how decoders lay out extension values: one slot per enabled
    /// channel, in channel order. A repeated name keeps its first position.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut channels = Self::new();
        for (index, name) in names.into_iter().enumerate() {
            channels.slots.entry(name.into()).or_insert(index);
        }
        channels
    }

    /// Insert or replace a channel, returning its previous index
    pub fn insert(&mut self, name: impl Into<String>, index: usize) -> Option<usize> {
        self.slots.insert(name.into(), index)
    }

    /// Look up the position of a channel
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.slots.get(name).copied()
    }

    /// Whether the channel is present
    pub fn contains(&self, name: &str) -> bool {
        self.slots.contains_key(name)
    }

    /// Number of named channels
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether no channels are named
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Iterate over `(name, index)` pairs in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.slots.iter().map(|(name, index)| (name.as_str(), *index))
    }

    /// Smallest extension array length that covers every named slot
    pub fn required_width(&self) -> usize {
        self.slots.values().map(|index| index + 1).max().unwrap_or(0)
    }

    /// Resolve several channels at once.
    ///
    /// Returns the index of every requested name in request order, or the first
    /// requested name that is absent.
    pub fn resolve<'a, const N: usize>(
        &self,
        names: [&'a str; N],
    ) -> std::result::Result<[usize; N], &'a str> {
        let mut indices = [0usize; N];
        for (slot, name) in indices.iter_mut().zip(names) {
            *slot = self.index_of(name).ok_or(name)?;
        }
        Ok(indices)
    }
}

impl<S: Into<String>> FromIterator<(S, usize)> for ExtensionChannels {
    fn from_iter<T: IntoIterator<Item = (S, usize)>>(iter: T) -> Self {
        let mut channels = Self::new();
        for (name, index) in iter {
            channels.insert(name, index);
        }
        channels
    }
}
