use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Stable identifier for a focusable region
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RegionId(pub Cow<'static, str>);

impl RegionId {
    /// Create a RegionId from a static string identifier
    pub const fn new(id: &'static str) -> Self {
        Self(Cow::Borrowed(id))
    }

    /// Create a RegionId from a runtime string (e.g. generated headline cards)
    pub fn owned(id: impl Into<String>) -> Self {
        Self(Cow::Owned(id.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for RegionId {
    fn from(id: &'static str) -> Self {
        Self::new(id)
    }
}

impl From<String> for RegionId {
    fn from(id: String) -> Self {
        Self::owned(id)
    }
}

/// Position of a region in layout order.
///
/// Compared row first, then column. Regions on the same row are
/// visited left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct LayoutOrder {
    pub row: u16,
    pub column: u16,
}

impl LayoutOrder {
    pub const fn new(row: u16, column: u16) -> Self {
        Self { row, column }
    }
}

/// Registration record for a focusable region
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionSpec {
    pub id: RegionId,
    pub order: LayoutOrder,
    pub disabled: bool,
}

impl RegionSpec {
    pub fn new(id: impl Into<RegionId>, order: LayoutOrder) -> Self {
        Self {
            id: id.into(),
            order,
            disabled: false,
        }
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

/// Anything the navigator can rescan for an ordered list of focusable regions
pub trait RegionSource {
    /// Enabled regions in layout order
    fn snapshot(&self) -> Vec<RegionId>;
}

impl RegionSource for [RegionId] {
    fn snapshot(&self) -> Vec<RegionId> {
        self.to_vec()
    }
}

impl RegionSource for Vec<RegionId> {
    fn snapshot(&self) -> Vec<RegionId> {
        self.clone()
    }
}

struct Entry {
    spec: RegionSpec,
    seq: u64,
}

/// Registry that widgets register with when they appear and deregister
/// from when they go away.
pub struct RegionRegistry {
    entries: Vec<Entry>,
    next_seq: u64,
}

impl Default for RegionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl RegionRegistry {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_seq: 0,
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn register(&mut self, spec: RegionSpec) {
        if let Some(pos) = self.entries.iter().position(|e| e.spec.id == spec.id) {
            warn!("Duplicate RegionId: {} - last registration wins", spec.id);
            self.entries.remove(pos);
        }

        debug!(
            "Registered region {} at {:?}{}",
            spec.id,
            spec.order,
            if spec.disabled { " (disabled)" } else { "" }
        );
        let seq = self.next_seq;
        self.next_seq += 1;
        self.entries.push(Entry { spec, seq });
    }

    /// Remove a region. Returns false if it was not registered.
    pub fn deregister(&mut self, id: &RegionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| &e.spec.id != id);
        let removed = self.entries.len() != before;
        if removed {
            debug!("Deregistered region {}", id);
        }
        removed
    }

    /// Toggle the "can receive focus" flag. Returns false for unknown ids.
    pub fn set_disabled(&mut self, id: &RegionId, disabled: bool) -> bool {
        match self.entries.iter_mut().find(|e| &e.spec.id == id) {
            Some(entry) => {
                entry.spec.disabled = disabled;
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, id: &RegionId) -> bool {
        self.entries.iter().any(|e| &e.spec.id == id)
    }

    pub fn get(&self, id: &RegionId) -> Option<&RegionSpec> {
        self.entries.iter().find(|e| &e.spec.id == id).map(|e| &e.spec)
    }

    /// Number of registered regions, including disabled ones
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl RegionSource for RegionRegistry {
    fn snapshot(&self) -> Vec<RegionId> {
        let mut enabled: Vec<&Entry> = self.entries.iter().filter(|e| !e.spec.disabled).collect();
        enabled.sort_by_key(|e| (e.spec.order, e.seq));
        enabled.into_iter().map(|e| e.spec.id.clone()).collect()
    }
}
