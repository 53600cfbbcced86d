//! Selection state: the descriptors a user picked and how strongly each applies.
//!
//! A `Selection` lives only as long as the form that owns it. It is rebuilt
//! from widget events and handed to the chart renderer on every render pass.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::catalog;

/// Intensity rating in `1..=5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Intensity(u8);

impl Intensity {
    pub const MIN: Intensity = Intensity(1);
    pub const MAX: Intensity = Intensity(5);

    /// `None` for values outside `1..=5` (including the "unselected" 0).
    pub fn new(value: u8) -> Option<Self> {
        (Self::MIN.0..=Self::MAX.0)
            .contains(&value)
            .then_some(Self(value))
    }

    /// Values above the maximum clamp to it; 0 stays unrepresentable.
    pub fn saturating(value: u8) -> Option<Self> {
        match value {
            0 => None,
            v => Some(Self(v.min(Self::MAX.0))),
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for Intensity {
    fn default() -> Self {
        Intensity(3)
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u8> for Intensity {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Intensity::new(value).ok_or_else(|| format!("intensity {value} outside 1..=5"))
    }
}

impl From<Intensity> for u8 {
    fn from(value: Intensity) -> Self {
        value.0
    }
}

/// How selected descriptors are ordered around the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionOrder {
    /// The order in which the user selected descriptors.
    #[default]
    Selected,
    /// Catalog declaration order.
    Catalog,
    Alphabetical,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionEntry {
    pub descriptor: String,
    pub intensity: Intensity,
}

/// Ordered descriptor → intensity mapping. Entries keep selection order;
/// re-selecting an existing descriptor updates it in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    entries: Vec<SelectionEntry>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(descriptor, raw intensity)` pairs; zero entries are skipped.
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, u8)>,
    {
        let mut selection = Self::new();
        for (descriptor, raw) in pairs {
            selection.set_intensity(descriptor, raw);
        }
        selection
    }

    pub fn select(&mut self, descriptor: &str, intensity: Intensity) {
        match self.position(descriptor) {
            Some(idx) => self.entries[idx].intensity = intensity,
            None => self.entries.push(SelectionEntry {
                descriptor: normalize(descriptor),
                intensity,
            }),
        }
    }

    /// Returns whether the descriptor was selected.
    pub fn deselect(&mut self, descriptor: &str) -> bool {
        match self.position(descriptor) {
            Some(idx) => {
                self.entries.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Checkbox semantics: select with `initial` if absent, otherwise remove.
    pub fn toggle(&mut self, descriptor: &str, initial: Intensity) {
        if !self.deselect(descriptor) {
            self.select(descriptor, initial);
        }
    }

    /// Slider semantics: 0 deselects, anything else selects or updates
    /// (values above 5 clamp).
    pub fn set_intensity(&mut self, descriptor: &str, raw: u8) {
        match Intensity::saturating(raw) {
            Some(intensity) => self.select(descriptor, intensity),
            None => {
                self.deselect(descriptor);
            }
        }
    }

    pub fn intensity_of(&self, descriptor: &str) -> Option<Intensity> {
        self.position(descriptor).map(|idx| self.entries[idx].intensity)
    }

    pub fn contains(&self, descriptor: &str) -> bool {
        self.position(descriptor).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Entries in selection order.
    pub fn iter(&self) -> impl Iterator<Item = &SelectionEntry> {
        self.entries.iter()
    }

    /// Entries arranged according to `order`. Sorting is stable, so ties
    /// (e.g. several uncatalogued names) keep selection order.
    pub fn ordered(&self, order: SelectionOrder) -> Vec<&SelectionEntry> {
        let mut entries: Vec<&SelectionEntry> = self.entries.iter().collect();
        match order {
            SelectionOrder::Selected => {}
            SelectionOrder::Catalog => entries.sort_by_key(|e| {
                catalog::catalog_position(&e.descriptor).unwrap_or(usize::MAX)
            }),
            SelectionOrder::Alphabetical => {
                entries.sort_by(|a, b| a.descriptor.cmp(&b.descriptor))
            }
        }
        entries
    }

    /// `(label, intensity)` pairs in the requested order, as the renderer
    /// consumes them.
    pub fn pairs(&self, order: SelectionOrder) -> Vec<(&str, u8)> {
        self.ordered(order)
            .into_iter()
            .map(|e| (e.descriptor.as_str(), e.intensity.get()))
            .collect()
    }

    fn position(&self, descriptor: &str) -> Option<usize> {
        let key = normalize(descriptor);
        self.entries.iter().position(|e| e.descriptor == key)
    }
}

/// Catalogued names collapse to their canonical spelling; anything else is
/// kept verbatim (trimmed) so it can still be charted under the defaults.
fn normalize(descriptor: &str) -> String {
    catalog::canonical_name(descriptor)
        .map(str::to_string)
        .unwrap_or_else(|| descriptor.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn intensity(v: u8) -> Intensity {
        Intensity::new(v).unwrap()
    }

    #[test]
    fn intensity_bounds() {
        assert!(Intensity::new(0).is_none());
        assert!(Intensity::new(6).is_none());
        assert_eq!(Intensity::saturating(9), Some(Intensity::MAX));
        assert_eq!(Intensity::default().get(), 3);
    }

    #[test]
    fn keeps_selection_order_and_updates_in_place() {
        let mut s = Selection::new();
        s.select("tense", intensity(2));
        s.select("witty", intensity(4));
        s.select("tense", intensity(5));

        let pairs = s.pairs(SelectionOrder::Selected);
        assert_eq!(pairs, vec![("tense", 5), ("witty", 4)]);
    }

    #[test]
    fn zero_intensity_deselects() {
        let mut s = Selection::from_pairs([("lonely", 3), ("soft", 2)]);
        s.set_intensity("lonely", 0);
        assert!(!s.contains("lonely"));
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn toggle_adds_then_removes() {
        let mut s = Selection::new();
        s.toggle("eerie", Intensity::default());
        assert_eq!(s.intensity_of("eerie"), Some(Intensity::default()));
        s.toggle("eerie", Intensity::default());
        assert!(s.is_empty());
    }

    #[test]
    fn catalog_and_alphabetical_orders() {
        let s = Selection::from_pairs([("witty", 1), ("anxious", 2), ("surreal", 3)]);
        let catalog: Vec<_> = s
            .ordered(SelectionOrder::Catalog)
            .iter()
            .map(|e| e.descriptor.as_str())
            .collect();
        assert_eq!(catalog, vec!["anxious", "witty", "surreal"]);

        let alpha: Vec<_> = s
            .ordered(SelectionOrder::Alphabetical)
            .iter()
            .map(|e| e.descriptor.as_str())
            .collect();
        assert_eq!(alpha, vec!["anxious", "surreal", "witty"]);
    }

    #[test]
    fn names_are_canonicalized() {
        let mut s = Selection::new();
        s.select(" Tense", intensity(2));
        assert!(s.contains("tense"));
        assert_eq!(s.pairs(SelectionOrder::Selected), vec![("tense", 2)]);
    }

    #[test]
    fn intensity_serializes_as_plain_number() {
        let json = serde_json::to_string(&intensity(4)).unwrap();
        assert_eq!(json, "4");
        assert!(serde_json::from_str::<Intensity>("0").is_err());
    }
}
