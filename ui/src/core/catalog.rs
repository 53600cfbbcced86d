//! Descriptor catalog: the static descriptor → category → color tables.
//!
//! Every lookup is total. Unknown descriptors fall into [`META_AFFECT`] and
//! unknown categories render in [`FALLBACK_COLOR`], so callers never have to
//! handle a missing entry.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Category assigned to any descriptor the catalog does not know.
pub const META_AFFECT: &str = "meta-affect";

/// Color used for any category without an entry in [`CATEGORIES`].
pub const FALLBACK_COLOR: &str = "#cccccc";

/// A grouping of related descriptors sharing one display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub name: &'static str,
    /// Hex RGB, `#rrggbb`.
    pub color: &'static str,
}

/// A selectable affective tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Descriptor {
    pub name: &'static str,
    pub category: &'static str,
}

const fn category(name: &'static str, color: &'static str) -> Category {
    Category { name, color }
}

const fn descriptor(name: &'static str, category: &'static str) -> Descriptor {
    Descriptor { name, category }
}

const TENSION: &str = "Tension / Unease";
const MELANCHOLY: &str = "Melancholy / Longing";
const TENDERNESS: &str = "Tenderness / Warmth";
const INTENSITY: &str = "Intensity / Overload";
const SPECTACLE: &str = "Spectacle / Provocation";
const HUMOR: &str = "Humor / Irony";
const CONTEMPLATION: &str = "Contemplation / Gaze";
const STRANGENESS: &str = "Strangeness / Dream";

pub const CATEGORIES: &[Category] = &[
    category(TENSION, "#ff4c4c"),
    category(MELANCHOLY, "#6a5acd"),
    category(TENDERNESS, "#ffb6c1"),
    category(INTENSITY, "#b22222"),
    category(SPECTACLE, "#ff69b4"),
    category(HUMOR, "#ffd700"),
    category(CONTEMPLATION, "#4682b4"),
    category(STRANGENESS, "#ff8c00"),
    category(META_AFFECT, "#9400d3"),
];

/// Declaration order is significant: it drives the `catalog` selection
/// ordering and the order of rows inside each form expander.
pub const DESCRIPTORS: &[Descriptor] = &[
    descriptor("uneasy", TENSION),
    descriptor("tense", TENSION),
    descriptor("threatening", TENSION),
    descriptor("oppressive", TENSION),
    descriptor("anxious", TENSION),
    descriptor("melancholic", MELANCHOLY),
    descriptor("poignant", MELANCHOLY),
    descriptor("sentimental", MELANCHOLY),
    descriptor("lonely", MELANCHOLY),
    descriptor("nostalgic", MELANCHOLY),
    descriptor("gentle", TENDERNESS),
    descriptor("soft", TENDERNESS),
    descriptor("warm", TENDERNESS),
    descriptor("tender", TENDERNESS),
    descriptor("intense", INTENSITY),
    descriptor("explosive", INTENSITY),
    descriptor("immersive", INTENSITY),
    descriptor("overwhelming", INTENSITY),
    descriptor("furious", INTENSITY),
    descriptor("chaotic", INTENSITY),
    descriptor("flashy", SPECTACLE),
    descriptor("explicit", SPECTACLE),
    descriptor("provocative", SPECTACLE),
    descriptor("witty", HUMOR),
    descriptor("ironic", HUMOR),
    descriptor("playful", HUMOR),
    descriptor("absurd", HUMOR),
    descriptor("gazing", CONTEMPLATION),
    descriptor("contemplative", CONTEMPLATION),
    descriptor("still", CONTEMPLATION),
    descriptor("distant", CONTEMPLATION),
    descriptor("surreal", STRANGENESS),
    descriptor("uncanny", STRANGENESS),
    descriptor("dreamlike", STRANGENESS),
    descriptor("eerie", STRANGENESS),
    descriptor("self-aware", META_AFFECT),
    descriptor("reflexive", META_AFFECT),
    descriptor("detached", META_AFFECT),
];

static DESCRIPTOR_INDEX: Lazy<HashMap<&'static str, (usize, &'static str)>> = Lazy::new(|| {
    DESCRIPTORS
        .iter()
        .enumerate()
        .map(|(position, d)| (d.name, (position, d.category)))
        .collect()
});

static COLOR_INDEX: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| CATEGORIES.iter().map(|c| (c.name, c.color)).collect());

fn lookup(descriptor: &str) -> Option<(usize, &'static str)> {
    let trimmed = descriptor.trim();
    if let Some(hit) = DESCRIPTOR_INDEX.get(trimmed) {
        return Some(*hit);
    }
    DESCRIPTOR_INDEX
        .get(trimmed.to_ascii_lowercase().as_str())
        .copied()
}

/// Category of `descriptor`, or [`META_AFFECT`] when it is not catalogued.
pub fn category_of(descriptor: &str) -> &'static str {
    lookup(descriptor)
        .map(|(_, category)| category)
        .unwrap_or(META_AFFECT)
}

/// Display color of `category`, or [`FALLBACK_COLOR`] when it is unknown.
pub fn color_of(category: &str) -> &'static str {
    COLOR_INDEX.get(category).copied().unwrap_or(FALLBACK_COLOR)
}

/// Shorthand for `color_of(category_of(descriptor))`.
pub fn descriptor_color(descriptor: &str) -> &'static str {
    color_of(category_of(descriptor))
}

/// Declaration index of `descriptor`.
pub fn catalog_position(descriptor: &str) -> Option<usize> {
    lookup(descriptor).map(|(position, _)| position)
}

pub fn categories() -> impl Iterator<Item = &'static Category> {
    CATEGORIES.iter()
}

pub fn descriptors_in(category: &str) -> impl Iterator<Item = &'static Descriptor> + '_ {
    DESCRIPTORS.iter().filter(move |d| d.category == category)
}

/// Canonical (catalogued) spelling of `descriptor`, if any.
pub fn canonical_name(descriptor: &str) -> Option<&'static str> {
    lookup(descriptor).map(|(position, _)| DESCRIPTORS[position].name)
}
