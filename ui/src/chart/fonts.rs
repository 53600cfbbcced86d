//! Font discovery and text measurement for chart rendering.
//!
//! Discovery
//! ---------
//! Korean (and other non-Latin) titles and labels need a typeface with the
//! right glyph coverage. [`FontSetup::discover`] walks the configured
//! candidate paths and registers the first readable font file. When none is
//! found the chart falls back to a generic family and the UI shows a warning;
//! rendering never fails because of fonts.
//!
//! On native targets the registered fonts live in a `usvg::fontdb::Database`
//! shared by every rasterization. On the web the browser resolves the
//! family list itself, so discovery only produces the family stack.
//!
//! Measurement
//! -----------
//! Layout only needs vertical metrics for the title block. We approximate
//! them from the font size:
//! - line height: size * 1.28
//! - ascender:    size * 0.92
//! - descender:   line height - ascender (at least size * 0.08)

use std::fmt;
use std::path::PathBuf;

use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

use crate::core::config;

/// Lightweight weight indicator so callers avoid stringly-typed lookups.
#[derive(Clone, Copy, Debug)]
pub enum FontWeight {
    Regular,
    SemiBold,
    Bold,
}

impl fmt::Display for FontWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FontWeight::Regular => "Regular",
            FontWeight::SemiBold => "SemiBold",
            FontWeight::Bold => "Bold",
        })
    }
}

#[derive(Clone, Copy, Debug)]
pub struct TextMetrics {
    /// Chosen vertical line height for layout rhythm.
    pub line_h: f64,
    /// Estimated ascender distance above baseline.
    pub asc: f64,
    /// Estimated descender distance below baseline (positive number).
    pub desc: f64,
}

/// Vertical metrics for the given weight + size (px). Weight does not change
/// the estimate today; it is kept so call sites state their intent.
pub fn measure(_weight: FontWeight, size_px: f64) -> TextMetrics {
    let line_h = (size_px * 1.28).round();
    let asc = (size_px * 0.92).round();
    let desc = (line_h - asc).max(size_px * 0.08).round();
    TextMetrics { line_h, asc, desc }
}

/// Where to look for a chart typeface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    /// Font files tried in order; the first readable one wins.
    pub candidates: Vec<PathBuf>,
    /// Generic family used when no candidate is available.
    pub fallback_family: String,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            candidates: [
                "assets/fonts/NanumGothic.ttf",
                "/usr/share/fonts/truetype/nanum/NanumGothic.ttf",
                "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
                "/System/Library/Fonts/AppleSDGothicNeo.ttc",
                "C:\\Windows\\Fonts\\malgun.ttf",
            ]
            .into_iter()
            .map(PathBuf::from)
            .collect(),
            fallback_family: "sans-serif".to_string(),
        }
    }
}

/// Outcome of font discovery.
#[derive(Debug, Clone, PartialEq)]
pub struct FontResolution {
    /// Family registered from a candidate file, if any.
    pub family: Option<String>,
    pub source: Option<PathBuf>,
    pub fallback_family: String,
    /// Candidates that were tried (in order).
    pub searched: Vec<PathBuf>,
    /// Whether a missing font should be reported to the user.
    pub warn_on_fallback: bool,
}

impl FontResolution {
    /// Family list for SVG `font-family` attributes.
    pub fn family_stack(&self) -> String {
        match &self.family {
            Some(family) => format!("'{family}', {}", self.fallback_family),
            None => self.fallback_family.clone(),
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.family.is_none()
    }

    /// True when the user should be told that the chart uses a fallback
    /// typeface.
    pub fn needs_warning(&self) -> bool {
        self.warn_on_fallback && self.is_fallback()
    }
}

/// Process-wide font state.
pub struct FontSetup {
    pub resolution: FontResolution,
    #[cfg(not(target_arch = "wasm32"))]
    pub database: std::sync::Arc<usvg::fontdb::Database>,
}

/// Families tried, in order, as the rasterizer's generic `sans-serif` when no
/// candidate file was found.
#[cfg(not(target_arch = "wasm32"))]
const BUILTIN_SANS: &[&str] = &[
    "Noto Sans",
    "DejaVu Sans",
    "Liberation Sans",
    "Arial",
    "Helvetica",
];

impl FontSetup {
    #[cfg(not(target_arch = "wasm32"))]
    pub fn discover(config: &FontConfig) -> Self {
        use std::sync::Arc;
        use usvg::fontdb::Database;

        let mut database = Database::new();
        database.load_system_fonts();

        let mut searched = Vec::new();
        let mut found: Option<(String, PathBuf)> = None;

        for candidate in &config.candidates {
            searched.push(candidate.clone());
            let bytes = match std::fs::read(candidate) {
                Ok(bytes) => bytes,
                Err(err) => {
                    log::debug!("[fonts] {} unavailable: {err}", candidate.display());
                    continue;
                }
            };
            match face_family(&bytes) {
                Some(family) => {
                    database.load_font_data(bytes);
                    found = Some((family, candidate.clone()));
                    break;
                }
                None => log::warn!("[fonts] {} is not a usable font file", candidate.display()),
            }
        }

        match &found {
            Some((family, path)) => {
                log::info!("[fonts] using '{family}' from {}", path.display());
                database.set_sans_serif_family(family.clone());
            }
            None => {
                log::warn!(
                    "[fonts] no candidate font found ({} searched); falling back to {}",
                    searched.len(),
                    config.fallback_family
                );
                if let Some(builtin) = BUILTIN_SANS.iter().find(|name| has_family(&database, name)) {
                    database.set_sans_serif_family(*builtin);
                }
            }
        }

        let (family, source) = match found {
            Some((family, path)) => (Some(family), Some(path)),
            None => (None, None),
        };

        Self {
            resolution: FontResolution {
                family,
                source,
                fallback_family: config.fallback_family.clone(),
                searched,
                warn_on_fallback: true,
            },
            database: Arc::new(database),
        }
    }

    /// Browsers resolve the family list themselves; there is nothing to read
    /// from disk and nothing to warn about.
    #[cfg(target_arch = "wasm32")]
    pub fn discover(config: &FontConfig) -> Self {
        Self {
            resolution: FontResolution {
                family: Some("NanumGothic".to_string()),
                source: None,
                fallback_family: format!("'Noto Sans KR', {}", config.fallback_family),
                searched: Vec::new(),
                warn_on_fallback: false,
            },
        }
    }

    pub fn family_stack(&self) -> String {
        self.resolution.family_stack()
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn face_family(bytes: &[u8]) -> Option<String> {
    let mut scratch = usvg::fontdb::Database::new();
    scratch.load_font_data(bytes.to_vec());
    let family = scratch
        .faces()
        .next()
        .and_then(|face| face.families.first())
        .map(|(name, _)| name.clone());
    family
}

#[cfg(not(target_arch = "wasm32"))]
fn has_family(database: &usvg::fontdb::Database, family: &str) -> bool {
    database
        .faces()
        .any(|face| face.families.iter().any(|(name, _)| name == family))
}

static FONTS: OnceCell<FontSetup> = OnceCell::new();

/// Shared font setup, discovered once from the active configuration.
pub fn font_setup() -> &'static FontSetup {
    FONTS.get_or_init(|| FontSetup::discover(&config::current().fonts))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metrics_increase_with_size() {
        let small = measure(FontWeight::Regular, 12.0);
        let large = measure(FontWeight::Regular, 48.0);
        assert!(large.line_h > small.line_h);
        assert!(large.asc > small.asc);
    }

    #[test]
    fn baseline_consistency_ratio() {
        let m = measure(FontWeight::SemiBold, 32.0);
        let baseline_ratio = m.asc / 32.0;
        assert!(baseline_ratio > 0.80 && baseline_ratio < 1.05);
    }

    #[test]
    fn family_stack_prefers_discovered_family() {
        let resolution = FontResolution {
            family: Some("NanumGothic".into()),
            source: None,
            fallback_family: "sans-serif".into(),
            searched: Vec::new(),
            warn_on_fallback: true,
        };
        assert_eq!(resolution.family_stack(), "'NanumGothic', sans-serif");
        assert!(!resolution.needs_warning());
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn missing_candidates_fall_back_with_warning() {
        let config = FontConfig {
            candidates: vec![PathBuf::from("/definitely/not/here.ttf")],
            fallback_family: "sans-serif".into(),
        };
        let setup = FontSetup::discover(&config);
        assert!(setup.resolution.needs_warning());
        assert_eq!(setup.family_stack(), "sans-serif");
        assert_eq!(setup.resolution.searched, config.candidates);
    }
}
