//! Formatting helpers for filenames and on-screen values.

use super::selection::Intensity;

/// Suggested download name: `{title}_affective_map.{extension}`.
///
/// Path separators, control characters and characters Windows rejects are
/// replaced with `_`; a blank title becomes `untitled`.
pub fn export_filename(title: &str, extension: &str) -> String {
    let cleaned: String = title
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();
    let stem = cleaned.trim_matches('.');
    let stem = if stem.is_empty() { "untitled" } else { stem };
    format!("{stem}_affective_map.{extension}")
}

/// Five-slot meter, e.g. `●●●○○` for 3.
pub fn format_intensity(intensity: Intensity) -> String {
    let filled = intensity.get() as usize;
    let empty = Intensity::MAX.get() as usize - filled;
    format!("{}{}", "●".repeat(filled), "○".repeat(empty))
}

pub fn format_degrees(radians: f64) -> String {
    format!("{:.0}°", radians.to_degrees())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filename_follows_pattern() {
        assert_eq!(export_filename("기생충", "png"), "기생충_affective_map.png");
    }

    #[test]
    fn filename_strips_separators() {
        assert_eq!(
            export_filename("../etc/passwd", "png"),
            "_etc_passwd_affective_map.png"
        );
        assert_eq!(export_filename("a:b\n", "svg"), "a_b_affective_map.svg");
        assert_eq!(export_filename("   ", "png"), "untitled_affective_map.png");
    }

    #[test]
    fn intensity_meter() {
        assert_eq!(format_intensity(Intensity::MAX), "●●●●●");
        assert_eq!(format_intensity(Intensity::MIN), "●○○○○");
    }

    #[test]
    fn degrees() {
        assert_eq!(format_degrees(std::f64::consts::PI), "180°");
    }
}
