use std::f64::consts::{PI, TAU};

use super::layout::{Bar, Frame, RADIAL_MAX};
use super::RenderedChart;

/// Standalone SVG document for `chart`. Identical charts yield identical
/// markup: coordinates are written with fixed precision.
pub(crate) fn to_svg(chart: &RenderedChart) -> String {
    let frame = &chart.frame;
    let style = &chart.style;
    let family = escape_xml(&chart.font_family);
    let mut out = String::with_capacity(2048 + chart.bars.len() * 320);

    out.push_str(&format!(
        "<svg xmlns='http://www.w3.org/2000/svg' width='{w}' height='{h}' viewBox='0 0 {w} {h}'>\n",
        w = chart.width(),
        h = chart.height(),
    ));
    out.push_str(&format!(
        "  <rect width='100%' height='100%' fill='{}'/>\n",
        escape_xml(&style.background)
    ));

    write_grid(&mut out, frame, &style.grid_color, &style.edge_color);

    out.push_str(&format!(
        "  <g class='bars' fill-opacity='{:.2}' stroke='{}' stroke-width='1'>\n",
        style.bar_opacity,
        escape_xml(&style.edge_color)
    ));
    for bar in &chart.bars {
        write_bar(&mut out, frame, bar);
    }
    out.push_str("  </g>\n");

    out.push_str(&format!(
        "  <g class='labels' font-family='{family}' font-size='{:.1}' fill='{}' text-anchor='middle' dominant-baseline='central'>\n",
        style.label_font_px,
        escape_xml(&style.text_color)
    ));
    for bar in &chart.bars {
        let (angle, r) = bar.label_anchor();
        let (x, y) = frame.point(angle, r);
        out.push_str(&format!(
            "    <text x='{x:.3}' y='{y:.3}'>{}</text>\n",
            escape_xml(&bar.label)
        ));
    }
    out.push_str("  </g>\n");

    out.push_str(&format!(
        "  <text class='title' x='{:.3}' y='{:.3}' font-family='{family}' font-size='{:.1}' font-weight='600' fill='{}' text-anchor='middle'>{}</text>\n",
        frame.center_x,
        frame.title_baseline,
        style.title_font_px,
        escape_xml(&style.text_color),
        escape_xml(&chart.heading)
    ));
    out.push_str("</svg>\n");
    out
}

/// Concentric rings at each intensity step plus the outer spine. Angular
/// spokes and tick labels are not drawn.
fn write_grid(out: &mut String, frame: &Frame, grid: &str, spine: &str) {
    out.push_str(&format!(
        "  <g class='grid' fill='none' stroke='{}' stroke-width='0.8'>\n",
        escape_xml(grid)
    ));
    let steps = RADIAL_MAX as u32;
    for step in 1..steps {
        let r = frame.scale() * step as f64;
        out.push_str(&format!(
            "    <circle cx='{:.3}' cy='{:.3}' r='{r:.3}'/>\n",
            frame.center_x, frame.center_y
        ));
    }
    out.push_str("  </g>\n");
    out.push_str(&format!(
        "  <circle class='spine' cx='{:.3}' cy='{:.3}' r='{:.3}' fill='none' stroke='{}' stroke-width='1'/>\n",
        frame.center_x,
        frame.center_y,
        frame.radius,
        escape_xml(spine)
    ));
}

fn write_bar(out: &mut String, frame: &Frame, bar: &Bar) {
    let color = escape_xml(bar.color);
    let length = bar.length();

    if bar.width >= TAU - 1e-9 {
        out.push_str(&format!(
            "    <circle cx='{:.3}' cy='{:.3}' r='{:.3}' fill='{color}'/>\n",
            frame.center_x,
            frame.center_y,
            length * frame.scale()
        ));
        return;
    }

    out.push_str(&format!(
        "    <path d='{}' fill='{color}'/>\n",
        wedge_path(frame, bar.start_angle(), bar.end_angle(), length)
    ));
}

/// Pie-slice path from the center, counter-clockwise from `start` to `end`.
pub(crate) fn wedge_path(frame: &Frame, start: f64, end: f64, length: f64) -> String {
    let (x0, y0) = frame.point(start, length);
    let (x1, y1) = frame.point(end, length);
    let r = length * frame.scale();
    let large_arc = u8::from(end - start > PI);
    // Screen y grows downward, so a counter-clockwise sweep is sweep-flag 0.
    format!(
        "M {:.3} {:.3} L {x0:.3} {y0:.3} A {r:.3} {r:.3} 0 {large_arc} 0 {x1:.3} {y1:.3} Z",
        frame.center_x, frame.center_y
    )
}

pub(crate) fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::{render, ChartStyle};

    #[test]
    fn escapes_markup_in_titles_and_labels() {
        let chart = render(&[("<b>", 2)], "Tom & Jerry", &ChartStyle::default(), "sans-serif")
            .unwrap();
        let svg = chart.to_svg();
        assert!(svg.contains("Tom &amp; Jerry"));
        assert!(svg.contains("&lt;b&gt;"));
        assert!(!svg.contains("<b>"));
    }

    #[test]
    fn single_bar_uses_large_arc() {
        let chart = render(&[("tense", 3)], "x", &ChartStyle::default(), "sans-serif").unwrap();
        let bar = &chart.bars[0];
        let path = wedge_path(&chart.frame, bar.start_angle(), bar.end_angle(), bar.length());
        assert!(path.contains(" 0 1 0 "), "expected large-arc flag in {path}");
    }

    #[test]
    fn narrow_bars_use_small_arc() {
        let chart = render(
            &[("tense", 3), ("soft", 2), ("eerie", 1)],
            "x",
            &ChartStyle::default(),
            "sans-serif",
        )
        .unwrap();
        let bar = &chart.bars[1];
        let path = wedge_path(&chart.frame, bar.start_angle(), bar.end_angle(), bar.length());
        assert!(path.contains(" 0 0 0 "), "expected small-arc flag in {path}");
    }

    #[test]
    fn full_width_single_bar_is_a_disc() {
        let style = ChartStyle {
            bar_width_ratio: 1.0,
            ..ChartStyle::default()
        };
        let svg = render(&[("tense", 3)], "x", &style, "sans-serif")
            .unwrap()
            .to_svg();
        assert!(!svg.contains("<path"));
        assert!(svg.contains("fill='#ff4c4c'"));
    }

    #[test]
    fn every_label_sits_over_a_drawn_bar() {
        let svg = render(&[("tense", 1), ("soft", 5)], "x", &ChartStyle::default(), "sans-serif")
            .unwrap()
            .to_svg();
        assert_eq!(svg.matches("<path").count(), 2);
        assert_eq!(svg.matches("<text x=").count(), 2);
    }

    #[test]
    fn no_tick_labels_are_emitted() {
        let svg = render(&[("tense", 3), ("soft", 5)], "x", &ChartStyle::default(), "sans-serif")
            .unwrap()
            .to_svg();
        // title + one label per bar
        assert_eq!(svg.matches("<text").count(), 3);
        assert_eq!(svg.matches("<line").count(), 0);
    }
}
