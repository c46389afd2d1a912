//! Single-card composition.
//!
//! Draws one card into the shared SVG buffer, entirely inside its
//! `card_width x card_height` rectangle. Rotated and re-colored elements are
//! expressed as scoped `<g>` groups carrying their own transform/fill, so no
//! drawing state ever leaks between elements or cards. A failed custom-image
//! normalization is absorbed here: the card falls back to suit icons and the
//! document render carries on.

use std::fmt::Write as _;

use cardstock_core::{CardRecord, DeckGeometry};

use crate::deck::RenderOptions;
use crate::icon::{IconPath, IconPrimitive, suit_icon};
use crate::image_prep;
use crate::svgutil::{escape_xml, fmt_number as fmt};
use crate::text::wrap_text;

// Card-local layout, all in mm from the card's top-left corner. Derived from
// the 26 x 36.4 mm print layout the deck format was tuned on.
const BORDER_RADIUS: f64 = 2.0;
const BORDER_STROKE: f64 = 0.2;
const TITLE_BASELINE: f64 = 7.0;
const INDEX_INSET: f64 = 1.0;
const INDEX_TOP_BASELINE: f64 = 9.0;
const INDEX_BOTTOM_RISE: f64 = 4.0;
const IMAGE_EDGE: f64 = 8.0;
const IMAGE_TOP: f64 = 10.0;
const SMALL_ICON: f64 = 3.0;
const CENTER_ICON: f64 = 5.0;
const LINE_ADVANCE: f64 = 2.2;

const TITLE_FONT: f64 = 2.5;
const INDEX_FONT: f64 = 2.1;
const LABEL_FONT: f64 = 1.8;
const BODY_FONT: f64 = 1.4;

const FONT_STACK: &str = "Helvetica, Arial, sans-serif";

/// Hard cap on rendered lines per text zone. Extra lines are dropped without
/// any truncation marker; that content loss is part of the card format.
const MAX_ZONE_LINES: usize = 2;

pub fn compose_card(
    out: &mut String,
    geom: &DeckGeometry,
    origin: (f64, f64),
    index: usize,
    record: &CardRecord,
    options: &RenderOptions,
) {
    let (x, y) = origin;
    let w = geom.card_width;
    let h = geom.card_height;
    let color = record.icon_color.svg_color();

    let _ = writeln!(out, r#"  <g class="card" data-index="{index}">"#);

    // Border + white face.
    let _ = writeln!(
        out,
        r#"    <rect x="{}" y="{}" width="{}" height="{}" rx="{}" fill="white" stroke="black" stroke-width="{}"/>"#,
        fmt(x),
        fmt(y),
        fmt(w),
        fmt(h),
        fmt(BORDER_RADIUS),
        fmt(BORDER_STROKE),
    );

    // Title, centered near the top edge.
    let _ = writeln!(
        out,
        r#"    <text x="{}" y="{}" text-anchor="middle" font-family="{FONT_STACK}" font-size="{}" font-weight="bold" fill="black">{}</text>"#,
        fmt(x + w / 2.0),
        fmt(y + TITLE_BASELINE),
        fmt(TITLE_FONT),
        escape_xml(&record.name),
    );

    // Corner indices: top-left upright, bottom-right rotated 180 degrees about
    // its own anchor so the card reads correctly upside down.
    let _ = writeln!(
        out,
        r#"    <text x="{}" y="{}" font-family="{FONT_STACK}" font-size="{}" font-weight="bold" fill="{color}">{}</text>"#,
        fmt(x + INDEX_INSET),
        fmt(y + INDEX_TOP_BASELINE),
        fmt(INDEX_FONT),
        escape_xml(&record.value),
    );
    let _ = writeln!(
        out,
        r#"    <g transform="translate({} {}) rotate(180)"><text x="0" y="0" font-family="{FONT_STACK}" font-size="{}" font-weight="bold" fill="{color}">{}</text></g>"#,
        fmt(x + w - INDEX_INSET),
        fmt(y + h - INDEX_BOTTOM_RISE),
        fmt(INDEX_FONT),
        escape_xml(&record.value),
    );

    // Primary visual: embedded image when one is supplied and normalizes
    // cleanly, suit icons otherwise.
    let mut drew_image = false;
    if let Some(path) = &record.custom_image {
        match image_prep::normalize(path, image_prep::NORMALIZED_EDGE_PX) {
            Ok(normalized) => {
                let _ = writeln!(
                    out,
                    r#"    <image x="{}" y="{}" width="{}" height="{}" href="{}"/>"#,
                    fmt(x + (w - IMAGE_EDGE) / 2.0),
                    fmt(y + IMAGE_TOP),
                    fmt(IMAGE_EDGE),
                    fmt(IMAGE_EDGE),
                    normalized.data_uri(),
                );
                drew_image = true;
            }
            Err(err) => {
                tracing::warn!(card = index, error = %err, "image fallback to suit icons");
            }
        }
    }
    if !drew_image {
        let icon = suit_icon(record.suit, SMALL_ICON);
        // Icon geometry is y-up; each placement group flips it into page
        // space (and optionally rotates about its own anchor).
        emit_icon_group(
            out,
            &icon,
            color,
            &format!(
                "translate({} {}) scale(1 -1)",
                fmt(x + INDEX_INSET),
                fmt(y + 14.0)
            ),
        );
        emit_icon_group(
            out,
            &icon,
            color,
            &format!(
                "translate({} {}) rotate(180) scale(1 -1)",
                fmt(x + w - 4.0),
                fmt(y + h - 7.0)
            ),
        );
        let center = suit_icon(record.suit, CENTER_ICON);
        emit_icon_group(
            out,
            &center,
            color,
            &format!(
                "translate({} {}) scale(1 -1)",
                fmt(x + (w - CENTER_ICON) / 2.0),
                fmt(y + h / 2.0 - 3.0)
            ),
        );
    }

    // Task zone: bold label plus at most two wrapped lines.
    emit_text_zone(
        out,
        "Task:",
        &record.task,
        options.text_budget,
        x + INDEX_INSET,
        y + h / 2.0 + 1.0,
        y + h / 2.0 + 3.4,
    );

    // Rules zone, near the bottom edge.
    emit_text_zone(
        out,
        "Rules:",
        &record.rules,
        options.text_budget,
        x + INDEX_INSET,
        y + h - 10.0,
        y + h - 7.6,
    );

    let _ = writeln!(out, "  </g>");
}

fn emit_text_zone(
    out: &mut String,
    label: &str,
    body: &str,
    budget: usize,
    x: f64,
    label_baseline: f64,
    first_line_baseline: f64,
) {
    let _ = writeln!(
        out,
        r#"    <text x="{}" y="{}" font-family="{FONT_STACK}" font-size="{}" font-weight="bold" fill="black">{label}</text>"#,
        fmt(x),
        fmt(label_baseline),
        fmt(LABEL_FONT),
    );
    for (i, line) in wrap_text(body, budget)
        .iter()
        .take(MAX_ZONE_LINES)
        .enumerate()
    {
        let _ = writeln!(
            out,
            r#"    <text x="{}" y="{}" font-family="{FONT_STACK}" font-size="{}" fill="black">{}</text>"#,
            fmt(x),
            fmt(first_line_baseline + i as f64 * LINE_ADVANCE),
            fmt(BODY_FONT),
            escape_xml(line),
        );
    }
}

/// Emits one icon inside a scoped group that owns its transform and fill.
fn emit_icon_group(out: &mut String, icon: &IconPath, color: &str, transform: &str) {
    let _ = writeln!(
        out,
        r#"    <g transform="{transform}" fill="{color}" fill-rule="nonzero">"#
    );
    for prim in &icon.primitives {
        match prim {
            IconPrimitive::Polygon { points, closed } => {
                let mut d = String::new();
                for (i, p) in points.iter().enumerate() {
                    let cmd = if i == 0 { 'M' } else { 'L' };
                    let _ = write!(&mut d, "{cmd}{} {} ", fmt(p.x), fmt(p.y));
                }
                if *closed {
                    d.push('Z');
                }
                let _ = writeln!(out, r#"      <path d="{}"/>"#, d.trim_end());
            }
            IconPrimitive::Circle { center, radius } => {
                let _ = writeln!(
                    out,
                    r#"      <circle cx="{}" cy="{}" r="{}"/>"#,
                    fmt(center.x),
                    fmt(center.y),
                    fmt(*radius),
                );
            }
            IconPrimitive::Rect {
                origin,
                width,
                height,
            } => {
                let _ = writeln!(
                    out,
                    r#"      <rect x="{}" y="{}" width="{}" height="{}"/>"#,
                    fmt(origin.x),
                    fmt(origin.y),
                    fmt(*width),
                    fmt(*height),
                );
            }
        }
    }
    let _ = writeln!(out, "    </g>");
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardstock_core::{ColorKind, SuitKind};

    fn sample_card() -> CardRecord {
        CardRecord {
            name: "Fire Dragon".to_string(),
            suit: SuitKind::Lightning,
            value: "7".to_string(),
            task: "Deal 3 damage to any target you choose this turn".to_string(),
            rules: "Play at any time".to_string(),
            icon_color: ColorKind::Red,
            custom_image: None,
        }
    }

    fn compose(record: &CardRecord) -> String {
        let mut out = String::new();
        compose_card(
            &mut out,
            &DeckGeometry::default(),
            (2.0, 2.0),
            0,
            record,
            &RenderOptions::default(),
        );
        out
    }

    #[test]
    fn icon_fallback_draws_three_icons() {
        let svg = compose(&sample_card());
        assert_eq!(svg.matches(r#"fill-rule="nonzero""#).count(), 3);
        assert!(!svg.contains("<image"));
        assert!(svg.contains("Fire Dragon"));
    }

    #[test]
    fn corner_index_is_duplicated_upside_down() {
        let svg = compose(&sample_card());
        assert_eq!(svg.matches(">7</text>").count(), 2);
        assert!(svg.contains("rotate(180)"));
    }

    #[test]
    fn text_zones_cap_at_two_lines() {
        let mut card = sample_card();
        card.task =
            "an intentionally long task description that wraps into many more than two lines"
                .to_string();
        let svg = compose(&card);
        let body_lines = svg
            .matches(&format!(r#"font-size="{}" fill="black""#, fmt(BODY_FONT)))
            .count();
        // Task capped at 2, rules fits in 2 or fewer; never more than 4 total.
        assert!(body_lines <= 2 * MAX_ZONE_LINES);
        assert!(!svg.contains("…"));
        assert!(wrap_text(&card.task, RenderOptions::default().text_budget).len() > 2);
    }

    #[test]
    fn missing_image_file_degrades_to_icons() {
        let mut card = sample_card();
        card.custom_image = Some("/no/such/image.png".into());
        let svg = compose(&card);
        assert!(!svg.contains("<image"));
        assert_eq!(svg.matches(r#"fill-rule="nonzero""#).count(), 3);
    }

    #[test]
    fn markup_in_card_text_is_escaped() {
        let mut card = sample_card();
        card.name = "<Dragon & Co>".to_string();
        let svg = compose(&card);
        assert!(svg.contains("&lt;Dragon &amp; Co&gt;"));
        assert!(!svg.contains("<Dragon"));
    }
}
