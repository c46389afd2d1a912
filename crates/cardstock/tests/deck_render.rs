//! End-to-end checks over the public facade: deck JSON in, SVG artifact out.

use cardstock::render::{DeckRenderError, RenderOptions, render_svg, render_svg_to_file};
use cardstock::{Deck, DeckGeometry};

const SAMPLE_DECK_JSON: &str = r#"[
    {"Card_Name": "Fire Dragon", "Suit": "Lightning", "Value": "7",
     "Task": "Deal 3 damage", "Rules": "Play any time", "Icon_Color": "red"},
    {"Card_Name": "Shield Maiden", "Suit": "Shield", "Value": "4",
     "Task": "Block one attack", "Rules": "Defense phase", "Icon_Color": "blue"},
    {"Card_Name": "Star Power", "Suit": "Star", "Value": "9",
     "Task": "Gain two points", "Rules": "Once per round", "Icon_Color": "purple"},
    {"Card_Name": "Royal Crown", "Suit": "Crown", "Value": "K",
     "Task": "Crown the winner", "Rules": "Endgame only", "Icon_Color": "orange"}
]"#;

#[test]
fn sample_deck_renders_four_stacked_cards() {
    let deck = Deck::from_json_str(SAMPLE_DECK_JSON).unwrap();
    let svg = render_svg(&deck, &RenderOptions::default()).unwrap();

    let geom = DeckGeometry::default();
    assert!((geom.paper_height(4) - 155.6).abs() < 1e-9);
    assert!(svg.contains(r#"viewBox="0 0 30 155.6""#));

    let doc = roxmltree::Document::parse(&svg).unwrap();
    let cards: Vec<_> = doc
        .descendants()
        .filter(|n| n.attribute("class") == Some("card"))
        .collect();
    assert_eq!(cards.len(), 4);
    assert!(!svg.contains("<image"));

    // Three icon placements per card: corner, rotated corner, center.
    for card in &cards {
        let icons = card
            .descendants()
            .filter(|n| n.attribute("fill-rule") == Some("nonzero"))
            .count();
        assert_eq!(icons, 3);
    }

    // Card regions must not overlap.
    let mut tops: Vec<f64> = (0..4).map(|i| geom.card_origin(i, 4).1).collect();
    tops.sort_by(f64::total_cmp);
    for pair in tops.windows(2) {
        assert!(pair[0] + geom.card_height <= pair[1] + 1e-9);
    }
}

#[test]
fn missing_custom_image_falls_back_per_card() {
    let json = r#"[
        {"name": "Broken", "suit": "club", "value": "2",
         "task": "t", "rules": "r", "custom_image": "/nope/missing.png"},
        {"name": "Fine", "suit": "heart", "value": "3", "task": "t", "rules": "r"}
    ]"#;
    let deck = Deck::from_json_str(json).unwrap();
    let svg = render_svg(&deck, &RenderOptions::default()).unwrap();
    assert!(!svg.contains("<image"));
    assert!(svg.contains("Broken") && svg.contains("Fine"));
}

#[test]
fn empty_deck_fails_and_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("deck.svg");
    let err = render_svg_to_file(&Deck::default(), &RenderOptions::default(), &target).unwrap_err();
    assert!(matches!(err, DeckRenderError::Render(_)));
    assert!(!target.exists());
}

#[test]
fn svg_artifact_is_written_atomically() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("deck.svg");
    let deck = Deck::from_json_str(SAMPLE_DECK_JSON).unwrap();
    let written = render_svg_to_file(&deck, &RenderOptions::default(), &target).unwrap();
    assert_eq!(written, target);
    let contents = std::fs::read_to_string(&target).unwrap();
    assert!(contents.starts_with("<svg"));
    // No stray temporary files left behind.
    let leftovers = std::fs::read_dir(dir.path()).unwrap().count();
    assert_eq!(leftovers, 1);
}

#[test]
fn unwritable_target_is_a_surface_error() {
    let deck = Deck::from_json_str(SAMPLE_DECK_JSON).unwrap();
    let err = render_svg_to_file(
        &deck,
        &RenderOptions::default(),
        std::path::Path::new("/no-such-dir/deck.svg"),
    )
    .unwrap_err();
    assert!(matches!(err, DeckRenderError::Surface { .. }));
}

#[test]
fn truncated_task_text_shows_exactly_two_lines() {
    let json = r#"[{"name": "Wordy", "suit": "spade", "value": "5",
        "task": "this task text is long enough to wrap into at least three separate lines",
        "rules": "short"}]"#;
    let deck = Deck::from_json_str(json).unwrap();
    let options = RenderOptions::default();
    let svg = render_svg(&deck, &options).unwrap();

    let wrapped = cardstock_render::text::wrap_text(&deck.cards()[0].task, options.text_budget);
    assert!(wrapped.len() >= 3);
    // The first two wrapped lines appear; the third does not, and there is no
    // truncation marker.
    assert!(svg.contains(&wrapped[0]));
    assert!(svg.contains(&wrapped[1]));
    assert!(!svg.contains(&wrapped[2]));
    assert!(!svg.contains("…") && !svg.contains("..."));
}
