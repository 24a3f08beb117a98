// Copyright 2026 the Placard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Session-level tests exercising placement, propagation, and styles
//! together against a live document.

use alloc::vec;
use alloc::vec::Vec;

use peniko::kurbo::{Affine, Point, Rect};

use pagegraph::{
    Document, FontSelector, Justification, PageItemId, TextAttribute, TextAttributeKind,
    VerticalJustification,
};

use crate::{
    AttributeSet, ErrorKind, RectMode, ScriptContext, TextTarget, TextUnit, Warning,
};

fn frame_id(unit: TextUnit) -> PageItemId {
    match unit {
        TextUnit::Frame(frame) => frame,
        TextUnit::Path(_) => panic!("expected a frame"),
    }
}

#[test]
fn placed_frame_takes_bounds_justification_and_transform() {
    let mut doc = Document::new();
    let mut ctx = ScriptContext::new(&mut doc);
    ctx.set_vertical_justification(VerticalJustification::Center);
    ctx.set_matrix(Affine::translate((10.0, 5.0)));

    let unit = ctx.place_text("Hello", 50.0, 50.0, 100.0, 200.0).unwrap();
    let frame = frame_id(unit);

    let doc = ctx.document();
    assert_eq!(
        doc.frame_bounds(frame).unwrap(),
        Rect::new(50.0, 50.0, 150.0, 250.0)
    );
    assert_eq!(
        doc.frame_vertical_justification(frame).unwrap(),
        VerticalJustification::Center
    );
    // A pure translation commutes with the anchor conjugation.
    assert_eq!(
        doc.frame_transform(frame).unwrap(),
        Affine::translate((10.0, 5.0))
    );

    let story = doc.frame_story(frame).unwrap();
    let refs = doc.paragraph_refs(story).unwrap();
    assert_eq!(refs.len(), 1);
    assert_eq!(doc.paragraph_text(refs[0]).unwrap(), "Hello");
}

#[test]
fn placement_stamps_the_current_attributes() {
    let mut doc = Document::new();
    let mut ctx = ScriptContext::new(&mut doc);
    ctx.set_font_size(20.0).unwrap();
    ctx.set_tracking(15.0).unwrap();
    ctx.set_justification(Justification::Right);

    let unit = ctx.place_text("Hello", 0.0, 0.0, 100.0, 100.0).unwrap();
    let target = TextTarget::from(unit);

    assert_eq!(
        ctx.read(&target, TextAttributeKind::FontSize).unwrap(),
        vec![TextAttribute::FontSize(20.0)]
    );
    assert_eq!(
        ctx.read(&target, TextAttributeKind::Tracking).unwrap(),
        vec![TextAttribute::Tracking(15.0)]
    );
    assert_eq!(
        ctx.read(&target, TextAttributeKind::Justification).unwrap(),
        vec![TextAttribute::Justification(Justification::Right)]
    );
    assert!(ctx.warnings().is_empty());
}

#[test]
fn rect_mode_changes_placement_bounds() {
    let mut doc = Document::new();
    let mut ctx = ScriptContext::new(&mut doc);
    ctx.set_rect_mode(RectMode::Center);

    let unit = ctx.place_text("x", 100.0, 100.0, 40.0, 60.0).unwrap();
    let bounds = ctx.document().frame_bounds(frame_id(unit)).unwrap();
    assert_eq!(bounds, Rect::new(80.0, 70.0, 120.0, 130.0));
}

#[test]
fn degenerate_placement_coordinates_are_rejected() {
    let mut doc = Document::new();
    let mut ctx = ScriptContext::new(&mut doc);

    let err = ctx.place_text("x", f64::NAN, 0.0, 10.0, 10.0).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}

#[test]
fn write_then_read_round_trip() {
    let mut doc = Document::new();
    let mut ctx = ScriptContext::new(&mut doc);
    let unit = ctx.place_text("one\ntwo", 0.0, 0.0, 100.0, 100.0).unwrap();
    let target = TextTarget::from(unit);

    // A non-reflow attribute leaves the references alone.
    let refs = ctx.write(&target, TextAttribute::Tracking(42.0)).unwrap();
    assert_eq!(refs.len(), 2);
    assert_eq!(
        ctx.read(&target, TextAttributeKind::Tracking).unwrap(),
        vec![TextAttribute::Tracking(42.0), TextAttribute::Tracking(42.0)]
    );

    // A reflow-affecting attribute recomposes; the returned references are
    // re-resolved and stay usable.
    let refs = ctx.write(&target, TextAttribute::FontSize(33.0)).unwrap();
    assert_eq!(refs.len(), 2);
    for paragraph in &refs {
        assert!(ctx.document().paragraph_is_valid(*paragraph));
    }
    assert_eq!(
        ctx.read(&target, TextAttributeKind::FontSize).unwrap(),
        vec![TextAttribute::FontSize(33.0), TextAttribute::FontSize(33.0)]
    );
    assert!(ctx.warnings().is_empty());
}

#[test]
fn reflow_write_reaches_every_paragraph() {
    let mut doc = Document::new();
    let mut ctx = ScriptContext::new(&mut doc);
    let unit = ctx
        .place_text("a\nb\nc\nd", 0.0, 0.0, 100.0, 100.0)
        .unwrap();
    let target = TextTarget::from(unit);

    ctx.write(&target, TextAttribute::FontSize(40.0)).unwrap();
    let values = ctx.read(&target, TextAttributeKind::FontSize).unwrap();
    assert_eq!(values, vec![TextAttribute::FontSize(40.0); 4]);
    assert!(ctx.warnings().is_empty());
}

#[test]
fn document_target_covers_every_paragraph_in_order() {
    let mut doc = Document::new();
    let mut ctx = ScriptContext::new(&mut doc);
    let first = ctx.place_text("a\nb", 0.0, 0.0, 50.0, 50.0).unwrap();
    let second = ctx.place_text("c", 100.0, 0.0, 50.0, 50.0).unwrap();

    ctx.write(&TextTarget::from(first), TextAttribute::FontSize(10.0))
        .unwrap();
    ctx.write(&TextTarget::from(second), TextAttribute::FontSize(20.0))
        .unwrap();

    let values = ctx
        .read(&TextTarget::Document, TextAttributeKind::FontSize)
        .unwrap();
    assert_eq!(
        values,
        vec![
            TextAttribute::FontSize(10.0),
            TextAttribute::FontSize(10.0),
            TextAttribute::FontSize(20.0),
        ]
    );

    // The page target resolves to the same paragraphs here.
    let page = ctx.page();
    assert_eq!(
        ctx.read(&TextTarget::Page(page), TextAttributeKind::FontSize)
            .unwrap(),
        values
    );
}

#[test]
fn spread_target_covers_only_that_spread() {
    let mut doc = Document::new();
    let spread = doc.add_spread();
    let page = doc.add_page(spread).unwrap();
    let mut ctx = ScriptContext::new(&mut doc);
    ctx.place_text("front", 0.0, 0.0, 50.0, 50.0).unwrap();

    ctx.set_page(page).unwrap();
    let unit = ctx.place_text("back", 0.0, 0.0, 50.0, 50.0).unwrap();
    ctx.write(&TextTarget::from(unit), TextAttribute::FontSize(11.0))
        .unwrap();

    let values = ctx
        .read(&TextTarget::Spread(spread), TextAttributeKind::FontSize)
        .unwrap();
    assert_eq!(values, vec![TextAttribute::FontSize(11.0)]);
}

#[test]
fn layer_target_filters_to_that_layer() {
    let mut doc = Document::new();
    let overlay = doc.add_layer("Overlay");
    let mut ctx = ScriptContext::new(&mut doc);
    ctx.place_text("base", 0.0, 0.0, 50.0, 50.0).unwrap();

    ctx.set_layer(overlay).unwrap();
    let unit = ctx.place_text("float", 100.0, 0.0, 50.0, 50.0).unwrap();
    ctx.write(&TextTarget::from(unit), TextAttribute::FontSize(9.0))
        .unwrap();

    let values = ctx
        .read(&TextTarget::Layer(overlay), TextAttributeKind::FontSize)
        .unwrap();
    assert_eq!(values, vec![TextAttribute::FontSize(9.0)]);
}

#[test]
fn stale_target_write_is_a_soft_no_op() {
    let mut doc = Document::new();
    let mut ctx = ScriptContext::new(&mut doc);
    let unit = ctx.place_text("gone", 0.0, 0.0, 50.0, 50.0).unwrap();
    let frame = frame_id(unit);
    ctx.document_mut().remove_item(frame).unwrap();

    let refs = ctx
        .write(&TextTarget::from(unit), TextAttribute::FontSize(30.0))
        .unwrap();
    assert_eq!(refs, Vec::new());
    assert_eq!(ctx.warnings(), &[Warning::StaleTarget]);

    // Reads are equally soft.
    ctx.clear_warnings();
    let values = ctx
        .read(&TextTarget::from(unit), TextAttributeKind::FontSize)
        .unwrap();
    assert!(values.is_empty());
    assert_eq!(ctx.warnings(), &[Warning::StaleTarget]);
}

#[test]
fn frame_target_on_a_plain_shape_is_an_error() {
    let mut doc = Document::new();
    let page = doc.default_page();
    let layer = doc.default_layer();
    let rect = doc
        .create_rectangle(page, layer, Rect::new(0.0, 0.0, 10.0, 10.0))
        .unwrap();

    let mut ctx = ScriptContext::new(&mut doc);
    let err = ctx
        .write(&TextTarget::Frame(rect), TextAttribute::FontSize(30.0))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert!(ctx.warnings().is_empty());
}

#[test]
fn place_text_in_adopts_shapes_and_lines() {
    let mut doc = Document::new();
    let page = doc.default_page();
    let layer = doc.default_layer();
    let oval = doc
        .create_oval(page, layer, Rect::new(0.0, 0.0, 80.0, 80.0))
        .unwrap();
    let line = doc
        .create_graphic_line(page, layer, Point::new(0.0, 0.0), Point::new(100.0, 0.0))
        .unwrap();

    let mut ctx = ScriptContext::new(&mut doc);
    ctx.set_font_size(16.0).unwrap();

    let in_oval = ctx.place_text_in("curved", oval).unwrap();
    assert_eq!(in_oval, TextUnit::Frame(oval));
    assert_eq!(
        ctx.read(&TextTarget::from(in_oval), TextAttributeKind::FontSize)
            .unwrap(),
        vec![TextAttribute::FontSize(16.0)]
    );

    let on_line = ctx.place_text_in("along", line).unwrap();
    assert!(matches!(on_line, TextUnit::Path(_)));
    let story = match on_line {
        TextUnit::Path(path) => ctx.document().path_story(path).unwrap(),
        TextUnit::Frame(_) => unreachable!(),
    };
    let refs = ctx.document().paragraph_refs(story).unwrap();
    assert_eq!(ctx.document().paragraph_text(refs[0]).unwrap(), "along");
    assert_eq!(
        ctx.read(&TextTarget::from(on_line), TextAttributeKind::FontSize)
            .unwrap(),
        vec![TextAttribute::FontSize(16.0)]
    );
}

#[test]
fn place_text_in_rejects_dead_items() {
    let mut doc = Document::new();
    let page = doc.default_page();
    let layer = doc.default_layer();
    let rect = doc
        .create_rectangle(page, layer, Rect::new(0.0, 0.0, 10.0, 10.0))
        .unwrap();
    doc.remove_item(rect).unwrap();

    let mut ctx = ScriptContext::new(&mut doc);
    let err = ctx.place_text_in("x", rect).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}

#[test]
fn uninstalled_font_write_warns_and_writes_nothing() {
    let mut doc = Document::new();
    let mut ctx = ScriptContext::new(&mut doc);
    let unit = ctx.place_text("text", 0.0, 0.0, 50.0, 50.0).unwrap();
    let target = TextTarget::from(unit);
    let installed = ctx.font().clone();

    let missing = FontSelector::new("Bodoni", "Poster");
    let refs = ctx
        .write(&target, TextAttribute::Font(missing.clone()))
        .unwrap();
    assert!(refs.is_empty());
    assert_eq!(ctx.warnings(), &[Warning::FontNotInstalled(missing)]);
    assert_eq!(
        ctx.read(&target, TextAttributeKind::Font).unwrap(),
        vec![TextAttribute::Font(installed)]
    );
}

#[test]
fn style_resolution_creates_but_application_requires() {
    let mut doc = Document::new();
    let mut ctx = ScriptContext::new(&mut doc);
    let unit = ctx.place_text("styled", 0.0, 0.0, 50.0, 50.0).unwrap();
    let target = TextTarget::from(unit);

    // Resolution is an idempotent get-or-create.
    let emphasis = ctx.resolve_character_style("Emphasis");
    assert_eq!(ctx.resolve_character_style("Emphasis"), emphasis);

    // Application by name never creates.
    let err = ctx.apply_character_style(&target, "Missing").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert!(ctx.document().find_character_style("Missing").is_none());

    let refs = ctx.apply_character_style(&target, "Emphasis").unwrap();
    assert_eq!(refs.len(), 1);
    let runs = ctx.document().character_style_runs(refs[0]).unwrap();
    assert_eq!(runs.len(), 1);
    assert_eq!(runs[0].style, emphasis);
}

#[test]
fn paragraph_styles_apply_by_id_and_by_name() {
    let mut doc = Document::new();
    let mut ctx = ScriptContext::new(&mut doc);
    let unit = ctx.place_text("head\nbody", 0.0, 0.0, 50.0, 50.0).unwrap();
    let target = TextTarget::from(unit);

    let mut props = AttributeSet::new();
    props.insert(TextAttribute::FontSize(24.0));
    let heading = ctx.resolve_paragraph_style_with("Heading", &props).unwrap();
    assert_eq!(ctx.resolve_paragraph_style("Heading"), heading);

    let refs = ctx.apply_paragraph_style(&target, heading).unwrap();
    assert_eq!(refs.len(), 2);
    for paragraph in &refs {
        assert_eq!(
            ctx.document().applied_paragraph_style(*paragraph).unwrap(),
            Some(heading)
        );
    }

    let err = ctx.apply_paragraph_style(&target, "Subhead").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[test]
fn story_target_matches_its_frame_target() {
    let mut doc = Document::new();
    let mut ctx = ScriptContext::new(&mut doc);
    let unit = ctx.place_text("one\ntwo", 0.0, 0.0, 50.0, 50.0).unwrap();
    let frame = frame_id(unit);
    let story = ctx.document().frame_story(frame).unwrap();

    ctx.write(&TextTarget::Story(story), TextAttribute::Kerning(5.0))
        .unwrap();
    assert_eq!(
        ctx.read(&TextTarget::from(unit), TextAttributeKind::Kerning)
            .unwrap(),
        vec![TextAttribute::Kerning(5.0), TextAttribute::Kerning(5.0)]
    );
}

#[test]
fn single_paragraph_target_writes_only_that_paragraph() {
    let mut doc = Document::new();
    let mut ctx = ScriptContext::new(&mut doc);
    let unit = ctx.place_text("one\ntwo", 0.0, 0.0, 50.0, 50.0).unwrap();
    let target = TextTarget::from(unit);

    let refs = ctx.resolve_target(&target).unwrap();
    ctx.write(&TextTarget::from(refs[1]), TextAttribute::Tracking(77.0))
        .unwrap();

    assert_eq!(
        ctx.read(&target, TextAttributeKind::Tracking).unwrap(),
        vec![TextAttribute::Tracking(0.0), TextAttribute::Tracking(77.0)]
    );
}
