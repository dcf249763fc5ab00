// Host-side tests for constants and their mathematical relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_are_within_reasonable_bounds() {
    // Lens
    assert!(CAMERA_FOV_DEG > 0.0 && CAMERA_FOV_DEG < 180.0);
    assert!(CAMERA_NEAR > 0.0);

    // Opacities are fractions
    for a in [STAR_OPACITY, PANEL_OPACITY] {
        assert!(a > 0.0 && a <= 1.0);
    }
    for m in [KNOT_METALNESS, KNOT_ROUGHNESS, PANEL_METALNESS, PANEL_ROUGHNESS] {
        assert!((0.0..=1.0).contains(&m));
    }

    // Backing store never exceeds 2x
    assert_eq!(MAX_PIXEL_RATIO, 2.0);
    assert!(MSAA_SAMPLES == 1 || MSAA_SAMPLES == 4);

    // Cue is quiet and short
    assert!(CUE_GAIN > 0.0 && CUE_GAIN < 0.1);
    assert!(CUE_DURATION_SEC > 0.0 && CUE_DURATION_SEC < 0.5);
    assert_eq!(GATE_REMOVE_DELAY_MS, 450);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_have_logical_relationships() {
    // Far plane covers the deepest star plus the furthest camera travel
    assert!(CAMERA_FAR > CAMERA_NEAR);
    assert!(CAMERA_FAR > STAR_DEPTH + STORY_Z_TRAVEL);

    // Camera starts where the story path begins
    assert_eq!(CAMERA_START[2], STORY_Z_START);
    assert_eq!(CAMERA_START[1], STORY_BASE_Y);

    // Panels sit at or in front of the final camera depth, and their inner
    // edges clear the widest camera sway
    let end_z = STORY_Z_START - STORY_Z_TRAVEL;
    for p in PANEL_POSITIONS {
        assert!(p[2] >= end_z, "panel z {} behind end depth {}", p[2], end_z);
        assert!(p[0].abs() - PANEL_SIZE[0] * 0.5 > STORY_SWAY_X);
    }

    // Bob stays within half a panel height
    assert!(PANEL_BOB_AMPLITUDE < PANEL_SIZE[1] * 0.5);
    assert_eq!(PANEL_POSITIONS.len(), PANEL_BOB.len());

    // Knot tube is thinner than its winding radius
    assert!(KNOT_TUBE < KNOT_RADIUS);
    assert!(KNOT_TUBULAR_SEGMENTS > KNOT_RADIAL_SEGMENTS);
}

#[test]
fn sound_labels_differ() {
    assert_ne!(SOUND_LABEL_ON, SOUND_LABEL_OFF);
    assert!(SOUND_LABEL_ON.starts_with("SOUND"));
}

#[test]
fn anchor_selector_targets_fragment_links() {
    assert_eq!(ANCHOR_SELECTOR, "a[href^=\"#\"]");
    for id in [CANVAS_ID, YEAR_ID, GATE_ID, START_BUTTON_ID, SOUND_BUTTON_ID, SCROLL_ID] {
        assert!(!id.is_empty() && !id.starts_with('#'));
    }
}
