// Host-side tests for the scroll-to-camera story mapping.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod story {
    include!("../src/story.rs");
}

use std::f32::consts::PI;
use story::*;

const EPS: f32 = 1e-5;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPS
}

fn samples() -> impl Iterator<Item = f32> {
    (0..=200).map(|i| i as f32 / 200.0)
}

#[test]
fn camera_depth_is_linear_in_progress() {
    for t in samples() {
        let pose = story_pose(t);
        assert!(
            (pose.camera_eye.z - (6.0 - 20.0 * t)).abs() < 1e-4,
            "z mismatch at t={t}"
        );
    }
    assert!(approx(story_pose(0.0).camera_eye.z, 6.0));
    assert!(approx(story_pose(1.0).camera_eye.z, -14.0));
}

#[test]
fn camera_sways_twice_across_the_scroll() {
    for t in samples() {
        let expected = 0.9 * (2.0 * PI * t).sin();
        assert!((story_pose(t).camera_eye.x - expected).abs() < 1e-4);
    }
    assert!(story_pose(0.0).camera_eye.x.abs() < 1e-5);
    assert!(story_pose(0.5).camera_eye.x.abs() < 1e-5);
    assert!(story_pose(1.0).camera_eye.x.abs() < 1e-5);
    // extremes at the quarter points
    assert!(approx(story_pose(0.25).camera_eye.x, 0.9));
    assert!(approx(story_pose(0.75).camera_eye.x, -0.9));
}

#[test]
fn camera_height_follows_half_sine_hump() {
    for t in samples() {
        let expected = 0.2 + 0.25 * (PI * t).sin();
        assert!((story_pose(t).camera_eye.y - expected).abs() < 1e-4);
    }
    assert!(approx(story_pose(0.0).camera_eye.y, 0.2));
    assert!(approx(story_pose(1.0).camera_eye.y, 0.2));
    assert!(approx(story_pose(0.5).camera_eye.y, 0.45));
}

#[test]
fn look_at_target_stays_six_units_ahead_on_axis() {
    for t in samples() {
        let pose = story_pose(t);
        assert!(approx(pose.camera_target.z, pose.camera_eye.z - 6.0));
        assert_eq!(pose.camera_target.x, 0.0);
        assert_eq!(pose.camera_target.y, 0.0);
    }
}

#[test]
fn start_of_story_pose() {
    let pose = story_pose(0.0);
    assert!(approx(pose.camera_eye.x, 0.0));
    assert!(approx(pose.camera_eye.y, 0.2));
    assert!(approx(pose.camera_eye.z, 6.0));
    assert!(approx(pose.camera_target.z, 0.0));
    assert_eq!(pose.centerpiece_yaw, 0.0);
    assert_eq!(pose.centerpiece_pitch, 0.0);
    assert_eq!(pose.stars_z, 0.0);
}

#[test]
fn end_of_story_pose() {
    let pose = story_pose(1.0);
    assert!(pose.camera_eye.x.abs() < 1e-5);
    assert!(approx(pose.camera_eye.y, 0.2));
    assert!(approx(pose.camera_eye.z, -14.0));
    assert!(approx(pose.camera_target.z, -20.0));
    assert!(approx(pose.centerpiece_yaw, 1.4 * PI));
    assert!(pose.centerpiece_pitch.abs() < 1e-5);
    assert!(approx(pose.stars_z, -8.0));
}

#[test]
fn centerpiece_pitch_peaks_mid_story() {
    assert!(approx(story_pose(0.5).centerpiece_pitch, 0.12));
    assert!(approx(story_pose(0.5).centerpiece_yaw, 0.7 * PI));
    assert!(approx(story_pose(0.5).stars_z, -4.0));
}

#[test]
fn story_is_deterministic() {
    for t in samples() {
        assert_eq!(story_pose(t), story_pose(t));
    }
}

#[test]
fn out_of_range_progress_is_clamped() {
    assert_eq!(story_pose(-0.5), story_pose(0.0));
    assert_eq!(story_pose(3.0), story_pose(1.0));
    assert_eq!(story_pose(f32::NAN), story_pose(0.0));
}

#[test]
fn scroll_progress_is_normalized() {
    assert_eq!(scroll_progress(0.0, 3000.0, 1000.0), 0.0);
    assert!(approx(scroll_progress(1000.0, 3000.0, 1000.0), 0.5));
    assert_eq!(scroll_progress(2000.0, 3000.0, 1000.0), 1.0);
}

#[test]
fn scroll_progress_clamps_overscroll() {
    for top in [-500.0, -1.0, 0.0, 10.0, 1999.0, 2000.0, 2001.0, 1e9] {
        let p = scroll_progress(top, 3000.0, 1000.0);
        assert!((0.0..=1.0).contains(&p), "progress {p} out of range for top={top}");
    }
    assert_eq!(scroll_progress(-40.0, 3000.0, 1000.0), 0.0);
    assert_eq!(scroll_progress(2500.0, 3000.0, 1000.0), 1.0);
}

#[test]
fn scroll_progress_is_zero_without_overflow() {
    for top in [0.0, 5.0, 100.0, -3.0] {
        assert_eq!(scroll_progress(top, 800.0, 800.0), 0.0);
        // content shorter than the viewport
        assert_eq!(scroll_progress(top, 600.0, 800.0), 0.0);
    }
}

#[test]
fn scroll_progress_ignores_non_finite_input() {
    assert_eq!(scroll_progress(f32::NAN, 3000.0, 1000.0), 0.0);
    assert_eq!(scroll_progress(f32::INFINITY, 3000.0, 1000.0), 0.0);
    assert_eq!(scroll_progress(10.0, f32::NAN, 1000.0), 0.0);
}

#[test]
fn clamp01_bounds() {
    assert_eq!(clamp01(-1.0), 0.0);
    assert_eq!(clamp01(0.25), 0.25);
    assert_eq!(clamp01(7.0), 1.0);
    assert_eq!(clamp01(f32::NAN), 0.0);
}
