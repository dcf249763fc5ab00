use crate::constants::*;
use glam::Vec3;
use std::f32::consts::PI;

/// Everything the scroll position decides for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StoryPose {
    pub camera_eye: Vec3,
    pub camera_target: Vec3,
    /// Rotation of the centerpiece group about Y.
    pub centerpiece_yaw: f32,
    /// Rotation of the centerpiece group about X.
    pub centerpiece_pitch: f32,
    /// Z offset of the whole starfield.
    pub stars_z: f32,
}

#[inline]
pub fn clamp01(n: f32) -> f32 {
    if n.is_nan() {
        return 0.0;
    }
    n.clamp(0.0, 1.0)
}

/// Normalized scroll progress of a scroll container.
///
/// Returns 0 when there is nothing to scroll (`scroll_height <= client_height`)
/// and clamps overscroll into \[0, 1\].
#[inline]
pub fn scroll_progress(scroll_top: f32, scroll_height: f32, client_height: f32) -> f32 {
    let max = scroll_height - client_height;
    if !(max > 0.0) || !scroll_top.is_finite() {
        return 0.0;
    }
    clamp01(scroll_top / max)
}

/// Map scroll progress `t` to the camera path and object transforms.
///
/// The camera flies from z=6 to z=-14 while swaying twice side to side and
/// rising over a half-sine hump, always looking 6 units ahead along -Z.
pub fn story_pose(t: f32) -> StoryPose {
    let t = clamp01(t);
    let z = STORY_Z_START - t * STORY_Z_TRAVEL;
    let x = (t * PI * 2.0).sin() * STORY_SWAY_X;
    let y = STORY_BASE_Y + (t * PI).sin() * STORY_HUMP_Y;
    StoryPose {
        camera_eye: Vec3::new(x, y, z),
        camera_target: Vec3::new(0.0, 0.0, z - STORY_LOOK_AHEAD),
        centerpiece_yaw: t * PI * STORY_YAW_TURNS,
        centerpiece_pitch: (t * PI).sin() * STORY_PITCH,
        stars_z: -t * STORY_STAR_PARALLAX,
    }
}
