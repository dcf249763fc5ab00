/// Scene, story and interaction tuning constants.
///
/// Everything the presentation hard-codes lives here so the pure modules
/// (story, scene, controller) and the web glue agree on the same numbers.
// DOM element ids
pub const CANVAS_ID: &str = "webgl";
pub const YEAR_ID: &str = "year";
pub const GATE_ID: &str = "gate";
pub const START_BUTTON_ID: &str = "startBtn";
pub const SOUND_BUTTON_ID: &str = "soundBtn";
pub const SCROLL_ID: &str = "scroll";
pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

// Renderer
pub const MAX_PIXEL_RATIO: f64 = 2.0;
pub const MSAA_SAMPLES: u32 = 4;

// Camera
pub const CAMERA_FOV_DEG: f32 = 45.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 200.0;
pub const CAMERA_START: [f32; 3] = [0.0, 0.2, 6.0];

// Lights
pub const AMBIENT_INTENSITY: f32 = 0.7;
pub const DIRECTIONAL_INTENSITY: f32 = 1.1;
pub const DIRECTIONAL_POSITION: [f32; 3] = [5.0, 6.0, 4.0];
pub const LIGHT_COLOR: [f32; 3] = [1.0, 1.0, 1.0];

// Starfield: x in [-30, 30), y in [-20, 20), z in (-80, 0]
pub const STAR_COUNT: usize = 1600;
pub const STAR_SPAN_X: f32 = 60.0;
pub const STAR_SPAN_Y: f32 = 40.0;
pub const STAR_DEPTH: f32 = 80.0;
pub const STAR_SIZE: f32 = 0.05;
pub const STAR_OPACITY: f32 = 0.9;

// Torus knot centerpiece
pub const KNOT_RADIUS: f32 = 0.8;
pub const KNOT_TUBE: f32 = 0.22;
pub const KNOT_TUBULAR_SEGMENTS: u32 = 180;
pub const KNOT_RADIAL_SEGMENTS: u32 = 18;
pub const KNOT_P: u32 = 2;
pub const KNOT_Q: u32 = 3;
pub const KNOT_METALNESS: f32 = 0.6;
pub const KNOT_ROUGHNESS: f32 = 0.35;

// Glass panels
pub const PANEL_SIZE: [f32; 3] = [1.6, 1.0, 0.02];
pub const PANEL_OPACITY: f32 = 0.18;
pub const PANEL_METALNESS: f32 = 0.2;
pub const PANEL_ROUGHNESS: f32 = 0.05;
/// Rest position (x, y, z) of each panel.
pub const PANEL_POSITIONS: [[f32; 3]; 3] = [
    [-2.2, 0.7, -2.5],
    [2.2, -0.2, -8.0],
    [-2.2, 0.2, -14.0],
];
/// Bobbing (angular frequency, phase) of each panel.
pub const PANEL_BOB: [[f32; 2]; 3] = [[0.7, 0.0], [0.8, 1.2], [0.9, 2.0]];
pub const PANEL_BOB_AMPLITUDE: f32 = 0.08;

// Idle spin of the knot (radians per second)
pub const KNOT_SPIN_X: f32 = 0.2;
pub const KNOT_SPIN_Z: f32 = 0.16;

// Story path
pub const STORY_Z_START: f32 = 6.0;
pub const STORY_Z_TRAVEL: f32 = 20.0;
pub const STORY_SWAY_X: f32 = 0.9;
pub const STORY_BASE_Y: f32 = 0.2;
pub const STORY_HUMP_Y: f32 = 0.25;
pub const STORY_LOOK_AHEAD: f32 = 6.0;
pub const STORY_YAW_TURNS: f32 = 1.4; // in units of PI
pub const STORY_PITCH: f32 = 0.12;
pub const STORY_STAR_PARALLAX: f32 = 8.0;

// Feedback cue
pub const CUE_FREQUENCY_HZ: f32 = 220.0;
pub const CUE_GAIN: f32 = 0.03;
pub const CUE_DURATION_SEC: f64 = 0.08;

// Start gate
pub const GATE_REMOVE_DELAY_MS: i32 = 450;

// Sound toggle labels
pub const SOUND_LABEL_ON: &str = "SOUND: ON";
pub const SOUND_LABEL_OFF: &str = "SOUND: OFF";
