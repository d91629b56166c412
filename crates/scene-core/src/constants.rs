use glam::Vec3;
use std::f32::consts::{PI, TAU};

// Timeline tuning shared by the scheduler and the web frontend.

// Scroll ranges (percent of scrollable height)
pub const INTRO_RANGE: (f32, f32) = (0.0, 40.0);
pub const ROTATION_RANGE: (f32, f32) = (40.0, 60.0);
pub const CAMERA_MOVE_RANGE: (f32, f32) = (60.0, 80.0);
pub const FINAL_SPIN_RANGE: (f32, f32) = (80.0, 100.0);

// Progress at/above which the idle spin kicks in
pub const IDLE_SPIN_THRESHOLD: f32 = 100.0;
pub const IDLE_SPIN_STEP: f32 = 0.01; // radians per tick on x and y
// Idle-spun angles are folded back by this many whole turns once they reach
// it. Past roughly 2^18 rad an f32 can no longer resolve IDLE_SPIN_STEP, so
// the angle only increases strictly between folds.
pub const IDLE_SPIN_WRAP: f32 = 1024.0 * TAU;

// Intro: both objects slide along z
pub const BOX_Z_START: f32 = -15.0;
pub const BOX_Z_END: f32 = 2.0;
pub const TORUS_Z_START: f32 = 10.0;
pub const TORUS_Z_END: f32 = -20.0;

// Rotation: box turns about z
pub const BOX_ROTATION_START: f32 = 1.0;
pub const BOX_ROTATION_END: f32 = PI;

// Final spin: two full turns on x and y, always measured from the initial rotation
pub const FINAL_SPIN_END: f32 = 4.0 * PI;

// Camera
pub const CAMERA_DEFAULT_EYE: Vec3 = Vec3::new(0.0, 1.0, 10.0);
pub const CAMERA_MOVE_EYE_END: Vec3 = Vec3::new(-15.0, -15.0, 25.0);
pub const CAMERA_FOVY_DEGREES: f32 = 75.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;

// Initial object placement (before the first tick)
pub const BOX_INITIAL_POSITION: Vec3 = Vec3::new(0.0, 0.0, BOX_Z_START);
pub const BOX_INITIAL_ROTATION: Vec3 = Vec3::new(
    BOX_ROTATION_START,
    BOX_ROTATION_START,
    BOX_ROTATION_START,
);
pub const TORUS_INITIAL_POSITION: Vec3 = Vec3::new(0.0, 0.0, TORUS_Z_START);
