use glam::Vec3;

// Shared camera/interaction/render tuning constants used by the web frontend.

// Orbit camera
pub const CAMERA_DISTANCE: f32 = 24.0; // orbit radius around the tree origin
pub const CAMERA_PITCH: f32 = 0.12; // initial elevation (radians)
pub const CAMERA_PITCH_LIMIT: f32 = 1.2; // clamp for drag-orbit elevation
pub const CAMERA_FOVY: f32 = std::f32::consts::FRAC_PI_4;
pub const CAMERA_LOOK_OFFSET: Vec3 = Vec3::new(0.0, 1.0, 0.0); // look slightly above the origin
pub const AUTO_ROTATE_SPEED: f32 = 0.12; // rad/s while nothing is focused
pub const DRAG_RADIANS_PER_PX: f32 = 0.005;

// Press-and-hold gesture
pub const HOLD_TO_TOGGLE_SECS: f64 = 0.6; // press this long without moving to toggle
pub const PRESS_MOVE_TOLERANCE_PX: f32 = 8.0; // beyond this a press becomes an orbit drag

// Instance sizing (world units)
pub const FOLIAGE_POINT_SIZE: f32 = 0.07;
pub const BOX_SIZE: f32 = 0.36;
pub const BALL_SIZE: f32 = 0.30;
pub const LIGHT_SIZE: f32 = 0.14;
pub const SWARM_POINT_SIZE: f32 = 0.09;
pub const STAR_CORE_SIZE: f32 = 0.9;
pub const STAR_HALO_SIZE: f32 = 2.2;

// Ornament palette
pub const BOX_COLOR: [f32; 4] = [0.75, 0.08, 0.12, 1.0];
pub const BALL_COLOR: [f32; 4] = [0.95, 0.75, 0.25, 1.0];
pub const LIGHT_COLOR: [f32; 4] = [1.0, 0.95, 0.7, 1.0];
pub const STAR_COLOR: [f32; 3] = [1.0, 0.85, 0.35];

// Photo frame faces (textures are bound by the environment; these are the tints)
pub const FRAME_FRONT_COLOR: [f32; 4] = [0.96, 0.94, 0.9, 1.0];
pub const FRAME_BACK_COLOR: [f32; 4] = [0.55, 0.12, 0.14, 1.0];

// Canvas
pub const MAX_DEVICE_PIXEL_RATIO: f64 = 2.0;

// Background
pub const CLEAR_COLOR: [f64; 3] = [0.01, 0.02, 0.05];
pub const CLEAR_COLOR_FOCUSED: [f64; 3] = [0.004, 0.008, 0.02]; // dimmed while a frame is focused
