use glam::Vec3;

// Shared animation/layout tuning constants used by the core and the web frontend.

// Tree layout
pub const TREE_ORIGIN: [f32; 3] = [0.0, -2.0, 0.0]; // world-space position of the tree group
pub const TREE_HEIGHT: f32 = 14.0; // foliage/ornament cone height
pub const TREE_BASE_RADIUS: f32 = 5.0; // foliage/ornament cone radius at the base
pub const CONE_JITTER: f32 = 0.5; // full spread of the radial jitter on cone points

// Foliage field
pub const FOLIAGE_COUNT: usize = 12_000;
pub const FOLIAGE_CHAOS_RADIUS: f32 = 15.0;
pub const FOLIAGE_HEIGHT_BIAS: f32 = 0.8; // exponent applied to the uniform height sample
pub const FOLIAGE_DRIFT_AMPLITUDE: f32 = 0.15;
pub const FOLIAGE_DRIFT_FREQUENCY: f32 = 0.8;
pub const FOLIAGE_ACCENT_THRESHOLD: f32 = 0.92; // choice above this -> accent (8%)
pub const FOLIAGE_SECONDARY_THRESHOLD: f32 = 0.4; // choice above this -> secondary (52%)

// Foliage palette
pub const FOLIAGE_PRIMARY: [f32; 3] = [0.05, 0.42, 0.18]; // deep green
pub const FOLIAGE_SECONDARY: [f32; 3] = [0.16, 0.62, 0.30]; // bright green
pub const FOLIAGE_ACCENT: [f32; 3] = [1.0, 0.84, 0.35]; // gold

// Ornament batches
pub const ORNAMENT_CHAOS_RADIUS: f32 = 20.0;
pub const ORNAMENT_HEIGHT_BIAS: f32 = 1.8; // steeper than foliage, favors the base
pub const ORNAMENT_SPEED_MIN: f32 = 1.0;
pub const ORNAMENT_SPEED_MAX: f32 = 3.0;
pub const ORNAMENT_SPIN_FACTOR: f32 = 0.1; // yaw = elapsed * factor * speed
pub const ORNAMENT_TWINKLE_AMPLITUDE: f32 = 0.2;
pub const ORNAMENT_TWINKLE_FREQUENCY: f32 = 5.0;
pub const ORNAMENT_MAX_PER_BATCH: usize = 150;
pub const BOX_SURFACE_OFFSET: f32 = 0.5;
pub const BALL_SURFACE_OFFSET: f32 = 0.3;
pub const LIGHT_SURFACE_OFFSET: f32 = 0.6;
pub const DEFAULT_BOX_COUNT: usize = 60;
pub const DEFAULT_BALL_COUNT: usize = 150;
pub const DEFAULT_LIGHT_COUNT: usize = 120;

// Chaotic swarm
pub const SWARM_COUNT: usize = 60;
pub const SWARM_MAX_COUNT: usize = 1024;
pub const SWARM_RADIUS_MIN: f32 = 0.8;
pub const SWARM_RADIUS_MAX: f32 = 2.5;
pub const SWARM_SPEED_MIN: f32 = 0.5;
pub const SWARM_SPEED_MAX: f32 = 1.5;
pub const SWARM_FREQUENCY_MIN: f32 = 1.0;
pub const SWARM_FREQUENCY_MAX: f32 = 2.0;
pub const SWARM_COLORS: [[f32; 3]; 3] = [
    [1.0, 0.85, 0.4], // warm gold
    [1.0, 0.55, 0.3], // amber
    [0.9, 0.95, 1.0], // ice white
];

// Star centerpiece
pub const STAR_TRANSITION_SECS: f32 = 1.5; // linear progress rate is 1 / this
pub const STAR_EMISSIVE_GAIN: f32 = 2.0;
pub const STAR_SCALE_DISPERSED: f32 = 1.5; // scale when fully dissipated
pub const STAR_SCALE_SHRINK: f32 = 0.5; // removed from the dispersed scale as it forms
pub const STAR_SPIN_RATE: f32 = 0.5; // rad/s
pub const STAR_BOB_AMPLITUDE: f32 = 0.05;
pub const STAR_BOB_FREQUENCY: f32 = 1.0; // rad/s
pub const STAR_LIGHT_INTENSITY: f32 = 3.0; // point light at full raw progress
pub const STAR_HEIGHT_OFFSET: f32 = 0.6; // above the apex, in tree-local space

// Shared visibility cutoff for fading elements
pub const VISIBILITY_EPSILON: f32 = 0.01;

// Photo placement
pub const SPIRAL_LOOPS: f32 = 4.0;
pub const SPIRAL_OUTWARD_OFFSET: f32 = 1.5; // keeps frames clear of the foliage surface
pub const PHOTO_SPIRAL_HEIGHT: f32 = 12.0;
pub const PHOTO_SPIRAL_RADIUS: f32 = 5.5;
pub const PHOTO_CHAOS_RADIUS: f32 = 12.0;

// Photo frame geometry (frame width is the unit; height varies with aspect)
pub const FRAME_WIDTH: f32 = 1.0;
pub const DEFAULT_FRAME_HEIGHT: f32 = 1.25;
pub const FRAME_BORDER: f32 = 0.2; // margin added around the photo when fitting to view

// Focused pose
pub const FOCUS_DISTANCE: f32 = 5.0; // in front of the camera
pub const FOCUS_FIT_MARGIN: f32 = 0.85; // fraction of the view the focused frame may fill

// Motion rates (per second)
pub const ASSEMBLY_RATE: f32 = 2.5; // foliage progress damping
pub const REST_RATE: f32 = 2.5; // resting pose smoothing
pub const CLEAR_RATE: f32 = 3.0; // clearing visibility damping
pub const FLIP_RATE: f32 = 2.0;
pub const FOCUS_RATE: f32 = 1.5; // linear focus progress
pub const CLEAR_COMPLETE_EPSILON: f32 = 0.05; // reached ~1 s into a clear at CLEAR_RATE

// Interaction timing
pub const CLICK_BLUR_DELAY_SECS: f64 = 0.25;
pub const MAX_FRAME_DT: f32 = 0.1; // clamp for long frames (backgrounded tab)

#[inline]
pub fn tree_origin_vec3() -> Vec3 {
    Vec3::from(TREE_ORIGIN)
}
