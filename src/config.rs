//! Configuration constants for the robot simulation.

// Window layout
pub const WINDOW_WIDTH: i32 = 800;
pub const WINDOW_HEIGHT: i32 = 500;
pub const UI_PANEL_WIDTH: i32 = 260; // Width of the side panel
pub const ARENA_WIDTH: i32 = WINDOW_WIDTH - UI_PANEL_WIDTH; // Width for the arena rendering
pub const ARENA_HEIGHT: i32 = WINDOW_HEIGHT; // Arena uses full height

// Simulation timing
pub const TICK_SECONDS: f32 = 0.01; // Fixed simulation step, 10 ms per tick
pub const TICK_DURATION: f64 = 10.0; // Model time units integrated per tick

// Default kinematic limits
pub const DEFAULT_MAX_VELOCITY: f64 = 0.1;
pub const DEFAULT_MAX_ANGULAR_VELOCITY: f64 = 0.001;

// Distance below which the robot stops correcting toward the target
pub const DEAD_BAND: f64 = 0.5;

// Initial model state
pub const INITIAL_X: f64 = 100.0;
pub const INITIAL_Y: f64 = 100.0;
pub const INITIAL_TARGET_X: i32 = 150;
pub const INITIAL_TARGET_Y: i32 = 100;

// Journal (in-window log)
pub const JOURNAL_CAPACITY: usize = 100;

// Robot rendering, pixel sizes
pub const ROBOT_BODY_WIDTH: f32 = 30.0;
pub const ROBOT_BODY_HEIGHT: f32 = 10.0;
pub const ROBOT_EYE_OFFSET: f32 = 10.0;
pub const ROBOT_EYE_DIAMETER: f32 = 5.0;
pub const TARGET_DIAMETER: f32 = 5.0;
