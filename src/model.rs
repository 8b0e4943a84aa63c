//! Robot kinematics and the observable model state.
//!
//! The motion math is pure: [`advance`] maps (pose, target, dt) to the next
//! pose through a pluggable [`MotionModel`]. [`RobotModel`] owns the shared
//! pose/target state behind a lock and fans out change notifications, so the
//! periodic tick and the mouse handler can touch it from different call
//! paths without a reader ever seeing a half-written coordinate pair.

use crate::config;
use crate::types::{Point, Target};
use crate::watch::{Listener, ListenerSet};
use std::f64::consts::{PI, TAU};
use std::sync::Mutex;

/// The robot's position and heading. `direction` is in radians,
/// normalized to [0, 2π).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub x: f64,
    pub y: f64,
    pub direction: f64,
}

impl Pose {
    pub fn new(x: f64, y: f64, direction: f64) -> Self {
        Pose { x, y, direction }
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Velocity bounds supplied by the active motion model.
#[derive(Debug, Clone, Copy)]
pub struct Limits {
    pub max_velocity: f64,
    pub max_angular_velocity: f64,
}

/// Swappable kinematics strategy: a model supplies its velocity bounds and
/// integrates a clamped velocity command over one time step. Implementations
/// are statically linked; there is no runtime plugin loading.
pub trait MotionModel: Send + Sync {
    fn limits(&self) -> Limits;

    /// Integrates the pose one step. Must clamp `velocity` to
    /// `[0, max_velocity]` and `angular_velocity` to
    /// `[-max_angular_velocity, max_angular_velocity]`, and return a heading
    /// in [0, 2π). Never fails.
    fn integrate(&self, pose: Pose, velocity: f64, angular_velocity: f64, dt: f64) -> Pose;
}

/// Default model: constant-curvature arc integration with a straight-line
/// fallback when the angular velocity degenerates to zero.
pub struct ArcMotionModel {
    limits: Limits,
}

impl ArcMotionModel {
    pub fn new() -> Self {
        Self::with_limits(Limits {
            max_velocity: config::DEFAULT_MAX_VELOCITY,
            max_angular_velocity: config::DEFAULT_MAX_ANGULAR_VELOCITY,
        })
    }

    pub fn with_limits(limits: Limits) -> Self {
        ArcMotionModel { limits }
    }
}

impl Default for ArcMotionModel {
    fn default() -> Self {
        Self::new()
    }
}

impl MotionModel for ArcMotionModel {
    fn limits(&self) -> Limits {
        self.limits
    }

    fn integrate(&self, pose: Pose, velocity: f64, angular_velocity: f64, dt: f64) -> Pose {
        let velocity = velocity.clamp(0.0, self.limits.max_velocity);
        let angular_velocity = angular_velocity.clamp(
            -self.limits.max_angular_velocity,
            self.limits.max_angular_velocity,
        );

        let theta = pose.direction;
        // Closed-form arc: blows up for ω ≈ 0, detected per coordinate.
        let mut new_x =
            pose.x + velocity / angular_velocity * ((theta + angular_velocity * dt).sin() - theta.sin());
        if !new_x.is_finite() {
            new_x = pose.x + velocity * dt * theta.cos();
        }
        let mut new_y =
            pose.y - velocity / angular_velocity * ((theta + angular_velocity * dt).cos() - theta.cos());
        if !new_y.is_finite() {
            new_y = pose.y + velocity * dt * theta.sin();
        }

        Pose {
            x: new_x,
            y: new_y,
            direction: normalized_radians(theta + angular_velocity * dt),
        }
    }
}

/// Wraps an angle into [0, 2π).
pub fn normalized_radians(angle: f64) -> f64 {
    angle.rem_euclid(TAU)
}

/// One motion update: steer toward `target` and integrate over `dt`.
///
/// Inside the dead band the pose is returned unchanged, bit for bit.
/// Otherwise the command is full linear speed plus a bang-bang turn: spin at
/// +max angular velocity when the heading error (normalized to [0, 2π)) is
/// at most π, else at -max. At exactly π this is not the minimal-angle turn;
/// the behavior is kept deliberately and pinned by a test.
pub fn advance(pose: Pose, target: Target, model: &dyn MotionModel, dt: f64) -> Pose {
    if pose.position().distance_to(target.as_point()) < config::DEAD_BAND {
        return pose;
    }

    let limits = model.limits();
    let velocity = limits.max_velocity;
    let desired = normalized_radians((target.y as f64 - pose.y).atan2(target.x as f64 - pose.x));
    let error = normalized_radians(desired - pose.direction);
    let angular_velocity = if error <= PI {
        limits.max_angular_velocity
    } else {
        -limits.max_angular_velocity
    };

    model.integrate(pose, velocity, angular_velocity, dt)
}

struct ModelState {
    pose: Pose,
    prev_pose: Pose,
    target: Target,
}

/// Observable robot state: pose and target behind one lock, plus the
/// listener fan-out that drives repaints.
pub struct RobotModel {
    state: Mutex<ModelState>,
    motion: Box<dyn MotionModel>,
    listeners: ListenerSet,
}

impl RobotModel {
    pub fn new(motion: Box<dyn MotionModel>) -> Self {
        let pose = Pose::new(config::INITIAL_X, config::INITIAL_Y, 0.0);
        RobotModel {
            state: Mutex::new(ModelState {
                pose,
                prev_pose: pose,
                target: Target::new(config::INITIAL_TARGET_X, config::INITIAL_TARGET_Y),
            }),
            motion,
            listeners: ListenerSet::new(),
        }
    }

    pub fn pose(&self) -> Pose {
        self.state.lock().unwrap().pose
    }

    /// Pose before the latest tick. The renderer interpolates between this
    /// and [`pose`](Self::pose).
    pub fn prev_pose(&self) -> Pose {
        self.state.lock().unwrap().prev_pose
    }

    pub fn target(&self) -> Target {
        self.state.lock().unwrap().target
    }

    pub fn limits(&self) -> Limits {
        self.motion.limits()
    }

    /// Sets a new target and notifies subscribers.
    pub fn set_target(&self, x: i32, y: i32) {
        self.state.lock().unwrap().target = Target::new(x, y);
        self.listeners.notify();
    }

    /// Runs one motion update. Returns whether the pose changed; listeners
    /// are notified only on change, so inside the dead band nothing fires.
    pub fn tick(&self, dt: f64) -> bool {
        let moved;
        {
            let mut state = self.state.lock().unwrap();
            let next = advance(state.pose, state.target, self.motion.as_ref(), dt);
            moved = next != state.pose;
            state.prev_pose = state.pose;
            state.pose = next;
        }
        // Lock released before dispatch so listeners can read back freely.
        if moved {
            self.listeners.notify();
        }
        moved
    }

    pub fn subscribe(&self, listener: &Listener) {
        self.listeners.register(listener);
    }

    pub fn unsubscribe(&self, listener: &Listener) {
        self.listeners.unregister(listener);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn default_model() -> ArcMotionModel {
        ArcMotionModel::new()
    }

    #[test]
    fn test_dead_band_returns_pose_unchanged() {
        let model = default_model();
        // Distance 0.3, below the 0.5 dead band
        let pose = Pose::new(100.3, 100.0, 1.25);
        let next = advance(pose, Target::new(100, 100), &model, 10.0);
        assert_eq!(next, pose);
    }

    #[test]
    fn test_straight_ahead_moves_along_x() {
        let model = default_model();
        let pose = Pose::new(100.0, 100.0, 0.0);
        let next = advance(pose, Target::new(150, 100), &model, 10.0);

        // Full speed toward +x: about one unit per tick
        assert!(next.x > pose.x, "expected forward motion, got {:?}", next);
        assert_approx_eq!(next.x, 101.0, 1e-2);
        assert_approx_eq!(next.y, 100.0, 1e-2);
        // Bang-bang steering turns at +max even when already aligned
        assert!(next.direction < 0.05, "direction {}", next.direction);
    }

    #[test]
    fn test_turn_sign_follows_heading_error() {
        let model = default_model();
        let pose = Pose::new(100.0, 100.0, 0.0);

        // Target below (screen coordinates): error π/2, turn positive
        let down = advance(pose, Target::new(100, 150), &model, 10.0);
        assert_approx_eq!(down.direction, 0.01, 1e-9);

        // Target slightly above and ahead: error just under 2π, turn negative
        let up = advance(pose, Target::new(150, 99), &model, 10.0);
        assert_approx_eq!(up.direction, TAU - 0.01, 1e-9);
    }

    #[test]
    fn test_pi_boundary_turns_positive() {
        // Target exactly behind: heading error is exactly π, and the
        // `error <= π` rule picks the positive turn. Pinned on purpose.
        let model = default_model();
        let pose = Pose::new(100.0, 100.0, 0.0);
        let next = advance(pose, Target::new(50, 100), &model, 10.0);
        assert_approx_eq!(next.direction, 0.01, 1e-9);
    }

    #[test]
    fn test_heading_always_normalized() {
        let model = default_model();
        let mut pose = Pose::new(100.0, 100.0, 6.2);
        // Spiral around the target for a while; heading must stay in range
        for _ in 0..5000 {
            pose = advance(pose, Target::new(300, 40), &model, 10.0);
            assert!(
                (0.0..TAU).contains(&pose.direction),
                "direction {} escaped [0, 2π)",
                pose.direction
            );
        }
    }

    #[test]
    fn test_zero_angular_velocity_falls_back_to_straight_line() {
        let model = default_model();
        let pose = Pose::new(10.0, 20.0, 0.0);
        let next = model.integrate(pose, 0.1, 0.0, 10.0);
        assert_approx_eq!(next.x, 11.0);
        assert_approx_eq!(next.y, 20.0);
        assert_approx_eq!(next.direction, 0.0);

        // Same fallback with the heading off-axis
        let pose = Pose::new(10.0, 20.0, PI / 2.0);
        let next = model.integrate(pose, 0.1, 0.0, 10.0);
        assert_approx_eq!(next.x, 10.0, 1e-9);
        assert_approx_eq!(next.y, 21.0);
    }

    #[test]
    fn test_integrate_clamps_velocities() {
        let model = default_model();
        let pose = Pose::new(0.0, 0.0, 0.0);

        // Linear velocity over the limit behaves like the limit
        let fast = model.integrate(pose, 99.0, 0.0, 10.0);
        let capped = model.integrate(pose, 0.1, 0.0, 10.0);
        assert_approx_eq!(fast.x, capped.x);

        // Negative linear velocity clamps to zero: no motion
        let reverse = model.integrate(pose, -5.0, 0.0, 10.0);
        assert_approx_eq!(reverse.x, 0.0);
        assert_approx_eq!(reverse.y, 0.0);

        // Angular velocity clamps symmetrically
        let spun = model.integrate(pose, 0.0, 99.0, 10.0);
        assert_approx_eq!(spun.direction, config::DEFAULT_MAX_ANGULAR_VELOCITY * 10.0);
    }

    #[test]
    fn test_arc_integration_bends_the_path() {
        let model = default_model();
        let pose = Pose::new(0.0, 0.0, 0.0);
        let next = model.integrate(pose, 0.1, 0.001, 10.0);
        // x' = (v/ω)(sin(ωdt)) and y' = -(v/ω)(cos(ωdt) - 1)
        assert_approx_eq!(next.x, 100.0 * (0.01f64).sin(), 1e-12);
        assert_approx_eq!(next.y, -100.0 * ((0.01f64).cos() - 1.0), 1e-12);
        assert_approx_eq!(next.direction, 0.01);
    }

    #[test]
    fn test_normalized_radians() {
        assert_approx_eq!(normalized_radians(0.0), 0.0);
        assert_approx_eq!(normalized_radians(TAU), 0.0);
        assert_approx_eq!(normalized_radians(-0.5), TAU - 0.5);
        assert_approx_eq!(normalized_radians(3.0 * TAU + 1.0), 1.0);
    }

    #[test]
    fn test_model_notifies_on_change_only() {
        let model = RobotModel::new(Box::new(default_model()));
        let count = Arc::new(AtomicUsize::new(0));
        let listener: Listener = {
            let count = Arc::clone(&count);
            Arc::new(move || {
                count.fetch_add(1, Ordering::SeqCst);
            })
        };
        model.subscribe(&listener);

        model.set_target(300, 300);
        assert_eq!(count.load(Ordering::SeqCst), 1);

        assert!(model.tick(config::TICK_DURATION));
        assert_eq!(count.load(Ordering::SeqCst), 2);

        // Park the target on the robot: inside the dead band, no motion,
        // no notification.
        let pose = model.pose();
        model.set_target(pose.x.round() as i32, pose.y.round() as i32);
        let before = count.load(Ordering::SeqCst);
        assert!(!model.tick(config::TICK_DURATION));
        assert_eq!(count.load(Ordering::SeqCst), before);
    }

    #[test]
    fn test_prev_pose_tracks_last_tick() {
        let model = RobotModel::new(Box::new(default_model()));
        let start = model.pose();
        model.set_target(400, 100);
        model.tick(config::TICK_DURATION);
        assert_eq!(model.prev_pose(), start);
        assert!(model.pose().x > start.x);
    }
}
