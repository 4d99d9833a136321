// Kick geometry and ball flight for the penalty scene

use rand::Rng;

use super::aim::{AimVector, MAX_POWER};

// Virtual scene coordinates - the renderer scales these to the terminal
pub const VIRTUAL_WIDTH: f32 = 1200.0;
pub const VIRTUAL_HEIGHT: f32 = 600.0;

// Scene layout as fractions of the virtual field
const GOAL_WIDTH_FRACTION: f32 = 0.6;
const GOAL_HEIGHT_FRACTION: f32 = 0.3;
const GOAL_TOP_FRACTION: f32 = 0.15;
const PENALTY_SPOT_FRACTION: f32 = 0.75;

/// Speed in virtual units per frame for each point of power
pub const SPEED_PER_POWER: f32 = 0.3;
/// Below this distance origin and target are treated as coincident
const MIN_DISTANCE: f32 = 1e-3;

// Ball flight animation
const FLIGHT_GRAVITY: f32 = 0.1;
const FLIGHT_FRAMES: u32 = 60;

/// On-screen rectangle of the goal mouth
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoalFrame {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl GoalFrame {
    /// Goal placed on a scene of the given size
    pub fn for_scene(width: f32, height: f32) -> Self {
        let goal_width = width * GOAL_WIDTH_FRACTION;
        Self {
            left: (width - goal_width) / 2.0,
            top: height * GOAL_TOP_FRACTION,
            width: goal_width,
            height: height * GOAL_HEIGHT_FRACTION,
        }
    }

    /// Convert a normalized aim to absolute scene coordinates
    pub fn to_scene(&self, aim: &AimVector) -> (f32, f32) {
        let x = self.left + (aim.x + 1.0) / 2.0 * self.width;
        let y = self.top + aim.y * self.height;
        (x, y)
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.left && x <= self.left + self.width && y >= self.top && y <= self.top + self.height
    }
}

impl Default for GoalFrame {
    fn default() -> Self {
        Self::for_scene(VIRTUAL_WIDTH, VIRTUAL_HEIGHT)
    }
}

/// Where kicks are taken from on the default scene
pub fn penalty_spot() -> (f32, f32) {
    (VIRTUAL_WIDTH / 2.0, VIRTUAL_HEIGHT * PENALTY_SPOT_FRACTION)
}

/// Straight-line description of a kick, for animation only
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trajectory {
    pub start_x: f32,
    pub start_y: f32,
    pub vx: f32,
    pub vy: f32,
    pub target_x: f32,
    pub target_y: f32,
}

impl Trajectory {
    /// Superimpose a small sideways curve that grows with speed
    ///
    /// Purely cosmetic: outcomes are resolved before the ball is animated.
    pub fn with_curve(mut self, power: f32, rng: &mut (impl Rng + ?Sized)) -> Self {
        let power_factor = power.clamp(0.0, MAX_POWER) / 50.0;
        self.vx += (rng.gen::<f32>() - 0.5) * 0.2 * power_factor;
        self
    }
}

/// Convert aim + power into start, target and velocity
pub fn compute_trajectory(
    power: f32,
    aim: &AimVector,
    origin: (f32, f32),
    goal: &GoalFrame,
) -> Trajectory {
    let (target_x, target_y) = goal.to_scene(aim);
    let speed = power.clamp(0.0, MAX_POWER) * SPEED_PER_POWER;
    let (vx, vy) = directed_velocity(origin, (target_x, target_y), speed);

    Trajectory {
        start_x: origin.0,
        start_y: origin.1,
        vx,
        vy,
        target_x,
        target_y,
    }
}

/// Keeper dive from their stance toward a target point
pub fn keeper_dive(from: (f32, f32), to: (f32, f32), dive_speed: f32) -> Trajectory {
    let (vx, vy) = directed_velocity(from, to, dive_speed);
    Trajectory {
        start_x: from.0,
        start_y: from.1,
        vx,
        vy,
        target_x: to.0,
        target_y: to.1,
    }
}

fn directed_velocity(from: (f32, f32), to: (f32, f32), speed: f32) -> (f32, f32) {
    let dx = to.0 - from.0;
    let dy = to.1 - from.1;
    let distance = (dx * dx + dy * dy).sqrt().max(MIN_DISTANCE);
    (dx / distance * speed, dy / distance * speed)
}

/// Frame-stepped ball flight the renderer samples
#[derive(Debug, Clone, PartialEq)]
pub struct BallFlight {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub frame: u32,
    pub target: (f32, f32),
}

impl BallFlight {
    pub fn new(trajectory: &Trajectory) -> Self {
        Self {
            x: trajectory.start_x,
            y: trajectory.start_y,
            vx: trajectory.vx,
            vy: trajectory.vy,
            frame: 0,
            target: (trajectory.target_x, trajectory.target_y),
        }
    }

    /// Advance one frame. Returns false once the flight has finished.
    pub fn step(&mut self) -> bool {
        if self.is_finished() {
            return false;
        }

        // Stop short of the goal line, the target is where it crosses it
        let remaining = ((self.target.0 - self.x).powi(2) + (self.target.1 - self.y).powi(2)).sqrt();
        let speed = (self.vx * self.vx + self.vy * self.vy).sqrt();
        if remaining <= speed {
            self.x = self.target.0;
            self.y = self.target.1;
            self.vx = 0.0;
            self.vy = 0.0;
        } else {
            self.x += self.vx;
            self.y += self.vy;
            self.vy += FLIGHT_GRAVITY;
        }

        self.frame += 1;
        !self.is_finished()
    }

    pub fn is_finished(&self) -> bool {
        self.frame >= FLIGHT_FRAMES
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_center_aim_maps_to_goal_center() {
        let goal = GoalFrame::default();
        let (x, y) = goal.to_scene(&AimVector::CENTER);
        assert!((x - VIRTUAL_WIDTH / 2.0).abs() < 1e-3);
        assert!((y - (goal.top + goal.height / 2.0)).abs() < 1e-3);
    }

    #[test]
    fn test_corners_map_to_goal_corners() {
        let goal = GoalFrame::default();
        let (x, y) = goal.to_scene(&AimVector::new(-1.0, 0.0));
        assert_eq!((x, y), (goal.left, goal.top));

        let (x, y) = goal.to_scene(&AimVector::new(1.0, 1.0));
        assert!((x - (goal.left + goal.width)).abs() < 1e-3);
        assert!((y - (goal.top + goal.height)).abs() < 1e-3);
    }

    #[test]
    fn test_speed_proportional_to_power() {
        let goal = GoalFrame::default();
        let aim = AimVector::new(0.5, 0.3);
        let slow = compute_trajectory(20.0, &aim, penalty_spot(), &goal);
        let fast = compute_trajectory(80.0, &aim, penalty_spot(), &goal);

        let speed = |t: &Trajectory| (t.vx * t.vx + t.vy * t.vy).sqrt();
        assert!((speed(&slow) - 20.0 * SPEED_PER_POWER).abs() < 1e-3);
        assert!((speed(&fast) / speed(&slow) - 4.0).abs() < 1e-3);
    }

    #[test]
    fn test_power_is_clamped() {
        let goal = GoalFrame::default();
        let t = compute_trajectory(250.0, &AimVector::CENTER, penalty_spot(), &goal);
        let speed = (t.vx * t.vx + t.vy * t.vy).sqrt();
        assert!((speed - MAX_POWER * SPEED_PER_POWER).abs() < 1e-3);
    }

    #[test]
    fn test_degenerate_origin_has_finite_velocity() {
        let goal = GoalFrame::default();
        let origin = goal.to_scene(&AimVector::CENTER);
        let t = compute_trajectory(60.0, &AimVector::CENTER, origin, &goal);
        assert!(t.vx.is_finite() && t.vy.is_finite());
        assert_eq!((t.vx, t.vy), (0.0, 0.0));
    }

    #[test]
    fn test_curve_only_touches_vx() {
        let goal = GoalFrame::default();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let straight = compute_trajectory(60.0, &AimVector::CENTER, penalty_spot(), &goal);
        let curved = straight.with_curve(60.0, &mut rng);
        assert_eq!(curved.vy, straight.vy);
        assert_eq!(curved.target_x, straight.target_x);
        assert!((curved.vx - straight.vx).abs() <= 0.1 * 60.0 / 50.0);
    }

    #[test]
    fn test_flight_reaches_target_and_finishes() {
        let goal = GoalFrame::default();
        let t = compute_trajectory(100.0, &AimVector::new(-0.5, 0.5), penalty_spot(), &goal);
        let mut flight = BallFlight::new(&t);
        let mut frames = 0;
        while flight.step() {
            frames += 1;
        }
        assert_eq!(frames + 1, FLIGHT_FRAMES);
        assert!(flight.is_finished());
        assert!(!flight.step());
    }

    #[test]
    fn test_keeper_dive_direction() {
        let dive = keeper_dive((600.0, 150.0), (400.0, 150.0), 10.0);
        assert!((dive.vx + 10.0).abs() < 1e-4);
        assert!(dive.vy.abs() < 1e-4);
    }
}
