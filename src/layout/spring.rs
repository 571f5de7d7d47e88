//! Damped spring interpolation.
//!
//! Force model: `F = -k·(x - target) - c·v`, `a = F / m`, integrated with
//! semi-implicit Euler in fixed sub-steps so a long frame cannot blow the
//! spring up. Retargeting mid-flight keeps position and velocity, which is
//! what makes overlapping transitions blend instead of jump.
//!
//! ```ignore
//! let mut s = Spring::new(0.0, SpringConfig::default());
//! s.set_target(50.0);
//! s.tick(1.0 / 60.0);   // every frame
//! let v = s.get();
//! ```

/// Longest step the integrator takes in one go, seconds.
const MAX_SUBSTEP: f32 = 1.0 / 120.0;
/// Frames longer than this (tab in background, debugger) are clamped.
const MAX_FRAME: f32 = 0.1;
const REST_DELTA: f32 = 1e-3;
const REST_SPEED: f32 = 1e-2;

#[derive(Debug, Clone, Copy, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct SpringConfig {
    pub stiffness: f32,
    /// Absolute damping coefficient (not a ratio).
    pub damping: f32,
    pub mass: f32,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            stiffness: 40.0,
            damping: 15.0,
            mass: 1.0,
        }
    }
}

impl SpringConfig {
    /// `damping / (2·√(k·m))`. 1.0 is critical, above is overdamped.
    pub fn damping_ratio(&self) -> f32 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }
}

/// Animated scalar.
#[derive(Debug, Clone, PartialEq)]
pub struct Spring {
    current: f32,
    target: f32,
    velocity: f32,
    config: SpringConfig,
}

impl Spring {
    pub fn new(initial: f32, config: SpringConfig) -> Self {
        Self {
            current: initial,
            target: initial,
            velocity: 0.0,
            config,
        }
    }

    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn get(&self) -> f32 {
        self.current
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    /// Jump to `value` with no animation.
    pub fn set_immediate(&mut self, value: f32) {
        self.current = value;
        self.target = value;
        self.velocity = 0.0;
    }

    pub fn is_animating(&self) -> bool {
        (self.current - self.target).abs() > REST_DELTA || self.velocity.abs() > REST_SPEED
    }

    pub fn tick(&mut self, dt: f32) {
        if !self.is_animating() {
            self.current = self.target;
            self.velocity = 0.0;
            return;
        }
        let mut remaining = dt.clamp(0.0, MAX_FRAME);
        let inv_mass = 1.0 / self.config.mass.max(f32::EPSILON);
        while remaining > 0.0 {
            let h = remaining.min(MAX_SUBSTEP);
            let force = -self.config.stiffness * (self.current - self.target)
                - self.config.damping * self.velocity;
            self.velocity += force * inv_mass * h;
            self.current += self.velocity * h;
            remaining -= h;
        }
        if !self.is_animating() {
            self.current = self.target;
            self.velocity = 0.0;
        }
    }
}

/// Three springs driven together, e.g. a layout target's top, left and
/// scale.
#[derive(Debug, Clone, PartialEq)]
pub struct SpringVec3 {
    axes: [Spring; 3],
}

impl SpringVec3 {
    pub fn new(initial: [f32; 3], config: SpringConfig) -> Self {
        Self {
            axes: initial.map(|v| Spring::new(v, config)),
        }
    }

    pub fn set_target(&mut self, target: [f32; 3]) {
        for (axis, t) in self.axes.iter_mut().zip(target) {
            axis.set_target(t);
        }
    }

    pub fn get(&self) -> [f32; 3] {
        [self.axes[0].get(), self.axes[1].get(), self.axes[2].get()]
    }

    pub fn is_animating(&self) -> bool {
        self.axes.iter().any(Spring::is_animating)
    }

    pub fn tick(&mut self, dt: f32) {
        for axis in &mut self.axes {
            axis.tick(dt);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(s: &mut Spring, seconds: f32) {
        let frames = (seconds * 60.0) as usize;
        for _ in 0..frames {
            s.tick(1.0 / 60.0);
        }
    }

    #[test]
    fn default_is_slightly_overdamped() {
        let r = SpringConfig::default().damping_ratio();
        assert!(r > 1.0 && r < 1.3, "ratio {r}");
    }

    #[test]
    fn converges_to_target() {
        let mut s = Spring::new(0.0, SpringConfig::default());
        s.set_target(60.0);
        run(&mut s, 6.0);
        assert_eq!(s.get(), 60.0);
        assert!(!s.is_animating());
    }

    #[test]
    fn moves_gradually() {
        let mut s = Spring::new(0.0, SpringConfig::default());
        s.set_target(10.0);
        s.tick(1.0 / 60.0);
        assert!(s.get() > 0.0 && s.get() < 1.0, "first frame {}", s.get());
    }

    #[test]
    fn no_overshoot_with_default_config() {
        let mut s = Spring::new(0.0, SpringConfig::default());
        s.set_target(1.0);
        for _ in 0..600 {
            s.tick(1.0 / 60.0);
            assert!(s.get() <= 1.0 + 1e-4);
        }
    }

    #[test]
    fn retarget_keeps_velocity() {
        let mut s = Spring::new(0.0, SpringConfig::default());
        s.set_target(10.0);
        run(&mut s, 0.2);
        let v = s.velocity();
        assert!(v > 0.0);
        s.set_target(-10.0);
        assert_eq!(s.velocity(), v);
        run(&mut s, 8.0);
        assert_eq!(s.get(), -10.0);
    }

    #[test]
    fn huge_frame_is_clamped() {
        let mut s = Spring::new(0.0, SpringConfig::default());
        s.set_target(1.0);
        s.tick(30.0);
        assert!(s.get().is_finite());
        assert!(s.get() < 1.0);
    }

    #[test]
    fn vec3_axes_settle_independently() {
        let mut v = SpringVec3::new([0.0, 50.0, 1.0], SpringConfig::default());
        v.set_target([20.0, 50.0, 1.7]);
        v.tick(1.0 / 60.0);
        let [top, left, _] = v.get();
        assert!(top > 0.0);
        assert_eq!(left, 50.0);
        for _ in 0..600 {
            v.tick(1.0 / 60.0);
        }
        assert_eq!(v.get(), [20.0, 50.0, 1.7]);
        assert!(!v.is_animating());
    }

    #[test]
    fn set_immediate_stops() {
        let mut s = Spring::new(0.0, SpringConfig::default());
        s.set_target(5.0);
        s.tick(0.1);
        s.set_immediate(2.0);
        assert_eq!(s.get(), 2.0);
        assert!(!s.is_animating());
    }
}
