//! Kinodynamic steering: minimum-time bang-bang trajectories under
//! per-axis acceleration and velocity bounds.
//!
//! Each axis moves through up to three phases: constant acceleration `a1`,
//! optional constant-velocity cruise at the signed limit, constant
//! acceleration `-a1`. The per-axis solver computes the minimum-duration
//! phase layout; the fixed-duration variant re-solves an axis for a given
//! total time so that all axes of a configuration finish together.
//!
//! Configurations are laid out as `dof` positions followed by (at least)
//! `dof` velocities in the extra degrees of freedom.

use log::debug;

use crate::config::KinodynamicConfig;
use crate::core::Configuration;
use crate::error::{PlanError, Result};
use crate::path::{DirectPath, Path};

use super::SteeringMethod;

#[inline]
fn sgn(x: f64) -> i32 {
    if x > 0.0 {
        1
    } else if x < 0.0 {
        -1
    } else {
        0
    }
}

/// Square root of a quadratic discriminant.
///
/// Discriminants can land slightly below zero near degenerate inputs;
/// those are clamped to zero. A discriminant negative beyond rounding
/// noise is a genuine failure.
fn discriminant_sqrt(delta: f64, scale: f64) -> Result<f64> {
    if delta < 0.0 {
        if delta < -1e-9 * (1.0 + scale.abs()) {
            return Err(PlanError::NumericalFailure(format!(
                "negative discriminant {}",
                delta
            )));
        }
        return Ok(0.0);
    }
    Ok(delta.sqrt())
}

/// Phase layout of one axis of a bang-bang trajectory.
///
/// Durations `t1`, `tv`, `t2` are the acceleration, cruise and braking
/// phases; `a1` is the first-phase acceleration (the last phase uses
/// `-a1`). `p1`, `v1` are the boundary state the profile starts from.
#[derive(Clone, Copy, Debug)]
pub struct AxisProfile {
    pub p1: f64,
    pub v1: f64,
    pub a1: f64,
    pub t1: f64,
    pub tv: f64,
    pub t2: f64,
}

impl AxisProfile {
    fn stationary(p1: f64, v1: f64, tv: f64) -> Self {
        Self {
            p1,
            v1,
            a1: 0.0,
            t1: 0.0,
            tv,
            t2: 0.0,
        }
    }

    /// Sign of the first-phase acceleration.
    pub fn sigma(&self) -> i32 {
        sgn(self.a1)
    }

    /// Total duration `t1 + tv + t2`.
    pub fn total(&self) -> f64 {
        self.t1 + self.tv + self.t2
    }

    /// Position at time `t`, clamped to the profile duration.
    pub fn position(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, self.total());
        if t <= self.t1 {
            return self.p1 + self.v1 * t + 0.5 * self.a1 * t * t;
        }
        // State at the end of the first phase
        let p_ramp = self.p1 + self.v1 * self.t1 + 0.5 * self.a1 * self.t1 * self.t1;
        let v_peak = self.v1 + self.a1 * self.t1;
        if t <= self.t1 + self.tv {
            return p_ramp + v_peak * (t - self.t1);
        }
        let p_cruise = p_ramp + v_peak * self.tv;
        let dt = t - self.t1 - self.tv;
        p_cruise + v_peak * dt - 0.5 * self.a1 * dt * dt
    }

    /// Velocity at time `t`, clamped to the profile duration.
    pub fn velocity(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, self.total());
        if t <= self.t1 {
            return self.v1 + self.a1 * t;
        }
        let v_peak = self.v1 + self.a1 * self.t1;
        if t <= self.t1 + self.tv {
            return v_peak;
        }
        v_peak - self.a1 * (t - self.t1 - self.tv)
    }

    /// The time-reversed profile: phases swap, acceleration flips sign,
    /// and the start state becomes the (negated-velocity) end state.
    fn reversed(&self) -> Self {
        let total = self.total();
        Self {
            p1: self.position(total),
            v1: -self.velocity(total),
            a1: -self.a1,
            t1: self.t2,
            tv: self.tv,
            t2: self.t1,
        }
    }
}

/// Minimum-time bang-bang steering under acceleration and velocity limits.
#[derive(Clone, Debug)]
pub struct KinodynamicSteering {
    dof: usize,
    config_size: usize,
    a_max: f64,
    v_max: f64,
}

impl KinodynamicSteering {
    /// Create a steering method for configurations of `config_size` values
    /// of which the trailing `extra_dim` are velocity DOFs.
    ///
    /// Fails unless every position axis has a velocity slot, i.e.
    /// `2 * extra_dim >= config_size`.
    pub fn new(config_size: usize, extra_dim: usize, limits: &KinodynamicConfig) -> Result<Self> {
        if 2 * extra_dim < config_size {
            return Err(PlanError::Config(format!(
                "kinodynamic steering needs at least {} extra DOFs, got {}",
                config_size - extra_dim,
                extra_dim
            )));
        }
        if !(limits.a_max > 0.0) || !(limits.v_max > 0.0) {
            return Err(PlanError::Config(format!(
                "kinodynamic limits must be positive (a_max {}, v_max {})",
                limits.a_max, limits.v_max
            )));
        }
        Ok(Self {
            dof: config_size - extra_dim,
            config_size,
            a_max: limits.a_max,
            v_max: limits.v_max,
        })
    }

    pub fn dof(&self) -> usize {
        self.dof
    }

    /// Minimum-duration phase layout for one axis from `(p1, v1)` to
    /// `(p2, v2)`.
    pub fn compute_min_time(&self, p1: f64, v1: f64, p2: f64, v2: f64) -> Result<AxisProfile> {
        if p1 == p2 && v1 == v2 {
            return Ok(AxisProfile::stationary(p1, v1, 0.0));
        }

        // Sign of the first-phase acceleration: compare the required
        // displacement against the displacement of a pure velocity switch.
        let delta_p_acc = 0.5 * (v1 - v2) * ((v2 - v1).abs() / self.a_max);
        let mut sigma = sgn(p2 - p1 - delta_p_acc);
        if sigma == 0 {
            // Displacement exactly covered by the switch: pure deceleration.
            sigma = sgn(v1 - v2);
        }
        let a1 = f64::from(sigma) * self.a_max;
        let a2 = -a1;
        let v_lim = f64::from(sigma) * self.v_max;

        // Two-segment attempt (no cruise): larger root of
        // a1*t1^2 + 2*v1*t1 - ((v2^2 - v1^2)/(2*a2) + (p2 - p1)) = 0.
        // The root is valid from min_t1 up: below it the braking phase
        // would need negative duration (t2 = (v2 - v1)/a2 + t1).
        let min_t1 = ((v2 - v1) / a1).max(0.0);
        let delta = 4.0 * v1 * v1 - 4.0 * a1 * (((v2 * v2 - v1 * v1) / (2.0 * a2)) - (p2 - p1));
        let sqrt_delta = discriminant_sqrt(delta, v1 * v1 + v2 * v2 + (p2 - p1).abs())?;
        let x1 = (-2.0 * v1 + sqrt_delta) / (2.0 * a1);
        let x2 = (-2.0 * v1 - sqrt_delta) / (2.0 * a1);
        let x = x1.max(x2);

        let mut two_segment = x >= min_t1;
        let t1 = if two_segment { x } else { min_t1 };

        if two_segment && (v1 + t1 * a1).abs() > self.v_max {
            // Peak velocity exceeds the limit: cruise phase required.
            two_segment = false;
        }

        let profile = if two_segment {
            AxisProfile {
                p1,
                v1,
                a1,
                t1,
                tv: 0.0,
                t2: (v2 - v1) / a2 + t1,
            }
        } else {
            AxisProfile {
                p1,
                v1,
                a1,
                t1: (v_lim - v1) / a1,
                tv: (v1 * v1 + v2 * v2 - 2.0 * v_lim * v_lim) / (2.0 * v_lim * a1)
                    + (p2 - p1) / v_lim,
                t2: (v2 - v_lim) / a2,
            }
        };
        Ok(profile)
    }

    /// Minimum duration to move one axis from `(p1, v1)` to `(p2, v2)`.
    pub fn min_time(&self, p1: f64, v1: f64, p2: f64, v2: f64) -> Result<f64> {
        Ok(self.compute_min_time(p1, v1, p2, v2)?.total())
    }

    /// Phase layout for one axis taking exactly `t_total` seconds, with
    /// `t_total >= min_time(p1, v1, p2, v2)`.
    pub fn fixed_time_profile(
        &self,
        t_total: f64,
        p1: f64,
        v1: f64,
        p2: f64,
        v2: f64,
    ) -> Result<AxisProfile> {
        if t_total == 0.0 {
            return Ok(AxisProfile::stationary(p1, v1, 0.0));
        }
        let v12 = v1 + v2;
        let v2_1 = v2 - v1;
        let p2_1 = p2 - p1;

        // Acceleration magnitude making the two-segment motion last exactly
        // t_total: larger-|a| root of T^2*a^2 + (2*T*v12 - 4*p2_1)*a - v2_1^2.
        let b = 2.0 * t_total * v12 - 4.0 * p2_1;
        let delta = b * b + 4.0 * t_total * t_total * v2_1 * v2_1;
        let sqrt_delta = discriminant_sqrt(delta, b * b)?;
        let denom = 2.0 * t_total * t_total;
        let x1 = (-b - sqrt_delta) / denom;
        let x2 = (-b + sqrt_delta) / denom;
        let mut a1 = if x1.abs() > x2.abs() { x1 } else { x2 };

        if a1 == 0.0 {
            // Both roots vanish: the axis cruises at constant velocity.
            return Ok(AxisProfile::stationary(p1, v1, t_total));
        }

        let mut t1 = 0.5 * ((v2_1 / a1) + t_total);
        let v_lim = f64::from(sgn(a1)) * self.v_max;

        if (v1 + t1 * a1).abs() <= self.v_max {
            // Two-segment trajectory
            return Ok(AxisProfile {
                p1,
                v1,
                a1,
                t1,
                tv: 0.0,
                t2: t_total - t1,
            });
        }

        // Three segments: lower the acceleration so the cruise sits exactly
        // at the velocity limit.
        let denom = 2.0 * (v_lim * t_total - p2_1);
        if denom == 0.0 {
            return Err(PlanError::NumericalFailure(
                "saturated fixed-time profile is degenerate".into(),
            ));
        }
        a1 = ((v_lim - v1) * (v_lim - v1) + (v_lim - v2) * (v_lim - v2)) / denom;
        let a2 = -a1;
        t1 = (v_lim - v1) / a1;
        let tv =
            (v1 * v1 + v2 * v2 - 2.0 * v_lim * v_lim) / (2.0 * v_lim * a1) + p2_1 / v_lim;
        let t2 = (v2 - v_lim) / a2;
        Ok(AxisProfile {
            p1,
            v1,
            a1,
            t1,
            tv,
            t2,
        })
    }

    fn axis_state(&self, q: &Configuration, axis: usize) -> (f64, f64) {
        (q[axis], q[self.dof + axis])
    }
}

impl SteeringMethod for KinodynamicSteering {
    /// Minimum-time multi-axis trajectory: solve each axis for its minimum
    /// duration, then re-solve every axis at the duration of the slowest
    /// one so the motion is coherent.
    fn steer(&self, q1: &Configuration, q2: &Configuration) -> Result<Path> {
        debug_assert_eq!(q1.dim(), self.config_size);
        debug_assert_eq!(q2.dim(), self.config_size);

        let mut t_max = 0.0f64;
        for axis in 0..self.dof {
            let (p1, v1) = self.axis_state(q1, axis);
            let (p2, v2) = self.axis_state(q2, axis);
            t_max = t_max.max(self.min_time(p1, v1, p2, v2)?);
        }

        let mut profiles = Vec::with_capacity(self.dof);
        for axis in 0..self.dof {
            let (p1, v1) = self.axis_state(q1, axis);
            let (p2, v2) = self.axis_state(q2, axis);
            profiles.push(self.fixed_time_profile(t_max, p1, v1, p2, v2)?);
        }
        debug!("[Kinodynamic] steering over {} axes, duration {}", self.dof, t_max);

        Ok(Path::from_direct_path(Box::new(KinodynamicPath {
            start: q1.clone(),
            goal: q2.clone(),
            dof: self.dof,
            profiles,
            duration: t_max,
            valid: false,
        })))
    }
}

/// Piecewise-quadratic trajectory produced by [`KinodynamicSteering`].
///
/// Samples carry positions in the first `dof` values and velocities in the
/// next `dof`; any further extra DOFs are held at their start value.
#[derive(Clone)]
pub struct KinodynamicPath {
    start: Configuration,
    goal: Configuration,
    dof: usize,
    profiles: Vec<AxisProfile>,
    duration: f64,
    valid: bool,
}

impl KinodynamicPath {
    pub fn profiles(&self) -> &[AxisProfile] {
        &self.profiles
    }
}

impl DirectPath for KinodynamicPath {
    fn initial(&self) -> &Configuration {
        &self.start
    }

    fn end(&self) -> &Configuration {
        &self.goal
    }

    fn duration(&self) -> f64 {
        self.duration
    }

    fn at(&self, t: f64) -> Configuration {
        let t = t.clamp(0.0, self.duration);
        let mut values = self.start.values().to_vec();
        for (axis, profile) in self.profiles.iter().enumerate() {
            values[axis] = profile.position(t);
            values[self.dof + axis] = profile.velocity(t);
        }
        Configuration::new(values)
    }

    fn reversed(&self) -> Box<dyn DirectPath> {
        let negate_velocities = |q: &Configuration| {
            let mut values = q.values().to_vec();
            for axis in 0..self.dof {
                values[self.dof + axis] = -values[self.dof + axis];
            }
            Configuration::new(values)
        };
        Box::new(Self {
            start: negate_velocities(&self.goal),
            goal: negate_velocities(&self.start),
            dof: self.dof,
            profiles: self.profiles.iter().map(|p| p.reversed()).collect(),
            duration: self.duration,
            valid: self.valid,
        })
    }

    fn box_clone(&self) -> Box<dyn DirectPath> {
        Box::new(self.clone())
    }

    fn is_valid(&self) -> bool {
        self.valid
    }

    fn set_valid(&mut self, valid: bool) {
        self.valid = valid;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn steering(a_max: f64, v_max: f64) -> KinodynamicSteering {
        KinodynamicSteering::new(2, 1, &KinodynamicConfig { a_max, v_max }).unwrap()
    }

    #[test]
    fn test_rest_to_rest_without_cruise() {
        let sm = steering(1.0, 10.0);
        let profile = sm.compute_min_time(0.0, 0.0, 1.0, 0.0).unwrap();
        assert_eq!(profile.sigma(), 1);
        assert_relative_eq!(profile.t1, 1.0, max_relative = 1e-12);
        assert_relative_eq!(profile.t2, 1.0, max_relative = 1e-12);
        assert_eq!(profile.tv, 0.0);
        assert_relative_eq!(profile.total(), 2.0, max_relative = 1e-12);
    }

    #[test]
    fn test_rest_to_rest_with_cruise() {
        let sm = steering(1.0, 2.0);
        let profile = sm.compute_min_time(0.0, 0.0, 10.0, 0.0).unwrap();
        assert_eq!(profile.sigma(), 1);
        assert_relative_eq!(profile.t1, 2.0, max_relative = 1e-12);
        assert_relative_eq!(profile.tv, 3.0, max_relative = 1e-12);
        assert_relative_eq!(profile.t2, 2.0, max_relative = 1e-12);
        assert_relative_eq!(profile.total(), 7.0, max_relative = 1e-12);
    }

    #[test]
    fn test_backward_motion_mirrors_forward() {
        let sm = steering(1.0, 10.0);
        let fwd = sm.compute_min_time(0.0, 0.0, 1.0, 0.0).unwrap();
        let bwd = sm.compute_min_time(1.0, 0.0, 0.0, 0.0).unwrap();
        assert_eq!(bwd.sigma(), -1);
        assert_relative_eq!(bwd.total(), fwd.total(), max_relative = 1e-12);
    }

    #[test]
    fn test_pure_deceleration_boundary() {
        // Displacement exactly covered by the velocity switch: the profile
        // degenerates to a single braking ramp.
        let sm = steering(1.0, 10.0);
        let profile = sm.compute_min_time(0.0, 1.0, 0.5, 0.0).unwrap();
        assert_relative_eq!(profile.total(), 1.0, max_relative = 1e-9);
        assert_relative_eq!(profile.position(1.0), 0.5, max_relative = 1e-9);
        assert_relative_eq!(profile.velocity(1.0), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_velocity_reversal() {
        // Move forward while flipping the velocity sign: 0 -> 2 with
        // v 1 -> -1 peaks at sqrt(3), with t1 = sqrt(3) - 1 and
        // t2 = sqrt(3) + 1.
        let sm = steering(1.0, 10.0);
        let profile = sm.compute_min_time(0.0, 1.0, 2.0, -1.0).unwrap();
        let sqrt3 = 3.0f64.sqrt();
        assert_relative_eq!(profile.t1, sqrt3 - 1.0, max_relative = 1e-9);
        assert_relative_eq!(profile.t2, sqrt3 + 1.0, max_relative = 1e-9);
        assert_eq!(profile.tv, 0.0);
        assert_relative_eq!(profile.position(profile.total()), 2.0, max_relative = 1e-9);
        assert_relative_eq!(profile.velocity(profile.total()), -1.0, max_relative = 1e-9);
    }

    #[test]
    fn test_min_time_zero_iff_states_equal() {
        let sm = steering(0.5, 1.0);
        assert_eq!(sm.min_time(1.5, -0.3, 1.5, -0.3).unwrap(), 0.0);
        assert!(sm.min_time(1.5, -0.3, 1.5, -0.2).unwrap() > 0.0);
        assert!(sm.min_time(1.5, 0.0, 1.6, 0.0).unwrap() > 0.0);
    }

    #[test]
    fn test_min_time_nonnegative_durations() {
        let sm = steering(0.5, 1.0);
        let cases = [
            (0.0, 0.0, 2.0, 0.0),
            (0.0, 0.5, -1.0, 0.0),
            (1.0, -0.5, 1.2, 0.5),
            (0.0, 1.0, 3.0, 1.0),
        ];
        for (p1, v1, p2, v2) in cases {
            let profile = sm.compute_min_time(p1, v1, p2, v2).unwrap();
            assert!(profile.t1 >= 0.0, "t1 {} for {:?}", profile.t1, (p1, v1, p2, v2));
            assert!(profile.tv >= -1e-12, "tv {} for {:?}", profile.tv, (p1, v1, p2, v2));
            assert!(profile.t2 >= 0.0, "t2 {} for {:?}", profile.t2, (p1, v1, p2, v2));
        }
    }

    #[test]
    fn test_min_time_profile_reaches_goal_state() {
        let sm = steering(0.5, 1.0);
        let cases = [
            (0.0, 0.0, 2.0, 0.0),
            (0.0, 0.5, -1.0, 0.0),
            (1.0, -0.5, 1.2, 0.5),
            (-2.0, 0.2, 2.0, -0.4),
        ];
        for (p1, v1, p2, v2) in cases {
            let profile = sm.compute_min_time(p1, v1, p2, v2).unwrap();
            let total = profile.total();
            assert_relative_eq!(profile.position(total), p2, max_relative = 1e-9, epsilon = 1e-9);
            assert_relative_eq!(profile.velocity(total), v2, max_relative = 1e-9, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_min_time_continuity_in_inputs() {
        let sm = steering(1.0, 2.0);
        let base = sm.min_time(0.0, 0.3, 4.0, -0.1).unwrap();
        let nudged = sm.min_time(0.0, 0.3, 4.0 + 1e-8, -0.1).unwrap();
        assert!((base - nudged).abs() < 1e-6);
    }

    #[test]
    fn test_fixed_time_reproduces_min_time_solution() {
        let sm = steering(1.0, 2.0);
        let cases = [
            (0.0, 0.0, 1.0, 0.0),
            (0.0, 0.0, 10.0, 0.0),
            (1.0, 0.5, -2.0, 0.0),
            (0.0, -0.5, 3.0, 0.5),
        ];
        for (p1, v1, p2, v2) in cases {
            let min = sm.compute_min_time(p1, v1, p2, v2).unwrap();
            let fixed = sm
                .fixed_time_profile(min.total(), p1, v1, p2, v2)
                .unwrap();
            assert_relative_eq!(fixed.a1, min.a1, max_relative = 1e-9, epsilon = 1e-9);
            assert_relative_eq!(fixed.t1, min.t1, max_relative = 1e-9, epsilon = 1e-9);
            assert_relative_eq!(fixed.tv, min.tv, max_relative = 1e-9, epsilon = 1e-9);
            assert_relative_eq!(fixed.t2, min.t2, max_relative = 1e-9, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_fixed_time_stretches_to_requested_duration() {
        let sm = steering(1.0, 2.0);
        let (p1, v1, p2, v2) = (0.0, 0.0, 1.0, 0.0);
        let t_min = sm.min_time(p1, v1, p2, v2).unwrap();
        let t = t_min * 1.7;
        let profile = sm.fixed_time_profile(t, p1, v1, p2, v2).unwrap();
        assert_relative_eq!(profile.total(), t, max_relative = 1e-9);
        assert_relative_eq!(profile.position(t), p2, max_relative = 1e-9, epsilon = 1e-9);
        assert_relative_eq!(profile.velocity(t), v2, max_relative = 1e-9, epsilon = 1e-9);
    }

    #[test]
    fn test_fixed_time_stationary_axis() {
        let sm = steering(1.0, 2.0);
        let profile = sm.fixed_time_profile(5.0, 1.0, 0.0, 1.0, 0.0).unwrap();
        assert_relative_eq!(profile.total(), 5.0);
        assert_eq!(profile.position(2.5), 1.0);
        assert_eq!(profile.velocity(2.5), 0.0);
    }

    #[test]
    fn test_steer_synchronises_axes() {
        let sm = KinodynamicSteering::new(4, 2, &KinodynamicConfig { a_max: 1.0, v_max: 2.0 })
            .unwrap();
        // Axis 0 travels 1.0 (min time 2), axis 1 travels 10.0 (min time 7)
        let q1 = Configuration::from(&[0.0, 0.0, 0.0, 0.0][..]);
        let q2 = Configuration::from(&[1.0, 10.0, 0.0, 0.0][..]);
        let path = sm.steer(&q1, &q2).unwrap();
        assert_eq!(path.count_direct_paths(), 1);
        assert_relative_eq!(path.duration(), 7.0, max_relative = 1e-12);

        let start = path.at(0.0).unwrap();
        let end = path.at(7.0).unwrap();
        for i in 0..4 {
            assert_relative_eq!(start[i], q1[i], epsilon = 1e-9);
            assert_relative_eq!(end[i], q2[i], epsilon = 1e-9);
        }
    }

    #[test]
    fn test_steer_equal_configurations() {
        let sm = steering(1.0, 2.0);
        let q = Configuration::from(&[1.0, 0.0][..]);
        let path = sm.steer(&q, &q).unwrap();
        assert!(!path.is_empty());
        assert_eq!(path.duration(), 0.0);
    }

    #[test]
    fn test_reversed_path_swaps_and_negates() {
        let sm = steering(1.0, 2.0);
        let q1 = Configuration::from(&[0.0, 0.0][..]);
        let q2 = Configuration::from(&[3.0, 0.5][..]);
        let path = sm.steer(&q1, &q2).unwrap();
        let segment = &path.segments()[0];
        let rev = segment.reversed();

        assert_relative_eq!(rev.initial()[0], 3.0);
        assert_relative_eq!(rev.initial()[1], -0.5);
        assert_relative_eq!(rev.end()[0], 0.0);

        // Reversed samples mirror the forward ones with negated velocity
        let t = segment.duration() * 0.3;
        let fwd = segment.at(segment.duration() - t);
        let bwd = rev.at(t);
        assert_relative_eq!(bwd[0], fwd[0], max_relative = 1e-9, epsilon = 1e-9);
        assert_relative_eq!(bwd[1], -fwd[1], max_relative = 1e-9, epsilon = 1e-9);
    }

    #[test]
    fn test_constructor_requires_velocity_slots() {
        let limits = KinodynamicConfig { a_max: 1.0, v_max: 1.0 };
        assert!(KinodynamicSteering::new(4, 1, &limits).is_err());
        assert!(KinodynamicSteering::new(4, 2, &limits).is_ok());
        assert!(KinodynamicSteering::new(4, 3, &limits).is_ok());
    }

    #[test]
    fn test_constructor_rejects_nonpositive_limits() {
        assert!(
            KinodynamicSteering::new(2, 1, &KinodynamicConfig { a_max: 0.0, v_max: 1.0 }).is_err()
        );
        assert!(
            KinodynamicSteering::new(2, 1, &KinodynamicConfig { a_max: 1.0, v_max: -1.0 })
                .is_err()
        );
    }
}
