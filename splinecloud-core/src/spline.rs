//! Piecewise cubic Bezier splines in normalized curve space
//!
//! A [`Spline`] is an ordered list of anchors. Each consecutive pair of anchors
//! bounds one cubic segment whose inner control points are the anchors' handle
//! offsets. The x and y axes are evaluated independently as scalar curves over
//! a global parameter `t` in [0, 1].

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Length of a cubic Bezier handle approximating a quarter circle of radius 1
const KAPPA: f32 = 0.552_284_8;

/// Which scalar curve of a spline to evaluate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

/// Tangent handle offset relative to its anchor
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Handle {
    pub dx: f32,
    pub dy: f32,
}

impl Handle {
    pub const ZERO: Handle = Handle { dx: 0.0, dy: 0.0 };

    pub const fn new(dx: f32, dy: f32) -> Self {
        Self { dx, dy }
    }

    /// The handle pointing the opposite way with the same length
    pub fn mirrored(&self) -> Self {
        Self::new(-self.dx, -self.dy)
    }

    pub fn along(&self, axis: Axis) -> f32 {
        match axis {
            Axis::X => self.dx,
            Axis::Y => self.dy,
        }
    }
}

/// An anchor on a spline with optional incoming (`cp1`) and outgoing (`cp2`) handles
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlPoint {
    pub x: f32,
    pub y: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    cp1: Option<Handle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    cp2: Option<Handle>,
}

impl ControlPoint {
    /// An anchor without handles
    pub fn sharp(x: f32, y: f32) -> Self {
        Self { x, y, cp1: None, cp2: None }
    }

    /// An anchor whose incoming handle mirrors `outgoing`
    pub fn smooth(x: f32, y: f32, outgoing: Handle) -> Self {
        Self {
            x,
            y,
            cp1: Some(outgoing.mirrored()),
            cp2: Some(outgoing),
        }
    }

    /// An anchor with independent handles. Only tangent-continuous if the
    /// caller passes mirrored handles.
    pub fn corner(x: f32, y: f32, incoming: Option<Handle>, outgoing: Option<Handle>) -> Self {
        Self {
            x,
            y,
            cp1: incoming,
            cp2: outgoing,
        }
    }

    pub fn incoming(&self) -> Option<Handle> {
        self.cp1
    }

    pub fn outgoing(&self) -> Option<Handle> {
        self.cp2
    }

    /// True when both handles are present and mirror each other
    pub fn is_smooth(&self) -> bool {
        match (self.cp1, self.cp2) {
            (Some(a), Some(b)) => a == b.mirrored(),
            _ => false,
        }
    }

    pub fn along(&self, axis: Axis) -> f32 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    /// Restore mirrored handles, keeping the outgoing one when both exist.
    /// A missing pair becomes zero-length, which leaves the curve unchanged.
    fn make_smooth(&mut self) {
        let outgoing = match (self.cp1, self.cp2) {
            (_, Some(out)) => out,
            (Some(inc), None) => inc.mirrored(),
            (None, None) => Handle::ZERO,
        };
        self.cp1 = Some(outgoing.mirrored());
        self.cp2 = Some(outgoing);
    }
}

/// Evaluate a one-dimensional cubic Bezier at `t` using the Bernstein form.
///
/// `t` is not clamped; values outside [0, 1] follow the same polynomial.
pub fn cubic_bezier(t: f32, p0: f32, p1: f32, p2: f32, p3: f32) -> f32 {
    let mt = 1.0 - t;
    mt * mt * mt * p0 + 3.0 * mt * mt * t * p1 + 3.0 * mt * t * t * p2 + t * t * t * p3
}

/// First derivative of [`cubic_bezier`] with respect to `t`
pub fn cubic_bezier_derivative(t: f32, p0: f32, p1: f32, p2: f32, p3: f32) -> f32 {
    let mt = 1.0 - t;
    3.0 * mt * mt * (p1 - p0) + 6.0 * mt * t * (p2 - p1) + 3.0 * t * t * (p3 - p2)
}

/// A composite cubic Bezier curve through two or more anchors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Spline {
    points: Vec<ControlPoint>,
}

impl Spline {
    /// Create a spline from anchors as given.
    ///
    /// Fewer than two anchors is accepted; evaluation then degrades to the
    /// single anchor's value, or 0 for an empty spline.
    pub fn new(points: Vec<ControlPoint>) -> Self {
        Self { points }
    }

    /// Default vertical profile: x is the radius, y the height.
    pub fn default_vertical() -> Self {
        Self::new(vec![
            ControlPoint::corner(0.45, 0.0, None, Some(Handle::new(0.25, 0.05))),
            ControlPoint::smooth(0.85, 0.35, Handle::new(0.0, 0.15)),
            ControlPoint::smooth(0.35, 0.75, Handle::new(0.0, 0.1)),
            ControlPoint::corner(0.6, 1.0, Some(Handle::new(-0.1, -0.08)), None),
        ])
    }

    /// Default horizontal shape: a closed circle of radius 0.5 around (0.5, 0.5).
    pub fn default_horizontal() -> Self {
        let k = 0.5 * KAPPA;
        Self::new(vec![
            ControlPoint::corner(1.0, 0.5, None, Some(Handle::new(0.0, k))),
            ControlPoint::smooth(0.5, 1.0, Handle::new(-k, 0.0)),
            ControlPoint::smooth(0.0, 0.5, Handle::new(0.0, -k)),
            ControlPoint::smooth(0.5, 0.0, Handle::new(k, 0.0)),
            ControlPoint::corner(1.0, 0.5, Some(Handle::new(0.0, -k)), None),
        ])
    }

    pub fn points(&self) -> &[ControlPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn segment_count(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    /// Evaluate one axis at global parameter `t`; see [`sample_spline`]
    pub fn sample(&self, t: f32, axis: Axis) -> f32 {
        sample_spline(t, self, axis)
    }

    /// Evaluate both axes at `t`
    pub fn sample_point(&self, t: f32) -> (f32, f32) {
        (self.sample(t, Axis::X), self.sample(t, Axis::Y))
    }

    /// Move an anchor. Handles are offsets and travel with it.
    pub fn move_anchor(&mut self, index: usize, x: f32, y: f32) -> Result<()> {
        let point = self.point_mut(index)?;
        point.x = x;
        point.y = y;
        Ok(())
    }

    /// Set the outgoing handle. Interior anchors get a mirrored incoming handle.
    pub fn set_outgoing_handle(&mut self, index: usize, handle: Handle) -> Result<()> {
        let interior = self.is_interior(index);
        let point = self.point_mut(index)?;
        point.cp2 = Some(handle);
        if interior {
            point.cp1 = Some(handle.mirrored());
        }
        Ok(())
    }

    /// Set the incoming handle. Interior anchors get a mirrored outgoing handle.
    pub fn set_incoming_handle(&mut self, index: usize, handle: Handle) -> Result<()> {
        let interior = self.is_interior(index);
        let point = self.point_mut(index)?;
        point.cp1 = Some(handle);
        if interior {
            point.cp2 = Some(handle.mirrored());
        }
        Ok(())
    }

    /// Insert an anchor before `index` (`index == len` appends).
    ///
    /// The new anchor and any neighbour that becomes interior get mirrored
    /// handles, preferring the outgoing handle when the two disagree.
    pub fn insert_anchor(&mut self, index: usize, point: ControlPoint) -> Result<()> {
        if index > self.points.len() {
            return Err(Error::InvalidParameter(format!(
                "anchor index {} out of range for spline with {} anchors",
                index,
                self.points.len()
            )));
        }
        self.points.insert(index, point);
        for i in index.saturating_sub(1)..=index + 1 {
            if self.is_interior(i) {
                self.points[i].make_smooth();
            }
        }
        Ok(())
    }

    /// Remove an anchor. A spline never drops below two anchors this way.
    pub fn remove_anchor(&mut self, index: usize) -> Result<ControlPoint> {
        if self.points.len() <= 2 {
            return Err(Error::InvalidParameter(
                "a spline needs at least two anchors".to_string(),
            ));
        }
        self.point_mut(index)?;
        Ok(self.points.remove(index))
    }

    fn is_interior(&self, index: usize) -> bool {
        index > 0 && index + 1 < self.points.len()
    }

    fn point_mut(&mut self, index: usize) -> Result<&mut ControlPoint> {
        let len = self.points.len();
        self.points.get_mut(index).ok_or_else(|| {
            Error::InvalidParameter(format!(
                "anchor index {} out of range for spline with {} anchors",
                index, len
            ))
        })
    }

    /// Locate the segment for global `t`, returning (segment index, local weight)
    fn locate(&self, t: f32) -> (usize, f32) {
        let segments = self.segment_count();
        let raw = t * segments as f32;
        let index = (raw.floor().max(0.0) as usize).min(segments - 1);
        (index, raw - index as f32)
    }

    /// The four scalar Bezier controls of one segment
    fn segment_controls(&self, index: usize, axis: Axis) -> [f32; 4] {
        let start = &self.points[index];
        let end = &self.points[index + 1];
        let p0 = start.along(axis);
        let p3 = end.along(axis);
        let p1 = p0 + start.cp2.map_or(0.0, |h| h.along(axis));
        let p2 = p3 + end.cp1.map_or(0.0, |h| h.along(axis));
        [p0, p1, p2, p3]
    }
}

impl Default for Spline {
    fn default() -> Self {
        Self::default_vertical()
    }
}

/// Evaluate one axis of a spline at global parameter `t` in [0, 1].
///
/// `t` maps onto segment `floor(t * segments)` (capped at the last segment)
/// with the remainder as the local weight, so `t = 1` lands exactly on the
/// final anchor. Splines with fewer than two anchors return the sole anchor's
/// value, or 0 when empty.
pub fn sample_spline(t: f32, spline: &Spline, axis: Axis) -> f32 {
    match spline.points.as_slice() {
        [] => 0.0,
        [only] => only.along(axis),
        _ => {
            let (index, weight) = spline.locate(t);
            let [p0, p1, p2, p3] = spline.segment_controls(index, axis);
            cubic_bezier(weight, p0, p1, p2, p3)
        }
    }
}

/// Derivative of [`sample_spline`] with respect to the global parameter `t`
pub fn sample_spline_derivative(t: f32, spline: &Spline, axis: Axis) -> f32 {
    if spline.len() < 2 {
        return 0.0;
    }
    let (index, weight) = spline.locate(t);
    let [p0, p1, p2, p3] = spline.segment_controls(index, axis);
    cubic_bezier_derivative(weight, p0, p1, p2, p3) * spline.segment_count() as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn wavy() -> Spline {
        Spline::new(vec![
            ControlPoint::corner(0.0, 0.0, None, Some(Handle::new(0.1, 0.3))),
            ControlPoint::smooth(0.3, 0.8, Handle::new(0.2, -0.1)),
            ControlPoint::smooth(0.6, 0.2, Handle::new(0.05, 0.25)),
            ControlPoint::corner(1.0, 0.9, Some(Handle::new(-0.2, 0.0)), None),
        ])
    }

    #[test]
    fn test_cubic_bezier_endpoints() {
        let controls = [(-3.0, 7.5, 0.25, 12.0), (0.0, 1.0, -1.0, 0.0), (5.0, 5.0, 5.0, 5.0)];
        for (p0, p1, p2, p3) in controls {
            assert_eq!(cubic_bezier(0.0, p0, p1, p2, p3), p0);
            assert_eq!(cubic_bezier(1.0, p0, p1, p2, p3), p3);
        }
    }

    #[test]
    fn test_cubic_bezier_extrapolates() {
        // A linear control layout stays linear outside [0, 1]
        assert_abs_diff_eq!(cubic_bezier(2.0, 0.0, 1.0, 2.0, 3.0), 6.0, epsilon = 1e-5);
        assert_abs_diff_eq!(cubic_bezier(-1.0, 0.0, 1.0, 2.0, 3.0), -3.0, epsilon = 1e-5);
    }

    #[test]
    fn test_sample_hits_anchors() {
        let spline = wavy();
        let segments = spline.segment_count() as f32;
        for (i, anchor) in spline.points().iter().enumerate() {
            let t = i as f32 / segments;
            assert_abs_diff_eq!(spline.sample(t, Axis::X), anchor.x, epsilon = 1e-5);
            assert_abs_diff_eq!(spline.sample(t, Axis::Y), anchor.y, epsilon = 1e-5);
        }
        assert_eq!(spline.sample(1.0, Axis::X), 1.0);
        assert_eq!(spline.sample(1.0, Axis::Y), 0.9);
    }

    #[test]
    fn test_value_and_tangent_continuity_at_shared_anchors() {
        let spline = wavy();
        for anchor in 1..spline.segment_count() {
            for axis in [Axis::X, Axis::Y] {
                let [a0, a1, a2, a3] = spline.segment_controls(anchor - 1, axis);
                let [b0, b1, b2, b3] = spline.segment_controls(anchor, axis);
                assert_abs_diff_eq!(
                    cubic_bezier(1.0, a0, a1, a2, a3),
                    cubic_bezier(0.0, b0, b1, b2, b3),
                    epsilon = 1e-6
                );
                assert_abs_diff_eq!(
                    cubic_bezier_derivative(1.0, a0, a1, a2, a3),
                    cubic_bezier_derivative(0.0, b0, b1, b2, b3),
                    epsilon = 1e-5
                );
            }
        }
    }

    #[test]
    fn test_global_parameter_continuity_near_anchor() {
        let spline = wavy();
        let t = 1.0 / 3.0;
        let eps = 1e-3;
        for axis in [Axis::X, Axis::Y] {
            let left = spline.sample(t - eps, axis);
            let right = spline.sample(t + eps, axis);
            assert_abs_diff_eq!(left, right, epsilon = 0.01);

            let d_left = sample_spline_derivative(t - eps, &spline, axis);
            let d_right = sample_spline_derivative(t + eps, &spline, axis);
            assert_abs_diff_eq!(d_left, d_right, epsilon = 0.15);
        }
    }

    #[test]
    fn test_degenerate_splines() {
        assert_eq!(Spline::new(vec![]).sample(0.4, Axis::X), 0.0);
        let single = Spline::new(vec![ControlPoint::sharp(0.25, 0.75)]);
        assert_eq!(single.sample(0.4, Axis::X), 0.25);
        assert_eq!(single.sample(0.9, Axis::Y), 0.75);
        assert_eq!(sample_spline_derivative(0.5, &single, Axis::X), 0.0);
    }

    #[test]
    fn test_sharp_anchors_form_straight_segments() {
        let line = Spline::new(vec![ControlPoint::sharp(0.0, 0.0), ControlPoint::sharp(1.0, 1.0)]);
        let (x, y) = line.sample_point(0.5);
        assert_abs_diff_eq!(x, 0.5, epsilon = 1e-6);
        assert_abs_diff_eq!(y, 0.5, epsilon = 1e-6);
    }

    #[test]
    fn test_editing_mirrors_interior_handles() {
        let mut spline = wavy();
        spline.set_outgoing_handle(1, Handle::new(0.4, 0.1)).unwrap();
        assert!(spline.points()[1].is_smooth());
        assert_eq!(spline.points()[1].incoming(), Some(Handle::new(-0.4, -0.1)));

        spline.set_incoming_handle(2, Handle::new(-0.3, 0.2)).unwrap();
        assert_eq!(spline.points()[2].outgoing(), Some(Handle::new(0.3, -0.2)));

        // Endpoints keep independent handles
        spline.set_incoming_handle(0, Handle::new(0.5, 0.5)).unwrap();
        assert_eq!(spline.points()[0].outgoing(), Some(Handle::new(0.1, 0.3)));

        assert!(spline.set_outgoing_handle(9, Handle::ZERO).is_err());
    }

    #[test]
    fn test_anchor_insert_remove_and_move() {
        let mut spline = Spline::new(vec![ControlPoint::sharp(0.0, 0.0), ControlPoint::sharp(1.0, 1.0)]);
        assert!(spline.remove_anchor(0).is_err());

        spline.insert_anchor(1, ControlPoint::sharp(0.5, 0.2)).unwrap();
        assert_eq!(spline.segment_count(), 2);
        spline.move_anchor(1, 0.4, 0.6).unwrap();
        assert_eq!(spline.points()[1].y, 0.6);

        let removed = spline.remove_anchor(1).unwrap();
        assert_eq!(removed.x, 0.4);
        assert!(spline.insert_anchor(5, ControlPoint::sharp(0.0, 0.0)).is_err());
    }

    fn interior_is_smooth(spline: &Spline) -> bool {
        let n = spline.len();
        n < 3 || spline.points()[1..n - 1].iter().all(ControlPoint::is_smooth)
    }

    #[test]
    fn test_appending_keeps_former_endpoint_tangent_continuous() {
        let mut spline = Spline::default_vertical();
        spline.insert_anchor(4, ControlPoint::sharp(0.5, 1.2)).unwrap();
        assert!(interior_is_smooth(&spline));

        let former_end = spline.points()[3];
        assert_eq!(former_end.incoming(), Some(Handle::new(-0.1, -0.08)));
        assert_eq!(former_end.outgoing(), Some(Handle::new(0.1, 0.08)));

        let t = 0.75;
        let eps = 1e-3;
        for axis in [Axis::X, Axis::Y] {
            let d_left = sample_spline_derivative(t - eps, &spline, axis);
            let d_right = sample_spline_derivative(t + eps, &spline, axis);
            assert_abs_diff_eq!(d_left, d_right, epsilon = 0.15);
        }
    }

    #[test]
    fn test_interior_insert_mirrors_handles() {
        let mut spline = Spline::default_vertical();
        let corner = ControlPoint::corner(0.7, 0.5, Some(Handle::new(0.3, 0.3)), Some(Handle::new(0.1, -0.2)));
        spline.insert_anchor(2, corner).unwrap();
        assert!(interior_is_smooth(&spline));
        assert_eq!(spline.points()[2].outgoing(), Some(Handle::new(0.1, -0.2)));
        assert_eq!(spline.points()[2].incoming(), Some(Handle::new(-0.1, 0.2)));

        // A handle-less anchor keeps its straight shape with zero-length handles
        let mut line = Spline::new(vec![ControlPoint::sharp(0.0, 0.0), ControlPoint::sharp(1.0, 1.0)]);
        line.insert_anchor(1, ControlPoint::sharp(0.5, 0.5)).unwrap();
        assert!(interior_is_smooth(&line));
        assert_abs_diff_eq!(line.sample(0.25, Axis::Y), 0.25, epsilon = 1e-6);

        line.insert_anchor(0, ControlPoint::corner(-1.0, 0.0, None, Some(Handle::new(0.2, 0.0)))).unwrap();
        assert!(interior_is_smooth(&line));
        assert_eq!(line.points()[0].incoming(), None);

        line.remove_anchor(2).unwrap();
        assert!(interior_is_smooth(&line));
        line.remove_anchor(0).unwrap();
        assert!(interior_is_smooth(&line));
    }

    #[test]
    fn test_default_horizontal_is_closed_circle() {
        let circle = Spline::default_horizontal();
        assert_eq!(circle.sample_point(0.0), circle.sample_point(1.0));
        for step in 0..=64 {
            let (x, y) = circle.sample_point(step as f32 / 64.0);
            let radius = ((x - 0.5).powi(2) + (y - 0.5).powi(2)).sqrt();
            assert_abs_diff_eq!(radius, 0.5, epsilon = 1e-3);
        }
    }

    #[test]
    fn test_default_vertical_spans_full_height() {
        let profile = Spline::default_vertical();
        assert_eq!(profile.sample(0.0, Axis::Y), 0.0);
        assert_eq!(profile.sample(1.0, Axis::Y), 1.0);
        assert!(profile.points()[1..3].iter().all(ControlPoint::is_smooth));
    }
}
