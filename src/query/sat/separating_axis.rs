use crate::body::Body;
use crate::math::{Real, UnitVector, Vector};
use crate::query::Response;
use crate::shape::{AxisProjection, Projection};

/// Running minimum-overlap state across the candidate axes of one
/// narrow-phase test.
///
/// The caller's [`Response`] is written in one go once every axis has been
/// tested, so a test that finds a separating axis leaves it untouched.
pub(crate) struct OverlapState {
    depth: Real,
    normal: Vector<Real>,
    a_in_b: bool,
    b_in_a: bool,
}

impl OverlapState {
    pub(crate) fn new() -> OverlapState {
        OverlapState {
            depth: Real::MAX,
            normal: Vector::zeros(),
            a_in_b: true,
            b_in_a: true,
        }
    }

    /// Folds the projections of both shapes onto one candidate axis into
    /// the running state.
    ///
    /// Ties on the overlap depth keep the earlier axis, so the axis
    /// enumeration order of the caller decides which normal wins.
    fn merge(&mut self, axis: &UnitVector<Real>, a: &Projection, b: &Projection) {
        self.a_in_b = self.a_in_b && b.contains(a);
        self.b_in_a = self.b_in_a && a.contains(b);

        let (depth, sign) = signed_overlap(a, b);
        if depth < self.depth {
            self.depth = depth;
            self.normal = **axis * sign;
        }
    }

    /// Writes the accumulated minimum translation vector and containment
    /// flags out to `response`.
    pub(crate) fn write<'a>(&self, a: &'a Body, b: &'a Body, response: &mut Response<'a>) {
        response.a = Some(a);
        response.b = Some(b);
        response.overlap = self.depth;
        response.overlap_n = self.normal;
        response.overlap_v = self.normal * self.depth;
        response.a_in_b = self.a_in_b;
        response.b_in_a = self.b_in_a;
    }
}

/// The overlap depth of two projected intervals known to overlap, along
/// with the sign to apply to the axis so it points from `b` towards `a`.
///
/// When one interval contains the other, the cheaper of the two ways out
/// is reported.
fn signed_overlap(a: &Projection, b: &Projection) -> (Real, Real) {
    if a.min < b.min {
        if a.max < b.max {
            // A extends past B on the left only.
            (a.max - b.min, -1.0)
        } else {
            containment_overlap(a, b)
        }
    } else if a.max > b.max {
        // A extends past B on the right only.
        (b.max - a.min, 1.0)
    } else {
        containment_overlap(a, b)
    }
}

fn containment_overlap(a: &Projection, b: &Projection) -> (Real, Real) {
    let escape_left = a.max - b.min;
    let escape_right = b.max - a.min;

    if escape_left < escape_right {
        (escape_left, -1.0)
    } else {
        (escape_right, 1.0)
    }
}

/// Projects both shapes onto `axis` and reports whether that axis separates
/// them.
///
/// Returns `true` when the projected intervals are disjoint or merely
/// touching; the caller should then bail out of its test. Otherwise the
/// overlap is folded into `state`, when one is provided.
pub(crate) fn is_separating_axis<A, B>(
    a: &A,
    b: &B,
    axis: &UnitVector<Real>,
    state: Option<&mut OverlapState>,
) -> bool
where
    A: ?Sized + AxisProjection,
    B: ?Sized + AxisProjection,
{
    let proj_a = a.project_onto(axis);
    let proj_b = b.project_onto(axis);

    if proj_a.separated_from(&proj_b) {
        return true;
    }

    if let Some(state) = state {
        state.merge(axis, &proj_a, &proj_b);
    }

    false
}
