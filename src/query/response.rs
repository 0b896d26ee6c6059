use crate::body::Body;
use crate::math::{Real, Vector};

/// The result of a successful narrow-phase test, describing how two bodies
/// overlap.
///
/// A response is only written by a test that returned `true`; a test that
/// found the shapes separated leaves it untouched. This lets a caller reuse
/// one response across several tests and only pay for the fields it reads.
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Response<'a> {
    /// The first body of the test.
    pub a: Option<&'a Body>,
    /// The second body of the test.
    pub b: Option<&'a Body>,
    /// The depth of the overlap along `overlap_n`. Strictly positive
    /// whenever a test reported a collision.
    pub overlap: Real,
    /// The unit axis of minimum overlap, pointing from `b` towards `a`.
    pub overlap_n: Vector<Real>,
    /// `overlap_n` scaled by `overlap`. Adding this vector to `a`'s
    /// position moves the bodies out of collision.
    pub overlap_v: Vector<Real>,
    /// Is the first shape fully contained in the second?
    pub a_in_b: bool,
    /// Is the second shape fully contained in the first?
    pub b_in_a: bool,
}

impl<'a> Response<'a> {
    /// Creates an empty response, ready to be passed to a narrow-phase test.
    pub fn new() -> Response<'a> {
        Response {
            a: None,
            b: None,
            overlap: 0.0,
            overlap_n: Vector::zeros(),
            overlap_v: Vector::zeros(),
            a_in_b: false,
            b_in_a: false,
        }
    }

    /// Resets this response so it can be reused for another test.
    #[inline]
    pub fn clear(&mut self) {
        *self = Response::new();
    }

    /// Swaps the roles of the two bodies, negating the overlap direction so
    /// it keeps pointing from `b` towards `a`.
    #[inline]
    pub fn flip(&mut self) {
        core::mem::swap(&mut self.a, &mut self.b);
        core::mem::swap(&mut self.a_in_b, &mut self.b_in_a);
        self.overlap_n = -self.overlap_n;
        self.overlap_v = -self.overlap_v;
    }
}

impl Default for Response<'_> {
    fn default() -> Self {
        Self::new()
    }
}
