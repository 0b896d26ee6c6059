use na::{Point2, Vector2};
use sat2d::Body;

mod shape_shape;

fn random_body(rng: &mut oorandom::Rand32) -> Body {
    let position = Point2::new(
        rng.rand_float() * 16.0 - 8.0,
        rng.rand_float() * 16.0 - 8.0,
    );
    let angle = rng.rand_float() * std::f32::consts::TAU;
    let scale = Vector2::new(
        0.5 + rng.rand_float() * 1.5,
        0.5 + rng.rand_float() * 1.5,
    );
    Body::new(position, angle, scale)
}
