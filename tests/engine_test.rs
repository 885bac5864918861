use vertex_color_bench::{
    Axis, BlendMode, BoundingBox, Color, GradientBounds, PaintError,
    engine::{
        Shading, combine,
        gradient::{GradientFrame, distance, lerp_color},
    },
};

use crate::common::test_utils::{assert_close, assert_color_eq, p};

mod common;

#[test]
fn lerp_color_hits_both_ends() {
    let main = [0.2, 0.4, 0.6];
    let sub = [0.9, 0.1, 0.3];

    assert_eq!(lerp_color(main, sub, 0.25, 0.75, 0.0), Color::new(0.2, 0.4, 0.6, 0.25));
    assert_color_eq(lerp_color(main, sub, 0.25, 0.75, 1.0), Color::new(0.9, 0.1, 0.3, 0.75));
}

#[test]
fn lerp_color_at_half_is_the_midpoint() {
    let c = lerp_color([0.0, 1.0, 0.2], [1.0, 0.0, 0.6], 0.0, 1.0, 0.5);
    assert_color_eq(c, Color::new(0.5, 0.5, 0.4, 0.5));
}

#[test]
fn lerp_color_extrapolates_outside_unit_range() {
    let c = lerp_color([0.0; 3], [1.0; 3], 0.0, 1.0, 1.5);
    assert_color_eq(c, Color::new(1.5, 1.5, 1.5, 1.5));

    let c = Color::white().lerp(Color::transparent(), -1.0);
    assert_color_eq(c, Color::new(2.0, 2.0, 2.0, 2.0));
}

#[test]
fn point_to_point_fraction_is_relative_distance() {
    let frame = GradientFrame::point_to_point(p(0.0, 0.0, 0.0), p(10.0, 0.0, 0.0)).unwrap();
    assert_eq!(frame.fraction(p(5.0, 0.0, 0.0)), 0.5);
    assert_eq!(frame.fraction(p(0.0, 0.0, 0.0)), 0.0);
    assert_eq!(frame.fraction(p(10.0, 0.0, 0.0)), 1.0);
    // Euclidean, not projected onto the segment.
    assert_close(frame.fraction(p(0.0, 6.0, 0.0)), 0.6);
}

#[test]
fn point_to_point_fraction_is_clamped() {
    let frame = GradientFrame::point_to_point(p(0.0, 0.0, 0.0), p(2.0, 0.0, 0.0)).unwrap();
    assert_eq!(frame.fraction(p(7.0, 0.0, 0.0)), 1.0);
    assert_eq!(frame.fraction(p(-7.0, 0.0, 0.0)), 1.0);
}

#[test]
fn swapping_reference_points_mirrors_the_fraction_on_the_segment() {
    let a = p(1.0, 2.0, 3.0);
    let b = p(5.0, -2.0, 7.0);
    let forward = GradientFrame::point_to_point(a, b).unwrap();
    let backward = GradientFrame::point_to_point(b, a).unwrap();

    for t in [0.0, 0.1, 0.25, 0.5, 0.8, 1.0] {
        let v = p(
            a.x + (b.x - a.x) * t,
            a.y + (b.y - a.y) * t,
            a.z + (b.z - a.z) * t,
        );
        assert_close(forward.fraction(v), 1.0 - backward.fraction(v));
    }
}

#[test]
fn coincident_reference_points_are_rejected() {
    let err = GradientFrame::point_to_point(p(3.0, 3.0, 3.0), p(3.0, 3.0, 3.0)).unwrap_err();
    assert_eq!(err, PaintError::DegenerateReference);
}

#[test]
fn mesh_bounds_fraction_runs_from_max_to_min() {
    let bounds = BoundingBox::new(p(0.0, 0.0, 0.0), p(2.0, 4.0, 8.0));

    let y = GradientFrame::mesh_bounds(bounds, Axis::Y).unwrap();
    assert_eq!(y.fraction(p(0.0, 4.0, 0.0)), 0.0);
    assert_eq!(y.fraction(p(0.0, 0.0, 0.0)), 1.0);
    assert_eq!(y.fraction(p(0.0, 1.0, 0.0)), 0.75);

    let z = GradientFrame::mesh_bounds(bounds, Axis::Z).unwrap();
    assert_eq!(z.fraction(p(0.0, 0.0, 2.0)), 0.75);
}

#[test]
fn mesh_bounds_fraction_is_not_clamped() {
    let bounds = BoundingBox::new(p(0.0, 0.0, 0.0), p(4.0, 1.0, 1.0));
    let frame = GradientFrame::mesh_bounds(bounds, Axis::X).unwrap();

    assert_eq!(frame.fraction(p(-4.0, 0.0, 0.0)), 2.0);
    // Beyond the max side the sign is folded away.
    assert_eq!(frame.fraction(p(6.0, 0.0, 0.0)), 0.5);
}

#[test]
fn flat_bounds_are_rejected_on_the_flat_axis_only() {
    let bounds = BoundingBox::new(p(0.0, 1.0, 0.0), p(3.0, 1.0, 3.0));
    assert_eq!(
        GradientFrame::mesh_bounds(bounds, Axis::Y).unwrap_err(),
        PaintError::DegenerateBounds
    );
    assert!(GradientFrame::mesh_bounds(bounds, Axis::X).is_ok());
}

#[test]
fn distance_dispatches_on_bounds_kind() {
    let refs = [p(0.0, 0.0, 0.0), p(0.0, 0.0, 4.0)];
    let bounds = BoundingBox::new(p(0.0, 0.0, 0.0), p(10.0, 10.0, 10.0));
    let v = p(2.0, 0.0, 1.0);

    let d = distance(v, GradientBounds::PointToPoint, Axis::X, &refs, None).unwrap();
    assert_close(d, 5.0f32.sqrt() / 4.0);

    let d = distance(v, GradientBounds::MeshBounds, Axis::X, &[], Some(&bounds)).unwrap();
    assert_eq!(d, 0.8);

    assert_eq!(
        distance(v, GradientBounds::MeshBounds, Axis::X, &refs, None).unwrap_err(),
        PaintError::DegenerateBounds
    );
    assert_eq!(
        distance(v, GradientBounds::PointToPoint, Axis::X, &refs[..1], Some(&bounds)).unwrap_err(),
        PaintError::InsufficientVertices { selected: 1 }
    );
}

#[test]
fn replace_ignores_the_existing_color() {
    let incoming = Color::new(0.1, 0.2, 0.3, 0.4);
    for existing in [Color::white(), Color::transparent(), Color::new(9.0, -1.0, 0.5, 2.0)] {
        assert_eq!(combine(existing, incoming, BlendMode::Replace), incoming);
    }
}

#[test]
fn add_and_multiply_are_component_wise_and_commutative() {
    let a = Color::new(0.5, 0.25, 1.0, 0.5);
    let b = Color::new(0.25, 0.5, 0.75, 1.0);

    assert_eq!(BlendMode::Add.combine(a, b), Color::new(0.75, 0.75, 1.75, 1.5));
    assert_eq!(BlendMode::Add.combine(a, b), BlendMode::Add.combine(b, a));

    assert_eq!(BlendMode::Multiply.combine(a, b), Color::new(0.125, 0.125, 0.75, 0.5));
    assert_eq!(BlendMode::Multiply.combine(a, b), BlendMode::Multiply.combine(b, a));
}

#[test]
fn shading_combines_gradient_and_blend() {
    let frame = GradientFrame::point_to_point(p(0.0, 0.0, 0.0), p(4.0, 0.0, 0.0)).unwrap();
    let shading = Shading::Gradient {
        frame,
        main: Color::new(0.0, 0.0, 0.0, 1.0),
        sub: Color::new(1.0, 1.0, 1.0, 1.0),
    };

    let existing = Color::new(0.5, 0.5, 0.5, 0.5);
    assert_eq!(
        shading.shade(BlendMode::Multiply, p(1.0, 0.0, 0.0), existing),
        Color::new(0.125, 0.125, 0.125, 0.5)
    );
    assert_eq!(
        Shading::Constant(Color::black()).shade(BlendMode::Add, p(9.0, 9.0, 9.0), existing),
        Color::new(0.5, 0.5, 0.5, 1.5)
    );
}
