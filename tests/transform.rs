use meshbake::math::{
    from_euler, identity_rotation, rotate, uniform_axis, uniform_rotation, Quat, Real, Vec3,
};
use meshbake::Transform;
use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;

/// A [Transform] with position in ±10, scale in [0.25, 4.25), and a unit rotation.
#[derive(Debug, Clone, Copy)]
struct Bounded(Transform);

fn unit(g: &mut Gen) -> Real {
    u16::arbitrary(g) as Real / 65536.0
}

fn coord(g: &mut Gen) -> Real {
    (i16::arbitrary(g) % 1000) as Real / 100.0
}

impl Arbitrary for Bounded {
    fn arbitrary(g: &mut Gen) -> Self {
        let position = Vec3::new(coord(g), coord(g), coord(g));
        let rotation = uniform_rotation(unit(g), unit(g), unit(g));
        let scale = 0.25 + (u16::arbitrary(g) % 1000) as Real / 250.0;
        Self(Transform::new(position, rotation, scale))
    }
}

#[derive(Debug, Clone, Copy)]
struct Direction(Vec3);

impl Arbitrary for Direction {
    fn arbitrary(g: &mut Gen) -> Self {
        Self(uniform_axis(unit(g), unit(g), unit(g)))
    }
}

fn close_vec(a: &Vec3, b: &Vec3, tolerance: Real) -> bool {
    (a - b).norm() <= tolerance * (1.0 + a.norm().max(b.norm()))
}

fn close_quat(a: &Quat, b: &Quat) -> bool {
    (a.coords - b.coords).norm() < 1e-4
}

fn close(a: &Transform, b: &Transform) -> bool {
    close_vec(&a.position, &b.position, 1e-4)
        && close_quat(&a.rotation, &b.rotation)
        && (a.scale - b.scale).abs() <= 1e-5 * a.scale.abs().max(b.scale.abs())
}

#[quickcheck]
fn composition_is_associative(a: Bounded, b: Bounded, c: Bounded) -> bool {
    let (a, b, c) = (a.0, b.0, c.0);
    close(&a.compose(&b).compose(&c), &a.compose(&b.compose(&c)))
}

#[quickcheck]
fn identity_is_a_unit(t: Bounded) -> bool {
    let t = t.0;
    let id = Transform::identity();
    close(&id.compose(&t), &t) && close(&t.compose(&id), &t)
}

#[quickcheck]
fn composed_points_match_nested_points(a: Bounded, b: Bounded, d: Direction) -> bool {
    let (a, b) = (a.0, b.0);
    let p = d.0 * 3.0;
    close_vec(
        &a.compose(&b).transform_point(&p),
        &a.transform_point(&b.transform_point(&p)),
        1e-4,
    )
}

#[quickcheck]
fn normals_keep_unit_length(t: Bounded, n: Direction) -> bool {
    (t.0.transform_normal(&n.0).norm() - 1.0).abs() < 1e-4
}

#[quickcheck]
fn uniform_rotations_are_unit(u: (u16, u16, u16)) -> bool {
    let q = uniform_rotation(
        u.0 as Real / 65536.0,
        u.1 as Real / 65536.0,
        u.2 as Real / 65536.0,
    );
    (q.norm() - 1.0).abs() < 1e-5
}

#[test]
fn identity_rotation_is_a_no_op() {
    let v = Vec3::new(1.0, -2.0, 3.5);
    assert_eq!(rotate(&identity_rotation(), &v), v);
    assert_eq!(Transform::identity().transform_point(&v), v);
}

#[test]
fn euler_round_trip_through_transform() {
    let t = Transform::from_rotation(from_euler(0.0, std::f32::consts::PI, 0.0));
    let p = t.transform_point(&Vec3::x());
    assert!((p + Vec3::x()).norm() < 1e-5);
}
