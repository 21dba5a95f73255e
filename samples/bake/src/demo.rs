//! A small solar-system-ish scene exercising every generator and a few levels of nesting.

use std::f32::consts::TAU;

use meshbake::{
    math::{random_axis, random_rotation, UniformSource},
    mesh::{self, Color},
    Scene, Transform,
};
use nalgebra::vector;

fn color(r: f32, g: f32, b: f32) -> Color {
    vector![r, g, b]
}

/// Populate `scene` below its root; returns the number of nodes added.
#[tracing::instrument(skip(scene, source))]
pub fn build(
    scene: &mut Scene,
    source: &mut impl UniformSource,
    detail: u32,
) -> Result<usize, meshbake::Error> {
    let before = scene.node_count();

    let floor = scene.add(mesh::plane(20.0, 20.0, color(0.3, 0.3, 0.35)))?;
    scene.set_local_transform(floor, Transform::from_position(vector![0.0, 0.0, -2.0]))?;

    // a tilted box carrying an orbiting moon, which carries a pillar
    let planet = scene.add(mesh::cuboid(2.0, 2.0, 2.0, color(0.8, 0.2, 0.2)))?;
    scene.set_local_transform(planet, Transform::from_rotation(random_rotation(source)))?;

    let moon = scene.insert(mesh::icosphere(0.5, detail, color(0.9, 0.9, 0.8)))?;
    scene.attach(planet, moon)?;
    scene.set_local_transform(moon, Transform::from_position(random_axis(source) * 3.0))?;

    let pillar = scene.insert(mesh::cylinder(
        0.1,
        1.0,
        mesh::CYLINDER_DEFAULT_RESOLUTION,
        color(0.2, 0.8, 0.3),
    )?)?;
    scene.attach(moon, pillar)?;
    scene.set_local_transform(
        pillar,
        Transform::new(vector![0.0, 0.0, 0.75], random_rotation(source), 0.5),
    )?;

    // a ring of globes around everything
    let ring = scene.create_node()?;
    scene.attach(scene.root(), ring)?;
    const GLOBES: u32 = 6;
    for i in 0..GLOBES {
        let (s, c) = (TAU * i as f32 / GLOBES as f32).sin_cos();
        let mut globe = mesh::uv_sphere(0.4, mesh::UV_SPHERE_DEFAULT_RESOLUTION, color(0.2, 0.3, 0.9));
        globe.set_position(vector![c * 6.0, s * 6.0, 0.0]);
        globe.transform_mut().scale = 1.0 + 0.5 * source.uniform();
        let g = scene.insert(globe)?;
        scene.attach(ring, g)?;
    }

    let added = scene.node_count() - before;
    tracing::debug!(added, "built demo scene");
    Ok(added)
}
