use std::f32::consts::FRAC_PI_2;

use meshbake::{
    math::{from_euler, Vec3},
    mesh::{self, Color, Mesh},
    scene::Error,
    BakeConfig, Scene, Transform,
};

fn color(r: f32, g: f32, b: f32) -> Color {
    Vec3::new(r, g, b)
}

/// A one-triangle mesh with its first vertex at the origin.
fn marker(c: Color) -> Mesh {
    let mut m = mesh::plane(2.0, 2.0, c);
    for v in m.vertices_mut() {
        v.position += Vec3::new(1.0, 1.0, 0.0);
    }
    Mesh::from_vertices(m.vertices()[..3].to_vec())
}

/// Build `root → n₁ → … → n_len`, returning the deepest node.
fn chain(scene: &mut Scene, len: usize) -> u32 {
    let mut parent = scene.root();
    for _ in 0..len {
        let n = scene.insert(marker(color(1.0, 1.0, 1.0))).unwrap();
        scene.attach(parent, n).unwrap();
        parent = n;
    }
    parent
}

#[test]
fn translations_accumulate() {
    let mut scene = Scene::<u32>::new();
    let a = scene.add(Mesh::empty()).unwrap();
    let b = scene.insert(marker(color(0.0, 1.0, 0.0))).unwrap();
    scene.attach(a, b).unwrap();
    scene
        .set_local_transform(a, Transform::from_position(Vec3::new(1.0, 0.0, 0.0)))
        .unwrap();
    scene
        .set_local_transform(b, Transform::from_position(Vec3::new(0.0, 1.0, 0.0)))
        .unwrap();

    let out = scene.bake().unwrap();
    assert_eq!(out.len(), 3);
    assert_eq!(out[0].position, Vec3::new(1.0, 1.0, 0.0));
    assert_eq!(out[0].normal, Vec3::z());
    assert_eq!(out[0].color, color(0.0, 1.0, 0.0));
}

#[test]
fn rotation_and_scale_apply_to_children() {
    let mut scene = Scene::<u32>::new();
    let a = scene.add(Mesh::empty()).unwrap();
    let b = scene.insert(mesh::plane(1.0, 1.0, color(0.5, 0.5, 0.5))).unwrap();
    scene.attach(a, b).unwrap();
    // a quarter turn about X takes +Z to -Y
    scene
        .set_local_transform(
            a,
            Transform::new(Vec3::zeros(), from_euler(FRAC_PI_2, 0.0, 0.0), 2.0),
        )
        .unwrap();
    scene
        .set_local_transform(b, Transform::from_position(Vec3::new(0.0, 0.0, 1.0)))
        .unwrap();

    for v in scene.bake().unwrap() {
        assert!((v.normal + Vec3::y()).norm() < 1e-5);
        assert!((v.position.y + 2.0).abs() < 1e-5, "{v:?}");
        assert!((v.position.x.abs() - 1.0).abs() < 1e-5);
        assert_eq!(v.color, color(0.5, 0.5, 0.5));
    }
}

#[test]
fn siblings_bake_newest_first() {
    let mut scene = Scene::<u32>::new();
    let a = scene.add(marker(color(1.0, 0.0, 0.0))).unwrap();
    let b = scene.add(marker(color(0.0, 0.0, 1.0))).unwrap();
    let a1 = scene.insert(marker(color(0.1, 0.0, 0.0))).unwrap();
    let a2 = scene.insert(marker(color(0.2, 0.0, 0.0))).unwrap();
    scene.attach(a, a1).unwrap();
    scene.attach(a, a2).unwrap();

    assert_eq!(scene.children(scene.root()).unwrap().collect::<Vec<_>>(), vec![b, a]);
    assert_eq!(scene.children(a).unwrap().collect::<Vec<_>>(), vec![a2, a1]);
    assert_eq!(scene.parent(a2), Ok(Some(a)));

    let order: Vec<_> = scene.traverse().collect::<Result<_, _>>().unwrap();
    assert_eq!(order, vec![b, a, a2, a1]);

    let colors: Vec<_> = scene
        .bake()
        .unwrap()
        .chunks_exact(3)
        .map(|tri| tri[0].color)
        .collect();
    assert_eq!(
        colors,
        vec![
            color(0.0, 0.0, 1.0),
            color(1.0, 0.0, 0.0),
            color(0.2, 0.0, 0.0),
            color(0.1, 0.0, 0.0),
        ]
    );
}

#[test]
fn double_attach_is_rejected() {
    let mut scene = Scene::<u32>::new();
    let p = scene.add(Mesh::empty()).unwrap();
    let q = scene.add(Mesh::empty()).unwrap();
    let x = scene.create_node().unwrap();
    scene.attach(p, x).unwrap();
    assert_eq!(
        scene.attach(q, x),
        Err(Error::AlreadyAttached { child: x, parent: p })
    );
    assert_eq!(
        scene.attach(p, x),
        Err(Error::AlreadyAttached { child: x, parent: p })
    );
    assert_eq!(scene.children(q).unwrap().count(), 0);
    assert_eq!(scene.children(p).unwrap().collect::<Vec<_>>(), vec![x]);
}

#[test]
fn depth_limit() {
    let mut scene = Scene::<u32>::new();
    chain(&mut scene, 5);

    let shallow = BakeConfig { max_depth: 4 };
    assert_eq!(
        scene.bake_with(&shallow),
        Err(Error::TraversalDepthExceeded(4))
    );
    let results: Vec<_> = scene.traverse_with(&shallow).collect();
    assert_eq!(results.len(), 5);
    assert_eq!(results.last(), Some(&Err(Error::TraversalDepthExceeded(4))));

    let exact = BakeConfig { max_depth: 5 };
    assert_eq!(scene.bake_with(&exact).unwrap().len(), 5 * 3);
}

#[test]
fn deep_chains_use_the_default_limit() {
    let mut scene = Scene::<u32>::new();
    let deepest = chain(&mut scene, meshbake::scene::DEFAULT_MAX_DEPTH);
    assert_eq!(
        scene.bake().unwrap().len(),
        meshbake::scene::DEFAULT_MAX_DEPTH * 3
    );

    let extra = scene.create_node().unwrap();
    scene.attach(deepest, extra).unwrap();
    assert_eq!(
        scene.bake(),
        Err(Error::TraversalDepthExceeded(meshbake::scene::DEFAULT_MAX_DEPTH))
    );
}

#[test]
fn byte_round_trip_is_exact() {
    let mut scene = Scene::<u32>::new();
    let src = mesh::uv_sphere(1.5, 16, color(0.25, 0.5, 1.0));
    scene.add(src.clone()).unwrap();

    let bytes = scene.bake_bytes().unwrap();
    assert_eq!(bytes.len(), src.vertex_count() * mesh::VERTEX_SIZE);
    assert_eq!(bytes, mesh::to_bytes(&scene.bake().unwrap()));
    let back = Mesh::from_bytes(&bytes).unwrap();
    assert_eq!(back.vertices(), src.vertices());
}

#[test]
fn root_and_detached_nodes_contribute_nothing() {
    let mut scene = Scene::<u32>::new();
    assert!(scene.bake().unwrap().is_empty());
    assert!(scene.bake_bytes().unwrap().is_empty());

    // a detached subtree is never reached
    let loose = scene.insert(mesh::cuboid(1.0, 1.0, 1.0, color(1.0, 0.0, 0.0))).unwrap();
    let loose_child = scene.insert(marker(color(1.0, 0.0, 0.0))).unwrap();
    scene.attach(loose, loose_child).unwrap();
    let kept = scene.add(marker(color(0.0, 1.0, 0.0))).unwrap();

    let out = scene.bake().unwrap();
    assert_eq!(out.len(), 3);
    assert!(out.iter().all(|v| v.color == color(0.0, 1.0, 0.0)));
    assert!(scene.cached_world_transform(kept).unwrap().is_some());
    assert_eq!(scene.cached_world_transform(loose_child), Ok(None));
    // but its uncached world transform is still defined
    assert_eq!(
        scene.world_transform(loose_child),
        Ok(Transform::identity())
    );
}

#[test]
fn mesh_edits_show_up_in_the_next_bake() {
    let mut scene = Scene::<u32>::new();
    let n = scene.add(mesh::plane(1.0, 1.0, color(1.0, 1.0, 1.0))).unwrap();
    scene.bake().unwrap();

    let m = scene.mesh_mut(n).unwrap();
    m.paint(color(0.0, 0.0, 0.0));
    m.set_position(Vec3::new(0.0, 0.0, 5.0));
    assert_eq!(scene.mesh(n).unwrap().position(), Vec3::new(0.0, 0.0, 5.0));
    assert_eq!(scene.local_transform(n).unwrap().position, Vec3::new(0.0, 0.0, 5.0));

    for v in scene.bake().unwrap() {
        assert_eq!(v.position.z, 5.0);
        assert_eq!(v.color, color(0.0, 0.0, 0.0));
    }
}
