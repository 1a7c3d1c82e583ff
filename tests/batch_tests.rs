// Host-side tests for packing scene state into quad instances.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
#[path = "../src/batch.rs"]
mod batch;

use batch::*;
use glam::{Mat4, Vec3};
use ornament_core::*;

fn scene() -> Scene {
    Scene::new(SceneConfig {
        foliage_count: 100,
        ..SceneConfig::default()
    })
    .expect("valid config")
}

fn run(scene: &mut Scene, seconds: f32) {
    let camera = Camera::default();
    let mut events = Vec::new();
    let dt = 1.0 / 60.0;
    let frames = (seconds / dt) as usize;
    for i in 1..=frames {
        scene.tick(FrameClock::new(i as f64 * dt as f64, dt), &camera, &mut events);
    }
}

#[test]
fn instance_layout_is_gpu_friendly() {
    assert_eq!(std::mem::size_of::<InstanceRaw>(), 112);
    assert_eq!(std::mem::size_of::<InstanceRaw>() % 16, 0);
}

#[test]
fn scattered_scene_packs_only_ornaments() {
    let scene = scene();
    let mut out = Vec::new();
    pack_scene(&scene, &mut out);
    let expected = DEFAULT_BOX_COUNT + DEFAULT_BALL_COUNT + DEFAULT_LIGHT_COUNT;
    assert_eq!(out.len(), expected);
    let billboards = out.iter().filter(|i| i.is_billboard()).count();
    assert_eq!(billboards, DEFAULT_BALL_COUNT + DEFAULT_LIGHT_COUNT);
}

#[test]
fn formed_scene_adds_star_and_swarm() {
    let mut scene = scene();
    scene.set_assembly(AssemblyState::Formed);
    run(&mut scene, 3.0);
    let mut out = Vec::new();
    pack_scene(&scene, &mut out);
    let ornaments = DEFAULT_BOX_COUNT + DEFAULT_BALL_COUNT + DEFAULT_LIGHT_COUNT;
    // core + halo, then the swarm
    assert_eq!(out.len(), ornaments + 2 + SWARM_COUNT);
}

#[test]
fn pack_scene_reuses_buffer() {
    let scene = scene();
    let mut out = vec![InstanceRaw::billboard(Vec3::ZERO, 1.0, [1.0; 4]); 5000];
    pack_scene(&scene, &mut out);
    assert_eq!(out.len(), DEFAULT_BOX_COUNT + DEFAULT_BALL_COUNT + DEFAULT_LIGHT_COUNT);
}

#[test]
fn hidden_star_packs_nothing() {
    let scene = scene();
    let mut out = Vec::new();
    pack_star(scene.star(), &mut out);
    pack_swarm(scene.star().swarm(), scene.star().anchor(), &mut out);
    assert!(out.is_empty());
}

#[test]
fn frames_are_sized_by_their_extents() {
    let mut scene = scene();
    scene.sync_photos(&[PhotoDescriptor::new("blob:a").with_frame_height(0.8)]);
    let mut out = Vec::new();
    pack_frames(scene.gallery().frames(), &mut out);
    assert_eq!(out.len(), 1);
    let inst = &out[0];
    assert!(!inst.is_billboard());
    assert_eq!(inst.color, constants::FRAME_FRONT_COLOR);
    assert_eq!(inst.back_color, constants::FRAME_BACK_COLOR);

    let model = Mat4::from_cols_array_2d(&inst.model);
    let (scale, _, translation) = model.to_scale_rotation_translation();
    let frame = &scene.gallery().frames()[0];
    let size = frame.half_extents() * 2.0;
    assert!((scale.x - size.x).abs() < 1e-4);
    assert!((scale.y - size.y).abs() < 1e-4);
    assert!((translation - frame.pose().position).length() < 1e-4);
}

#[test]
fn cleared_frames_are_skipped() {
    let mut scene = scene();
    scene.sync_photos(&[PhotoDescriptor::new("blob:a"), PhotoDescriptor::new("blob:b")]);
    scene.set_clearing(true);
    run(&mut scene, 5.0);
    let mut out = Vec::new();
    pack_frames(scene.gallery().frames(), &mut out);
    assert!(out.is_empty());
}

#[test]
fn billboards_carry_their_size_in_the_model() {
    let inst = InstanceRaw::billboard(Vec3::new(1.0, 2.0, 3.0), 0.5, [1.0, 0.0, 0.0, 1.0]);
    assert!(inst.is_billboard());
    assert_eq!(inst.params[1], FLAG_DISC);
    let m = Mat4::from_cols_array_2d(&inst.model);
    assert!((m.x_axis.truncate().length() - 0.5).abs() < 1e-6);
    assert_eq!(m.w_axis.truncate(), Vec3::new(1.0, 2.0, 3.0));
}
