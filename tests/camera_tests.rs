// Host-side tests for the orbit camera and screen-space picking rays.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod camera {
    include!("../src/camera.rs");
}

use camera::*;
use constants::*;
use glam::Vec3;

#[test]
fn orbit_eye_sits_at_distance_from_target() {
    let target = Vec3::new(0.0, -1.0, 0.0);
    let mut orbit = OrbitCamera::new(target);
    assert!((orbit.eye().distance(target) - CAMERA_DISTANCE).abs() < 1e-4);
    orbit.drag(120.0, -40.0);
    assert!((orbit.eye().distance(target) - CAMERA_DISTANCE).abs() < 1e-4);
}

#[test]
fn auto_rotate_is_suspended_on_request() {
    let mut orbit = OrbitCamera::new(Vec3::ZERO);
    orbit.update(1.0, true);
    assert_eq!(orbit.yaw, 0.0);
    orbit.update(1.0, false);
    assert!((orbit.yaw - AUTO_ROTATE_SPEED).abs() < 1e-6);
}

#[test]
fn drag_clamps_pitch() {
    let mut orbit = OrbitCamera::new(Vec3::ZERO);
    orbit.drag(0.0, 10_000.0);
    assert_eq!(orbit.pitch, CAMERA_PITCH_LIMIT);
    orbit.drag(0.0, -100_000.0);
    assert_eq!(orbit.pitch, -CAMERA_PITCH_LIMIT);
}

#[test]
fn camera_looks_at_target() {
    let target = Vec3::new(0.0, 1.0, 0.0);
    let orbit = OrbitCamera::new(target);
    let cam = orbit.camera(1.5);
    assert_eq!(cam.eye, orbit.eye());
    let toward = (target - cam.eye).normalize();
    assert!(cam.forward().dot(toward) > 0.9999);
    assert_eq!(cam.aspect, 1.5);
}

#[test]
fn center_ray_follows_forward() {
    let cam = OrbitCamera::new(Vec3::ZERO).camera(800.0 / 600.0);
    let (ro, rd) = screen_to_world_ray(&cam, 800.0, 600.0, 400.0, 300.0);
    assert_eq!(ro, cam.eye);
    assert!(rd.dot(cam.forward()) > 0.9999);
}

#[test]
fn edge_rays_diverge_sideways() {
    let cam = OrbitCamera::new(Vec3::ZERO).camera(1.0);
    let right = cam.orientation * Vec3::X;
    let (_, left_rd) = screen_to_world_ray(&cam, 600.0, 600.0, 0.0, 300.0);
    let (_, right_rd) = screen_to_world_ray(&cam, 600.0, 600.0, 600.0, 300.0);
    assert!(left_rd.dot(right) < 0.0);
    assert!(right_rd.dot(right) > 0.0);
    assert!((left_rd.length() - 1.0).abs() < 1e-5);
}
