// Host-side tests for the frame-rate independent smoothing helpers.

use ornament_core::motion::*;

#[test]
fn damp_factor_is_zero_for_degenerate_input() {
    assert_eq!(damp_factor(2.5, 0.0), 0.0);
    assert_eq!(damp_factor(2.5, -1.0), 0.0);
    assert_eq!(damp_factor(0.0, 0.016), 0.0);
}

#[test]
fn damp_factor_never_reaches_one() {
    for dt in [0.001_f32, 0.016, 0.1, 1.0, 10.0] {
        let k = damp_factor(3.0, dt);
        assert!(k > 0.0 && k <= 1.0, "dt={dt} k={k}");
    }
}

#[test]
fn damping_is_frame_rate_independent() {
    // one second at 30 fps vs 120 fps lands on the same value
    let mut a = 0.0_f32;
    for _ in 0..30 {
        a = damp_f32(a, 1.0, 2.5, 1.0 / 30.0);
    }
    let mut b = 0.0_f32;
    for _ in 0..120 {
        b = damp_f32(b, 1.0, 2.5, 1.0 / 120.0);
    }
    assert!((a - b).abs() < 1e-4, "a={a} b={b}");
    assert!((a - (1.0 - (-2.5_f32).exp())).abs() < 1e-4);
}

#[test]
fn damping_never_overshoots_even_with_huge_dt() {
    let mut v = 0.0_f32;
    for _ in 0..10 {
        let next = damp_f32(v, 1.0, 50.0, 5.0);
        assert!(next >= v && next <= 1.0);
        v = next;
    }
    let p = damp_vec3(glam::Vec3::ZERO, glam::Vec3::X, 100.0, 10.0);
    assert!(p.x <= 1.0);
}

#[test]
fn damp_quat_stays_normalized() {
    let a = glam::Quat::IDENTITY;
    let b = glam::Quat::from_rotation_y(2.0);
    let mut q = a;
    for _ in 0..100 {
        q = damp_quat(q, b, 2.5, 0.016);
        assert!((q.length() - 1.0).abs() < 1e-4);
    }
    assert!(q.angle_between(b) < 0.1);
}

#[test]
fn approach_linear_lands_exactly_on_target() {
    assert_eq!(approach_linear(0.9, 1.0, 0.5), 1.0);
    assert_eq!(approach_linear(0.1, 0.0, 0.5), 0.0);
    assert!((approach_linear(0.0, 1.0, 0.25) - 0.25).abs() < 1e-6);
    assert_eq!(approach_linear(0.5, 0.5, 0.1), 0.5);
}

#[test]
fn easing_curves_hit_endpoints_and_clamp() {
    assert_eq!(smoothstep01(0.0), 0.0);
    assert_eq!(smoothstep01(1.0), 1.0);
    assert!((smoothstep01(0.5) - 0.5).abs() < 1e-6);
    assert_eq!(smoothstep01(-3.0), 0.0);
    assert_eq!(ease_out_cubic(0.0), 0.0);
    assert_eq!(ease_out_cubic(1.0), 1.0);
    assert_eq!(ease_out_cubic(2.0), 1.0);
    // front-loaded
    assert!(ease_out_cubic(0.5) > 0.5);
}

#[test]
fn settle_snaps_only_within_epsilon() {
    assert_eq!(settle(0.99995, 1.0), 1.0);
    assert_eq!(settle(0.999, 1.0), 0.999);
    assert_eq!(settle(5e-5, 0.0), 0.0);
}
