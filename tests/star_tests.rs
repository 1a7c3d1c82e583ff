// Host-side tests for the star centerpiece and its orbiting swarm.

use glam::Vec3;
use ornament_core::*;
use ornament_core::motion::smoothstep01;
use rand::prelude::*;

const DT: f32 = 0.1;

fn star() -> StarCenterpiece {
    StarCenterpiece::new(
        &mut StdRng::seed_from_u64(3),
        Vec3::new(0.0, 5.6, 0.0),
        SWARM_COUNT,
        1.0 / STAR_TRANSITION_SECS,
    )
}

#[test]
fn star_starts_hidden() {
    let s = star();
    assert_eq!(s.progress(), 0.0);
    assert!(!s.visual().visible);
    assert!(!s.swarm().visible());
}

#[test]
fn star_forms_linearly_over_transition_time() {
    let mut s = star();
    s.update(AssemblyState::Formed, 0.0, DT);
    let expected = DT / STAR_TRANSITION_SECS;
    assert!((s.progress() - expected).abs() < 1e-5);
    // the point light follows the raw progress
    assert!((s.visual().light_intensity - STAR_LIGHT_INTENSITY * expected).abs() < 1e-5);
    // visuals follow the smoothstepped value
    assert!((s.visual().opacity - smoothstep01(expected)).abs() < 1e-5);

    for i in 1..30 {
        s.update(AssemblyState::Formed, i as f32 * DT, DT);
    }
    let v = s.visual();
    assert_eq!(s.progress(), 1.0);
    assert!(v.visible);
    assert!((v.opacity - 1.0).abs() < 1e-6);
    assert!((v.emissive_intensity - STAR_EMISSIVE_GAIN).abs() < 1e-6);
    assert!((v.scale - (STAR_SCALE_DISPERSED - STAR_SCALE_SHRINK)).abs() < 1e-6);
    assert!((v.light_intensity - STAR_LIGHT_INTENSITY).abs() < 1e-6);
    assert!(s.swarm().visible());
    assert!((s.swarm().opacity() - 1.0).abs() < 1e-6);
}

#[test]
fn star_bobs_around_anchor_and_spins() {
    let mut s = star();
    let mut max_bob = 0.0_f32;
    let mut last_yaw = 0.0;
    for i in 0..60 {
        s.update(AssemblyState::Formed, i as f32 * DT, DT);
        let v = s.visual();
        max_bob = max_bob.max(v.bob_offset.abs());
        assert!((v.position - (s.anchor() + Vec3::Y * v.bob_offset)).length() < 1e-6);
        last_yaw = v.yaw;
    }
    assert!(max_bob <= STAR_BOB_AMPLITUDE + 1e-6);
    assert!(max_bob > 0.0);
    assert!(last_yaw > 0.0);
}

#[test]
fn star_disperses_back_to_hidden() {
    let mut s = star();
    for i in 0..30 {
        s.update(AssemblyState::Formed, i as f32 * DT, DT);
    }
    for i in 30..60 {
        s.update(AssemblyState::Chaos, i as f32 * DT, DT);
    }
    let v = s.visual();
    assert_eq!(s.progress(), 0.0);
    assert!(!v.visible);
    assert_eq!(v.light_intensity, 0.0);
    assert_eq!(v.scale, STAR_SCALE_DISPERSED);
    assert!(!s.swarm().visible());
}

#[test]
fn swarm_orbits_stay_within_bounds() {
    let mut rng = StdRng::seed_from_u64(8);
    let mut swarm = ChaoticSwarm::new(&mut rng, 200);
    swarm.set_opacity(1.0);
    // each axis is a unit sinusoid scaled by the particle's radius
    let radius = swarm
        .particles()
        .iter()
        .map(|p| p.radius)
        .fold(0.0_f32, f32::max)
        * 3.0_f32.sqrt();
    assert!(radius <= SWARM_RADIUS_MAX * 3.0_f32.sqrt());
    for step in 0..100 {
        swarm.update(step as f32 * 0.37);
        for p in swarm.positions() {
            assert!(p.length() <= radius + 1e-4);
        }
    }
}

#[test]
fn swarm_skips_updates_while_invisible() {
    let mut swarm = ChaoticSwarm::new(&mut StdRng::seed_from_u64(4), 16);
    let before = swarm.positions().to_vec();
    swarm.update(5.0);
    assert_eq!(swarm.positions(), &before[..]);
    swarm.set_opacity(0.5);
    swarm.update(5.0);
    assert_ne!(swarm.positions(), &before[..]);
}

#[test]
fn swarm_opacity_is_clamped() {
    let mut swarm = ChaoticSwarm::new(&mut StdRng::seed_from_u64(4), 4);
    swarm.set_opacity(3.0);
    assert_eq!(swarm.opacity(), 1.0);
    swarm.set_opacity(-1.0);
    assert_eq!(swarm.opacity(), 0.0);
    assert!(!swarm.visible());
}

#[test]
fn swarm_particle_orbit_is_closed_form() {
    let p = SwarmParticle {
        radius: 2.0,
        speed: 1.0,
        frequency: Vec3::new(1.0, 1.5, 2.0),
        phase: Vec3::ZERO,
        color: [1.0, 1.0, 1.0],
    };
    assert_eq!(p.position_at(0.0), Vec3::ZERO);
    let t: f32 = 0.7;
    let expected = Vec3::new((1.0 * t).sin(), (1.5 * t).sin(), (2.0 * t).sin()) * 2.0;
    assert!((p.position_at(t) - expected).length() < 1e-6);
}
