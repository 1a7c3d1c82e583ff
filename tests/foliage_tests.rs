// Host-side tests for the foliage particle field.

use glam::Vec3;
use ornament_core::*;
use rand::prelude::*;

const DT: f32 = 1.0 / 60.0;

fn field(count: usize) -> FoliageField {
    FoliageField::new(&mut StdRng::seed_from_u64(1), count, ASSEMBLY_RATE)
}

#[test]
fn points_are_generated_within_their_shapes() {
    let f = field(2000);
    assert_eq!(f.len(), 2000);
    for p in f.points() {
        assert!(Vec3::from(p.chaos).length() <= FOLIAGE_CHAOS_RADIUS + 1e-4);
        let t = Vec3::from(p.target);
        assert!(t.y >= -TREE_HEIGHT * 0.5 - 1e-4 && t.y <= TREE_HEIGHT * 0.5 + 1e-4);
        assert!(p.color[3] > 0.0);
    }
}

#[test]
fn palette_weights_are_roughly_respected() {
    let f = field(10_000);
    let accent = f
        .points()
        .iter()
        .filter(|p| p.color[..3] == FOLIAGE_ACCENT[..])
        .count() as f32
        / 10_000.0;
    assert!((accent - 0.08).abs() < 0.02, "accent share {accent}");
}

#[test]
fn shade_choice_thresholds() {
    assert_eq!(FoliageShade::from_choice(0.95), FoliageShade::Accent);
    assert_eq!(FoliageShade::from_choice(0.5), FoliageShade::Secondary);
    assert_eq!(FoliageShade::from_choice(0.1), FoliageShade::Primary);
}

#[test]
fn progress_converges_and_snaps_when_formed() {
    let mut f = field(100);
    assert_eq!(f.progress(), 0.0);
    let mut prev = 0.0;
    for _ in 0..600 {
        f.update(AssemblyState::Formed, DT);
        assert!(f.progress() >= prev && f.progress() <= 1.0);
        prev = f.progress();
    }
    assert_eq!(f.progress(), 1.0);
    for _ in 0..600 {
        f.update(AssemblyState::Chaos, DT);
    }
    assert_eq!(f.progress(), 0.0);
}

#[test]
fn drift_vanishes_once_formed() {
    assert_eq!(foliage_drift(3.0, 12.5, 1.0), Vec3::ZERO);
    let d = foliage_drift(3.0, 12.5, 0.0);
    assert!(d.length() > 0.0);
    assert!(d.abs().max_element() <= FOLIAGE_DRIFT_AMPLITUDE + 1e-6);

    let mut f = field(500);
    for _ in 0..600 {
        f.update(AssemblyState::Formed, DT);
    }
    let mut out = Vec::new();
    f.evaluate_into(&mut out);
    assert_eq!(out.len(), 500);
    for (pos, p) in out.iter().zip(f.points()) {
        assert!((*pos - Vec3::from(p.target)).length() < 1e-4);
    }
}

#[test]
fn chaos_state_evaluates_to_chaos_plus_drift() {
    let mut f = field(50);
    f.update(AssemblyState::Chaos, 0.5);
    let mut out = Vec::new();
    f.evaluate_into(&mut out);
    let u = f.uniforms();
    for (pos, p) in out.iter().zip(f.points()) {
        let expected = Vec3::from(p.chaos) + foliage_drift(p.phase, u.time, 0.0);
        assert!((*pos - expected).length() < 1e-5);
    }
}

#[test]
fn uniforms_carry_progress_and_time() {
    let mut f = field(10);
    f.update(AssemblyState::Formed, 0.05);
    f.update(AssemblyState::Formed, 0.05);
    let u = f.uniforms();
    assert!((u.time - 0.1).abs() < 1e-6);
    assert_eq!(u.progress, f.progress());
    assert_eq!(u.drift_amplitude, FOLIAGE_DRIFT_AMPLITUDE);
    assert_eq!(u.drift_frequency, FOLIAGE_DRIFT_FREQUENCY);
    assert_eq!(std::mem::size_of::<FoliagePoint>(), 48);
    assert_eq!(std::mem::size_of::<FoliageUniforms>(), 16);
}
