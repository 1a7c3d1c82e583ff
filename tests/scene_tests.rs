// Host-side tests for the scene composer and its configuration.

use glam::Vec3;
use ornament_core::*;

const DT: f32 = 1.0 / 60.0;

fn small_config() -> SceneConfig {
    SceneConfig {
        foliage_count: 400,
        box_count: 10,
        ball_count: 10,
        light_count: 10,
        swarm_count: 8,
        ..SceneConfig::default()
    }
}

fn run(scene: &mut Scene, camera: &Camera, from: f64, frames: usize) -> (f64, Vec<GalleryEvent>) {
    let mut events = Vec::new();
    let mut now = from;
    for _ in 0..frames {
        now += DT as f64;
        scene.tick(FrameClock::new(now, DT), camera, &mut events);
    }
    (now, events)
}

#[test]
fn default_config_is_valid() {
    let config = SceneConfig::default();
    assert_eq!(config.validate(), Ok(()));
    assert_eq!(config.foliage_count, FOLIAGE_COUNT);
    assert_eq!(config.origin, tree_origin_vec3());
    assert_eq!(config.click_blur_delay, CLICK_BLUR_DELAY_SECS);
}

fn rejected(config: SceneConfig) -> ConfigError {
    match Scene::new(config) {
        Ok(_) => panic!("config should have been rejected"),
        Err(e) => e,
    }
}

#[test]
fn invalid_configs_are_rejected() {
    let err = rejected(SceneConfig {
        foliage_count: 0,
        ..small_config()
    });
    assert_eq!(err, ConfigError::EmptyFoliage);

    let err = rejected(SceneConfig {
        ball_count: ORNAMENT_MAX_PER_BATCH + 1,
        ..small_config()
    });
    assert!(matches!(
        err,
        ConfigError::OrnamentCountTooLarge { kind: "ball", count: 151, .. }
    ));

    let err = rejected(SceneConfig {
        swarm_count: 0,
        ..small_config()
    });
    assert!(matches!(err, ConfigError::SwarmCount { count: 0, .. }));

    let err = rejected(SceneConfig {
        rates: MotionRates {
            clear: f32::NAN,
            ..MotionRates::default()
        },
        ..small_config()
    });
    assert!(matches!(err, ConfigError::InvalidRate { name: "clear", .. }));

    let err = rejected(SceneConfig {
        rates: MotionRates {
            focus: -1.0,
            ..MotionRates::default()
        },
        ..small_config()
    });
    assert!(matches!(err, ConfigError::InvalidRate { name: "focus", .. }));

    let err = rejected(SceneConfig {
        click_blur_delay: 0.0,
        ..small_config()
    });
    assert_eq!(err, ConfigError::InvalidBlurDelay(0.0));

    let err = rejected(SceneConfig {
        max_frame_dt: -1.0,
        ..small_config()
    });
    assert_eq!(err, ConfigError::InvalidMaxFrameDt(-1.0));

    let err = rejected(SceneConfig {
        origin: Vec3::new(f32::INFINITY, 0.0, 0.0),
        ..small_config()
    });
    assert_eq!(err, ConfigError::InvalidOrigin);
}

#[test]
fn config_errors_render_readable_messages() {
    let msg = ConfigError::OrnamentCountTooLarge {
        kind: "box",
        count: 200,
        max: 150,
    }
    .to_string();
    assert!(msg.contains("box") && msg.contains("200") && msg.contains("150"));
}

#[test]
fn scene_builds_every_component_from_config() {
    let scene = Scene::new(small_config()).expect("valid config");
    assert_eq!(scene.foliage().len(), 400);
    let kinds: Vec<_> = scene.ornaments().iter().map(|b| b.kind()).collect();
    assert_eq!(kinds, OrnamentKind::ALL.to_vec());
    assert_eq!(scene.star().swarm().len(), 8);
    let apex = scene.origin().y + TREE_HEIGHT * 0.5 + STAR_HEIGHT_OFFSET;
    assert!((scene.star().anchor().y - apex).abs() < 1e-5);
    assert!(scene.gallery().is_empty());
    assert_eq!(scene.assembly(), AssemblyState::Chaos);
}

#[test]
fn same_seed_same_scene() {
    let a = Scene::new(small_config()).expect("valid config");
    let b = Scene::new(small_config()).expect("valid config");
    assert_eq!(a.foliage().points(), b.foliage().points());
    let c = Scene::new(SceneConfig {
        seed: 7,
        ..small_config()
    })
    .expect("valid config");
    assert_ne!(a.foliage().points(), c.foliage().points());
}

#[test]
fn single_photo_settles_on_its_spiral_slot_when_formed() {
    let mut scene = Scene::new(small_config()).expect("valid config");
    let camera = Camera::default();
    scene.sync_photos(&[PhotoDescriptor::new("blob:only")]);
    scene.set_assembly(AssemblyState::Formed);
    run(&mut scene, &camera, 0.0, 600);

    let expected = scene.origin()
        + spiral_point(0, 1, PHOTO_SPIRAL_HEIGHT, PHOTO_SPIRAL_RADIUS).position;
    let frame = &scene.gallery().frames()[0];
    assert!((frame.target_position() - expected).length() < 1e-5);
    assert!((frame.rest_position() - expected).length() < 1e-3);
    assert_eq!(scene.foliage().progress(), 1.0);
    assert_eq!(scene.star().progress(), 1.0);
}

#[test]
fn toggling_every_frame_stays_in_range() {
    let mut scene = Scene::new(small_config()).expect("valid config");
    let camera = Camera::default();
    let mut events = Vec::new();
    for i in 0..300 {
        scene.toggle_assembly();
        scene.tick(FrameClock::new(i as f64 * DT as f64, DT), &camera, &mut events);
        let p = scene.foliage().progress();
        assert!((0.0..=1.0).contains(&p));
        let s = scene.star().progress();
        assert!((0.0..=1.0).contains(&s));
    }
    assert!(events.is_empty());
}

#[test]
fn long_frames_are_clamped() {
    let mut scene = Scene::new(small_config()).expect("valid config");
    let camera = Camera::default();
    scene.set_assembly(AssemblyState::Formed);
    let mut events = Vec::new();
    scene.tick(FrameClock::new(5.0, 5.0), &camera, &mut events);
    let expected = 1.0 - (-ASSEMBLY_RATE * MAX_FRAME_DT).exp();
    assert!((scene.foliage().progress() - expected).abs() < 1e-5);
    assert_eq!(scene.elapsed(), 5.0);
}

#[test]
fn toggle_assembly_flips_state() {
    let mut scene = Scene::new(small_config()).expect("valid config");
    assert_eq!(scene.toggle_assembly(), AssemblyState::Formed);
    assert_eq!(scene.toggle_assembly(), AssemblyState::Chaos);
    assert_eq!(AssemblyState::Formed.target(), 1.0);
    assert_eq!(AssemblyState::Chaos.target(), 0.0);
}

#[test]
fn empty_scene_toggling_touches_no_frames() {
    let mut scene = Scene::new(small_config()).expect("valid config");
    let camera = Camera::default();
    scene.set_assembly(AssemblyState::Formed);
    let (_, events) = run(&mut scene, &camera, 0.0, 30);
    assert!(events.is_empty());
    assert!(!scene.is_focused());
    assert_eq!(scene.miss(), None);
}

#[test]
fn clear_flow_through_the_scene() {
    let mut scene = Scene::new(small_config()).expect("valid config");
    let camera = Camera::default();
    scene.sync_photos(&[PhotoDescriptor::new("blob:a"), PhotoDescriptor::new("blob:b")]);
    let id = scene.gallery().frames()[0].id();
    scene.click(id, 0.0);
    assert!(scene.is_focused());

    let ev = scene.set_clearing(true);
    assert_eq!(ev.as_slice(), &[GalleryEvent::Blurred(id)]);
    let (now, events) = run(&mut scene, &camera, 0.0, 300);
    assert_eq!(events, vec![GalleryEvent::ClearComplete]);

    scene.sync_photos(&[]);
    scene.set_clearing(false);
    let (_, events) = run(&mut scene, &camera, now, 10);
    assert!(events.is_empty());
    assert!(scene.gallery().is_empty());
}

#[test]
fn processing_flag_is_informational() {
    let mut scene = Scene::new(small_config()).expect("valid config");
    assert!(!scene.is_processing());
    scene.set_processing(true);
    assert!(scene.is_processing());
}

#[test]
fn camera_extent_is_guarded() {
    let mut camera = Camera::default();
    let (w, h) = camera.visible_extent_at(5.0);
    assert!((w / h - camera.aspect).abs() < 1e-4);
    camera.aspect = 0.0;
    let (w, h) = camera.visible_extent_at(0.0);
    assert!(w > 0.0 && h > 0.0 && w.is_finite());
    let f = Camera::default().forward();
    assert!((f - Vec3::NEG_Z).length() < 1e-5);
}
