// Host-side tests for the frame driver: control, resize and determinism.

use starfield_core::*;

fn params(star_count: usize) -> StarfieldParams {
    StarfieldParams {
        star_count,
        ..StarfieldParams::default()
    }
}

fn inputs(viewport: Viewport, frame: u64, pointer_x: f32) -> FrameInputs {
    FrameInputs {
        viewport,
        frame_index: frame,
        now_ms: frame as f64 * 1000.0 / 60.0,
        pointer_x,
    }
}

#[test]
fn default_params_match_palette_and_pool() {
    let p = StarfieldParams::default();
    assert_eq!(p.star_count, TARGET_STARS);
    assert_eq!(p.star_color, Rgb::from_hex("#DFDCE1").unwrap());
    assert!(p.validate().is_ok());
}

#[test]
fn invalid_params_are_rejected() {
    let bad_octaves = StarfieldParams {
        noise_octaves: 0,
        ..params(10)
    };
    assert!(matches!(
        Starfield::new(bad_octaves, Viewport::new(10.0, 10.0), 0.0),
        Err(ParamsError::Octaves { got: 0, .. })
    ));

    let bad_persistence = StarfieldParams {
        noise_persistence: f64::NAN,
        ..params(10)
    };
    assert!(matches!(
        bad_persistence.validate(),
        Err(ParamsError::Persistence(_))
    ));
}

#[test]
fn size_and_orientation_invariants_hold_over_many_frames() {
    let vp = Viewport::new(800.0, 600.0);
    let mut sf = Starfield::new(params(300), vp, 0.0).unwrap();
    for frame in 1..=450 {
        sf.frame(inputs(vp, frame, 0.0));
        for p in sf.particles() {
            assert!((SIZE_BASE_MIN..=SIZE_BASE_MAX).contains(&p.size_base));
            assert!((p.cos_a * p.cos_a + p.sin_a * p.sin_a - 1.0).abs() < 1e-5);
            assert!(p.pos.x.is_finite() && p.pos.y.is_finite());
        }
    }
    assert_eq!(sf.particles().len(), 300);
    assert!(sf.control().sweep_done());
}

#[test]
fn same_seed_gives_same_geometry() {
    let vp = Viewport::new(640.0, 480.0);
    let mut a = Starfield::new(params(200), vp, 0.0).unwrap();
    let mut b = Starfield::new(params(200), vp, 0.0).unwrap();
    for frame in 1..=60 {
        let va = a.frame(inputs(vp, frame, 100.0)).to_vec();
        let vb = b.frame(inputs(vp, frame, 100.0)).to_vec();
        assert_eq!(va, vb);
    }
}

#[test]
fn mouse_latch_switches_to_pointer_mid_sweep() {
    let vp = Viewport::new(1000.0, 800.0);
    let mut sf = Starfield::new(params(10), vp, 0.0).unwrap();
    sf.frame(inputs(vp, 240, 77.0));
    assert!((sf.control().influence() - 500.0).abs() < 1e-3);

    assert!(sf.on_pointer_move(PointerKind::Mouse));
    sf.frame(inputs(vp, 241, 77.0));
    assert_eq!(sf.control().influence(), 77.0);
    assert!(!sf.on_pointer_move(PointerKind::Mouse));
}

#[test]
fn touch_first_keeps_sweep_even_after_mouse() {
    let vp = Viewport::new(1000.0, 800.0);
    let mut sf = Starfield::new(params(10), vp, 0.0).unwrap();
    sf.frame(inputs(vp, 240, 77.0));

    assert!(!sf.on_pointer_move(PointerKind::Touch));
    assert!(!sf.on_pointer_move(PointerKind::Mouse));
    assert!(sf.control().sweep_enabled());
    sf.frame(inputs(vp, 300, 77.0));
    // 5000 ms into the sweep: t = 2/3.
    let t: f32 = 4.0 / 6.0;
    let expected = t * t * (3.0 - 2.0 * t) * 1000.0;
    assert!((sf.control().influence() - expected).abs() < 1e-2);
}

#[test]
fn resize_rebakes_background_but_keeps_positions() {
    let vp = Viewport::new(320.0, 240.0);
    let mut sf = Starfield::new(params(50), vp, 0.0).unwrap();
    assert_eq!((sf.background().width, sf.background().height), (320, 240));

    let before = sf.particles().iter().map(|p| p.pos).collect::<Vec<_>>();
    let smaller = Viewport::new(160.0, 120.0);
    sf.resize(smaller);
    let after = sf.particles().iter().map(|p| p.pos).collect::<Vec<_>>();
    assert_eq!(before, after);
    assert_eq!(sf.viewport(), smaller);
    assert_eq!((sf.background().width, sf.background().height), (160, 120));

    // A changed viewport in the frame inputs triggers the same rebake.
    sf.frame(inputs(Viewport::new(200.0, 100.0), 1, 0.0));
    assert_eq!((sf.background().width, sf.background().height), (200, 100));
}

#[test]
fn zero_stars_and_zero_viewport_are_valid() {
    let mut empty = Starfield::new(params(0), Viewport::new(500.0, 500.0), 0.0).unwrap();
    assert!(empty.frame(inputs(Viewport::new(500.0, 500.0), 1, 0.0)).is_empty());

    let vp = Viewport::new(0.0, 0.0);
    let mut flat = Starfield::new(params(20), vp, 0.0).unwrap();
    for frame in 1..=20 {
        flat.frame(inputs(vp, frame, 0.0));
    }
    assert!(flat.background().rgba.is_empty());
}

#[test]
fn star_color_is_opaque() {
    let sf = Starfield::new(params(1), Viewport::new(10.0, 10.0), 0.0).unwrap();
    let c = sf.star_color();
    assert_eq!(c[3], 1.0);
    assert!((c[0] - 0xDF as f32 / 255.0).abs() < 1e-6);
}
