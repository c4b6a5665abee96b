use super::*;

fn animated(size: bool, spacing: bool, layers: bool) -> BorderStyleParams {
    let mut p = BorderStyleParams::default();
    p.animation.size = size;
    p.animation.spacing = spacing;
    p.animation.layers = layers;
    p
}

#[test]
fn progress_follows_a_sine_over_the_period() {
    let osc = Oscillation::starting_at(1_000);
    assert!((osc.progress(1_000) - 0.5).abs() < 1e-12);
    assert!((osc.progress(1_500) - 1.0).abs() < 1e-12);
    assert!((osc.progress(2_500) - 0.0).abs() < 1e-12);
    assert!((osc.progress(3_000) - 0.5).abs() < 1e-12);
    // Before the anchor the sweep holds at its start.
    assert!((osc.progress(0) - 0.5).abs() < 1e-12);
}

#[test]
fn size_and_spacing_stay_in_their_sweeps() {
    let osc = Oscillation::starting_at(0);
    let mut p = animated(true, true, false);
    for t in (0..4_000).step_by(37) {
        assert!(osc.apply(&mut p, t));
        assert!((10.0..=120.0).contains(&p.element_size));
        assert!((10.0..=100.0).contains(&p.element_spacing));
        p.validate().unwrap();
    }
}

#[test]
fn peak_hits_the_upper_bounds() {
    let osc = Oscillation::starting_at(0);
    let mut p = animated(true, true, true);
    osc.apply(&mut p, 500);
    assert!((p.element_size - 120.0).abs() < 1e-9);
    assert!((p.element_spacing - 100.0).abs() < 1e-9);
    assert_eq!(p.border_layers, 10);

    osc.apply(&mut p, 1_500);
    assert!((p.element_size - 10.0).abs() < 1e-9);
    assert_eq!(p.border_layers, 1);
}

#[test]
fn disabled_flags_leave_params_untouched() {
    let osc = Oscillation::starting_at(0);
    let mut p = animated(false, false, false);
    let before = p.clone();
    assert!(!osc.apply(&mut p, 500));
    assert_eq!(p, before);

    let mut only_layers = animated(false, false, true);
    osc.apply(&mut only_layers, 500);
    assert_eq!(only_layers.element_size, before.element_size);
    assert_eq!(only_layers.element_spacing, before.element_spacing);
}
