use super::*;

#[test]
fn same_seed_same_params() {
    let a = randomize(&mut Rng64::new(1234));
    let b = randomize(&mut Rng64::new(1234));
    assert_eq!(a, b);
}

#[test]
fn randomized_params_always_validate() {
    let mut rng = Rng64::new(9);
    for _ in 0..500 {
        let p = randomize(&mut rng);
        p.validate().unwrap();
        assert!(BACKGROUND_SWATCHES.contains(&p.canvas_color));
        assert!(FOREGROUND_SWATCHES.contains(&p.border_color));
        assert!((20.0..=60.0).contains(&p.border_width));
        assert!((10.0..=25.0).contains(&p.element_size));
        assert!((2.0..=10.0).contains(&p.element_spacing));
        assert!((1..=3).contains(&p.border_layers));
        assert_eq!(p.animation, AnimationFlags::default());
    }
}

#[test]
fn bernoulli_draws_are_roughly_calibrated() {
    let mut rng = Rng64::new(77);
    let n = 4000;
    let mut flips = 0;
    let mut inverts = 0;
    for _ in 0..n {
        let p = randomize(&mut rng);
        flips += usize::from(p.flip_orientation);
        inverts += usize::from(p.invert_colors);
    }
    let flip_rate = flips as f64 / n as f64;
    let invert_rate = inverts as f64 / n as f64;
    assert!((flip_rate - 0.5).abs() < 0.05, "flip rate {flip_rate}");
    assert!((invert_rate - 0.3).abs() < 0.05, "invert rate {invert_rate}");
}

#[test]
fn every_style_is_reachable() {
    let mut rng = Rng64::new(3);
    let mut seen = std::collections::HashSet::new();
    for _ in 0..2000 {
        seen.insert(randomize(&mut rng).style);
    }
    assert_eq!(seen.len(), MotifStyle::ALL.len());
}
