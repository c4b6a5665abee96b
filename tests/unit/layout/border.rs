use super::*;

fn inputs(border_width: f64, size: f64, spacing: f64, layers: u32) -> LayoutInputs {
    LayoutInputs {
        border_width,
        element_size: size,
        element_spacing: spacing,
        border_layers: layers,
        scale: 1.0,
        scroll: None,
    }
}

fn canvas(width: u32, height: u32) -> CanvasGeometry {
    CanvasGeometry { width, height }
}

fn counts(layout: &BorderLayout, layer: u32) -> [usize; 4] {
    Edge::ORDER.map(|e| layout.on_edge(layer, e).count())
}

#[test]
fn widescreen_example_places_nineteen_on_top() {
    let layout = layout_border(canvas(800, 450), &inputs(30.0, 20.0, 20.0, 1));
    assert_eq!(counts(&layout, 0), [19, 10, 19, 10]);

    let summary = layout.layers[0];
    assert_eq!(summary.budget, 63);
    assert!(!summary.truncated());
    assert_eq!(layout.placements.len(), 58);
}

#[test]
fn top_edge_walks_left_to_right_from_the_inset() {
    let layout = layout_border(canvas(800, 450), &inputs(30.0, 20.0, 20.0, 1));
    let xs: Vec<i32> = layout.on_edge(0, Edge::Top).map(|p| p.x).collect();
    assert_eq!(xs.first(), Some(&30));
    assert_eq!(xs.get(1), Some(&70));
    assert!(layout.on_edge(0, Edge::Top).all(|p| p.y == 30));

    let right: Vec<(i32, i32)> = layout.on_edge(0, Edge::Right).map(|p| (p.x, p.y)).collect();
    assert_eq!(right[0], (770, 30));

    let bottom: Vec<(i32, i32)> = layout.on_edge(0, Edge::Bottom).map(|p| (p.x, p.y)).collect();
    assert_eq!(bottom[0], (770, 420));
    assert_eq!(bottom[1], (730, 420));

    let left: Vec<(i32, i32)> = layout.on_edge(0, Edge::Left).map(|p| (p.x, p.y)).collect();
    assert_eq!(left[0], (30, 420));
}

#[test]
fn edge_rotations_point_outward() {
    let layout = layout_border(canvas(400, 400), &inputs(30.0, 20.0, 20.0, 1));
    for p in &layout.placements {
        assert_eq!(p.rotation, p.edge.base_rotation());
    }
    assert_eq!(Edge::Top.base_rotation(), 0.0);
    assert_eq!(Edge::Bottom.base_rotation(), PI);
}

#[test]
fn each_extra_layer_is_one_ring_further_in() {
    let one = layout_border(canvas(800, 450), &inputs(30.0, 20.0, 20.0, 1));
    let three = layout_border(canvas(800, 450), &inputs(30.0, 20.0, 20.0, 3));

    assert_eq!(three.layers.len(), 3);
    assert_eq!(three.layers[0], one.layers[0]);
    for pair in three.layers.windows(2) {
        assert_eq!(pair[1].border_pos - pair[0].border_pos, 40.0);
    }
    let first_top_of_ring_2 = three.on_edge(2, Edge::Top).next().unwrap();
    assert_eq!((first_top_of_ring_2.x, first_top_of_ring_2.y), (110, 110));
}

#[test]
fn per_edge_count_is_ceil_of_usable_length() {
    for (w, h, bw, size, spacing) in [
        (640u32, 480u32, 25.0, 14.0, 6.0),
        (300, 900, 40.0, 30.0, 12.0),
        (1024, 1024, 5.0, 10.0, 10.0),
    ] {
        let layout = layout_border(canvas(w, h), &inputs(bw, size, spacing, 1));
        let step = size + spacing;
        let top = ((f64::from(w) - 2.0 * bw) / step).ceil() as u32;
        let right = ((f64::from(h) - 2.0 * bw) / step).ceil() as u32;
        let summary = layout.layers[0];
        assert_eq!(summary.wanted_per_edge, [top, right, top, right]);
        assert!(summary.placed_per_edge.iter().sum::<u32>() <= summary.budget);
    }
}

#[test]
fn shared_budget_truncates_the_last_edge() {
    let layout = layout_border(canvas(105, 105), &inputs(0.5, 10.0, 10.0, 1));
    let summary = layout.layers[0];
    assert_eq!(summary.budget, 21);
    assert_eq!(summary.wanted_per_edge, [6, 6, 6, 6]);
    assert_eq!(summary.placed_per_edge, [6, 6, 6, 3]);
    assert!(summary.truncated());
    assert_eq!(counts(&layout, 0), [6, 6, 6, 3]);
}

#[test]
fn rings_that_do_not_fit_place_nothing() {
    let layout = layout_border(canvas(100, 100), &inputs(30.0, 20.0, 20.0, 3));
    assert_eq!(layout.layers.len(), 3);
    assert_eq!(layout.layers[2].placed_per_edge, [0, 0, 0, 0]);
    assert_eq!(layout.on_edge(2, Edge::Top).count(), 0);
}

#[test]
fn scroll_offset_wraps_at_the_step_and_shifts_along_the_edge() {
    let mut scrolled = inputs(30.0, 20.0, 20.0, 1);
    scrolled.scroll = Some(ScrollState {
        animation_time: 0.0,
        scroll_offset: 43.0,
    });
    let layout = layout_border(canvas(800, 450), &scrolled);

    let top = layout.on_edge(0, Edge::Top).next().unwrap();
    assert_eq!(top.x, 27);
    let bottom = layout.on_edge(0, Edge::Bottom).next().unwrap();
    assert_eq!(bottom.x, 773);
    let right = layout.on_edge(0, Edge::Right).next().unwrap();
    assert_eq!(right.y, 27);
}

#[test]
fn shimmer_adds_small_rotation_while_scrolling() {
    let mut scrolled = inputs(30.0, 20.0, 20.0, 1);
    scrolled.scroll = Some(ScrollState {
        animation_time: PI,
        scroll_offset: 0.0,
    });
    let layout = layout_border(canvas(400, 300), &scrolled);
    for p in &layout.placements {
        let extra = p.rotation - p.edge.base_rotation();
        assert!((extra - SHIMMER_AMPLITUDE).abs() < 1e-12);
    }
}

#[test]
fn supersampling_scales_positions_and_size() {
    let mut hi = inputs(30.0, 20.0, 20.0, 1);
    hi.scale = 2.0;
    let layout = layout_border(canvas(800, 450), &hi);
    let first = layout.placements[0];
    assert_eq!((first.x, first.y, first.size), (60, 60, 40));
    assert_eq!(counts(&layout, 0), [19, 10, 19, 10]);
}

#[test]
fn zero_step_yields_empty_layout() {
    let layout = layout_border(canvas(800, 450), &inputs(30.0, 0.0, 0.0, 2));
    assert!(layout.placements.is_empty());
    assert!(layout.layers.is_empty());
}

#[test]
fn from_params_attaches_scroll_only_when_enabled() {
    let mut params = BorderStyleParams::default();
    let state = ScrollState {
        animation_time: 1.0,
        scroll_offset: 6.0,
    };
    assert_eq!(LayoutInputs::from_params(&params, 2.0, state).scroll, None);
    params.animation.scroll = true;
    assert_eq!(
        LayoutInputs::from_params(&params, 2.0, state).scroll,
        Some(state)
    );
}
