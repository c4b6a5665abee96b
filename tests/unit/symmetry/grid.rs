use super::*;

fn grid(n: u32, symmetry: Symmetry) -> GridState {
    let mut g = GridState::new(n).unwrap();
    g.symmetry = symmetry;
    g
}

fn flipped_h(g: &GridState) -> Vec<bool> {
    let n = g.size();
    (0..n)
        .flat_map(|y| (0..n).map(move |x| (x, n - 1 - y)))
        .map(|(x, y)| g.get(x, y))
        .collect()
}

fn flipped_v(g: &GridState) -> Vec<bool> {
    let n = g.size();
    (0..n)
        .flat_map(|y| (0..n).map(move |x| (n - 1 - x, y)))
        .map(|(x, y)| g.get(x, y))
        .collect()
}

fn rotated_180(g: &GridState) -> Vec<bool> {
    let n = g.size();
    (0..n)
        .flat_map(|y| (0..n).map(move |x| (n - 1 - x, n - 1 - y)))
        .map(|(x, y)| g.get(x, y))
        .collect()
}

#[test]
fn default_is_empty_ten_by_ten() {
    let g = GridState::default();
    assert_eq!(g.size(), 10);
    assert_eq!(g.filled(), 0);
    assert_eq!(g.symmetry, Symmetry::default());
}

#[test]
fn sizes_outside_range_are_rejected() {
    assert!(GridState::new(0).is_err());
    assert!(GridState::new(65).is_err());
    assert!(GridState::new(1).is_ok());
    assert!(GridState::new(64).is_ok());
}

#[test]
fn no_symmetry_sets_one_cell() {
    let mut g = grid(5, Symmetry::default());
    g.set_cell(1, 0, true).unwrap();
    assert_eq!(g.filled(), 1);
    assert!(g.get(1, 0));
}

#[test]
fn horizontal_mirrors_rows_vertical_mirrors_columns() {
    let mut g = grid(
        5,
        Symmetry {
            horizontal: true,
            ..Symmetry::default()
        },
    );
    g.set_cell(1, 0, true).unwrap();
    assert!(g.get(1, 0) && g.get(1, 4));
    assert_eq!(g.filled(), 2);

    let mut g = grid(
        5,
        Symmetry {
            vertical: true,
            ..Symmetry::default()
        },
    );
    g.set_cell(1, 0, true).unwrap();
    assert!(g.get(1, 0) && g.get(3, 0));
    assert_eq!(g.filled(), 2);
}

#[test]
fn diagonal_is_a_point_mirror() {
    let mut g = grid(
        5,
        Symmetry {
            diagonal: true,
            ..Symmetry::default()
        },
    );
    g.set_cell(0, 1, true).unwrap();
    assert!(g.get(0, 1) && g.get(4, 3));
    assert_eq!(g.filled(), 2);
}

#[test]
fn horizontal_and_vertical_give_four_way() {
    let mut g = grid(
        6,
        Symmetry {
            horizontal: true,
            vertical: true,
            diagonal: false,
        },
    );
    g.set_cell(1, 2, true).unwrap();
    for (x, y) in [(1, 2), (1, 3), (4, 2), (4, 3)] {
        assert!(g.get(x, y), "({x}, {y})");
    }
    assert_eq!(g.filled(), 4);
}

#[test]
fn full_symmetry_keeps_the_grid_invariant() {
    let mut g = grid(7, Symmetry::ALL);
    for (tool, x, y) in [
        (Tool::Pen, 0, 0),
        (Tool::Pen, 2, 5),
        (Tool::Pen, 3, 1),
        (Tool::Eraser, 6, 6),
        (Tool::Pen, 1, 3),
        (Tool::Fill, 3, 3),
    ] {
        g.apply(tool, x, y).unwrap();
        let now: Vec<bool> = (0..7)
            .flat_map(|y| (0..7).map(move |x| (x, y)))
            .map(|(x, y)| g.get(x, y))
            .collect();
        assert_eq!(flipped_h(&g), now);
        assert_eq!(flipped_v(&g), now);
        assert_eq!(rotated_180(&g), now);
    }
}

#[test]
fn fill_with_matching_state_is_a_no_op() {
    let mut g = grid(4, Symmetry::default());
    g.set_cell(0, 0, true).unwrap();
    let before = g.clone();
    g.flood_fill(2, 2, false).unwrap();
    assert_eq!(g, before);
}

#[test]
fn fill_stops_at_walls() {
    let mut g = grid(5, Symmetry::default());
    for y in 0..5 {
        g.set_cell(2, y, true).unwrap();
    }
    g.apply(Tool::Fill, 0, 0).unwrap();
    assert_eq!(g.filled(), 15);
    assert!(!g.get(3, 0) && !g.get(4, 4));

    g.apply(Tool::Fill, 2, 2).unwrap();
    assert_eq!(g.filled(), 0);
}

#[test]
fn fill_does_not_cross_diagonals() {
    let mut g = grid(3, Symmetry::default());
    g.set_cell(1, 0, true).unwrap();
    g.set_cell(0, 1, true).unwrap();
    g.flood_fill(0, 0, true).unwrap();
    assert_eq!(g.filled(), 3);
}

#[test]
fn large_fill_does_not_recurse() {
    let mut g = grid(64, Symmetry::default());
    g.apply(Tool::Fill, 10, 10).unwrap();
    assert_eq!(g.filled(), 64 * 64);
}

#[test]
fn drag_ignores_fill() {
    let mut g = grid(4, Symmetry::default());
    g.drag(Tool::Fill, 1, 1).unwrap();
    assert_eq!(g.filled(), 0);
    g.drag(Tool::Pen, 1, 1).unwrap();
    g.drag(Tool::Pen, 2, 1).unwrap();
    assert_eq!(g.filled(), 2);
    g.drag(Tool::Eraser, 1, 1).unwrap();
    assert_eq!(g.filled(), 1);
}

#[test]
fn out_of_range_clicks_are_errors() {
    let mut g = grid(4, Symmetry::default());
    for tool in [Tool::Pen, Tool::Eraser, Tool::Fill] {
        let err = g.apply(tool, 4, 0).unwrap_err();
        assert!(err.to_string().starts_with("validation error:"));
    }
    assert!(!g.get(4, 0));
}

#[test]
fn clear_and_resize_reset_cells() {
    let mut g = grid(4, Symmetry::ALL);
    g.apply(Tool::Pen, 0, 0).unwrap();
    g.clear();
    assert_eq!(g.filled(), 0);

    g.apply(Tool::Pen, 0, 0).unwrap();
    g.resize(8).unwrap();
    assert_eq!(g.size(), 8);
    assert_eq!(g.filled(), 0);
    assert_eq!(g.symmetry, Symmetry::ALL);
    assert!(g.resize(100).is_err());
    assert_eq!(g.size(), 8);
}

#[test]
fn tools_parse_from_names() {
    assert_eq!("pen".parse::<Tool>().unwrap(), Tool::Pen);
    assert_eq!("Eraser".parse::<Tool>().unwrap(), Tool::Eraser);
    assert_eq!(" FILL ".parse::<Tool>().unwrap(), Tool::Fill);
    assert!("brush".parse::<Tool>().is_err());
}

#[test]
fn rgba_export_paints_filled_cells() {
    let mut g = grid(2, Symmetry::default());
    g.set_cell(1, 0, true).unwrap();
    let frame = g.to_rgba(3, Rgb8::new(10, 20, 30)).unwrap();
    assert_eq!((frame.width, frame.height), (6, 6));
    assert_eq!(frame.pixel(0, 0), Some([0, 0, 0, 0]));
    assert_eq!(frame.pixel(3, 0), Some([10, 20, 30, 255]));
    assert_eq!(frame.pixel(5, 2), Some([10, 20, 30, 255]));
    assert_eq!(frame.pixel(5, 3), Some([0, 0, 0, 0]));
    assert!(g.to_rgba(0, Rgb8::new(0, 0, 0)).is_err());
}

#[test]
fn svg_export_has_one_rect_per_cell() {
    let mut g = grid(3, Symmetry::default());
    g.set_cell(0, 0, true).unwrap();
    g.set_cell(2, 1, true).unwrap();
    let svg = g.to_svg(10, Rgb8::new(0xAB, 0xCD, 0xEF)).unwrap();
    assert!(svg.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg" width="30" height="30""#));
    assert_eq!(svg.matches("<rect").count(), 2);
    assert!(svg.contains(r##"<rect x="20" y="10" width="10" height="10" fill="#abcdef"/>"##));
    assert_eq!(svg.lines().count(), 4);
    assert!(svg.trim_end().ends_with("</svg>"));
}

#[test]
fn json_round_trip_keeps_cells_and_symmetry() {
    let mut g = grid(3, Symmetry::ALL);
    g.set_cell(0, 0, true).unwrap();
    let json = g.to_json_pretty().unwrap();
    assert!(json.contains(r##""#.#""##));
    assert_eq!(GridState::from_json(&json).unwrap(), g);
}

#[test]
fn malformed_json_grids_are_rejected() {
    assert!(GridState::from_json(r##"{"rows": ["#.", "#"]}"##).is_err());
    assert!(GridState::from_json(r##"{"rows": ["#x", ".."]}"##).is_err());
    assert!(GridState::from_json(r#"{"rows": []}"#).is_err());
    let g = GridState::from_json(r##"{"rows": ["#.", ".#"]}"##).unwrap();
    assert_eq!(g.filled(), 2);
    assert_eq!(g.symmetry, Symmetry::default());
}
