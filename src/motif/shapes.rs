use std::f64::consts::{FRAC_PI_4, PI, TAU};

use kurbo::{Affine, BezPath, Circle, Ellipse, Point, Rect, Shape};

use crate::motif::Motif;
use crate::style::palette::Ink;

const TOLERANCE: f64 = 0.1;

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn circle(cx: f64, cy: f64, r: f64) -> BezPath {
    Circle::new(pt(cx, cy), r).to_path(TOLERANCE)
}

fn polygon(points: impl IntoIterator<Item = Point>) -> BezPath {
    let mut path = BezPath::new();
    for (i, p) in points.into_iter().enumerate() {
        if i == 0 {
            path.move_to(p);
        } else {
            path.line_to(p);
        }
    }
    path.close_path();
    path
}

/// Closed path from a start point and a list of cubic segments `(c1, c2, end)`.
fn cubic_loop(start: Point, segments: &[(Point, Point, Point)]) -> BezPath {
    let mut path = BezPath::new();
    path.move_to(start);
    for &(c1, c2, end) in segments {
        path.curve_to(c1, c2, end);
    }
    path.close_path();
    path
}

/// Rounded four-lobed blob of radius `r` used by the rosette.
fn blob(r: f64) -> BezPath {
    cubic_loop(
        pt(0.0, -r),
        &[
            (pt(r * 0.3, -r * 0.8), pt(r * 0.8, -r * 0.3), pt(r, 0.0)),
            (pt(r * 0.8, r * 0.3), pt(r * 0.3, r * 0.8), pt(0.0, r)),
            (pt(-r * 0.3, r * 0.8), pt(-r * 0.8, r * 0.3), pt(-r, 0.0)),
            (pt(-r * 0.8, -r * 0.3), pt(-r * 0.3, -r * 0.8), pt(0.0, -r)),
        ],
    )
}

fn rotated(path: &BezPath, angle: f64) -> BezPath {
    Affine::rotate(angle) * path.clone()
}

pub(crate) fn fleur_de_lis(s: f64) -> Motif {
    let mut m = Motif::default();
    m.fill(circle(0.0, s / 3.0, s / 6.0), Ink::Primary);
    m.fill(
        cubic_loop(
            pt(0.0, -s / 2.0),
            &[
                (pt(s / 4.0, -s / 4.0), pt(s / 4.0, 0.0), pt(0.0, s / 4.0)),
                (pt(-s / 4.0, 0.0), pt(-s / 4.0, -s / 4.0), pt(0.0, -s / 2.0)),
            ],
        ),
        Ink::Primary,
    );
    m.fill(
        cubic_loop(
            pt(-s / 3.0, 0.0),
            &[
                (pt(-s / 5.0, -s / 5.0), pt(-s / 8.0, -s / 3.0), pt(0.0, -s / 6.0)),
                (pt(s / 8.0, -s / 3.0), pt(s / 5.0, -s / 5.0), pt(s / 3.0, 0.0)),
                (pt(s / 5.0, s / 5.0), pt(0.0, s / 3.0), pt(-s / 5.0, s / 5.0)),
            ],
        ),
        Ink::Primary,
    );
    m
}

pub(crate) fn concentric(s: f64) -> Motif {
    let mut m = Motif::default();
    m.fill(circle(0.0, 0.0, s / 2.0), Ink::Primary);
    m.fill(circle(0.0, 0.0, s * 0.2), Ink::Secondary);
    m
}

pub(crate) fn flower(s: f64) -> Motif {
    let mut m = Motif::default();
    let petal = Ellipse::new(pt(0.0, -s / 3.0), (s / 6.0, s / 4.0), 0.0).to_path(TOLERANCE);
    for i in 0..5 {
        m.fill(rotated(&petal, f64::from(i) * TAU / 5.0), Ink::Primary);
    }
    m.fill(circle(0.0, 0.0, s / 6.0), Ink::Primary);
    m
}

pub(crate) fn spiral(s: f64) -> Motif {
    let mut m = Motif::default();
    m.fill(circle(0.0, 0.0, s / 2.0), Ink::Primary);

    let turns = TAU * 2.0;
    let steps = (turns / 0.1).ceil() as u32;
    let points = (0..steps).map(|i| {
        let a = f64::from(i) * 0.1;
        let r = s / 3.0 * (1.0 - a / turns);
        pt(r * a.cos(), r * a.sin())
    });
    m.fill(polygon(points), Ink::Secondary);
    m
}

pub(crate) fn ornate(s: f64) -> Motif {
    let mut m = Motif::default();
    m.fill(circle(0.0, 0.0, s / 2.0), Ink::Primary);
    let bead = circle(0.0, -s / 2.0, s / 8.0);
    for i in 0..8 {
        m.fill(rotated(&bead, f64::from(i) * FRAC_PI_4), Ink::Primary);
    }
    m
}

pub(crate) fn leaf(s: f64) -> Motif {
    let mut m = Motif::default();
    m.fill(
        cubic_loop(
            pt(0.0, -s / 2.0),
            &[
                (pt(s / 3.0, -s / 4.0), pt(s / 3.0, s / 4.0), pt(0.0, s / 2.0)),
                (pt(-s / 3.0, s / 4.0), pt(-s / 3.0, -s / 4.0), pt(0.0, -s / 2.0)),
            ],
        ),
        Ink::Primary,
    );
    m.fill(
        Rect::new(-s / 20.0, -s / 2.0, s / 20.0, s / 2.0).to_path(TOLERANCE),
        Ink::Secondary,
    );
    m
}

pub(crate) fn diamond(s: f64) -> Motif {
    let quad = |r: f64| polygon([pt(0.0, -r), pt(r, 0.0), pt(0.0, r), pt(-r, 0.0)]);
    let mut m = Motif::default();
    m.fill(quad(s / 2.0), Ink::Primary);
    m.fill(quad(s / 4.0), Ink::Secondary);
    m
}

pub(crate) fn scroll(s: f64) -> Motif {
    let lens = |r: f64| {
        cubic_loop(
            pt(-r, 0.0),
            &[
                (pt(-r / 2.0, -r * 2.0 / 3.0), pt(r / 2.0, -r * 2.0 / 3.0), pt(r, 0.0)),
                (pt(r / 2.0, r * 2.0 / 3.0), pt(-r / 2.0, r * 2.0 / 3.0), pt(-r, 0.0)),
            ],
        )
    };
    let mut m = Motif::default();
    m.fill(lens(s / 2.0), Ink::Primary);
    m.fill(lens(s / 4.0), Ink::Secondary);
    m
}

pub(crate) fn rosette(s: f64) -> Motif {
    const PETALS: u32 = 6;
    let outer = s * 0.6;
    let inner = s * 0.4;
    let step = TAU / f64::from(PETALS);

    let mut m = Motif::default();
    let outer_blob = blob(outer);
    let inner_blob = blob(inner);
    for i in 0..PETALS {
        m.fill(rotated(&outer_blob, f64::from(i) * step), Ink::Primary);
    }
    for i in 0..PETALS {
        m.fill(rotated(&inner_blob, f64::from(i) * step), Ink::Secondary);
    }

    let connector = cubic_loop(
        pt(0.0, -outer * 0.8),
        &[(
            pt(outer * 0.4, -outer * 0.4),
            pt(outer * 0.4, outer * 0.4),
            pt(0.0, outer * 0.8),
        )],
    );
    for i in 0..PETALS {
        let angle = f64::from(i) * step + PI / f64::from(PETALS);
        m.fill(rotated(&connector, angle), Ink::Primary);
    }
    m.fill(circle(0.0, 0.0, s * 0.1), Ink::Secondary);
    m
}

pub(crate) fn vintage_star(s: f64) -> Motif {
    const POINTS: u32 = 8;
    let outer = s * 0.6;
    let inner = s * 0.4;
    let at = |i: u32, r: f64| {
        let a = f64::from(i) * TAU / f64::from(POINTS);
        pt(a.cos() * r, a.sin() * r)
    };

    let mut m = Motif::default();
    m.fill(
        polygon((0..POINTS).map(|i| at(i, if i % 2 == 0 { outer } else { inner }))),
        Ink::Primary,
    );
    for i in 0..POINTS {
        let c = at(i, s * 0.5);
        m.fill(circle(c.x, c.y, s * 0.075), Ink::Primary);
    }
    m.fill(circle(0.0, 0.0, s * 0.075), Ink::Secondary);
    for i in 0..4 {
        let a = f64::from(i) * PI / 2.0;
        m.fill(
            circle(a.cos() * s * 0.2, a.sin() * s * 0.2, s * 0.05),
            Ink::Secondary,
        );
    }
    m
}
