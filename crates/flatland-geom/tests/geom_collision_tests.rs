// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]
//! Integration tests for the narrow-phase engine: SAT dispatch, GJK
//! agreement, MTV resolution, and minimum-distance witnesses.

use std::f32::consts::TAU;

use flatland_core::math::approx_eq;
use flatland_core::{Rot2, Vec2};
use flatland_geom::narrow::{self, distance, gjk};
use flatland_geom::{Circle2, Polygon2, Rect2};
use proptest::prelude::*;

fn poly(pts: &[(f32, f32)]) -> Polygon2 {
    Polygon2::new(pts.iter().map(|&(x, y)| Vec2::new(x, y)).collect()).unwrap()
}

/// Regular k-gon of the given radius centered on the origin, with its
/// first vertex at angle `offset`.
fn regular_polygon(k: usize, radius: f32, offset: f32) -> Polygon2 {
    let verts = (0..k)
        .map(|i| {
            let angle = offset + TAU * (i as f32) / (k as f32);
            Vec2::new(radius * angle.cos(), radius * angle.sin())
        })
        .collect();
    Polygon2::new(verts).unwrap()
}

#[test]
fn triangle_pair_examples() {
    let a = poly(&[(0.0, 0.0), (2.0, 0.0), (1.0, 2.0)]);
    let b = poly(&[(1.0, 1.0), (3.0, 1.0), (2.0, 3.0)]);
    let c = poly(&[(3.0, 3.0), (5.0, 3.0), (4.0, 5.0)]);
    assert!(narrow::intersects_polygons(
        &a,
        &b,
        Vec2::ZERO,
        Vec2::ZERO,
        Rot2::ZERO,
        Rot2::ZERO,
        true
    ));
    assert!(!narrow::intersects_polygons(
        &a,
        &c,
        Vec2::ZERO,
        Vec2::ZERO,
        Rot2::ZERO,
        Rot2::ZERO,
        false
    ));
}

#[test]
fn sat_and_gjk_agree_on_the_examples() {
    let a = poly(&[(0.0, 0.0), (2.0, 0.0), (1.0, 2.0)]);
    let b = poly(&[(1.0, 1.0), (3.0, 1.0), (2.0, 3.0)]);
    let c = poly(&[(3.0, 3.0), (5.0, 3.0), (4.0, 5.0)]);
    for strict in [false, true] {
        let sat = narrow::intersects_polygons(
            &a,
            &b,
            Vec2::ZERO,
            Vec2::ZERO,
            Rot2::ZERO,
            Rot2::ZERO,
            strict,
        );
        let walk = gjk::intersects_gjk(
            &a,
            &b,
            Vec2::ZERO,
            Vec2::ZERO,
            Rot2::ZERO,
            Rot2::ZERO,
            strict,
        );
        assert_eq!(sat, walk);
        let sat = narrow::intersects_polygons(
            &a,
            &c,
            Vec2::ZERO,
            Vec2::ZERO,
            Rot2::ZERO,
            Rot2::ZERO,
            strict,
        );
        let walk = gjk::intersects_gjk(
            &a,
            &c,
            Vec2::ZERO,
            Vec2::ZERO,
            Rot2::ZERO,
            Rot2::ZERO,
            strict,
        );
        assert_eq!(sat, walk);
    }
}

#[test]
fn polygon_mtv_separates_the_pair() {
    let a = poly(&[(0.0, 0.0), (2.0, 0.0), (1.0, 2.0)]);
    let b = poly(&[(1.0, 1.0), (3.0, 1.0), (2.0, 3.0)]);
    let mtv =
        narrow::intersect_mtv_polygons(&a, &b, Vec2::ZERO, Vec2::ZERO, Rot2::ZERO, Rot2::ZERO)
            .unwrap();
    let moved = mtv.axis.scale(mtv.magnitude);
    assert!(!narrow::intersects_polygons(
        &a,
        &b,
        moved,
        Vec2::ZERO,
        Rot2::ZERO,
        Rot2::ZERO,
        true
    ));
}

#[test]
fn rotation_argument_matches_preactualized_vertices() {
    let a = regular_polygon(5, 2.0, 0.0);
    let b = regular_polygon(4, 1.5, 0.3);
    let rot = Rot2::new(0.7);
    let pre = a.rotated(rot).unwrap();
    for offset in [Vec2::new(3.0, 0.1), Vec2::new(5.0, 5.0), Vec2::ZERO] {
        let with_rot =
            narrow::intersects_polygons(&a, &b, Vec2::ZERO, offset, rot, Rot2::ZERO, false);
        let with_pre =
            narrow::intersects_polygons(&pre, &b, Vec2::ZERO, offset, Rot2::ZERO, Rot2::ZERO, false);
        assert_eq!(with_rot, with_pre);
    }
}

#[test]
fn circle_rect_overlap_and_mtv() {
    let circle = Circle2::new(1.0);
    let rect = Rect2::new(Vec2::ZERO, Vec2::new(4.0, 4.0)).unwrap();
    // Circle center lands at (1,1), well inside the box.
    assert!(narrow::intersects_circle_rect(
        &circle,
        &rect,
        Vec2::ZERO,
        Vec2::ZERO,
        true
    ));
    let mtv = narrow::intersect_mtv_circle_rect(&circle, &rect, Vec2::ZERO, Vec2::ZERO).unwrap();
    let moved = mtv.axis.scale(mtv.magnitude);
    assert!(!narrow::intersects_circle_rect(
        &circle,
        &rect,
        moved,
        Vec2::ZERO,
        true
    ));
    // Far away: no contact, no MTV.
    assert!(!narrow::intersects_circle_rect(
        &circle,
        &rect,
        Vec2::new(20.0, 0.0),
        Vec2::ZERO,
        false
    ));
    assert!(
        narrow::intersect_mtv_circle_rect(&circle, &rect, Vec2::new(20.0, 0.0), Vec2::ZERO)
            .is_none()
    );
}

#[test]
fn circle_polygon_overlap_and_mtv() {
    let circle = Circle2::new(1.0);
    let tri = poly(&[(0.0, 0.0), (4.0, 0.0), (2.0, 3.0)]);
    // Center at (2,1) sits inside the triangle.
    assert!(narrow::intersects_circle_polygon(
        &circle,
        &tri,
        Vec2::new(1.0, 0.0),
        Vec2::ZERO,
        Rot2::ZERO,
        true
    ));
    let mtv = narrow::intersect_mtv_circle_polygon(
        &circle,
        &tri,
        Vec2::new(1.0, 0.0),
        Vec2::ZERO,
        Rot2::ZERO,
    )
    .unwrap();
    let moved = Vec2::new(1.0, 0.0).add(mtv.axis.scale(mtv.magnitude));
    assert!(!narrow::intersects_circle_polygon(
        &circle,
        &tri,
        moved,
        Vec2::ZERO,
        Rot2::ZERO,
        true
    ));
}

#[test]
fn polygon_rect_overlap_and_mtv() {
    let tri = poly(&[(0.0, 0.0), (2.0, 0.0), (1.0, 2.0)]);
    let rect = Rect2::new(Vec2::ZERO, Vec2::new(3.0, 3.0)).unwrap();
    assert!(narrow::intersects_polygon_rect(
        &tri,
        &rect,
        Vec2::ZERO,
        Vec2::ZERO,
        Rot2::ZERO,
        true
    ));
    let mtv =
        narrow::intersect_mtv_polygon_rect(&tri, &rect, Vec2::ZERO, Vec2::ZERO, Rot2::ZERO)
            .unwrap();
    let moved = mtv.axis.scale(mtv.magnitude);
    assert!(!narrow::intersects_polygon_rect(
        &tri,
        &rect,
        moved,
        Vec2::ZERO,
        Rot2::ZERO,
        true
    ));
}

#[test]
fn swapped_wrappers_mirror_the_canonical_order() {
    let tri = poly(&[(0.0, 0.0), (2.0, 0.0), (1.0, 2.0)]);
    let rect = Rect2::new(Vec2::ZERO, Vec2::new(3.0, 3.0)).unwrap();
    let circle = Circle2::new(1.0);

    assert_eq!(
        narrow::intersects_polygon_rect(&tri, &rect, Vec2::ZERO, Vec2::ZERO, Rot2::ZERO, false),
        narrow::intersects_rect_polygon(&rect, &tri, Vec2::ZERO, Vec2::ZERO, Rot2::ZERO, false)
    );
    assert_eq!(
        narrow::intersects_circle_polygon(
            &circle,
            &tri,
            Vec2::ZERO,
            Vec2::ZERO,
            Rot2::ZERO,
            false
        ),
        narrow::intersects_polygon_circle(&tri, &circle, Vec2::ZERO, Vec2::ZERO, Rot2::ZERO, false)
    );

    let forward =
        narrow::intersect_mtv_polygon_rect(&tri, &rect, Vec2::ZERO, Vec2::ZERO, Rot2::ZERO)
            .unwrap();
    let swapped =
        narrow::intersect_mtv_rect_polygon(&rect, &tri, Vec2::ZERO, Vec2::ZERO, Rot2::ZERO)
            .unwrap();
    assert!(forward.axis.approx_eq(swapped.axis.neg()));
    assert!(approx_eq(forward.magnitude, swapped.magnitude));
}

#[test]
fn rect_pair_fast_path() {
    let r = Rect2::new(Vec2::ZERO, Vec2::new(2.0, 2.0)).unwrap();
    assert!(narrow::intersects_rects(
        &r,
        &r,
        Vec2::ZERO,
        Vec2::new(1.0, 1.0),
        true
    ));
    let mtv = narrow::intersect_mtv_rects(&r, &r, Vec2::ZERO, Vec2::new(1.5, 0.2)).unwrap();
    // Horizontal overlap (0.5) is smaller than vertical (1.8).
    assert!(mtv.axis.approx_eq(Vec2::UNIT_X));
    assert!(approx_eq(mtv.magnitude, -0.5));
    assert!(!narrow::intersects_rects(
        &r,
        &r,
        Vec2::ZERO,
        Vec2::new(2.0, 0.0),
        true
    ));
}

#[test]
fn sat_and_gjk_agree_with_coincident_centers() {
    // Coincident centroids put the Minkowski-difference origin on a
    // symmetry chord; both engines must still call the overlap strict.
    let square = poly(&[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)]);
    let hexagon = regular_polygon(6, 3.0, 0.1);
    // Offsets that move the square's centroid onto the origin, where the
    // hexagon's already sits.
    let pairs = [
        (&square, &square, Vec2::ZERO, Vec2::ZERO),
        (&hexagon, &square, Vec2::ZERO, Vec2::new(-1.0, -1.0)),
    ];
    for (p1, p2, pos1, pos2) in pairs {
        for strict in [false, true] {
            let sat =
                narrow::intersects_polygons(p1, p2, pos1, pos2, Rot2::ZERO, Rot2::ZERO, strict);
            let walk = gjk::intersects_gjk(p1, p2, pos1, pos2, Rot2::ZERO, Rot2::ZERO, strict);
            assert!(sat);
            assert_eq!(sat, walk);
        }
    }
}

#[test]
fn min_distance_triangle_example() {
    let a = poly(&[(0.0, 0.0), (1.0, 0.0), (0.5, 1.0)]);
    let b = poly(&[(1.0, 1.0), (2.0, 1.0), (1.5, 2.0)]);
    let s = distance::min_distance_polygons(&a, &b, Vec2::ZERO, Vec2::ZERO, Rot2::ZERO, Rot2::ZERO)
        .unwrap()
        .unwrap();
    assert!(s.axis.approx_eq(Vec2::new(0.894_427_2, 0.447_213_6)));
    assert!(approx_eq(s.distance, 0.447_213_6));
}

proptest! {
    #[test]
    fn sat_and_gjk_agree_on_regular_polygons(
        k1 in 3usize..8,
        k2 in 3usize..8,
        r1 in 1.0f32..5.0,
        r2 in 1.0f32..5.0,
        a1 in 0.0f32..TAU,
        a2 in 0.0f32..TAU,
        dx in -12.0f32..12.0,
        dy in -12.0f32..12.0,
    ) {
        let p1 = regular_polygon(k1, r1, a1);
        let p2 = regular_polygon(k2, r2, a2);
        let pos2 = Vec2::new(dx, dy);

        // Skip configurations near the touching boundary, where SAT and
        // GJK may legitimately land on opposite sides of epsilon.
        let signal = narrow::intersect_mtv_polygons(
            &p1, &p2, Vec2::ZERO, pos2, Rot2::ZERO, Rot2::ZERO,
        )
        .map(|m| m.magnitude.abs())
        .or_else(|| {
            distance::min_distance_polygons(
                &p1, &p2, Vec2::ZERO, pos2, Rot2::ZERO, Rot2::ZERO,
            )
            .ok()
            .flatten()
            .map(|s| s.distance)
        })
        .unwrap_or(0.0);
        prop_assume!(signal > 1e-3);

        for strict in [false, true] {
            let sat = narrow::intersects_polygons(
                &p1, &p2, Vec2::ZERO, pos2, Rot2::ZERO, Rot2::ZERO, strict,
            );
            let walk = gjk::intersects_gjk(
                &p1, &p2, Vec2::ZERO, pos2, Rot2::ZERO, Rot2::ZERO, strict,
            );
            prop_assert_eq!(sat, walk);
        }
    }

    #[test]
    fn polygon_mtv_always_resolves(
        k1 in 3usize..8,
        k2 in 3usize..8,
        r1 in 1.0f32..5.0,
        r2 in 1.0f32..5.0,
        a1 in 0.0f32..TAU,
        a2 in 0.0f32..TAU,
        dx in -6.0f32..6.0,
        dy in -6.0f32..6.0,
    ) {
        let p1 = regular_polygon(k1, r1, a1);
        let p2 = regular_polygon(k2, r2, a2);
        let pos2 = Vec2::new(dx, dy);
        if let Some(mtv) = narrow::intersect_mtv_polygons(
            &p1, &p2, Vec2::ZERO, pos2, Rot2::ZERO, Rot2::ZERO,
        ) {
            let moved = mtv.axis.scale(mtv.magnitude);
            prop_assert!(!narrow::intersects_polygons(
                &p1, &p2, moved, pos2, Rot2::ZERO, Rot2::ZERO, true,
            ));
        }
    }

    #[test]
    fn circle_pair_matches_the_closed_form(
        radius1 in 0.5f32..5.0,
        radius2 in 0.5f32..5.0,
        dx in -15.0f32..15.0,
        dy in -15.0f32..15.0,
    ) {
        let c1 = Circle2::new(radius1);
        let c2 = Circle2::new(radius2);
        let pos2 = Vec2::new(dx, dy);
        // Center delta differs from pos delta by the radius offsets.
        let d = c2.center_of(pos2).sub(c1.center_of(Vec2::ZERO)).length();
        let sum = radius1 + radius2;
        prop_assume!((d - sum).abs() > 1e-2);

        let hit = narrow::intersects_circles(&c1, &c2, Vec2::ZERO, pos2, true);
        prop_assert_eq!(hit, d < sum);
        if let Some(mtv) = narrow::intersect_mtv_circles(&c1, &c2, Vec2::ZERO, pos2) {
            let moved = mtv.axis.scale(mtv.magnitude);
            prop_assert!(!narrow::intersects_circles(&c1, &c2, moved, pos2, true));
        }
    }
}
