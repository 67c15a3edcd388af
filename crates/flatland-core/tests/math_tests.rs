// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
//! Integration tests for flatland-core math helpers.

use std::f32::consts::{FRAC_PI_2, PI};

use flatland_core::math::{
    self, approx_eq, area_of_triangle, is_between_line, is_on_line, make_standard_normal,
    triple_cross,
};
use flatland_core::{Rot2, Vec2};
use proptest::prelude::*;

fn assert_vec_approx(a: Vec2, b: Vec2) {
    assert!(a.approx_eq(b), "expected {b:?}, got {a:?}");
}

#[test]
fn approx_eq_is_symmetric_and_reflexive() {
    assert!(approx_eq(1.0, 1.0));
    assert!(approx_eq(1.0, 1.0 + 5e-5));
    assert!(approx_eq(1.0 + 5e-5, 1.0));
    assert!(!approx_eq(1.0, 1.001));
}

#[test]
fn perpendicular_rotates_ccw() {
    assert_vec_approx(Vec2::UNIT_X.perpendicular(), Vec2::UNIT_Y);
    assert_vec_approx(Vec2::UNIT_Y.perpendicular(), Vec2::new(-1.0, 0.0));
}

#[test]
fn normalize_degenerate_returns_zero() {
    let v = Vec2::new(1e-6, -1e-6);
    assert_eq!(v.normalize().to_array(), [0.0, 0.0]);
}

#[test]
fn rotate_about_pivot_quarter_turn() {
    let rot = Rot2::new(FRAC_PI_2);
    let p = Vec2::new(2.0, 1.0);
    let about = Vec2::new(1.0, 1.0);
    assert_vec_approx(p.rotate_about(about, rot), Vec2::new(1.0, 2.0));
}

#[test]
fn zero_rotation_is_exact_passthrough() {
    let p = Vec2::new(0.1, 0.2);
    let rotated = p.rotate_about(Vec2::new(7.3, -2.0), Rot2::ZERO);
    assert_eq!(rotated.to_array(), p.to_array());
}

#[test]
fn half_turn_about_origin_negates() {
    let rot = Rot2::new(PI);
    assert_vec_approx(Vec2::new(3.0, -2.0).rotated(rot), Vec2::new(-3.0, 2.0));
}

#[test]
fn triple_cross_of_parallel_vectors_is_zero() {
    let a = Vec2::new(2.0, 1.0);
    let t = triple_cross(a, a.scale(-3.0));
    assert_vec_approx(t, Vec2::ZERO);
}

#[test]
fn shoelace_area_of_unit_right_triangle() {
    let area = area_of_triangle(Vec2::ZERO, Vec2::UNIT_X, Vec2::UNIT_Y);
    assert!(approx_eq(area, 0.5));
}

#[test]
fn on_line_ignores_bounds_between_respects_them() {
    let v1 = Vec2::new(1.0, 1.0);
    let v2 = Vec2::new(3.0, 3.0);
    assert!(is_on_line(v1, v2, Vec2::new(5.0, 5.0)));
    assert!(!is_between_line(v1, v2, Vec2::new(5.0, 5.0)));
    assert!(is_between_line(v1, v2, Vec2::new(2.0, 2.0)));
    assert!(!is_on_line(v1, v2, Vec2::new(2.0, 2.5)));
}

proptest! {
    #[test]
    fn standard_normal_is_idempotent(
        x in -1.0f32..1.0,
        y in -1.0f32..1.0,
    ) {
        let v = Vec2::new(x, y);
        let once = make_standard_normal(v);
        let twice = make_standard_normal(once);
        prop_assert_eq!(once.to_array(), twice.to_array());
    }

    #[test]
    fn standard_normal_identifies_antiparallel_axes(
        x in -1.0f32..1.0,
        y in -1.0f32..1.0,
    ) {
        let v = Vec2::new(x, y);
        prop_assume!(v.length() > 1e-3);
        let a = make_standard_normal(v);
        let b = make_standard_normal(v.neg());
        prop_assert!(a.approx_eq(b), "{:?} vs {:?}", a, b);
    }

    #[test]
    fn rotation_round_trips_through_inverse(
        theta in 0.0f32..6.28,
        x in -10.0f32..10.0,
        y in -10.0f32..10.0,
    ) {
        let rot = Rot2::new(theta);
        let p = Vec2::new(x, y);
        let back = p.rotated(rot).rotated(rot.inverse());
        prop_assert!((back.x() - x).abs() < 1e-3);
        prop_assert!((back.y() - y).abs() < 1e-3);
    }
}

#[test]
fn clamp_orders_bounds() {
    assert_eq!(math::clamp(5.0, 0.0, 2.0), 2.0);
    assert_eq!(math::clamp(-1.0, 0.0, 2.0), 0.0);
    assert_eq!(math::clamp(1.0, 0.0, 2.0), 1.0);
}
