//! Integration tests for the prism volume helpers.

use approx::assert_relative_eq;
use std::f64::consts::PI;

use nanoprism_geometry::{effective_diameter, prism_volume, RoundedPrism};

#[test]
fn test_effective_diameter_closed_form() {
    let expected = 2.0 * (3.0 * 3.0_f64.sqrt() * 50.0 * 50.0 * 20.0 / (16.0 * PI)).powf(1.0 / 3.0);
    assert_relative_eq!(effective_diameter(50.0, 20.0), expected, max_relative = 1e-14);
    assert!((effective_diameter(50.0, 20.0) - 34.58).abs() < 0.01);
}

#[test]
fn test_effective_diameter_is_scale_covariant() {
    let shapes = [(50.0, 20.0), (80.0, 10.0), (120.0, 7.5), (33.3, 11.1)];
    for &(l, h) in &shapes {
        let d = effective_diameter(l, h);
        for &t in &[0.1, 0.5, 2.0, 3.7, 100.0] {
            assert_relative_eq!(effective_diameter(t * l, t * h), t * d, max_relative = 1e-12);
        }
    }
}

#[test]
fn test_volume_scales_cubically() {
    let v = prism_volume(40.0, 8.0);
    assert_relative_eq!(prism_volume(80.0, 16.0), 8.0 * v, max_relative = 1e-12);
}

#[test]
fn test_scaled_prism_keeps_aspect_ratios() {
    let prism = RoundedPrism::new(70.0, 14.0, 3.5);
    let big = prism.scaled(2.5);
    let (a, b, c) = prism.aspect_ratios();
    let (a2, b2, c2) = big.aspect_ratios();
    assert_relative_eq!(a, a2, max_relative = 1e-12);
    assert_relative_eq!(b, b2, max_relative = 1e-12);
    assert_relative_eq!(c, c2, max_relative = 1e-12);
    assert_relative_eq!(
        big.effective_diameter_nm(),
        2.5 * prism.effective_diameter_nm(),
        max_relative = 1e-12
    );
}
