//! Integration tests for the tabulated and size-corrected dielectric functions.
//!
//! - Interpolation reproduces every tabulated node and has no jumps where the
//!   four-point window moves.
//! - Range enforcement: queries outside each table fail, the boundary
//!   energies themselves succeed.
//! - Size correction vanishes for bulk-like particles.
//! - Reference values at a few wavelengths.

use approx::assert_relative_eq;

use nanoprism_materials::interp::lagrange4;
use nanoprism_materials::{
    dielectric, dielectric_size_corrected, photon_energy_ev, MaterialError, MaterialProvider,
    Metal, SizeCorrectedMetal, TabulatedMetal, HC_EV_NM,
};

// ─────────────────────────────────────────────────────────────
// Interpolation over the embedded tables
// ─────────────────────────────────────────────────────────────

#[test]
fn test_interpolation_reproduces_table_nodes() {
    for metal in Metal::ALL {
        let table = metal.table();
        let xs = table.energies();
        for ys in [table.refractive_indices(), table.extinction_coefficients()] {
            for (&x, &y) in xs.iter().zip(ys) {
                let value = lagrange4(xs, ys, x);
                assert_relative_eq!(value, y, max_relative = 1e-12, epsilon = 1e-12);
            }
        }
    }
}

#[test]
fn test_interpolation_is_continuous_across_window_shifts() {
    // The window moves exactly at the nodes; both neighbouring cubics pass
    // through the node value, so the jump must scale with the step.
    let delta = 1e-9;
    for metal in Metal::ALL {
        let table = metal.table();
        let xs = table.energies();
        for ys in [table.refractive_indices(), table.extinction_coefficients()] {
            let max_slope = xs
                .windows(2)
                .zip(ys.windows(2))
                .map(|(x, y)| ((y[1] - y[0]) / (x[1] - x[0])).abs())
                .fold(0.0_f64, f64::max);

            for &x in &xs[1..xs.len() - 1] {
                let jump = (lagrange4(xs, ys, x + delta) - lagrange4(xs, ys, x - delta)).abs();
                assert!(
                    jump <= 4.0 * max_slope * 2.0 * delta,
                    "{metal}: jump {jump:.3e} at {x} eV exceeds O(δ) bound"
                );
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────
// Range enforcement
// ─────────────────────────────────────────────────────────────

#[test]
fn test_boundary_wavelengths_are_accepted() {
    for metal in Metal::ALL {
        let (min_ev, max_ev) = metal.table().energy_range_ev();
        dielectric(metal, HC_EV_NM / max_ev)
            .unwrap_or_else(|e| panic!("{metal}: shortest wavelength rejected: {e}"));
        dielectric(metal, HC_EV_NM / min_ev)
            .unwrap_or_else(|e| panic!("{metal}: longest wavelength rejected: {e}"));
    }
}

#[test]
fn test_outside_either_end_is_out_of_range() {
    for metal in Metal::ALL {
        let provider = TabulatedMetal::new(metal);
        let (lo, hi) = provider.wavelength_range();

        for wl in [lo * 0.99, hi * 1.01] {
            match provider.dielectric_function(wl) {
                Err(MaterialError::OutOfRange {
                    material,
                    wavelength_nm,
                    energy_ev,
                    min_ev,
                    max_ev,
                }) => {
                    assert_eq!(material, metal.symbol());
                    assert_eq!(wavelength_nm, wl);
                    assert!(energy_ev < min_ev || energy_ev > max_ev);
                }
                other => panic!("{metal} at {wl} nm: expected OutOfRange, got {other:?}"),
            }
        }
    }
}

#[test]
fn test_range_check_rejects_each_side_independently() {
    // A conjunction of "below min" and "above max" can never be true for an
    // ascending table, so it would accept everything. Each side alone must
    // trigger the error.
    let (min_ev, max_ev) = Metal::Silver.table().energy_range_ev();
    let below = HC_EV_NM / (min_ev * 0.5);
    let above = HC_EV_NM / (max_ev * 1.5);
    let literal_condition = |e: f64| e < min_ev && e > max_ev;
    assert!(!literal_condition(photon_energy_ev(below)));
    assert!(!literal_condition(photon_energy_ev(above)));

    assert!(dielectric(Metal::Silver, below).is_err());
    assert!(dielectric(Metal::Silver, above).is_err());
}

#[test]
fn test_gold_covers_300_to_800_nm_sweep() {
    for wl in (300..=800).step_by(2) {
        dielectric(Metal::Gold, wl as f64).expect("gold table covers 300–800 nm");
        dielectric(Metal::Silver, wl as f64).expect("silver table covers 300–800 nm");
    }
}

// ─────────────────────────────────────────────────────────────
// Size correction
// ─────────────────────────────────────────────────────────────

#[test]
fn test_size_correction_vanishes_for_large_diameters() {
    for metal in Metal::ALL {
        for wl in [350.0, 450.0, 600.0, 750.0] {
            let bulk = dielectric(metal, wl).unwrap();
            let mut previous = f64::INFINITY;
            for diameter in [10.0, 100.0, 1.0e3, 1.0e5, 1.0e8] {
                let corrected = dielectric_size_corrected(metal, wl, diameter).unwrap();
                let diff = (corrected - bulk).norm();
                assert!(diff < previous, "{metal} at {wl} nm: correction must shrink with D");
                previous = diff;
            }
            assert!(previous < 1e-5, "{metal} at {wl} nm: residual {previous:.2e}");
        }
    }
}

#[test]
fn test_size_corrected_provider_reports_bulk_range() {
    let provider = SizeCorrectedMetal::new(Metal::Gold, 25.0);
    assert_eq!(provider.energy_range_ev(), TabulatedMetal::gold().energy_range_ev());
    assert_eq!(provider.diameter_nm(), 25.0);
    assert!(provider.name().contains("size-corrected"));
}

#[test]
fn test_size_correction_propagates_out_of_range() {
    let err = dielectric_size_corrected(Metal::Gold, 200.0, 30.0).unwrap_err();
    assert!(matches!(err, MaterialError::OutOfRange { material: "Au", .. }));
    assert!(err.to_string().contains("outside the data range"));
}

// ─────────────────────────────────────────────────────────────
// Reference values
// ─────────────────────────────────────────────────────────────

#[test]
fn test_reference_permittivities() {
    let ag = dielectric(Metal::Silver, 500.0).unwrap();
    assert_relative_eq!(ag.re, -9.796_976, max_relative = 1e-6);
    assert_relative_eq!(ag.im, 0.311_245_2, max_relative = 1e-6);

    let au = dielectric(Metal::Gold, 600.0).unwrap();
    assert_relative_eq!(au.re, -9.706_584, max_relative = 1e-6);
    assert_relative_eq!(au.im, 1.274_314, max_relative = 1e-6);
}

#[test]
fn test_reference_size_corrected_permittivities() {
    // Effective diameter of the 50 × 20 nm reference prism.
    let d = 34.579_921_736_761_42;

    let ag = dielectric_size_corrected(Metal::Silver, 500.0, d).unwrap();
    assert_relative_eq!(ag.re, -9.748_624, max_relative = 1e-6);
    assert_relative_eq!(ag.im, 1.026_836, max_relative = 1e-6);

    let au = dielectric_size_corrected(Metal::Gold, 600.0, d).unwrap();
    assert_relative_eq!(au.re, -9.592_247, max_relative = 1e-6);
    assert_relative_eq!(au.im, 2.228_058, max_relative = 1e-6);
}

#[test]
fn test_refractive_index_squares_to_permittivity() {
    let provider = TabulatedMetal::silver();
    let n = provider.refractive_index(420.0).unwrap();
    let eps = provider.dielectric_function(420.0).unwrap();
    assert_relative_eq!((n * n).re, eps.re, max_relative = 1e-12);
    assert_relative_eq!((n * n).im, eps.im, max_relative = 1e-12);
}
