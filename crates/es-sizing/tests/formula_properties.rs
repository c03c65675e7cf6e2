use es_core::numeric::{Tolerances, nearly_equal};
use es_sizing::math::sweep;
use es_sizing::{SizingError, injector, nozzle, plumbing};
use proptest::prelude::*;

#[test]
fn reference_engine_matches_closed_form() {
    // gamma 1.2, 22 g/mol, 3200 K, 20 bar into 1.01325 bar.
    let v = nozzle::exhaust_velocity(1.2_f64, 0.022, 3200.0, 20.0, 1.01325).unwrap();
    let eps = nozzle::expansion_ratio(1.2_f64, 20.0, 1.01325).unwrap();

    let tol = Tolerances::relative(1e-3);
    assert!(nearly_equal(v, 2384.244, tol), "v = {v}");
    assert!(nearly_equal(eps, 3.5916, tol), "eps = {eps}");
}

#[test]
fn unit_orifice_area() {
    // 1 kg/s through Cd 1 at 1000 kg/m3 and 1 bar: 1/sqrt(2e8).
    let area = injector::injector_area(1.0_f64, 1.0, 1000.0, 1.0).unwrap();
    assert!((area - 7.0711e-5).abs() < 1e-9, "area = {area}");
    assert_eq!(area, 1.0 / 2.0e8_f64.sqrt());
}

#[test]
fn degenerate_cone_angles_are_reported() {
    for angle in [0.0_f64, 90.0] {
        let err = nozzle::cone_length(0.05, 0.02, angle).unwrap_err();
        assert!(matches!(err, SizingError::InvalidGeometry { .. }));
    }
}

#[test]
fn throat_area_sweep_over_chamber_pressure() {
    let pressures = es_sizing::math::linspace(5.0, 60.0, 12);
    let areas = sweep(&pressures, |&pc| {
        nozzle::throat_area(1.2_f64, 0.022, 1.0, 3200.0, pc)
    })
    .unwrap();
    assert!(areas.windows(2).all(|w| w[1] < w[0]));
}

proptest! {
    #[test]
    fn no_expansion_means_no_exhaust_velocity(
        gamma in 1.01_f64..1.8,
        molar_mass in 0.002_f64..0.05,
        temp in 300.0_f64..4000.0,
        pressure in 0.5_f64..300.0,
    ) {
        let v = nozzle::exhaust_velocity(gamma, molar_mass, temp, pressure, pressure).unwrap();
        prop_assert_eq!(v, 0.0);
    }

    #[test]
    fn throat_area_decreases_with_chamber_pressure(
        gamma in 1.05_f64..1.6,
        pc in 2.0_f64..200.0,
        bump in 1.01_f64..3.0,
    ) {
        let low = nozzle::throat_area(gamma, 0.022, 1.0, 3200.0, pc).unwrap();
        let high = nozzle::throat_area(gamma, 0.022, 1.0, 3200.0, pc * bump).unwrap();
        prop_assert!(high < low);
    }

    #[test]
    fn pressure_drop_is_linear_in_length(
        length in 0.1_f64..20.0,
        mdot in 0.05_f64..5.0,
        d in 0.005_f64..0.1,
        rho in 1.0_f64..1200.0,
        mu in 1e-5_f64..5e-3,
    ) {
        let single = plumbing::pressure_drop(length, mdot, d, 1.5e-6, rho, mu).unwrap();
        let double = plumbing::pressure_drop(2.0 * length, mdot, d, 1.5e-6, rho, mu).unwrap();
        prop_assert!(nearly_equal(double, 2.0 * single, Tolerances::relative(1e-12)));
    }

    #[test]
    fn radius_and_circle_area_are_inverse(area in 1e-8_f64..10.0) {
        let r = nozzle::radius(area).unwrap();
        let back = nozzle::circle_area(r).unwrap();
        prop_assert!(nearly_equal(back, area, Tolerances::relative(1e-12)));
    }

    #[test]
    fn overexpanded_ratio_is_rejected(pc in 1.0_f64..100.0, excess in 1.001_f64..10.0) {
        let res = nozzle::exhaust_velocity(1.2, 0.022, 3200.0, pc, pc * excess);
        let is_invalid = matches!(res, Err(SizingError::InvalidPhysicalInput { .. }));
        prop_assert!(is_invalid);
    }
}
