use approx::assert_relative_eq;

use integration_tests::{TABLE_MACHS, TABLE_PRESSURE_RATIOS};
use shockline_gasdyn::{Gamma, isentropic};
use shockline_interp::{Extrapolate, Strategy1D, Table};

#[test]
fn mach_to_pressure_ratio() {
    let table = Table::new(TABLE_MACHS, TABLE_PRESSURE_RATIOS).unwrap();
    assert_relative_eq!(table.lookup(1.715).unwrap(), 0.198_060, epsilon = 1e-9);
}

#[test]
fn pressure_ratio_to_mach_from_descending_table() {
    // Listed the way a gas table prints it: p/pt falling as Mach rises.
    let table = Table::new(TABLE_PRESSURE_RATIOS, TABLE_MACHS).unwrap();
    assert_relative_eq!(table.lookup(0.198).unwrap(), 1.7152, epsilon = 1e-9);
}

#[test]
fn round_trip_is_not_exact() {
    let forward = Table::new(TABLE_MACHS, TABLE_PRESSURE_RATIOS).unwrap();
    let inverse = forward.inverse().unwrap();

    let ratio = forward.lookup(1.715).unwrap();
    let rounded = (ratio * 1000.0).round() / 1000.0;
    let mach = inverse.lookup(rounded).unwrap();

    assert!((mach - 1.715).abs() > 1e-5);
    assert!((mach - 1.715).abs() < 1e-3);
}

#[test]
fn printed_table_matches_closed_form() {
    let computed = isentropic::pressure_table(&TABLE_MACHS, Gamma::AIR).unwrap();
    for (computed, printed) in computed.y().iter().zip(TABLE_PRESSURE_RATIOS) {
        assert!((computed - printed).abs() < 5e-6);
    }
}

#[test]
fn out_of_range_clamps_unless_asked_otherwise() {
    let table = Table::new(TABLE_MACHS, TABLE_PRESSURE_RATIOS).unwrap();
    assert_relative_eq!(table.lookup(1.80).unwrap(), 0.19070);

    let strict = table
        .interpolator(Strategy1D::Linear, Extrapolate::Error)
        .unwrap();
    assert!(strict.interpolate(1.80).is_err());

    let linear = table
        .interpolator(Strategy1D::Linear, Extrapolate::Enable)
        .unwrap();
    assert!(linear.interpolate(1.80).unwrap() < 0.19070);
}
