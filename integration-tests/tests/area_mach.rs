use approx::assert_relative_eq;

use integration_tests::residual_at;
use shockline_core::Model;
use shockline_gasdyn::{
    Gamma, Solver,
    isentropic::{
        self, AreaRatio, Branch, DownstreamMach, Stations, mach_from_area_ratio,
        solve_downstream_mach,
    },
};
use shockline_observers::Trace;
use shockline_solvers::equation::{Config, Method};

fn solvers() -> [Solver; 2] {
    [
        Solver::new(Method::Bisection, Config::default()),
        Solver::new(Method::Brent, Config::default()),
    ]
}

#[test]
fn worked_example() {
    let problem = DownstreamMach::new(0.5, 2.5).unwrap();

    for solver in solvers() {
        let solution =
            solve_downstream_mach(&problem, Gamma::AIR, [1.0001, 10.0], &solver, ()).unwrap();

        assert!(solution.converged());
        assert_relative_eq!(solution.x, 2.753_763_176_695_055, epsilon = 1e-9);
    }
}

#[test]
fn solved_mach_satisfies_the_relation() {
    let gamma = Gamma::AIR;
    let model = AreaRatio::new(gamma);

    for (m1, area_ratio) in [(0.5, 2.5), (0.2, 1.3), (0.8, 4.0), (0.3, 10.0)] {
        let problem = DownstreamMach::new(m1, area_ratio).unwrap();
        let solution =
            solve_downstream_mach(&problem, gamma, [1.0001, 10.0], &Solver::default(), ())
                .unwrap();

        let substituted = model.call(&Stations::isentropic(m1, solution.x)).unwrap();
        assert!((substituted - area_ratio).abs() < 1e-6);
    }
}

#[test]
fn residual_at_root_is_repeatably_zero() {
    let model = AreaRatio::new(Gamma::AIR);
    let problem = DownstreamMach::new(0.5, 2.5).unwrap();
    let solution =
        solve_downstream_mach(&problem, Gamma::AIR, [1.0001, 10.0], &Solver::default(), ())
            .unwrap();

    let first = residual_at(&model, &problem, solution.x).unwrap();
    for _ in 0..10 {
        let again = residual_at(&model, &problem, solution.x).unwrap();
        assert_eq!(again, first);
    }
    assert!(first.abs() < 1e-9);
    assert_eq!(first, solution.residual);
}

#[test]
fn brent_needs_fewer_evaluations() {
    let problem = DownstreamMach::new(0.5, 2.5).unwrap();
    let [bisection, brent] = solvers().map(|solver| {
        let mut trace = Trace::new();
        let solution =
            solve_downstream_mach(&problem, Gamma::AIR, [1.0001, 10.0], &solver, &mut trace)
                .unwrap();
        assert_eq!(trace.rows().len(), solution.evals);
        solution.evals
    });

    assert!(brent < bisection);
}

#[test]
fn sonic_area_ratios_agree_with_station_relation() {
    let gamma = Gamma::new(1.3).unwrap();
    let solver = Solver::default();

    for mach in [0.3, 0.7, 1.5, 3.0] {
        let area_ratio = isentropic::area_ratio(mach, gamma).unwrap();
        let branch = if mach < 1.0 {
            Branch::Subsonic
        } else {
            Branch::Supersonic
        };
        let recovered = mach_from_area_ratio(area_ratio, branch, gamma, &solver).unwrap();
        assert_relative_eq!(recovered, mach, epsilon = 1e-9);
    }
}
