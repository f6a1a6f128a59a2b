//! Full load → solve → write round trip.

use truss_io::{read_model_str, results_to_string};
use truss_solver::solve_static;

const BAR: &str = "\
elasticModulus 2e11
nodes 2
0 0 0
1 0 0
units 1
0 1 0.01
force 1
1 1000 0 0
constraint 1
0
";

#[test]
fn loads_solves_and_reports_the_axial_bar() {
    let model = read_model_str(BAR).unwrap();
    let results = solve_static(&model).unwrap();

    // u = F/k with k = E*pi*r^2/L ~ 6.283e7
    let area = std::f64::consts::PI * 1e-4;
    let expected_u = 1000.0 / (2.0e11 * area);
    let [dx, _, _] = results.node_displacement(1);
    assert!((dx - expected_u).abs() / expected_u < 1e-6);

    let expected_stress = 1000.0 / area;
    assert!((results.stresses[0] - expected_stress).abs() / expected_stress < 1e-6);

    let report = results_to_string(&results);
    assert!(report.contains("Node0:"));
    assert!(report.contains("Node1:1.591549E-5"));
    assert!(report.contains("Unit0:3.183099E6"));
}

#[test]
fn loader_errors_abort_before_the_solve() {
    let err = read_model_str("nodes 1\n0 0 0\nbogus\n").unwrap_err();
    assert!(err.to_string().contains("unknown keyword 'bogus'"));
}
