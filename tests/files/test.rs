use donor_assign::algorithm::SolveAssignment;
use donor_assign::data::cost_matrix::MatrixError;
use donor_assign::data::similarity::Conversion;
use donor_assign::io::{import_costs, import_similarities};
use donor_assign::io::delimited::Delimiter;
use donor_assign::io::error::Import;

use super::get_test_file_path;

fn solve_costs(name: &str, delimiter: Delimiter) -> Vec<i64> {
    let (matrix, config) = import_costs::<f64>(&get_test_file_path(name), delimiter, None).unwrap();
    matrix.solve_assignment(&config).unwrap().to_indices()
}

#[test]
fn scenario_a() {
    let path = get_test_file_path("scenario_a.csv");
    let (matrix, config) = import_costs::<i64>(&path, Delimiter::default(), None).unwrap();
    assert_eq!(config.infeasible(), &326);

    let assignment = matrix.solve_assignment(&config).unwrap();
    assert_eq!(assignment.to_indices(), vec![2, 0, 1]);
    assert_eq!(assignment.total_cost(&matrix), 70);
}

#[test]
fn scenario_b() {
    assert_eq!(solve_costs("scenario_b.csv", Delimiter::default()), vec![-1, 1, 3]);
}

#[test]
fn contention() {
    assert_eq!(solve_costs("contention.txt", Delimiter::Whitespace), vec![-1, 0]);
}

#[test]
fn similarity() {
    let path = get_test_file_path("similarity.csv");
    let (matrix, config) = import_similarities(&path, Delimiter::default(), &Conversion::default())
        .unwrap();
    let assignment = matrix.solve_assignment(&config).unwrap();

    assert_eq!(assignment.to_indices(), vec![1, 0, -1]);
    assert!((assignment.total_cost(&matrix) - 0.25).abs() < 1e-9);

    // A lower threshold makes the last recipient eligible for donor 3
    let conversion = Conversion::new(2, 0.4);
    let (matrix, config) = import_similarities(&path, Delimiter::default(), &conversion).unwrap();
    let assignment = matrix.solve_assignment(&config).unwrap();
    assert_eq!(assignment.to_indices(), vec![1, 0, 3]);
}

#[test]
fn ragged() {
    let path = get_test_file_path("ragged.csv");
    let result = import_costs::<i64>(&path, Delimiter::default(), None);

    assert!(matches!(result, Err(Import::Matrix(MatrixError::Ragged { row: 1, expected: 3, found: 2 }))));
}

#[test]
fn missing_file() {
    let path = get_test_file_path("does_not_exist.csv");
    assert!(matches!(import_costs::<i64>(&path, Delimiter::default(), None), Err(Import::IO(_))));
}
