use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use relp_num::{RationalBig, RB};

use donor_assign::algorithm::hungarian::{solve, SolverConfig};
use donor_assign::data::cost_matrix::CostMatrix;

use super::{assert_valid, exhaustive};

const INFEASIBLE: i64 = 10_000;

fn random_matrix(
    rng: &mut ChaCha8Rng,
    nr_rows: usize,
    nr_columns: usize,
    density: f64,
) -> Vec<Vec<i64>> {
    (0..nr_rows)
        .map(|_| (0..nr_columns)
            .map(|_| if rng.random_bool(density) { rng.random_range(0..100) } else { INFEASIBLE })
            .collect())
        .collect()
}

#[test]
fn optimal_up_to_eight() {
    let mut rng = ChaCha8Rng::seed_from_u64(8);

    for n in 1..=8 {
        for _ in 0..5 {
            let nr_rows = rng.random_range(1..=n);
            let density = rng.random_range(0.2..=1.0);
            let matrix = CostMatrix::new(random_matrix(&mut rng, nr_rows, n, density)).unwrap();

            let assignment = solve(&matrix, &SolverConfig::new(INFEASIBLE)).unwrap();
            assert_valid(&assignment, &matrix, &INFEASIBLE);
            assert_eq!(
                (assignment.nr_assigned(), assignment.total_cost(&matrix)),
                exhaustive(&matrix, &INFEASIBLE),
                "{}", matrix,
            );
        }
    }
}

#[test]
fn exact_rationals() {
    let mut rng = ChaCha8Rng::seed_from_u64(16);
    let infeasible = RB!(INFEASIBLE);

    for _ in 0..40 {
        let nr_columns = rng.random_range(1..=6);
        let nr_rows = rng.random_range(0..=nr_columns);
        let data = random_matrix(&mut rng, nr_rows, nr_columns, 0.7).into_iter()
            .map(|row| row.into_iter()
                .map(|value| RB!(value) / RB!(rng.random_range(1..10_i64)))
                .map(|value| if value >= RB!(100) { infeasible.clone() } else { value })
                .collect())
            .collect::<Vec<Vec<RationalBig>>>();
        let matrix = CostMatrix::new(data).unwrap();

        let assignment = solve(&matrix, &SolverConfig::new(infeasible.clone())).unwrap();
        assert_valid(&assignment, &matrix, &infeasible);
        assert_eq!(
            (assignment.nr_assigned(), assignment.total_cost(&matrix)),
            exhaustive(&matrix, &infeasible),
        );
    }
}

#[test]
fn larger_problems_are_valid() {
    let mut rng = ChaCha8Rng::seed_from_u64(64);

    for _ in 0..10 {
        let nr_columns = rng.random_range(20..=60);
        let nr_rows = rng.random_range(1..=nr_columns);
        let matrix = CostMatrix::new(random_matrix(&mut rng, nr_rows, nr_columns, 0.3)).unwrap();

        let assignment = solve(&matrix, &SolverConfig::new(INFEASIBLE)).unwrap();
        assert_valid(&assignment, &matrix, &INFEASIBLE);
    }
}

#[test]
fn solve_on_other_thread() {
    let matrix = CostMatrix::new(vec![vec![3.5, 1.25], vec![2.0, 4.0]]).unwrap();
    let config = SolverConfig::new(100_f64);

    let assignment = std::thread::spawn(move || solve(&matrix, &config))
        .join()
        .unwrap()
        .unwrap();
    assert_eq!(assignment.to_indices(), vec![1, 0]);
}
