use std::path::PathBuf;
use std::process::exit;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use donor_assign::algorithm::SolveAssignment;
use donor_assign::data::similarity::Conversion;
use donor_assign::io::{import_costs, import_similarities};
use donor_assign::io::delimited::Delimiter;

/// Assign donors to recipients at minimum total cost.
///
/// Reads a matrix with a row per recipient and a column per donor, and prints for each recipient
/// the index of its donor as a JSON array, -1 meaning unassigned.
#[derive(Parser)]
#[command(version, author = "Bram van den Heuvel <bram@vandenheuvel.online>")]
struct Opts {
    /// File containing the matrix, one row per line
    problem_file: PathBuf,
    /// Interpret the values as similarity scores in [0, 1] instead of costs
    #[arg(long)]
    similarity: bool,
    /// Smallest similarity that may still be assigned
    #[arg(long, default_value_t = 0.6, requires = "similarity")]
    min_similarity: f64,
    /// Number of decimals costs derived from similarities are rounded to
    #[arg(long, default_value_t = 2, requires = "similarity")]
    precision: u32,
    /// Costs at or above this value are infeasible (defaults to one more than the sum of all costs)
    #[arg(long, conflicts_with = "similarity")]
    infeasible: Option<f64>,
    /// Character separating the values on a line; a space means any whitespace
    #[arg(long, default_value_t = ',')]
    delimiter: char,
    /// Log the progress of the solver
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let opts = Opts::parse();

    let default_level = if opts.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let path = opts.problem_file.as_path();
    let delimiter = Delimiter::from(opts.delimiter);
    info!(path = %path.display(), "Reading problem file");

    let imported = if opts.similarity {
        import_similarities(path, delimiter, &Conversion::new(opts.precision, opts.min_similarity))
    } else {
        import_costs(path, delimiter, opts.infeasible)
    };
    let (matrix, config) = match imported {
        Ok(problem) => problem,
        Err(error) => {
            error!(%error, "Couldn't read the problem");
            exit(1);
        },
    };

    info!(rows = matrix.nr_rows(), columns = matrix.nr_columns(), "Solving");
    let assignment = match matrix.solve_assignment(&config) {
        Ok(assignment) => assignment,
        Err(error) => {
            error!(%error, "Couldn't solve the problem");
            exit(1);
        },
    };
    info!(
        assigned = assignment.nr_assigned(),
        total = %assignment.total_cost(&matrix),
        "Solution computed",
    );

    match serde_json::to_string(&assignment.to_indices()) {
        Ok(json) => println!("{}", json),
        Err(error) => {
            error!(%error, "Couldn't write the solution");
            exit(1);
        },
    }
}
