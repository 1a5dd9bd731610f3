use std::io::{self, Write};

use anyhow::{Context, Result};
use env_logger::Env;
use rotagrid_core::{make_matrix, print_matrix, rotate_180, rotate_270, rotate_90, Grid};

/// Log filter used when `RUST_LOG` is unset; stdout is reserved for the grids.
const DEFAULT_LOG_FILTER: &str = "warn";

type RotateFn = fn(&Grid<i64>) -> Grid<i64>;

const ROTATIONS: [(&str, RotateFn); 3] = [
    ("90° counterclockwise", rotate_90),
    ("180°", rotate_180),
    ("270° counterclockwise", rotate_270),
];

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or(DEFAULT_LOG_FILTER)).init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&mut out).context("Failed to write demo output")?;
    out.flush().context("Failed to flush stdout")?;
    Ok(())
}

/// Print the default grid and a 2x3 grid, each followed by its three rotations.
fn run<W: Write>(out: &mut W) -> io::Result<()> {
    let mut matrix = make_matrix(0);
    writeln!(out, "Original matrix:")?;
    print_matrix(&matrix, out)?;

    for (description, rotate) in ROTATIONS {
        log::debug!("applying {} rotation to default grid", description);
        writeln!(out, "\nRotated {}:", description)?;
        print_matrix(&rotate(&matrix), out)?;
        // Each rotation starts again from a freshly built grid.
        matrix = make_matrix(0);
    }

    let non_square = Grid::from_vec(2, 3, vec![1, 2, 3, 4, 5, 6])
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    writeln!(out, "\nOriginal non-square matrix (2x3):")?;
    print_matrix(&non_square, out)?;

    for (description, rotate) in ROTATIONS {
        log::debug!("applying {} rotation to 2x3 grid", description);
        writeln!(out, "\nRotated {}:", description)?;
        print_matrix(&rotate(&non_square), out)?;
    }

    Ok(())
}
