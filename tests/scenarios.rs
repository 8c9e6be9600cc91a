//! End-to-end checks of the solver against whole problems, exercised
//! through the public API only.

use xcover::{solve, solve_all, solve_first, DenseGrid, Error, Grid, Strategy};

/// Encodes the problem of placing `n` nonattacking queens on an `n` by `n`
/// board. Ranks and files are mandatory constraints (every one must hold a
/// queen), diagonals and antidiagonals are optional (at most one queen
/// each). Each row of the grid places one queen, identified by its
/// `(rank, file)` square.
fn queens_grid(n: usize) -> DenseGrid<(usize, usize)> {
    let diagonals = 2 * n - 1;
    let mut grid = DenseGrid::new(2 * n, 2 * diagonals);
    for rank in 0..n {
        for file in 0..n {
            let diagonal = 2 * n + rank + file;
            let antidiagonal = 2 * n + diagonals + rank + n - 1 - file;
            grid.push_row((rank, file), [rank, n + file, diagonal, antidiagonal]);
        }
    }
    grid
}

/// Checks that `solution` covers every mandatory constraint of `grid`
/// exactly once and every optional constraint at most once.
fn assert_exact_cover<R>(grid: &DenseGrid<R>, solution: &[R])
where
    R: Clone + Eq + std::fmt::Debug,
{
    let mandatory = grid.constraints();
    let mut counts = vec![0usize; mandatory + grid.optional_constraints()];
    grid.for_each_row(|row, constraints| {
        if solution.contains(&row) {
            for &constraint in constraints {
                counts[constraint] += 1;
            }
        }
    });
    for (constraint, &count) in counts.iter().enumerate() {
        if constraint < mandatory {
            assert_eq!(count, 1, "mandatory constraint {constraint} in {solution:?}");
        } else {
            assert!(count <= 1, "optional constraint {constraint} in {solution:?}");
        }
    }
}

#[test]
fn single_constraint_with_two_candidate_rows() {
    let mut grid = DenseGrid::new(1, 0);
    grid.push_row("red", [0]);
    grid.push_row("blue", [0]);

    let solutions = solve_all(&grid, Strategy::default(), None).unwrap();
    assert_eq!(solutions, [vec!["red"], vec!["blue"]]);
}

#[test]
fn four_queens_has_two_solutions() {
    let grid = queens_grid(4);
    for strategy in [Strategy::Naive, Strategy::MinimumSize] {
        let solutions = solve_all(&grid, strategy, None).unwrap();
        assert_eq!(solutions.len(), 2, "{strategy:?}");
        for solution in &solutions {
            assert_eq!(solution.len(), 4);
            assert_exact_cover(&grid, solution);
        }
        // The two placements are mirror images of each other.
        let mut boards: Vec<Vec<usize>> = solutions
            .iter()
            .map(|solution| {
                let mut files = vec![0; 4];
                for &(rank, file) in solution {
                    files[rank] = file;
                }
                files
            })
            .collect();
        boards.sort();
        assert_eq!(boards, [vec![1, 3, 0, 2], vec![2, 0, 3, 1]]);
    }
}

#[test]
fn grid_without_mandatory_constraints_yields_nothing() {
    let mut grid = DenseGrid::new(0, 3);
    grid.push_row('a', [0, 1]);
    grid.push_row('b', [2]);

    let mut visited = false;
    solve(&grid, Strategy::default(), |_, _| visited = true).unwrap();
    assert!(!visited);
    assert_eq!(
        solve_all(&grid, Strategy::default(), None).unwrap(),
        Vec::<Vec<char>>::new()
    );
    assert_eq!(solve_first(&grid, Strategy::default()).unwrap(), None);
}

#[test]
fn enumeration_is_deterministic() {
    let grid = queens_grid(5);
    let first = solve_all(&grid, Strategy::MinimumSize, None).unwrap();
    let second = solve_all(&grid, Strategy::MinimumSize, None).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.len(), 10);
}

#[test]
fn limit_yields_a_prefix_of_the_unlimited_enumeration() {
    let grid = queens_grid(5);
    let all = solve_all(&grid, Strategy::MinimumSize, None).unwrap();
    for limit in [0, 1, 3, 10, 25] {
        let some = solve_all(&grid, Strategy::MinimumSize, Some(limit)).unwrap();
        assert_eq!(some.len(), limit.min(all.len()));
        assert_eq!(some, all[..some.len()]);
    }
}

#[test]
fn first_solution_matches_the_head_of_the_enumeration() {
    let grid = queens_grid(4);
    let all = solve_all(&grid, Strategy::MinimumSize, None).unwrap();
    let first = solve_first(&grid, Strategy::MinimumSize).unwrap();
    assert_eq!(first.as_ref(), all.first());

    // An unsatisfiable problem has no first solution.
    let mut unsat = DenseGrid::new(2, 0);
    unsat.push_row('a', [0]);
    assert_eq!(solve_first(&unsat, Strategy::MinimumSize).unwrap(), None);
}

#[test]
fn cancellation_stops_mid_enumeration() {
    let grid = queens_grid(5);
    let mut count = 0;
    solve(&grid, Strategy::MinimumSize, |_, state| {
        count += 1;
        if count == 3 {
            state.terminate();
        }
    })
    .unwrap();
    assert_eq!(count, 3);
}

#[test]
fn out_of_range_constraint_is_reported_before_searching() {
    let mut grid = DenseGrid::new(2, 0);
    grid.push_row('a', [0, 5]);
    let err = Error::ConstraintOutOfRange {
        row: 0,
        index: 5,
        columns: 2,
    };
    assert_eq!(solve(&grid, Strategy::default(), |_, _| ()), Err(err.clone()));
    assert_eq!(solve_all(&grid, Strategy::default(), None), Err(err.clone()));
    assert_eq!(solve_first(&grid, Strategy::default()), Err(err));
}

/// Counts the exact covers of `columns` mandatory constraints by trying
/// every subset of the given bitmask rows.
fn brute_force(columns: usize, rows: &[u16]) -> usize {
    let full: u16 = (1 << columns) - 1;
    let mut count = 0;
    for subset in 0..(1u32 << rows.len()) {
        let mut union: u16 = 0;
        let mut disjoint = true;
        for (ix, &row) in rows.iter().enumerate() {
            if subset & (1 << ix) != 0 {
                if union & row != 0 {
                    disjoint = false;
                    break;
                }
                union |= row;
            }
        }
        if disjoint && union == full {
            count += 1;
        }
    }
    count
}

#[test]
fn solution_counts_match_brute_force() {
    // A handful of dense 6-column instances with overlapping rows.
    let instances: [&[u16]; 4] = [
        &[0b000111, 0b111000, 0b001100, 0b110011, 0b101010, 0b010101],
        &[0b000011, 0b001100, 0b110000, 0b111111, 0b000110, 0b011000],
        &[0b100001, 0b010010, 0b001100, 0b011110, 0b111111],
        &[0b000001, 0b000001, 0b111110, 0b101010, 0b010100],
    ];
    for rows in instances {
        let mut grid = DenseGrid::new(6, 0);
        for (ix, &mask) in rows.iter().enumerate() {
            let constraints: Vec<usize> = (0..6).filter(|c| mask & (1 << c) != 0).collect();
            grid.push_row(ix, constraints);
        }
        for strategy in [Strategy::Naive, Strategy::MinimumSize] {
            let solutions = solve_all(&grid, strategy, None).unwrap();
            assert_eq!(solutions.len(), brute_force(6, rows), "{rows:?} {strategy:?}");
        }
    }
}
