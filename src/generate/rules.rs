//! Grid rules checked after every placement.
//!
//! Each rule is a logical property of a partially filled grid. Rules are
//! testable independently and compose into [`FillRules`].

use std::collections::HashSet;

use crate::puzzle::{BLANK, LetterGrid};

/// A partially filled grid under the configured blank ratio.
#[derive(Debug, Clone, Copy)]
pub struct FillState<'a> {
    /// The grid as currently filled.
    pub grid: &'a LetterGrid,
    /// Largest allowed share of blank cells.
    pub max_blank_ratio: f64,
}

impl<'a> FillState<'a> {
    /// Pairs a grid with its blank ratio cap.
    pub fn new(grid: &'a LetterGrid, max_blank_ratio: f64) -> Self {
        Self {
            grid,
            max_blank_ratio,
        }
    }
}

/// A property that must hold for every accepted placement.
pub trait GridRule {
    /// Checks the rule against the fill state.
    fn holds(state: &FillState<'_>) -> bool;

    /// Human-readable description of the rule.
    fn description() -> &'static str;

    /// Returns the violation when the rule does not hold.
    fn violation(state: &FillState<'_>) -> Option<RuleViolation> {
        (!Self::holds(state)).then(|| RuleViolation::new(Self::description()))
    }
}

/// Violation of a grid rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleViolation {
    /// Description of the violated rule.
    pub description: String,
}

impl RuleViolation {
    /// Creates a new rule violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// Blank cells may not exceed the configured share of the grid.
#[derive(Debug, Clone, Copy)]
pub struct BlankRatioRule;

impl GridRule for BlankRatioRule {
    fn holds(state: &FillState<'_>) -> bool {
        if state.grid.is_empty() {
            return true;
        }
        let ratio = state.grid.count(BLANK) as f64 / state.grid.len() as f64;
        ratio <= state.max_blank_ratio
    }

    fn description() -> &'static str {
        "Blank cells exceed the allowed ratio"
    }
}

/// Every complete word of two or more letters appears once across the grid.
///
/// Rows and columns share one pool. Runs that stop at an unfilled cell may
/// still grow and are ignored.
#[derive(Debug, Clone, Copy)]
pub struct UniqueRunsRule;

impl GridRule for UniqueRunsRule {
    fn holds(state: &FillState<'_>) -> bool {
        let mut seen = HashSet::new();
        state
            .grid
            .runs()
            .into_iter()
            .filter(|run| run.complete && run.text.len() > 1)
            .all(|run| seen.insert(run.text))
    }

    fn description() -> &'static str {
        "A complete word appears more than once"
    }
}

/// Every letter touches at least one cell that is not a blank.
///
/// Unfilled neighbours count, since they may still receive a letter.
#[derive(Debug, Clone, Copy)]
pub struct NoOrphansRule;

impl GridRule for NoOrphansRule {
    fn holds(state: &FillState<'_>) -> bool {
        let grid = state.grid;
        grid.cells()
            .filter(|(_, c)| c.is_ascii_lowercase())
            .all(|(cell, _)| {
                let (row, col) = (cell.row as isize, cell.col as isize);
                [(row - 1, col), (row + 1, col), (row, col - 1), (row, col + 1)]
                    .into_iter()
                    .filter_map(|(r, c)| grid.try_get(r, c))
                    .any(|c| c != BLANK)
            })
    }

    fn description() -> &'static str {
        "A letter is walled in by blanks and edges"
    }
}

/// Every rule a placement must satisfy: [`BlankRatioRule`],
/// [`UniqueRunsRule`] and [`NoOrphansRule`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FillRules;

impl FillRules {
    /// Returns every violated rule, or `Ok(())` if all hold.
    pub fn check(state: &FillState<'_>) -> Result<(), Vec<RuleViolation>> {
        let violations: Vec<RuleViolation> = [
            BlankRatioRule::violation(state),
            UniqueRunsRule::violation(state),
            NoOrphansRule::violation(state),
        ]
        .into_iter()
        .flatten()
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Checks a grid against [`FillRules`].
pub fn check_grid(grid: &LetterGrid, max_blank_ratio: f64) -> Result<(), Vec<RuleViolation>> {
    FillRules::check(&FillState::new(grid, max_blank_ratio))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: &[&str]) -> LetterGrid {
        LetterGrid::from_rows(rows).expect("valid grid rows")
    }

    #[test]
    fn test_blank_ratio_is_inclusive() {
        let g = grid(&["ab", "__"]);
        assert!(BlankRatioRule::holds(&FillState::new(&g, 0.5)));
        assert!(!BlankRatioRule::holds(&FillState::new(&g, 0.49)));
    }

    #[test]
    fn test_duplicate_complete_runs_fail() {
        let g = grid(&["at_at_", "      "]);
        assert!(!UniqueRunsRule::holds(&FillState::new(&g, 1.0)));
    }

    #[test]
    fn test_open_runs_are_not_compared() {
        // second "at" stops at an unfilled cell
        let g = grid(&["at_", "at "]);
        assert!(UniqueRunsRule::holds(&FillState::new(&g, 1.0)));
    }

    #[test]
    fn test_edge_runs_are_compared() {
        // each row reappears as a column
        let g = grid(&["at", "to"]);
        assert!(!UniqueRunsRule::holds(&FillState::new(&g, 1.0)));
        assert_eq!(
            UniqueRunsRule::violation(&FillState::new(&g, 1.0)),
            Some(RuleViolation::new("A complete word appears more than once"))
        );
    }

    #[test]
    fn test_walled_letter_is_orphan() {
        let g = grid(&["_a_", "___"]);
        assert!(!NoOrphansRule::holds(&FillState::new(&g, 1.0)));
    }

    #[test]
    fn test_unfilled_neighbour_rescues_letter() {
        let g = grid(&["_a_", "_  "]);
        assert!(NoOrphansRule::holds(&FillState::new(&g, 1.0)));
    }

    #[test]
    fn test_check_grid_collects_all_violations() {
        let g = grid(&["a__", "___"]);
        let violations = check_grid(&g, 0.5).expect_err("grid breaks two rules");
        assert_eq!(violations.len(), 2);
    }

    #[test]
    fn test_check_grid_accepts_filled_square() {
        assert!(check_grid(&grid(&["an", "to"]), 0.0).is_ok());
    }
}
