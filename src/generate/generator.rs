//! Backtracking grid fill.

use std::collections::{BTreeSet, HashMap};
use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, instrument, warn};

use super::config::GeneratorConfig;
use super::cursor::ScanCursor;
use super::error::GenerateError;
use super::rules::check_grid;
use crate::lexicon::Lexicon;
use crate::puzzle::{BLANK, Cell, LetterGrid};

/// Outcome of visiting one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    /// The placement holds; move on.
    Advance,
    /// The placement broke a rule; try another candidate here.
    RetryCell,
    /// No candidates left; revisit the previous cell.
    Backtrack,
}

/// Mutable state of one fill attempt.
#[derive(Debug)]
struct Fill {
    grid: LetterGrid,
    candidates: HashMap<Cell, Vec<char>>,
    cursor: ScanCursor,
}

impl Fill {
    fn new(rows: usize, cols: usize) -> Self {
        Self {
            grid: LetterGrid::new(rows, cols),
            candidates: HashMap::new(),
            cursor: ScanCursor::new(rows, cols),
        }
    }

    fn reset(&mut self) {
        self.grid.reset();
        self.candidates.clear();
        self.cursor.reset();
    }
}

/// Fills grids cell by cell, consulting a [`Lexicon`] for legal characters.
#[derive(Debug)]
pub struct Generator<L> {
    lexicon: L,
    config: GeneratorConfig,
}

impl<L: Lexicon> Generator<L> {
    /// Creates a generator over a lexicon.
    pub fn new(lexicon: L, config: GeneratorConfig) -> Self {
        Self { lexicon, config }
    }

    /// Returns the lexicon.
    pub fn lexicon(&self) -> &L {
        &self.lexicon
    }

    /// Returns the settings.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Fills a fresh grid.
    ///
    /// Every returned grid has no unfilled cells and satisfies the blank
    /// ratio, unique word and orphan rules.
    ///
    /// # Errors
    ///
    /// - [`GenerateError::InvalidDimensions`] if either dimension is zero
    /// - [`GenerateError::NoSolution`] if backtracking runs past the first cell,
    ///   or the restart allowance is spent
    /// - [`GenerateError::Data`] if the lexicon fails
    #[instrument(skip(self), fields(rows = self.config.rows(), cols = self.config.cols()))]
    pub async fn generate(&self) -> Result<LetterGrid, GenerateError> {
        let (rows, cols) = (*self.config.rows(), *self.config.cols());
        if rows == 0 || cols == 0 {
            return Err(GenerateError::InvalidDimensions { rows, cols });
        }

        let mut rng = match self.config.seed() {
            Some(seed) => StdRng::seed_from_u64(*seed),
            None => StdRng::from_entropy(),
        };
        let budget = self.config.time_budget_ms().map(Duration::from_millis);
        let mut charsets = HashMap::new();
        let mut fill = Fill::new(rows, cols);
        let mut started = Instant::now();
        let mut restarts = 0u32;
        let mut steps = 0u64;

        while let Some(cell) = fill.cursor.cell() {
            if budget.is_some_and(|budget| started.elapsed() >= budget) {
                if self.config.max_restarts().is_some_and(|max| restarts >= max) {
                    warn!(restarts, "Restart allowance spent");
                    return Err(GenerateError::NoSolution { restarts });
                }
                restarts += 1;
                warn!(restarts, steps, "Time budget exceeded, restarting from origin");
                fill.reset();
                started = Instant::now();
                continue;
            }

            steps += 1;
            match self.visit(cell, &mut fill, &mut charsets, &mut rng).await? {
                Step::Advance => fill.cursor.advance(),
                Step::RetryCell => {
                    fill.cursor.retreat_one();
                    fill.cursor.advance();
                }
                Step::Backtrack => {
                    if !fill.cursor.retreat_two() {
                        warn!(steps, restarts, "Backtracked past the first cell");
                        return Err(GenerateError::NoSolution { restarts });
                    }
                    fill.cursor.advance();
                }
            }
        }

        info!(steps, restarts, "Grid filled");
        Ok(fill.grid)
    }

    async fn visit(
        &self,
        cell: Cell,
        fill: &mut Fill,
        charsets: &mut HashMap<(String, usize), BTreeSet<char>>,
        rng: &mut StdRng,
    ) -> Result<Step, GenerateError> {
        let mut candidates = match fill.candidates.remove(&cell) {
            Some(candidates) => candidates,
            None => self.candidates_for(&fill.grid, cell, charsets).await?,
        };

        if candidates.is_empty() {
            debug!(row = cell.row, col = cell.col, "Candidates exhausted");
            fill.grid.clear(cell);
            return Ok(Step::Backtrack);
        }

        let pick = candidates.remove(rng.gen_range(0..candidates.len()));
        fill.grid.set(cell, pick);
        fill.candidates.insert(cell, candidates);

        match check_grid(&fill.grid, *self.config.max_blank_ratio()) {
            Ok(()) => Ok(Step::Advance),
            Err(violations) => {
                debug!(
                    row = cell.row,
                    col = cell.col,
                    %pick,
                    violations = violations.len(),
                    "Placement rejected"
                );
                Ok(Step::RetryCell)
            }
        }
    }

    /// Characters legal at `cell` in both its row and its column.
    ///
    /// A direction whose run has reached the word length limit only admits
    /// a blank.
    async fn candidates_for(
        &self,
        grid: &LetterGrid,
        cell: Cell,
        charsets: &mut HashMap<(String, usize), BTreeSet<char>>,
    ) -> Result<Vec<char>, GenerateError> {
        let max_len = *self.config.max_word_length();
        let row_prefix = grid.row_prefix(cell);
        let col_prefix = grid.col_prefix(cell);

        let across = if row_prefix.len() >= max_len {
            BTreeSet::from([BLANK])
        } else {
            let space = (grid.cols() - cell.col).min(max_len - row_prefix.len());
            self.charset(row_prefix, space, charsets).await?
        };
        let down = if col_prefix.len() >= max_len {
            BTreeSet::from([BLANK])
        } else {
            let space = (grid.rows() - cell.row).min(max_len - col_prefix.len());
            self.charset(col_prefix, space, charsets).await?
        };

        let candidates: Vec<char> = across.intersection(&down).copied().collect();
        debug!(
            row = cell.row,
            col = cell.col,
            candidates = %candidates.iter().collect::<String>(),
            "Candidates computed"
        );
        Ok(candidates)
    }

    async fn charset(
        &self,
        prefix: String,
        remaining_space: usize,
        charsets: &mut HashMap<(String, usize), BTreeSet<char>>,
    ) -> Result<BTreeSet<char>, GenerateError> {
        let key = (prefix, remaining_space);
        if let Some(charset) = charsets.get(&key) {
            return Ok(charset.clone());
        }
        let charset = self.lexicon.charset_for_prefix(&key.0, remaining_space).await?;
        charsets.insert(key, charset.clone());
        Ok(charset)
    }
}
