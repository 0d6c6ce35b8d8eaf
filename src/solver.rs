//! The Algorithm X search engine and its resumable solution enumerator.

use crate::{error::Error, matrix::Matrix};
use log::{debug, trace};
use std::collections::VecDeque;

/// The minimal state needed to continue a paused enumeration: the row
/// selected at each depth of the current path, plus the running step count.
///
/// A checkpoint is only meaningful against a matrix freshly built from the
/// same problem definition; feeding it to [`Solver::resume`] reproduces the
/// exact continuation point without re-yielding earlier solutions. How a
/// checkpoint is persisted between runs is the caller's concern.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Checkpoint {
    /// The row selected at each depth of the search path.
    pub path: Vec<usize>,
    /// The number of row trials performed up to the pause.
    pub num_searches: u64,
}

#[derive(Debug)]
enum FrameState {
    /// About to try the front pending row.
    Cover,
    /// The front pending row is selected; undo it on the next visit.
    Uncover,
}

/// One level of the search tree: the chosen column (already covered) and
/// the candidate rows not yet exhausted.
#[derive(Debug)]
struct Frame {
    column: usize,
    pending: VecDeque<usize>,
    state: FrameState,
}

/// Iteratively enumerates solutions to an exact cover problem over any
/// [`Matrix`] representation.
///
/// The recursion of Algorithm X is converted into an explicit frame stack,
/// one frame per depth, so the whole search state lives in the solver value
/// and survives between [`next_solution`] calls. Consuming stops whenever
/// the caller stops asking; [`checkpoint`] then captures everything needed
/// to continue in a later process via [`resume`].
///
/// [`next_solution`]: Solver::next_solution
/// [`checkpoint`]: Solver::checkpoint
/// [`resume`]: Solver::resume
#[derive(Debug)]
pub struct Solver<M> {
    matrix: M,
    /// Rows selected so far, one per stack frame in `Uncover` state.
    partial: Vec<usize>,
    stack: Vec<Frame>,
    num_searches: u64,
    /// Set when the matrix has no primary columns at all, in which case the
    /// empty selection is the one solution.
    trivially_solved: bool,
}

impl<M: Matrix> Solver<M> {
    /// Create a solver that enumerates the matrix's solutions from the
    /// start.
    pub fn new(matrix: M) -> Self {
        let mut solver = Self {
            matrix,
            partial: Vec::new(),
            stack: Vec::new(),
            num_searches: 0,
            trivially_solved: false,
        };

        match solver.matrix.choose_column() {
            None => solver.trivially_solved = true,
            Some(column) => solver.push_column(column),
        }

        solver
    }

    /// Create a solver fast-forwarded to the position recorded in
    /// `checkpoint`. The matrix must be freshly built from the same problem
    /// definition as the run that produced the checkpoint.
    ///
    /// Replay selects exactly the recorded row at each depth, discarding the
    /// candidates that precede it (they were exhausted before the pause) and
    /// keeping the ones after it pending. A solution sitting at the end of
    /// the recorded path is not re-yielded. Replayed selections are not
    /// added to the step count; the counter continues from the checkpoint
    /// value.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::StaleCheckpoint`] when the recorded path cannot
    /// be reproduced on this matrix, e.g. because the problem definition no
    /// longer matches the one that was checkpointed.
    pub fn resume(matrix: M, checkpoint: &Checkpoint) -> Result<Self, Error> {
        let mut solver = Self::new(matrix);
        solver.num_searches = checkpoint.num_searches;

        for (depth, &row) in checkpoint.path.iter().enumerate() {
            solver.replay(depth, row)?;
        }

        debug!(
            "resumed search at depth {} with {} prior searches",
            checkpoint.path.len(),
            checkpoint.num_searches
        );
        Ok(solver)
    }

    /// Capture the current position as a resumption checkpoint.
    ///
    /// Taken right after a solution is yielded, the path is that solution's
    /// row selection; resuming from it continues with the solutions that
    /// would have followed it.
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            path: self.partial.clone(),
            num_searches: self.num_searches,
        }
    }

    /// The number of row trials performed so far.
    pub fn num_searches(&self) -> u64 {
        self.num_searches
    }

    /// The matrix being searched.
    pub fn matrix(&self) -> &M {
        &self.matrix
    }

    /// Cover `column` and push a frame for its candidate rows. A column
    /// without live rows is a dead branch: it is uncovered again and no
    /// frame is pushed.
    fn push_column(&mut self, column: usize) {
        self.matrix.cover(column);
        let pending: VecDeque<usize> = self.matrix.live_rows(column).into();
        if pending.is_empty() {
            self.matrix.uncover(column);
        } else {
            self.stack.push(Frame {
                column,
                pending,
                state: FrameState::Cover,
            });
        }
    }

    /// Re-apply one recorded selection while fast-forwarding.
    fn replay(&mut self, depth: usize, row: usize) -> Result<(), Error> {
        let stale = Error::StaleCheckpoint { depth, row };

        if self.trivially_solved {
            return Err(stale);
        }
        let Some(frame) = self.stack.last_mut() else {
            return Err(stale);
        };
        // A dead end or completed solution mid-path means the recorded path
        // descends further than this matrix allows.
        if !matches!(frame.state, FrameState::Cover) {
            return Err(stale);
        }

        // Candidates before the recorded row were fully explored by the
        // previous run; drop them without branching.
        while frame.pending.front() != Some(&row) {
            if frame.pending.pop_front().is_none() {
                return Err(stale);
            }
        }
        frame.state = FrameState::Uncover;
        let column = frame.column;

        self.partial.push(row);
        self.matrix.cover_siblings(row, column);
        if let Some(next) = self.matrix.choose_column() {
            self.push_column(next);
        }
        // A terminal state here is the checkpointed solution itself; leaving
        // the frame in `Uncover` state makes the next call backtrack past it
        // instead of emitting it again.

        Ok(())
    }

    /// Compute up to the next solution, returning `None` once the search
    /// space is exhausted.
    pub fn next_solution(&mut self) -> Option<Vec<usize>> {
        if self.trivially_solved {
            // No primary columns to cover: the empty selection is the single
            // solution.
            self.trivially_solved = false;
            return Some(Vec::new());
        }

        while let Some(mut frame) = self.stack.pop() {
            match frame.state {
                FrameState::Cover => {
                    let column = frame.column;
                    let row = *frame
                        .pending
                        .front()
                        .expect("cover frame always has a pending row");
                    frame.state = FrameState::Uncover;
                    self.stack.push(frame);

                    trace!("trying row {row} for column {column}");
                    self.partial.push(row);
                    self.num_searches += 1;
                    self.matrix.cover_siblings(row, column);

                    match self.matrix.choose_column() {
                        None => {
                            debug!(
                                "solution found at depth {} after {} searches",
                                self.partial.len(),
                                self.num_searches
                            );
                            return Some(self.partial.clone());
                        }
                        Some(next) => self.push_column(next),
                    }
                }
                FrameState::Uncover => {
                    let column = frame.column;
                    let row = frame
                        .pending
                        .pop_front()
                        .expect("uncover frame always has a selected row");

                    self.matrix.uncover_siblings(row, column);
                    self.partial.pop();

                    if frame.pending.is_empty() {
                        self.matrix.uncover(column);
                    } else {
                        frame.state = FrameState::Cover;
                        self.stack.push(frame);
                    }
                }
            }
        }

        None
    }

    /// Drain the remaining solutions.
    pub fn all_solutions(&mut self) -> Vec<Vec<usize>> {
        self.collect()
    }
}

impl<M: Matrix> Iterator for Solver<M> {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_solution()
    }
}
