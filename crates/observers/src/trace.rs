use braid_core::Observer;
use braid_solvers::coupling::gauss_seidel::{Action, Event};

/// Records the coupling estimate produced by each solver sweep.
///
/// The solver stays silent by design; attach a `Trace` when iteration
/// history is wanted for inspection or reporting. Pass it by mutable
/// reference so the rows remain available after the solve:
///
/// ```ignore
/// let mut trace = Trace::new();
/// let solution = gauss_seidel::solve(&model, &problem, initial, &config, &mut trace)?;
/// for (iter, coupling) in trace.rows() {
///     println!("{iter}: {coupling:?}");
/// }
/// ```
#[derive(Debug, Default)]
pub struct Trace<const N: usize> {
    rows: Vec<(usize, [f64; N])>,
}

impl<const N: usize> Trace<N> {
    /// Creates an empty trace.
    #[must_use]
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// Returns the recorded `(iteration, coupling)` rows.
    #[must_use]
    pub fn rows(&self) -> &[(usize, [f64; N])] {
        &self.rows
    }

    /// Returns the number of recorded sweeps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl<'a, I, O, const N: usize> Observer<Event<'a, I, O, N>, Action> for &mut Trace<N> {
    fn observe(&mut self, event: &Event<'a, I, O, N>) -> Option<Action> {
        self.rows.push((event.iter, event.eval.updated));
        None
    }
}
