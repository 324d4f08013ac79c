/// Control actions supported by the descent solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver early and return the points visited so far.
    StopEarly,
}
