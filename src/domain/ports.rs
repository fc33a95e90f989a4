use crate::domain::model::{LpModel, SolverOutcome};
use crate::utils::error::Result;

/// An LP backend. Implementations receive a fresh model per call and must not
/// share mutable state between calls.
pub trait LpSolver: Send + Sync {
    fn name(&self) -> &'static str;

    /// Solves once. Infeasible, unbounded and undecided problems are reported
    /// through `SolverOutcome::status`; `Err` is reserved for backend failures.
    fn solve(&self, model: &LpModel) -> Result<SolverOutcome>;
}

pub trait ServerSettings: Send + Sync {
    fn host(&self) -> &str;
    fn port(&self) -> u16;

    fn bind_address(&self) -> String {
        format!("{}:{}", self.host(), self.port())
    }
}
