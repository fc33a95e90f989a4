use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of optimisation. Only the exact literals `Minimize` and `Maximize` parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObjectiveSense {
    Minimize,
    Maximize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Relation {
    #[serde(rename = "<=")]
    LessOrEqual,
    #[serde(rename = ">=")]
    GreaterOrEqual,
    #[serde(rename = "==")]
    Equal,
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Relation::LessOrEqual => "<=",
            Relation::GreaterOrEqual => ">=",
            Relation::Equal => "==",
        };
        f.write_str(symbol)
    }
}

/// Body of `POST /solve`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolveRequest {
    pub objective: IndexMap<String, f64>,
    pub constraints: Vec<ConstraintSpec>,
    pub sense: ObjectiveSense,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConstraintSpec {
    /// Diagnostic label only; need not be unique.
    #[serde(default)]
    pub name: String,
    pub lhs: IndexMap<String, f64>,
    pub sense: Relation,
    pub rhs: f64,
}

/// A validated linear program over the objective's variable universe.
///
/// Every row in `constraints` is dense: `coefficients[i]` belongs to
/// `variables[i]`, with 0 standing in for names a constraint did not mention.
#[derive(Debug, Clone, PartialEq)]
pub struct LpModel {
    pub sense: ObjectiveSense,
    pub variables: Vec<String>,
    pub objective: Vec<f64>,
    pub constraints: Vec<LinearConstraint>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LinearConstraint {
    pub name: String,
    pub coefficients: Vec<f64>,
    pub relation: Relation,
    pub rhs: f64,
}

impl LinearConstraint {
    /// Renders the row as `3 x + 1 y <= 10` for debug logging.
    pub fn describe(&self, variables: &[String]) -> String {
        let terms: Vec<String> = self
            .coefficients
            .iter()
            .zip(variables)
            .filter(|(coefficient, _)| **coefficient != 0.0)
            .map(|(coefficient, name)| format!("{} {}", coefficient, name))
            .collect();
        let lhs = if terms.is_empty() {
            "0".to_string()
        } else {
            terms.join(" + ")
        };
        format!("{} {} {}", lhs, self.relation, self.rhs)
    }
}

/// Terminal state reported for a solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SolveStatus {
    Optimal,
    Infeasible,
    Unbounded,
    /// The solver stopped without a definite answer.
    Undefined,
}

impl SolveStatus {
    pub fn is_optimal(self) -> bool {
        matches!(self, SolveStatus::Optimal)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SolveStatus::Optimal => "Optimal",
            SolveStatus::Infeasible => "Infeasible",
            SolveStatus::Unbounded => "Unbounded",
            SolveStatus::Undefined => "Undefined",
        }
    }
}

impl fmt::Display for SolveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a solver hands back. `values` follows `LpModel::variables` order.
#[derive(Debug, Clone, PartialEq)]
pub struct SolverOutcome {
    pub status: SolveStatus,
    pub values: Option<Vec<f64>>,
    pub objective_value: Option<f64>,
}

impl SolverOutcome {
    pub fn without_solution(status: SolveStatus) -> Self {
        Self {
            status,
            values: None,
            objective_value: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolveResponse {
    pub status: SolveStatus,
    pub vars: IndexMap<String, Option<f64>>,
    pub optimum: Option<f64>,
}
