//! [`LpSolver`] backed by the `good_lp` modeller and its pure-Rust `microlp` backend.

use crate::domain::model::{LpModel, ObjectiveSense, Relation, SolveStatus, SolverOutcome};
use crate::domain::ports::LpSolver;
use crate::utils::error::Result;
use good_lp::{
    constraint, microlp, variable, Constraint, Expression, ProblemVariables, ResolutionError,
    Solution, SolverModel, Variable,
};

#[derive(Debug, Clone, Copy, Default)]
pub struct GoodLpSolver;

impl GoodLpSolver {
    pub fn new() -> Self {
        Self
    }
}

fn weighted_sum(coefficients: &[f64], variables: &[Variable]) -> Expression {
    coefficients
        .iter()
        .zip(variables)
        .map(|(coefficient, variable)| *coefficient * *variable)
        .sum()
}

fn to_constraint(lhs: Expression, relation: Relation, rhs: f64) -> Constraint {
    let rhs = Expression::from(rhs);
    match relation {
        Relation::LessOrEqual => constraint::leq(lhs, rhs),
        Relation::GreaterOrEqual => constraint::geq(lhs, rhs),
        Relation::Equal => constraint::eq(lhs, rhs),
    }
}

impl LpSolver for GoodLpSolver {
    fn name(&self) -> &'static str {
        "microlp"
    }

    fn solve(&self, model: &LpModel) -> Result<SolverOutcome> {
        let mut problem = ProblemVariables::new();
        let variables: Vec<Variable> = model
            .variables
            .iter()
            .map(|name| problem.add(variable().min(0.0).name(name.clone())))
            .collect();

        let objective = weighted_sum(&model.objective, &variables);
        let unsolved = match model.sense {
            ObjectiveSense::Minimize => problem.minimise(objective.clone()),
            ObjectiveSense::Maximize => problem.maximise(objective.clone()),
        };

        let lp = model
            .constraints
            .iter()
            .fold(unsolved.using(microlp), |lp, row| {
                let lhs = weighted_sum(&row.coefficients, &variables);
                lp.with(to_constraint(lhs, row.relation, row.rhs))
            });

        let outcome = match lp.solve() {
            Ok(solution) => SolverOutcome {
                status: SolveStatus::Optimal,
                values: Some(variables.iter().map(|v| solution.value(*v)).collect()),
                objective_value: Some(solution.eval(&objective)),
            },
            Err(ResolutionError::Infeasible) => {
                SolverOutcome::without_solution(SolveStatus::Infeasible)
            }
            Err(ResolutionError::Unbounded) => {
                SolverOutcome::without_solution(SolveStatus::Unbounded)
            }
            Err(other) => {
                tracing::warn!("Solver stopped without a result: {}", other);
                SolverOutcome::without_solution(SolveStatus::Undefined)
            }
        };

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::LinearConstraint;
    use float_eq::assert_float_eq;

    fn row(coefficients: Vec<f64>, relation: Relation, rhs: f64) -> LinearConstraint {
        LinearConstraint {
            name: String::new(),
            coefficients,
            relation,
            rhs,
        }
    }

    #[test]
    fn test_minimise_cost_over_demand() {
        let model = LpModel {
            sense: ObjectiveSense::Minimize,
            variables: vec!["x".to_string(), "y".to_string()],
            objective: vec![3.0, 2.0],
            constraints: vec![row(vec![1.0, 1.0], Relation::GreaterOrEqual, 10.0)],
        };

        let outcome = GoodLpSolver::new().solve(&model).unwrap();
        let values = outcome.values.unwrap();

        assert_eq!(outcome.status, SolveStatus::Optimal);
        assert_float_eq!(values[0], 0.0, abs <= 1e-6);
        assert_float_eq!(values[1], 10.0, abs <= 1e-6);
        assert_float_eq!(outcome.objective_value.unwrap(), 20.0, abs <= 1e-6);
    }

    #[test]
    fn test_equality_constraint() {
        let model = LpModel {
            sense: ObjectiveSense::Maximize,
            variables: vec!["a".to_string(), "b".to_string()],
            objective: vec![1.0, 2.0],
            constraints: vec![
                row(vec![1.0, 1.0], Relation::Equal, 6.0),
                row(vec![0.0, 1.0], Relation::LessOrEqual, 4.0),
            ],
        };

        let outcome = GoodLpSolver::new().solve(&model).unwrap();
        let values = outcome.values.unwrap();

        assert_float_eq!(values[0], 2.0, abs <= 1e-6);
        assert_float_eq!(values[1], 4.0, abs <= 1e-6);
        assert_float_eq!(outcome.objective_value.unwrap(), 10.0, abs <= 1e-6);
    }

    #[test]
    fn test_infeasible_reports_no_solution() {
        let model = LpModel {
            sense: ObjectiveSense::Minimize,
            variables: vec!["x".to_string()],
            objective: vec![1.0],
            constraints: vec![
                row(vec![1.0], Relation::LessOrEqual, 1.0),
                row(vec![1.0], Relation::GreaterOrEqual, 5.0),
            ],
        };

        let outcome = GoodLpSolver::new().solve(&model).unwrap();

        assert_eq!(outcome, SolverOutcome::without_solution(SolveStatus::Infeasible));
    }

    #[test]
    fn test_unbounded_reports_no_solution() {
        let model = LpModel {
            sense: ObjectiveSense::Maximize,
            variables: vec!["x".to_string()],
            objective: vec![1.0],
            constraints: vec![row(vec![1.0], Relation::GreaterOrEqual, 1.0)],
        };

        let outcome = GoodLpSolver::new().solve(&model).unwrap();

        assert_eq!(outcome.status, SolveStatus::Unbounded);
        assert!(outcome.values.is_none());
    }
}
