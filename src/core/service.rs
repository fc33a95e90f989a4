use crate::core::builder::build_model;
use crate::domain::model::{LpModel, SolveRequest, SolveResponse, SolverOutcome};
use crate::domain::ports::LpSolver;
use crate::utils::error::{LpServiceError, Result};
use indexmap::IndexMap;

/// Validates, builds, solves and maps a single request. Holds no per-request state.
pub struct SolveService<S: LpSolver> {
    solver: S,
}

impl<S: LpSolver> SolveService<S> {
    pub fn new(solver: S) -> Self {
        Self { solver }
    }

    pub fn solver_name(&self) -> &'static str {
        self.solver.name()
    }

    pub fn solve(&self, request: &SolveRequest) -> Result<SolveResponse> {
        tracing::debug!("Received problem: {:?}", request);

        let model = build_model(request)?;
        log_model(&model);

        let outcome = self.solver.solve(&model)?;
        let response = map_outcome(&model, outcome)?;

        tracing::info!(
            "✅ Solved {} variables / {} constraints with {}: status={}, optimum={:?}",
            model.variables.len(),
            model.constraints.len(),
            self.solver.name(),
            response.status,
            response.optimum
        );
        tracing::debug!("Solution values: {:?}", response.vars);

        Ok(response)
    }
}

fn log_model(model: &LpModel) {
    if !tracing::enabled!(tracing::Level::DEBUG) {
        return;
    }
    let objective: Vec<String> = model
        .objective
        .iter()
        .zip(&model.variables)
        .map(|(coefficient, name)| format!("{} {}", coefficient, name))
        .collect();
    tracing::debug!("{:?} {}", model.sense, objective.join(" + "));
    for constraint in &model.constraints {
        tracing::debug!(
            "  [{}] {}",
            constraint.name,
            constraint.describe(&model.variables)
        );
    }
}

fn map_outcome(model: &LpModel, outcome: SolverOutcome) -> Result<SolveResponse> {
    let vars: IndexMap<String, Option<f64>> = match outcome.values {
        Some(values) => {
            if values.len() != model.variables.len() {
                return Err(LpServiceError::SolverError {
                    message: format!(
                        "solver returned {} values for {} variables",
                        values.len(),
                        model.variables.len()
                    ),
                });
            }
            model
                .variables
                .iter()
                .cloned()
                .zip(values.into_iter().map(Some))
                .collect()
        }
        None => model
            .variables
            .iter()
            .map(|name| (name.clone(), None))
            .collect(),
    };

    Ok(SolveResponse {
        status: outcome.status,
        vars,
        optimum: outcome.objective_value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::SolveStatus;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FixedSolver {
        outcome: SolverOutcome,
        calls: AtomicUsize,
    }

    impl LpSolver for FixedSolver {
        fn name(&self) -> &'static str {
            "fixed"
        }

        fn solve(&self, _model: &LpModel) -> Result<SolverOutcome> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.outcome.clone())
        }
    }

    fn service(outcome: SolverOutcome) -> SolveService<FixedSolver> {
        SolveService::new(FixedSolver {
            outcome,
            calls: AtomicUsize::new(0),
        })
    }

    fn two_variable_request() -> SolveRequest {
        serde_json::from_value(json!({
            "objective": {"x": 3, "y": 2},
            "constraints": [{"name": "c1", "lhs": {"x": 1, "y": 1}, "sense": ">=", "rhs": 10}],
            "sense": "Minimize"
        }))
        .unwrap()
    }

    #[test]
    fn test_optimal_outcome_maps_values_in_objective_order() {
        let service = service(SolverOutcome {
            status: SolveStatus::Optimal,
            values: Some(vec![0.0, 10.0]),
            objective_value: Some(20.0),
        });

        let response = service.solve(&two_variable_request()).unwrap();

        assert_eq!(response.status, SolveStatus::Optimal);
        assert_eq!(
            response.vars.iter().collect::<Vec<_>>(),
            vec![
                (&"x".to_string(), &Some(0.0)),
                (&"y".to_string(), &Some(10.0))
            ]
        );
        assert_eq!(response.optimum, Some(20.0));
        assert_eq!(service.solver.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_non_optimal_outcome_reports_nulls() {
        let service = service(SolverOutcome::without_solution(SolveStatus::Unbounded));

        let response = service.solve(&two_variable_request()).unwrap();

        assert_eq!(response.status, SolveStatus::Unbounded);
        assert_eq!(response.vars.len(), 2);
        assert!(response.vars.values().all(Option::is_none));
        assert_eq!(response.optimum, None);
    }

    #[test]
    fn test_invalid_request_never_reaches_solver() {
        let service = service(SolverOutcome::without_solution(SolveStatus::Undefined));
        let mut request = two_variable_request();
        request.constraints.clear();

        assert!(service.solve(&request).is_err());
        assert_eq!(service.solver.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_value_count_mismatch_is_solver_error() {
        let service = service(SolverOutcome {
            status: SolveStatus::Optimal,
            values: Some(vec![1.0]),
            objective_value: Some(3.0),
        });

        let err = service.solve(&two_variable_request()).unwrap_err();
        assert!(matches!(err, LpServiceError::SolverError { .. }));
    }
}
