use crate::domain::model::{LinearConstraint, LpModel, SolveRequest};
use crate::utils::error::Result;
use crate::utils::validation::{validate_finite, validate_non_empty};

/// Business rules that serde cannot express. Runs before any model is built.
pub fn validate(request: &SolveRequest) -> Result<()> {
    validate_non_empty("objective", request.objective.len())?;
    validate_non_empty("constraints", request.constraints.len())?;

    for (name, coefficient) in &request.objective {
        validate_finite(&format!("objective.{}", name), *coefficient)?;
    }

    for (index, constraint) in request.constraints.iter().enumerate() {
        validate_finite(&format!("constraints[{}].rhs", index), constraint.rhs)?;
        for (name, coefficient) in &constraint.lhs {
            validate_finite(
                &format!("constraints[{}].lhs.{}", index, name),
                *coefficient,
            )?;
        }
    }

    Ok(())
}

/// Validates `request` and lays it out over the objective's variable universe.
///
/// Names that appear only in a constraint's `lhs` are not variables of the
/// program and contribute nothing to that row.
pub fn build_model(request: &SolveRequest) -> Result<LpModel> {
    validate(request)?;

    let variables: Vec<String> = request.objective.keys().cloned().collect();
    let objective: Vec<f64> = request.objective.values().copied().collect();

    let constraints = request
        .constraints
        .iter()
        .map(|spec| {
            let ignored: Vec<&str> = spec
                .lhs
                .keys()
                .filter(|name| !request.objective.contains_key(*name))
                .map(String::as_str)
                .collect();
            if !ignored.is_empty() {
                tracing::debug!(
                    "Constraint '{}' references variables outside the objective, ignoring: {:?}",
                    spec.name,
                    ignored
                );
            }

            LinearConstraint {
                name: spec.name.clone(),
                coefficients: variables
                    .iter()
                    .map(|name| spec.lhs.get(name).copied().unwrap_or(0.0))
                    .collect(),
                relation: spec.sense,
                rhs: spec.rhs,
            }
        })
        .collect();

    Ok(LpModel {
        sense: request.sense,
        variables,
        objective,
        constraints,
    })
}
