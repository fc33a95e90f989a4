pub mod builder;
pub mod service;

pub use crate::domain::model::{LpModel, SolveRequest, SolveResponse, SolveStatus};
pub use crate::domain::ports::{LpSolver, ServerSettings};
pub use crate::utils::error::Result;
