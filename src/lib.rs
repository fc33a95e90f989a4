pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::microlp_solver::GoodLpSolver;
pub use crate::config::{AppConfig, CliConfig};
pub use crate::core::service::SolveService;
pub use crate::domain::model::{SolveRequest, SolveResponse, SolveStatus};
pub use crate::utils::error::{LpServiceError, Result};
