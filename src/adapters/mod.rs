// Adapters layer: concrete implementations for external systems (solver backend, http).

pub mod http;
pub mod microlp_solver;
