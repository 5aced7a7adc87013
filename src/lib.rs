pub mod config;
pub mod engine;
pub mod util;
pub mod web;

pub use config::Config;
pub use engine::{sort, Algorithm, EngineError, History, SortOutcome, SortStats, Step};
pub use web::{build_router, run_server, ServerConfig, WebAppState};
