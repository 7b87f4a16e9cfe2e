// src/lib.rs

pub mod core;
pub mod error;
pub mod history;
pub mod share;
pub mod c_api;
pub use crate::core::engine::{EngineConfig, GematriaEngine};
pub use crate::core::tables::{reduced, LetterValueTable};
pub use crate::core::types::{Computation, GematriaResult, LetterBreakdownEntry, Metric, Report, Scheme};
pub use crate::error::{GematriaError, Result};
pub use crate::history::{RecentResultsEntry, RecentResultsLog};
pub use crate::share::ShareQuery;
