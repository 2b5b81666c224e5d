//! Console state logic
//!
//! Renderer-free state and derivations behind the console pages: listing
//! filters, comparison selection, the comparison workbench, model detail tabs
//! and the evaluate flow.

pub mod compare;
pub mod detail;
pub mod evaluate;
pub mod filter;
pub mod selection;

pub use compare::ComparisonData;
pub use detail::{DetailState, MetricTab};
pub use filter::{filter, FilterCriteria};
pub use selection::{CompareAction, SelectionSet};
