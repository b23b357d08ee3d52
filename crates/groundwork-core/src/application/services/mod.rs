//! Application services.
//!
//! One service today: the scaffold pipeline. Kept in its own module so future
//! services (template packs, migrations) have an obvious home.

pub mod pipeline;

pub use pipeline::{RenderedScaffold, ScaffoldPipeline, ScaffoldReport};
