//! Assessment domain: framework rubrics, scores, records and the
//! per-session store that aggregates them.

pub mod error;
pub mod export;
pub mod framework;
pub mod record;
pub mod score;
pub mod store;

pub use error::ValidationError;
pub use framework::{CategoryDef, Framework, FrameworkCatalog, FrameworkDef, FrameworkFilter};
pub use record::{Assessment, Submission};
pub use score::{MaturityBand, Score};
pub use store::AssessmentStore;
