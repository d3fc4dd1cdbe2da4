pub mod public;
mod router;
pub use router::{DOCS_PATH, router};
