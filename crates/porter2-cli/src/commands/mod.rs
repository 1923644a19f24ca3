//! CLI command implementations.

mod explain;
mod options;
mod stem;
mod verify;

pub use explain::{run_explain, ExplainArgs};
pub use options::StemmerOptions;
pub use stem::{run_stem, StemArgs};
pub use verify::{run_verify, VerifyArgs};
