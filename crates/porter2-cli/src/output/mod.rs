//! Rendering helpers shared by the commands.

pub mod diagnostic;
pub mod table;

pub use diagnostic::WordDiagnostic;
