//! Stemmer switches shared by every command.

use clap::Args;
use porter2::Stemmer;

/// Flags that turn off parts of the algorithm.
#[derive(Debug, Clone, Copy, Default, Args)]
pub struct StemmerOptions {
    /// Skip the whole-word exception tables.
    #[arg(long)]
    pub no_exceptions: bool,

    /// Skip re-appending fragments lost from generous, generic, community and friends.
    #[arg(long)]
    pub no_repair: bool,
}

impl StemmerOptions {
    /// Build the configured stemmer.
    pub fn stemmer(self) -> Stemmer {
        Stemmer::builder()
            .exceptions(!self.no_exceptions)
            .repair_overstemming(!self.no_repair)
            .build()
    }
}
