//! Sum-of-pairs scoring, the profile-to-profile Needleman-Wunsch aligner, and
//! progressive construction of an initial multiple alignment.
pub mod nw;
pub mod progressive;
pub mod scoring;

#[cfg(test)]
mod tests;

pub use nw::{align_profiles, NW};
pub use progressive::progressive_alignment;
pub use scoring::SumOfPairs;

use indicatif::{ProgressBar, ProgressStyle};

/// A progress bar with `len` steps, or a hidden one when `enabled` is false.
pub fn progress_bar(len: u64, msg: &'static str, enabled: bool) -> ProgressBar {
    if !enabled {
        return ProgressBar::hidden();
    }
    let bar = ProgressBar::new(len);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{msg:>10} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len}")
    {
        bar.set_style(style);
    }
    bar.set_message(msg);
    bar
}
