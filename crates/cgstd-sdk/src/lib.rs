//! Sample-harness support shared by cgstd binaries.
//!
//! Nothing here touches a GPU or a window; these are the pieces of a sample
//! loop that stand on their own.

pub mod logging;
pub mod time;
