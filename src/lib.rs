//! `mp4scan` walks a directory tree and adds up the playback duration of the
//! MP4 files it finds.
//!
//! The duration of a file comes from its movie header: the `moov` box is
//! located among the top-level boxes, then `mvhd` right after it, and
//! `duration / timescale` gives the length in seconds.
//!
//! ```no_run
//! use mp4scan::{scan, Options, Stats};
//!
//! let mut sink = |path: &std::path::Path, seconds: f64| {
//!     println!("{}: {}", path.display(), mp4scan::format_hms(seconds));
//! };
//! let result = scan("/media/movies", &Options { verbose: true }, &mut sink);
//! let stats = Stats::from(result);
//! println!("{} files", stats.total_files);
//! ```

mod error;
pub use error::Error;

pub type Result<T> = std::result::Result<T, Error>;

mod types;
pub use types::*;

mod mp4box;
pub use mp4box::*;

mod duration;
pub use duration::*;

mod scan;
pub use scan::*;

pub mod report;
