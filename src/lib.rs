pub mod cli;
pub mod config;
pub mod error;
pub mod extrapolate;
pub mod logging;
pub mod sequence;
pub mod summary;

pub use config::Settings;
pub use error::{InputError, SequenceError};
pub use extrapolate::{LayerStack, extrapolate, extrapolate_backward};
pub use sequence::Sequence;
pub use summary::{RejectedLine, Summary, summarize, summarize_file};
