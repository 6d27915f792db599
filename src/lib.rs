#[macro_use] pub mod core;

pub mod cli;
pub mod config;
pub mod decompose;
pub mod errors;
pub mod input;
pub mod options;
pub mod units;

mod accumulate;
mod assemble;
mod format;

pub use self::accumulate::{accumulate, add};
pub use self::assemble::assemble;
pub use self::errors::FormatError;
pub use self::format::{PrettyMs, format, format_duration};
pub use self::input::{Milliseconds, validate};
pub use self::options::Options;
