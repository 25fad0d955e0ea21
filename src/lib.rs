//! Classifies command-line arguments into named options and trailing operands.
//!
//! ```
//! use optextract::extract;
//!
//! let args: Vec<String> = ["--name", "alice", "--", "-f"].iter().map(|s| s.to_string()).collect();
//! let extraction = extract(&args).unwrap();
//!
//! assert_eq!(extraction.values("--name"), Some(&["alice".to_string()][..]));
//! assert_eq!(extraction.trailing(), &["-f".to_string()][..]);
//! ```

pub mod extract;
pub mod logging;
pub mod output;
pub mod settings;

pub use extract::{extract, Extract, ExtractError, Extraction, OptionExtractor};
pub use output::{render, OutputFormat, UnknownFormat};
pub use settings::Settings;
