//! Wordfold – a left-to-right word expression reducer
//!
//! Expressions are plain words joined by two operators:
//! - `+` appends the next word to everything on its left
//! - `-` strikes the first occurrence of the next word out of everything on its left
//!
//! ```
//! assert_eq!(wordfold::reduce("NA + NA + NA + BATMAN").unwrap(), "NANANABATMAN");
//! assert_eq!(wordfold::reduce("hello + world - llowo").unwrap(), "herld");
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

/// Reducer configuration
pub mod config;
/// Tokenizer, operators and reducer
pub mod interpreter;

// Re-export key types for convenience
pub use config::ReducerConfig;
pub use interpreter::{ReduceError, Reducer, Reduction, Step, reduce};

/// Current version of wordfold
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
