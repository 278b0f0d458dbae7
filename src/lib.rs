//! `textkit` is a library of small, single-purpose text transforms.
//!
//! Every transform maps an input text (plus optional scalar parameters) to an
//! output text or an error. Transforms are looked up by name through a
//! `TransformRegistry`, and `TransformManager::get()` provides the registry
//! holding every built-in one.
//!
//! Besides the transforms, the crate provides clipboard sinks for the results
//! (`clipboard`) and a sitemap generator for the site publishing them (`sitemap`).
//!
//! "Hello world" example:
//! ```
//! use textkit::prelude::*;
//!
//! let manager = TransformManager::get();
//! let output = manager.process(&["rot13", "uppercase"], "Hello world!", &Params::new());
//! assert_eq!(output.unwrap(), "URYYB JBEYQ!");
//!
//! let outcome = Outcome::from(manager.apply("base64-decode", "not-valid-base64!!", &Params::new()));
//! assert!(!outcome.is_success());
//! ```

pub mod clipboard;
pub mod config;
pub mod constants;
pub mod error;
pub mod log;
pub mod params;
pub mod sitemap;
pub mod string_utils;
pub mod transforms;
pub mod utils;

/// The textkit prelude
///
/// This module re-exports the most commonly used items from textkit.
/// You can use it with `use textkit::prelude::*;` to bring all common items into scope.
pub mod prelude {
    // Re-export commonly used traits
    pub use crate::clipboard::Clipboard;
    pub use crate::transforms::Transform;

    // Re-export commonly used types
    pub use crate::error::{Error, Result};
    pub use crate::params::{Params, TransformInput};
    pub use crate::transforms::{Category, Outcome, TransformManager, TransformRegistry};
}
