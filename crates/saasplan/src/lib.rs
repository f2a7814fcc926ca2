//! Command-line front end for the SaaS business case simulator
//!
//! Loads a baseline from a built-in preset or a YAML file, runs the
//! simulation core and renders the result as text or JSON.

pub mod cli;
pub mod input;
pub mod logging;
pub mod report;
pub mod util;

pub use cli::{Cli, Command, execute, run};
pub use input::{InputDocument, InputError, InputSource, ResolvedInput};
pub use logging::init_logging;
