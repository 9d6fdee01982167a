pub mod script;

pub use script::{ScriptError, ScriptStep, parse_script};
