mod repl;
pub use repl::{Command, Outcome, Repl, Setting, Settings};
