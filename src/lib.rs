// public modules
pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod processing;
pub mod range;
pub mod replace;
pub mod settings;
pub mod tokenize;

// public uses
pub use app::{App, Options};
pub use processing::{LineProcessor, Stats};
pub use range::LineRange;
pub use replace::{LiteralReplacer, Replace, WordReplacer};
pub use settings::Settings;
pub use wildcard::{Affix, Pattern};
