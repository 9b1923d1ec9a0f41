pub mod driver;
pub mod error;
pub mod parser;
pub mod report;
pub mod runner;
pub mod utils;
pub mod validator;

// Re-export common items
pub use error::GradeError;
pub use report::Report;
pub use runner::run;
pub use utils::config::{Config, Engine};
pub use validator::valid_string;
