pub mod driver;

pub use driver::{BrowserContext, BrowserOptions};
