pub mod native;
pub mod script;
pub mod traits;
pub mod web;

pub use native::NativeContext;
pub use script::ScriptContext;
pub use traits::{EvalContext, Invocation};
pub use web::{BrowserContext, BrowserOptions};

use crate::error::{chain, GradeError};
use crate::utils::config::{Config, Engine};

/// Acquire the rendering context selected by `config.engine`
pub async fn open(config: &Config) -> Result<Box<dyn EvalContext>, GradeError> {
    let engine = config.engine;
    let start_failed = |err: anyhow::Error| GradeError::ContextStart {
        engine: engine.to_string(),
        reason: chain(&err),
    };

    let ctx: Box<dyn EvalContext> = match engine {
        Engine::Browser => {
            let options = BrowserOptions::from_config(config).map_err(start_failed)?;
            Box::new(BrowserContext::launch(options).await.map_err(start_failed)?)
        }
        Engine::Script => Box::new(
            ScriptContext::new(&config.page, &config.function).map_err(start_failed)?,
        ),
        Engine::Native => Box::new(NativeContext),
    };

    log::info!("{} context acquired", ctx.engine_name());
    Ok(ctx)
}
