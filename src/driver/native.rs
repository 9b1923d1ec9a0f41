use anyhow::Result;
use async_trait::async_trait;

use crate::driver::traits::{EvalContext, Invocation};
use crate::validator::valid_string;

/// Context backed by the built-in validator. Loads nothing.
///
/// Grading a suite against it checks that the suite's expected values agree
/// with the reference behaviour.
#[derive(Debug, Default)]
pub struct NativeContext;

#[async_trait(?Send)]
impl EvalContext for NativeContext {
    fn engine_name(&self) -> &str {
        "native"
    }

    async fn load(&mut self) -> Result<()> {
        Ok(())
    }

    async fn invoke(&mut self, input: &str) -> Invocation {
        Invocation::Returned(valid_string(input))
    }

    async fn close(&mut self) -> Result<()> {
        Ok(())
    }
}
