//! Save transport collaborator
//!
//! The single asynchronous boundary of the engine. The hosting feature
//! implements [`SaveTransport`] over whatever client it already has; the
//! engine only cares whether the save resolved or rejected.

use async_trait::async_trait;

/// Delivers a generated payload to wherever it needs to go.
///
/// A rejected save is the expected failure path, not an exception: the
/// engine records it as a form-level error and leaves every field value
/// intact so the user can retry without re-entering anything.
///
/// # Examples
///
/// ```
/// use async_trait::async_trait;
/// use fieldset_forms::SaveTransport;
///
/// struct LoggingTransport;
///
/// #[async_trait]
/// impl SaveTransport for LoggingTransport {
///     async fn save(&self, payload: &serde_json::Value) -> anyhow::Result<()> {
///         println!("would send: {payload}");
///         Ok(())
///     }
/// }
/// ```
#[async_trait]
pub trait SaveTransport: Send + Sync {
	async fn save(&self, payload: &serde_json::Value) -> anyhow::Result<()>;
}
