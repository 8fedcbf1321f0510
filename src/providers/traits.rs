use async_trait::async_trait;

/// A text-generation backend.
///
/// Any backend that can answer a prompt and list its models can drive the
/// composer; backends are swapped at runtime through [`super::create_provider`].
#[async_trait]
pub trait Provider: Send + Sync {
    /// Human-readable backend name used in logs and errors.
    fn name(&self) -> &str;

    async fn chat(&self, message: &str, model: &str, temperature: f64) -> anyhow::Result<String> {
        self.chat_with_system(None, message, model, temperature)
            .await
    }

    async fn chat_with_system(
        &self,
        system_prompt: Option<&str>,
        message: &str,
        model: &str,
        temperature: f64,
    ) -> anyhow::Result<String>;

    /// Model identifiers the backend can serve.
    async fn list_models(&self) -> anyhow::Result<Vec<String>>;
}
