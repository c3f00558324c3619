use crate::error::Result;
use crate::pipeline::OutputSink;

/// Mock sink for testing without a pipeline host
#[derive(Debug, Default)]
pub struct MockSink {
    outputs: Vec<(String, String)>,
    failure: Option<String>,
}

impl MockSink {
    /// Create a new empty mock sink
    pub fn new() -> Self {
        Self::default()
    }

    /// All outputs in the order they were set
    pub fn outputs(&self) -> &[(String, String)] {
        &self.outputs
    }

    /// Last value set for `name`
    pub fn output(&self, name: &str) -> Option<&str> {
        self.outputs
            .iter()
            .rev()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Failure message, if the step was marked failed
    pub fn failure(&self) -> Option<&str> {
        self.failure.as_deref()
    }
}

impl OutputSink for MockSink {
    fn set_output(&mut self, name: &str, value: &str) -> Result<()> {
        self.outputs.push((name.to_string(), value.to_string()));
        Ok(())
    }

    fn set_failed(&mut self, message: &str) -> Result<()> {
        self.failure = Some(message.to_string());
        Ok(())
    }
}
