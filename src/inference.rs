//! Inference Runtime
//!
//! Stand-in for a native model-inference engine: a fixed-length float
//! buffer in, a fixed-length float buffer out. The pass copies the input
//! into the output and zero-fills the remainder; it carries the call shape
//! of a real runtime without loading a model.

use tracing::{debug, info};

/// Stand-in inference runtime bound to a model path
#[derive(Debug, Clone)]
pub struct InferenceRuntime {
    model_path: String,
}

impl InferenceRuntime {
    /// Create a runtime for the given model path.
    ///
    /// The path is recorded, not opened.
    pub fn new(model_path: impl Into<String>) -> Self {
        let model_path = model_path.into();
        info!(model = %model_path, "Inference runtime created");
        Self { model_path }
    }

    /// Get the model path this runtime was created with
    pub fn model_path(&self) -> &str {
        &self.model_path
    }

    /// Run one inference pass, producing a buffer of `output_len` floats.
    ///
    /// The first `min(input.len(), output_len)` components are copied from
    /// `input`; any remaining output components are zero.
    pub fn run(&self, input: &[f32], output_len: usize) -> Vec<f32> {
        let mut output = vec![0.0f32; output_len];
        let copied = input.len().min(output_len);
        output[..copied].copy_from_slice(&input[..copied]);

        debug!(
            model = %self.model_path,
            input_len = input.len(),
            output_len,
            "Inference pass completed"
        );
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_matches_input() {
        let runtime = InferenceRuntime::new("model.onnx");
        let output = runtime.run(&[1.0, 2.0, 3.0], 3);
        assert_eq!(output, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_short_input_zero_fills() {
        let runtime = InferenceRuntime::new("model.onnx");
        let output = runtime.run(&[1.0, 2.0], 5);
        assert_eq!(output, vec![1.0, 2.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_long_input_truncated() {
        let runtime = InferenceRuntime::new("model.onnx");
        let output = runtime.run(&[1.0, 2.0, 3.0, 4.0], 2);
        assert_eq!(output, vec![1.0, 2.0]);
    }

    #[test]
    fn test_zero_length_output() {
        let runtime = InferenceRuntime::new("model.onnx");
        let output = runtime.run(&[1.0, 2.0], 0);
        assert!(output.is_empty());
    }

    #[test]
    fn test_model_path_recorded() {
        let runtime = InferenceRuntime::new("/models/encoder.onnx");
        assert_eq!(runtime.model_path(), "/models/encoder.onnx");
    }
}
