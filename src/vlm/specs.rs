use serde::{Deserialize, Serialize};

const SMOLDOCLING_PROMPT: &str = "Convert this page to docling.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InferenceFramework {
    Mlx,
    Transformers,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseFormat {
    Doctags,
    Markdown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AcceleratorDevice {
    Cpu,
    Cuda,
    Mps,
}

/// Full configuration of an inline vision-language model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InlineVlmOptions {
    pub repo_id: String,
    pub prompt: String,
    pub response_format: ResponseFormat,
    pub inference_framework: InferenceFramework,
    pub supported_devices: Vec<AcceleratorDevice>,
    pub scale: f32,
    pub temperature: f32,
}

/// Predefined model configurations.
///
/// The tag is cheap to pass around; [`VlmModelSpec::options`] builds the
/// full configuration only for the variant actually in use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VlmModelSpec {
    /// SmolDocling converted for Apple's MLX runtime.
    SmolDoclingMlx,
    /// SmolDocling through Hugging Face transformers; runs anywhere.
    SmolDoclingTransformers,
}

impl VlmModelSpec {
    pub fn name(self) -> &'static str {
        match self {
            VlmModelSpec::SmolDoclingMlx => "SMOLDOCLING_MLX",
            VlmModelSpec::SmolDoclingTransformers => "SMOLDOCLING_TRANSFORMERS",
        }
    }

    pub fn options(self) -> InlineVlmOptions {
        match self {
            VlmModelSpec::SmolDoclingMlx => InlineVlmOptions {
                repo_id: "ds4sd/SmolDocling-256M-preview-mlx-bf16".into(),
                prompt: SMOLDOCLING_PROMPT.into(),
                response_format: ResponseFormat::Doctags,
                inference_framework: InferenceFramework::Mlx,
                supported_devices: vec![AcceleratorDevice::Mps],
                scale: 2.0,
                temperature: 0.0,
            },
            VlmModelSpec::SmolDoclingTransformers => InlineVlmOptions {
                repo_id: "ds4sd/SmolDocling-256M-preview".into(),
                prompt: SMOLDOCLING_PROMPT.into(),
                response_format: ResponseFormat::Doctags,
                inference_framework: InferenceFramework::Transformers,
                supported_devices: vec![
                    AcceleratorDevice::Cpu,
                    AcceleratorDevice::Cuda,
                    AcceleratorDevice::Mps,
                ],
                scale: 2.0,
                temperature: 0.0,
            },
        }
    }
}
