pub mod selection;
pub mod specs;

pub use selection::select_model_config;
pub use specs::{AcceleratorDevice, InferenceFramework, InlineVlmOptions, ResponseFormat, VlmModelSpec};
