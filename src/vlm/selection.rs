use std::sync::OnceLock;

use crate::utils::platform::{is_target_platform, Platform};
use crate::vlm::specs::VlmModelSpec;

static SELECTED: OnceLock<VlmModelSpec> = OnceLock::new();

impl VlmModelSpec {
    pub fn for_platform(platform: Platform) -> Self {
        Self::for_target(platform.is_target())
    }

    fn for_target(is_target: bool) -> Self {
        if is_target {
            VlmModelSpec::SmolDoclingMlx
        } else {
            VlmModelSpec::SmolDoclingTransformers
        }
    }
}

/// Model configuration for this host: the MLX build on macOS, the
/// transformers build everywhere else. Resolved once per process.
pub fn select_model_config() -> VlmModelSpec {
    *SELECTED.get_or_init(|| {
        let spec = VlmModelSpec::for_target(is_target_platform());
        tracing::debug!(model = spec.name(), "selected VLM model configuration");
        spec
    })
}
