//! Config namespace: layered YAML runtime settings.

mod settings;

pub use settings::{
    GatewaySettings, LlmSettings, PipelineSettings, RuntimeSettings, SourcesSettings,
    StoreSettings, absolutize, load_runtime_settings, load_runtime_settings_from_paths,
    project_root, runtime_settings_paths, set_config_home_override,
};
