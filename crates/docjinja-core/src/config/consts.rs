//! Constants shared by configuration loading and the injection hook

/// Location of the configuration document, relative to the source directory
pub const DEFAULT_CONFIG_PATH: &str = "_static/configuration.json";

/// Context key under which the configuration mapping is exposed to templates
pub const CONTEXT_KEY: &str = "config_options";
