//! Shared test helpers for template engine tests

use crate::template::engine::TemplateContext;
use serde_json::json;

/// Create a simple test context with basic scalar values
pub(super) fn simple_context() -> TemplateContext {
    TemplateContext::new(json!({
        "title": "My Title",
        "count": 42,
        "price": 9.99,
        "enabled": true,
    }))
}

/// Create a context shaped like the hook's: everything under `config_options`
pub(super) fn nested_context() -> TemplateContext {
    TemplateContext::new(json!({
        "config_options": {
            "product": "Gateway",
            "server": {
                "port": 8080,
                "tls": { "enabled": false }
            },
            "plugins": [
                { "name": "auth", "default": true },
                { "name": "metrics", "default": false }
            ]
        }
    }))
}
