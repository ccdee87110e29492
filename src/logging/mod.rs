//! Structured logging helpers
//!
//! Filter construction from [`LoggingConfig`](crate::config::LoggingConfig),
//! request ID generation and privacy-safe field formatting.

pub mod fields;
pub mod middleware;

pub use fields::{format_chain, task_preview};
pub use middleware::generate_request_id;

/// Build filter directives string from LoggingConfig
///
/// Produces the base level followed by one `delegator::<component>=<level>`
/// directive per configured component, sorted by component name so the
/// result is stable.
///
/// # Examples
///
/// ```
/// use delegator::config::logging::{LogFormat, LoggingConfig};
/// use delegator::logging::build_filter_directives;
/// use std::collections::HashMap;
///
/// let mut component_levels = HashMap::new();
/// component_levels.insert("routing".to_string(), "debug".to_string());
///
/// let config = LoggingConfig {
///     level: "info".to_string(),
///     format: LogFormat::Pretty,
///     component_levels: Some(component_levels),
///     log_task_preview: false,
/// };
///
/// assert_eq!(build_filter_directives(&config), "info,delegator::routing=debug");
/// ```
pub fn build_filter_directives(config: &crate::config::LoggingConfig) -> String {
    let mut filter_str = config.level.clone();

    if let Some(component_levels) = &config.component_levels {
        let mut components: Vec<_> = component_levels.iter().collect();
        components.sort();
        for (component, level) in components {
            filter_str.push_str(&format!(",delegator::{}={}", component, level));
        }
    }

    filter_str
}
