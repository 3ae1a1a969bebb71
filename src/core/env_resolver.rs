// src/core/env_resolver.rs

use crate::constants::DEFAULT_LAYER;
use crate::core::ResolveError;
use crate::models::{Project, ResolvedEnvironment};

/// Merges a project's environment layers into one variable set.
///
/// Merge order is fixed: the `default` layer is applied first, then the named
/// target layer, which wins on key collision. There is no transitive layer
/// inheritance. With `layer` omitted only `default` applies, and a project
/// without an `env` block resolves to the empty mapping.
pub fn resolve(project: &Project, layer: Option<&str>) -> Result<ResolvedEnvironment, ResolveError> {
    let Some(env) = &project.env else {
        return match layer {
            None => Ok(ResolvedEnvironment::new()),
            Some(name) => Err(ResolveError::UnknownLayer {
                project: project.name.clone(),
                layer: name.to_string(),
            }),
        };
    };

    let mut merged = env.layers.get(DEFAULT_LAYER).cloned().unwrap_or_default();

    if let Some(name) = layer {
        let overlay = env.layers.get(name).ok_or_else(|| ResolveError::UnknownLayer {
            project: project.name.clone(),
            layer: name.to_string(),
        })?;
        merged.extend(overlay.clone());
    }

    log::debug!(
        "Resolved environment for '{}' (layer: {}): {} variable(s)",
        project.name,
        layer.unwrap_or(DEFAULT_LAYER),
        merged.len()
    );
    Ok(merged)
}
