// src/core/context.rs

use crate::core::paths;
use crate::models::{Config, Project};
use std::path::Path;

/// Determines the active project from a working directory.
///
/// A project is active when `cwd` lies inside its expanded root
/// (component-wise containment, not string-prefix matching). When project
/// roots nest, the deepest matching root wins. The directory is passed in
/// explicitly; this module holds no global state.
pub fn current_project<'a>(config: &'a Config, cwd: &Path) -> Option<&'a Project> {
    let found = config
        .projects
        .iter()
        .filter_map(|project| {
            let root = paths::expand_user_path(&project.root);
            cwd.starts_with(&root)
                .then(|| (root.components().count(), project))
        })
        .max_by_key(|(depth, _)| *depth)
        .map(|(_, project)| project);

    match found {
        Some(project) => log::info!("Current project: {}", project.name),
        None => log::debug!("Not in a project directory"),
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(name: &str, root: &str) -> Project {
        Project {
            name: name.to_string(),
            root: root.to_string(),
            ..Default::default()
        }
    }

    fn config_with(projects: Vec<Project>) -> Config {
        Config {
            projects,
            ..Default::default()
        }
    }

    #[test]
    fn detects_project_from_root_and_subdirectory() {
        let config = config_with(vec![project("api", "/work/api")]);
        assert_eq!(
            current_project(&config, Path::new("/work/api")).unwrap().name,
            "api"
        );
        assert_eq!(
            current_project(&config, Path::new("/work/api/src/deep")).unwrap().name,
            "api"
        );
    }

    #[test]
    fn outside_all_roots_is_none() {
        let config = config_with(vec![project("api", "/work/api")]);
        assert!(current_project(&config, Path::new("/home/user")).is_none());
    }

    #[test]
    fn containment_is_by_path_component_not_string_prefix() {
        let config = config_with(vec![project("api", "/work/api")]);
        assert!(current_project(&config, Path::new("/work/api-v2")).is_none());
    }

    #[test]
    fn deepest_nested_root_wins() {
        let config = config_with(vec![
            project("mono", "/work"),
            project("api", "/work/api"),
        ]);
        assert_eq!(
            current_project(&config, Path::new("/work/api/src")).unwrap().name,
            "api"
        );
        assert_eq!(
            current_project(&config, Path::new("/work/docs")).unwrap().name,
            "mono"
        );
    }
}
