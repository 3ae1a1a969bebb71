// src/core/command_resolver.rs

use crate::core::ResolveError;
use crate::models::{Config, Project};

/// Resolves a command name to its shell template.
///
/// Search order: the active project's commands first (when a project is
/// active), then the global commands. Exact key match only; no fuzzy or
/// partial-name resolution. A project-scoped command fully shadows a global
/// command of the same name.
pub fn resolve<'a>(
    config: &'a Config,
    project: Option<&'a Project>,
    name: &str,
) -> Result<&'a str, ResolveError> {
    if let Some(project) = project
        && let Some(template) = project.commands.get(name)
    {
        log::debug!("Command '{}' resolved in project '{}'", name, project.name);
        return Ok(template);
    }

    config
        .commands
        .get(name)
        .map(|template| {
            log::debug!("Command '{}' resolved in global scope", name);
            template.as_str()
        })
        .ok_or_else(|| ResolveError::CommandNotFound {
            name: name.to_string(),
        })
}

/// Every command name reachable from the given scope, for listings and
/// not-found hints: project commands (if any), then global commands.
pub fn available(config: &Config, project: Option<&Project>) -> Vec<String> {
    let mut names: Vec<String> = project
        .map(|p| p.commands.keys().cloned().collect())
        .unwrap_or_default();
    for name in config.commands.keys() {
        if !names.contains(name) {
            names.push(name.clone());
        }
    }
    names.sort();
    names
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn fixture() -> (Config, Project) {
        let mut global = BTreeMap::new();
        global.insert("deploy".to_string(), "ship.sh".to_string());
        global.insert("status".to_string(), "git status".to_string());

        let mut project_cmds = BTreeMap::new();
        project_cmds.insert("deploy".to_string(), "make deploy".to_string());
        project_cmds.insert("serve".to_string(), "npm run dev".to_string());

        let project = Project {
            name: "api".to_string(),
            root: "/tmp/api".to_string(),
            commands: project_cmds,
            ..Default::default()
        };
        let config = Config {
            commands: global,
            projects: vec![project.clone()],
            ..Default::default()
        };
        (config, project)
    }

    #[test]
    fn project_command_shadows_global() {
        let (config, project) = fixture();
        assert_eq!(resolve(&config, Some(&project), "deploy").unwrap(), "make deploy");
    }

    #[test]
    fn global_command_found_without_project() {
        let (config, _) = fixture();
        assert_eq!(resolve(&config, None, "deploy").unwrap(), "ship.sh");
    }

    #[test]
    fn project_scope_falls_back_to_global_on_miss() {
        let (config, project) = fixture();
        assert_eq!(resolve(&config, Some(&project), "status").unwrap(), "git status");
    }

    #[test]
    fn absent_everywhere_is_command_not_found() {
        let (config, project) = fixture();
        let err = resolve(&config, Some(&project), "nope").unwrap_err();
        assert!(matches!(err, ResolveError::CommandNotFound { name } if name == "nope"));
    }

    #[test]
    fn no_partial_matching() {
        let (config, _) = fixture();
        assert!(resolve(&config, None, "dep").is_err());
    }

    #[test]
    fn available_merges_scopes_without_duplicates() {
        let (config, project) = fixture();
        assert_eq!(
            available(&config, Some(&project)),
            vec!["deploy", "serve", "status"]
        );
        assert_eq!(available(&config, None), vec!["deploy", "status"]);
    }
}
