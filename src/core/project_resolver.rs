// src/core/project_resolver.rs

use crate::core::ResolveError;
use crate::models::{Config, Project};

/// Resolves a user-given token to exactly one project, by exact name match
/// first, then by alias.
///
/// Validation guarantees the name/alias namespace is unique, so at most one
/// project can match; if more than one does anyway, the configuration is
/// corrupt and resolution fails with [`ResolveError::AmbiguousReference`]
/// rather than silently picking one.
pub fn resolve<'a>(config: &'a Config, token: &str) -> Result<&'a Project, ResolveError> {
    let mut matches = config.projects.iter().filter(|p| p.matches_token(token));

    let found = matches.next().ok_or_else(|| ResolveError::NotFound {
        token: token.to_string(),
    })?;

    if matches.next().is_some() {
        return Err(ResolveError::AmbiguousReference {
            token: token.to_string(),
        });
    }

    log::debug!("Resolved '{}' to project '{}'", token, found.name);
    Ok(found)
}

/// All tokens that resolve to a project: every name and every alias. Feeds
/// the "Did you mean" hint after a failed lookup.
pub fn all_tokens(config: &Config) -> Vec<&str> {
    config
        .projects
        .iter()
        .flat_map(|p| {
            std::iter::once(p.name.as_str()).chain(p.aliases.iter().map(String::as_str))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with(projects: Vec<Project>) -> Config {
        Config {
            projects,
            ..Default::default()
        }
    }

    fn project(name: &str, aliases: &[&str]) -> Project {
        Project {
            name: name.to_string(),
            root: format!("/tmp/{name}"),
            aliases: aliases.iter().map(|a| a.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn resolves_by_name_and_every_alias() {
        let config = config_with(vec![project("api", &["a", "backend"]), project("site", &[])]);
        for token in ["api", "a", "backend"] {
            assert_eq!(resolve(&config, token).unwrap().name, "api");
        }
        assert_eq!(resolve(&config, "site").unwrap().name, "site");
    }

    #[test]
    fn unknown_token_is_not_found() {
        let config = config_with(vec![project("api", &["a"])]);
        let err = resolve(&config, "nope").unwrap_err();
        assert!(matches!(err, ResolveError::NotFound { token } if token == "nope"));
    }

    #[test]
    fn name_match_is_exact() {
        let config = config_with(vec![project("api", &[])]);
        assert!(resolve(&config, "ap").is_err());
        assert!(resolve(&config, "api2").is_err());
    }

    #[test]
    fn duplicate_tokens_are_ambiguous_not_first_wins() {
        // Invalid input slipping past validation must fail loudly.
        let config = config_with(vec![project("api", &["x"]), project("app", &["x"])]);
        let err = resolve(&config, "x").unwrap_err();
        assert!(matches!(err, ResolveError::AmbiguousReference { .. }));
    }

    #[test]
    fn all_tokens_covers_names_and_aliases() {
        let config = config_with(vec![project("api", &["a"]), project("site", &[])]);
        assert_eq!(all_tokens(&config), vec!["api", "a", "site"]);
    }
}
