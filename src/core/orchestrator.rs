// src/core/orchestrator.rs

use crate::core::{
    ResolveError, command_resolver, env_resolver, interpolator, paths, project_resolver,
};
use crate::models::{Config, Project, ResolvedEnvironment, ScriptAction};

/// Composes the resolvers into the three top-level actions and owns the
/// verbose policy. Each method performs one pass: it either returns the full
/// ordered action list for the emitter, or fails before any output exists.
///
/// The "current project" context is an explicit parameter supplied by the
/// caller (detected from the working directory at the CLI edge), never
/// implicit global state.
#[derive(Debug)]
pub struct Orchestrator<'a> {
    config: &'a Config,
    verbose: bool,
}

impl<'a> Orchestrator<'a> {
    pub fn new(config: &'a Config, verbose: bool) -> Self {
        Self { config, verbose }
    }

    /// Navigate into a project: `cd` to its root, export the autoload layer
    /// (if declared), then run the autorun templates in declared order unless
    /// suppressed.
    pub fn navigate(
        &self,
        token: &str,
        run_autorun: bool,
    ) -> Result<Vec<ScriptAction>, ResolveError> {
        let project = project_resolver::resolve(self.config, token)?;
        log::info!("Navigating to project: {}", project.name);

        let root = paths::expand_user_path(&project.root);
        if !root.is_dir() {
            return Err(ResolveError::PathNotFound { path: root });
        }

        let mut actions = vec![ScriptAction::ChangeDirectory(root)];

        // Autoload exports come before autorun, so autorun commands execute
        // with the layer already in the environment.
        let autoload = project.env.as_ref().and_then(|env| env.autoload.as_deref());
        let env = env_resolver::resolve(project, autoload)?;
        if let Some(layer) = autoload {
            log::info!("Auto-loading environment layer: {}", layer);
            push_exports(&mut actions, &env);
        }

        if run_autorun {
            for template in &project.autorun {
                let command =
                    interpolator::substitute(template, &env, self.config.settings.on_missing_var)?;
                self.push_run(&mut actions, command);
            }
        }

        Ok(actions)
    }

    /// Export a merged environment layer for a project, given either an
    /// explicit token or the ambient current project. Only final merged
    /// values are exported; a key never appears twice.
    pub fn load_environment(
        &self,
        current: Option<&'a Project>,
        token: Option<&str>,
        layer: &str,
    ) -> Result<Vec<ScriptAction>, ResolveError> {
        let project = match token {
            Some(token) => project_resolver::resolve(self.config, token)?,
            None => current.ok_or(ResolveError::NoActiveProject)?,
        };
        log::info!("Loading layer '{}' for project '{}'", layer, project.name);

        let env = env_resolver::resolve(project, Some(layer))?;
        let mut actions = Vec::with_capacity(env.len());
        push_exports(&mut actions, &env);
        Ok(actions)
    }

    /// Run a custom command: project scope shadows global scope, resolved
    /// `default`-layer variables are substituted into the template, and extra
    /// arguments are appended individually shell-quoted.
    pub fn run_custom(
        &self,
        current: Option<&'a Project>,
        name: &str,
        extra_args: &[String],
    ) -> Result<Vec<ScriptAction>, ResolveError> {
        let template = command_resolver::resolve(self.config, current, name)?;
        log::info!("Running custom command: {}", name);

        let env = match current {
            Some(project) => env_resolver::resolve(project, None)?,
            None => ResolvedEnvironment::new(),
        };

        let mut command =
            interpolator::substitute(template, &env, self.config.settings.on_missing_var)?;
        for arg in extra_args {
            command.push(' ');
            command.push_str(&shlex::try_quote(arg)?);
        }

        let mut actions = Vec::new();
        self.push_run(&mut actions, command);
        Ok(actions)
    }

    /// Appends a run action, preceded in verbose mode by an echo of the exact
    /// text the shell will execute.
    fn push_run(&self, actions: &mut Vec<ScriptAction>, command: String) {
        if self.verbose {
            actions.push(ScriptAction::Echo(format!("Running: {command}")));
        }
        actions.push(ScriptAction::RunCommand(command));
    }
}

fn push_exports(actions: &mut Vec<ScriptAction>, env: &ResolvedEnvironment) {
    for (name, value) in env {
        actions.push(ScriptAction::ExportVar {
            name: name.clone(),
            value: value.clone(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EnvConfig, MissingVarPolicy, Settings};
    use std::collections::BTreeMap;

    fn layer(vars: &[(&str, &str)]) -> BTreeMap<String, String> {
        vars.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    /// The project from the specification walkthrough: alias `a`, a real root
    /// on disk, default+local layers, autoload, one autorun entry.
    fn fixture(root: &std::path::Path) -> Config {
        let mut layers = BTreeMap::new();
        layers.insert("default".to_string(), layer(&[("DEBUG", "true")]));
        layers.insert("local".to_string(), layer(&[("PORT", "3000")]));
        layers.insert("prod".to_string(), layer(&[("PORT", "80"), ("DEBUG", "false")]));

        let mut commands = BTreeMap::new();
        commands.insert("serve".to_string(), "npm run dev -- --port $PORT".to_string());

        let mut global = BTreeMap::new();
        global.insert("deploy".to_string(), "ship.sh".to_string());

        Config {
            settings: Settings::default(),
            commands: global,
            projects: vec![crate::models::Project {
                name: "api".to_string(),
                root: root.to_string_lossy().into_owned(),
                aliases: vec!["a".to_string()],
                commands,
                env: Some(EnvConfig {
                    autoload: Some("local".to_string()),
                    layers,
                }),
                autorun: vec!["echo hi".to_string()],
            }],
        }
    }

    #[test]
    fn navigate_emits_cd_autoload_exports_then_autorun() {
        let dir = tempfile::tempdir().unwrap();
        let config = fixture(dir.path());

        let actions = Orchestrator::new(&config, false).navigate("a", true).unwrap();
        assert_eq!(
            actions,
            vec![
                ScriptAction::ChangeDirectory(dir.path().to_path_buf()),
                ScriptAction::ExportVar {
                    name: "DEBUG".to_string(),
                    value: "true".to_string(),
                },
                ScriptAction::ExportVar {
                    name: "PORT".to_string(),
                    value: "3000".to_string(),
                },
                ScriptAction::RunCommand("echo hi".to_string()),
            ]
        );
    }

    #[test]
    fn navigate_can_suppress_autorun() {
        let dir = tempfile::tempdir().unwrap();
        let config = fixture(dir.path());

        let actions = Orchestrator::new(&config, false).navigate("api", false).unwrap();
        assert!(!actions.iter().any(|a| matches!(a, ScriptAction::RunCommand(_))));
    }

    #[test]
    fn navigate_missing_root_fails_before_any_action() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = fixture(dir.path());
        config.projects[0].root = dir.path().join("gone").to_string_lossy().into_owned();

        let err = Orchestrator::new(&config, false).navigate("api", true).unwrap_err();
        assert!(matches!(err, ResolveError::PathNotFound { .. }));
    }

    #[test]
    fn navigate_unknown_token_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let config = fixture(dir.path());
        assert!(matches!(
            Orchestrator::new(&config, false).navigate("nope", true),
            Err(ResolveError::NotFound { .. })
        ));
    }

    #[test]
    fn navigate_verbose_previews_autorun_commands() {
        let dir = tempfile::tempdir().unwrap();
        let config = fixture(dir.path());

        let actions = Orchestrator::new(&config, true).navigate("api", true).unwrap();
        let tail = &actions[actions.len() - 2..];
        assert_eq!(
            tail,
            &[
                ScriptAction::Echo("Running: echo hi".to_string()),
                ScriptAction::RunCommand("echo hi".to_string()),
            ]
        );
    }

    #[test]
    fn load_environment_exports_final_merged_values_once() {
        let dir = tempfile::tempdir().unwrap();
        let config = fixture(dir.path());

        let actions = Orchestrator::new(&config, false)
            .load_environment(None, Some("api"), "prod")
            .unwrap();
        // `prod` overrides DEBUG; only the final value is exported.
        assert_eq!(
            actions,
            vec![
                ScriptAction::ExportVar {
                    name: "DEBUG".to_string(),
                    value: "false".to_string(),
                },
                ScriptAction::ExportVar {
                    name: "PORT".to_string(),
                    value: "80".to_string(),
                },
            ]
        );
    }

    #[test]
    fn load_environment_unknown_layer_emits_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let config = fixture(dir.path());

        let err = Orchestrator::new(&config, false)
            .load_environment(None, Some("api"), "staging")
            .unwrap_err();
        assert!(matches!(err, ResolveError::UnknownLayer { .. }));
    }

    #[test]
    fn load_environment_uses_ambient_project_when_no_token() {
        let dir = tempfile::tempdir().unwrap();
        let config = fixture(dir.path());
        let project = &config.projects[0];

        let actions = Orchestrator::new(&config, false)
            .load_environment(Some(project), None, "local")
            .unwrap();
        assert_eq!(actions.len(), 2);

        let err = Orchestrator::new(&config, false)
            .load_environment(None, None, "local")
            .unwrap_err();
        assert!(matches!(err, ResolveError::NoActiveProject));
    }

    #[test]
    fn run_custom_global_command_with_quoted_extra_args() {
        let dir = tempfile::tempdir().unwrap();
        let config = fixture(dir.path());

        let actions = Orchestrator::new(&config, false)
            .run_custom(None, "deploy", &["--force".to_string(), "two words".to_string()])
            .unwrap();
        assert_eq!(
            actions,
            vec![ScriptAction::RunCommand(
                "ship.sh --force 'two words'".to_string()
            )]
        );
    }

    #[test]
    fn run_custom_verbose_echo_mirrors_the_exact_command() {
        let dir = tempfile::tempdir().unwrap();
        let config = fixture(dir.path());

        let actions = Orchestrator::new(&config, true)
            .run_custom(None, "deploy", &["--force".to_string()])
            .unwrap();
        assert_eq!(
            actions,
            vec![
                ScriptAction::Echo("Running: ship.sh --force".to_string()),
                ScriptAction::RunCommand("ship.sh --force".to_string()),
            ]
        );
    }

    #[test]
    fn run_custom_substitutes_default_layer_variables() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = fixture(dir.path());
        // Move PORT into the default layer so the project-scoped template sees it.
        if let Some(env) = &mut config.projects[0].env {
            env.layers
                .get_mut("default")
                .unwrap()
                .insert("PORT".to_string(), "8080".to_string());
        }
        let project = config.projects[0].clone();

        let actions = Orchestrator::new(&config, false)
            .run_custom(Some(&project), "serve", &[])
            .unwrap();
        assert_eq!(
            actions,
            vec![ScriptAction::RunCommand("npm run dev -- --port 8080".to_string())]
        );
    }

    #[test]
    fn run_custom_strict_mode_rejects_unset_references() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = fixture(dir.path());
        config.settings.on_missing_var = MissingVarPolicy::Error;
        let project = config.projects[0].clone();

        // `serve` references $PORT, which lives only in the `local` layer.
        let err = Orchestrator::new(&config, false)
            .run_custom(Some(&project), "serve", &[])
            .unwrap_err();
        assert!(matches!(err, ResolveError::UnsetVariable { name } if name == "PORT"));
    }
}
