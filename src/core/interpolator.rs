// src/core/interpolator.rs

use crate::core::ResolveError;
use crate::models::{MissingVarPolicy, ResolvedEnvironment};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // `$NAME` or `${NAME}`; names follow shell identifier rules.
    static ref VAR_REF_RE: Regex =
        Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}|\$([A-Za-z_][A-Za-z0-9_]*)").unwrap();
}

/// Substitutes resolved-environment variables into a command template.
///
/// Known references are replaced with their shell-quoted values, so a value
/// containing whitespace or metacharacters stays a single word and can never
/// inject statements. Unknown references are left verbatim for the evaluating
/// shell to resolve, unless the configuration asks for
/// [`MissingVarPolicy::Error`], which fails with
/// [`ResolveError::UnsetVariable`].
// Match offsets reported by the regex are valid byte indices into the
// template, so slicing with them cannot panic.
#[allow(clippy::indexing_slicing)]
pub fn substitute(
    template: &str,
    env: &ResolvedEnvironment,
    policy: MissingVarPolicy,
) -> Result<String, ResolveError> {
    let mut out = String::with_capacity(template.len());
    let mut last = 0;

    for caps in VAR_REF_RE.captures_iter(template) {
        let whole = caps.get(0).expect("capture group 0 always exists");
        let name = caps
            .get(1)
            .or_else(|| caps.get(2))
            .expect("one alternation branch always matches")
            .as_str();

        out.push_str(&template[last..whole.start()]);
        match env.get(name) {
            Some(value) => out.push_str(&shlex::try_quote(value)?),
            None => match policy {
                MissingVarPolicy::Passthrough => out.push_str(whole.as_str()),
                MissingVarPolicy::Error => {
                    return Err(ResolveError::UnsetVariable {
                        name: name.to_string(),
                    });
                }
            },
        }
        last = whole.end();
    }

    out.push_str(&template[last..]);
    Ok(out)
}
