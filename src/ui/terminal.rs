use is_terminal::IsTerminal;

/// What the attached terminal can do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalCapabilities {
    /// stderr (where progress is drawn) is a terminal
    pub is_tty: bool,
    /// stdin is a terminal, so prompts can be answered
    pub stdin_tty: bool,
    pub supports_color: bool,
    pub supports_unicode: bool,
    pub is_ci: bool,
}

impl TerminalCapabilities {
    pub fn detect() -> Self {
        Self::from_env(
            |key| std::env::var(key).ok(),
            std::io::stderr().is_terminal(),
            std::io::stdin().is_terminal(),
        )
    }

    fn from_env(get_env: impl Fn(&str) -> Option<String>, is_tty: bool, stdin_tty: bool) -> Self {
        let set = |key: &str| get_env(key).is_some_and(|v| !v.is_empty());
        let dumb = get_env("TERM").is_some_and(|t| t.eq_ignore_ascii_case("dumb"));

        Self {
            is_tty,
            stdin_tty,
            supports_color: is_tty && !dumb && !set("NO_COLOR"),
            supports_unicode: !dumb && locale_is_unicode(&get_env),
            is_ci: CI_MARKERS.iter().any(|key| set(key)),
        }
    }
}

const CI_MARKERS: &[&str] = &[
    "CI",
    "GITHUB_ACTIONS",
    "GITLAB_CI",
    "BUILDKITE",
    "CIRCLECI",
    "JENKINS_URL",
    "CODEBUILD_BUILD_ID",
];

/// The first locale variable that is set wins, as in POSIX
fn locale_is_unicode(get_env: &impl Fn(&str) -> Option<String>) -> bool {
    let locale = ["LC_ALL", "LC_CTYPE", "LANG"]
        .iter()
        .find_map(|key| get_env(key).filter(|v| !v.is_empty()));

    match locale {
        Some(value) => !matches!(value.as_str(), "C" | "POSIX"),
        None => true,
    }
}
