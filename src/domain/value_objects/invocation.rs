//! Invocation value object - one external command the driver runs

/// A single external process invocation
///
/// `elevated` marks commands that need elevated privileges. Whether that
/// actually wraps the command in `sudo` (or anything else) is up to the
/// process runner's elevation settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    program: String,
    args: Vec<String>,
    elevated: bool,
}

impl Invocation {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            elevated: false,
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn elevated(mut self, elevated: bool) -> Self {
        self.elevated = elevated;
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn get_args(&self) -> &[String] {
        &self.args
    }

    pub fn is_elevated(&self) -> bool {
        self.elevated
    }

    /// Prefix this invocation with an elevation command, producing the argv
    /// that is actually executed.
    pub fn wrapped(&self, elevate: Option<&[String]>) -> Vec<String> {
        let mut argv = Vec::with_capacity(self.args.len() + 3);
        if self.elevated {
            if let Some(prefix) = elevate {
                argv.extend(prefix.iter().cloned());
            }
        }
        argv.push(self.program.clone());
        argv.extend(self.args.iter().cloned());
        argv
    }
}

/// Render an argv the way a shell user would type it
pub fn render_command_line(argv: &[String]) -> String {
    argv.iter()
        .map(|a| shell_quote(a))
        .collect::<Vec<_>>()
        .join(" ")
}

fn shell_quote(arg: &str) -> String {
    let plain = !arg.is_empty()
        && arg
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./=:@+,%".contains(c));
    if plain {
        arg.to_string()
    } else {
        format!("'{}'", arg.replace('\'', r"'\''"))
    }
}

impl std::fmt::Display for Invocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&render_command_line(&self.wrapped(None)))
    }
}
