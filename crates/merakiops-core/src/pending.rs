// ── Pending commands ──
//
// A partially bound command is never stored. It lives only inside the
// follow-up command line of the prompt that asks for its next parameter:
//
//     meraki configure-basic-access-port org_name=Acme 'device_name=Core SW' --
//
// When the answer comes back it is appended to that line, and parsing the
// line rebuilds the same pending command plus the new value. `name=value`
// is only read as a named argument before the first positional token or
// the `--` that closes every follow-up, so appended answers never bind by
// name whatever their text.

use indexmap::IndexMap;
use tracing::debug;

use crate::completion::ParamSpec;
use crate::error::CoreError;

/// Closes the named arguments of a follow-up line.
pub const END_OF_NAMED: &str = "--";

/// One argument token of a command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Argument {
    /// `name=value`.
    Named { name: String, value: String },
    Positional(String),
}

impl Argument {
    pub fn named(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Named {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn positional(value: impl Into<String>) -> Self {
        Self::Positional(value.into())
    }

    fn from_token(token: String) -> Self {
        match token.split_once('=') {
            Some((name, value)) if is_param_name(name) => Self::named(name, value),
            _ => Self::Positional(token),
        }
    }

    /// Classify command-line tokens. Named arguments are only recognized
    /// in the leading run that precedes any positional token or `--`.
    fn from_tokens<I>(tokens: I) -> Vec<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut named_allowed = true;
        let mut args = Vec::new();
        for token in tokens {
            if named_allowed && token == END_OF_NAMED {
                named_allowed = false;
                continue;
            }
            let arg = if named_allowed {
                Self::from_token(token)
            } else {
                Self::Positional(token)
            };
            if matches!(arg, Self::Positional(_)) {
                named_allowed = false;
            }
            args.push(arg);
        }
        args
    }

    /// The token as it appeared on the command line.
    fn raw(&self) -> String {
        match self {
            Self::Named { name, value } => format!("{name}={value}"),
            Self::Positional(value) => value.clone(),
        }
    }
}

fn is_param_name(s: &str) -> bool {
    !s.is_empty()
        && s.chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}

/// A tokenized chat command: `<group> <subcommand> [args...]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub group: String,
    pub subcommand: String,
    pub args: Vec<Argument>,
}

impl Invocation {
    /// Split `line` with shell quoting rules.
    pub fn parse(line: &str) -> Result<Self, CoreError> {
        let tokens = shlex::split(line)
            .ok_or_else(|| CoreError::validation("command", "unbalanced quotes"))?;
        Self::from_tokens(tokens)
    }

    pub fn from_tokens<I>(tokens: I) -> Result<Self, CoreError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut tokens = tokens.into_iter();
        let group = tokens
            .next()
            .ok_or_else(|| CoreError::validation("command", "empty command"))?;
        let subcommand = tokens
            .next()
            .ok_or_else(|| CoreError::validation("command", "missing subcommand"))?;
        Ok(Self {
            group,
            subcommand,
            args: Argument::from_tokens(tokens),
        })
    }
}

/// Fully bound parameters handed to a command action.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(IndexMap<String, String>);

impl Params {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn require(&self, name: &str) -> Result<&str, CoreError> {
        self.get(name)
            .ok_or_else(|| CoreError::validation(name, "missing value"))
    }

    pub fn require_u32(&self, name: &str) -> Result<u32, CoreError> {
        let raw = self.require(name)?;
        raw.trim()
            .parse()
            .map_err(|_| CoreError::validation(name, format!("'{raw}' is not a number")))
    }

    pub fn require_bool(&self, name: &str) -> Result<bool, CoreError> {
        let raw = self.require(name)?;
        parse_bool(raw).ok_or_else(|| CoreError::validation(name, format!("'{raw}' is not yes/no")))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Params {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Accepts `true/false`, `yes/no`, `on/off` and `1/0`, any case.
pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}

// ── PendingCommand ───────────────────────────────────────────────────

/// A command with zero or more of its declared parameters bound.
#[derive(Debug, Clone)]
pub struct PendingCommand {
    group: String,
    subcommand: String,
    params: &'static [ParamSpec],
    supplied: IndexMap<&'static str, String>,
}

impl PendingCommand {
    pub fn new(group: &str, subcommand: &str, params: &'static [ParamSpec]) -> Self {
        Self {
            group: group.to_owned(),
            subcommand: subcommand.to_owned(),
            params,
            supplied: IndexMap::new(),
        }
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn subcommand(&self) -> &str {
        &self.subcommand
    }

    pub fn params(&self) -> &'static [ParamSpec] {
        self.params
    }

    /// Bind arguments in two passes.
    ///
    /// `name=value` arguments naming a declared parameter bind by name.
    /// Every other argument fills the next unbound parameter in
    /// declaration order. Empty values occupy their slot but leave the
    /// parameter unbound. Surplus arguments are dropped.
    pub fn bind_arguments(&mut self, args: &[Argument]) {
        let mut positional = Vec::new();
        for arg in args {
            match arg {
                Argument::Named { name, value } => match self.spec(name) {
                    Some(spec) => self.bind(spec.name, value),
                    None => positional.push(arg.raw()),
                },
                Argument::Positional(value) => positional.push(value.clone()),
            }
        }

        let mut slots = self
            .params
            .iter()
            .filter(|p| !self.supplied.contains_key(p.name))
            .map(|p| p.name)
            .collect::<Vec<_>>()
            .into_iter();
        for value in positional {
            let Some(name) = slots.next() else {
                debug!(
                    command = %self.subcommand,
                    extra = %value,
                    "ignoring surplus argument"
                );
                continue;
            };
            self.bind(name, &value);
        }
    }

    fn bind(&mut self, name: &'static str, value: &str) {
        if value.is_empty() {
            self.supplied.shift_remove(name);
        } else {
            self.supplied.insert(name, value.to_owned());
        }
    }

    fn spec(&self, name: &str) -> Option<&'static ParamSpec> {
        self.params.iter().find(|p| p.name == name)
    }

    pub fn value(&self, name: &str) -> Option<&str> {
        self.supplied.get(name).map(String::as_str)
    }

    pub fn is_bound(&self, name: &str) -> bool {
        self.supplied.contains_key(name)
    }

    /// Drop a bound value so it is asked for again.
    pub fn unbind(&mut self, name: &str) -> Option<String> {
        self.supplied.shift_remove(name)
    }

    /// Declared parameters still unbound, in declaration order.
    pub fn remaining(&self) -> impl Iterator<Item = &'static ParamSpec> + '_ {
        self.params.iter().filter(|p| !self.is_bound(p.name))
    }

    pub fn next_missing(&self) -> Option<&'static ParamSpec> {
        self.remaining().next()
    }

    pub fn is_complete(&self) -> bool {
        self.next_missing().is_none()
    }

    /// Bound values in declaration order.
    pub fn to_params(&self) -> Params {
        self.params
            .iter()
            .filter_map(|p| self.value(p.name).map(|v| (p.name, v)))
            .collect()
    }

    /// `"<subcommand> name=value ... --"`, shell-quoted.
    pub fn followup_args(&self) -> Result<String, CoreError> {
        let mut tokens = vec![self.subcommand.clone()];
        tokens.extend(self.bound_tokens());
        tokens.push(END_OF_NAMED.to_owned());
        join(&tokens)
    }

    /// `"<group> <subcommand> name=value ... --"`, shell-quoted.
    pub fn followup_command(&self) -> Result<String, CoreError> {
        let mut tokens = vec![self.group.clone(), self.subcommand.clone()];
        tokens.extend(self.bound_tokens());
        tokens.push(END_OF_NAMED.to_owned());
        join(&tokens)
    }

    fn bound_tokens(&self) -> impl Iterator<Item = String> + '_ {
        self.params
            .iter()
            .filter_map(|p| self.value(p.name).map(|v| format!("{}={v}", p.name)))
    }
}

fn join(tokens: &[String]) -> Result<String, CoreError> {
    shlex::try_join(tokens.iter().map(String::as_str))
        .map_err(|e| CoreError::validation("command", e.to_string()))
}
