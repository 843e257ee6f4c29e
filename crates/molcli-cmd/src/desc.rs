//! Command descriptors
//!
//! A descriptor lists the positional and keyword arguments of one command.
//! Positional slots are filled in order: every required argument, then every
//! optional one. Optional arguments may also be given by name when they
//! appear among the keywords.

use crate::args::{ArgDef, ArgType};

/// Argument layout and help metadata of a command
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CommandDesc {
    /// Required positional arguments, in order
    pub required: Vec<ArgDef>,
    /// Optional positional arguments, in order
    pub optional: Vec<ArgDef>,
    /// Keyword arguments, in declaration order
    pub keyword: Vec<ArgDef>,
    /// One-line description
    pub synopsis: Option<String>,
    /// Link to the command's documentation
    pub url: Option<String>,
}

impl CommandDesc {
    /// Create a descriptor with no arguments
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a required positional argument
    pub fn required(mut self, name: impl Into<String>, arg: ArgType) -> Self {
        self.required.push(ArgDef::new(name, arg));
        self
    }

    /// Append an optional positional argument
    pub fn optional(mut self, name: impl Into<String>, arg: ArgType) -> Self {
        self.optional.push(ArgDef::new(name, arg));
        self
    }

    /// Append a keyword argument
    pub fn keyword(mut self, name: impl Into<String>, arg: ArgType) -> Self {
        self.keyword.push(ArgDef::new(name, arg));
        self
    }

    /// Set the synopsis
    pub fn synopsis(mut self, synopsis: impl Into<String>) -> Self {
        self.synopsis = Some(synopsis.into());
        self
    }

    /// Set the documentation url
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Declared type of a keyword argument
    pub fn keyword_type(&self, name: &str) -> Option<&ArgType> {
        self.keyword.iter().find(|d| d.name == name).map(|d| &d.arg)
    }

    /// True if `name` is a keyword of this command
    pub fn is_keyword(&self, name: &str) -> bool {
        self.keyword_type(name).is_some()
    }

    /// True if `name` is an optional positional argument
    pub fn is_optional(&self, name: &str) -> bool {
        self.optional.iter().any(|d| d.name == name)
    }

    /// Positional slot at `index`, counting required then optional arguments
    pub fn positional(&self, index: usize) -> Option<&ArgDef> {
        self.required.iter().chain(self.optional.iter()).nth(index)
    }

    /// Number of required positional arguments
    pub fn required_count(&self) -> usize {
        self.required.len()
    }

    /// Keyword names starting with `prefix`
    ///
    /// Keywords that are also optional positionals come first, in positional
    /// order, followed by the remaining keywords in declaration order.
    pub fn keywords_starting_with(&self, prefix: &str) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .optional
            .iter()
            .filter(|d| self.is_keyword(&d.name) && d.name.starts_with(prefix))
            .map(|d| d.name.as_str())
            .collect();
        for def in &self.keyword {
            if def.name.starts_with(prefix) && !self.is_optional(&def.name) {
                names.push(def.name.as_str());
            }
        }
        names
    }

    /// Render a help tooltip for the command named `name`
    ///
    /// The synopsis comes first, then one line per argument with its type.
    pub fn tooltip(&self, name: &str) -> String {
        let mut lines = Vec::new();
        let mut usage = format!("<b>{}</b>", name);
        for def in &self.required {
            usage.push_str(&format!(" <i>{}</i>", def.name));
        }
        for def in &self.optional {
            usage.push_str(&format!(" [<i>{}</i>]", def.name));
        }
        if !self.keyword.is_empty() {
            usage.push_str(" [<i>options</i>]");
        }
        lines.push(usage);
        if let Some(synopsis) = &self.synopsis {
            lines.push(synopsis.clone());
        }
        for def in &self.required {
            lines.push(format!("&nbsp;&nbsp;<i>{}</i>: {}", def.name, def.arg.describe()));
        }
        for def in &self.optional {
            lines.push(format!("&nbsp;&nbsp;[<i>{}</i>]: {}", def.name, def.arg.describe()));
        }
        for def in &self.keyword {
            if self.is_optional(&def.name) {
                continue;
            }
            lines.push(format!("&nbsp;&nbsp;<b>{}</b>: {}", def.name, def.arg.describe()));
        }
        if let Some(url) = &self.url {
            lines.push(format!("<a href=\"{}\">help</a>", url));
        }
        lines.join("<br>")
    }
}
