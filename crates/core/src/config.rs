//! Configuration: built-in tool table, `.metalint.toml` file layer, and the
//! merge that produces the immutable run plan.
//!
//! Layering is default → file → CLI flags, each overriding by tool name.
//! The merge happens once at startup; nothing here is mutated during
//! execution. `resolve` is also where every pattern and the exclusion
//! regex are compiled, so configuration-class errors fail the run before
//! any subprocess is spawned.

use crate::issue::Severity;
use crate::pattern::{self, PatternError};
use crate::tool::{split_descriptor, ResolvedTool, ToolSpec};
use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use thiserror::Error;

/// Default ceiling on concurrently running tool tasks
pub const DEFAULT_CONCURRENCY: usize = 16;

/// Config file name, discovered in the target directory or its ancestors
pub const CONFIG_FILE: &str = ".metalint.toml";

/// Built-in checker table as `name -> command:pattern` descriptors
const DEFAULT_TOOLS: &[(&str, &str)] = &[
    ("golint", "golint {path}:PATH:LINE:COL:MESSAGE"),
    ("vet", "go tool vet {path}:PATH:LINE:MESSAGE"),
    ("gotype", "gotype {path}:PATH:LINE:COL:MESSAGE"),
    (
        "errcheck",
        r"errcheck {path}:(?P<path>[^:]+):(?P<line>\d+):(?P<col>\d+)\t(?P<message>.*)",
    ),
    ("varcheck", "varcheck {path}:PATH:LINE:MESSAGE"),
    ("structcheck", "structcheck {path}:PATH:LINE:MESSAGE"),
    ("defercheck", "defercheck {path}:PATH:LINE:MESSAGE"),
];

/// Built-in message rewrites, keyed by tool name
const DEFAULT_MESSAGES: &[(&str, &str)] = &[
    ("errcheck", "error return value not checked ({message})"),
    ("varcheck", "unused global variable {message}"),
    ("structcheck", "unused struct field {message}"),
];

/// Built-in severity classification; unlisted tools default to `error`
const DEFAULT_SEVERITIES: &[(&str, Severity)] = &[
    ("errcheck", Severity::Warning),
    ("golint", Severity::Warning),
    ("varcheck", Severity::Warning),
    ("structcheck", Severity::Warning),
];

/// Tools disabled by fast mode
pub const SLOW_TOOLS: &[&str] = &["structcheck", "varcheck", "errcheck"];

/// Error types for configuration loading and merging
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("config file is not valid TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialise config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("tool `{tool}`: descriptor must be `command:pattern`")]
    BadDescriptor { tool: String },

    #[error("tool `{tool}`: unknown severity `{value}` (expected warning or error)")]
    UnknownSeverity { tool: String, value: String },

    #[error("tool `{tool}`: {err}")]
    Pattern { tool: String, err: PatternError },

    #[error("invalid exclusion pattern: {0}")]
    Exclude(regex::Error),

    #[error("concurrency must be at least 1")]
    Concurrency,
}

/// On-disk shape of `.metalint.toml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct FileConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    concurrency: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    fast: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    exclude: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    disable: Vec<String>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    tools: BTreeMap<String, String>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    messages: BTreeMap<String, String>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    severities: BTreeMap<String, String>,
}

/// Merged configuration, built once at startup
#[derive(Debug, Clone)]
pub struct MetalintConfig {
    /// Ceiling on concurrently running tool tasks
    pub concurrency: usize,

    /// Disable the known-slow subset ([`SLOW_TOOLS`])
    pub fast: bool,

    /// Regex dropping issues whose rendered line matches
    pub exclude: Option<String>,

    /// Tools excluded from the run
    pub disable: BTreeSet<String>,

    /// `name -> command:pattern` descriptors
    pub tools: BTreeMap<String, String>,

    /// `name -> template` message rewrites
    pub messages: BTreeMap<String, String>,

    /// `name -> severity` classification
    pub severities: BTreeMap<String, Severity>,
}

impl Default for MetalintConfig {
    fn default() -> Self {
        Self {
            concurrency: DEFAULT_CONCURRENCY,
            fast: false,
            exclude: None,
            disable: BTreeSet::new(),
            tools: DEFAULT_TOOLS
                .iter()
                .map(|(name, descriptor)| (name.to_string(), descriptor.to_string()))
                .collect(),
            messages: DEFAULT_MESSAGES
                .iter()
                .map(|(name, template)| (name.to_string(), template.to_string()))
                .collect(),
            severities: DEFAULT_SEVERITIES
                .iter()
                .map(|(name, severity)| (name.to_string(), *severity))
                .collect(),
        }
    }
}

/// Process-wide run parameters, immutable for the run's duration
#[derive(Debug)]
pub struct RunConfig {
    /// Directory handed to each tool via `{path}`
    pub target: String,

    /// At most this many tool tasks run their subprocess at once
    pub concurrency: usize,

    /// Compiled exclusion matcher, applied to rendered lines
    pub exclude: Option<Regex>,
}

/// Everything the orchestrator needs: enabled tools with compiled
/// matchers, plus the run parameters.
#[derive(Debug)]
pub struct RunPlan {
    pub run: RunConfig,
    pub tools: Vec<ResolvedTool>,
}

impl MetalintConfig {
    /// Load configuration from an explicit file, layered over the defaults
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let file: FileConfig = toml::from_str(&contents)?;
        let mut config = Self::default();
        config.apply_file(file)?;
        Ok(config)
    }

    /// Find and load `.metalint.toml` from `start_dir` or its ancestors.
    /// Falls back to the built-in defaults when no file exists.
    pub fn find_and_load(start_dir: &Path) -> Result<Self, ConfigError> {
        let mut current = start_dir;

        loop {
            let config_path = current.join(CONFIG_FILE);
            if config_path.exists() {
                return Self::from_file(&config_path);
            }

            match current.parent() {
                Some(parent) => current = parent,
                None => break,
            }
        }

        Ok(Self::default())
    }

    /// Save the configuration as a `.metalint.toml`-shaped file
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let file = FileConfig {
            concurrency: Some(self.concurrency),
            fast: Some(self.fast),
            exclude: self.exclude.clone(),
            disable: self.disable.iter().cloned().collect(),
            tools: self.tools.clone(),
            messages: self.messages.clone(),
            severities: self
                .severities
                .iter()
                .map(|(name, severity)| (name.clone(), severity.to_string()))
                .collect(),
        };
        let contents = toml::to_string_pretty(&file)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    fn apply_file(&mut self, file: FileConfig) -> Result<(), ConfigError> {
        if let Some(concurrency) = file.concurrency {
            self.concurrency = concurrency;
        }
        if let Some(fast) = file.fast {
            self.fast = fast;
        }
        if file.exclude.is_some() {
            self.exclude = file.exclude;
        }
        self.disable.extend(file.disable);
        self.tools.extend(file.tools);
        self.messages.extend(file.messages);
        for (tool, value) in file.severities {
            let severity = parse_severity(&tool, &value)?;
            self.severities.insert(tool, severity);
        }
        Ok(())
    }

    /// The effective disabled set, including the slow subset in fast mode
    pub fn disabled(&self) -> BTreeSet<&str> {
        let mut disabled: BTreeSet<&str> = self.disable.iter().map(String::as_str).collect();
        if self.fast {
            disabled.extend(SLOW_TOOLS);
        }
        disabled
    }

    /// Validate and compile the configuration into an immutable [`RunPlan`].
    ///
    /// Fails on the first bad descriptor, pattern, severity or exclusion
    /// regex, naming the offending tool — fail-fast on configuration, not
    /// on execution.
    pub fn resolve(&self, target: &str) -> Result<RunPlan, ConfigError> {
        if self.concurrency == 0 {
            return Err(ConfigError::Concurrency);
        }

        let disabled = self.disabled();
        let mut tools = Vec::new();

        for (name, descriptor) in &self.tools {
            if disabled.contains(name.as_str()) {
                debug!("tool {} disabled", name);
                continue;
            }

            let (command, pattern) =
                split_descriptor(descriptor).ok_or_else(|| ConfigError::BadDescriptor {
                    tool: name.clone(),
                })?;

            let matcher = pattern::resolve(pattern).map_err(|err| ConfigError::Pattern {
                tool: name.clone(),
                err,
            })?;

            tools.push(ResolvedTool {
                spec: ToolSpec {
                    name: name.clone(),
                    command: command.to_string(),
                    pattern: pattern.to_string(),
                    message_override: self.messages.get(name).cloned(),
                    severity_override: self.severities.get(name).copied(),
                },
                matcher,
            });
        }

        let exclude = self
            .exclude
            .as_deref()
            .filter(|pattern| !pattern.is_empty())
            .map(Regex::new)
            .transpose()
            .map_err(ConfigError::Exclude)?;

        Ok(RunPlan {
            run: RunConfig {
                target: target.to_string(),
                concurrency: self.concurrency,
                exclude,
            },
            tools,
        })
    }
}

/// Parse a severity name from configuration, naming the tool on failure
pub fn parse_severity(tool: &str, value: &str) -> Result<Severity, ConfigError> {
    match value {
        "warning" => Ok(Severity::Warning),
        "error" => Ok(Severity::Error),
        _ => Err(ConfigError::UnknownSeverity {
            tool: tool.to_string(),
            value: value.to_string(),
        }),
    }
}
