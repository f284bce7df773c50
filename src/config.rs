use crate::state::step::find_step;
use crate::state::store::FormState;
use crate::state::wizard::Wizard;
use clap::{Parser, ValueEnum};
use indexmap::IndexMap;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
}

#[derive(Debug, Parser)]
#[command(name = "stepform", version, about = "Multi-step form wizard for the terminal")]
pub struct Cli {
    /// Format of the submitted form printed after exit.
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// YAML file mapping section -> field -> value used to seed the form.
    #[arg(long, value_name = "PATH")]
    pub prefill: Option<PathBuf>,

    /// Leave the wizard after the first successful submit.
    #[arg(long)]
    pub exit_on_submit: bool,

    /// Write logs to this file. Without it, nothing is logged while the UI is up.
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Log filter, overridden by RUST_LOG.
    #[arg(long, value_name = "FILTER", default_value = "info")]
    pub log_level: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid yaml in {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("unknown section `{section}`")]
    UnknownSection { section: String },
    #[error("section `{section}` has no field `{field}`")]
    UnknownField { section: String, field: String },
    #[error("failed to encode output as json: {0}")]
    EncodeJson(#[from] serde_json::Error),
    #[error("failed to encode output as yaml: {0}")]
    EncodeYaml(#[from] serde_yaml::Error),
}

pub type Prefill = IndexMap<String, IndexMap<String, String>>;

pub fn load_prefill(path: &Path) -> Result<Prefill, ConfigError> {
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.display().to_string(),
        source,
    })?;
    parse_prefill(&raw).map_err(|source| ConfigError::Parse {
        path: path.display().to_string(),
        source,
    })
}

pub fn parse_prefill(raw: &str) -> Result<Prefill, serde_yaml::Error> {
    // An empty document is an empty prefill, not an error.
    if raw.trim().is_empty() {
        return Ok(Prefill::new());
    }
    serde_yaml::from_str(raw)
}

/// Rejects anything the step table does not declare; nothing is applied on error.
pub fn apply_prefill(wizard: &mut Wizard, prefill: &Prefill) -> Result<(), ConfigError> {
    for (section, fields) in prefill {
        let step = find_step(section).ok_or_else(|| ConfigError::UnknownSection {
            section: section.clone(),
        })?;
        if let Some(field) = fields.keys().find(|field| !step.has_field(field)) {
            return Err(ConfigError::UnknownField {
                section: section.clone(),
                field: field.clone(),
            });
        }
    }

    for (section, fields) in prefill {
        for (field, value) in fields {
            wizard.update_field(section, field, value.clone());
        }
    }
    Ok(())
}

pub fn render_output(payload: &FormState, format: OutputFormat) -> Result<String, ConfigError> {
    let rendered = match format {
        OutputFormat::Json => serde_json::to_string_pretty(payload)?,
        OutputFormat::Yaml => serde_yaml::to_string(payload)?,
    };
    Ok(rendered)
}
