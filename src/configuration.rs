use std::path::PathBuf;

use serde_derive::{Deserialize, Serialize};

use crate::cli::Cli;

/// Settings handed through to the code generation backend. None of them
/// affect how a grammar is parsed or verified.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct GeneratorConfig {
    #[serde(default = "default_output")]
    pub output: PathBuf,

    #[serde(default = "default_generator")]
    pub generator: String,

    #[serde(default = "enabled")]
    pub ll: bool,

    #[serde(default = "enabled")]
    pub q: bool,

    #[serde(default)]
    pub cfg: EmitOptions,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct EmitOptions {
    #[serde(default = "default_fname")]
    pub fname: String,

    #[serde(default = "default_name")]
    pub namespace: String,

    #[serde(default)]
    pub guard: Option<String>,

    #[serde(default = "default_name")]
    pub grammar_name: String,
}

fn default_output() -> PathBuf {
    PathBuf::from(".")
}

fn default_generator() -> String {
    "cpp_ctll_v2".to_string()
}

fn default_fname() -> String {
    "grammer.hpp".to_string()
}

fn default_name() -> String {
    "Grammer".to_string()
}

fn enabled() -> bool {
    true
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            fname: default_fname(),
            namespace: default_name(),
            guard: None,
            grammar_name: default_name(),
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output: default_output(),
            generator: default_generator(),
            ll: true,
            q: true,
            cfg: EmitOptions::default(),
        }
    }
}

impl GeneratorConfig {
    /// Command line values take precedence over the configuration file.
    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(output) = &cli.output {
            self.output = output.clone();
        }
        if let Some(generator) = &cli.generator {
            self.generator = generator.clone();
        }

        // `--ll` and `--q` can only switch a toggle off
        self.ll &= cli.ll;
        self.q &= cli.q;

        if let Some(fname) = &cli.fname {
            self.cfg.fname = fname.clone();
        }
        if let Some(namespace) = &cli.namespace {
            self.cfg.namespace = namespace.clone();
        }
        if let Some(guard) = &cli.guard {
            self.cfg.guard = Some(guard.clone());
        }
        if let Some(grammar_name) = &cli.grammar_name {
            self.cfg.grammar_name = grammar_name.clone();
        }
    }
}

pub enum ConfigReadError {
    ReadError(std::io::Error),
    ParseError(toml::de::Error),
}

pub fn load_config<P: AsRef<std::path::Path>>(path: P) -> Result<GeneratorConfig, ConfigReadError> {
    let config = std::fs::read_to_string(path).map_err(ConfigReadError::ReadError)?;

    toml::from_str::<GeneratorConfig>(&config).map_err(ConfigReadError::ParseError)
}
