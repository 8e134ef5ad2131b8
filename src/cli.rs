use crate::config::Backend;
use crate::core::{Error, ParameterKey};
use crate::io::{OutputFormat, ParameterInput};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "potability")]
#[command(about = "Water potability classifier", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Configuration file (defaults to the nearest .potability.toml)
    #[arg(long, global = true, env = "POTABILITY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
    /// -v: Show score breakdown and info logs
    /// -vv: Debug logs
    /// -vvv: Trace logs
    #[arg(short = 'v', long = "verbose", global = true, action = clap::ArgAction::Count)]
    pub verbosity: u8,

    /// Disable colors, unicode symbols and spinners
    #[arg(long, global = true)]
    pub plain: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate and classify one water sample
    Classify {
        #[command(flatten)]
        parameters: ParameterArgs,

        /// Classifier backend (overrides configuration)
        #[arg(long, value_enum)]
        backend: Option<BackendArg>,

        /// Simulated latency of the heuristic backend in milliseconds
        #[arg(long = "latency-ms")]
        latency_ms: Option<u64>,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Check parameters against their allowed bounds
    Validate {
        #[command(flatten)]
        parameters: ParameterArgs,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Show which parameters fall within their normal range
    Status {
        #[command(flatten)]
        parameters: ParameterArgs,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// List the known parameters, units and bounds
    Catalog {
        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Interactive line-driven form
    Session {
        /// Classifier backend (overrides configuration)
        #[arg(long, value_enum)]
        backend: Option<BackendArg>,

        /// Simulated latency of the heuristic backend in milliseconds
        #[arg(long = "latency-ms")]
        latency_ms: Option<u64>,
    },

    /// Initialize a configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BackendArg {
    /// Built-in threshold heuristic
    Heuristic,
    /// HTTP model service from [classifier.remote]
    Remote,
}

impl From<BackendArg> for Backend {
    fn from(arg: BackendArg) -> Self {
        match arg {
            BackendArg::Heuristic => Backend::Heuristic,
            BackendArg::Remote => Backend::Remote,
        }
    }
}

/// Parameter sources shared by `classify`, `validate` and `status`.
///
/// Flags are applied after `--input`, so they win.
#[derive(Args, Debug, Clone, Default)]
pub struct ParameterArgs {
    /// JSON file with an object of parameter name to number
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// pH level (0-14)
    #[arg(long, allow_hyphen_values = true)]
    pub ph: Option<f64>,

    /// Hardness in mg/L
    #[arg(long, allow_hyphen_values = true)]
    pub hardness: Option<f64>,

    /// Total dissolved solids in ppm
    #[arg(long, allow_hyphen_values = true)]
    pub solids: Option<f64>,

    /// Chloramines in ppm
    #[arg(long, allow_hyphen_values = true)]
    pub chloramines: Option<f64>,

    /// Sulfate in mg/L
    #[arg(long, allow_hyphen_values = true)]
    pub sulfate: Option<f64>,

    /// Conductivity in μS/cm
    #[arg(long, allow_hyphen_values = true)]
    pub conductivity: Option<f64>,

    /// Total organic carbon in ppm
    #[arg(long = "organic-carbon", allow_hyphen_values = true)]
    pub organic_carbon: Option<f64>,

    /// Trihalomethanes in μg/L
    #[arg(long, allow_hyphen_values = true)]
    pub trihalomethanes: Option<f64>,

    /// Turbidity in NTU
    #[arg(long, allow_hyphen_values = true)]
    pub turbidity: Option<f64>,
}

impl ParameterArgs {
    fn overrides(&self) -> [(ParameterKey, Option<f64>); 9] {
        [
            (ParameterKey::Ph, self.ph),
            (ParameterKey::Hardness, self.hardness),
            (ParameterKey::Solids, self.solids),
            (ParameterKey::Chloramines, self.chloramines),
            (ParameterKey::Sulfate, self.sulfate),
            (ParameterKey::Conductivity, self.conductivity),
            (ParameterKey::OrganicCarbon, self.organic_carbon),
            (ParameterKey::Trihalomethanes, self.trihalomethanes),
            (ParameterKey::Turbidity, self.turbidity),
        ]
    }

    /// Collect `--input` entries followed by per-parameter flags.
    pub fn to_input(&self) -> Result<ParameterInput, Error> {
        let mut input = match &self.input {
            Some(path) => ParameterInput::from_file(path)?,
            None => ParameterInput::new(),
        };
        for (key, value) in self.overrides() {
            if let Some(value) = value {
                input.push_key(key, value)?;
            }
        }
        Ok(input)
    }
}
