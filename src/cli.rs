use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::core::math::statistics::MissingPolicy;
use crate::core::math::Operation;

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum OpKind {
    Add,
    #[value(alias = "sub")]
    Subtract,
    #[value(alias = "mul")]
    Multiply,
    #[value(alias = "div")]
    Divide,
    #[value(alias = "pow")]
    Power,
    #[value(alias = "mod")]
    Modulus,
    #[value(alias = "floordiv")]
    FloorDivision,
    #[value(alias = "abs")]
    AbsoluteValue,
}

impl From<OpKind> for Operation {
    fn from(kind: OpKind) -> Self {
        match kind {
            OpKind::Add => Operation::Add,
            OpKind::Subtract => Operation::Subtract,
            OpKind::Multiply => Operation::Multiply,
            OpKind::Divide => Operation::Divide,
            OpKind::Power => Operation::Power,
            OpKind::Modulus => Operation::Modulus,
            OpKind::FloorDivision => Operation::FloorDivision,
            OpKind::AbsoluteValue => Operation::AbsoluteValue,
        }
    }
}

#[derive(Copy, Clone, Debug, Default, ValueEnum)]
pub enum FillKind {
    #[default]
    Drop,
    Zero,
    Mean,
    Median,
}

impl From<FillKind> for MissingPolicy {
    fn from(kind: FillKind) -> Self {
        match kind {
            FillKind::Drop => MissingPolicy::Drop,
            FillKind::Zero => MissingPolicy::Zero,
            FillKind::Mean => MissingPolicy::Mean,
            FillKind::Median => MissingPolicy::Median,
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "arithkit",
    about = "arithkit: arithmetic helpers, descriptive stats and a guessing game",
    version,
    propagate_version = true,
    disable_help_subcommand = true
)]
pub struct ArithCli {
    /// Global: path to config (TOML); default: ~/.arithkit/config.toml
    #[arg(long = "config", value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Global: debug logging on stderr (same as ARITHKIT_DEBUG=1)
    #[arg(long = "debug", action = ArgAction::SetTrue, global = true)]
    pub debug: bool,

    /// Global: disable coloured output
    #[arg(long = "no-color", action = ArgAction::SetTrue, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub cmd: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Apply one arithmetic operation
    ///
    /// Examples:
    ///   arithkit calc add 10 5
    ///   arithkit calc floordiv -7 2
    ///   arithkit calc abs -42
    #[command(allow_negative_numbers = true)]
    Calc {
        #[arg(value_enum, value_name = "OP")]
        op: OpKind,
        #[arg(value_name = "A")]
        a: String,
        /// Second operand (omit for abs)
        #[arg(value_name = "B")]
        b: Option<String>,
        /// Treat division by zero as an error instead of printing `undefined`
        #[arg(long = "strict", action = ArgAction::SetTrue)]
        strict: bool,
    },

    /// Print the library self-test block
    Demo,

    /// Play the number-guessing game on stdin/stdout
    Guess {
        /// Lowest possible secret (overrides config)
        #[arg(long = "min", value_name = "N", allow_negative_numbers = true)]
        min: Option<i64>,
        /// Highest possible secret (overrides config)
        #[arg(long = "max", value_name = "N", allow_negative_numbers = true)]
        max: Option<i64>,
        /// Attempt budget (overrides config)
        #[arg(long = "attempts", value_name = "N")]
        attempts: Option<u32>,
        /// Seed the RNG for a reproducible secret
        #[arg(long = "seed", value_name = "S")]
        seed: Option<u64>,
    },

    /// Summarise a numeric column; NA, NaN, null, None, - and empty values count as missing
    ///
    /// Example:
    ///   arithkit describe 1 2 NA 4 --fill mean
    #[command(allow_negative_numbers = true)]
    Describe {
        #[arg(value_name = "VALUES", required = true)]
        values: Vec<String>,
        /// How to treat missing values
        #[arg(long = "fill", value_enum, default_value_t = FillKind::Drop)]
        fill: FillKind,
        /// Emit the summary as JSON
        #[arg(long = "json", action = ArgAction::SetTrue)]
        json: bool,
    },

    /// Inspect or create the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration as TOML
    Show,
    /// Write the default configuration to the config path
    Init {
        /// Overwrite an existing file
        #[arg(long = "force", action = ArgAction::SetTrue)]
        force: bool,
    },
}
