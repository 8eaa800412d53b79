//! Subcommands of the `waris` binary

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use domain_inheritance::{
    available_heir_relations, calculate_inheritance, DeceasedInfo, Gender, InheritanceValidator,
    LawSystem, MaritalStatus,
};

use crate::config::{CliConfig, OutputFormat};
use crate::input::load_case;
use crate::render::{render_relations, render_result};

#[derive(Debug, Parser)]
#[command(name = "waris")]
#[command(about = "Pembagian waris menurut Hukum Islam (Faraid) dan KUHPerdata")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Validate a case and print the distribution
    Calculate {
        /// Case file in JSON, or `-` for standard input
        #[arg(long, short = 'i')]
        input: PathBuf,
        /// Override the law system named in the case
        #[arg(long, value_enum)]
        law: Option<LawArg>,
        /// Output format
        #[arg(long, short = 'f', value_enum)]
        format: Option<OutputFormat>,
    },
    /// Print every validation problem in a case
    Validate {
        /// Case file in JSON, or `-` for standard input
        #[arg(long, short = 'i')]
        input: PathBuf,
    },
    /// List the heir relations that can still be added
    Relations {
        /// Gender of the deceased
        #[arg(long, value_enum)]
        gender: GenderArg,
        /// Existing case; the spouse is hidden when it already has one
        #[arg(long, short = 'i')]
        input: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LawArg {
    Islam,
    Perdata,
}

impl From<LawArg> for LawSystem {
    fn from(arg: LawArg) -> Self {
        match arg {
            LawArg::Islam => LawSystem::Islam,
            LawArg::Perdata => LawSystem::Perdata,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GenderArg {
    Male,
    Female,
}

impl From<GenderArg> for Gender {
    fn from(arg: GenderArg) -> Self {
        match arg {
            GenderArg::Male => Gender::Male,
            GenderArg::Female => Gender::Female,
        }
    }
}

/// Outcome of a command, mapped to the process exit code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    InvalidCase,
}

/// Runs a parsed command, writing to `out`
pub fn run(command: Command, config: &CliConfig, out: &mut impl Write) -> Result<Outcome> {
    match command {
        Command::Calculate { input, law, format } => {
            let case = load_case(&input, config.default_law_system, law.map(LawSystem::from))?;

            let report = InheritanceValidator::validate(&case);
            if !report.is_valid() {
                tracing::info!(errors = report.errors.len(), "Case rejected");
                writeln!(out, "Input tidak valid:")?;
                for message in report.messages() {
                    writeln!(out, "- {}", message)?;
                }
                return Ok(Outcome::InvalidCase);
            }

            let result = calculate_inheritance(&case);
            tracing::info!(
                case_id = %result.case_id,
                shares = result.shares.len(),
                warnings = result.warnings.len(),
                "Case calculated"
            );
            let rendered = render_result(&case, &result, format.unwrap_or(config.output_format))?;
            writeln!(out, "{}", rendered.trim_end())?;
            Ok(Outcome::Success)
        }

        Command::Validate { input } => {
            let case = load_case(&input, config.default_law_system, None)?;
            let report = InheritanceValidator::validate(&case);

            if report.is_valid() {
                writeln!(out, "Input valid")?;
            } else {
                for message in report.messages() {
                    writeln!(out, "- {}", message)?;
                }
            }
            for warning in &report.warnings {
                writeln!(out, "Peringatan: {}", warning)?;
            }

            Ok(if report.is_valid() {
                Outcome::Success
            } else {
                Outcome::InvalidCase
            })
        }

        Command::Relations { gender, input } => {
            let gender = Gender::from(gender);
            let heirs = match input {
                Some(path) => load_case(&path, config.default_law_system, None)
                    .context("Failed to load existing heirs")?
                    .heirs,
                None => Vec::new(),
            };
            let deceased = DeceasedInfo::new("", gender, MaritalStatus::Married);
            let relations = available_heir_relations(&deceased, &heirs);
            write!(out, "{}", render_relations(&relations, gender))?;
            Ok(Outcome::Success)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_calculate_arguments() {
        let cli = Cli::try_parse_from([
            "waris", "calculate", "--input", "case.json", "--law", "perdata", "--format", "json",
        ])
        .unwrap();
        match cli.command {
            Command::Calculate { input, law, format } => {
                assert_eq!(input, PathBuf::from("case.json"));
                assert_eq!(law, Some(LawArg::Perdata));
                assert_eq!(format, Some(OutputFormat::Json));
            }
            other => panic!("Unexpected command {:?}", other),
        }
    }
}
