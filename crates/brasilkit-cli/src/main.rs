// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Brasilkit — terminal front-end over the library crates.
//
// Entry point. Initialises logging, parses the subcommand, and prints the
// result. Validation failures exit non-zero with a plain-language reason.

use std::process::ExitCode;

use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand, ValueEnum};

use brasilkit_calendar::{business_days_between, easter, holidays, holidays_in_month, next_holiday};
use brasilkit_core::config::AppConfig;
use brasilkit_core::error::BrasilkitError;
use brasilkit_core::messages::explain;
use brasilkit_core::types::DocumentKind;
use brasilkit_documents::checksum::{CheckDigitSpec, check_digits};
use brasilkit_documents::{format as format_document, format_cep, normalize};
use brasilkit_format::{format_br, format_brl, format_percent, format_phone, parse_flexible};

#[derive(Parser, Debug)]
#[command(name = "brasilkit", version, about = "Brazilian identifiers, holidays, and formatting")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Identifier kind as a CLI argument.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum KindArg {
    Cpf,
    Cnpj,
}

impl From<KindArg> for DocumentKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Cpf => DocumentKind::Cpf,
            KindArg::Cnpj => DocumentKind::Cnpj,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check a CPF or CNPJ; exits 1 with the rejection reason if invalid
    Validate {
        /// Identifier kind
        #[arg(value_enum)]
        kind: KindArg,
        /// The identifier, punctuated or not
        value: String,
    },

    /// Print the punctuated form of a valid CPF or CNPJ
    Format {
        #[arg(value_enum)]
        kind: KindArg,
        value: String,
    },

    /// List the national holidays of a year
    Holidays {
        year: i32,
        /// Restrict to one calendar month (1-12)
        #[arg(long)]
        month: Option<u32>,
        /// Emit JSON instead of plain text
        #[arg(long)]
        json: bool,
    },

    /// Show the first national holiday after a date (default: today)
    NextHoliday {
        /// Reference date, dd/mm/yyyy or yyyy-mm-dd
        #[arg(long)]
        from: Option<String>,
    },

    /// Print the date of Easter Sunday for a year
    Easter { year: i32 },

    /// Count business days in an inclusive date range
    BusinessDays {
        /// Range start, dd/mm/yyyy or yyyy-mm-dd
        start: String,
        /// Range end, dd/mm/yyyy or yyyy-mm-dd
        end: String,
        /// Count national holidays as business days
        #[arg(long)]
        include_holidays: bool,
    },

    /// Format a CEP as ddddd-ddd
    Cep { value: String },

    /// Format a phone number by its digit count
    Phone { value: String },

    /// Render an amount as Brazilian Real
    Brl {
        amount: f64,
        /// Omit the "R$ " prefix
        #[arg(long)]
        no_symbol: bool,
    },

    /// Render a ratio as a percentage (0.15 -> 15,00%)
    Percent { value: f64 },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    tracing::debug!("brasilkit starting");

    let cli = Cli::parse();
    let config = AppConfig::default();

    match run(cli.command, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let msg = explain(&err);
            eprintln!("{}", msg.message);
            eprintln!("{}", msg.suggestion);
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands, config: &AppConfig) -> Result<(), BrasilkitError> {
    match command {
        Commands::Validate { kind, value } => {
            let kind = DocumentKind::from(kind);
            let digits = normalize(&value);
            check_digits(&digits, CheckDigitSpec::for_kind(kind))?;
            println!("valid {kind}");
            Ok(())
        }

        Commands::Format { kind, value } => {
            let kind = DocumentKind::from(kind);
            let formatted = format_document(&value, kind);
            if formatted.is_empty() {
                // Re-run the engine for the reason; format itself only
                // signals validity through the empty string.
                check_digits(&normalize(&value), CheckDigitSpec::for_kind(kind))?;
            }
            println!("{formatted}");
            Ok(())
        }

        Commands::Holidays { year, month, json } => {
            let set = match month {
                Some(m) => holidays_in_month(year, m),
                None => holidays(year),
            };
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&set).expect("holiday set serializes")
                );
            } else {
                for holiday in &set {
                    println!("{holiday}");
                }
            }
            Ok(())
        }

        Commands::NextHoliday { from } => {
            let reference = match from {
                Some(input) => {
                    parse_flexible(&input).ok_or(BrasilkitError::UnparsableDate(input))?
                }
                None => Local::now().date_naive(),
            };
            match next_holiday(reference) {
                Some(holiday) => println!("{holiday}"),
                None => println!("no upcoming holiday"),
            }
            Ok(())
        }

        Commands::Easter { year } => {
            println!("{}", format_br(easter(year)));
            Ok(())
        }

        Commands::BusinessDays {
            start,
            end,
            include_holidays,
        } => {
            let start = parse_date(&start)?;
            let end = parse_date(&end)?;
            let include = include_holidays || config.count_holidays_as_business_days;
            println!("{}", business_days_between(start, end, include));
            Ok(())
        }

        Commands::Cep { value } => {
            println!("{}", format_cep(&value));
            Ok(())
        }

        Commands::Phone { value } => {
            println!("{}", format_phone(&value));
            Ok(())
        }

        Commands::Brl { amount, no_symbol } => {
            let symbol = config.currency_symbol && !no_symbol;
            println!("{}", format_brl(amount, symbol));
            Ok(())
        }

        Commands::Percent { value } => {
            println!("{}", format_percent(value, config.percent_decimals));
            Ok(())
        }
    }
}

fn parse_date(input: &str) -> Result<NaiveDate, BrasilkitError> {
    parse_flexible(input).ok_or_else(|| BrasilkitError::UnparsableDate(input.to_string()))
}
