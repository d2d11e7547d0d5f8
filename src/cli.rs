//  ____  ____                 ____
// |  _ \|  _ \ __ _ ___ ___  / ___| ___ _ __
// | |_) | |_) / _` / __/ __|| |  _ / _ \ '_ \
// |  _ <|  __/ (_| \__ \__ \| |_| |  __/ | | |
// |_| \_\_|   \__,_|___/___/ \____|\___|_| |_|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-08-06
// Version : 0.1.0
// License : Mulan PSL v2
//
// Command line arguments

use std::io::{self, Write};
use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{ArgAction, Parser};
use console::style;

use crate::commands::password_gen::GenOptions;

#[derive(Debug, Parser)]
#[command(name = "rpassgen", version)]
#[command(about = "Generate a password and spell out every character", long_about = None)]
pub struct Cli {
    /// Defines the length of the generated password
    #[arg(short, long, default_value_t = 16)]
    pub length: usize,

    /// Shows the explanation of each character
    #[arg(short = 's', long = "showLongOutput", default_value_t = true, action = ArgAction::Set)]
    pub show_long_output: bool,

    /// Generate a password using words rather than random characters
    #[arg(short = 'w', long = "useWords", default_value_t = false, action = ArgAction::Set)]
    pub use_words: bool,

    /// Use list indices and position-based leetspeak in word mode
    #[arg(long, default_value_t = false)]
    pub legacy: bool,

    /// Path to an alternative config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl From<&Cli> for GenOptions {
    fn from(cli: &Cli) -> Self {
        Self {
            length: cli.length,
            show_explanation: cli.show_long_output,
            use_words: cli.use_words,
        }
    }
}

/// Help and version text is written as is. Anything else is a parameter
/// error and is reported in red.
pub fn write_parse_error<W: Write>(out: &mut W, e: &clap::Error) -> io::Result<()> {
    match e.kind() {
        ErrorKind::DisplayHelp
        | ErrorKind::DisplayVersion
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => write!(out, "{}", e),
        _ => {
            writeln!(out, "{}", style("Parameter Error").red())?;
            writeln!(out, "{}", style(e.to_string().trim_end()).red())?;
            writeln!(out)
        }
    }
}
