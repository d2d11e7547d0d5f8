use std::io::{self, Write};

use console::{Term, style};
use rand::Rng;
use rand::rngs::OsRng;

use crate::charnames::explain;
use crate::configtool::AppConfig;
use crate::error::Result;
use crate::passgen::{self, MIN_LENGTH};

pub const LENGTH_REJECTED: &str = "Password needs to be 15 or more characters";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenOptions {
    /// `0` means "use the configured default".
    pub length: usize,
    pub show_explanation: bool,
    pub use_words: bool,
}

impl GenOptions {
    /// Options used when the program is started without any argument.
    pub fn no_args(config: &AppConfig) -> Self {
        Self {
            length: config.no_args_length,
            show_explanation: true,
            use_words: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationOutcome {
    Rejected { message: String },
    Generated { password: String, explanation: Option<String> },
}

impl GenerationOutcome {
    pub fn password(&self) -> Option<&str> {
        match self {
            GenerationOutcome::Generated { password, .. } => Some(password),
            GenerationOutcome::Rejected { .. } => None,
        }
    }

    pub fn explanation(&self) -> Option<&str> {
        match self {
            GenerationOutcome::Generated { explanation, .. } => explanation.as_deref(),
            GenerationOutcome::Rejected { .. } => None,
        }
    }
}

pub fn run(options: &GenOptions, config: &AppConfig) -> GenerationOutcome {
    run_with_rng(&mut OsRng, options, config)
}

pub fn run_with_rng<R: Rng + ?Sized>(
    rng: &mut R,
    options: &GenOptions,
    config: &AppConfig,
) -> GenerationOutcome {
    if options.length != 0 && options.length < MIN_LENGTH {
        log::debug!("Rejected length {}", options.length);
        return GenerationOutcome::Rejected {
            message: LENGTH_REJECTED.to_string(),
        };
    }

    let password = if options.use_words {
        log::debug!(
            "Word mode: source={:?}, leet={:?}, min_length={}",
            config.word_source,
            config.leet_rule,
            config.word_min_length
        );
        let words = passgen::generate_word_password_with_rng(
            rng,
            config.word_min_length,
            config.word_source,
        );
        passgen::apply_leet_with_rng(rng, &words, config.leet_rule)
            .trim()
            .to_string()
    } else {
        let length = if options.length == 0 {
            config.default_length
        } else {
            options.length
        };
        log::debug!("Character mode: length={}", length);
        passgen::generate_random_string_with_rng(rng, length)
    };

    let explanation = if options.show_explanation && !password.trim().is_empty() {
        Some(explain(&password))
    } else {
        None
    };

    GenerationOutcome::Generated { password, explanation }
}

/// Writes the outcome. The password is highlighted only when the
/// explanation follows it.
pub fn write_outcome<W: Write>(out: &mut W, outcome: &GenerationOutcome) -> io::Result<()> {
    match outcome {
        GenerationOutcome::Rejected { message } => writeln!(out, "{}", message),
        GenerationOutcome::Generated { password, explanation: Some(explanation) } => {
            writeln!(out)?;
            writeln!(out, "{}", style(password).green())?;
            writeln!(out)?;
            writeln!(out, "{}", explanation)?;
            writeln!(out)
        }
        GenerationOutcome::Generated { password, explanation: None } => {
            writeln!(out, "{}", password)
        }
    }
}

/// Prints the outcome to stdout. With `wait_for_key` set the long output
/// ends with a blocking keypress prompt.
pub fn render(outcome: &GenerationOutcome, wait_for_key: bool) -> Result<()> {
    let mut stdout = io::stdout().lock();
    write_outcome(&mut stdout, outcome)?;

    if wait_for_key && outcome.explanation().is_some() {
        write!(stdout, "Press any key to exit...")?;
        stdout.flush()?;
        drop(stdout);
        Term::stdout().read_key()?;
        println!();
    }
    Ok(())
}
