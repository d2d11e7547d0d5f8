//  ____  ____                 ____
// |  _ \|  _ \ __ _ ___ ___  / ___| ___ _ __
// | |_) | |_) / _` / __/ __|| |  _ / _ \ '_ \
// |  _ <|  __/ (_| \__ \__ \| |_| |  __/ | | |
// |_| \_\_|   \__,_|___/___/ \____|\___|_| |_|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-08-04
// Version : 0.1.0
// License : Mulan PSL v2
//
// A readable password generator written in Rust.

use std::io;

use anyhow::Context;
use clap::Parser;

use rpassgen::cli::{self, Cli};
use rpassgen::commands::password_gen::{self, GenOptions};
use rpassgen::configtool::{self, AppConfig};

fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .format_timestamp_secs()
        .init();
}

fn main() -> anyhow::Result<()> {
    init_logging();

    // 无参数启动：使用默认值，并在输出后等待按键
    let no_args = std::env::args_os().len() <= 1;

    let (options, config) = if no_args {
        let config = configtool::load_config(None);
        (GenOptions::no_args(&config), config)
    } else {
        let cli = match Cli::try_parse() {
            Ok(cli) => cli,
            Err(e) => {
                cli::write_parse_error(&mut io::stdout().lock(), &e)
                    .context("Failed to report parameter error")?;
                return Ok(());
            }
        };
        log::debug!("Command line args: {:?}", cli);

        let mut config = configtool::load_config(cli.config.as_deref());
        if cli.legacy {
            config = config.legacy();
        }
        (GenOptions::from(&cli), config)
    };

    generate(&options, &config, no_args)
}

fn generate(options: &GenOptions, config: &AppConfig, wait_for_key: bool) -> anyhow::Result<()> {
    let outcome = password_gen::run(options, config);
    password_gen::render(&outcome, wait_for_key).context("Failed to write output")?;
    Ok(())
}
