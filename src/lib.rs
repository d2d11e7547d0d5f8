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
// Readable password generator.

pub mod charnames;
pub mod cli;
pub mod commands;
pub mod configtool;
pub mod error;
pub mod passgen;
