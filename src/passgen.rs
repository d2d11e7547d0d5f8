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
// Password generator

use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

// 引入编译生成的单词列表
include!(concat!(env!("OUT_DIR"), "/word_data.rs"));

/// Sampling domain for character-mode passwords.
pub const ALPHABET: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789abcdefghijklmnopqrstuvwxyz!@#$%&*_-=+?";

/// Default length when `--length 0` is given.
pub const DEFAULT_LENGTH: usize = 16;

/// Shortest accepted explicit length.
pub const MIN_LENGTH: usize = 15;

const WORD_ROUNDS: usize = 3;
const WORDS_PER_ROUND: usize = 3;

// 单词密码的取样方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WordSource {
    /// Random words from the list.
    #[default]
    Words,
    /// Random list indices written as decimal numbers.
    Indices,
}

// l33t 替换规则
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeetRule {
    /// Test the character at each position.
    #[default]
    Character,
    /// Test the position itself against character codes. Drops characters
    /// whose position has no leet entry.
    Index,
}

/// Looks up the leetspeak digit for a lowercase letter.
pub fn leet_digit(c: char) -> Option<char> {
    match c {
        'a' => Some('4'),
        'b' => Some('8'),
        'e' => Some('3'),
        'i' => Some('1'),
        'l' => Some('1'),
        'o' => Some('0'),
        't' => Some('7'),
        _ => None,
    }
}

pub fn generate_random_string(length: usize) -> String {
    generate_random_string_with_rng(&mut OsRng, length)
}

pub fn generate_random_string_with_rng<R: Rng + ?Sized>(rng: &mut R, length: usize) -> String {
    (0..length)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}

/// 生成单词密码（最多三轮，每轮三个词）
pub fn generate_word_password(min_length: usize, source: WordSource) -> String {
    generate_word_password_with_rng(&mut OsRng, min_length, source)
}

pub fn generate_word_password_with_rng<R: Rng + ?Sized>(
    rng: &mut R,
    min_length: usize,
    source: WordSource,
) -> String {
    let mut password = String::new();

    for _ in 0..WORD_ROUNDS {
        // 每轮开始前检查长度
        if password.len() >= min_length {
            break;
        }
        for _ in 0..WORDS_PER_ROUND {
            match source {
                WordSource::Words => {
                    if let Some(word) = WORDS.choose(rng) {
                        password.push_str(word);
                    }
                }
                WordSource::Indices => {
                    let index = rng.gen_range(0..WORDS.len());
                    password.push_str(&index.to_string());
                }
            }
            password.push(' ');
        }
    }

    password.trim_end().to_string()
}

pub fn apply_leet(input: &str, rule: LeetRule) -> String {
    apply_leet_with_rng(&mut OsRng, input, rule)
}

/// Mutates `input` one character at a time. Every character takes three
/// independent draws: a one-in-four gate, a coin for `s`, and a
/// three-way pick for spaces.
pub fn apply_leet_with_rng<R: Rng + ?Sized>(rng: &mut R, input: &str, rule: LeetRule) -> String {
    let mut output = String::with_capacity(input.len());

    for (i, c) in input.chars().enumerate() {
        let gate = rng.gen_range(0..4);
        let coin = rng.gen_range(0..2);
        let third = rng.gen_range(0..3);

        match rule {
            LeetRule::Character => output.push(leet_by_character(c, gate, coin, third)),
            LeetRule::Index => {
                if let Some(mutated) = leet_by_index(i, c, gate, coin, third) {
                    output.push(mutated);
                }
            }
        }
    }

    output
}

fn leet_by_character(c: char, gate: u8, coin: u8, third: u8) -> char {
    if gate != 3 {
        return c;
    }
    if let Some(digit) = leet_digit(c) {
        return digit;
    }
    match (c, coin, third) {
        ('s' | 'S', 0, _) => '$',
        ('s' | 'S', _, _) => '5',
        (' ', _, 0) => '-',
        (' ', _, 1) => '_',
        _ => c,
    }
}

// 以位置编号代替字符做判断，未命中映射时丢弃该字符
fn leet_by_index(i: usize, c: char, gate: u8, coin: u8, third: u8) -> Option<char> {
    let code = u32::try_from(i).ok().and_then(char::from_u32);
    let is_s = matches!(code, Some('s' | 'S'));
    let is_space = code == Some(' ');

    if gate == 3 {
        code.and_then(leet_digit)
    } else if coin == 0 && is_s && gate == 3 {
        Some('$')
    } else if coin == 1 && is_s && gate == 3 {
        Some('5')
    } else if third == 0 && is_space && gate == 3 {
        Some('-')
    } else if third == 1 && is_space && gate == 3 {
        Some('_')
    } else {
        Some(c)
    }
}
