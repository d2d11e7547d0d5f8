use std::{env, fs, path::Path};

const WORD_LIST: &str = "data/wordlist.txt";

// `<index>\t<word>`, the index has to match the position in the list
fn parse_entry(lineno: usize, line: &str) -> Result<(usize, String), String> {
    let (index, word) = line
        .split_once('\t')
        .ok_or_else(|| format!("line {}: expected `<index>\\t<word>`", lineno))?;
    let index: usize = index
        .trim()
        .parse()
        .map_err(|e| format!("line {}: bad index: {}", lineno, e))?;
    let word = word.trim();
    if word.is_empty() || !word.chars().all(|c| c.is_ascii_lowercase()) {
        return Err(format!("line {}: `{}` is not a lowercase ASCII word", lineno, word));
    }
    Ok((index, word.to_string()))
}

fn main() {
    let out_dir = env::var("OUT_DIR").expect("OUT_DIR not set");
    let source = fs::read_to_string(WORD_LIST).expect("Failed to read word list");

    let mut words = Vec::new();
    for (i, line) in source.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let (index, word) =
            parse_entry(i + 1, line).unwrap_or_else(|e| panic!("{}: {}", WORD_LIST, e));
        if index != words.len() {
            panic!("{}: index {} out of order, expected {}", WORD_LIST, index, words.len());
        }
        words.push(format!("{:?}", word));
    }

    let code = format!(
        "pub static WORDS: [&str; {}] = [{}];\n",
        words.len(),
        words.join(", ")
    );
    fs::write(Path::new(&out_dir).join("word_data.rs"), code)
        .expect("Failed to write word_data.rs");

    println!("cargo:rerun-if-changed={}", WORD_LIST);
}
