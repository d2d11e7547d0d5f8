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
// Character names for the long output

/// Symbols that have a spoken name. `<` and `>` are left out on purpose,
/// helpdesk tools mangle them.
pub const SYMBOL_NAMES: [(char, &str); 12] = [
    ('!', "EXCLAMATION"),
    ('@', "AT-SIGN"),
    ('#', "HASHTAG-POUND"),
    ('$', "DOLLAR-SIGN"),
    ('%', "PERCENT-SIGN"),
    ('&', "AMPERSAND"),
    ('*', "ASTERISK"),
    ('_', "UNDERSCORE"),
    ('-', "HYPHEN"),
    ('+', "PLUS"),
    ('=', "EQUAL"),
    ('?', "QUESTION-MARK"),
];

pub fn digit_name(c: char) -> Option<&'static str> {
    match c {
        '0' => Some("ZERO"),
        '1' => Some("ONE"),
        '2' => Some("TWO"),
        '3' => Some("THREE"),
        '4' => Some("FOUR"),
        '5' => Some("FIVE"),
        '6' => Some("SIX"),
        '7' => Some("SEVEN"),
        '8' => Some("EIGHT"),
        '9' => Some("NINE"),
        _ => None,
    }
}

pub fn symbol_name(c: char) -> Option<&'static str> {
    SYMBOL_NAMES
        .iter()
        .find(|(symbol, _)| *symbol == c)
        .map(|(_, name)| *name)
}

/// Describes one character: digit name, symbol name, or letter case plus
/// the upper-cased character.
pub fn describe_char(c: char) -> String {
    if let Some(name) = digit_name(c).or_else(|| symbol_name(c)) {
        return name.to_string();
    }
    let case = if c.is_uppercase() { "uppercase" } else { "lowercase" };
    format!("{} {}", case, c.to_uppercase())
}

/// `"Ab1!"` becomes `"(uppercase A, lowercase B, ONE, EXCLAMATION)"`.
pub fn explain(password: &str) -> String {
    let names: Vec<String> = password.chars().map(describe_char).collect();
    format!("({})", names.join(", "))
}
