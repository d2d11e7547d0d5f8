use rpassgen::passgen::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;

#[test]
fn test_alphabet_contents() {
    assert_eq!(ALPHABET.len(), 74);
    assert_eq!(ALPHABET.iter().filter(|c| c.is_ascii_uppercase()).count(), 26);
    assert_eq!(ALPHABET.iter().filter(|c| c.is_ascii_lowercase()).count(), 26);
    assert_eq!(ALPHABET.iter().filter(|c| c.is_ascii_digit()).count(), 10);
    let unique: HashSet<&u8> = ALPHABET.iter().collect();
    assert_eq!(unique.len(), ALPHABET.len());
}

#[test]
fn test_generate_random_string_length_and_charset() {
    for length in [1, 15, 16, 64] {
        let password = generate_random_string(length);
        assert_eq!(password.len(), length);
        assert!(password.bytes().all(|b| ALPHABET.contains(&b)));
    }
}

#[test]
fn test_generate_random_string_zero_length() {
    assert!(generate_random_string(0).is_empty());
}

#[test]
fn test_generate_random_string_covers_alphabet() {
    let mut rng = ChaCha8Rng::seed_from_u64(20);
    let mut seen = HashSet::new();
    for _ in 0..1000 {
        let password = generate_random_string_with_rng(&mut rng, 20);
        assert_eq!(password.chars().count(), 20);
        seen.extend(password.bytes());
    }
    // 20000 次取样，每个字符都应出现
    for c in ALPHABET {
        assert!(seen.contains(c), "character {} never sampled", *c as char);
    }
}

#[test]
fn test_word_list_loaded() {
    assert_eq!(WORDS.len(), 320);
    assert_eq!(WORDS[0], "red");
    assert!(WORDS.iter().all(|w| !w.is_empty() && w.chars().all(|c| c.is_ascii_lowercase())));
}

#[test]
fn test_generate_word_password_indices() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    for _ in 0..200 {
        let password = generate_word_password_with_rng(&mut rng, 15, WordSource::Indices);
        assert!(!password.ends_with(' '));
        let tokens: Vec<&str> = password.split(' ').collect();
        // 一轮最多 12 个字符，所以至少两轮
        assert!(
        tokens.len() == 6 || tokens.len() == 9,
        "unexpected token count: {}",
        password
    );
        for token in tokens {
            let index: usize = token.parse().unwrap();
            assert!(index < WORDS.len());
        }
    }
}

#[test]
fn test_generate_word_password_words() {
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    for _ in 0..200 {
        let password = generate_word_password_with_rng(&mut rng, 15, WordSource::Words);
        assert!(!password.ends_with(' '));
        let tokens: Vec<&str> = password.split(' ').collect();
        assert!(tokens.len() <= 9);
        assert_eq!(tokens.len() % 3, 0);
        assert!(tokens.iter().all(|t| WORDS.iter().any(|w| w == t)));
        if tokens.len() < 9 {
            // trailing separator was counted before trimming
            assert!(password.len() + 1 >= 15);
        }
    }
}

#[test]
fn test_generate_word_password_zero_min_length() {
    assert_eq!(generate_word_password(0, WordSource::Words), "");
}

#[test]
fn test_generate_word_password_large_min_length_stops_after_three_rounds() {
    let password = generate_word_password(10_000, WordSource::Indices);
    assert_eq!(password.split(' ').count(), 9);
}

#[test]
fn test_leet_digit_map() {
    let expected = [
        ('a', '4'),
        ('b', '8'),
        ('e', '3'),
        ('i', '1'),
        ('l', '1'),
        ('o', '0'),
        ('t', '7'),
    ];
    for (letter, digit) in expected {
        assert_eq!(leet_digit(letter), Some(digit));
    }
    assert_eq!(('a'..='z').filter(|c| leet_digit(*c).is_some()).count(), 7);
    assert_eq!(leet_digit('A'), None);
}

#[test]
fn test_apply_leet_character_rule() {
    let input = "basket lotus tide silo";
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let mut mutated_any = false;
    for _ in 0..100 {
        let output = apply_leet_with_rng(&mut rng, input, LeetRule::Character);
        assert_eq!(output.chars().count(), input.chars().count());
        for (original, changed) in input.chars().zip(output.chars()) {
            if original == changed {
                continue;
            }
            mutated_any = true;
            match original {
                's' => assert!(changed == '$' || changed == '5'),
                ' ' => assert!(changed == '-' || changed == '_'),
                c => assert_eq!(leet_digit(c), Some(changed)),
            }
        }
    }
    assert!(mutated_any);
}

#[test]
fn test_apply_leet_character_rule_keeps_other_characters() {
    let input = "cdfghjkmnpqruvwxyz";
    let output = apply_leet(input, LeetRule::Character);
    assert_eq!(output, input);
}

#[test]
fn test_apply_leet_index_rule_short_input() {
    // 位置编号都小于 ' '，命中概率门时字符被丢弃，否则原样保留
    let input = "apple banana";
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    for _ in 0..100 {
        let output = apply_leet_with_rng(&mut rng, input, LeetRule::Index);
        assert!(output.len() <= input.len());
        let mut remaining = input.chars();
        for c in output.chars() {
            assert!(remaining.any(|r| r == c), "{} is not a subsequence of {}", output, input);
        }
    }
}

#[test]
fn test_apply_leet_index_rule_long_input() {
    // 位置 97 ('a') 之后才可能出现替换数字
    let input = "x".repeat(120);
    let mut rng = ChaCha8Rng::seed_from_u64(9);
    for _ in 0..50 {
        let output = apply_leet_with_rng(&mut rng, &input, LeetRule::Index);
        assert!(output.chars().all(|c| c == 'x' || "4831107".contains(c)));
    }
}

#[test]
fn test_apply_leet_empty() {
    assert_eq!(apply_leet("", LeetRule::Character), "");
    assert_eq!(apply_leet("", LeetRule::Index), "");
}
