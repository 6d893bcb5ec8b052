//! Number formatting: digit grouping and English number names.

const ONES: [&str; 20] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen",
    "nineteen",
];
const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];
const SCALES: [&str; 7] = [
    "",
    "thousand",
    "million",
    "billion",
    "trillion",
    "quadrillion",
    "quintillion",
];

/// Inserts thousands separators into a decimal number: `-1234567.5` becomes
/// `-1,234,567.5`. Returns `None` if `s` is not a plain decimal number.
pub fn thousands(s: &str) -> Option<String> {
    let s = s.trim();
    let (sign, unsigned) = match s.strip_prefix(['-', '+']) {
        Some(rest) => (&s[..1], rest),
        None => ("", s),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };
    let all_digits = |p: &str| p.chars().all(|c| c.is_ascii_digit());
    if int_part.is_empty() || !all_digits(int_part) || !frac_part.map_or(true, all_digits) {
        return None;
    }

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    Some(match frac_part {
        Some(f) => format!("{}{}.{}", sign, grouped, f),
        None => format!("{}{}", sign, grouped),
    })
}

fn below_thousand(n: u64) -> String {
    let mut parts = Vec::new();
    let hundreds = n / 100;
    let rest = (n % 100) as usize;
    if hundreds > 0 {
        parts.push(format!("{} hundred", ONES[hundreds as usize]));
    }
    match rest {
        0 => {}
        1..=19 => parts.push(ONES[rest].to_string()),
        _ if rest % 10 == 0 => parts.push(TENS[rest / 10].to_string()),
        _ => parts.push(format!("{}-{}", TENS[rest / 10], ONES[rest % 10])),
    }
    parts.join(" ")
}

/// English names for `n`, one stanza per non-zero power of a thousand, largest
/// first: `1234` gives `["one thousand", "two hundred thirty-four"]`.
pub fn number_names(n: u64) -> Vec<String> {
    if n == 0 {
        return vec![ONES[0].to_string()];
    }
    let mut groups = Vec::new();
    let mut rest = n;
    while rest > 0 {
        groups.push(rest % 1000);
        rest /= 1000;
    }

    groups
        .iter()
        .enumerate()
        .rev()
        .filter(|(_, g)| **g > 0)
        .map(|(scale, g)| match SCALES[scale] {
            "" => below_thousand(*g),
            name => format!("{} {}", below_thousand(*g), name),
        })
        .collect()
}
