use crate::value::ErrorKind;

/// Separators used when reading numbers out of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberLocale {
    pub decimal_separator: char,
    pub group_separator: Option<char>,
}

impl NumberLocale {
    #[must_use]
    pub const fn new(decimal_separator: char, group_separator: Option<char>) -> Self {
        Self {
            decimal_separator,
            group_separator,
        }
    }

    #[must_use]
    pub const fn en_us() -> Self {
        Self::new('.', Some(','))
    }
}

impl Default for NumberLocale {
    fn default() -> Self {
        Self::en_us()
    }
}

const CURRENCY_SYMBOLS: &[char] = &['$', '€', '£', '¥'];

/// Parse numeric text the way Excel's implicit text → number coercion does.
///
/// Accepted forms: surrounding whitespace, a leading sign, accounting negatives (`(1,000)`),
/// a currency prefix, digit grouping in groups of three, a locale decimal separator, scientific
/// notation and a trailing `%`.
///
/// Text that is not a number fails with `#VALUE!`, including numeric text that overflows `f64`.
pub fn parse_number(raw: &str, locale: NumberLocale) -> Result<f64, ErrorKind> {
    let mut s = raw.trim();
    if s.is_empty() {
        return Err(ErrorKind::Value);
    }

    let mut negative = false;
    if let Some(inner) = s.strip_prefix('(').and_then(|r| r.strip_suffix(')')) {
        negative = true;
        s = inner.trim();
    }

    let mut percent = false;
    if let Some(rest) = s.strip_suffix('%') {
        percent = true;
        s = rest.trim_end();
    }

    // Sign and currency may appear in either order: `-$5` and `$-5`.
    let mut seen_sign = negative;
    let mut seen_currency = false;
    loop {
        if !seen_sign {
            if let Some(rest) = s.strip_prefix('-') {
                negative = true;
                seen_sign = true;
                s = rest.trim_start();
                continue;
            }
            if let Some(rest) = s.strip_prefix('+') {
                seen_sign = true;
                s = rest.trim_start();
                continue;
            }
        }
        if !seen_currency {
            if let Some(rest) = s.strip_prefix(CURRENCY_SYMBOLS) {
                seen_currency = true;
                s = rest.trim_start();
                continue;
            }
        }
        break;
    }

    let normalized = normalize_mantissa(s, locale).ok_or(ErrorKind::Value)?;
    let mut n: f64 = normalized.parse().map_err(|_| ErrorKind::Value)?;
    if !n.is_finite() {
        return Err(ErrorKind::Value);
    }
    if percent {
        n /= 100.0;
    }
    if negative {
        n = -n;
    }
    // Excel never surfaces negative zero.
    if n == 0.0 {
        n = 0.0;
    }
    Ok(n)
}

/// Rewrites `digits[group digits][decimal digits][exponent]` into a Rust float literal, or
/// returns `None` when the text is not a well-formed number.
fn normalize_mantissa(s: &str, locale: NumberLocale) -> Option<String> {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    // Integer part, with optional grouping.
    let mut int_digits = 0usize;
    let mut current_group = 0usize;
    let mut saw_group = false;
    while let Some(&c) = chars.peek() {
        if c.is_ascii_digit() {
            out.push(c);
            int_digits += 1;
            current_group += 1;
            chars.next();
        } else if Some(c) == locale.group_separator && c != locale.decimal_separator {
            // The first group may be 1-3 digits; every following group must be exactly 3.
            let valid = if saw_group {
                current_group == 3
            } else {
                (1..=3).contains(&current_group)
            };
            if !valid {
                return None;
            }
            saw_group = true;
            current_group = 0;
            chars.next();
        } else {
            break;
        }
    }
    if saw_group && current_group != 3 {
        return None;
    }

    let mut frac_digits = 0usize;
    if chars.peek() == Some(&locale.decimal_separator) {
        chars.next();
        out.push('.');
        while let Some(&c) = chars.peek() {
            if !c.is_ascii_digit() {
                break;
            }
            out.push(c);
            frac_digits += 1;
            chars.next();
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if matches!(chars.peek(), Some('e' | 'E')) {
        chars.next();
        out.push('e');
        if let Some(&sign @ ('+' | '-')) = chars.peek() {
            out.push(sign);
            chars.next();
        }
        let mut exp_digits = 0usize;
        while let Some(&c) = chars.peek() {
            if !c.is_ascii_digit() {
                break;
            }
            out.push(c);
            exp_digits += 1;
            chars.next();
        }
        if exp_digits == 0 {
            return None;
        }
    }

    if chars.next().is_some() {
        return None;
    }
    Some(out)
}
