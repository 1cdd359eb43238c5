//! Conversion of the LaTeX-flavoured labels into plain Unicode text.
//!
//! Only the small subset of math mode used by the axis labels, titles and legend entries is
//! understood: super- and subscripts, a handful of Greek letters and arrows, accents and spacing
//! commands. Unknown commands are printed without their backslash.

use std::iter::Peekable;
use std::str::Chars;

const THIN_SPACE: char = '\u{2009}';
const COMBINING_MACRON: char = '\u{0304}';
const COMBINING_TILDE: char = '\u{0303}';

/// Converts `tex` into text that can be drawn without running TeX.
#[must_use]
pub fn to_plain(tex: &str) -> String {
    let mut chars = tex.chars().peekable();
    let mut result = String::new();

    while chars.peek().is_some() {
        result.push_str(&atom(&mut chars));
    }

    result
}

/// Formats `value` as a power of ten, `10⁻²`, if it is one and in scientific notation otherwise.
#[must_use]
pub fn power_of_ten(value: f64) -> String {
    let exponent = value.log10().round();

    if value > 0.0 && (value / 10_f64.powf(exponent) - 1.0).abs() < 1e-9 {
        let exponent = format!("{exponent:.0}");
        format!("10{}", superscript(&exponent).unwrap_or(exponent))
    } else {
        format!("{value:e}")
    }
}

/// Reads the next unit: a braced group, a command with its arguments or a single character.
fn atom(chars: &mut Peekable<Chars>) -> String {
    let Some(ch) = chars.next() else {
        return String::new();
    };

    match ch {
        '$' => String::new(),
        '~' => " ".to_owned(),
        '{' => group(chars),
        '\\' => command(chars),
        '^' => script(chars, '^', superscript),
        '_' => script(chars, '_', subscript),
        _ => ch.to_string(),
    }
}

fn group(chars: &mut Peekable<Chars>) -> String {
    let mut result = String::new();

    while let Some(&ch) = chars.peek() {
        if ch == '}' {
            chars.next();
            break;
        }

        result.push_str(&atom(chars));
    }

    result
}

fn script(chars: &mut Peekable<Chars>, marker: char, convert: fn(&str) -> Option<String>) -> String {
    let text = atom(chars);

    convert(&text).unwrap_or_else(|| {
        if text.chars().count() == 1 {
            format!("{marker}{text}")
        } else {
            format!("{marker}({text})")
        }
    })
}

fn command(chars: &mut Peekable<Chars>) -> String {
    let mut name = String::new();

    while let Some(&ch) = chars.peek() {
        if !ch.is_ascii_alphabetic() {
            break;
        }
        name.push(ch);
        chars.next();
    }

    if name.is_empty() {
        // control symbols like `\,` or `\{`
        return match chars.next() {
            Some(',' | ':' | ';') => THIN_SPACE.to_string(),
            Some(' ' | '!') | None => String::new(),
            Some(ch) => ch.to_string(),
        };
    }

    // the space after a control word only terminates it
    if chars.peek() == Some(&' ') {
        chars.next();
    }

    match name.as_str() {
        "bar" | "overline" => accent(atom(chars), COMBINING_MACRON),
        "tilde" => accent(atom(chars), COMBINING_TILDE),
        "mathrm" | "text" | "mathit" | "mathbf" => atom(chars),
        "to" | "rightarrow" => "→".to_owned(),
        "leftarrow" => "←".to_owned(),
        "pm" => "±".to_owned(),
        "times" => "×".to_owned(),
        "quad" => "  ".to_owned(),
        _ => greek(&name).map_or(name, |letter| letter.to_string()),
    }
}

/// Places the combining `mark` on the first character of `text`.
fn accent(text: String, mark: char) -> String {
    let mut chars = text.chars();

    chars.next().map_or(text.clone(), |first| {
        let mut result = String::with_capacity(text.len() + mark.len_utf8());
        result.push(first);
        result.push(mark);
        result.extend(chars);
        result
    })
}

fn greek(name: &str) -> Option<char> {
    let letter = match name {
        "alpha" => 'α',
        "beta" => 'β',
        "gamma" => 'γ',
        "delta" => 'δ',
        "epsilon" => 'ε',
        "eta" => 'η',
        "theta" => 'θ',
        "lambda" => 'λ',
        "mu" => 'μ',
        "nu" => 'ν',
        "pi" => 'π',
        "rho" => 'ρ',
        "sigma" => 'σ',
        "tau" => 'τ',
        "phi" => 'φ',
        "chi" => 'χ',
        "psi" => 'ψ',
        "omega" => 'ω',
        "Gamma" => 'Γ',
        "Delta" => 'Δ',
        "Sigma" => 'Σ',
        "Omega" => 'Ω',
        _ => return None,
    };

    Some(letter)
}

fn superscript(text: &str) -> Option<String> {
    text.chars()
        .map(|ch| {
            Some(match ch {
                '0' => '⁰',
                '1' => '¹',
                '2' => '²',
                '3' => '³',
                '4' => '⁴',
                '5' => '⁵',
                '6' => '⁶',
                '7' => '⁷',
                '8' => '⁸',
                '9' => '⁹',
                '+' => '⁺',
                '-' => '⁻',
                '=' => '⁼',
                '(' => '⁽',
                ')' => '⁾',
                'i' => 'ⁱ',
                'n' => 'ⁿ',
                _ => return None,
            })
        })
        .collect()
}

fn subscript(text: &str) -> Option<String> {
    text.chars()
        .map(|ch| {
            Some(match ch {
                '0' => '₀',
                '1' => '₁',
                '2' => '₂',
                '3' => '₃',
                '4' => '₄',
                '5' => '₅',
                '6' => '₆',
                '7' => '₇',
                '8' => '₈',
                '9' => '₉',
                '+' => '₊',
                '-' => '₋',
                '=' => '₌',
                '(' => '₍',
                ')' => '₎',
                'a' => 'ₐ',
                'e' => 'ₑ',
                'h' => 'ₕ',
                'k' => 'ₖ',
                'l' => 'ₗ',
                'm' => 'ₘ',
                'n' => 'ₙ',
                'o' => 'ₒ',
                'p' => 'ₚ',
                's' => 'ₛ',
                't' => 'ₜ',
                'x' => 'ₓ',
                _ => return None,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legend_labels() {
        assert_eq!(to_plain(r"ANUBIS0, 3 ab$^{-1}$"), "ANUBIS0, 3 ab⁻¹");
        assert_eq!(to_plain(r"CODEX-b, 300 fb$^{-1}$"), "CODEX-b, 300 fb⁻¹");
        assert_eq!(to_plain("plain text"), "plain text");
        assert_eq!(to_plain(""), "");
    }

    #[test]
    fn axis_labels() {
        assert_eq!(to_plain(r"c$\tau_{N}$ [m]"), "cτ_N [m]");
        assert_eq!(to_plain(r"c$\tau_{A_S}$ [m]"), "cτ_(A_S) [m]");
        assert_eq!(
            to_plain(r"$\sigma (pp\rightarrow A\rightarrow A_S\,h_{\mathrm{SM}})$ [fb]"),
            "σ(pp→A→A_S\u{2009}h_(SM)) [fb]"
        );
        assert_eq!(
            to_plain(r"Br$(B^+/B^0 \to e^+/\bar{\nu}_e   N)$"),
            "Br(B⁺/B⁰ →e⁺/ν\u{304}ₑ   N)"
        );
        assert_eq!(to_plain(r"c$\tau_{\tilde{\chi}^0_1}$ [m]"), "cτ_(χ\u{303}⁰₁) [m]");
    }

    #[test]
    fn titles() {
        assert_eq!(to_plain(r"$m_N=1$~GeV"), "m_N=1 GeV");
        assert_eq!(
            to_plain(r"$M_{A}=410$~GeV,\,\,$M_{A_S}=70$~GeV"),
            "M_A=410 GeV,\u{2009}\u{2009}M_(A_S)=70 GeV"
        );
    }

    #[test]
    fn unknown_commands_keep_their_name() {
        assert_eq!(to_plain(r"$\ell^2$"), "ell²");
        assert_eq!(to_plain(r"50\%"), "50%");
    }

    #[test]
    fn powers_of_ten() {
        assert_eq!(power_of_ten(1e-13), "10⁻¹³");
        assert_eq!(power_of_ten(1.0), "10⁰");
        assert_eq!(power_of_ten(1e7), "10⁷");
        assert_eq!(power_of_ten(2e3), "2e3");
    }
}
