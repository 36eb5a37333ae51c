//! Derived-name computation.
//!
//! Every generated artifact is named from a handful of user-supplied
//! identifiers (application name, entity name, field name).  This module
//! derives all the casing variants those artifacts need: snake_case for
//! table names, PascalCase for type names, camelCase for instance names,
//! kebab-case for folder names, Start Case for human-readable labels, plus
//! standard English pluralization.
//!
//! All conversions are idempotent: converting an already-converted value
//! yields the same value again.

/// Convert a string to snake_case.
///
/// | Input | Output |
/// |-------|--------|
/// | "MyApp" | "my_app" |
/// | "my-app" | "my_app" |
/// | "HTTPRequest" | "http_request" |
pub fn snake_case(s: &str) -> String {
    split_words(s).join("_")
}

/// Convert a string to kebab-case.
///
/// Same word-splitting as [`snake_case`], joined with `-`.  Used for folder
/// and service file names.
pub fn kebab_case(s: &str) -> String {
    split_words(s).join("-")
}

/// Convert a string to PascalCase.
pub fn pascal_case(s: &str) -> String {
    split_words(s)
        .into_iter()
        .map(|w| upper_first(&w))
        .collect()
}

/// Convert a string to camelCase.
pub fn camel_case(s: &str) -> String {
    let words = split_words(s);
    let mut out = String::new();
    for (i, w) in words.iter().enumerate() {
        if i == 0 {
            out.push_str(w);
        } else {
            out.push_str(&upper_first(w));
        }
    }
    out
}

/// Convert a string to Start Case (human-readable label).
///
/// `"firstName"` becomes `"First Name"`.
pub fn start_case(s: &str) -> String {
    split_words(s)
        .into_iter()
        .map(|w| upper_first(&w))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Uppercase the first character, leaving the rest untouched.
pub fn upper_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::new();
            // to_uppercase handles Unicode correctly (e.g., "ß" -> "SS")
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
            out
        }
        None => String::new(),
    }
}

/// Lowercase the first character, leaving the rest untouched.
pub fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::new();
            out.extend(first.to_lowercase());
            out.push_str(chars.as_str());
            out
        }
        None => String::new(),
    }
}

/// Accessor-method name for a field.
///
/// Follows the JavaBean convention, including its edge case: a name whose
/// first letter is lowercase and second letter is uppercase (`aBc`) keeps
/// its lowercase first letter instead of being capitalized.
pub fn accessor_name(field_name: &str) -> String {
    let chars: Vec<char> = field_name.chars().collect();
    if chars.len() > 1 && chars[0].is_lowercase() && chars[1].is_uppercase() {
        let mut out = String::new();
        out.extend(chars[0].to_lowercase());
        out.push_str(&field_name[chars[0].len_utf8()..]);
        out
    } else {
        upper_first(field_name)
    }
}

// ── Pluralization ─────────────────────────────────────────────────────────────

/// Words that pluralize irregularly.
const IRREGULAR_PLURALS: &[(&str, &str)] = &[
    ("person", "people"),
    ("child", "children"),
    ("man", "men"),
    ("woman", "women"),
    ("foot", "feet"),
    ("tooth", "teeth"),
    ("goose", "geese"),
    ("mouse", "mice"),
];

/// Words whose plural equals the singular.
const UNCOUNTABLE: &[&str] = &["sheep", "fish", "deer", "series", "species", "equipment"];

/// Pluralize an English identifier.
///
/// Handles the standard suffix rules (sibilant → `es`, consonant-`y` →
/// `ies`, `f`/`fe` → `ves`) plus a short irregular table.  The case of the
/// first letter is preserved, so `pluralize("Entry")` is `"Entries"`.
pub fn pluralize(s: &str) -> String {
    if s.is_empty() {
        return String::new();
    }

    let lower = s.to_lowercase();
    let capitalized = s.chars().next().is_some_and(|c| c.is_uppercase());
    let recase = |w: &str| {
        if capitalized { upper_first(w) } else { w.to_string() }
    };

    if UNCOUNTABLE.contains(&lower.as_str()) {
        return s.to_string();
    }
    for (singular, plural) in IRREGULAR_PLURALS {
        if lower == *singular {
            return recase(plural);
        }
    }

    // Sibilant endings take -es.
    for suffix in ["s", "x", "z", "ch", "sh"] {
        if lower.ends_with(suffix) {
            return format!("{s}es");
        }
    }

    // Consonant + y -> ies.
    if let Some(stem) = s.strip_suffix('y') {
        let before_y = stem.chars().last();
        if before_y.is_some_and(|c| !is_vowel(c)) {
            return format!("{stem}ies");
        }
    }

    // knife -> knives, leaf -> leaves.
    if let Some(stem) = s.strip_suffix("fe") {
        return format!("{stem}ves");
    }
    if let Some(stem) = s.strip_suffix('f') {
        return format!("{stem}ves");
    }

    format!("{s}s")
}

fn is_vowel(c: char) -> bool {
    matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u')
}

// ── Word splitting ────────────────────────────────────────────────────────────

/// Split a string into lowercase words based on casing and separators.
///
/// Boundaries:
/// 1. Explicit separators `_`, `-`, whitespace.
/// 2. camelCase transition (`aB` splits between `a` and `B`).
/// 3. Acronym boundary (`HTTPRequest` splits between `P` and `R`,
///    detected by the `Upper Upper Lower` pattern).
fn split_words(input: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();

    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '_' || c == '-' || c.is_whitespace() {
            if !current.is_empty() {
                words.push(current.to_lowercase());
                current.clear();
            }
            continue;
        }

        if let Some(next) = chars.peek() {
            if c.is_lowercase() && next.is_uppercase() {
                current.push(c);
                words.push(current.to_lowercase());
                current.clear();
                continue;
            }

            if c.is_uppercase()
                && next.is_uppercase()
                && chars.clone().nth(1).is_some_and(|n| n.is_lowercase())
            {
                current.push(c);
                words.push(current.to_lowercase());
                current.clear();
                continue;
            }
        }

        current.push(c);
    }

    if !current.is_empty() {
        words.push(current.to_lowercase());
    }

    words
}

// ── tests ─────────────────────────────────────────────────────────────────────
