//! Identifier normalization.
//!
//! Pure string transforms shared by every later stage. All functions are
//! total: empty input or input starting with a character that cannot start
//! an identifier gets a leading `_` instead of failing.

use super::constants::{
    BASIC_TYPE_NAMES, IRREGULAR_PLURALS, RESERVED_WORDS, SCRIPT_RESERVED_WORDS,
};

/// Lower-cases the first character only.
///
/// This is the library's naming convention for type keys and snake names,
/// not true snake_case: `DateTime` becomes `dateTime`.
pub fn to_lower_camel(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Escapes a name that collides with a reserved schema word.
///
/// A collision gets a trailing `_` (`as` → `as_`). A name that is empty or
/// does not start with an identifier character gets a leading `_`.
pub fn escape_keyword(name: &str) -> String {
    escape_with(name, RESERVED_WORDS)
}

/// Escapes a name against the script-target table (`class` → `class_`).
pub fn escape_script_keyword(name: &str) -> String {
    escape_with(name, SCRIPT_RESERVED_WORDS)
}

fn escape_with(name: &str, reserved: &[&str]) -> String {
    let mut escaped = if reserved.contains(&name) {
        format!("{name}_")
    } else {
        name.to_string()
    };
    if !starts_like_identifier(&escaped) {
        escaped.insert(0, '_');
    }
    escaped
}

/// Cleans free display text into an identifier.
///
/// Each whitespace-delimited token is title-cased (first character only),
/// tokens are joined, every run of non-alphanumeric ASCII characters becomes
/// a single `_`, and the result goes through [`escape_keyword`].
pub fn clean_display(name: &str) -> String {
    let joined: String = name
        .split_whitespace()
        .map(|token| {
            let mut chars = token.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect();

    let mut cleaned = String::with_capacity(joined.len());
    let mut in_run = false;
    for c in joined.chars() {
        if c.is_ascii_alphanumeric() {
            cleaned.push(c);
            in_run = false;
        } else if !in_run {
            cleaned.push('_');
            in_run = true;
        }
    }
    escape_keyword(&cleaned)
}

/// Plural display name for a resource entity.
pub fn plural_name(name: &str) -> String {
    if let Some((_, plural)) = IRREGULAR_PLURALS.iter().find(|(singular, _)| *singular == name) {
        return (*plural).to_string();
    }
    let mut chars = name.chars().rev();
    match (chars.next(), chars.next()) {
        (Some('y'), Some(before)) if !is_vowel(before) => {
            format!("{}ies", &name[..name.len() - 1])
        }
        (Some('s' | 'x'), _) => format!("{name}es"),
        (Some(_), _) => format!("{name}s"),
        (None, _) => String::new(),
    }
}

/// Removes the `-primitive` suffix the XML schema puts on scalar types.
pub fn strip_primitive_suffix(raw: &str) -> &str {
    raw.strip_suffix("-primitive").unwrap_or(raw)
}

/// Key of a raw schema type in the primitive table.
///
/// `date-primitive` → `date`, `AccountStatus-list` → `accountStatus-list`,
/// `DaysOfWeekEnum` → `daysOfWeek`.
pub fn primitive_key(raw: &str) -> String {
    to_lower_camel(raw)
        .replace("-primitive", "")
        .replace("Enum", "")
}

/// Cleans a raw type name: dots removed, basic scalar types renamed.
pub fn clean_type_name(raw: &str) -> String {
    let dotless = raw.replace('.', "");
    basic_type_name(&dotless)
        .map(str::to_string)
        .unwrap_or(dotless)
}

/// The renamed form of a basic scalar type (`string` → `String`).
pub fn basic_type_name(name: &str) -> Option<&'static str> {
    BASIC_TYPE_NAMES
        .iter()
        .find(|(raw, _)| *raw == name)
        .map(|(_, cleaned)| *cleaned)
}

fn starts_like_identifier(name: &str) -> bool {
    match name.chars().next() {
        Some(c) => c == '_' || unicode_ident::is_xid_start(c),
        None => false,
    }
}

fn is_vowel(c: char) -> bool {
    matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u')
}
