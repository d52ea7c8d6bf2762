//! Identifier naming.
//!
//! Raw node labels become valid identifiers by stripping everything
//! non-alphanumeric. Labels that end up empty or digit-leading get a
//! `Component<N>` placeholder from a strictly increasing per-run counter.
//! Cleaned names are NOT deduplicated: two distinct labels may collapse to
//! the same identifier, and result-level uniqueness is the synthesizer's
//! concern.

use blueprint_core::{NamingConvention, PropNaming};
use convert_case::{Case, Casing};

/// Per-run name allocator.
#[derive(Debug, Default)]
pub struct NameAllocator {
    counter: u32,
}

impl NameAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Turn a raw label into an identifier in the given convention.
    pub fn allocate(&mut self, raw: &str, convention: NamingConvention) -> String {
        let cleaned: String = raw.chars().filter(char::is_ascii_alphanumeric).collect();
        let cleaned = if cleaned.is_empty() || cleaned.starts_with(|c: char| c.is_ascii_digit()) {
            self.counter += 1;
            format!("Component{}", self.counter)
        } else {
            cleaned
        };
        apply_convention(&cleaned, convention)
    }
}

/// Apply a casing convention to an already-cleaned identifier.
fn apply_convention(name: &str, convention: NamingConvention) -> String {
    match convention {
        NamingConvention::Pascal => upper_first(name),
        NamingConvention::Camel => lower_first(name),
        NamingConvention::Kebab => kebab(name),
    }
}

fn upper_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

fn lower_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_ascii_lowercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

/// Hyphen before every uppercase letter, lowercase the lot, strip the
/// leading hyphen.
fn kebab(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out.strip_prefix('-').map(str::to_string).unwrap_or(out)
}

/// Case a parameter name per the prop-naming convention.
pub fn prop_name(name: &str, convention: PropNaming) -> String {
    match convention {
        PropNaming::Camel => name.to_case(Case::Camel),
        PropNaming::Snake => name.to_case(Case::Snake),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_non_alphanumerics() {
        let mut names = NameAllocator::new();
        assert_eq!(
            names.allocate("Submit Button", NamingConvention::Pascal),
            "SubmitButton"
        );
        assert_eq!(
            names.allocate("nav/bar v2!", NamingConvention::Pascal),
            "Navbarv2"
        );
    }

    #[test]
    fn test_placeholder_counter_never_reuses() {
        let mut names = NameAllocator::new();
        assert_eq!(names.allocate("", NamingConvention::Pascal), "Component1");
        assert_eq!(names.allocate("$$$", NamingConvention::Pascal), "Component2");
        assert_eq!(names.allocate("42nd", NamingConvention::Pascal), "Component3");
        // A valid label does not consume the counter.
        assert_eq!(names.allocate("Card", NamingConvention::Pascal), "Card");
        assert_eq!(names.allocate("", NamingConvention::Pascal), "Component4");
    }

    #[test]
    fn test_conventions() {
        let mut names = NameAllocator::new();
        assert_eq!(
            names.allocate("submit button", NamingConvention::Pascal),
            "Submitbutton"
        );
        assert_eq!(
            names.allocate("SubmitButton", NamingConvention::Camel),
            "submitButton"
        );
        assert_eq!(
            names.allocate("SubmitButton", NamingConvention::Kebab),
            "submit-button"
        );
    }

    #[test]
    fn test_deterministic_outside_placeholder_path() {
        let mut a = NameAllocator::new();
        let mut b = NameAllocator::new();
        b.allocate("", NamingConvention::Pascal);
        // Counter state does not affect valid labels.
        assert_eq!(
            a.allocate("Hero Card", NamingConvention::Pascal),
            b.allocate("Hero Card", NamingConvention::Pascal)
        );
    }

    #[test]
    fn test_prop_name_conventions() {
        assert_eq!(prop_name("className", PropNaming::Camel), "className");
        assert_eq!(prop_name("className", PropNaming::Snake), "class_name");
        assert_eq!(prop_name("onClick", PropNaming::Snake), "on_click");
    }
}
