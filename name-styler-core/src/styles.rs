//! The name style engine: eight deterministic text transformations.
//!
//! Pure and stateless. The caller guarantees a trimmed, non-empty name;
//! the engine never fails and never validates.

/// One labeled styling of a name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Style {
    /// Display label, including the decorative bullet
    pub label: &'static str,
    /// The transformed name
    pub text: String,
}

/// Produce the eight stylings of `name`, in fixed order.
pub fn style_name(name: &str) -> Vec<Style> {
    vec![
        Style {
            label: "🔹 Normal",
            text: name.to_string(),
        },
        Style {
            label: "🔸 UPPERCASE",
            text: name.to_uppercase(),
        },
        Style {
            label: "🔹 lowercase",
            text: name.to_lowercase(),
        },
        Style {
            label: "🔸 Title Case",
            text: title_case(name),
        },
        Style {
            label: "🔹 AlTeRnAtInG",
            text: alternating_case(name),
        },
        Style {
            label: "🔸 Reverse",
            text: reversed(name),
        },
        Style {
            label: "🔹 With Emojis",
            text: with_emojis(name),
        },
        Style {
            label: "🔸 Spaced Out",
            text: spaced_out(name),
        },
    ]
}

/// Capitalize the first character of each whitespace-delimited word and
/// lowercase the rest, preserving the original whitespace.
fn title_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut at_word_start = true;
    for ch in name.chars() {
        if ch.is_whitespace() {
            at_word_start = true;
            out.push(ch);
        } else if at_word_start {
            out.extend(ch.to_uppercase());
            at_word_start = false;
        } else {
            out.extend(ch.to_lowercase());
        }
    }
    out
}

/// Uppercase even code-point indices, lowercase odd ones. Spaces have no
/// case but still consume an index.
fn alternating_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for (i, ch) in name.chars().enumerate() {
        if i % 2 == 0 {
            out.extend(ch.to_uppercase());
        } else {
            out.extend(ch.to_lowercase());
        }
    }
    out
}

/// Reverse by code point, not by byte.
fn reversed(name: &str) -> String {
    name.chars().rev().collect()
}

fn with_emojis(name: &str) -> String {
    name.chars()
        .map(|ch| format!("{ch}✨"))
        .collect::<Vec<_>>()
        .join(" ")
}

fn spaced_out(name: &str) -> String {
    name.chars()
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_returns_exactly_eight_styles_in_order() {
        let styles = style_name("Alice");
        let labels: Vec<&str> = styles.iter().map(|s| s.label).collect();
        assert_eq!(
            labels,
            vec![
                "🔹 Normal",
                "🔸 UPPERCASE",
                "🔹 lowercase",
                "🔸 Title Case",
                "🔹 AlTeRnAtInG",
                "🔸 Reverse",
                "🔹 With Emojis",
                "🔸 Spaced Out",
            ]
        );
    }

    #[test]
    fn test_ana_reference_vector() {
        let styles = style_name("Ana");
        let texts: Vec<&str> = styles.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(
            texts,
            vec![
                "Ana",
                "ANA",
                "ana",
                "Ana",
                "AnA",
                "anA",
                "A✨ n✨ a✨",
                "A n a",
            ]
        );
    }

    #[test]
    fn test_upper_and_lower_are_idempotent() {
        let name = "MiXeD cAsE";
        let upper = name.to_uppercase();
        let lower = name.to_lowercase();
        assert_eq!(upper.to_uppercase(), upper);
        assert_eq!(lower.to_lowercase(), lower);
    }

    #[test]
    fn test_reverse_is_an_involution() {
        for name in ["Ana", "José", "a b c", "日本語"] {
            assert_eq!(reversed(&reversed(name)), name);
        }
    }

    #[test]
    fn test_spaced_out_round_trips() {
        let name = "Bob";
        let spaced = spaced_out(name);
        let rejoined: String = spaced.split(' ').collect();
        assert_eq!(rejoined, name);
    }

    #[test]
    fn test_alternating_preserves_char_count() {
        for name in ["Ana", "a b c d", "hello world"] {
            assert_eq!(
                alternating_case(name).chars().count(),
                name.chars().count()
            );
        }
    }

    #[test]
    fn test_alternating_counts_spaces_as_positions() {
        // 'b' sits at index 2 (even), so it is uppercased after the space.
        assert_eq!(alternating_case("a bc"), "A Bc");
    }

    #[test]
    fn test_title_case_handles_multiple_words() {
        assert_eq!(title_case("ana maria"), "Ana Maria");
        assert_eq!(title_case("ANA MARIA"), "Ana Maria");
        assert_eq!(title_case("ana  maria"), "Ana  Maria");
    }

    #[test]
    fn test_caseless_script_degrades_to_no_op() {
        let name = "日本語";
        let styles = style_name(name);
        assert_eq!(styles[1].text, name); // UPPERCASE
        assert_eq!(styles[2].text, name); // lowercase
        assert_eq!(styles[4].text, name); // AlTeRnAtInG
    }

    #[test]
    fn test_multibyte_reverse_keeps_code_points_intact() {
        assert_eq!(reversed("José"), "ésoJ");
    }

    #[test]
    fn test_with_emojis_decorates_every_char() {
        assert_eq!(with_emojis("ab"), "a✨ b✨");
        assert_eq!(with_emojis("a b"), "a✨  ✨ b✨");
    }
}
