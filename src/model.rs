// Data model: the restaurant record as it is kept in memory and written to
// the data file.

use serde::{Deserialize, Serialize};

/// A registered restaurant. Field order is the key order in the JSON file.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Restaurant {
    pub name: String,
    pub category: String,
    pub active: bool,
}

impl Restaurant {
    /// Build a new, inactive record with title-cased name and category.
    pub fn new(name: &str, category: &str) -> Self {
        Restaurant {
            name: title_case(name),
            category: title_case(category),
            active: false,
        }
    }

    /// Flip the active flag and return the new value.
    pub fn toggle(&mut self) -> bool {
        self.active = !self.active;
        self.active
    }
}

/// Title-case `text`: the first cased character of every word gets its
/// title-case form and the rest of the word is lower-cased.
///
/// A word is a run of cased characters (letters that have an upper or
/// lower case). Anything else starts a new word, including digits,
/// apostrophes and letters without case such as CJK: `"mcdonald's"`
/// becomes `"Mcdonald'S"` and `"寿司bar"` becomes `"寿司Bar"`.
pub fn title_case(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;
    for (i, &c) in chars.iter().enumerate() {
        if in_word {
            push_lower(&mut out, c, chars.get(i + 1).copied());
        } else {
            push_title(&mut out, c);
        }
        in_word = is_cased(c);
    }
    out
}

fn is_cased(c: char) -> bool {
    c.is_lowercase() || c.is_uppercase() || is_titlecase(c)
}

fn is_titlecase(c: char) -> bool {
    matches!(
        c,
        '\u{1C5}'
            | '\u{1C8}'
            | '\u{1CB}'
            | '\u{1F2}'
            | '\u{1F88}'..='\u{1F8F}'
            | '\u{1F98}'..='\u{1F9F}'
            | '\u{1FA8}'..='\u{1FAF}'
            | '\u{1FBC}'
            | '\u{1FCC}'
            | '\u{1FFC}'
    )
}

// Capital sigma at the end of a word lowers to final sigma.
fn push_lower(out: &mut String, c: char, next: Option<char>) {
    if c == '\u{3A3}' && !next.map_or(false, is_cased) {
        out.push('\u{3C2}');
    } else {
        out.extend(c.to_lowercase());
    }
}

fn push_title(out: &mut String, c: char) {
    match c {
        // Latin digraphs: DŽ, LJ, NJ, DZ in all three cases.
        '\u{1C4}'..='\u{1C6}' => out.push('\u{1C5}'),
        '\u{1C7}'..='\u{1C9}' => out.push('\u{1C8}'),
        '\u{1CA}'..='\u{1CC}' => out.push('\u{1CB}'),
        '\u{1F1}'..='\u{1F3}' => out.push('\u{1F2}'),
        // Georgian Mkhedruli is its own title form.
        '\u{10D0}'..='\u{10FF}' => out.push(c),
        // Greek letters with iota subscript.
        '\u{1F80}'..='\u{1FAF}' => out.push(char::from_u32(c as u32 | 0x08).unwrap_or(c)),
        '\u{1FB3}' | '\u{1FC3}' | '\u{1FF3}' => {
            out.push(char::from_u32(c as u32 + 9).unwrap_or(c))
        }
        '\u{1FBC}' | '\u{1FCC}' | '\u{1FFC}' => out.push(c),
        _ => {
            let upper: Vec<char> = c.to_uppercase().collect();
            if ('\u{1F80}'..='\u{1FFF}').contains(&c)
                && upper.len() > 1
                && upper.last() == Some(&'\u{399}')
            {
                out.extend(&upper[..upper.len() - 1]);
                out.push('\u{345}');
                return;
            }
            // Expansions like ß -> SS keep only their first cased letter
            // upper-case.
            let mut seen_cased = false;
            for u in upper {
                if seen_cased {
                    out.extend(u.to_lowercase());
                } else {
                    out.push(u);
                }
                seen_cased |= is_cased(u);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_case_capitalizes_each_word() {
        assert_eq!(title_case("burger king"), "Burger King");
        assert_eq!(title_case("PIZZA hut"), "Pizza Hut");
        assert_eq!(title_case("fast  food"), "Fast  Food");
    }

    #[test]
    fn title_case_treats_non_letters_as_word_breaks() {
        assert_eq!(title_case("mcdonald's"), "Mcdonald'S");
        assert_eq!(title_case("3rd street"), "3Rd Street");
        assert_eq!(title_case("bar-b-que"), "Bar-B-Que");
        assert_eq!(title_case("寿司bar"), "寿司Bar");
        assert_eq!(title_case("ʼn"), "ʼN");
    }

    #[test]
    fn title_case_uses_title_forms_not_upper_case() {
        assert_eq!(title_case("ßar"), "Ssar");
        assert_eq!(title_case("ǆemal"), "ǅemal");
        assert_eq!(title_case("aǅ"), "Aǆ");
        assert_eq!(title_case("ﬁsh"), "Fish");
        assert_eq!(title_case("ᾀx"), "ᾈx");
    }

    #[test]
    fn title_case_lowers_word_final_sigma() {
        assert_eq!(title_case("ΟΔΟΣ ΚΑΙ"), "Οδος Και");
    }

    #[test]
    fn title_case_handles_non_ascii_and_empty() {
        assert_eq!(title_case("café são joão"), "Café São João");
        assert_eq!(title_case("ÉCOLE"), "École");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn new_restaurant_starts_inactive() {
        let r = Restaurant::new("burger king", "fast food");
        assert_eq!(
            r,
            Restaurant {
                name: "Burger King".into(),
                category: "Fast Food".into(),
                active: false,
            }
        );
    }

    #[test]
    fn toggle_flips_both_ways() {
        let mut r = Restaurant::new("a", "b");
        assert!(r.toggle());
        assert!(!r.toggle());
        assert!(!r.active);
    }
}
