//! Parsers for the two bundled reference files: the categorized word list
//! and the irregular verb list.
//!
//! The word list is a loose CSV dialect: fields are comma separated, and a
//! field may be wrapped in double quotes to protect embedded commas. There
//! is no escape for a double quote inside a quoted field; a field that
//! needs one cannot be represented.

use crate::types::vocab::{VocabBook, VocabEntry};
use std::cmp::Ordering;

/// A first line containing this (case-insensitively) is a column header.
pub const WORDS_HEADER_MARKER: &str = "palabra";
/// Same, for the verb list.
pub const VERBS_HEADER_MARKER: &str = "verb";

/// Parses the word list into sections, keeping the order in which sections
/// first appear. Lines with fewer than three fields are dropped; when a
/// line has more than three, the extras fold into the definition.
pub fn parse_words(text: &str) -> VocabBook {
    let lines = content_lines(text);
    let start = header_offset(&lines, WORDS_HEADER_MARKER);

    let mut book = VocabBook::new();
    for line in &lines[start..] {
        let fields = split_fields(line);
        if fields.len() < 3 {
            continue;
        }
        let definition = fields[2..].join(", ");
        let definition = definition
            .strip_prefix(", ")
            .unwrap_or(&definition)
            .to_string();
        book.entry(fields[1].clone()).or_default().push(VocabEntry {
            word: fields[0].clone(),
            definition,
        });
    }
    book
}

/// Parses the verb list: one verb per line, an optional trailing comma
/// stripped, blank results dropped, sorted like a dictionary.
pub fn parse_verbs(text: &str) -> Vec<String> {
    let lines = content_lines(text);
    let start = header_offset(&lines, VERBS_HEADER_MARKER);

    let mut verbs: Vec<String> = lines[start..]
        .iter()
        .map(|line| line.strip_suffix(',').unwrap_or(line).trim().to_string())
        .filter(|verb| !verb.is_empty())
        .collect();
    verbs.sort_by(|a, b| locale_cmp(a, b));
    verbs
}

fn content_lines(text: &str) -> Vec<&str> {
    text.lines().filter(|line| !line.trim().is_empty()).collect()
}

fn header_offset(lines: &[&str], marker: &str) -> usize {
    usize::from(
        lines
            .first()
            .is_some_and(|line| line.to_lowercase().contains(marker)),
    )
}

enum FieldState {
    Start,
    Bare,
    Quoted,
    Closed,
}

/// Splits one line into comma-separated fields: n commas yield n + 1
/// fields. A quoted span keeps its commas and loses its quotes; a span
/// with no closing quote runs to the end of the line; anything between a
/// closing quote and the next comma is dropped. Fields come out trimmed.
fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut buf = String::new();
    let mut state = FieldState::Start;

    for ch in line.chars() {
        match state {
            FieldState::Start => match ch {
                '"' => state = FieldState::Quoted,
                ',' => fields.push(String::new()),
                _ => {
                    buf.push(ch);
                    state = FieldState::Bare;
                }
            },
            FieldState::Bare => {
                if ch == ',' {
                    fields.push(take_trimmed(&mut buf));
                    state = FieldState::Start;
                } else {
                    buf.push(ch);
                }
            }
            FieldState::Quoted => {
                if ch == '"' {
                    state = FieldState::Closed;
                } else {
                    buf.push(ch);
                }
            }
            FieldState::Closed => {
                if ch == ',' {
                    fields.push(take_trimmed(&mut buf));
                    state = FieldState::Start;
                }
            }
        }
    }
    fields.push(take_trimmed(&mut buf));
    fields
}

fn take_trimmed(buf: &mut String) -> String {
    let field = buf.trim().to_string();
    buf.clear();
    field
}

// Stand-in for locale collation: case-insensitive, raw order as tiebreak.
fn locale_cmp(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quoted_definition_keeps_its_commas() {
        let book = parse_words("hardly,Adverbios,\"apenas, difícilmente\"\n");
        let entries = &book["Adverbios"];
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].word, "hardly");
        assert_eq!(entries[0].definition, "apenas, difícilmente");
    }

    #[test]
    fn header_line_is_skipped() {
        let book = parse_words("Palabra,Categoría,Definición\nrun,Verbos,correr\n");
        assert_eq!(book.len(), 1);
        assert_eq!(book["Verbos"][0].word, "run");
    }

    #[test]
    fn first_data_line_survives_when_there_is_no_header() {
        let book = parse_words("run,Verbos,correr\nwalk,Verbos,caminar\n");
        assert_eq!(book["Verbos"].len(), 2);
    }

    #[test]
    fn sections_keep_first_seen_order() {
        let text = "a,Beta,x\nb,Alfa,y\nc,Beta,z\n";
        let book = parse_words(text);
        let sections: Vec<&String> = book.keys().collect();
        assert_eq!(sections, ["Beta", "Alfa"]);
        assert_eq!(book["Beta"].len(), 2);
    }

    #[test]
    fn lines_with_too_few_fields_are_dropped() {
        let book = parse_words("word,Section\nok,Section,fine\n\n\n");
        assert_eq!(book["Section"].len(), 1);
        assert_eq!(book["Section"][0].word, "ok");
    }

    #[test]
    fn extra_fields_fold_into_the_definition() {
        let book = parse_words("get,Verbos,obtener,conseguir,recibir\n");
        assert_eq!(book["Verbos"][0].definition, "obtener, conseguir, recibir");
    }

    #[test]
    fn unquoted_commas_split_but_rejoin_in_the_definition() {
        let book = parse_words("word,SectionA,def one, part two\n");
        assert_eq!(book["SectionA"][0].definition, "def one, part two");
    }

    #[test]
    fn empty_third_field_does_not_leave_a_leading_separator() {
        let book = parse_words("get,Verbos,,conseguir\n");
        assert_eq!(book["Verbos"][0].definition, "conseguir");
    }

    #[test]
    fn text_after_a_closing_quote_is_dropped() {
        let fields = split_fields("\"word\" junk,Section,\"def\"");
        assert_eq!(fields, ["word", "Section", "def"]);
    }

    #[test]
    fn unterminated_quote_runs_to_end_of_line() {
        let fields = split_fields("hardly,Adverbios,\"apenas, sin");
        assert_eq!(fields, ["hardly", "Adverbios", "apenas, sin"]);
    }

    #[test]
    fn every_comma_ends_a_field() {
        assert_eq!(split_fields("a,b,"), ["a", "b", ""]);
        assert_eq!(split_fields(",a"), ["", "a"]);
        assert_eq!(split_fields("a,\"b,c\",d"), ["a", "b,c", "d"]);
    }

    #[test]
    fn verbs_are_cleaned_and_sorted_like_a_dictionary() {
        let verbs = parse_verbs("run,\n Be\n\napply\n");
        assert_eq!(verbs, ["apply", "Be", "run"]);
    }

    #[test]
    fn verb_header_is_skipped() {
        let verbs = parse_verbs("Verbos,\ngo\nbe\n");
        assert_eq!(verbs, ["be", "go"]);
    }

    #[test]
    fn only_one_trailing_comma_is_stripped() {
        let verbs = parse_verbs("look up,,\n");
        assert_eq!(verbs, ["look up,"]);
    }
}
