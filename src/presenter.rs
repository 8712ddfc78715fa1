use crate::models::{Field, Listing};
use std::io::{self, Write};

const RULE: &str = "-----------------------------";

pub fn separator(index: usize) -> String {
    format!("{} #{} {}", RULE, index, RULE)
}

/// Prints listings as numbered blocks starting at `start_index` (1-based).
/// Returns the number of blocks written so callers can keep a running count.
pub fn print_listings<W: Write>(out: &mut W, listings: &[Listing], start_index: usize) -> io::Result<usize> {
    for (offset, listing) in listings.iter().enumerate() {
        writeln!(out, "{}", separator(start_index + offset))?;
        for field in Field::ALL {
            writeln!(out, "{}", listing.get(field).unwrap_or_default())?;
        }
        writeln!(out)?;
    }
    out.flush()?;
    Ok(listings.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn listing(title: &str, metadata: Option<&str>) -> Listing {
        Listing {
            title: Some(title.to_string()),
            address: Some("1 Main St".to_string()),
            price: Some("£1,200 pcm".to_string()),
            metadata: metadata.map(str::to_string),
        }
    }

    #[test]
    fn prints_numbered_blocks() {
        let mut out = Vec::new();
        let printed = print_listings(&mut out, &[listing("Flat", Some("Added by Acme Agents"))], 1).unwrap();

        assert_eq!(printed, 1);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "----------------------------- #1 -----------------------------\n\
             Flat\n1 Main St\n£1,200 pcm\nAdded by Acme Agents\n\n"
        );
    }

    #[test]
    fn missing_fields_print_empty_lines() {
        let mut out = Vec::new();
        print_listings(&mut out, &[listing("House", None)], 4).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], separator(4));
        assert_eq!(lines[4], "");
        assert_eq!(lines.len(), 6);
    }
}
