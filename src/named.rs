//! The CSS named colors ("red", "rebeccapurple", "transparent", ...). The table ships inside the
//! binary as a CSV file and is parsed the first time a name is looked up.

use std::collections::HashMap;

use color::RGBColor;
use csv;

static NAMED_COLOR_CSV: &str = include_str!("../data/css-named-colors.csv");

#[derive(Debug, Serialize, Deserialize)]
struct Record {
    name: String,
    hex: String,
}

lazy_static! {
    static ref NAMED_COLORS: HashMap<String, (RGBColor, f64)> = read_named_colors();
}

// rows that fail to parse are skipped: the table is ours, and its size is checked in the tests
fn read_named_colors() -> HashMap<String, (RGBColor, f64)> {
    let mut reader = csv::Reader::from_reader(NAMED_COLOR_CSV.as_bytes());
    reader
        .deserialize()
        .filter_map(|result: Result<Record, csv::Error>| result.ok())
        .filter_map(|record| {
            RGBColor::from_hex_code(&record.hex)
                .ok()
                .map(|color| (record.name, color))
        })
        .collect()
}

/// Looks up a CSS color keyword, ignoring case. Returns the color and its alpha, which is 1 for
/// everything except "transparent".
pub fn named_color(name: &str) -> Option<(RGBColor, f64)> {
    NAMED_COLORS.get(&name.to_ascii_lowercase()).cloned()
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_table_is_complete() {
        // 148 CSS keywords plus "transparent"
        assert_eq!(NAMED_COLORS.len(), 149);
    }

    #[test]
    fn test_lookup() {
        let (red, alpha) = named_color("red").unwrap();
        assert_eq!(red.int_rgb_tup(), (255, 0, 0));
        assert_eq!(alpha, 1.);
        let (purple, _) = named_color("RebeccaPurple").unwrap();
        assert_eq!(purple.to_string(), "#663399");
        let (_, alpha) = named_color("transparent").unwrap();
        assert_eq!(alpha, 0.);
        assert!(named_color("not-a-color").is_none());
        assert!(named_color("Grey").is_some());
        assert!(named_color("").is_none());
    }
}
