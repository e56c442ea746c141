use crate::formatters::parse_json;
use crate::FormatError;
use regex::Regex;
use ssq_core::Combination;
use std::sync::LazyLock;

/// Reds separated by whitespace or commas, then `+` or `|`, then the blue ball
static TICKET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?P<reds>[^+|]*?)\s*[+|]\s*(?P<blue>\S+)\s*$").expect("ticket pattern is valid")
});

static SEPARATOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s,]+").expect("separator pattern is valid"));

/// Format a combination in oneline format
/// Output: "03 07 12 19 25 31 + 09"
pub fn format_oneline(combo: &Combination) -> String {
    let mut result = String::new();

    for &red in combo.red_numbers() {
        result.push_str(&format!("{:02} ", red));
    }
    result.push_str(&format!("+ {:02}", combo.blue_number()));

    result
}

/// Parse a combination in oneline format
/// Accepts "03 07 12 19 25 31 + 09", "3,7,12,19,25,31|9" and similar;
/// the reds may be in any order.
pub fn parse_oneline(input: &str) -> Result<Combination, FormatError> {
    let caps = TICKET_RE.captures(input).ok_or_else(|| {
        FormatError::syntax(format!(
            "expected six red balls, '+' and a blue ball, got '{}'",
            input.trim()
        ))
    })?;

    let reds = SEPARATOR_RE
        .split(&caps["reds"])
        .filter(|s| !s.is_empty())
        .map(parse_number)
        .collect::<Result<Vec<u8>, _>>()?;
    let blue = parse_number(&caps["blue"])?;

    Ok(Combination::new(&reds, blue)?)
}

/// Parse a ticket line in either oneline or JSON form
pub fn parse_ticket(input: &str) -> Result<Combination, FormatError> {
    if input.trim_start().starts_with('{') {
        parse_json(input)
    } else {
        parse_oneline(input)
    }
}

fn parse_number(s: &str) -> Result<u8, FormatError> {
    s.parse::<u8>()
        .map_err(|_| FormatError::syntax(format!("invalid ball number '{}'", s)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ssq_core::BallError;

    #[test]
    fn test_format_oneline() {
        let combo = Combination::new(&[31, 3, 19, 7, 25, 12], 9).unwrap();
        assert_eq!(format_oneline(&combo), "03 07 12 19 25 31 + 09");
    }

    #[test]
    fn test_parse_oneline() {
        let combo = parse_oneline("03 07 12 19 25 31 + 09").unwrap();
        assert_eq!(combo.red_numbers(), &[3, 7, 12, 19, 25, 31]);
        assert_eq!(combo.blue_number(), 9);
    }

    #[test]
    fn test_parse_separators() {
        let expected = Combination::new(&[3, 7, 12, 19, 25, 31], 9).unwrap();
        assert_eq!(parse_oneline("3,7,12,19,25,31|9").unwrap(), expected);
        assert_eq!(parse_oneline("  31 25, 19 12 7 3 +9  ").unwrap(), expected);
    }

    #[test]
    fn test_parse_missing_blue() {
        let err = parse_oneline("03 07 12 19 25 31").unwrap_err();
        assert!(matches!(err, FormatError::Syntax { .. }));
    }

    #[test]
    fn test_parse_bad_number() {
        let err = parse_oneline("03 07 x 19 25 31 + 09").unwrap_err();
        assert!(matches!(err, FormatError::Syntax { .. }));

        let err = parse_oneline("03 07 300 19 25 31 + 09").unwrap_err();
        assert!(matches!(err, FormatError::Syntax { .. }));
    }

    #[test]
    fn test_parse_invalid_balls() {
        assert!(matches!(
            parse_oneline("03 07 12 19 25 + 09"),
            Err(FormatError::Ball(BallError::WrongRedCount(5)))
        ));
        assert!(matches!(
            parse_oneline("03 07 12 19 25 34 + 09"),
            Err(FormatError::Ball(BallError::RedOutOfRange(34)))
        ));
        assert!(matches!(
            parse_oneline("03 07 12 19 25 25 + 09"),
            Err(FormatError::Ball(BallError::DuplicateRed(25)))
        ));
        assert!(matches!(
            parse_oneline("03 07 12 19 25 31 + 17"),
            Err(FormatError::Ball(BallError::BlueOutOfRange(17)))
        ));
    }

    #[test]
    fn test_parse_ticket_dispatch() {
        let expected = Combination::new(&[1, 2, 3, 4, 5, 6], 7).unwrap();
        assert_eq!(parse_ticket("01 02 03 04 05 06 + 07").unwrap(), expected);
        assert_eq!(
            parse_ticket(r#"{"red_numbers":[1,2,3,4,5,6],"blue_number":7}"#).unwrap(),
            expected
        );
    }

    #[test]
    fn test_format_parse_round_trip() {
        let combo = Combination::new(&[2, 11, 17, 23, 29, 33], 16).unwrap();
        assert_eq!(parse_oneline(&format_oneline(&combo)).unwrap(), combo);
    }
}
