//! Tokenizer for one line of a bank (or observation) file.

/// Parse the numbers on one line, in order.
///
/// Tokens are separated by whitespace and/or commas. Tokens that are not
/// finite floating-point numbers are dropped, so a blank or entirely
/// non-numeric line yields an empty vector.
pub fn parse_line(line: &str) -> Vec<f32> {
    line.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|tok| !tok.is_empty())
        .filter_map(|tok| tok.parse::<f32>().ok())
        .filter(|v| v.is_finite())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_whitespace() {
        assert_eq!(parse_line("1.0 2.5\t3"), vec![1.0, 2.5, 3.0]);
    }

    #[test]
    fn splits_on_commas_and_mixed_separators() {
        assert_eq!(parse_line("1.0,2.0"), vec![1.0, 2.0]);
        assert_eq!(parse_line(" 1.0 , 2.0,, 3.0 "), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn drops_non_numeric_tokens() {
        assert_eq!(parse_line("id 2.0 x 1.5e0 -"), vec![2.0, 1.5]);
    }

    #[test]
    fn drops_non_finite_tokens() {
        assert_eq!(parse_line("nan 1.0 inf -inf"), vec![1.0]);
    }

    #[test]
    fn empty_and_text_only_lines_yield_nothing() {
        assert!(parse_line("").is_empty());
        assert!(parse_line("   \t ").is_empty());
        assert!(parse_line("# header line").is_empty());
    }

    #[test]
    fn keeps_crlf_lines_clean() {
        assert_eq!(parse_line("2.0 1.5\r"), vec![2.0, 1.5]);
    }
}
