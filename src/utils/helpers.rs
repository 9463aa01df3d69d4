use crate::error::{Error, Result};

/// Zero-based index of a column letter reference (`A` -> 0, `AA` -> 26).
#[must_use]
pub fn col_name_to_index(name: &str) -> Option<usize> {
    if name.is_empty() {
        return None;
    }

    let mut result: usize = 0;

    for c in name.chars() {
        if !c.is_ascii_alphabetic() {
            return None;
        }

        let val = (c.to_ascii_uppercase() as u8 - b'A' + 1) as usize;
        result = result.checked_mul(26)?.checked_add(val)?;
    }

    Some(result - 1)
}

/// Parse one column selector: a zero-based number or a column letter reference.
pub fn parse_column_selector(s: &str) -> Result<usize> {
    let s = s.trim();

    if let Ok(index) = s.parse::<usize>() {
        return Ok(index);
    }

    col_name_to_index(s).ok_or_else(|| Error::InvalidColumn(s.to_string()))
}

/// Parse a comma separated selector list such as `0,1` or `A,C`.
pub fn parse_column_list(s: &str) -> Result<Vec<usize>> {
    s.split(',')
        .filter(|part| !part.trim().is_empty())
        .map(parse_column_selector)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_col_name_to_index() {
        assert_eq!(col_name_to_index("A"), Some(0));
        assert_eq!(col_name_to_index("b"), Some(1));
        assert_eq!(col_name_to_index("Z"), Some(25));
        assert_eq!(col_name_to_index("AA"), Some(26));
        assert_eq!(col_name_to_index(""), None);
        assert_eq!(col_name_to_index("A1"), None);
    }

    #[test]
    fn test_parse_column_list() {
        assert_eq!(parse_column_list("0,1").unwrap(), vec![0, 1]);
        assert_eq!(parse_column_list("A, C").unwrap(), vec![0, 2]);
        assert_eq!(parse_column_list("").unwrap(), Vec::<usize>::new());
        assert!(parse_column_list("0,?").is_err());
    }
}
