use std::{fmt::Display, str::FromStr};

fn parse_bounded_number<T>(s: &str, min: T, max: Option<T>) -> Result<T, String>
where
    T: Copy + PartialOrd + Display + FromStr,
    <T as FromStr>::Err: Display,
{
    let value = s
        .trim()
        .parse::<T>()
        .map_err(|err| format!("invalid number '{s}': {err}"))?;
    if value < min {
        return Err(format!("value must be at least {min}"));
    }
    if let Some(max_bound) = max
        && value > max_bound
    {
        return Err(format!("value must be at most {max_bound}"));
    }
    Ok(value)
}

/// Parse a watch debounce interval in whole seconds, within [1, 3600].
///
/// # Errors
/// Returns an error if the input is not a number or is outside the range.
pub fn parse_interval_secs(s: &str) -> Result<u64, String> {
    parse_bounded_number(s, 1, Some(3600))
}

/// Parse a media type such as `text/plain`.
///
/// # Errors
/// Returns an error unless the input has the `type/subtype` shape.
pub fn parse_media_type(s: &str) -> Result<String, String> {
    let trimmed = s.trim();
    match trimmed.split_once('/') {
        Some((kind, sub)) if !kind.is_empty() && !sub.is_empty() && !sub.contains('/') => {
            Ok(trimmed.to_ascii_lowercase())
        }
        _ => Err(format!("invalid media type '{s}' (expected type/subtype)")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interval_bounds() {
        assert_eq!(parse_interval_secs("5"), Ok(5));
        assert_eq!(parse_interval_secs(" 1 "), Ok(1));
        assert!(parse_interval_secs("0").is_err());
        assert!(parse_interval_secs("3601").is_err());
        assert!(parse_interval_secs("soon").is_err());
    }

    #[test]
    fn media_type_shape() {
        assert_eq!(parse_media_type("Text/Markdown"), Ok("text/markdown".to_string()));
        assert!(parse_media_type("text").is_err());
        assert!(parse_media_type("/plain").is_err());
        assert!(parse_media_type("a/b/c").is_err());
    }
}
