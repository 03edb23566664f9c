use chrono::NaiveDate;

pub fn parse_date(text: &str) -> Result<NaiveDate, String> {
    let invalid = || "Please enter a valid date in the YYYY-MM-DD format".to_string();
    let text = text.trim();
    let bytes = text.as_bytes();

    if bytes.len() != 10
        || !matches!(bytes[4], b'-' | b'.')
        || !matches!(bytes[7], b'-' | b'.')
        || ![0..4, 5..7, 8..10]
            .into_iter()
            .all(|r| bytes[r].iter().all(u8::is_ascii_digit))
    {
        return Err(invalid());
    }

    let year: i32 = text[0..4].parse().map_err(|_| invalid())?;
    let month: u32 = text[5..7].parse().map_err(|_| invalid())?;
    let day: u32 = text[8..10].parse().map_err(|_| invalid())?;
    if !(1800..=2099).contains(&year) {
        return Err(invalid());
    }
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)
}

/// Whole degrees, 1 to 90.
pub fn parse_elevation(text: &str) -> Result<u32, String> {
    let invalid = || "Please enter a valid elevation degree value [1-90]".to_string();
    let text = text.trim();
    if text.is_empty() || text.starts_with('0') || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    match text.parse::<u32>() {
        Ok(deg) if (1..=90).contains(&deg) => Ok(deg),
        _ => Err(invalid()),
    }
}

/// Whole minutes, 1 to 20.
pub fn parse_contact_minutes(text: &str) -> Result<u32, String> {
    let invalid = || "Please enter a valid contact duration in minutes [1-20]".to_string();
    let text = text.trim();
    if text.is_empty() || text.len() > 2 || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    match text.parse::<u32>() {
        Ok(min) if (1..=20).contains(&min) => Ok(min),
        _ => Err(invalid()),
    }
}
