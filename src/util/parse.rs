use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use crate::error::{botw::BotwError, internal::InternalError, AppError};

/// Parses a u64 value from String
///
/// # Arguments
/// - `value` - The String to attempt to parse into `u64`
///
/// # Returns
/// - `Ok(u64)` - Successfully parsed String to `u64`
/// - `Err(AppError::InternalErr(ParseStringId))` - Failed to parse
///   the string as a u64
pub fn parse_u64_from_string(value: String) -> Result<u64, AppError> {
    let result = value
        .parse::<u64>()
        .map_err(|e| InternalError::ParseStringId { value, source: e })?;

    Ok(result)
}

/// Parses a member argument: either a raw snowflake or a `<@id>` / `<@!id>`
/// mention.
pub fn parse_member_arg(value: &str) -> Result<u64, AppError> {
    let trimmed = value
        .strip_prefix("<@!")
        .or_else(|| value.strip_prefix("<@"))
        .and_then(|rest| rest.strip_suffix('>'))
        .unwrap_or(value);

    trimmed.parse::<u64>().map_err(|_| {
        BotwError::Validation(format!("`{value}` is not a member mention or ID")).into()
    })
}

/// Parses a `YYYY-MM-DD` date into its UTC midnight instant.
pub fn parse_utc_date(value: &str) -> Result<DateTime<Utc>, AppError> {
    let date = NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        BotwError::Validation(format!("`{value}` is not a date in YYYY-MM-DD format"))
    })?;

    Ok(date.and_time(NaiveTime::MIN).and_utc())
}
