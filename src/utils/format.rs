use chrono::{NaiveDate, NaiveDateTime};

/// Backend timestamps arrive as `[year, month, day, hour, minute, second]`.
pub fn datetime_from_parts(parts: &[i64]) -> Option<NaiveDateTime> {
    let [year, month, day, hour, minute, second] = <[i64; 6]>::try_from(parts).ok()?;
    NaiveDate::from_ymd_opt(
        i32::try_from(year).ok()?,
        u32::try_from(month).ok()?,
        u32::try_from(day).ok()?,
    )?
    .and_hms_opt(
        u32::try_from(hour).ok()?,
        u32::try_from(minute).ok()?,
        u32::try_from(second).ok()?,
    )
}

pub fn format_datetime(parts: &[i64]) -> String {
    match datetime_from_parts(parts) {
        Some(dt) => dt.format("%d/%m/%Y, %H:%M:%S").to_string(),
        None => "Invalid Date".to_string(),
    }
}

/// `"{h}h {m}m"` between two timestamps, or `"-"` if either is malformed
pub fn format_duration(start: &[i64], end: &[i64]) -> String {
    match (datetime_from_parts(start), datetime_from_parts(end)) {
        (Some(start), Some(end)) => {
            let minutes = (end - start).num_minutes();
            format!("{}h {}m", minutes / 60, minutes % 60)
        }
        _ => "-".to_string(),
    }
}

/// `YYYY-MM-DD` (date input value) to the locale-neutral display form
pub fn format_date(value: &str) -> String {
    let date_part = value.split('T').next().unwrap_or(value);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
        .map(|d| d.format("%d/%m/%Y").to_string())
        .unwrap_or_else(|_| value.to_string())
}

pub fn format_price(price: f64) -> String {
    if price.fract() == 0.0 {
        format!("${}", price as i64)
    } else {
        format!("${:.2}", price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn formats_six_part_timestamps() {
        assert_eq!(format_datetime(&[2024, 7, 3, 14, 5, 9]), "03/07/2024, 14:05:09");
    }

    #[rstest]
    #[case(&[2024, 7, 3, 14, 5])]
    #[case(&[2024, 13, 3, 14, 5, 0])]
    #[case(&[])]
    fn malformed_timestamps_are_invalid(#[case] parts: &[i64]) {
        assert_eq!(format_datetime(parts), "Invalid Date");
    }

    #[rstest]
    #[case(&[2024, 7, 3, 8, 0, 0], &[2024, 7, 3, 10, 45, 0], "2h 45m")]
    #[case(&[2024, 7, 3, 22, 30, 0], &[2024, 7, 4, 1, 15, 0], "2h 45m")]
    #[case(&[2024, 7, 3, 8, 0, 0], &[2024, 7, 3, 8, 0, 0], "0h 0m")]
    fn duration_spans_midnight(#[case] start: &[i64], #[case] end: &[i64], #[case] expected: &str) {
        assert_eq!(format_duration(start, end), expected);
    }

    #[test]
    fn duration_of_malformed_input() {
        assert_eq!(format_duration(&[1], &[2024, 7, 3, 8, 0, 0]), "-");
    }

    #[test]
    fn dates_and_prices() {
        assert_eq!(format_date("1990-04-21"), "21/04/1990");
        assert_eq!(format_date("1990-04-21T00:00:00"), "21/04/1990");
        assert_eq!(format_date("someday"), "someday");
        assert_eq!(format_price(120.0), "$120");
        assert_eq!(format_price(99.5), "$99.50");
    }
}
