use chrono::{Local, NaiveDate, NaiveTime, Timelike};

/// Local date as `YYYY-MM-DD`
pub fn today_iso() -> String {
    format_date(Local::now().date_naive())
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Header clock label, `HH:MM`
pub fn clock_label() -> String {
    format_clock(Local::now().time())
}

pub fn format_clock(time: NaiveTime) -> String {
    format!("{:02}:{:02}", time.hour(), time.minute())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formats() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(format_date(date), "2024-03-07");

        let time = NaiveTime::from_hms_opt(9, 5, 59).unwrap();
        assert_eq!(format_clock(time), "09:05");
    }

    #[test]
    fn test_today_is_iso_shaped() {
        let today = today_iso();
        assert_eq!(today.len(), 10);
        assert!(NaiveDate::parse_from_str(&today, "%Y-%m-%d").is_ok());
    }
}
