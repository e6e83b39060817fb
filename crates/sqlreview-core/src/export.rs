use chrono::{Local, NaiveDate};

pub fn export_file_name(date: NaiveDate) -> String {
    format!("sql_statements_{}.csv", date.format("%Y-%m-%d"))
}

/// File name for an export made today, local time
pub fn export_file_name_today() -> String {
    export_file_name(Local::now().date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name_is_dated() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(export_file_name(date), "sql_statements_2024-01-05.csv");
    }
}
