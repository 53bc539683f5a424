//! CSV export of the roster.
//!
//! One header row, then one row per week in week-number order. Text
//! fields are always quoted with embedded quotes doubled; dates and week
//! numbers are written bare. Multiple holidays in a week are joined with
//! `"; "`. An optional UTF-8 byte-order mark helps spreadsheet tools
//! detect the encoding of non-ASCII names.

use std::io::{self, Write};

use crate::models::WeeklySchedule;

/// Header row.
pub const CSV_HEADER: &str =
    "Week,Start Date,End Date,Lead Name,Lead Position,Co-Lead Name,Co-Lead Position,Holidays";

/// UTF-8 byte-order mark.
pub const UTF8_BOM: &str = "\u{feff}";

/// Export options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvOptions {
    /// Prefix the output with [`UTF8_BOM`].
    pub bom: bool,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self { bom: true }
    }
}

/// Writes the roster as CSV to `writer`.
pub fn write_csv<'a, W: Write>(
    mut writer: W,
    weeks: impl IntoIterator<Item = &'a WeeklySchedule>,
    options: CsvOptions,
) -> io::Result<()> {
    let mut rows: Vec<&WeeklySchedule> = weeks.into_iter().collect();
    rows.sort_by_key(|w| w.week_number);

    if options.bom {
        writer.write_all(UTF8_BOM.as_bytes())?;
    }
    writeln!(writer, "{CSV_HEADER}")?;

    for w in rows {
        writeln!(
            writer,
            "{},{},{},{},{},{},{},{}",
            w.week_number,
            w.start_date,
            w.end_date,
            quote(&w.lead.name),
            quote(&w.lead.position),
            quote(&w.co_lead.name),
            quote(&w.co_lead.position),
            quote(&w.holiday_names()),
        )?;
    }

    writer.flush()
}

/// Renders the roster as a CSV string.
pub fn to_csv<'a>(
    weeks: impl IntoIterator<Item = &'a WeeklySchedule>,
    options: CsvOptions,
) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec<u8> cannot fail.
    let _ = write_csv(&mut buf, weeks, options);
    String::from_utf8_lossy(&buf).into_owned()
}

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Employee, Holiday};
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_weeks() -> Vec<WeeklySchedule> {
        vec![
            WeeklySchedule {
                week_number: 2,
                start_date: date(2026, 4, 13),
                end_date: date(2026, 4, 17),
                lead: Employee::new("GM10")
                    .with_name("Niyompong")
                    .with_position("Corporate Communication & Branding Manager"),
                co_lead: Employee::new("PH05")
                    .with_name("Napapat")
                    .with_position("Cashier HOD"),
                working_days: vec![date(2026, 4, 16), date(2026, 4, 17)],
                holidays_in_week: vec![
                    Holiday::new(date(2026, 4, 13), "Songkran Festival"),
                    Holiday::new(date(2026, 4, 14), "Songkran Festival"),
                    Holiday::new(date(2026, 4, 15), "Songkran Festival"),
                ],
            },
            WeeklySchedule {
                week_number: 1,
                start_date: date(2026, 4, 6),
                end_date: date(2026, 4, 10),
                lead: Employee::new("GM09")
                    .with_name("จุฬาภรณ์ พรหมน้อย")
                    .with_position("IPD Manager"),
                co_lead: Employee::new("PH04")
                    .with_name("Adul \"Ambulance\" P.")
                    .with_position("Ambulance Service, Vehicle HOD"),
                working_days: vec![
                    date(2026, 4, 7),
                    date(2026, 4, 8),
                    date(2026, 4, 9),
                    date(2026, 4, 10),
                ],
                holidays_in_week: vec![Holiday::new(date(2026, 4, 6), "Chakri Memorial Day")],
            },
        ]
    }

    #[test]
    fn test_csv_layout() {
        let csv = to_csv(&sample_weeks(), CsvOptions { bom: false });
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], CSV_HEADER);
        assert_eq!(
            lines[1],
            r#"1,2026-04-06,2026-04-10,"จุฬาภรณ์ พรหมน้อย","IPD Manager","Adul ""Ambulance"" P.","Ambulance Service, Vehicle HOD","Chakri Memorial Day""#
        );
        assert_eq!(
            lines[2],
            r#"2,2026-04-13,2026-04-17,"Niyompong","Corporate Communication & Branding Manager","Napapat","Cashier HOD","Songkran Festival; Songkran Festival; Songkran Festival""#
        );
    }

    #[test]
    fn test_csv_bom() {
        let with_bom = to_csv(&sample_weeks(), CsvOptions::default());
        assert!(with_bom.starts_with('\u{feff}'));
        assert!(with_bom[UTF8_BOM.len()..].starts_with("Week,"));

        let without = to_csv(&sample_weeks(), CsvOptions { bom: false });
        assert!(without.starts_with("Week,"));
    }

    #[test]
    fn test_empty_holidays_cell() {
        let mut weeks = sample_weeks();
        weeks[0].holidays_in_week.clear();
        let csv = to_csv(&weeks[..1], CsvOptions { bom: false });
        assert!(csv.lines().nth(1).unwrap().ends_with(",\"Cashier HOD\",\"\""));
    }

    #[test]
    fn test_empty_roster_header_only() {
        let csv = to_csv(&Vec::<WeeklySchedule>::new(), CsvOptions { bom: false });
        assert_eq!(csv, format!("{CSV_HEADER}\n"));
    }
}
