//! Rendered volunteer-log table rows and running total.
//!
//! DESIGN
//! ======
//! This is the view the page shows, kept apart from the persisted collection.
//! Submissions add one row at a time; a load rebuilds every row from scratch.
//! There is no reconciliation against storage beyond those two paths.

use records::VolunteerRecord;

#[cfg(test)]
#[path = "log_view_test.rs"]
mod log_view_test;

/// One displayed table row.
///
/// `row_id` keys the row in the rendered list and is never persisted.
#[derive(Clone, Debug, PartialEq)]
pub struct LogRow {
    pub row_id: u64,
    pub record: VolunteerRecord,
}

/// Table rows plus the summary total, in display order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LogView {
    pub rows: Vec<LogRow>,
    pub total_hours: f64,
    next_row_id: u64,
}

impl LogView {
    /// Append a single row for `record`.
    pub fn render_row(&mut self, record: VolunteerRecord) {
        let row_id = self.next_row_id;
        self.next_row_id += 1;
        self.rows.push(LogRow { row_id, record });
    }

    pub fn render_total(&mut self, hours: f64) {
        self.total_hours = hours;
    }

    /// Replace every row with `records`, in order, then set the total.
    pub fn render_all(&mut self, records: Vec<VolunteerRecord>, total_hours: f64) {
        self.rows.clear();
        for record in records {
            self.render_row(record);
        }
        self.render_total(total_hours);
    }

    /// Drop displayed rows equal to `record`; returns how many were dropped.
    pub fn remove_rows_matching(&mut self, record: &VolunteerRecord) -> usize {
        let before = self.rows.len();
        self.rows.retain(|row| &row.record != record);
        before - self.rows.len()
    }

    #[must_use]
    pub fn total_text(&self) -> String {
        format_number(self.total_hours)
    }
}

/// Format a number the way the browser prints it: `12`, `4.5`, `1e+21`, `1e-7`.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        // Covers -0.0 as well.
        return "0".to_owned();
    }
    if value.is_nan() {
        return "NaN".to_owned();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_owned();
    }
    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return value.to_string();
    }
    let exp = format!("{value:e}");
    match exp.split_once('e') {
        Some((mantissa, power)) if !power.starts_with('-') => format!("{mantissa}e+{power}"),
        _ => exp,
    }
}
