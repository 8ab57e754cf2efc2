use std::fmt;

/// Raw rows laid out as left-aligned columns under their headers.
pub struct RowsView<'a> {
    headers: &'a [String],
    rows: &'a [Vec<String>],
    first_row: usize,
}

impl<'a> RowsView<'a> {
    /// `first_row` is the 0-based table position of `rows[0]`.
    pub fn new(headers: &'a [String], rows: &'a [Vec<String>], first_row: usize) -> Self {
        Self {
            headers,
            rows,
            first_row,
        }
    }

    fn widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in self.rows {
            for (i, cell) in row.iter().enumerate() {
                let len = cell.chars().count();
                match widths.get_mut(i) {
                    Some(width) => *width = (*width).max(len),
                    None => widths.push(len),
                }
            }
        }
        widths
    }
}

fn write_line<'c>(
    f: &mut fmt::Formatter,
    label: &str,
    label_width: usize,
    cells: impl Iterator<Item = &'c String>,
    widths: &[usize],
) -> fmt::Result {
    let mut line = format!("{:<label_width$}", label, label_width = label_width);
    for (cell, width) in cells.zip(widths) {
        line.push_str("  ");
        line.push_str(&format!("{:<width$}", cell, width = *width));
    }
    writeln!(f, "{}", line.trim_end())
}

impl<'a> fmt::Display for RowsView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.rows.is_empty() {
            return writeln!(f, "(no rows)");
        }

        let widths = self.widths();
        let last_row = self.first_row + self.rows.len() - 1;
        let label_width = last_row.to_string().len();

        write_line(f, "", label_width, self.headers.iter(), &widths)?;
        for (i, row) in self.rows.iter().enumerate() {
            let label = (self.first_row + i).to_string();
            write_line(f, &label, label_width, row.iter(), &widths)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_render_page() {
        let headers = strings(&["Start Time", "Trip Duration", "month", "day_of_week"]);
        let rows = vec![
            strings(&["2017-01-01 09:07:57", "776", "1", "Sunday"]),
            strings(&["2017-01-02 17:31:00", "300", "1", "Monday"]),
        ];

        insta::assert_snapshot!(RowsView::new(&headers, &rows, 8).to_string(), @r"
           Start Time           Trip Duration  month  day_of_week
        8  2017-01-01 09:07:57  776            1      Sunday
        9  2017-01-02 17:31:00  300            1      Monday
        ");
    }

    #[test]
    fn test_render_without_rows() {
        let headers = strings(&["Start Time"]);
        assert_eq!(RowsView::new(&headers, &[], 0).to_string(), "(no rows)\n");
    }
}
