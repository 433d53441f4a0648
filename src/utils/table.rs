//! Table rendering for CLI listings. Widths are auto-fitted using display
//! width so Arabic cells line up with Latin ones.

use unicode_width::UnicodeWidthStr;

pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: &[&str]) -> Self {
        Self {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let mut widths: Vec<usize> = self
            .headers
            .iter()
            .map(|h| UnicodeWidthStr::width(h.as_str()))
            .collect();

        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(UnicodeWidthStr::width(cell.as_str()));
            }
        }

        let mut out = String::new();
        push_row(&mut out, &self.headers, &widths);

        let rule: usize = widths.iter().map(|w| w + 2).sum();
        out.push_str(&"-".repeat(rule));
        out.push('\n');

        for row in &self.rows {
            push_row(&mut out, row, &widths);
        }

        out
    }
}

fn push_row(out: &mut String, row: &[String], widths: &[usize]) {
    for (cell, width) in row.iter().zip(widths) {
        out.push_str(cell);
        let pad = width.saturating_sub(UnicodeWidthStr::width(cell.as_str())) + 2;
        out.push_str(&" ".repeat(pad));
    }
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_align_on_display_width() {
        let mut t = Table::new(&["id", "name"]);
        t.add_row(vec!["1".into(), "short".into()]);
        t.add_row(vec!["22".into(), "much longer name".into()]);

        let rendered = t.render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert!(lines[0].starts_with("id"));
        assert!(lines[2].starts_with("1 "));
        assert!(lines[3].starts_with("22 "));
    }
}
