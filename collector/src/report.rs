//! ASCII tables for the terminal.

use crate::aggregator::LanguageTable;

const COLUMN_TITLES: [&str; 4] = [
    "Language",
    "Vacancies found",
    "Vacancies processed",
    "Average salary",
];

/// Renders one board's statistics with the title set into the top border.
pub fn render_table(title: &str, table: &LanguageTable) -> String {
    let mut rows: Vec<[String; 4]> = Vec::with_capacity(table.len() + 1);
    rows.push(COLUMN_TITLES.map(str::to_string));
    for (language, stats) in table {
        rows.push([
            language.clone(),
            stats.vacancies_found.to_string(),
            stats.vacancies_processed.to_string(),
            stats.average_salary.to_string(),
        ]);
    }

    let mut widths = [0usize; 4];
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let border = border_line(&widths);
    let mut out = String::new();

    out.push_str(&titled_border(title, &border));
    out.push('\n');
    for (index, row) in rows.iter().enumerate() {
        out.push_str(&row_line(row, &widths));
        out.push('\n');
        if index == 0 {
            out.push_str(&border);
            out.push('\n');
        }
    }
    out.push_str(&border);

    out
}

fn border_line(widths: &[usize]) -> String {
    let mut line = String::from("+");
    for width in widths {
        line.push_str(&"-".repeat(width + 2));
        line.push('+');
    }
    line
}

// Too-long titles are dropped rather than breaking the frame.
fn titled_border(title: &str, border: &str) -> String {
    let title_len = title.chars().count();
    if title_len + 2 > border.len() {
        return border.to_string();
    }
    format!("+{}{}", title, &border[1 + title_len..])
}

fn row_line(cells: &[String], widths: &[usize]) -> String {
    let mut line = String::from("|");
    for (cell, width) in cells.iter().zip(widths) {
        let padding = width - cell.chars().count();
        line.push(' ');
        line.push_str(cell);
        line.push_str(&" ".repeat(padding + 1));
        line.push('|');
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::LanguageStats;

    #[test]
    fn test_render_table() {
        let table = vec![
            (
                "Python".to_string(),
                LanguageStats {
                    vacancies_found: 1234,
                    vacancies_processed: 456,
                    average_salary: 178000,
                },
            ),
            ("Go".to_string(), LanguageStats::default()),
        ];

        let rendered = render_table("HeadHunter Moscow", &table);

        let expected = [
            "+HeadHunter Moscow-----------+---------------------+----------------+",
            "| Language | Vacancies found | Vacancies processed | Average salary |",
            "+----------+-----------------+---------------------+----------------+",
            "| Python   | 1234            | 456                 | 178000         |",
            "| Go       | 0               | 0                   | 0              |",
            "+----------+-----------------+---------------------+----------------+",
        ]
        .join("\n");
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_rows_keep_keyword_order() {
        let table: LanguageTable = ["Ruby", "C#", "1C"]
            .iter()
            .map(|l| (l.to_string(), LanguageStats::default()))
            .collect();

        let rendered = render_table("SuperJob Moscow", &table);
        let languages: Vec<&str> = rendered
            .lines()
            .skip(3)
            .filter_map(|line| line.split('|').nth(1))
            .map(str::trim)
            .collect();

        assert_eq!(languages, vec!["Ruby", "C#", "1C"]);
    }

    #[test]
    fn test_long_title_keeps_plain_border() {
        let rendered = render_table(&"x".repeat(200), &Vec::new());
        assert!(rendered.starts_with("+----------+"));
    }
}
