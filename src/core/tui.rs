#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ItemStatus {
    Created,
    Updated,
    Warning,
}

impl ItemStatus {
    pub fn icon(&self) -> &'static str {
        match self {
            ItemStatus::Created => "✨",
            ItemStatus::Updated => "🔄",
            ItemStatus::Warning => "⚠",
        }
    }
}

pub fn print_status_line(message: &str, status: ItemStatus) {
    use colored::Colorize;

    let icon = status.icon();
    match status {
        ItemStatus::Created => println!("{} {}", icon.bright_green(), message.bright_white()),
        ItemStatus::Updated => println!("{} {}", icon.bright_yellow(), message.bright_white()),
        ItemStatus::Warning => println!("{} {}", icon.bright_yellow(), message.yellow()),
    }
}

pub fn print_section(title: &str) {
    use colored::Colorize;
    println!();
    println!("{}", title.bold());
}

/// Render a box-drawn table. Cells may contain `\n` to span several lines.
pub fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let cols = headers.len();
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().take(cols).enumerate() {
            let widest = cell.lines().map(|l| l.chars().count()).max().unwrap_or(0);
            widths[i] = widths[i].max(widest);
        }
    }

    let rule = |left: &str, mid: &str, right: &str| {
        let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
        format!("{}{}{}", left, segments.join(mid), right)
    };

    let mut out = Vec::new();
    out.push(rule("┌", "┬", "┐"));
    let header_cells: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
    out.extend(render_row(&header_cells, &widths));
    out.push(rule("├", "┼", "┤"));
    for row in rows {
        out.extend(render_row(row, &widths));
    }
    out.push(rule("└", "┴", "┘"));
    out.join("\n")
}

fn render_row(cells: &[String], widths: &[usize]) -> Vec<String> {
    let split: Vec<Vec<&str>> = widths
        .iter()
        .enumerate()
        .map(|(i, _)| match cells.get(i) {
            Some(cell) if !cell.is_empty() => cell.lines().collect(),
            _ => vec![""],
        })
        .collect();
    let height = split.iter().map(Vec::len).max().unwrap_or(1);

    (0..height)
        .map(|line| {
            let parts: Vec<String> = split
                .iter()
                .zip(widths)
                .map(|(cell_lines, width)| {
                    let text = cell_lines.get(line).copied().unwrap_or("");
                    let pad = width.saturating_sub(text.chars().count());
                    format!(" {}{} ", text, " ".repeat(pad))
                })
                .collect();
            format!("│{}│", parts.join("│"))
        })
        .collect()
}
