//! Box drawing for help output.

use std::sync::LazyLock;

/// Preferred box width; narrower terminals shrink it.
const MAX_BOX_WIDTH: usize = 74;
const MIN_BOX_WIDTH: usize = 40;

static BOX_WIDTH: LazyLock<usize> = LazyLock::new(|| {
    crossterm::terminal::size()
        .map(|(cols, _)| (cols as usize).clamp(MIN_BOX_WIDTH, MAX_BOX_WIDTH))
        .unwrap_or(MAX_BOX_WIDTH)
});

fn box_width() -> usize {
    *BOX_WIDTH
}

/// ┌─ Title ─────┐
pub fn box_top(title: &str) {
    let width = box_width();
    if title.is_empty() {
        println!("┌{}┐", "─".repeat(width - 2));
    } else {
        let title_part = format!("─ {} ", title);
        let remaining = (width - 2).saturating_sub(title_part.chars().count());
        println!("┌{}{}┐", title_part, "─".repeat(remaining));
    }
}

/// │ content     │
pub fn box_line(content: &str) {
    for row in line_rows(content, box_width() - 4) {
        println!("{row}");
    }
}

/// Rows for one boxed line. Content wider than the box wraps onto
/// continuation rows that keep its leading indent.
fn line_rows(content: &str, inner_width: usize) -> Vec<String> {
    let lines = if console_width(content) <= inner_width {
        vec![content.to_string()]
    } else {
        let body = content.trim_start();
        let indent = &content[..content.len() - body.len()];
        wrap(body, inner_width.saturating_sub(indent.len()))
            .into_iter()
            .map(|line| format!("{indent}{line}"))
            .collect()
    };

    lines
        .into_iter()
        .map(|line| {
            let padding = inner_width.saturating_sub(console_width(&line));
            format!("│ {}{} │", line, " ".repeat(padding))
        })
        .collect()
}

pub fn box_line_center(content: &str) {
    let inner_width = box_width() - 4;
    let total_padding = inner_width.saturating_sub(console_width(content));
    let left_pad = total_padding / 2;
    let right_pad = total_padding - left_pad;
    println!(
        "│ {}{}{} │",
        " ".repeat(left_pad),
        content,
        " ".repeat(right_pad)
    );
}

/// └─────────────┘
pub fn box_bottom() {
    println!("└{}┘", "─".repeat(box_width() - 2));
}

/// Help option row: flag column, then the description word-wrapped into
/// the remaining width.
pub fn box_opt(flag: &str, desc: &str) {
    let inner_width = box_width() - 4;
    let flag_col = 29;
    let desc_col = inner_width - flag_col;

    for (i, line) in wrap(desc, desc_col).iter().enumerate() {
        let lead = if i == 0 { flag } else { "" };
        let padding = desc_col.saturating_sub(line.len());
        println!("│ {:<flag_col$}{}{} │", lead, line, " ".repeat(padding));
    }
}

fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.len() + 1 + word.len() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current = word.to_string();
        }
    }
    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Display width, skipping ANSI escape sequences.
fn console_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            width += 1;
        }
    }
    width
}
