use std::io::Write;

use serde_json::Value;

use terminal_size::{Width, Height, terminal_size};

use crate::identity::{AccessSummary, Permission};

/// Columns and rows of the permission matrix: one row per summary, one
/// yes/no column per permission.
pub fn summary_table(summaries: &[AccessSummary]) -> (Vec<String>, Vec<Vec<String>>) {
    let mut cols: Vec<String> = vec!["role".into(), "level".into(), "label".into()];
    cols.extend(Permission::ALL.iter().map(|p| p.as_str().to_string()));
    let rows = summaries
        .iter()
        .map(|s| {
            let mut r = vec![s.role.clone(), s.level.to_string(), s.label.to_string()];
            r.extend(Permission::ALL.iter().map(|p| if s.has(*p) { "yes".to_string() } else { "no".to_string() }));
            r
        })
        .collect();
    (cols, rows)
}

/// Render a table as lines fitted to `termw` visible characters. `color` turns on
/// the green header and should only be set when writing to a terminal.
pub fn render_table(cols: &[String], rows: &[Vec<String>], termw: usize, color: bool) -> Vec<String> {
    // Each column gets at least a few characters even on narrow terminals
    let max_col = (termw / cols.len().max(1)).max(6);
    let mut widths: Vec<usize> = cols.iter().map(|s| visible_len(s).min(max_col)).collect();
    for r in rows {
        for (i, cell) in r.iter().enumerate().take(cols.len()) {
            let w = visible_len(cell);
            if w > widths[i] { widths[i] = w.min(max_col); }
        }
    }

    let sep = build_separator(&widths);
    let mut out = Vec::with_capacity(rows.len() + 4);
    out.push(sep.clone());
    out.push(if color { build_row_header_colored(cols, &widths) } else { build_row(cols, &widths) });
    out.push(sep.clone());
    for r in rows {
        out.push(build_row(r, &widths));
    }
    out.push(sep);
    out.push(format!("rows: {}, cols: {}", rows.len(), cols.len()));
    crate::tprintln!("[cli.outputformatter] rendered {} rows at width={}", rows.len(), termw);
    out
}

pub fn write_table<W: Write>(out: &mut W, cols: &[String], rows: &[Vec<String>], color: bool) -> anyhow::Result<()> {
    for line in render_table(cols, rows, get_terminal_width(), color) {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

pub fn write_json<W: Write>(out: &mut W, val: &Value) -> anyhow::Result<()> {
    writeln!(out, "{}", serde_json::to_string_pretty(val)?)?;
    Ok(())
}

fn build_separator(widths: &[usize]) -> String {
    let mut s = String::new();
    s.push('+');
    for w in widths {
        s.push_str(&"-".repeat(*w + 2));
        s.push('+');
    }
    s
}

fn build_row(cells: &[String], widths: &[usize]) -> String {
    let mut s = String::new();
    s.push('|');
    for (i, w) in widths.iter().enumerate() {
        let cell = cells.get(i).cloned().unwrap_or_default();
        let (text, align_right) = (truncate(&cell, *w), is_numeric_like(&cell));
        let pad = w.saturating_sub(visible_len(&text));
        s.push(' ');
        if align_right {
            s.push_str(&" ".repeat(pad));
            s.push_str(&text);
        } else {
            s.push_str(&text);
            s.push_str(&" ".repeat(pad));
        }
        s.push(' ');
        s.push('|');
    }
    s
}

// Header cells are green; padding is computed from the visible width.
fn build_row_header_colored(cells: &[String], widths: &[usize]) -> String {
    let mut s = String::new();
    s.push('|');
    for (i, w) in widths.iter().enumerate() {
        let cell = cells.get(i).cloned().unwrap_or_default();
        let text = truncate(&cell, *w);
        s.push(' ');
        s.push_str(&format!("\x1b[32m{}\x1b[0m", text));
        s.push_str(&" ".repeat(w.saturating_sub(visible_len(&text))));
        s.push(' ');
        s.push('|');
    }
    s
}

fn truncate(s: &str, max: usize) -> String {
    let len = s.chars().count();
    if len <= max { return s.to_string(); }
    if max <= 1 { return "…".to_string(); }
    s.chars().take(max - 1).collect::<String>() + "…"
}

fn is_numeric_like(s: &str) -> bool {
    let st = s.trim();
    if st.is_empty() { return false; }
    let mut has_digit = false;
    for ch in st.chars() {
        if ch.is_ascii_digit() { has_digit = true; continue; }
        if "-+".contains(ch) { continue; }
        return false;
    }
    has_digit
}

fn get_terminal_width() -> usize {
    match terminal_size() {
        Some((Width(w), Height(_h))) => (w as usize).saturating_sub(4).max(20),
        None => 80,
    }
}

// Count visible chars, skipping ANSI CSI sequences.
fn visible_len(s: &str) -> usize {
    let mut count = 0;
    let mut chars = s.chars();
    while let Some(ch) = chars.next() {
        if ch == '\x1b' {
            for c in chars.by_ref() {
                if c.is_ascii_alphabetic() { break; }
            }
            continue;
        }
        count += 1;
    }
    count
}
