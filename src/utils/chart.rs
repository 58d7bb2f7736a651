//! Horizontal bar chart for daily counts.

use crate::core::aggregate::DailyCount;
use crate::utils::colors::{color_for_count, RESET};
use crate::utils::formatting::pad_left;

const BAR_CHAR: char = '█';

/// Render one bar line per row: date, a bar scaled against the maximum
/// count, and the count itself. Pure string output so it can be asserted
/// on directly.
pub fn render_bar_chart(rows: &[DailyCount], width: usize) -> String {
    let max = rows.iter().map(|r| r.count).max().unwrap_or(0);
    let mut out = String::new();

    for row in rows {
        let bar_len = scaled_len(row.count, max, width);
        let bar: String = std::iter::repeat(BAR_CHAR).take(bar_len).collect();
        out.push_str(&format!(
            "{} │ {}{}{} {}\n",
            row.date.format("%Y-%m-%d"),
            color_for_count(row.count),
            pad_right_bar(&bar, width),
            RESET,
            pad_left(&row.count.to_string(), count_width(max)),
        ));
    }

    out
}

/// Bar length proportional to the max count; a non-zero count always
/// gets at least one block.
fn scaled_len(count: u32, max: u32, width: usize) -> usize {
    if max == 0 || count == 0 {
        return 0;
    }
    let len = (count as usize * width) / max as usize;
    len.max(1)
}

fn pad_right_bar(bar: &str, width: usize) -> String {
    let blocks = bar.chars().count();
    format!("{}{}", bar, " ".repeat(width.saturating_sub(blocks)))
}

fn count_width(max: u32) -> usize {
    max.to_string().len()
}
