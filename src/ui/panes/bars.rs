//! Bar chart of the current step's array

use crate::step::{format_value, Step};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};
use rustc_hash::FxHashSet;

/// Tallest bar; the smallest value is drawn at a tenth of this
const BAR_SCALE: u64 = 100;

/// Colour for index `i` given the step's highlight fields.
///
/// Exchanges win over comparisons, which win over the pivot, then sorted
/// positions, then the active range.
pub fn bar_color(step: &Step, sorted: &FxHashSet<usize>, i: usize) -> Color {
    if step.swapping.is_some_and(|(a, b)| a == i || b == i) {
        DEFAULT_THEME.swapping
    } else if step.comparing.contains(&i) {
        DEFAULT_THEME.comparing
    } else if step.pivot == Some(i) {
        DEFAULT_THEME.pivot
    } else if sorted.contains(&i) {
        DEFAULT_THEME.sorted
    } else {
        match step.highlight_range {
            Some((low, high)) if (low..=high).contains(&i) => DEFAULT_THEME.range,
            Some(_) => DEFAULT_THEME.bar_muted,
            None => DEFAULT_THEME.bar,
        }
    }
}

/// Map values onto `10..=BAR_SCALE` so negative and equal values still draw
pub fn bar_heights(values: &[f64]) -> Vec<u64> {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let span = max - min;

    values
        .iter()
        .map(|v| {
            if span <= 0.0 {
                BAR_SCALE
            } else {
                let scaled = (v - min) / span * (BAR_SCALE as f64 * 0.9);
                scaled.round() as u64 + BAR_SCALE / 10
            }
        })
        .collect()
}

/// Render the bar chart pane
pub fn render_bars_pane(frame: &mut Frame, area: Rect, step: &Step, title: &str) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(
            Style::default()
                .fg(DEFAULT_THEME.border_focused)
                .add_modifier(Modifier::BOLD),
        );

    if step.array.is_empty() {
        let paragraph = Paragraph::new("(empty array)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let sorted: FxHashSet<usize> = step.sorted.iter().copied().collect();
    let heights = bar_heights(&step.array);

    let bars: Vec<Bar> = step
        .array
        .iter()
        .zip(heights)
        .enumerate()
        .map(|(i, (value, height))| {
            let color = bar_color(step, &sorted, i);
            Bar::default()
                .value(height)
                .text_value(format_value(*value))
                .label(Line::from(i.to_string()))
                .style(Style::default().fg(color))
                .value_style(Style::default().fg(Color::Black).bg(color))
        })
        .collect();

    // Fit all bars inside the borders with a one-column gap
    let inner_width = area.width.saturating_sub(2) as usize;
    let count = step.array.len();
    let bar_width = ((inner_width + 1) / count).saturating_sub(1).clamp(1, 7) as u16;

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(1)
        .max(BAR_SCALE);

    frame.render_widget(chart, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step::Narration;

    #[test]
    fn test_bar_heights_scale() {
        assert_eq!(bar_heights(&[1.0, 11.0]), vec![10, 100]);
        assert_eq!(bar_heights(&[-5.0, 5.0, 0.0]), vec![10, 100, 55]);
        assert_eq!(bar_heights(&[3.0, 3.0]), vec![100, 100]);
    }

    #[test]
    fn test_bar_color_priority() {
        let step = Step::new(&[1.0, 2.0, 3.0, 4.0], Narration::Sorted)
            .comparing([1])
            .swapping(0, 1)
            .pivot(3)
            .sorted([2, 3])
            .range(Some((1, 3)));
        let sorted: FxHashSet<usize> = step.sorted.iter().copied().collect();

        assert_eq!(bar_color(&step, &sorted, 0), DEFAULT_THEME.swapping);
        assert_eq!(bar_color(&step, &sorted, 1), DEFAULT_THEME.swapping);
        assert_eq!(bar_color(&step, &sorted, 2), DEFAULT_THEME.sorted);
        assert_eq!(bar_color(&step, &sorted, 3), DEFAULT_THEME.pivot);
    }

    #[test]
    fn test_bar_color_range() {
        let step = Step::new(&[1.0, 2.0, 3.0], Narration::Sorted).range(Some((1, 2)));
        let sorted = FxHashSet::default();

        assert_eq!(bar_color(&step, &sorted, 0), DEFAULT_THEME.bar_muted);
        assert_eq!(bar_color(&step, &sorted, 1), DEFAULT_THEME.range);
    }
}
