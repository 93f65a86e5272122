//! Narration pane: what the current step means, plus legend and counters

use crate::step::{format_value, Step, StepKind, StepSummary};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

/// Data needed to render the narration pane
pub struct NarrationRenderData<'a> {
    pub step: &'a Step,
    pub summary: &'a StepSummary,
    pub input: &'a [f64],
    pub is_search: bool,
}

fn legend_entry(label: &'static str, color: Color) -> [Span<'static>; 2] {
    [
        Span::styled(" ■ ", Style::default().fg(color)),
        Span::styled(label, Style::default().fg(DEFAULT_THEME.comment)),
    ]
}

/// Render the narration pane
pub fn render_narration_pane(frame: &mut Frame, area: Rect, data: NarrationRenderData) {
    let block = Block::default()
        .title(" Narration ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal))
        .padding(Padding::new(1, 1, 0, 0));

    let mut lines = vec![Line::from(Span::styled(
        data.step.description(),
        Style::default()
            .fg(DEFAULT_THEME.fg)
            .add_modifier(Modifier::BOLD),
    ))];

    let mut legend: Vec<Span> = Vec::new();
    legend.extend(legend_entry("comparing", DEFAULT_THEME.comparing));
    legend.extend(legend_entry("swapping", DEFAULT_THEME.swapping));
    if data.is_search {
        legend.extend(legend_entry("found", DEFAULT_THEME.sorted));
    } else {
        legend.extend(legend_entry("pivot", DEFAULT_THEME.pivot));
        legend.extend(legend_entry("sorted", DEFAULT_THEME.sorted));
    }
    legend.extend(legend_entry("range", DEFAULT_THEME.range));
    lines.push(Line::from(legend));

    let counters = if data.is_search {
        [
            ("Probes", data.summary.count(StepKind::Comparing)),
            ("Narrowings", data.summary.count(StepKind::Narrowing)),
            ("Steps", data.summary.total),
        ]
    } else {
        [
            ("Comparisons", data.summary.comparisons),
            ("Swaps", data.summary.swaps),
            ("Steps", data.summary.total),
        ]
    };
    let mut counter_spans = Vec::new();
    for (i, (label, count)) in counters.iter().enumerate() {
        let label = if i > 0 {
            format!("  {} ", label)
        } else {
            format!("{} ", label)
        };
        counter_spans.push(Span::styled(label, Style::default().fg(DEFAULT_THEME.comment)));
        counter_spans.push(Span::styled(
            count.to_string(),
            Style::default().fg(DEFAULT_THEME.secondary),
        ));
    }
    lines.push(Line::from(counter_spans));

    let input_text = data
        .input
        .iter()
        .map(|v| format_value(*v))
        .collect::<Vec<_>>()
        .join(", ");
    lines.push(Line::from(vec![
        Span::styled("Input ", Style::default().fg(DEFAULT_THEME.comment)),
        Span::styled(
            format!("[{}]", input_text),
            Style::default().fg(DEFAULT_THEME.fg),
        ),
    ]));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
