//! Step history pane rendering

use crate::step::Step;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding},
    Frame,
};

/// Scroll offset that keeps `selected` visible, or the clamped manual offset
pub fn history_scroll(
    scroll: usize,
    selected: usize,
    total: usize,
    visible_height: usize,
    follow: bool,
) -> usize {
    let max_scroll = total.saturating_sub(visible_height);
    if !follow {
        return scroll.min(max_scroll);
    }

    let scroll = if selected < scroll {
        selected
    } else if selected >= scroll + visible_height {
        selected + 1 - visible_height
    } else {
        scroll
    };
    scroll.min(max_scroll)
}

/// Render the step history pane.
///
/// While `follow` is off the user is scrolling by hand, so the border is drawn
/// focused.
pub fn render_history_pane(
    frame: &mut Frame,
    area: Rect,
    steps: &[Step],
    selected: usize,
    scroll_offset: &mut usize,
    follow: bool,
) {
    let border_style = if !follow {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(" Steps ")
        .borders(Borders::ALL)
        .border_style(border_style)
        .padding(Padding::new(1, 0, 0, 0));

    let visible_height = area.height.saturating_sub(2).max(1) as usize; // Account for borders, min 1
    *scroll_offset = history_scroll(*scroll_offset, selected, steps.len(), visible_height, follow);

    let number_width = steps.len().to_string().len();

    let visible_items: Vec<ListItem> = steps
        .iter()
        .enumerate()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|(i, step)| {
            let is_current = i == selected;
            let base = if is_current {
                Style::default()
                    .bg(DEFAULT_THEME.current_line_bg)
                    .fg(DEFAULT_THEME.fg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.fg)
            };

            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:>width$} ", i + 1, width = number_width),
                    base.fg(DEFAULT_THEME.comment),
                ),
                Span::styled(
                    format!("{:<8}", step.kind().label()),
                    base.fg(DEFAULT_THEME.primary),
                ),
                Span::styled(step.description(), base),
            ]))
        })
        .collect();

    let list = List::new(visible_items).block(block);
    frame.render_widget(list, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::bubble_sort;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_follow_keeps_selection_visible() {
        assert_eq!(history_scroll(0, 3, 100, 10, true), 0);
        assert_eq!(history_scroll(0, 15, 100, 10, true), 6);
        assert_eq!(history_scroll(20, 5, 100, 10, true), 5);
        assert_eq!(history_scroll(0, 99, 100, 10, true), 90);
    }

    #[test]
    fn test_manual_scroll_is_clamped() {
        assert_eq!(history_scroll(usize::MAX, 0, 30, 10, false), 20);
        assert_eq!(history_scroll(4, 0, 5, 10, false), 0);
    }

    #[test]
    fn test_border_focus_follows_manual_scroll() {
        let steps = bubble_sort(&[3.0, 2.0, 1.0]);
        let backend = TestBackend::new(40, 8);
        let mut terminal = Terminal::new(backend).unwrap();

        for follow in [true, false] {
            let mut scroll = 0;
            terminal
                .draw(|frame| {
                    render_history_pane(frame, frame.area(), &steps, 0, &mut scroll, follow)
                })
                .unwrap();

            let corner = terminal.backend().buffer()[(0, 0)].fg;
            let expected = if follow {
                DEFAULT_THEME.border_normal
            } else {
                DEFAULT_THEME.border_focused
            };
            assert_eq!(corner, expected);
        }
    }
}
