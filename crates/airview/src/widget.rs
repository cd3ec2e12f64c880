//! Terminal rendering of the channel chart.
//!
//! The terminal is a second substrate for the same chart state: bars map
//! to a `BarChart`, and the marker strip, channel labels, rank badges,
//! legend, and recommendations panel become span rows aligned to the
//! same column grid.

use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Bar, BarChart, BarGroup, Widget};

use airview_core::layout::{self, TOP_RECOMMENDATIONS};
use airview_core::palette;
use airview_core::{Band, ChannelStat, ChartConfig, Recommendation};

use crate::theme;

/// Bar width in terminal cells.
const BAR_CELLS: u16 = 3;
/// Gap between bars in terminal cells.
const GAP_CELLS: u16 = 1;

/// One frame of the channel chart, built from borrowed state.
pub struct ChannelChartWidget<'a> {
    band: Band,
    stats: &'a [ChannelStat],
    recommendations: &'a [Recommendation],
    config: &'a ChartConfig,
}

impl<'a> ChannelChartWidget<'a> {
    pub fn new(
        band: Band,
        stats: &'a [ChannelStat],
        recommendations: &'a [Recommendation],
        config: &'a ChartConfig,
    ) -> Self {
        Self {
            band,
            stats,
            recommendations,
            config,
        }
    }

    fn render_bars(&self, area: Rect, buf: &mut Buffer) {
        let stats_by_channel = layout::stat_index(self.stats);
        let max = layout::max_ap_count(self.stats);

        let bars: Vec<Bar> = self
            .band
            .channels()
            .iter()
            .map(|channel| {
                let stat = stats_by_channel.get(channel).copied();
                let ap_count = stat.map_or(0, |s| s.ap_count);
                let style = stat.map_or_else(theme::dim_style, |s| {
                    let tier = layout::utilization_tier(s.utilization_score, self.config);
                    Style::default().fg(theme::color(tier.color(self.config)))
                });
                let mut bar = Bar::default()
                    .value(u64::from(ap_count))
                    .style(style)
                    .value_style(style.add_modifier(ratatui::style::Modifier::REVERSED));
                if ap_count == 0 {
                    // No AP-count label on empty channels.
                    bar = bar.text_value(String::new());
                }
                bar
            })
            .collect();

        BarChart::default()
            .data(BarGroup::default().bars(&bars))
            .bar_width(BAR_CELLS)
            .bar_gap(GAP_CELLS)
            .max(u64::from(max))
            .render(area, buf);
    }

    fn marker_row(&self) -> Line<'static> {
        let spans = self
            .band
            .channels()
            .iter()
            .map(|&channel| {
                if self.band.is_non_overlapping(channel) {
                    Span::styled("▔▔▔ ", theme::marker_style())
                } else {
                    Span::raw("    ")
                }
            })
            .collect::<Vec<_>>();
        Line::from(spans)
    }

    fn label_row(&self) -> Line<'static> {
        let spans = self
            .band
            .channels()
            .iter()
            .map(|&channel| {
                let style = if self.band.is_non_overlapping(channel) {
                    theme::marker_style()
                } else {
                    theme::text_style()
                };
                Span::styled(format!("{channel:^3} "), style)
            })
            .collect::<Vec<_>>();
        Line::from(spans)
    }

    fn badge_row(&self) -> Line<'static> {
        let ranks = layout::rank_index(self.recommendations);
        let badge_style = Style::default()
            .fg(theme::color(palette::BADGE_TEXT))
            .bg(theme::color(self.config.accent_color));
        let spans = self
            .band
            .channels()
            .iter()
            .flat_map(|channel| match ranks.get(channel) {
                Some(&rank) if rank <= TOP_RECOMMENDATIONS => {
                    vec![
                        Span::raw(" "),
                        Span::styled(rank.to_string(), badge_style),
                        Span::raw("  "),
                    ]
                }
                _ => vec![Span::raw("    ")],
            })
            .collect::<Vec<_>>();
        Line::from(spans)
    }

    fn legend_row(&self) -> Line<'static> {
        let swatch = |c| Style::default().fg(theme::color(c));
        Line::from(vec![
            Span::styled("■ ", swatch(self.config.low_color)),
            Span::styled("Low  ", theme::text_style()),
            Span::styled("■ ", swatch(self.config.medium_color)),
            Span::styled("Medium  ", theme::text_style()),
            Span::styled("■ ", swatch(self.config.high_color)),
            Span::styled("High  ", theme::text_style()),
            Span::styled("▔ ", swatch(palette::MARKER)),
            Span::styled("Non-overlapping", theme::text_style()),
        ])
    }

    fn recommendation_row(&self) -> Line<'static> {
        let mut spans = vec![Span::styled("Recommended  ", theme::dim_style())];
        for (i, rec) in self
            .recommendations
            .iter()
            .take(TOP_RECOMMENDATIONS)
            .enumerate()
        {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            let label = format!("#{} Ch {} ({})", i + 1, rec.channel, rec.band);
            if i == 0 {
                spans.push(Span::styled(
                    format!("[{label}]"),
                    Style::default()
                        .fg(theme::color(self.config.accent_color))
                        .add_modifier(ratatui::style::Modifier::BOLD),
                ));
            } else {
                spans.push(Span::styled(label, theme::text_style()));
            }
            if rec.is_dfs {
                spans.push(Span::styled(
                    " DFS",
                    Style::default().fg(theme::color(palette::UTIL_MEDIUM)),
                ));
            }
        }
        Line::from(spans)
    }
}

impl Widget for ChannelChartWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut constraints = vec![
            Constraint::Min(4),    // bars
            Constraint::Length(1), // non-overlapping markers
            Constraint::Length(1), // channel labels
            Constraint::Length(1), // rank badges
            Constraint::Length(1), // spacer
            Constraint::Length(1), // legend
        ];
        let has_recommendations = !self.recommendations.is_empty();
        if has_recommendations {
            constraints.push(Constraint::Length(1));
        }
        let rows = Layout::vertical(constraints).split(area);

        self.render_bars(rows[0], buf);
        self.marker_row().render(rows[1], buf);
        self.label_row().render(rows[2], buf);
        self.badge_row().render(rows[3], buf);
        self.legend_row().render(rows[5], buf);
        if has_recommendations {
            self.recommendation_row().render(rows[6], buf);
        }
    }
}
