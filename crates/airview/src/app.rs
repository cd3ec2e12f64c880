//! Interactive terminal view: draw loop and key handling.
//!
//! Synchronous by design — the chart contract is single-threaded, so the
//! loop blocks on input and redraws the full frame after every event.

use color_eyre::eyre::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::DefaultTerminal;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Widget};
use tracing::debug;

use airview_core::{Band, ChannelStat, ChartConfig, ChartOptions, Recommendation};

use crate::theme;
use crate::widget::ChannelChartWidget;

/// Terminal view state: the same fields a bound chart instance holds.
pub struct App {
    band: Band,
    stats: Vec<ChannelStat>,
    recommendations: Vec<Recommendation>,
    config: ChartConfig,
    running: bool,
}

impl App {
    pub fn new(
        band: Band,
        stats: Vec<ChannelStat>,
        recommendations: Vec<Recommendation>,
        options: ChartOptions,
    ) -> Self {
        Self {
            band,
            stats,
            recommendations,
            config: ChartConfig::default().merged(options),
            running: true,
        }
    }

    /// Blocking draw/input loop. Returns when the user quits.
    pub fn run(mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        while self.running {
            terminal.draw(|frame| self.draw(frame.area(), frame.buffer_mut()))?;
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.on_key(key.code);
                }
            }
        }
        Ok(())
    }

    fn on_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.running = false,
            KeyCode::Char('b') => {
                self.band = match self.band {
                    Band::TwoGhz => Band::FiveGhz,
                    Band::FiveGhz => Band::TwoGhz,
                };
                debug!(band = %self.band, "band switched");
            }
            _ => {}
        }
    }

    fn draw(&self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        let title = Line::from(vec![
            Span::styled(" Channel Utilization ", theme::title_style()),
            Span::styled(format!("── {} GHz ", self.band), theme::border_style()),
            Span::styled(" b band  q quit ", theme::key_hint_style()),
        ]);
        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border_style());
        let inner = block.inner(area);
        block.render(area, buf);

        ChannelChartWidget::new(self.band, &self.stats, &self.recommendations, &self.config)
            .render(inner, buf);
    }
}
