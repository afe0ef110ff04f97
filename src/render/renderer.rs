use ratatui::{
    Frame,
    buffer::Buffer,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use super::surface::{BufferSurface, Surface};
use crate::game::{GameState, Vector};

pub const BACKGROUND_COLOR: Color = Color::Rgb(255, 167, 103);
pub const SNAKE_COLOR: Color = Color::Rgb(200, 29, 255);
pub const FOOD_COLOR: Color = Color::Rgb(253, 41, 255);

/// Offset of a filled cell from its grid corner, leaving a grid line
const INSET: Vector = Vector::new(1, 1);

/// Terminal columns used for one grid cell; cells are one row high
pub const COLUMNS_PER_CELL: u16 = 2;

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    /// Draw the field: background, one inset cell per segment, then the food
    pub fn draw<S: Surface>(&self, state: &GameState, surface: &mut S) {
        let config = state.config();
        let cell = config.cell_size;

        surface.fill_rect(0, 0, config.field_width, config.field_height, BACKGROUND_COLOR);

        for segment in state.snake.segments() {
            let corner = segment.translated(INSET);
            surface.fill_rect(corner.x, corner.y, cell - 1, cell - 1, SNAKE_COLOR);
        }

        let corner = state.food.translated(INSET);
        surface.fill_rect(corner.x, corner.y, cell - 1, cell - 1, FOOD_COLOR);
    }

    /// Render a whole terminal frame: the framed board centred, controls below
    pub fn render(&self, frame: &mut Frame, state: &GameState) {
        let (board_width, board_height) = Self::board_size(state);

        let [board_area, controls_area] = Layout::vertical([
            Constraint::Length(board_height + 2),
            Constraint::Length(1),
        ])
        .flex(Flex::Center)
        .areas(frame.area());

        let [board_area] = Layout::horizontal([Constraint::Length(board_width + 2)])
            .flex(Flex::Center)
            .areas(board_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(Style::default().fg(Color::White))
            .title(" Snake ");
        let inner = block.inner(board_area);
        frame.render_widget(block, board_area);
        frame.render_widget(Board { renderer: self, state }, inner);

        frame.render_widget(self.render_controls(), controls_area);
    }

    /// Board size in terminal cells
    pub fn board_size(state: &GameState) -> (u16, u16) {
        let config = state.config();
        let columns = u16::try_from(config.columns().max(0)).unwrap_or(u16::MAX);
        let rows = u16::try_from(config.rows().max(0)).unwrap_or(u16::MAX);
        (columns.saturating_mul(COLUMNS_PER_CELL), rows)
    }

    fn render_controls(&self) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

/// The playing field as a ratatui widget
pub struct Board<'a> {
    pub renderer: &'a Renderer,
    pub state: &'a GameState,
}

impl Widget for Board<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let cell = self.state.config().cell_size;
        let units_per_column = cell / i32::from(COLUMNS_PER_CELL);
        let mut surface = BufferSurface::new(buf, area, units_per_column, cell);
        self.renderer.draw(self.state, &mut surface);
    }
}
