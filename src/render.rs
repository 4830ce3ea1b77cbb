use ggez::graphics::{Canvas, Color, DrawMode, DrawParam, Mesh, Rect, Text, TextLayout};
use ggez::mint::Point2;
use ggez::{Context, GameResult};

use crate::game::{Cell, GameState, Outcome};

pub const BACKGROUND_COLOR: Color = Color::new(0.1, 0.1, 0.15, 1.0);
const LIGHT_TILE: Color = Color::new(0.85, 0.85, 0.85, 1.0);
const DARK_TILE: Color = Color::new(0.75, 0.75, 0.75, 1.0);
const HEAD_COLOR: Color = Color::new(0.9, 0.1, 0.1, 1.0);
const BODY_COLOR: Color = Color::new(1.0, 0.6, 0.7, 1.0);
const FOOD_COLOR: Color = Color::new(0.1, 0.7, 0.2, 1.0);
const OVERLAY_COLOR: Color = Color::new(0.0, 0.0, 0.0, 0.55);
const MESSAGE_COLOR: Color = Color::new(1.0, 0.25, 0.25, 1.0);
const HUD_COLOR: Color = Color::new(0.1, 0.1, 0.15, 1.0);

/// Draws a `GameState` every frame. Only ever reads the state.
pub struct Renderer {
    cell_size: f32,
}

impl Renderer {
    pub fn new(cell_size: f32) -> Self {
        Self { cell_size }
    }

    pub fn draw(&self, ctx: &mut Context, canvas: &mut Canvas, state: &GameState) -> GameResult {
        self.draw_grid(ctx, canvas, state)?;
        self.draw_food(ctx, canvas, state)?;
        self.draw_snake(ctx, canvas, state)?;
        self.draw_hud(canvas, state);

        match state.outcome() {
            Outcome::Running => {}
            Outcome::Paused => {
                self.draw_overlay(ctx, canvas, state, "Paused\nPress P to resume")?
            }
            Outcome::Crashed => {
                let message = format!("Game Over!\nScore: {}\nPress R to restart", state.score());
                self.draw_overlay(ctx, canvas, state, &message)?
            }
            Outcome::Won => {
                let message = format!("You Win!\nScore: {}\nPress R to restart", state.score());
                self.draw_overlay(ctx, canvas, state, &message)?
            }
        }
        Ok(())
    }

    fn cell_rect(&self, cell: Cell) -> Rect {
        Rect::new(
            cell.x as f32 * self.cell_size,
            cell.y as f32 * self.cell_size,
            self.cell_size,
            self.cell_size,
        )
    }

    fn draw_grid(&self, ctx: &mut Context, canvas: &mut Canvas, state: &GameState) -> GameResult {
        for x in 0..state.width() {
            for y in 0..state.height() {
                let color = if (x + y) % 2 == 0 { DARK_TILE } else { LIGHT_TILE };
                let mesh = Mesh::new_rectangle(
                    ctx,
                    DrawMode::fill(),
                    self.cell_rect(Cell::new(x, y)),
                    color,
                )?;
                canvas.draw(&mesh, DrawParam::default());
            }
        }
        Ok(())
    }

    fn draw_snake(&self, ctx: &mut Context, canvas: &mut Canvas, state: &GameState) -> GameResult {
        // Tail first so the head is painted on top when the final frame overlaps.
        for (i, cell) in state.snake().iter().enumerate().rev() {
            // A crashed head may sit off the board; leave it undrawn.
            if !cell.is_within(state.width(), state.height()) {
                continue;
            }
            let color = if i == 0 { HEAD_COLOR } else { BODY_COLOR };
            self.draw_round_cell(ctx, canvas, *cell, color)?;
        }
        Ok(())
    }

    fn draw_food(&self, ctx: &mut Context, canvas: &mut Canvas, state: &GameState) -> GameResult {
        self.draw_round_cell(ctx, canvas, state.food(), FOOD_COLOR)
    }

    fn draw_round_cell(
        &self,
        ctx: &mut Context,
        canvas: &mut Canvas,
        cell: Cell,
        color: Color,
    ) -> GameResult {
        let mesh = Mesh::new_rounded_rectangle(
            ctx,
            DrawMode::fill(),
            self.cell_rect(cell),
            self.cell_size / 2.0,
            color,
        )?;
        canvas.draw(&mesh, DrawParam::default());
        Ok(())
    }

    fn draw_hud(&self, canvas: &mut Canvas, state: &GameState) {
        let mut text = Text::new(format!("Score: {}", state.score()));
        text.set_scale(20.0);
        canvas.draw(
            &text,
            DrawParam::default()
                .dest(Point2 { x: 8.0, y: 6.0 })
                .color(HUD_COLOR),
        );
    }

    fn draw_overlay(
        &self,
        ctx: &mut Context,
        canvas: &mut Canvas,
        state: &GameState,
        message: &str,
    ) -> GameResult {
        let width = state.width() as f32 * self.cell_size;
        let height = state.height() as f32 * self.cell_size;
        let shade = Mesh::new_rectangle(
            ctx,
            DrawMode::fill(),
            Rect::new(0.0, 0.0, width, height),
            OVERLAY_COLOR,
        )?;
        canvas.draw(&shade, DrawParam::default());

        let mut text = Text::new(message);
        text.set_scale(30.0).set_layout(TextLayout::center());
        canvas.draw(
            &text,
            DrawParam::default()
                .dest(Point2 {
                    x: width / 2.0,
                    y: height / 2.0,
                })
                .color(MESSAGE_COLOR),
        );
        Ok(())
    }
}
