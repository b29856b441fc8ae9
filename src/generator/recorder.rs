//! In-memory canvas that records drawing commands.

use super::Canvas;
use crate::error::Result;
use crate::layout::{Point, Rect, Stroke, TextRun};
use crate::model::Color;
use serde::Serialize;

/// One recorded drawing call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DrawCommand {
    Rect {
        rect: Rect,
        fill: Option<Color>,
        stroke: Option<Stroke>,
    },
    Line {
        from: Point,
        to: Point,
        stroke: Stroke,
    },
    Text(TextRun),
    PageBreak,
}

/// Canvas that keeps every command instead of drawing it.
#[derive(Debug, Default)]
pub struct CommandRecorder {
    commands: Vec<DrawCommand>,
}

impl CommandRecorder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Canvas for CommandRecorder {
    type Output = Vec<DrawCommand>;

    fn draw_rect(&mut self, rect: Rect, fill: Option<Color>, stroke: Option<Stroke>) -> Result<()> {
        self.commands.push(DrawCommand::Rect { rect, fill, stroke });
        Ok(())
    }

    fn draw_line(&mut self, from: Point, to: Point, stroke: Stroke) -> Result<()> {
        self.commands.push(DrawCommand::Line { from, to, stroke });
        Ok(())
    }

    fn draw_text(&mut self, run: &TextRun) -> Result<()> {
        self.commands.push(DrawCommand::Text(run.clone()));
        Ok(())
    }

    fn page_break(&mut self) -> Result<()> {
        self.commands.push(DrawCommand::PageBreak);
        Ok(())
    }

    fn finish(self) -> Result<Vec<DrawCommand>> {
        Ok(self.commands)
    }
}
