use smol_str::SmolStr;

use crate::geometry::Vec2;
use crate::style::Color;

/// Abstract drawing operation consumed by an external rasterizer.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    SetColor(Color),
    FillPoint { position: Vec2 },
    StrokeRectangle { position: Vec2, size: Vec2, width: f32 },
    FillRectangle { position: Vec2, size: Vec2 },
    BeginPolygon,
    Vertex(Vec2),
    StrokePolygon { width: f32 },
    FillPolygon,
    DrawText { position: Vec2, text: SmolStr },
    Line { from: Vec2, to: Vec2, width: f32 },
}

pub trait RenderBackend {
    fn execute(&mut self, commands: &[RenderCommand]);
}

impl RenderBackend for Vec<RenderCommand> {
    fn execute(&mut self, commands: &[RenderCommand]) {
        self.extend_from_slice(commands);
    }
}

/// Per-frame command buffer. Redundant colour changes are dropped.
#[derive(Debug, Default)]
pub struct RenderContext {
    commands: Vec<RenderCommand>,
    current_color: Option<Color>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_frame(&mut self) {
        self.commands.clear();
        self.current_color = None;
    }

    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }

    pub fn take_commands(&mut self) -> Vec<RenderCommand> {
        self.current_color = None;
        std::mem::take(&mut self.commands)
    }

    pub fn submit(&self, backend: &mut dyn RenderBackend) {
        backend.execute(&self.commands);
    }

    pub fn current_color(&self) -> Option<Color> {
        self.current_color
    }

    pub fn set_color(&mut self, color: Color) {
        if self.current_color == Some(color) {
            return;
        }
        self.current_color = Some(color);
        self.commands.push(RenderCommand::SetColor(color));
    }

    pub fn fill_point(&mut self, position: Vec2) {
        self.commands.push(RenderCommand::FillPoint { position });
    }

    pub fn stroke_rectangle(&mut self, position: Vec2, size: Vec2, width: f32) {
        self.commands.push(RenderCommand::StrokeRectangle {
            position,
            size,
            width,
        });
    }

    pub fn fill_rectangle(&mut self, position: Vec2, size: Vec2) {
        self.commands.push(RenderCommand::FillRectangle { position, size });
    }

    pub fn begin_polygon(&mut self) {
        self.commands.push(RenderCommand::BeginPolygon);
    }

    pub fn vertex(&mut self, position: Vec2) {
        self.commands.push(RenderCommand::Vertex(position));
    }

    pub fn stroke_polygon(&mut self, width: f32) {
        self.commands.push(RenderCommand::StrokePolygon { width });
    }

    pub fn fill_polygon(&mut self) {
        self.commands.push(RenderCommand::FillPolygon);
    }

    /// Emits a closed polygon from `points` and fills it.
    pub fn polygon(&mut self, points: &[Vec2]) {
        self.begin_polygon();
        for &point in points {
            self.vertex(point);
        }
        self.fill_polygon();
    }

    pub fn draw_text(&mut self, position: Vec2, text: &str) {
        self.commands.push(RenderCommand::DrawText {
            position,
            text: SmolStr::new(text),
        });
    }

    pub fn line(&mut self, from: Vec2, to: Vec2, width: f32) {
        self.commands.push(RenderCommand::Line { from, to, width });
    }
}
