//! Drawable surfaces.
//!
//! The simulator only needs four immediate-mode operations, captured by
//! [`Surface`]. [`CommandBuffer`] records them instead of rasterizing, which
//! is what the headless runner and the tests draw onto.

use crate::{error::FieldError, types::Rgba};
use glam::Vec2;

/// A 2D render target particles are painted onto.
pub trait Surface {
    /// Current size in pixels, or `None` once the surface is detached.
    fn size(&self) -> Option<Vec2>;

    /// Erases everything drawn so far.
    fn clear(&mut self);

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba);
}

/// A single recorded drawing call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawCommand {
    Circle {
        center: Vec2,
        radius: f32,
        color: Rgba,
    },
    Line {
        from: Vec2,
        to: Vec2,
        width: f32,
        color: Rgba,
    },
}

/// A surface that stores draw calls.
///
/// `clear` drops the commands of the previous frame, so after a frame the
/// buffer holds exactly what that frame drew.
#[derive(Debug)]
pub struct CommandBuffer {
    size: Vec2,
    attached: bool,
    pub commands: Vec<DrawCommand>,
}

impl CommandBuffer {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
            attached: true,
            commands: Vec::new(),
        }
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.size = Vec2::new(width, height);
    }

    /// Simulates the render target being torn down.
    pub fn detach(&mut self) {
        self.attached = false;
    }

    pub fn circles(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { .. }))
    }

    pub fn lines(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
    }
}

impl Surface for CommandBuffer {
    fn size(&self) -> Option<Vec2> {
        self.attached.then_some(self.size)
    }

    fn clear(&mut self) {
        self.commands.clear();
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            width,
            color,
        });
    }
}

/// Reads and validates the size of a surface.
///
/// Zero-sized surfaces are accepted (a minimized window), detached ones and
/// negative or non-finite sizes are not.
pub fn checked_size(surface: &impl Surface) -> Result<Vec2, FieldError> {
    let Some(size) = surface.size() else {
        return Err(FieldError::InvalidSurface {
            width: f32::NAN,
            height: f32::NAN,
        });
    };
    if !size.is_finite() || size.x < 0.0 || size.y < 0.0 {
        return Err(FieldError::InvalidSurface {
            width: size.x,
            height: size.y,
        });
    }
    Ok(size)
}
