//! Path data for complex shapes.
//!
//! Paths are authored in expression position inside icon renderers, so the
//! builder methods take `self` by value and chain. Coordinates are in grid
//! units; nothing here scales or transforms.

use std::fmt::Write;

use crate::types::Point;

/// Commands that make up a path.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PathCommand {
    /// Move to a point without drawing.
    MoveTo(Point),
    /// Draw a line to a point.
    LineTo(Point),
    /// Draw a quadratic bezier curve.
    QuadTo { control: Point, end: Point },
    /// Draw a cubic bezier curve.
    CubicTo {
        control1: Point,
        control2: Point,
        end: Point,
    },
    /// Draw an elliptical arc.
    ArcTo {
        /// X and Y radii of the ellipse.
        radii: Point,
        /// Rotation of the ellipse in degrees.
        x_rotation: f32,
        /// Take the longer of the two candidate arcs.
        large_arc: bool,
        /// Sweep in the positive-angle direction.
        sweep: bool,
        /// End point of the arc.
        end: Point,
    },
    /// Close the current subpath.
    Close,
}

/// An ordered sequence of path commands.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathData {
    commands: Vec<PathCommand>,
}

impl PathData {
    /// Create a new empty path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Move to a point without drawing.
    pub fn move_to(mut self, p: impl Into<Point>) -> Self {
        self.commands.push(PathCommand::MoveTo(p.into()));
        self
    }

    /// Draw a line to a point.
    pub fn line_to(mut self, p: impl Into<Point>) -> Self {
        self.commands.push(PathCommand::LineTo(p.into()));
        self
    }

    /// Draw a quadratic bezier curve.
    pub fn quad_to(mut self, control: impl Into<Point>, end: impl Into<Point>) -> Self {
        self.commands.push(PathCommand::QuadTo {
            control: control.into(),
            end: end.into(),
        });
        self
    }

    /// Draw a cubic bezier curve.
    pub fn cubic_to(
        mut self,
        control1: impl Into<Point>,
        control2: impl Into<Point>,
        end: impl Into<Point>,
    ) -> Self {
        self.commands.push(PathCommand::CubicTo {
            control1: control1.into(),
            control2: control2.into(),
            end: end.into(),
        });
        self
    }

    /// Draw an elliptical arc to a point.
    pub fn arc_to(
        mut self,
        radii: impl Into<Point>,
        x_rotation: f32,
        large_arc: bool,
        sweep: bool,
        end: impl Into<Point>,
    ) -> Self {
        self.commands.push(PathCommand::ArcTo {
            radii: radii.into(),
            x_rotation,
            large_arc,
            sweep,
            end: end.into(),
        });
        self
    }

    /// Close the current subpath.
    pub fn close(mut self) -> Self {
        self.commands.push(PathCommand::Close);
        self
    }

    /// Get the path commands.
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Check if the path is empty.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Render as an SVG path `d` attribute string.
    ///
    /// Output is deterministic: absolute commands with uppercase letters,
    /// single spaces between tokens, and numbers in shortest round-trip
    /// form (`2` rather than `2.0`, `2.5` kept as is). Flags render as
    /// `0`/`1`.
    pub fn to_svg(&self) -> String {
        let mut d = String::new();
        for cmd in &self.commands {
            if !d.is_empty() {
                d.push(' ');
            }
            match cmd {
                PathCommand::MoveTo(p) => {
                    let _ = write!(d, "M{} {}", p.x, p.y);
                }
                PathCommand::LineTo(p) => {
                    let _ = write!(d, "L{} {}", p.x, p.y);
                }
                PathCommand::QuadTo { control, end } => {
                    let _ = write!(d, "Q{} {} {} {}", control.x, control.y, end.x, end.y);
                }
                PathCommand::CubicTo {
                    control1,
                    control2,
                    end,
                } => {
                    let _ = write!(
                        d,
                        "C{} {} {} {} {} {}",
                        control1.x, control1.y, control2.x, control2.y, end.x, end.y
                    );
                }
                PathCommand::ArcTo {
                    radii,
                    x_rotation,
                    large_arc,
                    sweep,
                    end,
                } => {
                    let _ = write!(
                        d,
                        "A{} {} {} {} {} {} {}",
                        radii.x,
                        radii.y,
                        x_rotation,
                        u8::from(*large_arc),
                        u8::from(*sweep),
                        end.x,
                        end.y
                    );
                }
                PathCommand::Close => d.push('Z'),
            }
        }
        d
    }
}
