use egui::{Painter, Pos2, Rect, Shape, Stroke};
use folio_protocol::RenderCommand;

use crate::theme;

/// Rings used to approximate a radial gradient with filled circles.
const GLOW_RINGS: usize = 24;

/// Render a list of `RenderCommand` into an egui `Painter`.
///
/// `offset` is the top-left pixel position of the rendering area and
/// `opacity` scales every command's alpha (the layer opacity).
pub fn render_commands(painter: &mut Painter, commands: &[RenderCommand], offset: Pos2, opacity: f64) {
    let mut clip_stack: Vec<Rect> = Vec::new();

    for cmd in commands {
        match cmd {
            RenderCommand::SetClip { rect } => {
                let clip_rect = Rect::from_min_size(
                    Pos2::new(rect.x as f32 + offset.x, rect.y as f32 + offset.y),
                    egui::vec2(rect.w as f32, rect.h as f32),
                );
                clip_stack.push(painter.clip_rect());
                let intersected = painter.clip_rect().intersect(clip_rect);
                painter.set_clip_rect(intersected);
            }

            RenderCommand::ClearClip => {
                if let Some(prev) = clip_stack.pop() {
                    painter.set_clip_rect(prev);
                }
            }

            other => {
                let mut shapes = Vec::new();
                push_shapes(&mut shapes, other, offset, opacity);
                painter.extend(shapes);
            }
        }
    }
}

/// Convert drawing commands into shapes without painting them.
///
/// Clip commands are skipped: the caller paints the result through a
/// painter that is already clipped. Used for glows that sit beneath
/// widgets drawn later in the frame.
pub fn to_shapes(commands: &[RenderCommand], offset: Pos2, opacity: f64) -> Vec<Shape> {
    let mut shapes = Vec::new();
    for cmd in commands {
        push_shapes(&mut shapes, cmd, offset, opacity);
    }
    shapes
}

fn push_shapes(shapes: &mut Vec<Shape>, cmd: &RenderCommand, offset: Pos2, opacity: f64) {
    let at = |x: f64, y: f64| Pos2::new(x as f32 + offset.x, y as f32 + offset.y);

    match cmd {
        // egui repaints every frame from an empty canvas.
        RenderCommand::Clear { .. } => {}

        RenderCommand::FillCircle {
            center,
            radius,
            color,
            alpha,
        } => {
            if *radius <= 0.0 {
                return;
            }
            shapes.push(Shape::circle_filled(
                at(center.x, center.y),
                *radius as f32,
                theme::resolve_alpha(*color, alpha * opacity),
            ));
        }

        RenderCommand::StrokeCircle {
            center,
            radius,
            color,
            width,
            alpha,
        } => {
            shapes.push(Shape::circle_stroke(
                at(center.x, center.y),
                *radius as f32,
                Stroke::new(*width as f32, theme::resolve_alpha(*color, alpha * opacity)),
            ));
        }

        RenderCommand::DrawLine {
            from,
            to,
            color,
            width,
            alpha,
        } => {
            shapes.push(Shape::line_segment(
                [at(from.x, from.y), at(to.x, to.y)],
                Stroke::new(*width as f32, theme::resolve_alpha(*color, alpha * opacity)),
            ));
        }

        RenderCommand::RadialGlow {
            center,
            radius,
            stop,
            color,
            alpha,
        } => {
            // Stacked discs from the outer edge inward; each adds an equal
            // share so the center reaches `alpha` and the edge fades to 0.
            let outer = (radius * stop) as f32;
            if outer <= 0.0 {
                return;
            }
            let ring_color = theme::resolve_alpha(*color, alpha * opacity / GLOW_RINGS as f64);
            let center = at(center.x, center.y);
            for ring in 0..GLOW_RINGS {
                let r = outer * (1.0 - ring as f32 / GLOW_RINGS as f32);
                shapes.push(Shape::circle_filled(center, r, ring_color));
            }
        }

        RenderCommand::SetClip { .. }
        | RenderCommand::ClearClip
        | RenderCommand::BeginGroup { .. }
        | RenderCommand::EndGroup => {
            // Clips are applied by the caller; groups only label commands.
        }
    }
}

#[cfg(test)]
mod tests {
    use folio_protocol::{Point, ThemeToken};

    use super::*;

    #[test]
    fn glow_becomes_concentric_rings() {
        let commands = [RenderCommand::RadialGlow {
            center: Point::new(10.0, 10.0),
            radius: 100.0,
            stop: 0.4,
            color: ThemeToken::Neon,
            alpha: 0.15,
        }];
        let shapes = to_shapes(&commands, Pos2::ZERO, 1.0);
        assert_eq!(shapes.len(), GLOW_RINGS);
        let Some(Shape::Circle(outer)) = shapes.first() else {
            panic!("expected a circle");
        };
        assert!((outer.radius - 40.0).abs() < 1e-4);
    }

    #[test]
    fn clip_and_groups_produce_no_shapes() {
        let commands = [
            RenderCommand::BeginGroup { id: "x".into() },
            RenderCommand::SetClip {
                rect: folio_protocol::Rect::new(0.0, 0.0, 1.0, 1.0),
            },
            RenderCommand::ClearClip,
            RenderCommand::EndGroup,
        ];
        assert!(to_shapes(&commands, Pos2::ZERO, 1.0).is_empty());
    }

    #[test]
    fn offset_shifts_lines() {
        let commands = [RenderCommand::DrawLine {
            from: Point::new(0.0, 0.0),
            to: Point::new(5.0, 0.0),
            color: ThemeToken::Neon,
            width: 0.3,
            alpha: 0.1,
        }];
        let shapes = to_shapes(&commands, Pos2::new(100.0, 50.0), 0.3);
        let Some(Shape::LineSegment { points, .. }) = shapes.first() else {
            panic!("expected a line");
        };
        assert_eq!(points[0], Pos2::new(100.0, 50.0));
        assert_eq!(points[1], Pos2::new(105.0, 50.0));
    }
}
