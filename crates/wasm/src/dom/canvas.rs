// Canvas 2D renderer for the particle background
use folio_protocol::{RenderCommand, ThemeToken};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

pub struct CanvasPainter {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

impl CanvasPainter {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let context = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("Failed to get 2D context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { canvas, context })
    }

    /// Match the backing store to the CSS size of the viewport.
    pub fn fit(&self, width: f64, height: f64) {
        self.canvas.set_width(width.max(0.0) as u32);
        self.canvas.set_height(height.max(0.0) as u32);
    }

    pub fn render(&self, commands: &[RenderCommand]) -> Result<(), JsValue> {
        let ctx = &self.context;
        for cmd in commands {
            match cmd {
                RenderCommand::Clear { rect } => ctx.clear_rect(rect.x, rect.y, rect.w, rect.h),
                RenderCommand::FillCircle {
                    center,
                    radius,
                    color,
                    alpha,
                } => {
                    ctx.begin_path();
                    ctx.arc(center.x, center.y, *radius, 0.0, std::f64::consts::TAU)?;
                    ctx.set_fill_style_str(&rgba(*color, *alpha));
                    ctx.fill();
                }
                RenderCommand::StrokeCircle {
                    center,
                    radius,
                    color,
                    width,
                    alpha,
                } => {
                    ctx.begin_path();
                    ctx.arc(center.x, center.y, *radius, 0.0, std::f64::consts::TAU)?;
                    ctx.set_stroke_style_str(&rgba(*color, *alpha));
                    ctx.set_line_width(*width);
                    ctx.stroke();
                }
                RenderCommand::DrawLine {
                    from,
                    to,
                    color,
                    width,
                    alpha,
                } => {
                    ctx.begin_path();
                    ctx.set_stroke_style_str(&rgba(*color, *alpha));
                    ctx.set_line_width(*width);
                    ctx.move_to(from.x, from.y);
                    ctx.line_to(to.x, to.y);
                    ctx.stroke();
                }
                RenderCommand::RadialGlow {
                    center,
                    radius,
                    stop,
                    color,
                    alpha,
                } => {
                    let gradient =
                        ctx.create_radial_gradient(center.x, center.y, 0.0, center.x, center.y, *radius)?;
                    gradient.add_color_stop(0.0, &rgba(*color, *alpha))?;
                    gradient.add_color_stop(*stop as f32, &rgba(*color, 0.0))?;
                    ctx.set_fill_style_canvas_gradient(&gradient);
                    ctx.fill_rect(center.x - radius, center.y - radius, radius * 2.0, radius * 2.0);
                }
                RenderCommand::SetClip { rect } => {
                    ctx.save();
                    ctx.begin_path();
                    ctx.rect(rect.x, rect.y, rect.w, rect.h);
                    ctx.clip();
                }
                RenderCommand::ClearClip => ctx.restore(),
                RenderCommand::BeginGroup { .. } | RenderCommand::EndGroup => {}
            }
        }
        Ok(())
    }
}

fn rgba(token: ThemeToken, alpha: f64) -> String {
    let [r, g, b] = token.rgb();
    format!("rgba({r}, {g}, {b}, {alpha})")
}
