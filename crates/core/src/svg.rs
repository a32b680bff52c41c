//! SVG renderer: converts `RenderCommand` lists into standalone SVG strings.
//!
//! Used for static snapshots of an effect (e.g. a poster frame of the
//! particle background for hosts that cannot animate).

use folio_protocol::{RenderCommand, ThemeToken};

/// Render a list of commands as an SVG document string.
///
/// `width` and `height` define the viewBox. `background` paints the page
/// color behind the commands; `None` leaves the SVG transparent.
pub fn render_svg(
    commands: &[RenderCommand],
    width: f64,
    height: f64,
    background: Option<ThemeToken>,
) -> String {
    let mut svg = String::with_capacity(commands.len() * 120 + 256);
    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {width} {height}" width="{width}" height="{height}">"#,
    ));
    if let Some(bg) = background {
        svg.push_str(&format!(
            r#"<rect width="{width}" height="{height}" fill="{}"/>"#,
            bg.css()
        ));
    }

    let mut clip_id = 0usize;
    let mut open_clips = 0usize;
    let mut gradient_id = 0usize;

    for cmd in commands {
        match cmd {
            // An SVG document starts blank; clearing is implicit.
            RenderCommand::Clear { .. } => {}
            RenderCommand::FillCircle {
                center,
                radius,
                color,
                alpha,
            } => {
                svg.push_str(&format!(
                    r#"<circle cx="{:.2}" cy="{:.2}" r="{:.2}" fill="{}" fill-opacity="{:.3}"/>"#,
                    center.x,
                    center.y,
                    radius,
                    hex(*color),
                    alpha,
                ));
            }
            RenderCommand::StrokeCircle {
                center,
                radius,
                color,
                width: stroke_width,
                alpha,
            } => {
                svg.push_str(&format!(
                    r#"<circle cx="{:.2}" cy="{:.2}" r="{:.2}" fill="none" stroke="{}" stroke-width="{stroke_width}" stroke-opacity="{:.3}"/>"#,
                    center.x,
                    center.y,
                    radius,
                    hex(*color),
                    alpha,
                ));
            }
            RenderCommand::DrawLine {
                from,
                to,
                color,
                width: line_width,
                alpha,
            } => {
                svg.push_str(&format!(
                    r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{}" stroke-width="{line_width}" stroke-opacity="{:.4}"/>"#,
                    from.x,
                    from.y,
                    to.x,
                    to.y,
                    hex(*color),
                    alpha,
                ));
            }
            RenderCommand::RadialGlow {
                center,
                radius,
                stop,
                color,
                alpha,
            } => {
                gradient_id += 1;
                let fill = hex(*color);
                svg.push_str(&format!(
                    r#"<defs><radialGradient id="glow{gradient_id}" gradientUnits="userSpaceOnUse" cx="{cx}" cy="{cy}" r="{radius}"><stop offset="0" stop-color="{fill}" stop-opacity="{alpha}"/><stop offset="{stop}" stop-color="{fill}" stop-opacity="0"/></radialGradient></defs>"#,
                    cx = center.x,
                    cy = center.y,
                ));
                svg.push_str(&format!(
                    r#"<circle cx="{}" cy="{}" r="{radius}" fill="url(#glow{gradient_id})"/>"#,
                    center.x, center.y,
                ));
            }
            RenderCommand::SetClip { rect } => {
                clip_id += 1;
                open_clips += 1;
                svg.push_str(&format!(
                    r#"<clipPath id="clip{clip_id}"><rect x="{}" y="{}" width="{}" height="{}"/></clipPath><g clip-path="url(#clip{clip_id})">"#,
                    rect.x, rect.y, rect.w, rect.h,
                ));
            }
            RenderCommand::ClearClip => {
                if open_clips > 0 {
                    open_clips -= 1;
                    svg.push_str("</g>");
                }
            }
            RenderCommand::BeginGroup { id } => {
                svg.push_str(&format!(r#"<g class="{}">"#, escape_xml(id)));
            }
            RenderCommand::EndGroup => {
                svg.push_str("</g>");
            }
        }
    }

    for _ in 0..open_clips {
        svg.push_str("</g>");
    }
    svg.push_str("</svg>");
    svg
}

/// Opaque hex color; opacity travels in separate attributes.
fn hex(token: ThemeToken) -> String {
    let [r, g, b] = token.rgb();
    format!("#{r:02x}{g:02x}{b:02x}")
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use folio_protocol::{Point, Rect};

    use super::*;

    #[test]
    fn empty_commands_produce_valid_svg() {
        let svg = render_svg(&[], 100.0, 50.0, Some(ThemeToken::Background));
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains("#050505"));
    }

    #[test]
    fn circle_and_line_carry_opacity() {
        let commands = vec![
            RenderCommand::FillCircle {
                center: Point::new(10.0, 20.0),
                radius: 1.5,
                color: ThemeToken::Neon,
                alpha: 0.25,
            },
            RenderCommand::DrawLine {
                from: Point::new(0.0, 0.0),
                to: Point::new(10.0, 0.0),
                color: ThemeToken::Neon,
                width: 0.3,
                alpha: 0.05,
            },
        ];
        let svg = render_svg(&commands, 100.0, 100.0, None);
        assert!(svg.contains(r##"<circle cx="10.00" cy="20.00" r="1.50" fill="#39ff14" fill-opacity="0.250"/>"##));
        assert!(svg.contains(r#"stroke-opacity="0.0500""#));
    }

    #[test]
    fn unbalanced_clip_is_closed() {
        let commands = vec![RenderCommand::SetClip {
            rect: Rect::new(0.0, 0.0, 10.0, 10.0),
        }];
        let svg = render_svg(&commands, 10.0, 10.0, None);
        assert_eq!(svg.matches("<g ").count(), svg.matches("</g>").count());
    }
}
