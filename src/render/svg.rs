use std::fmt::{self, Write as _};

use crate::{
    color::codec::{Rgb, Rgba, encode},
    compose::composite::{Anchor, Composite, Label},
    foundation::core::{Point, Size},
    render::surface::{Surface, draw_composite},
    scene::primitive::{Primitive, RoundRect, Shape, Stroke},
};

const FONT_FAMILY: &str = "Inter, Roboto, 'Segoe UI', sans-serif";

/// Emits an SVG 1.1 document.
#[derive(Debug, Default)]
pub struct SvgSurface {
    out: String,
    panels: usize,
}

impl SvgSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn finish(mut self) -> String {
        self.out.push_str("</svg>\n");
        self.out
    }

    fn emit(&mut self, args: fmt::Arguments<'_>) {
        // String sinks never fail.
        let _ = self.out.write_fmt(args);
    }

    fn rect(&mut self, rr: RoundRect, paint: &Paint) {
        let r = rr.rect;
        self.emit(format_args!(
            r#"<rect x="{}" y="{}" width="{}" height="{}""#,
            num(r.x0),
            num(r.y0),
            num(r.width()),
            num(r.height())
        ));
        if rr.radius > 0.0 {
            self.emit(format_args!(r#" rx="{}""#, num(rr.radius)));
        }
        self.emit(format_args!("{paint}/>\n"));
    }
}

/// Fill and optional stroke attributes.
struct Paint {
    fill: Rgba,
    stroke: Option<Stroke>,
}

impl fmt::Display for Paint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, r#" fill="{}""#, encode(self.fill.rgb()))?;
        if self.fill.a < 1.0 {
            write!(f, r#" fill-opacity="{}""#, num(self.fill.a))?;
        }
        if let Some(stroke) = self.stroke.filter(|s| s.width > 0.0) {
            write!(
                f,
                r#" stroke="{}" stroke-width="{}""#,
                encode(stroke.color.rgb()),
                num(stroke.width)
            )?;
            if stroke.color.a < 1.0 {
                write!(f, r#" stroke-opacity="{}""#, num(stroke.color.a))?;
            }
        }
        Ok(())
    }
}

impl Surface for SvgSurface {
    fn begin(&mut self, size: Size, background: Rgb) {
        self.out.clear();
        self.panels = 0;
        let (w, h) = (num(size.width), num(size.height));
        self.emit(format_args!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" version="1.1" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
        ));
        self.out.push('\n');
        self.emit(format_args!(
            r#"<rect width="{w}" height="{h}" fill="{}"/>"#,
            encode(background)
        ));
        self.out.push('\n');
    }

    fn begin_panel(&mut self, origin: Point, size: Size) {
        let id = self.panels;
        self.panels += 1;
        self.emit(format_args!(
            "<clipPath id=\"panel{id}\"><rect width=\"{}\" height=\"{}\"/></clipPath>\n",
            num(size.width),
            num(size.height)
        ));
        self.emit(format_args!(
            "<g transform=\"translate({} {})\" clip-path=\"url(#panel{id})\">\n",
            num(origin.x),
            num(origin.y)
        ));
    }

    fn primitive(&mut self, primitive: &Primitive) {
        let paint = Paint {
            fill: primitive.fill,
            stroke: primitive.stroke,
        };
        match &primitive.shape {
            Shape::RoundedRect(rr) | Shape::TextBlob(rr) => self.rect(*rr, &paint),
            Shape::Shadow { casting, offset } => self.rect(casting.translate(*offset), &paint),
            Shape::Circle(c) => self.emit(format_args!(
                "<circle cx=\"{}\" cy=\"{}\" r=\"{}\"{paint}/>\n",
                num(c.center.x),
                num(c.center.y),
                num(c.radius)
            )),
            Shape::Polygon(poly) => self.emit(format_args!(
                "<path d=\"{}\"{paint}/>\n",
                poly.to_path().to_svg()
            )),
        }
    }

    fn end_panel(&mut self) {
        self.out.push_str("</g>\n");
    }

    fn label(&mut self, label: &Label) {
        let anchor = match label.anchor {
            Anchor::Start => "start",
            Anchor::Middle => "middle",
            Anchor::End => "end",
        };
        self.emit(format_args!(
            "<text x=\"{}\" y=\"{}\" font-family=\"{FONT_FAMILY}\" font-size=\"{}\" text-anchor=\"{anchor}\" fill=\"{}\"",
            num(label.position.x),
            num(label.position.y),
            num(label.size_px),
            encode(label.color)
        ));
        if label.bold {
            self.out.push_str(r#" font-weight="bold""#);
        }
        self.emit(format_args!(">{}</text>\n", escape(&label.text)));
    }
}

/// Serialize `composite` as a standalone SVG document.
pub fn to_svg(composite: &Composite) -> String {
    let mut surface = SvgSurface::new();
    draw_composite(composite, &mut surface);
    surface.finish()
}

/// Shortest decimal for `v` with at most three fractional digits.
fn num(v: f64) -> String {
    let v = if v.is_finite() { v } else { 0.0 };
    let s = format!("{v:.3}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_owned() } else { s.to_owned() }
}

pub(crate) fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/svg.rs"]
mod tests;
