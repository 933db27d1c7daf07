//! SVG builder — accumulates SVG elements and produces the final string.

use super::constants::*;

pub(super) struct SvgBuilder {
    pub(super) elements: Vec<String>,
    width: f64,
    height: f64,
}

impl SvgBuilder {
    pub(super) fn new(width: f64, height: f64) -> Self {
        Self {
            elements: Vec::new(),
            width,
            height,
        }
    }

    pub(super) fn build(self) -> String {
        let mut svg = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {} {}" width="{}" height="{}" style="font-family: 'Bravura Text', 'Noto Music', 'Georgia', serif;">"#,
            self.width, self.height, self.width, self.height
        );
        svg.push('\n');
        for el in &self.elements {
            svg.push_str("  ");
            svg.push_str(el);
            svg.push('\n');
        }
        svg.push_str("</svg>\n");
        svg
    }

    pub(super) fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: &str, width: f64) {
        self.elements.push(format!(
            r#"<line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="{}" stroke-width="{:.1}"/>"#,
            x1, y1, x2, y2, color, width
        ));
    }

    pub(super) fn rect(&mut self, x: f64, y: f64, w: f64, h: f64, fill: &str) {
        self.elements.push(format!(
            r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" fill="{}"/>"#,
            x, y, w, h, fill
        ));
    }

    /// Text centred vertically on `y`. `opacity` below 1 fades it.
    pub(super) fn text(
        &mut self,
        x: f64,
        y: f64,
        content: &str,
        size: f64,
        fill: &str,
        anchor: &str,
        opacity: f64,
    ) {
        let escaped = content
            .replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;");
        let fade = if opacity < 1.0 {
            format!(r#" opacity="{:.2}""#, opacity.max(0.0))
        } else {
            String::new()
        };
        self.elements.push(format!(
            r#"<text x="{:.1}" y="{:.1}" font-size="{:.0}" fill="{}" text-anchor="{}" dominant-baseline="central"{}>{}</text>"#,
            x, y, size, fill, anchor, fade, escaped
        ));
    }

    pub(super) fn notehead(&mut self, cx: f64, cy: f64) {
        self.elements.push(format!(
            r#"<ellipse class="notehead" cx="{:.1}" cy="{:.1}" rx="{:.1}" ry="{:.1}" fill="{}" transform="rotate(-20,{:.1},{:.1})"/>"#,
            cx, cy, NOTEHEAD_RX, NOTEHEAD_RY, NOTE_COLOR, cx, cy
        ));
    }

    pub(super) fn sharp_glyph(&mut self, x: f64, y: f64, fill: &str) {
        self.text(x, y, "♯", ACCIDENTAL_SIZE, fill, "middle", 1.0);
    }

    pub(super) fn flat_glyph(&mut self, x: f64, y: f64, fill: &str) {
        // The flat's bowl sits below its optical centre.
        self.text(x, y - HALF_SPACE / 2.0, "♭", ACCIDENTAL_SIZE, fill, "middle", 1.0);
    }

    pub(super) fn natural_glyph(&mut self, x: f64, y: f64, fill: &str) {
        self.text(x, y, "♮", ACCIDENTAL_SIZE, fill, "middle", 1.0);
    }
}
