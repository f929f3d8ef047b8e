//! SVG builder — accumulates drawing primitives and produces the final
//! document string.
//!
//! One builder is constructed per render call and consumed by [`build`];
//! nothing is shared across calls. The viewBox is fitted to the bounding
//! box of everything drawn, plus the margin given at construction, so
//! callers never compute a canvas size up front.

pub(super) struct SvgBuilder {
    elements: Vec<String>,
    margin: f64,
    bounds: Option<Bounds>,
}

#[derive(Clone, Copy)]
struct Bounds {
    min_x: f64,
    min_y: f64,
    max_x: f64,
    max_y: f64,
}

impl SvgBuilder {
    pub(super) fn new(margin: f64) -> Self {
        Self {
            elements: Vec::new(),
            margin,
            bounds: None,
        }
    }

    pub(super) fn build(self) -> String {
        let b = self.bounds.unwrap_or(Bounds {
            min_x: 0.0,
            min_y: 0.0,
            max_x: 0.0,
            max_y: 0.0,
        });
        let x = b.min_x - self.margin;
        let y = b.min_y - self.margin;
        let width = b.max_x - b.min_x + 2.0 * self.margin;
        let height = b.max_y - b.min_y + 2.0 * self.margin;

        let mut svg = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{:.1} {:.1} {:.1} {:.1}" width="{:.1}" height="{:.1}">"#,
            x, y, width, height, width, height
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

    pub(super) fn line(
        &mut self,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        stroke_width: f64,
        color: &str,
        opacity: f64,
    ) {
        self.cover(x1, y1);
        self.cover(x2, y2);
        self.elements.push(format!(
            r#"<line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="{}" stroke-width="{:.1}" stroke-opacity="{}"/>"#,
            x1, y1, x2, y2, color, stroke_width, opacity
        ));
    }

    pub(super) fn circle(&mut self, cx: f64, cy: f64, r: f64, fill: &str) {
        self.cover(cx - r, cy - r);
        self.cover(cx + r, cy + r);
        self.elements.push(format!(
            r#"<circle cx="{:.1}" cy="{:.1}" r="{:.1}" fill="{}"/>"#,
            cx, cy, r, fill
        ));
    }

    pub(super) fn polygon(&mut self, vertices: &[(f64, f64)], fill: &str) {
        let mut points = String::new();
        for (i, &(x, y)) in vertices.iter().enumerate() {
            self.cover(x, y);
            if i > 0 {
                points.push(' ');
            }
            points.push_str(&format!("{:.1},{:.1}", x, y));
        }
        self.elements.push(format!(
            r#"<polygon points="{}" fill="{}"/>"#,
            points, fill
        ));
    }

    #[cfg(test)]
    pub(super) fn element_count(&self) -> usize {
        self.elements.len()
    }

    fn cover(&mut self, x: f64, y: f64) {
        let b = self.bounds.get_or_insert(Bounds {
            min_x: x,
            min_y: y,
            max_x: x,
            max_y: y,
        });
        b.min_x = b.min_x.min(x);
        b.min_y = b.min_y.min(y);
        b.max_x = b.max_x.max(x);
        b.max_y = b.max_y.max(y);
    }
}
