//! Scene → SVG document conversion.
//!
//! The renderer is a straight traversal of the scene in painter order.
//! `FadeDown` paints become shared `<linearGradient>` defs, deduplicated
//! by base color so a chart with many bars in one tier emits one def.

use airview_core::scene::{Color, Node, Paint, Scene, TextAnchor};

/// Render a scene as a standalone SVG document.
pub fn render_document(scene: &Scene) -> String {
    let mut out = String::with_capacity(4096);
    out.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" \
         viewBox=\"0 0 {w} {h}\">\n",
        w = scene.width,
        h = scene.height,
    ));

    let fades = collect_fades(scene);
    if !fades.is_empty() {
        out.push_str("<defs>\n");
        for (i, color) in fades.iter().enumerate() {
            out.push_str(&format!(
                "<linearGradient id=\"{}\" x1=\"0\" y1=\"0\" x2=\"0\" y2=\"1\">\
                 <stop offset=\"0\" stop-color=\"{color}\" stop-opacity=\"1\"/>\
                 <stop offset=\"1\" stop-color=\"{color}\" stop-opacity=\"0.5\"/>\
                 </linearGradient>\n",
                fade_id(i),
            ));
        }
        out.push_str("</defs>\n");
    }

    for node in &scene.nodes {
        write_node(&mut out, node, &fades);
    }
    out.push_str("</svg>\n");
    out
}

fn fade_id(index: usize) -> String {
    format!("fade-{index}")
}

/// Distinct fade base colors, in first-use order.
fn collect_fades(scene: &Scene) -> Vec<Color> {
    let mut fades = Vec::new();
    for node in scene.walk() {
        let paint = match node {
            Node::Rect { fill, .. } => *fill,
            Node::Circle { fill, .. } => Some(*fill),
            _ => None,
        };
        if let Some(Paint::FadeDown(color)) = paint {
            if !fades.contains(&color) {
                fades.push(color);
            }
        }
    }
    fades
}

fn paint_attr(paint: Option<Paint>, fades: &[Color]) -> String {
    match paint {
        None => "none".to_owned(),
        Some(Paint::Solid(color)) => color.to_string(),
        Some(Paint::FadeDown(color)) => {
            let index = fades.iter().position(|&c| c == color).unwrap_or(0);
            format!("url(#{})", fade_id(index))
        }
    }
}

fn write_node(out: &mut String, node: &Node, fades: &[Color]) {
    match node {
        Node::Group { name, nodes } => {
            out.push_str(&format!("<g data-name=\"{name}\">\n"));
            for child in nodes {
                write_node(out, child, fades);
            }
            out.push_str("</g>\n");
        }
        Node::Rect {
            x,
            y,
            width,
            height,
            fill,
            stroke,
            corner_radius,
        } => {
            out.push_str(&format!(
                "<rect x=\"{x}\" y=\"{y}\" width=\"{width}\" height=\"{height}\" rx=\"{corner_radius}\" fill=\"{}\"",
                paint_attr(*fill, fades),
            ));
            if let Some(stroke) = stroke {
                out.push_str(&format!(" stroke=\"{stroke}\" stroke-width=\"1\""));
            }
            out.push_str("/>\n");
        }
        Node::Line {
            x1,
            y1,
            x2,
            y2,
            stroke,
            width,
        } => {
            out.push_str(&format!(
                "<line x1=\"{x1}\" y1=\"{y1}\" x2=\"{x2}\" y2=\"{y2}\" stroke=\"{stroke}\" stroke-width=\"{width}\"/>\n",
            ));
        }
        Node::Text {
            x,
            y,
            content,
            size,
            fill,
            anchor,
            rotation,
            bold,
        } => {
            let anchor = match anchor {
                TextAnchor::Start => "start",
                TextAnchor::Middle => "middle",
                TextAnchor::End => "end",
            };
            out.push_str(&format!(
                "<text x=\"{x}\" y=\"{y}\" font-size=\"{size}\" fill=\"{fill}\" text-anchor=\"{anchor}\"",
            ));
            if *bold {
                out.push_str(" font-weight=\"bold\"");
            }
            if let Some(degrees) = rotation {
                out.push_str(&format!(" transform=\"rotate({degrees} {x} {y})\""));
            }
            out.push_str(&format!(">{}</text>\n", escape(content)));
        }
        Node::Circle {
            cx,
            cy,
            radius,
            fill,
        } => {
            out.push_str(&format!(
                "<circle cx=\"{cx}\" cy=\"{cy}\" r=\"{radius}\" fill=\"{}\"/>\n",
                paint_attr(Some(*fill), fades),
            ));
        }
    }
}

/// Escape text content for embedding in SVG.
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
