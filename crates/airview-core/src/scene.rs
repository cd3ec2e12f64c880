//! Typed drawing primitives produced by the layout engine.
//!
//! A [`Scene`] is a flat description of what to draw — rectangles, lines,
//! text, circles, named groups — with no knowledge of the substrate that
//! will eventually paint it. Renderers (SVG, terminal) consume scenes;
//! layout tests walk them directly.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ChartError;

/// 24-bit RGB color. Serializes as a `"#rrggbb"` literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ChartError::InvalidColor {
            value: s.to_owned(),
        };
        let hex = s.strip_prefix('#').ok_or_else(invalid)?;
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(invalid());
        }
        let channel = |range: std::ops::Range<usize>| {
            hex.get(range)
                .and_then(|pair| u8::from_str_radix(pair, 16).ok())
                .ok_or_else(invalid)
        };
        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }
}

impl Serialize for Color {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let literal = String::deserialize(deserializer)?;
        literal.parse().map_err(serde::de::Error::custom)
    }
}

/// Fill paint for shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paint {
    Solid(Color),
    /// Vertical fade from full opacity at the top to half at the bottom.
    FadeDown(Color),
}

/// Horizontal anchor for text placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAnchor {
    #[default]
    Start,
    Middle,
    End,
}

/// One drawing primitive. Coordinates are in abstract pixels with the
/// origin at the top-left of the scene.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        fill: Option<Paint>,
        stroke: Option<Color>,
        /// Corner radius; 0 for sharp corners.
        corner_radius: f32,
    },
    Line {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        stroke: Color,
        width: f32,
    },
    Text {
        x: f32,
        y: f32,
        content: String,
        size: f32,
        fill: Color,
        anchor: TextAnchor,
        /// Counter-clockwise rotation in degrees around (x, y).
        rotation: Option<f32>,
        bold: bool,
    },
    Circle {
        cx: f32,
        cy: f32,
        radius: f32,
        fill: Paint,
    },
    Group {
        name: &'static str,
        nodes: Vec<Node>,
    },
}

impl Node {
    pub fn group(name: &'static str, nodes: Vec<Node>) -> Self {
        Node::Group { name, nodes }
    }
}

/// A complete frame: intrinsic size plus the primitives to draw, in
/// painter order. Replaces the surface's prior contents wholesale.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Scene {
    pub width: f32,
    pub height: f32,
    pub nodes: Vec<Node>,
}

impl Scene {
    /// Depth-first iteration over every primitive, flattening groups.
    pub fn walk(&self) -> impl Iterator<Item = &Node> {
        fn collect<'a>(nodes: &'a [Node], out: &mut Vec<&'a Node>) {
            for node in nodes {
                out.push(node);
                if let Node::Group { nodes, .. } = node {
                    collect(nodes, out);
                }
            }
        }
        let mut flat = Vec::new();
        collect(&self.nodes, &mut flat);
        flat.into_iter()
    }

    /// The direct children of the first group with the given name.
    pub fn group(&self, name: &str) -> Option<&[Node]> {
        self.walk().find_map(|node| match node {
            Node::Group { name: n, nodes } if *n == name => Some(nodes.as_slice()),
            _ => None,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn color_parses_hex_literal() {
        let c: Color = "#e135ff".parse().unwrap();
        assert_eq!(c, Color::new(0xe1, 0x35, 0xff));
        assert_eq!(c.to_string(), "#e135ff");
    }

    #[test]
    fn color_rejects_malformed_literals() {
        for bad in ["e135ff", "#e135f", "#e135fg", "#e135ffff", ""] {
            assert!(
                bad.parse::<Color>().is_err(),
                "expected rejection for {bad:?}"
            );
        }
    }

    #[test]
    fn walk_flattens_nested_groups() {
        let scene = Scene {
            width: 10.0,
            height: 10.0,
            nodes: vec![Node::group(
                "outer",
                vec![Node::group(
                    "inner",
                    vec![Node::Line {
                        x1: 0.0,
                        y1: 0.0,
                        x2: 1.0,
                        y2: 1.0,
                        stroke: Color::new(0, 0, 0),
                        width: 1.0,
                    }],
                )],
            )],
        };
        assert_eq!(scene.walk().count(), 3);
        assert!(scene.group("inner").is_some());
        assert!(scene.group("absent").is_none());
    }
}
