use serde::Deserialize;

use super::sink::{DrawCommand, Tone};

/// Box placement in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Geometry {
    pub top: u16,
    pub left: u16,
    pub width: u16,
    pub height: u16,
}

impl Default for Geometry {
    fn default() -> Self {
        Self {
            top: 0,
            left: 0,
            width: 60,
            height: 14,
        }
    }
}

impl Geometry {
    pub fn inner_width(&self) -> usize {
        usize::from(self.width.saturating_sub(2))
    }

    pub fn inner_height(&self) -> usize {
        usize::from(self.height.saturating_sub(2))
    }

    pub fn right(&self) -> u16 {
        self.left.saturating_add(self.width.saturating_sub(1))
    }

    pub fn bottom(&self) -> u16 {
        self.top.saturating_add(self.height.saturating_sub(1))
    }
}

/// Border with `label` set into the top edge.
pub fn frame(geometry: Geometry, label: &str) -> Vec<DrawCommand> {
    if geometry.width < 2 || geometry.height < 2 {
        return Vec::new();
    }
    let inner = geometry.inner_width();

    let mut top_edge = String::from("┌");
    let title: String = format!(" {label} ").chars().take(inner).collect();
    let title_len = title.chars().count();
    top_edge.push_str(&title);
    top_edge.push_str(&"─".repeat(inner - title_len));
    top_edge.push('┐');

    let mut cmds = Vec::with_capacity(geometry.inner_height() + 2);
    cmds.push(DrawCommand::text(geometry.left, geometry.top, top_edge, Tone::Border));

    let side = format!("│{}│", " ".repeat(inner));
    for row in 1..geometry.height.saturating_sub(1) {
        cmds.push(DrawCommand::text(
            geometry.left,
            geometry.top.saturating_add(row),
            side.clone(),
            Tone::Border,
        ));
    }

    let bottom_edge = format!("└{}┘", "─".repeat(inner));
    cmds.push(DrawCommand::text(
        geometry.left,
        geometry.bottom(),
        bottom_edge,
        Tone::Border,
    ));
    cmds
}
