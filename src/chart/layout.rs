//! Top-down tidy layout of the rendered part of the organization tree.
//!
//! Only expanded branches are visited. A collapsed node contributes its own
//! card and nothing below it: no cards, no edges, no hit regions.

use eframe::egui::{Pos2, Rect, pos2, vec2};

use crate::org::EmployeeNode;

use super::ExpansionState;

pub const CARD_WIDTH: f32 = 256.0;
pub const CARD_HEIGHT: f32 = 80.0;
pub const SIBLING_GAP: f32 = 40.0;
pub const STEM_LENGTH: f32 = 24.0;
pub const DROP_LENGTH: f32 = 24.0;
pub const TOGGLE_SIZE: f32 = 24.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EdgeKind {
    /// Parent bottom to the bus line.
    Stem,
    /// Shared horizontal line, only with two or more children.
    Bus,
    /// Bus line to a child's top.
    Drop,
}

#[derive(Clone, Debug)]
pub struct ChartEdge<'a> {
    pub kind: EdgeKind,
    pub parent: &'a str,
    pub from: Pos2,
    pub to: Pos2,
}

#[derive(Clone, Debug)]
pub struct CardLayout<'a> {
    pub node: &'a EmployeeNode,
    pub depth: usize,
    pub rect: Rect,
    pub expanded: bool,
    /// Present only for nodes with children.
    pub toggle: Option<Rect>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChartHit {
    Toggle(String),
    Card(String),
}

#[derive(Clone, Debug, Default)]
pub struct ChartLayout<'a> {
    /// Cards in pre-order.
    pub cards: Vec<CardLayout<'a>>,
    pub edges: Vec<ChartEdge<'a>>,
}

struct Measured<'a> {
    node: &'a EmployeeNode,
    expanded: bool,
    width: f32,
    children: Vec<Measured<'a>>,
}

impl<'a> Measured<'a> {
    fn children_width(&self) -> f32 {
        let gaps = self.children.len().saturating_sub(1) as f32 * SIBLING_GAP;
        self.children.iter().map(|child| child.width).sum::<f32>() + gaps
    }
}

fn measure<'a>(node: &'a EmployeeNode, expansion: &ExpansionState, fallback: bool) -> Measured<'a> {
    let expanded = expansion.is_expanded(&node.id, fallback);
    let children = if expanded {
        node.children
            .iter()
            .map(|child| measure(child, expansion, expanded))
            .collect()
    } else {
        Vec::new()
    };

    let mut measured = Measured {
        node,
        expanded,
        width: CARD_WIDTH,
        children,
    };
    measured.width = measured.children_width().max(CARD_WIDTH);
    measured
}

fn toggle_rect(card: Rect) -> Rect {
    Rect::from_center_size(
        pos2(card.right() - 8.0 - TOGGLE_SIZE * 0.5, card.center().y),
        vec2(TOGGLE_SIZE, TOGGLE_SIZE),
    )
}

impl<'a> ChartLayout<'a> {
    /// Lays out the tree with the root card's top-center at the world origin.
    pub fn compute(root: &'a EmployeeNode, expansion: &ExpansionState) -> Self {
        let measured = measure(root, expansion, true);
        let mut layout = Self::default();
        layout.place(&measured, 0.0, 0.0, 0);
        layout
    }

    fn place(&mut self, measured: &Measured<'a>, center_x: f32, top: f32, depth: usize) {
        let node = measured.node;
        let rect = Rect::from_min_size(
            pos2(center_x - CARD_WIDTH * 0.5, top),
            vec2(CARD_WIDTH, CARD_HEIGHT),
        );

        self.cards.push(CardLayout {
            node,
            depth,
            rect,
            expanded: measured.expanded,
            toggle: node.has_children().then(|| toggle_rect(rect)),
        });

        if measured.children.is_empty() {
            return;
        }

        let bus_y = rect.bottom() + STEM_LENGTH;
        let child_top = bus_y + DROP_LENGTH;
        self.edges.push(ChartEdge {
            kind: EdgeKind::Stem,
            parent: &node.id,
            from: rect.center_bottom(),
            to: pos2(center_x, bus_y),
        });

        let mut cursor = center_x - measured.children_width() * 0.5;
        let centers = measured
            .children
            .iter()
            .map(|child| {
                let child_center = cursor + child.width * 0.5;
                cursor += child.width + SIBLING_GAP;
                child_center
            })
            .collect::<Vec<_>>();

        if let [first, .., last] = centers.as_slice() {
            self.edges.push(ChartEdge {
                kind: EdgeKind::Bus,
                parent: &node.id,
                from: pos2(*first, bus_y),
                to: pos2(*last, bus_y),
            });
        }

        for (child, child_center) in measured.children.iter().zip(centers) {
            self.edges.push(ChartEdge {
                kind: EdgeKind::Drop,
                parent: &node.id,
                from: pos2(child_center, bus_y),
                to: pos2(child_center, child_top),
            });
            self.place(child, child_center, child_top, depth + 1);
        }
    }

    pub fn bounds(&self) -> Rect {
        self.cards
            .iter()
            .fold(Rect::NOTHING, |bounds, card| bounds.union(card.rect))
    }

    pub fn card(&self, id: &str) -> Option<&CardLayout<'a>> {
        self.cards.iter().find(|card| card.node.id == id)
    }

    /// Toggle affordances win over the card underneath them, so a toggle
    /// click never doubles as a selection.
    pub fn hit_test(&self, world: Pos2) -> Option<ChartHit> {
        if let Some(card) = self
            .cards
            .iter()
            .find(|card| card.toggle.is_some_and(|toggle| toggle.contains(world)))
        {
            return Some(ChartHit::Toggle(card.node.id.clone()));
        }

        self.cards
            .iter()
            .find(|card| card.rect.contains(world))
            .map(|card| ChartHit::Card(card.node.id.clone()))
    }
}
