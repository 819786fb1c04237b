//! Fixed directed graph of permitted screen transitions.

use serde::Serialize;

use super::Screen;

/// How an edge is taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeKind {
    /// A one-time completion flag flips.
    Unlock,
    /// `advance` pushes the target.
    Push,
    /// `retreat` pops the source.
    Pop,
    /// `reset_to_start` clears the history.
    Reset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Edge {
    pub from: Screen,
    pub to: Screen,
    pub kind: EdgeKind,
}

const fn edge(from: Screen, to: Screen, kind: EdgeKind) -> Edge {
    Edge { from, to, kind }
}

const EDGES: [Edge; 9] = [
    edge(Screen::Onboarding, Screen::Premium, EdgeKind::Unlock),
    edge(Screen::Premium, Screen::Entry, EdgeKind::Unlock),
    edge(Screen::Entry, Screen::Questions, EdgeKind::Push),
    edge(Screen::Questions, Screen::SessionCompleted, EdgeKind::Push),
    edge(Screen::SessionCompleted, Screen::Results, EdgeKind::Push),
    edge(Screen::Questions, Screen::Entry, EdgeKind::Pop),
    edge(Screen::SessionCompleted, Screen::Questions, EdgeKind::Pop),
    edge(Screen::Results, Screen::SessionCompleted, EdgeKind::Pop),
    edge(Screen::Results, Screen::Entry, EdgeKind::Reset),
];

pub struct FlowGraph;

impl FlowGraph {
    pub fn edges() -> &'static [Edge] {
        &EDGES
    }

    /// Whether `advance(to)` is allowed while `from` is active.
    pub fn permits_push(from: Screen, to: Screen) -> bool {
        EDGES
            .iter()
            .any(|e| e.kind == EdgeKind::Push && e.from == from && e.to == to)
    }

    /// Direct successors of `from`, in table order, without duplicates.
    pub fn successors(from: Screen) -> Vec<Screen> {
        let mut out = Vec::new();
        for e in EDGES.iter().filter(|e| e.from == from) {
            if !out.contains(&e.to) {
                out.push(e.to);
            }
        }
        out
    }

    /// Every screen reachable from `start` (excluding `start` unless a cycle
    /// leads back to it), ordered as in [`Screen::ALL`].
    pub fn reachable_from(start: Screen) -> Vec<Screen> {
        let mut seen: Vec<Screen> = Vec::new();
        let mut frontier = vec![start];
        while let Some(screen) = frontier.pop() {
            for next in Self::successors(screen) {
                if !seen.contains(&next) {
                    seen.push(next);
                    frontier.push(next);
                }
            }
        }
        Screen::ALL
            .into_iter()
            .filter(|s| seen.contains(s))
            .collect()
    }
}
