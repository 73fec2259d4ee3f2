//! Layout model for the game's on-screen panels.

use taffy::TaffyTree;
use taffy::prelude::*;

pub struct LayoutNodes {
    root: NodeId,
    stats: NodeId,
    main_row: NodeId,
    map: NodeId,
    event_log: NodeId,
}

#[derive(Clone, Copy)]
pub struct PanelRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

pub struct FrameLayout {
    pub stats: PanelRect,
    pub map: PanelRect,
    pub event_log: PanelRect,
}

pub fn setup_layout(taffy: &mut TaffyTree<()>) -> LayoutNodes {
    let stats = taffy
        .new_leaf(Style {
            size: Size { width: percent(1.0), height: length(60.0) },
            margin: taffy::Rect { left: zero(), right: zero(), top: zero(), bottom: length(15.0) },
            ..Default::default()
        })
        .expect("stats node");
    let map = taffy
        .new_leaf(Style {
            flex_grow: 2.0,
            margin: taffy::Rect { left: zero(), right: length(15.0), top: zero(), bottom: zero() },
            ..Default::default()
        })
        .expect("map node");
    let event_log = taffy
        .new_leaf(Style { flex_grow: 1.0, ..Default::default() })
        .expect("event log node");
    let main_row = taffy
        .new_with_children(
            Style {
                display: Display::Flex,
                flex_direction: FlexDirection::Row,
                size: Size { width: percent(1.0), height: percent(1.0) },
                flex_grow: 1.0,
                ..Default::default()
            },
            &[map, event_log],
        )
        .expect("main row node");
    let root = taffy
        .new_with_children(
            Style {
                display: Display::Flex,
                flex_direction: FlexDirection::Column,
                size: Size { width: percent(1.0), height: percent(1.0) },
                padding: taffy::Rect {
                    left: length(15.0),
                    right: length(15.0),
                    top: length(15.0),
                    bottom: length(15.0),
                },
                ..Default::default()
            },
            &[stats, main_row],
        )
        .expect("root node");

    LayoutNodes { root, stats, main_row, map, event_log }
}

pub fn compute_frame_layout(
    taffy: &mut TaffyTree<()>,
    nodes: &LayoutNodes,
    viewport_width: f32,
    viewport_height: f32,
) -> FrameLayout {
    let available_size = Size {
        width: AvailableSpace::Definite(viewport_width),
        height: AvailableSpace::Definite(viewport_height),
    };
    taffy.compute_layout(nodes.root, available_size).expect("compute layout");

    let l_root = taffy.layout(nodes.root).expect("root layout");
    let l_stats = taffy.layout(nodes.stats).expect("stats layout");
    let l_main = taffy.layout(nodes.main_row).expect("main layout");
    let l_map = taffy.layout(nodes.map).expect("map layout");
    let l_event = taffy.layout(nodes.event_log).expect("event layout");

    FrameLayout {
        stats: panel_rect(l_stats, &[l_root]),
        map: panel_rect(l_map, &[l_root, l_main]),
        event_log: panel_rect(l_event, &[l_root, l_main]),
    }
}

fn panel_rect(layout: &taffy::Layout, parents: &[&taffy::Layout]) -> PanelRect {
    let mut x = layout.location.x;
    let mut y = layout.location.y;
    for parent in parents {
        x += parent.location.x;
        y += parent.location.y;
    }

    PanelRect { x, y, width: layout.size.width, height: layout.size.height }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_panel_sits_left_of_the_event_log() {
        let mut taffy = TaffyTree::new();
        let nodes = setup_layout(&mut taffy);
        let layout = compute_frame_layout(&mut taffy, &nodes, 960.0, 760.0);

        assert!(layout.map.x < layout.event_log.x);
        assert!(layout.map.width > layout.event_log.width);
    }

    #[test]
    fn stats_bar_spans_the_top() {
        let mut taffy = TaffyTree::new();
        let nodes = setup_layout(&mut taffy);
        let layout = compute_frame_layout(&mut taffy, &nodes, 960.0, 760.0);

        assert!(layout.stats.y < layout.map.y);
        assert_eq!(layout.stats.height, 60.0);
    }
}
