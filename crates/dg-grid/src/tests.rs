//! Unit tests for dg-grid.
//!
//! All tests use hand-crafted graphs built in-process; optimality checks are
//! cross-validated against a brute-force BFS.

#[cfg(test)]
mod helpers {
    use std::collections::VecDeque;

    use dg_core::{GridPoint, TileId};

    use crate::{DungeonGraph, DungeonGraphBuilder};

    /// Build a fully connected `w × h` dungeon rectangle with tiles at
    /// (0..w, 0..h).
    pub fn rect_dungeon(w: i32, h: i32) -> DungeonGraph {
        rect_builder(w, h).build()
    }

    pub fn rect_builder(w: i32, h: i32) -> DungeonGraphBuilder {
        let mut b = DungeonGraphBuilder::with_capacity((w * h) as usize);
        for y in 0..h {
            for x in 0..w {
                b.add_tile(GridPoint::new(x, y), true);
            }
        }
        b
    }

    /// Brute-force BFS shortest path length in steps, or `None` if
    /// unreachable.  The ground truth for optimality checks.
    pub fn bfs_steps(graph: &DungeonGraph, from: TileId, to: TileId) -> Option<usize> {
        let mut dist = vec![usize::MAX; graph.tile_count()];
        let mut queue = VecDeque::new();
        dist[from.index()] = 0;
        queue.push_back(from);
        while let Some(tile) = queue.pop_front() {
            if tile == to {
                return Some(dist[tile.index()]);
            }
            for n in graph.dungeon_neighbors(tile) {
                if dist[n.index()] == usize::MAX {
                    dist[n.index()] = dist[tile.index()] + 1;
                    queue.push_back(n);
                }
            }
        }
        None
    }
}

// ── Builder & graph structure ─────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use dg_core::{Direction, GridPoint, TileId};

    use crate::DungeonGraphBuilder;

    #[test]
    fn empty_build() {
        let graph = DungeonGraphBuilder::new().build();
        assert_eq!(graph.tile_count(), 0);
        assert!(graph.is_empty());
        assert!(!graph.contains(TileId(0)));
    }

    #[test]
    fn neighbor_linking_is_symmetric() {
        let graph = super::helpers::rect_dungeon(3, 3);
        for tile in (0..graph.tile_count() as u32).map(TileId) {
            for dir in Direction::ALL {
                if let Some(n) = graph.neighbor(tile, dir) {
                    assert_eq!(
                        graph.neighbor(n, dir.opposite()),
                        Some(tile),
                        "adjacency must be symmetric"
                    );
                }
            }
        }
    }

    #[test]
    fn corner_and_center_degrees() {
        let graph = super::helpers::rect_dungeon(3, 3);
        let corner = graph.tile_at(GridPoint::new(0, 0)).unwrap();
        let center = graph.tile_at(GridPoint::new(1, 1)).unwrap();
        assert_eq!(graph.neighbors(corner).count(), 2);
        assert_eq!(graph.neighbors(center).count(), 4);
    }

    #[test]
    fn duplicate_position_updates_flag() {
        let mut b = DungeonGraphBuilder::new();
        let a = b.add_tile(GridPoint::new(0, 0), true);
        let a2 = b.add_tile(GridPoint::new(0, 0), false);
        assert_eq!(a, a2);
        let graph = b.build();
        assert_eq!(graph.tile_count(), 1);
        assert!(!graph.is_dungeon(a));
    }

    #[test]
    fn wall_tiles_excluded_from_dungeon_neighbors() {
        let mut b = super::helpers::rect_builder(3, 1);
        // Make the middle tile a wall.
        let wall = b.add_tile(GridPoint::new(1, 0), false);
        let graph = b.build();
        let left = graph.tile_at(GridPoint::new(0, 0)).unwrap();
        // The wall is still linked as a neighbour …
        assert!(graph.neighbors(left).any(|t| t == wall));
        // … but never part of the expandable set.
        assert_eq!(graph.dungeon_neighbors(left).count(), 0);
    }

    #[test]
    fn tile_at_exact_lookup() {
        let graph = super::helpers::rect_dungeon(2, 2);
        assert!(graph.tile_at(GridPoint::new(1, 1)).is_some());
        assert!(graph.tile_at(GridPoint::new(2, 0)).is_none());
        assert!(graph.tile_at(GridPoint::new(-1, 0)).is_none());
    }
}

// ── World mapping & spatial snap ──────────────────────────────────────────────

#[cfg(test)]
mod world {
    use dg_core::{GridPoint, WorldPoint};

    use crate::DungeonGraphBuilder;

    #[test]
    fn world_pos_is_cell_center() {
        let mut b = DungeonGraphBuilder::new().world_mapping(WorldPoint::new(10.0, 20.0), 2.0);
        let t = b.add_tile(GridPoint::new(1, 0), true);
        let graph = b.build();
        assert_eq!(graph.world_pos(t), WorldPoint::new(13.0, 21.0));
    }

    #[test]
    fn tile_at_world_roundtrip() {
        let graph = super::helpers::rect_dungeon(4, 4);
        for tile in (0..graph.tile_count() as u32).map(dg_core::TileId) {
            assert_eq!(graph.tile_at_world(graph.world_pos(tile)), Some(tile));
        }
    }

    #[test]
    fn tile_at_world_outside_grid() {
        let graph = super::helpers::rect_dungeon(2, 2);
        assert!(graph.tile_at_world(WorldPoint::new(-5.0, 0.5)).is_none());
    }

    #[test]
    fn snap_prefers_dungeon_tiles() {
        let mut b = DungeonGraphBuilder::new();
        let wall = b.add_tile(GridPoint::new(0, 0), false);
        let floor = b.add_tile(GridPoint::new(3, 0), true);
        let graph = b.build();
        // The query point sits on the wall tile, but only dungeon tiles are
        // indexed for snapping.
        let snapped = graph.snap_to_dungeon(graph.world_pos(wall)).unwrap();
        assert_eq!(snapped, floor);
    }

    #[test]
    fn snap_on_empty_graph_returns_none() {
        let graph = DungeonGraphBuilder::new().build();
        assert!(graph.snap_to_dungeon(WorldPoint::new(0.0, 0.0)).is_none());
    }
}

// ── Treasure index ────────────────────────────────────────────────────────────

#[cfg(test)]
mod treasure {
    use dg_core::TileId;

    use crate::DungeonGraphBuilder;

    #[test]
    fn insertion_order_is_stable() {
        let mut graph = super::helpers::rect_dungeon(3, 3);
        graph.place_treasure(TileId(4), 10);
        graph.place_treasure(TileId(0), 20);
        graph.place_treasure(TileId(8), 30);
        let tiles: Vec<_> = graph.treasure_tiles().iter().map(|&(t, _)| t).collect();
        assert_eq!(tiles, vec![TileId(4), TileId(0), TileId(8)]);
    }

    #[test]
    fn take_removes_and_preserves_order() {
        let mut graph = super::helpers::rect_dungeon(3, 3);
        graph.place_treasure(TileId(4), 10);
        graph.place_treasure(TileId(0), 20);
        graph.place_treasure(TileId(8), 30);

        assert_eq!(graph.take_treasure(TileId(0)), Some(20));
        assert_eq!(graph.take_treasure(TileId(0)), None);
        let tiles: Vec<_> = graph.treasure_tiles().iter().map(|&(t, _)| t).collect();
        assert_eq!(tiles, vec![TileId(4), TileId(8)]);
        assert!(!graph.has_treasure(TileId(0)));
        assert!(graph.has_treasure(TileId(4)));
    }

    #[test]
    fn replace_keeps_insertion_rank() {
        let mut graph = super::helpers::rect_dungeon(2, 2);
        graph.place_treasure(TileId(1), 10);
        graph.place_treasure(TileId(2), 20);
        graph.place_treasure(TileId(1), 99);
        assert_eq!(graph.treasure_tiles(), &[(TileId(1), 99), (TileId(2), 20)]);
    }

    #[test]
    fn unregistered_tile_is_ignored() {
        let mut graph = super::helpers::rect_dungeon(2, 2);
        graph.place_treasure(TileId(100), 10);
        assert_eq!(graph.treasure_count(), 0);
    }

    #[test]
    fn builder_placement_carries_over() {
        let mut b = super::helpers::rect_builder(2, 2);
        let t = b.tile_at(dg_core::GridPoint::new(1, 1)).unwrap();
        b.place_treasure(t, 50);
        let graph = b.build();
        assert_eq!(graph.treasure_tiles(), &[(t, 50)]);
    }
}

// ── A* pathfinding ────────────────────────────────────────────────────────────

#[cfg(test)]
mod pathfinding {
    use dg_core::{GridPoint, TileId};

    use super::helpers::{bfs_steps, rect_builder, rect_dungeon};
    use crate::{AStarPathFinder, GridError, Heuristic, PathFinder};

    /// A 5×5 room with a vertical wall at x=2, pierced only at y=4.
    fn walled_room() -> crate::DungeonGraph {
        let mut b = rect_builder(5, 5);
        for y in 0..4 {
            b.add_tile(GridPoint::new(2, y), false);
        }
        b.build()
    }

    #[test]
    fn optimal_matches_bfs_both_heuristics() {
        let graph = walled_room();
        let pairs = [
            (GridPoint::new(0, 0), GridPoint::new(4, 0)),
            (GridPoint::new(0, 2), GridPoint::new(4, 2)),
            (GridPoint::new(1, 0), GridPoint::new(3, 4)),
            (GridPoint::new(0, 4), GridPoint::new(4, 4)),
        ];
        for heuristic in [Heuristic::Manhattan, Heuristic::Euclidean] {
            let finder = AStarPathFinder::new(heuristic);
            for (a, b) in pairs {
                let from = graph.tile_at(a).unwrap();
                let to = graph.tile_at(b).unwrap();
                let path = finder.find_path(&graph, from, to).unwrap();
                let expected = bfs_steps(&graph, from, to).unwrap();
                assert_eq!(path.steps(), expected, "{a} → {b} with {heuristic:?}");
            }
        }
    }

    #[test]
    fn path_is_a_connected_dungeon_walk() {
        let graph = walled_room();
        let finder = AStarPathFinder::default();
        let from = graph.tile_at(GridPoint::new(0, 0)).unwrap();
        let to = graph.tile_at(GridPoint::new(4, 0)).unwrap();
        let path = finder.find_path(&graph, from, to).unwrap();

        assert_eq!(path.tiles[0], from);
        assert_eq!(*path.tiles.last().unwrap(), to);
        for pair in path.tiles.windows(2) {
            assert!(
                graph.neighbors(pair[0]).any(|t| t == pair[1]),
                "consecutive path tiles must be adjacent"
            );
            assert!(graph.is_dungeon(pair[1]), "path must stay on dungeon tiles");
        }
    }

    #[test]
    fn next_step_is_a_neighbor_of_start() {
        let graph = rect_dungeon(5, 5);
        let finder = AStarPathFinder::default();
        let from = graph.tile_at(GridPoint::new(2, 2)).unwrap();
        for target in [GridPoint::new(0, 0), GridPoint::new(4, 4), GridPoint::new(2, 0)] {
            let to = graph.tile_at(target).unwrap();
            let step = finder.next_step(&graph, from, to).unwrap();
            assert!(graph.neighbors(from).any(|t| t == step));
        }
    }

    #[test]
    fn next_step_same_tile_is_no_path() {
        let graph = rect_dungeon(2, 2);
        let finder = AStarPathFinder::default();
        let t = graph.tile_at(GridPoint::new(0, 0)).unwrap();
        assert!(matches!(
            finder.next_step(&graph, t, t),
            Err(GridError::NoPath { .. })
        ));
    }

    #[test]
    fn next_step_adjacent_returns_goal() {
        let graph = rect_dungeon(2, 1);
        let finder = AStarPathFinder::default();
        let a = graph.tile_at(GridPoint::new(0, 0)).unwrap();
        let b = graph.tile_at(GridPoint::new(1, 0)).unwrap();
        assert_eq!(finder.next_step(&graph, a, b).unwrap(), b);
    }

    #[test]
    fn find_path_same_tile_is_trivial() {
        let graph = rect_dungeon(2, 2);
        let finder = AStarPathFinder::default();
        let t = graph.tile_at(GridPoint::new(1, 1)).unwrap();
        let path = finder.find_path(&graph, t, t).unwrap();
        assert!(path.is_trivial());
        assert_eq!(path.tiles, vec![t]);
    }

    #[test]
    fn disconnected_components_yield_no_path() {
        // Two 1×1 rooms with a wall between them.
        let mut b = rect_builder(1, 1);
        b.add_tile(GridPoint::new(1, 0), false);
        let far = b.add_tile(GridPoint::new(2, 0), true);
        let graph = b.build();
        let finder = AStarPathFinder::default();
        let near = graph.tile_at(GridPoint::new(0, 0)).unwrap();
        assert!(matches!(
            finder.find_path(&graph, near, far),
            Err(GridError::NoPath { .. })
        ));
    }

    #[test]
    fn non_dungeon_tiles_never_entered() {
        // Geometrically the wall at (1, 0) is the shortest way across this
        // 3×2 room; the path must detour through the open row instead.
        let mut b = rect_builder(3, 2);
        let wall = b.add_tile(GridPoint::new(1, 0), false);
        let graph = b.build();
        let finder = AStarPathFinder::default();
        let from = graph.tile_at(GridPoint::new(0, 0)).unwrap();
        let to = graph.tile_at(GridPoint::new(2, 0)).unwrap();
        let path = finder.find_path(&graph, from, to).unwrap();
        assert_eq!(path.steps(), 4);
        assert!(!path.tiles.contains(&wall));
    }

    #[test]
    fn repeated_queries_are_identical() {
        let graph = walled_room();
        let finder = AStarPathFinder::default();
        let from = graph.tile_at(GridPoint::new(0, 0)).unwrap();
        let to = graph.tile_at(GridPoint::new(4, 2)).unwrap();
        let first = finder.next_step(&graph, from, to).unwrap();
        for _ in 0..10 {
            assert_eq!(finder.next_step(&graph, from, to).unwrap(), first);
        }
    }

    #[test]
    fn expansion_limit_aborts_search() {
        let graph = rect_dungeon(10, 10);
        let finder = AStarPathFinder::default().with_max_expansions(3);
        let from = graph.tile_at(GridPoint::new(0, 0)).unwrap();
        let to = graph.tile_at(GridPoint::new(9, 9)).unwrap();
        assert!(matches!(
            finder.find_path(&graph, from, to),
            Err(GridError::ExpansionLimit { limit: 3 })
        ));
    }

    #[test]
    fn unknown_tiles_are_rejected() {
        let graph = rect_dungeon(2, 2);
        let finder = AStarPathFinder::default();
        let t = graph.tile_at(GridPoint::new(0, 0)).unwrap();
        assert!(matches!(
            finder.find_path(&graph, t, TileId(999)),
            Err(GridError::TileNotFound(TileId(999)))
        ));
        assert!(matches!(
            finder.find_path(&graph, TileId(999), t),
            Err(GridError::TileNotFound(TileId(999)))
        ));
    }
}
