//! Tests for grid bounds, state transitions and tree traversal

#[cfg(test)]
mod tests {
    use wilsonmaze::MazeError;
    use wilsonmaze::io::configuration::MAX_GRID_DIMENSION;
    use wilsonmaze::maze::grid::{Cell, CellState, Direction, Grid};

    // Tests dimension validation rejects empty and oversized grids
    #[test]
    fn test_new_rejects_invalid_dimensions() {
        assert!(matches!(
            Grid::new(0, 5),
            Err(MazeError::InvalidParameter {
                parameter: "width",
                ..
            })
        ));
        assert!(matches!(
            Grid::new(5, 0),
            Err(MazeError::InvalidParameter {
                parameter: "height",
                ..
            })
        ));
        assert!(Grid::new(MAX_GRID_DIMENSION + 1, 1).is_err());
        assert!(Grid::new(1, 1).is_ok());
    }

    // Tests a fresh grid is entirely unvisited with no root
    #[test]
    fn test_new_grid_is_unvisited() {
        let grid = Grid::new(4, 3).unwrap();

        assert_eq!(grid.dimensions(), (4, 3));
        assert_eq!(grid.len(), 12);
        assert_eq!(grid.root(), None);
        assert_eq!(grid.tree_size(), 0);
        assert!(
            grid.cells()
                .all(|cell| grid.state_of(cell).unwrap() == CellState::Unvisited)
        );
    }

    // Tests in_bounds accepts exactly [0, W) x [0, H)
    #[test]
    fn test_in_bounds() {
        let grid = Grid::new(3, 2).unwrap();

        assert!(grid.in_bounds(0, 0));
        assert!(grid.in_bounds(2, 1));
        assert!(!grid.in_bounds(3, 0));
        assert!(!grid.in_bounds(0, 2));
        assert!(!grid.in_bounds(-1, 0));
        assert!(!grid.in_bounds(0, -1));
    }

    // Tests neighbours follow the y-down compass and stop at the edges
    #[test]
    fn test_neighbor_at_edges() {
        let grid = Grid::new(3, 3).unwrap();
        let corner = Cell::new(0, 0);

        assert_eq!(grid.neighbor(corner, Direction::North), None);
        assert_eq!(grid.neighbor(corner, Direction::West), None);
        assert_eq!(
            grid.neighbor(corner, Direction::East),
            Some(Cell::new(1, 0))
        );
        assert_eq!(
            grid.neighbor(corner, Direction::South),
            Some(Cell::new(0, 1))
        );

        let far = Cell::new(2, 2);
        assert_eq!(grid.neighbor(far, Direction::East), None);
        assert_eq!(grid.neighbor(far, Direction::South), None);
    }

    // Tests direction index mapping and opposites
    #[test]
    fn test_direction_helpers() {
        assert_eq!(Direction::from_index(0), Direction::North);
        assert_eq!(Direction::from_index(1), Direction::South);
        assert_eq!(Direction::from_index(2), Direction::East);
        assert_eq!(Direction::from_index(3), Direction::West);
        assert_eq!(Direction::from_index(6), Direction::East);

        for direction in Direction::ALL {
            assert_eq!(-(-direction), direction);
            assert_ne!(direction.opposite(), direction);
            let (dx, dy) = direction.offset();
            let (ox, oy) = direction.opposite().offset();
            assert_eq!((dx + ox, dy + oy), (0, 0));
        }
    }

    // Tests row-major index conversion
    #[test]
    fn test_cell_index_mapping() {
        let grid = Grid::new(4, 3).unwrap();

        assert_eq!(grid.cell_at(0), Some(Cell::new(0, 0)));
        assert_eq!(grid.cell_at(5), Some(Cell::new(1, 1)));
        assert_eq!(grid.cell_at(11), Some(Cell::new(3, 2)));
        assert_eq!(grid.cell_at(12), None);
        assert_eq!(grid.index_of(Cell::new(3, 2)), Some(11));
        assert_eq!(grid.index_of(Cell::new(4, 0)), None);
        assert_eq!(grid.cells().nth(6), Some(Cell::new(2, 1)));
    }

    // Tests state lookups outside the grid fail
    #[test]
    fn test_state_of_out_of_bounds() {
        let grid = Grid::new(2, 2).unwrap();

        assert!(matches!(
            grid.state_of(Cell::new(2, 0)),
            Err(MazeError::OutOfBounds {
                dimensions: (2, 2),
                ..
            })
        ));
    }

    // Tests unvisited cells connect exactly once
    #[test]
    fn test_mark_connected_transition() {
        let mut grid = Grid::new(2, 2).unwrap();
        let cell = Cell::new(0, 1);

        grid.mark_connected(cell, Direction::North).unwrap();
        assert_eq!(
            grid.state_of(cell).unwrap(),
            CellState::Connected(Direction::North)
        );

        let err = grid.mark_connected(cell, Direction::East).unwrap_err();
        assert!(matches!(
            err,
            MazeError::InvalidTransition {
                from: CellState::Connected(Direction::North),
                ..
            }
        ));
        assert_eq!(
            grid.state_of(cell).unwrap(),
            CellState::Connected(Direction::North)
        );
    }

    // Tests the root cannot be reconnected and only one root is allowed
    #[test]
    fn test_mark_root_once() {
        let mut grid = Grid::new(3, 3).unwrap();
        let root = Cell::new(1, 1);

        grid.mark_root(root).unwrap();
        assert_eq!(grid.root(), Some(root));
        assert_eq!(grid.state_of(root).unwrap(), CellState::Root);

        assert!(matches!(
            grid.mark_root(Cell::new(0, 0)),
            Err(MazeError::InvalidTransition {
                from: CellState::Root,
                ..
            })
        ));
        assert!(matches!(
            grid.mark_connected(root, Direction::West),
            Err(MazeError::InvalidTransition {
                from: CellState::Root,
                ..
            })
        ));
        assert_eq!(grid.state_of(Cell::new(0, 0)).unwrap(), CellState::Unvisited);
    }

    // Tests a passage is seen from both sides and never through the border
    #[test]
    fn test_has_passage_symmetry() {
        let mut grid = Grid::new(2, 2).unwrap();
        grid.mark_root(Cell::new(1, 0)).unwrap();
        grid.mark_connected(Cell::new(0, 0), Direction::East).unwrap();

        assert!(grid.has_passage(Cell::new(0, 0), Direction::East));
        assert!(grid.has_passage(Cell::new(1, 0), Direction::West));
        assert!(!grid.has_passage(Cell::new(0, 0), Direction::South));
        assert!(!grid.has_passage(Cell::new(1, 0), Direction::South));
        assert!(!grid.has_passage(Cell::new(0, 0), Direction::North));
    }

    // Tests traversal from a cell reaches the root along its pointers
    #[test]
    fn test_path_to_root() {
        let mut grid = Grid::new(3, 1).unwrap();
        grid.mark_root(Cell::new(2, 0)).unwrap();
        grid.mark_connected(Cell::new(1, 0), Direction::East).unwrap();
        grid.mark_connected(Cell::new(0, 0), Direction::East).unwrap();

        let path = grid.path_to_root(Cell::new(0, 0)).unwrap();
        assert_eq!(
            path,
            vec![Cell::new(0, 0), Cell::new(1, 0), Cell::new(2, 0)]
        );
        assert_eq!(grid.path_to_root(Cell::new(2, 0)).unwrap().len(), 1);
        assert!(grid.is_spanning_tree());
    }

    // Tests traversal detects pointer cycles
    #[test]
    fn test_path_to_root_detects_cycle() {
        let mut grid = Grid::new(2, 1).unwrap();
        grid.mark_connected(Cell::new(0, 0), Direction::East).unwrap();
        grid.mark_connected(Cell::new(1, 0), Direction::West).unwrap();

        assert!(matches!(
            grid.path_to_root(Cell::new(0, 0)),
            Err(MazeError::BrokenTree {
                reason: "pointers form a cycle",
                ..
            })
        ));
        assert!(!grid.is_spanning_tree());
    }

    // Tests traversal stops at unvisited cells and pointers off the grid
    #[test]
    fn test_path_to_root_detects_broken_links() {
        let mut grid = Grid::new(2, 2).unwrap();
        grid.mark_root(Cell::new(1, 1)).unwrap();
        grid.mark_connected(Cell::new(0, 0), Direction::East).unwrap();
        grid.mark_connected(Cell::new(0, 1), Direction::West).unwrap();

        assert!(matches!(
            grid.path_to_root(Cell::new(0, 0)),
            Err(MazeError::BrokenTree {
                reason: "reached an unvisited cell",
                ..
            })
        ));
        assert!(matches!(
            grid.path_to_root(Cell::new(0, 1)),
            Err(MazeError::BrokenTree {
                reason: "pointer leaves the grid",
                ..
            })
        ));
        assert!(!grid.is_spanning_tree());
    }
}
