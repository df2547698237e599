//! Tests for the walk trail and loop erasure

#[cfg(test)]
mod tests {
    use wilsonmaze::MazeError;
    use wilsonmaze::maze::grid::{Cell, Direction};
    use wilsonmaze::maze::walk::{Step, WalkPath};

    fn square_trail() -> WalkPath {
        // (0,0) -> (1,0) -> (1,1) -> (0,1), head back next to the start
        let mut path = WalkPath::new(3, 3);
        path.append(Cell::new(0, 0), Direction::East).unwrap();
        path.append(Cell::new(1, 0), Direction::South).unwrap();
        path.append(Cell::new(1, 1), Direction::West).unwrap();
        path
    }

    // Tests appended steps are recorded in order and tracked for membership
    #[test]
    fn test_append_and_contains() {
        let path = square_trail();

        assert_eq!(path.len(), 3);
        assert_eq!(
            path.steps(),
            &[
                Step::new(Cell::new(0, 0), Direction::East),
                Step::new(Cell::new(1, 0), Direction::South),
                Step::new(Cell::new(1, 1), Direction::West),
            ]
        );
        assert!(path.contains_cell(Cell::new(1, 0)));
        // The head of the walk is not part of the trail
        assert!(!path.contains_cell(Cell::new(0, 1)));
        assert!(!path.contains_cell(Cell::new(9, 9)));
    }

    // Tests closing a loop erases exactly the cells after the revisited one
    #[test]
    fn test_erase_back_to_removes_loop() {
        let mut path = square_trail();

        let erased = path.erase_back_to(Cell::new(0, 0)).unwrap();

        assert_eq!(erased, 2);
        assert_eq!(path.len(), 1);
        assert_eq!(path.last().map(|s| s.cell), Some(Cell::new(0, 0)));
        assert!(!path.contains_cell(Cell::new(1, 0)));
        assert!(!path.contains_cell(Cell::new(1, 1)));
    }

    // Tests stepping straight back to the previous cell erases nothing
    #[test]
    fn test_erase_immediate_reversal() {
        let mut path = WalkPath::new(3, 3);
        path.append(Cell::new(1, 1), Direction::North).unwrap();

        let erased = path.erase_back_to(Cell::new(1, 1)).unwrap();

        assert_eq!(erased, 0);
        assert_eq!(path.len(), 1);
    }

    // Tests erasing to a cell absent from the trail fails
    #[test]
    fn test_erase_back_to_not_in_path() {
        let mut path = square_trail();

        assert!(matches!(
            path.erase_back_to(Cell::new(2, 2)),
            Err(MazeError::NotInPath { .. })
        ));
        assert_eq!(path.len(), 3);
    }

    // Tests leaving a cell again after erasure replaces its old direction
    #[test]
    fn test_append_after_erase_replaces_direction() {
        let mut path = square_trail();
        path.erase_back_to(Cell::new(0, 0)).unwrap();

        path.append(Cell::new(0, 0), Direction::South).unwrap();
        path.append(Cell::new(0, 1), Direction::South).unwrap();

        assert_eq!(
            path.steps(),
            &[
                Step::new(Cell::new(0, 0), Direction::South),
                Step::new(Cell::new(0, 1), Direction::South),
            ]
        );
        let cells: Vec<Cell> = path.cells().collect();
        assert_eq!(cells, vec![Cell::new(0, 0), Cell::new(0, 1)]);
    }

    // Tests clearing resets steps and membership
    #[test]
    fn test_clear() {
        let mut path = square_trail();
        path.clear();

        assert!(path.is_empty());
        assert!(!path.contains_cell(Cell::new(0, 0)));
        assert!(!path.contains_cell(Cell::new(1, 1)));
    }

    // Tests cells outside the trail's grid are rejected
    #[test]
    fn test_append_out_of_bounds() {
        let mut path = WalkPath::new(2, 2);

        assert!(matches!(
            path.append(Cell::new(2, 0), Direction::East),
            Err(MazeError::OutOfBounds { .. })
        ));
        assert!(path.is_empty());
    }
}
