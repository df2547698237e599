//! Tests for ASCII rendering and terminal animation

#[cfg(test)]
mod tests {
    use std::time::Duration;
    use wilsonmaze::GenerationObserver;
    use wilsonmaze::io::render::{TerminalAnimator, WalkView, render_ascii, render_summary};
    use wilsonmaze::maze::grid::{Cell, Direction, Grid};
    use wilsonmaze::maze::walk::WalkPath;

    // Tests a single cell renders as a closed box
    #[test]
    fn test_render_single_cell() {
        let mut grid = Grid::new(1, 1).unwrap();
        grid.mark_root(Cell::new(0, 0)).unwrap();

        assert_eq!(render_ascii(&grid, None), "+-+\n| |\n+-+\n");
    }

    // Tests unvisited cells are drawn as filled blocks
    #[test]
    fn test_render_unvisited() {
        let grid = Grid::new(2, 1).unwrap();

        assert_eq!(render_ascii(&grid, None), "+-+-+\n|#|#|\n+-+-+\n");
    }

    // Tests passages open the walls between connected cells
    // Verified by drawing every wall regardless of passages
    #[test]
    fn test_render_passages() {
        let mut grid = Grid::new(2, 2).unwrap();
        grid.mark_root(Cell::new(0, 0)).unwrap();
        grid.mark_connected(Cell::new(1, 0), Direction::West).unwrap();
        grid.mark_connected(Cell::new(0, 1), Direction::North).unwrap();
        grid.mark_connected(Cell::new(1, 1), Direction::North).unwrap();

        assert_eq!(
            render_ascii(&grid, None),
            "+-+-+\n|   |\n+ + +\n| | |\n+-+-+\n"
        );
    }

    // Tests the walk overlay marks the trail and head
    #[test]
    fn test_render_walk_overlay() {
        let mut grid = Grid::new(3, 1).unwrap();
        grid.mark_root(Cell::new(2, 0)).unwrap();
        let mut path = WalkPath::new(3, 1);
        path.append(Cell::new(0, 0), Direction::East).unwrap();

        let view = WalkView::new(&path, Cell::new(1, 0));
        assert!(view.on_trail(Cell::new(0, 0)));
        assert!(!view.on_trail(Cell::new(1, 0)));

        let rendered = render_ascii(&grid, Some(&view));
        assert_eq!(rendered.lines().nth(1), Some("|.|O| |"));
    }

    // Tests the summary line includes the seed only when known
    #[test]
    fn test_render_summary() {
        let grid = Grid::new(3, 2).unwrap();

        assert_eq!(render_summary(&grid, 4, Some(9)), "3x2 maze, 4 walks, seed 9");
        assert_eq!(render_summary(&grid, 4, None), "3x2 maze, 4 walks");
    }

    // Tests the animator draws one frame per step and per commit
    #[test]
    fn test_terminal_animator_frames() {
        let mut grid = Grid::new(2, 1).unwrap();
        grid.mark_root(Cell::new(1, 0)).unwrap();
        let mut path = WalkPath::new(2, 1);
        path.append(Cell::new(0, 0), Direction::East).unwrap();

        let mut animator = TerminalAnimator::new(Vec::new(), Duration::ZERO);
        animator.on_step(&grid, &path, Cell::new(1, 0)).unwrap();
        grid.mark_connected(Cell::new(0, 0), Direction::East).unwrap();
        animator.on_commit(&grid, path.steps()).unwrap();

        assert_eq!(animator.frames(), 2);
        let output = String::from_utf8_lossy(&animator.into_inner()).into_owned();
        assert!(output.contains("|.|O|"));
        assert!(output.contains("|   |"));
    }
}
