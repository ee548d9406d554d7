//! Tests for cell occupancy and the unresolved door frontier

#[cfg(test)]
mod tests {
    use roomchain::spatial::{Coordinate, Direction, Door, Frontier, Occupancy};

    fn door(x: i32, y: i32, direction: Direction) -> Door {
        Door::new(Coordinate::new(x, y), direction)
    }

    #[test]
    fn test_claim_and_release() {
        let mut occupancy = Occupancy::new();
        let footprint = [Coordinate::new(0, 0), Coordinate::new(1, 0)];

        assert!(occupancy.claim(&footprint, 3));
        assert_eq!(occupancy.len(), 2);
        assert_eq!(occupancy.owner(Coordinate::new(1, 0)), Some(3));
        assert!(!occupancy.contains(Coordinate::new(2, 0)));

        occupancy.release(&footprint);
        assert!(occupancy.is_empty());
    }

    // Tests a partially overlapping footprint claims nothing
    #[test]
    fn test_claim_is_all_or_nothing() {
        let mut occupancy = Occupancy::new();
        assert!(occupancy.claim(&[Coordinate::new(1, 0)], 0));

        let overlapping = [
            Coordinate::new(0, 0),
            Coordinate::new(1, 0),
            Coordinate::new(2, 0),
        ];
        assert!(!occupancy.claim(&overlapping, 1));
        assert_eq!(occupancy.len(), 1);
        assert!(!occupancy.contains(Coordinate::new(0, 0)));
        assert_eq!(occupancy.owner(Coordinate::new(1, 0)), Some(0));
    }

    #[test]
    fn test_cells_lists_every_claim() {
        let mut occupancy = Occupancy::new();
        assert!(occupancy.claim(&[Coordinate::new(0, 0), Coordinate::new(0, 1)], 0));

        let mut cells: Vec<Coordinate> = occupancy.cells().collect();
        cells.sort();
        assert_eq!(cells, vec![Coordinate::new(0, 0), Coordinate::new(0, 1)]);
    }

    // Tests take followed by restore is an exact inverse at every index
    #[test]
    fn test_take_and_restore_roundtrip() {
        let mut frontier = Frontier::new();
        frontier.extend([
            door(0, 0, Direction::North),
            door(0, 0, Direction::East),
            door(1, 0, Direction::South),
        ]);
        let original = frontier.clone();

        for index in 0..original.len() {
            let taken = frontier.take(index).unwrap();
            assert_eq!(Some(taken), original.get(index));
            assert_eq!(frontier.len(), 2);
            frontier.restore(index, taken);
            assert_eq!(frontier, original);
        }

        assert_eq!(frontier.take(3), None);
        assert_eq!(frontier, original);
    }

    // Tests a mismatched undo surfaces instead of silently appending
    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "past frontier length")]
    fn test_restore_past_tail_is_rejected() {
        let mut frontier = Frontier::new();
        frontier.extend([door(0, 0, Direction::North)]);
        frontier.restore(3, door(1, 0, Direction::East));
    }

    #[test]
    fn test_truncate_tail_drops_newest() {
        let mut frontier = Frontier::new();
        frontier.extend([door(0, 0, Direction::North), door(0, 0, Direction::East)]);
        frontier.extend([door(1, 0, Direction::East)]);

        frontier.truncate_tail(1);
        assert_eq!(frontier.len(), 2);
        assert_eq!(frontier.position(door(1, 0, Direction::East)), None);
        assert_eq!(frontier.position(door(0, 0, Direction::East)), Some(1));

        frontier.truncate_tail(5);
        assert!(frontier.is_empty());
    }

    #[test]
    fn test_iter_runs_head_to_tail() {
        let mut frontier = Frontier::new();
        let doors = [door(0, 0, Direction::North), door(2, 2, Direction::West)];
        frontier.extend(doors);

        let forward: Vec<Door> = frontier.iter().copied().collect();
        assert_eq!(forward, doors);
        assert_eq!(frontier.iter().next_back(), Some(&doors[1]));
    }
}
