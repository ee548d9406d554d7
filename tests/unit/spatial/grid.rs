//! Tests for coordinates, directions and door connectors

#[cfg(test)]
mod tests {
    use roomchain::spatial::{Coordinate, Direction, Door};

    #[test]
    fn test_opposite_is_an_involution() {
        for direction in Direction::ALL {
            assert_ne!(direction.opposite(), direction);
            assert_eq!(direction.opposite().opposite(), direction);

            let [dx, dy] = direction.offset();
            let [ox, oy] = direction.opposite().offset();
            assert_eq!((dx + ox, dy + oy), (0, 0));
        }
    }

    // Tests that north grows y and east grows x
    #[test]
    fn test_step_follows_axis_convention() {
        let origin = Coordinate::ORIGIN;
        assert_eq!(origin.step(Direction::North), Coordinate::new(0, 1));
        assert_eq!(origin.step(Direction::South), Coordinate::new(0, -1));
        assert_eq!(origin.step(Direction::East), Coordinate::new(1, 0));
        assert_eq!(origin.step(Direction::West), Coordinate::new(-1, 0));
    }

    #[test]
    fn test_coordinate_arithmetic() {
        let a = Coordinate::new(3, -2);
        let b = Coordinate::new(-1, 5);
        assert_eq!(a + b, Coordinate::new(2, 3));
        assert_eq!(a - b, Coordinate::new(4, -7));
        assert_eq!((a - b) + b, a);
    }

    // Tests the mate sits on the target cell facing back
    #[test]
    fn test_door_target_and_mate() {
        let door = Door::new(Coordinate::new(2, 3), Direction::West);
        assert_eq!(door.target(), Coordinate::new(1, 3));
        assert_eq!(
            door.mate(),
            Door::new(Coordinate::new(1, 3), Direction::East)
        );
        assert_eq!(door.mate().mate(), door);
        assert_eq!(door.mate().target(), door.at);
    }

    #[test]
    fn test_door_translation_keeps_direction() {
        let door = Door::new(Coordinate::new(1, 0), Direction::North);
        let moved = door.translated(Coordinate::new(-4, 7));
        assert_eq!(moved.at, Coordinate::new(-3, 7));
        assert_eq!(moved.direction, Direction::North);
    }

    #[test]
    fn test_vertical_axis() {
        assert!(Direction::North.is_vertical());
        assert!(Direction::South.is_vertical());
        assert!(!Direction::East.is_vertical());
        assert!(!Direction::West.is_vertical());
    }

    // Tests the compact forms used by catalog files
    #[test]
    fn test_serde_forms() {
        let json = serde_json::to_string(&Coordinate::new(1, -2)).unwrap();
        assert_eq!(json, "[1,-2]");

        let json = serde_json::to_string(&Direction::South).unwrap();
        assert_eq!(json, "\"south\"");

        let door: Door = serde_json::from_str(r#"{"at": [4, 5], "direction": "east"}"#).unwrap();
        assert_eq!(door, Door::new(Coordinate::new(4, 5), Direction::East));

        assert!(serde_json::from_str::<Direction>("\"up\"").is_err());
    }

    #[test]
    fn test_display() {
        let door = Door::new(Coordinate::new(0, -1), Direction::East);
        assert_eq!(door.to_string(), "(0, -1) east");
    }
}
