//! Tests for candidate enumeration and adjacency validation

#[cfg(test)]
mod tests {
    use crate::room;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use roomchain::algorithm::candidates::{
        Candidate, compatible_candidates, fits, shuffled_candidates,
    };
    use roomchain::algorithm::state::SearchState;
    use roomchain::catalog::RoomTemplate;
    use roomchain::spatial::{Coordinate, Direction, Door};
    use std::sync::Arc;

    fn cell(x: i32, y: i32) -> Coordinate {
        Coordinate::new(x, y)
    }

    fn door(x: i32, y: i32, direction: Direction) -> Door {
        Door::new(cell(x, y), direction)
    }

    fn pool() -> Vec<Arc<RoomTemplate>> {
        vec![
            Arc::new(room("corridor", &[Direction::West, Direction::East])),
            Arc::new(room("closet_s", &[Direction::South])),
            Arc::new(room("closet_w", &[Direction::West])),
            Arc::new(room("junction", &[Direction::West, Direction::North, Direction::South])),
        ]
    }

    /// Two-cell column with west doors on both cells
    fn tower() -> RoomTemplate {
        RoomTemplate::new(
            "tower",
            vec![cell(0, 0), cell(0, 1)],
            vec![door(0, 0, Direction::West), door(0, 1, Direction::West)],
        )
        .unwrap()
    }

    /// Two-cell start column opening east from the bottom cell, and optionally the top
    fn column_start(top_door: bool) -> SearchState {
        let mut doors = vec![door(0, 0, Direction::East)];
        if top_door {
            doors.push(door(0, 1, Direction::East));
        }
        let start = RoomTemplate::new("start", vec![cell(0, 0), cell(0, 1)], doors).unwrap();
        SearchState::seeded(Arc::new(start))
    }

    // Tests compatibility is by door direction only, one candidate per door
    #[test]
    fn test_compatible_candidates_face_back() {
        let candidates = compatible_candidates(&pool(), Direction::East);
        let ids: Vec<&str> = candidates.iter().map(|c| c.template.id()).collect();
        assert_eq!(ids, vec!["corridor", "closet_w", "junction"]);
        assert!(
            candidates
                .iter()
                .all(|c| c.connector.direction == Direction::West)
        );

        let towers = compatible_candidates(&[Arc::new(tower())], Direction::East);
        assert_eq!(towers.len(), 2);

        assert!(compatible_candidates(&[Arc::new(tower())], Direction::South).is_empty());
    }

    #[test]
    fn test_shuffle_is_seeded_permutation() {
        let mut first = StdRng::seed_from_u64(9);
        let mut second = StdRng::seed_from_u64(9);
        let a = shuffled_candidates(&pool(), Direction::North, &mut first);
        let b = shuffled_candidates(&pool(), Direction::North, &mut second);
        assert_eq!(a, b);

        let mut ids: Vec<&str> = a.iter().map(|c| c.template.id()).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec!["closet_s", "junction"]);
    }

    #[test]
    fn test_place_at_puts_connector_on_cell() {
        let candidate = Candidate {
            template: Arc::new(tower()),
            connector: door(0, 1, Direction::West),
        };
        let (piece, connector) = candidate.place_at(cell(1, 0));
        assert_eq!(connector, door(1, 0, Direction::West));
        assert_eq!(piece.origin(), cell(1, -1));
        assert!(piece.has_door(connector));
    }

    #[test]
    fn test_fits_rejects_occupied_cells() {
        let state = column_start(false);
        let candidate = Candidate {
            template: Arc::new(tower()),
            connector: door(0, 0, Direction::West),
        };
        let (piece, connector) = candidate.place_at(cell(0, 1));
        assert!(!fits(&state, &piece, connector));
    }

    // Tests a door facing an occupied cell needs a door facing back
    #[test]
    fn test_fits_rejects_door_into_wall() {
        let candidate = Candidate {
            template: Arc::new(tower()),
            connector: door(0, 0, Direction::West),
        };
        let (piece, connector) = candidate.place_at(cell(1, 0));

        assert!(!fits(&column_start(false), &piece, connector));
        assert!(fits(&column_start(true), &piece, connector));
    }

    // Tests an unresolved door facing into the piece must be met
    #[test]
    fn test_fits_rejects_unmet_frontier_door() {
        let plain = RoomTemplate::new(
            "plain",
            vec![cell(0, 0), cell(0, 1)],
            vec![door(0, 0, Direction::West)],
        )
        .unwrap();
        let candidate = Candidate {
            template: Arc::new(plain),
            connector: door(0, 0, Direction::West),
        };
        let (piece, connector) = candidate.place_at(cell(1, 0));

        assert!(fits(&column_start(false), &piece, connector));
        assert!(!fits(&column_start(true), &piece, connector));
    }
}
