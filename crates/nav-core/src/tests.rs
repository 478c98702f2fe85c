//! Unit tests for nav-core primitives.

#[cfg(test)]
mod ids {
    use crate::{AgentId, LandmarkId};

    #[test]
    fn index_matches_inner() {
        let id = AgentId(42);
        assert_eq!(id.index(), 42);
    }

    #[test]
    fn ordering() {
        assert!(AgentId(0) < AgentId(1));
        assert!(LandmarkId(100) > LandmarkId(99));
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(AgentId::INVALID.0, u32::MAX);
        assert_eq!(LandmarkId::INVALID.0, u32::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
    }
}

#[cfg(test)]
mod pos {
    use crate::Coord;

    #[test]
    fn zero_distance() {
        let p = Coord::new(10, 64, -3);
        assert_eq!(p.dist_sq(p), 0);
    }

    #[test]
    fn axis_distances() {
        let origin = Coord::new(0, 0, 0);
        assert_eq!(origin.dist_sq(Coord::new(3, 0, 0)), 9);
        assert_eq!(origin.dist_sq(Coord::new(0, -4, 0)), 16);
        assert_eq!(origin.dist_sq(Coord::new(3, 4, 0)), 25);
        assert_eq!(origin.dist_sq(Coord::new(1, 2, 2)), 9);
    }

    #[test]
    fn symmetric() {
        let a = Coord::new(12, 70, -44);
        let b = Coord::new(-9, 11, 105);
        assert_eq!(a.dist_sq(b), b.dist_sq(a));
    }

    #[test]
    fn world_bound_coordinates_do_not_overflow() {
        let a = Coord::new(-30_000_000, -64, -30_000_000);
        let b = Coord::new(30_000_000, 320, 30_000_000);
        let span = 60_000_000i64;
        assert!(a.dist_sq(b) >= 2 * span * span);
    }

    #[test]
    fn with_y_replaces_only_y() {
        let p = Coord::new(5, 70, 9).with_y(30);
        assert_eq!(p, Coord::new(5, 30, 9));
    }

    #[test]
    fn display() {
        assert_eq!(Coord::new(1, -2, 3).to_string(), "(1, -2, 3)");
    }
}

#[cfg(test)]
mod time {
    use crate::Tick;

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.offset(3), Tick(13));
    }

    #[test]
    fn advance() {
        let mut t = Tick::ZERO;
        t.advance();
        t.advance();
        assert_eq!(t, Tick(2));
    }

    #[test]
    fn display() {
        assert_eq!(Tick(9).to_string(), "T9");
    }
}
