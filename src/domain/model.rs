use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    /// Latitude in [-90, 90], longitude in [-180, 180].
    pub fn in_bounds(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }
}

/// One roster entry. `coordinate` is `None` when the location never
/// resolved; such members are excluded from ranking but stay on the
/// roster so the caller can surface them.
#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    pub name: String,
    pub location: String,
    pub coordinate: Option<Coordinate>,
}

/// Insertion-ordered collection of members keyed by name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Roster {
    members: Vec<Member>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites by name. An overwritten member keeps its
    /// original insertion position; only the payload is replaced.
    pub fn add(&mut self, member: Member) {
        match self.members.iter_mut().find(|m| m.name == member.name) {
            Some(slot) => *slot = member,
            None => self.members.push(member),
        }
    }

    /// Removing an unknown name is a no-op.
    pub fn remove(&mut self, name: &str) {
        self.members.retain(|m| m.name != name);
    }

    pub fn get(&self, name: &str) -> Option<&Member> {
        self.members.iter().find(|m| m.name == name)
    }

    pub fn clear(&mut self) {
        self.members.clear();
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Member> {
        self.members.iter()
    }

    /// Deep copy with copy-on-read semantics: mutating the live roster
    /// afterwards does not affect the snapshot.
    pub fn snapshot(&self) -> Roster {
        self.clone()
    }

    pub fn resolved_count(&self) -> usize {
        self.members
            .iter()
            .filter(|m| m.coordinate.is_some())
            .count()
    }
}

/// The four directional flows an update order can follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    EastToWest,
    WestToEast,
    NorthToSouth,
    SouthToNorth,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::EastToWest,
        Direction::WestToEast,
        Direction::NorthToSouth,
        Direction::SouthToNorth,
    ];

    /// Scalar used for ranking: longitude for east/west flows, latitude
    /// for north/south flows. Raw longitude is used as-is; ordering does
    /// not wrap across the antimeridian.
    pub fn axis_value(&self, coordinate: &Coordinate) -> f64 {
        match self {
            Direction::EastToWest | Direction::WestToEast => coordinate.longitude,
            Direction::NorthToSouth | Direction::SouthToNorth => coordinate.latitude,
        }
    }

    /// Higher longitude is further east, higher latitude further north.
    pub fn is_descending(&self) -> bool {
        matches!(self, Direction::EastToWest | Direction::NorthToSouth)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::EastToWest => "East to West",
            Direction::WestToEast => "West to East",
            Direction::NorthToSouth => "North to South",
            Direction::SouthToNorth => "South to North",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RankedMember {
    /// 1-based position in the update order.
    pub rank: usize,
    pub member: Member,
}

/// Derived per request, never stored. `skipped` lists members that had
/// no resolved coordinate, in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RankedOrder {
    pub entries: Vec<RankedMember>,
    pub skipped: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(name: &str, coordinate: Option<Coordinate>) -> Member {
        Member {
            name: name.to_string(),
            location: format!("{} town", name),
            coordinate,
        }
    }

    #[test]
    fn test_add_overwrites_in_place() {
        let mut roster = Roster::new();
        roster.add(member("Alice", None));
        roster.add(member("Bob", None));
        roster.add(Member {
            name: "Alice".to_string(),
            location: "Dayton, OH".to_string(),
            coordinate: Some(Coordinate {
                latitude: 39.76,
                longitude: -84.19,
            }),
        });

        assert_eq!(roster.len(), 2);
        let names: Vec<&str> = roster.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Alice", "Bob"]);
        assert_eq!(roster.get("Alice").unwrap().location, "Dayton, OH");
    }

    #[test]
    fn test_remove_unknown_name_is_noop() {
        let mut roster = Roster::new();
        roster.add(member("Alice", None));
        roster.remove("Nobody");
        assert_eq!(roster.len(), 1);
        roster.remove("Alice");
        assert!(roster.is_empty());
    }

    #[test]
    fn test_snapshot_is_isolated_from_later_mutation() {
        let mut roster = Roster::new();
        roster.add(member("Alice", None));
        let snapshot = roster.snapshot();
        roster.add(member("Bob", None));
        roster.remove("Alice");

        assert_eq!(snapshot.len(), 1);
        assert!(snapshot.get("Alice").is_some());
    }

    #[test]
    fn test_resolved_count_ignores_unresolved() {
        let mut roster = Roster::new();
        roster.add(member("Alice", None));
        roster.add(member(
            "Bob",
            Some(Coordinate {
                latitude: 47.6,
                longitude: -122.3,
            }),
        ));
        assert_eq!(roster.resolved_count(), 1);
    }

    #[test]
    fn test_coordinate_bounds() {
        assert!(Coordinate {
            latitude: 90.0,
            longitude: -180.0
        }
        .in_bounds());
        assert!(!Coordinate {
            latitude: 91.0,
            longitude: 0.0
        }
        .in_bounds());
        assert!(!Coordinate {
            latitude: 0.0,
            longitude: 180.5
        }
        .in_bounds());
    }
}
