use super::scroll::ZONE_COUNT;

/// The five narrative stages of the sunrise tree, bottom to top.
/// Ordering is meaningful: roots come first, the crown last.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    Roots,
    Trunk,
    Branches,
    Leaves,
    Crown,
}

impl Zone {
    pub const ALL: [Zone; ZONE_COUNT] = [
        Zone::Roots,
        Zone::Trunk,
        Zone::Branches,
        Zone::Leaves,
        Zone::Crown,
    ];

    pub fn index(self) -> usize {
        match self {
            Zone::Roots => 0,
            Zone::Trunk => 1,
            Zone::Branches => 2,
            Zone::Leaves => 3,
            Zone::Crown => 4,
        }
    }

    pub fn from_index(index: usize) -> Option<Zone> {
        Zone::ALL.get(index).copied()
    }
}

/// Visual weight of a zone relative to the active one. Three fixed
/// presentation tiers; the styling jumps between them in discrete steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    Past,
    Current,
    Future,
}

impl Emphasis {
    pub fn for_zone(zone_index: usize, active_index: usize) -> Emphasis {
        if zone_index < active_index {
            Emphasis::Past
        } else if zone_index == active_index {
            Emphasis::Current
        } else {
            Emphasis::Future
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Emphasis::Past => "past",
            Emphasis::Current => "current",
            Emphasis::Future => "future",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_roundtrips() {
        for (i, zone) in Zone::ALL.iter().enumerate() {
            assert_eq!(zone.index(), i);
            assert_eq!(Zone::from_index(i), Some(*zone));
        }
        assert_eq!(Zone::from_index(ZONE_COUNT), None);
    }

    #[test]
    fn test_exactly_one_current() {
        for active in 0..ZONE_COUNT {
            let tiers: Vec<Emphasis> = (0..ZONE_COUNT)
                .map(|i| Emphasis::for_zone(i, active))
                .collect();
            let current = tiers.iter().filter(|e| **e == Emphasis::Current).count();
            assert_eq!(current, 1, "active={active}");
            for (i, tier) in tiers.iter().enumerate() {
                if i < active {
                    assert_eq!(*tier, Emphasis::Past);
                } else if i > active {
                    assert_eq!(*tier, Emphasis::Future);
                }
            }
        }
    }
}
