use super::{Cell, EngineError};

/// The eight rule variants supported by the simulation.
/// Each carries a fixed pair of birth/survival neighbor-count sets;
/// resolution by name happens once at configuration time, the per-step
/// path only ever matches on the enum.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Ruleset {
    #[default]
    Conway,
    HighLife,
    DayAndNight,
    Seeds,
    LifeWithoutDeath,
    Diamoeba,
    Replicator,
    Anneal,
}

impl Ruleset {
    /// All rules in registry order
    pub const ALL: [Ruleset; 8] = [
        Ruleset::Conway,
        Ruleset::HighLife,
        Ruleset::DayAndNight,
        Ruleset::Seeds,
        Ruleset::LifeWithoutDeath,
        Ruleset::Diamoeba,
        Ruleset::Replicator,
        Ruleset::Anneal,
    ];

    /// Name of the rule, as used for lookup
    pub const fn name(self) -> &'static str {
        match self {
            Ruleset::Conway => "Conway",
            Ruleset::HighLife => "HighLife",
            Ruleset::DayAndNight => "Day and Night",
            Ruleset::Seeds => "Seeds",
            Ruleset::LifeWithoutDeath => "Life without Death",
            Ruleset::Diamoeba => "Diamoeba",
            Ruleset::Replicator => "Replicator",
            Ruleset::Anneal => "Anneal",
        }
    }

    /// B/S notation, e.g. "B3/S23"
    pub const fn notation(self) -> &'static str {
        match self {
            Ruleset::Conway => "B3/S23",
            Ruleset::HighLife => "B36/S23",
            Ruleset::DayAndNight => "B3678/S34678",
            Ruleset::Seeds => "B2/S",
            Ruleset::LifeWithoutDeath => "B3/S012345678",
            Ruleset::Diamoeba => "B35678/S5678",
            Ruleset::Replicator => "B1357/S1357",
            Ruleset::Anneal => "B4678/S35678",
        }
    }

    /// Neighbor counts that bring a dead cell to life
    pub const fn birth(self) -> &'static [u8] {
        match self {
            Ruleset::Conway => &[3],
            Ruleset::HighLife => &[3, 6],
            Ruleset::DayAndNight => &[3, 6, 7, 8],
            Ruleset::Seeds => &[2],
            Ruleset::LifeWithoutDeath => &[3],
            Ruleset::Diamoeba => &[3, 5, 6, 7, 8],
            Ruleset::Replicator => &[1, 3, 5, 7],
            Ruleset::Anneal => &[4, 6, 7, 8],
        }
    }

    /// Neighbor counts that keep a live cell alive
    pub const fn survival(self) -> &'static [u8] {
        match self {
            Ruleset::Conway => &[2, 3],
            Ruleset::HighLife => &[2, 3],
            Ruleset::DayAndNight => &[3, 4, 6, 7, 8],
            Ruleset::Seeds => &[],
            Ruleset::LifeWithoutDeath => &[0, 1, 2, 3, 4, 5, 6, 7, 8],
            Ruleset::Diamoeba => &[5, 6, 7, 8],
            Ruleset::Replicator => &[1, 3, 5, 7],
            Ruleset::Anneal => &[3, 5, 6, 7, 8],
        }
    }

    /// Apply the rule to compute the next state of one cell
    pub fn evolve(self, current: Cell, neighbors: u8) -> Cell {
        let counts = if current.is_alive() {
            self.survival()
        } else {
            self.birth()
        };
        Cell::from_alive(counts.contains(&neighbors))
    }

    /// Resolve a rule by its registry name
    pub fn lookup(name: &str) -> Result<Ruleset, EngineError> {
        Ruleset::ALL
            .into_iter()
            .find(|rule| rule.name() == name)
            .ok_or_else(|| EngineError::UnknownRule(name.to_owned()))
    }

    /// Registry names in order, for populating a rule selector
    pub fn names() -> impl Iterator<Item = &'static str> {
        Ruleset::ALL.into_iter().map(Ruleset::name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conway_rules() {
        let rule = Ruleset::Conway;

        // Underpopulation
        assert_eq!(rule.evolve(Cell::Alive, 0), Cell::Dead);
        assert_eq!(rule.evolve(Cell::Alive, 1), Cell::Dead);

        // Survival
        assert_eq!(rule.evolve(Cell::Alive, 2), Cell::Alive);
        assert_eq!(rule.evolve(Cell::Alive, 3), Cell::Alive);

        // Overpopulation
        assert_eq!(rule.evolve(Cell::Alive, 4), Cell::Dead);

        // Reproduction
        assert_eq!(rule.evolve(Cell::Dead, 3), Cell::Alive);
    }

    #[test]
    fn test_highlife_reproduction() {
        let rule = Ruleset::HighLife;

        assert_eq!(rule.evolve(Cell::Dead, 6), Cell::Alive);
        assert_eq!(rule.evolve(Cell::Dead, 3), Cell::Alive);
        assert_eq!(rule.evolve(Cell::Dead, 2), Cell::Dead);
    }

    #[test]
    fn test_seeds_never_survives() {
        let rule = Ruleset::Seeds;

        for neighbors in 0..=8 {
            assert_eq!(rule.evolve(Cell::Alive, neighbors), Cell::Dead);
        }
        assert_eq!(rule.evolve(Cell::Dead, 2), Cell::Alive);
        assert_eq!(rule.evolve(Cell::Dead, 3), Cell::Dead);
    }

    #[test]
    fn test_life_without_death_always_survives() {
        let rule = Ruleset::LifeWithoutDeath;

        for neighbors in 0..=8 {
            assert_eq!(rule.evolve(Cell::Alive, neighbors), Cell::Alive);
        }
    }

    #[test]
    fn test_no_rule_births_at_zero_neighbors() {
        for rule in Ruleset::ALL {
            assert_eq!(rule.evolve(Cell::Dead, 0), Cell::Dead);
        }
    }

    #[test]
    fn test_lookup_by_name() {
        assert_eq!(Ruleset::lookup("Conway").unwrap(), Ruleset::Conway);
        assert_eq!(Ruleset::lookup("Day and Night").unwrap(), Ruleset::DayAndNight);
        assert!(matches!(
            Ruleset::lookup("Brian's Brain"),
            Err(EngineError::UnknownRule(_))
        ));
    }

    #[test]
    fn test_registry_has_eight_unique_names() {
        let names: Vec<_> = Ruleset::names().collect();
        assert_eq!(names.len(), 8);
        let mut unique = names.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(names.len(), unique.len());
    }
}
