use crate::team::Team;
use core::ops::{Index, IndexMut};
use derivative::Derivative;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// One value per team
#[derive(Derivative, Serialize, Deserialize)]
#[derivative(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct TealWhiteBundle<T> {
    pub teal: T,
    pub white: T,
}

impl<T> TealWhiteBundle<T> {
    pub fn new(teal: T, white: T) -> Self {
        Self { teal, white }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Team, &T)> {
        self.into_iter()
    }
}

impl<T> Index<Team> for TealWhiteBundle<T> {
    type Output = T;

    fn index(&self, team: Team) -> &Self::Output {
        match team {
            Team::Teal => &self.teal,
            Team::White => &self.white,
        }
    }
}

impl<T> IndexMut<Team> for TealWhiteBundle<T> {
    fn index_mut(&mut self, team: Team) -> &mut Self::Output {
        match team {
            Team::Teal => &mut self.teal,
            Team::White => &mut self.white,
        }
    }
}

impl<T: Display> Display for TealWhiteBundle<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Teal: {}, White: {}", self.teal, self.white)
    }
}

pub struct TealWhiteBundleIterator<'a, T> {
    bundle: &'a TealWhiteBundle<T>,
    index: usize,
}

impl<'a, T> Iterator for TealWhiteBundleIterator<'a, T> {
    type Item = (Team, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        let value = match self.index {
            0 => (Team::Teal, &self.bundle.teal),
            1 => (Team::White, &self.bundle.white),
            _ => return None,
        };

        self.index += 1;
        Some(value)
    }
}

impl<'a, T> IntoIterator for &'a TealWhiteBundle<T> {
    type Item = (Team, &'a T);
    type IntoIter = TealWhiteBundleIterator<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        TealWhiteBundleIterator {
            bundle: self,
            index: 0,
        }
    }
}

impl<T> IntoIterator for TealWhiteBundle<T> {
    type Item = (Team, T);
    type IntoIter = std::array::IntoIter<Self::Item, 2>;

    fn into_iter(self) -> Self::IntoIter {
        [(Team::Teal, self.teal), (Team::White, self.white)].into_iter()
    }
}

impl<T: Default> FromIterator<(Team, T)> for TealWhiteBundle<T> {
    fn from_iter<I: IntoIterator<Item = (Team, T)>>(iter: I) -> Self {
        let mut bundle = TealWhiteBundle::default();
        for (team, value) in iter {
            bundle[team] = value;
        }
        bundle
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_index() {
        let mut scores = TealWhiteBundle::new(3u8, 7);
        assert_eq!(scores[Team::Teal], 3);
        assert_eq!(scores[Team::White], 7);

        scores[Team::White] += 2;
        assert_eq!(scores, TealWhiteBundle::new(3, 9));
    }

    #[test]
    fn test_iter_order() {
        let scores = TealWhiteBundle::new(1u8, 2);
        let collected: Vec<_> = scores.iter().map(|(t, s)| (t, *s)).collect();
        assert_eq!(collected, vec![(Team::Teal, 1), (Team::White, 2)]);

        let owned: Vec<_> = scores.into_iter().collect();
        assert_eq!(owned, collected);
    }

    #[test]
    fn test_from_iter() {
        let bundle: TealWhiteBundle<u8> = [(Team::White, 4)].into_iter().collect();
        assert_eq!(bundle, TealWhiteBundle::new(0, 4));
    }

    #[test]
    fn test_display() {
        let scores = TealWhiteBundle::new(21u8, 19);
        assert_eq!(scores.to_string(), "Teal: 21, White: 19");
    }
}
