use derivative::Derivative;
use enum_iterator::Sequence;
use serde::{Deserialize, Serialize};

#[derive(Derivative, Serialize, Deserialize, Sequence)]
#[derivative(Debug, Default, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Team {
    #[derivative(Default)]
    Teal,
    White,
}

impl Team {
    pub fn other(self) -> Self {
        match self {
            Self::Teal => Self::White,
            Self::White => Self::Teal,
        }
    }
}

impl core::fmt::Display for Team {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match *self {
            Self::Teal => write!(f, "Teal"),
            Self::White => write!(f, "White"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_other() {
        assert_eq!(Team::Teal.other(), Team::White);
        assert_eq!(Team::White.other(), Team::Teal);
        assert_eq!(Team::Teal.other().other(), Team::Teal);
    }

    #[test]
    fn test_display() {
        assert_eq!(Team::Teal.to_string(), "Teal");
        assert_eq!(Team::White.to_string().to_uppercase(), "WHITE");
    }

    #[test]
    fn test_all_teams() {
        let teams: Vec<_> = enum_iterator::all::<Team>().collect();
        assert_eq!(teams, vec![Team::Teal, Team::White]);
    }
}
