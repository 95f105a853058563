use super::ExpenseRecord;

/// What an expense says about the person who made it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub(crate) enum Tag {
    Impulse,
    Laziness,
    /// Fixed cost of staying alive: rent, bills, insurance.
    Breath,
    Growth,
    Neutral,
}

impl Tag {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::Impulse => "Impulse",
            Self::Laziness => "Laziness",
            Self::Breath => "Breath",
            Self::Growth => "Growth",
            Self::Neutral => "Neutral",
        }
    }

    pub(crate) fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "impulse" => Some(Self::Impulse),
            "laziness" | "lazy" => Some(Self::Laziness),
            "breath" | "fixed" => Some(Self::Breath),
            "growth" => Some(Self::Growth),
            "neutral" => Some(Self::Neutral),
            _ => None,
        }
    }

    pub(crate) fn all() -> &'static [Tag] {
        &[
            Self::Impulse,
            Self::Laziness,
            Self::Breath,
            Self::Growth,
            Self::Neutral,
        ]
    }

    /// Waste is Impulse plus Laziness.
    pub(crate) fn is_waste(&self) -> bool {
        matches!(self, Self::Impulse | Self::Laziness)
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Tag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| {
            let names: Vec<&str> = Self::all().iter().map(|t| t.as_str()).collect();
            format!("unknown tag '{s}', expected one of {}", names.join(", "))
        })
    }
}

/// A record seen through the classification table. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ReinterpretedExpense {
    pub(crate) record: ExpenseRecord,
    pub(crate) tag: Tag,
}

impl ReinterpretedExpense {
    pub(crate) fn cost(&self) -> i64 {
        self.record.cost
    }
}
