//! Step functions from ratios and coefficients to severity tiers, plus the copy each tier carries.

/// Budgets below this are too small to band.
pub(crate) const MINIMUM_BUDGET: i64 = 10_000;

const WASTE_BANDS: [f64; 3] = [20.0, 40.0, 60.0];
const BUDGET_USAGE_BANDS: [f64; 3] = [30.0, 60.0, 90.0];

/// Severity of the drill instructor's mood.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub(crate) enum Tier {
    Calm,
    Concerned,
    Annoyed,
    Angry,
}

impl Tier {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::Calm => "Calm",
            Self::Concerned => "Concerned",
            Self::Annoyed => "Annoyed",
            Self::Angry => "Angry",
        }
    }

    /// Background color of the speech bubble.
    pub(crate) fn accent(&self) -> &'static str {
        match self {
            Self::Calm => "#D4EDDA",
            Self::Concerned => "#FFF3CD",
            Self::Annoyed | Self::Angry => "#F8D7DA",
        }
    }

    /// Upper bounds are inclusive: exactly 20.0 is still the first band.
    fn from_bands(value: f64, bands: &[f64; 3]) -> Self {
        if value <= bands[0] {
            Self::Calm
        } else if value <= bands[1] {
            Self::Concerned
        } else if value <= bands[2] {
            Self::Annoyed
        } else {
            Self::Angry
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ── Waste ─────────────────────────────────────────────────────

pub(crate) fn waste_tier(waste_pct: f64) -> Tier {
    Tier::from_bands(waste_pct, &WASTE_BANDS)
}

/// What the instructor says about a waste share. The harsher tiers name the
/// biggest waste categories.
pub(crate) fn waste_message(tier: Tier, top_waste_minors: &[String]) -> String {
    let culprits = match top_waste_minors {
        [] => "Other".to_string(),
        [one] => one.clone(),
        [first, second, ..] => format!("{first}, {second}"),
    };
    match tier {
        Tier::Calm => "A very healthy spending life. Keep it up!".to_string(),
        Tier::Concerned => "Needless spending is creeping up. Watch yourself.".to_string(),
        Tier::Annoyed => format!("You are about to cross the line. Cut back on {culprits}!"),
        Tier::Angry => format!("Get a grip! Is this really the time to spend on {culprits}?"),
    }
}

// ── Budget ────────────────────────────────────────────────────

pub(crate) fn budget_usage_tier(usage_pct: f64) -> Tier {
    Tier::from_bands(usage_pct, &BUDGET_USAGE_BANDS)
}

/// Budget-entry state. Only saving a new budget moves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BudgetState {
    Unset,
    /// A positive budget below [`MINIMUM_BUDGET`]; usage is not banded.
    Degenerate,
    Active(Tier),
}

pub(crate) fn budget_state(budget: i64, usage_pct: f64) -> BudgetState {
    if budget <= 0 {
        BudgetState::Unset
    } else if budget < MINIMUM_BUDGET {
        BudgetState::Degenerate
    } else {
        BudgetState::Active(budget_usage_tier(usage_pct))
    }
}

impl BudgetState {
    pub(crate) fn accent(&self) -> &'static str {
        match self {
            Self::Unset | Self::Degenerate => "#F8F9FA",
            Self::Active(tier) => tier.accent(),
        }
    }

    pub(crate) fn message(&self) -> &'static str {
        match self {
            Self::Unset => "No monthly budget yet. Set one with `walletcamp budget set <amount>`.",
            Self::Degenerate => "A budget under 10,000 won is not a plan. Set a real one.",
            Self::Active(Tier::Calm) => "Well inside the budget. Stay on course.",
            Self::Active(Tier::Concerned) => "A good part of the budget is gone. Pace yourself.",
            Self::Active(Tier::Annoyed) => "The budget is running dry. Stop the small purchases now.",
            Self::Active(Tier::Angry) => "Budget blown or nearly blown! Not one more won on waste!",
        }
    }
}

impl std::fmt::Display for BudgetState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unset => write!(f, "Unset"),
            Self::Degenerate => write!(f, "Degenerate"),
            Self::Active(tier) => write!(f, "Active ({tier})"),
        }
    }
}

// ── Correlation ───────────────────────────────────────────────

/// How monthly waste moves with monthly total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CorrelationTier {
    StrongPositive,
    ModeratePositive,
    Negligible,
    Inverse,
    InsufficientData,
}

pub(crate) fn correlation_tier(coefficient: Option<f64>) -> CorrelationTier {
    match coefficient {
        None => CorrelationTier::InsufficientData,
        Some(r) if r >= 0.7 => CorrelationTier::StrongPositive,
        Some(r) if r >= 0.3 => CorrelationTier::ModeratePositive,
        Some(r) if r > -0.3 => CorrelationTier::Negligible,
        Some(_) => CorrelationTier::Inverse,
    }
}

impl CorrelationTier {
    pub(crate) fn accent(&self) -> &'static str {
        match self {
            Self::StrongPositive => "#FFEAEA",
            Self::ModeratePositive => "#FFF3CD",
            Self::Negligible => "#D4EDDA",
            Self::Inverse => "#E2E3E5",
            Self::InsufficientData => "#F8F9FA",
        }
    }

    /// `months` is how many monthly points the coefficient was computed from.
    pub(crate) fn message(&self, coefficient: Option<f64>, months: usize) -> String {
        let r = coefficient.map_or_else(|| "n/a".to_string(), |r| format!("{r:.2}"));
        match self {
            Self::StrongPositive => format!(
                "Waste is directly blowing up your total: correlation {r}! Rein in the impulses now!"
            ),
            Self::ModeratePositive => format!(
                "When waste rises your total follows: correlation {r}. This is a warning."
            ),
            Self::Negligible => format!(
                "Waste and total barely move together: correlation {r}. Nothing to report. Check your fixed costs."
            ),
            Self::Inverse => format!(
                "Total rises while waste falls: inverse correlation {r}. Odd. This needs a closer look!"
            ),
            Self::InsufficientData if months < 2 => format!(
                "Not enough data. At least two months of records are needed, found {months}."
            ),
            Self::InsufficientData => format!(
                "Waste or total stayed flat across {months} months. Nothing moves, so nothing to compare."
            ),
        }
    }
}

impl std::fmt::Display for CorrelationTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::StrongPositive => "Strong positive",
            Self::ModeratePositive => "Moderate positive",
            Self::Negligible => "Negligible",
            Self::Inverse => "Inverse",
            Self::InsufficientData => "Insufficient data",
        };
        write!(f, "{label}")
    }
}
