/// Picks which elevator receives a fresh hall call.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DispatchStrategy {
    /// Moving elevators that pass the floor first, then idle ones.
    FirstCapableThenIdle,
    /// Idle elevators first, then moving ones.
    IdleFirstThenCapable,
}

/// Picks which pending calls an elevator claims once its queue runs dry.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BackfillStrategy {
    FarthestFirst,
    DensityBased,
}

impl DispatchStrategy {
    pub fn as_string(self) -> String {
        match self {
            DispatchStrategy::FirstCapableThenIdle => String::from("first-capable-then-idle"),
            DispatchStrategy::IdleFirstThenCapable => String::from("idle-first-then-capable"),
        }
    }
}

impl BackfillStrategy {
    pub fn as_string(self) -> String {
        match self {
            BackfillStrategy::FarthestFirst => String::from("farthest-first"),
            BackfillStrategy::DensityBased => String::from("density-based"),
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrategyPair {
    pub dispatch: DispatchStrategy,
    pub backfill: BackfillStrategy,
}

impl StrategyPair {
    pub fn new(dispatch: DispatchStrategy, backfill: BackfillStrategy) -> Self {
        StrategyPair { dispatch, backfill }
    }

    /// The two pairings every simulation compares unless told otherwise.
    pub fn defaults() -> Vec<Self> {
        vec![
            StrategyPair::new(DispatchStrategy::FirstCapableThenIdle, BackfillStrategy::FarthestFirst),
            StrategyPair::new(DispatchStrategy::IdleFirstThenCapable, BackfillStrategy::DensityBased),
        ]
    }

    pub fn as_string(&self) -> String {
        format!("{} / {}", self.dispatch.as_string(), self.backfill.as_string())
    }
}

impl Default for StrategyPair {
    fn default() -> Self {
        StrategyPair::new(DispatchStrategy::FirstCapableThenIdle, BackfillStrategy::FarthestFirst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_pair_from_json() {
        let pair: StrategyPair = serde_json::from_str(
            r#"{"dispatch": "idle_first_then_capable", "backfill": "density_based"}"#,
        ).unwrap();
        assert_eq!(pair.dispatch, DispatchStrategy::IdleFirstThenCapable);
        assert_eq!(pair.backfill, BackfillStrategy::DensityBased);
    }

    #[test]
    fn test_default_pairs() {
        let pairs = StrategyPair::defaults();
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0], StrategyPair::default());
        assert_ne!(pairs[0], pairs[1]);
    }
}
