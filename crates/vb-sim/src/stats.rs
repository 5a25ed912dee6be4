//! Aggregate counts produced by one step.

/// The five tallies reported for a step.
///
/// Counts are taken per agent during its own vital-dynamics update, in
/// population order, so they describe the state right after that agent was
/// processed.  A human cured this step is counted both as infected and as
/// resistant; a human who dies this step after the susceptible check is
/// counted at most once.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct StepStatistics {
    pub human_infected:    u64,
    pub human_resistant:   u64,
    pub human_susceptible: u64,
    pub mosquito_infected: u64,
    pub mosquito_hungry:   u64,
}
