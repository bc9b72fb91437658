use crate::*;
use rand::Rng;

/// Every [`Experiment`] played back to back from one random source.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Study(Vec<(Experiment, Series)>);

impl Study {
    /// Plays all experiments with the rng described by `settings`.
    pub fn run(settings: &Settings) -> Result<Self, AuctionError> {
        Self::run_with(settings, &mut settings.rng())
    }
    /// Plays all experiments in [`Experiment::all`] order, sharing `rng`.
    pub fn run_with<R>(settings: &Settings, rng: &mut R) -> Result<Self, AuctionError>
    where
        R: Rng + ?Sized,
    {
        Experiment::all()
            .into_iter()
            .map(|experiment| {
                log::info!("experiment: {}", experiment);
                Driver::from(experiment.settings(settings))
                    .run(rng)
                    .map(|series| (experiment, series))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
    pub fn series(&self, experiment: Experiment) -> Option<&Series> {
        self.0
            .iter()
            .find(|(e, _)| *e == experiment)
            .map(|(_, series)| series)
    }
    pub fn experiments(&self) -> impl Iterator<Item = &(Experiment, Series)> + '_ {
        self.0.iter()
    }
    /// Every generated pool across experiments, in play order.
    pub fn pools(&self) -> impl Iterator<Item = &Pool> + '_ {
        self.0.iter().flat_map(|(_, series)| series.pools())
    }
}
