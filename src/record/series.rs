//! Time series accumulation
use std::collections::BTreeMap;

use gnss::prelude::SV;
use hifitime::Epoch;

use crate::{observable::Observable, observation::ObservationData, slot::Slot};

#[cfg(feature = "log")]
use log::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// [SatelliteSeries] is the complete time series of one satellite slot.
/// Every observable series has exactly one entry per epoch,
/// missing observations included.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SatelliteSeries {
    /// Satellite that was observed in this slot
    pub sv: SV,
    /// Sampling instants, shared by all observables
    pub epochs: Vec<Epoch>,
    /// Observations, indexed by [Observable]
    pub observations: BTreeMap<Observable, Vec<ObservationData>>,
}

impl SatelliteSeries {
    /// Number of epochs
    pub fn len(&self) -> usize {
        self.epochs.len()
    }
    /// True if this series does not contain a single epoch
    pub fn is_empty(&self) -> bool {
        self.epochs.is_empty()
    }
    /// Returns an iterator over all [Observable]s of this series
    pub fn observables(&self) -> impl Iterator<Item = &Observable> + '_ {
        self.observations.keys()
    }
    /// Returns series of given [Observable], if it exists
    pub fn observation(&self, observable: &str) -> Option<&[ObservationData]> {
        self.observations.get(observable).map(|series| series.as_slice())
    }
    /// Returns (epoch, value) pairs of given [Observable].
    /// Missing observations are None.
    /// ```
    /// use rinex2_obs::prelude::*;
    /// let rinex = Rinex::from_file("test_resources/OBS/V2/zeck0010.11o")
    ///     .unwrap();
    ///
    /// let g01 = rinex.record.get("00")
    ///     .unwrap();
    ///
    /// for (epoch, value) in g01.pairs("C1").unwrap() {
    ///     if let Some(value) = value {
    ///         println!("{} C1={}", epoch, value);
    ///     }
    /// }
    /// ```
    pub fn pairs(
        &self,
        observable: &str,
    ) -> Option<impl Iterator<Item = (Epoch, Option<f64>)> + '_> {
        let series = self.observations.get(observable)?;
        Some(
            self.epochs
                .iter()
                .zip(series.iter())
                .map(|(epoch, obs)| (*epoch, obs.value)),
        )
    }
    /// Returns values of given [Observable], in chronological order
    pub fn values(&self, observable: &str) -> Option<impl Iterator<Item = Option<f64>> + '_> {
        let series = self.observations.get(observable)?;
        Some(series.iter().map(|obs| obs.value))
    }
    /// Returns true if given [Observable] was observed at least once
    pub fn has_data(&self, observable: &str) -> bool {
        self.observations
            .get(observable)
            .map(|series| series.iter().any(|obs| !obs.is_missing()))
            .unwrap_or(false)
    }
}

/// Series of one slot, in construction
#[derive(Debug)]
struct SlotSeries {
    sv: SV,
    columns: Vec<Vec<ObservationData>>,
}

/// [SeriesAccumulator] batches decoded epochs into a fixed size window,
/// allocated once, and folds each complete window into per slot series.
pub(crate) struct SeriesAccumulator {
    observables: Vec<Observable>,
    slot_space: usize,
    window_size: usize,
    reference: Observable,
    /// Epochs of current window
    window_epochs: Vec<Epoch>,
    /// Current window: (epoch, slot, observable)
    window: Vec<ObservationData>,
    /// Satellites seen in current window, per slot
    window_vehicles: Vec<Option<SV>>,
    /// Folded epochs
    epochs: Vec<Epoch>,
    /// Folded series, per slot
    series: Vec<Option<SlotSeries>>,
}

impl SeriesAccumulator {
    pub fn new(
        observables: &[Observable],
        slot_space: usize,
        window_size: usize,
        reference: &Observable,
    ) -> Self {
        let window_size = window_size.max(1);
        let mut series = Vec::with_capacity(slot_space);
        series.resize_with(slot_space, || None);
        Self {
            slot_space,
            window_size,
            observables: observables.to_vec(),
            reference: reference.clone(),
            window_epochs: Vec::with_capacity(window_size),
            window: Vec::with_capacity(window_size * slot_space * observables.len()),
            window_vehicles: vec![None; slot_space],
            epochs: Vec::new(),
            series,
        }
    }

    fn num_obs(&self) -> usize {
        self.observables.len()
    }

    /// Opens a new epoch in current window and returns its
    /// (slot, observable) storage, initialized as missing.
    /// `satellites` and `slots` are given in order of appearance.
    pub fn next_row(
        &mut self,
        epoch: Epoch,
        satellites: &[Option<SV>],
        slots: &[Option<Slot>],
    ) -> &mut [ObservationData] {
        for (sv, slot) in satellites.iter().zip(slots.iter()) {
            if let (Some(sv), Some(slot)) = (sv, slot) {
                if let Some(vehicle) = self.window_vehicles.get_mut(slot.0) {
                    *vehicle = Some(*sv);
                }
            }
        }

        let row_size = self.slot_space * self.num_obs();
        let start = self.window.len();
        self.window
            .resize(start + row_size, ObservationData::default());
        self.window_epochs.push(epoch);
        &mut self.window[start..]
    }

    /// Concludes the epoch opened by [Self::next_row].
    /// Folds current window once it is complete.
    pub fn commit(&mut self) {
        if self.window_epochs.len() >= self.window_size {
            self.fold();
        }
    }

    /// Appends current window to the series
    fn fold(&mut self) {
        let num_epochs = self.window_epochs.len();
        if num_epochs == 0 {
            return;
        }
        let num_obs = self.num_obs();
        let past = self.epochs.len();
        let slot_space = self.slot_space;
        let window = &self.window;

        for slot in 0..slot_space {
            if self.series[slot].is_none() {
                if let Some(sv) = self.window_vehicles[slot] {
                    let mut columns = Vec::with_capacity(num_obs);
                    for _ in 0..num_obs {
                        let mut column = Vec::with_capacity(past + num_epochs);
                        column.resize(past, ObservationData::default());
                        columns.push(column);
                    }
                    self.series[slot] = Some(SlotSeries { sv, columns });
                }
            }
            if let Some(series) = &mut self.series[slot] {
                for (j, column) in series.columns.iter_mut().enumerate() {
                    column.extend(
                        (0..num_epochs).map(|e| window[(e * slot_space + slot) * num_obs + j]),
                    );
                }
            }
        }

        #[cfg(feature = "log")]
        debug!("folded {} epochs ({} total)", num_epochs, past + num_epochs);

        self.epochs.append(&mut self.window_epochs);
        self.window.clear();
        self.window_vehicles.iter_mut().for_each(|sv| *sv = None);
    }

    /// Returns true if this slot should be kept:
    /// reference observable was observed at least once.
    /// When the reference observable is not described,
    /// any observation will do.
    fn retain(&self, columns: &[Vec<ObservationData>]) -> bool {
        let has_data = |column: &Vec<ObservationData>| column.iter().any(|obs| !obs.is_missing());
        match self.observables.iter().position(|obs| *obs == self.reference) {
            Some(index) => columns.get(index).map(has_data).unwrap_or(false),
            None => columns.iter().any(has_data),
        }
    }

    /// Folds last (partial) window, drops slots without data
    /// and returns all series indexed by slot label.
    pub fn finish(mut self) -> BTreeMap<String, SatelliteSeries> {
        self.fold();

        let mut record = BTreeMap::new();
        let series = std::mem::take(&mut self.series);

        for (slot, series) in series.into_iter().enumerate() {
            let SlotSeries { sv, columns } = match series {
                Some(series) => series,
                None => continue,
            };
            if !self.retain(&columns) {
                #[cfg(feature = "log")]
                debug!("{} (slot {}): no {} observation", sv, slot, self.reference);
                continue;
            }
            let mut observations = BTreeMap::new();
            for (observable, column) in self.observables.iter().zip(columns.into_iter()) {
                observations.entry(observable.clone()).or_insert(column);
            }
            record.insert(
                Slot(slot).label(),
                SatelliteSeries {
                    sv,
                    epochs: self.epochs.clone(),
                    observations,
                },
            );
        }
        record
    }
}
