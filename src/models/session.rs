use crate::models::filter::FilterCriteria;
use crate::models::location::Coordinate;
use crate::models::restaurant::Restaurant;

/// The one discovery session the server tracks: the resolved coordinate, the
/// latest result set and the active refinement criteria. Every search replaces
/// the whole restaurant list, nothing is merged. The filtered view is always
/// recomputed from `restaurants` and `criteria`, never stored here.
#[derive(Default)]
pub struct DiscoverySession {
    pub coordinate: Option<Coordinate>,
    pub restaurants: Vec<Restaurant>,
    pub criteria: FilterCriteria,
    search_seq: u64,
}

impl DiscoverySession {
    /// Claims a sequence number for a search about to be dispatched. A later
    /// dispatch always claims a higher number.
    pub fn begin_search(&mut self) -> u64 {
        self.search_seq += 1;
        self.search_seq
    }

    /// Replaces the result set, unless a newer search was dispatched after
    /// `seq` was claimed. Returns whether the results were applied, so a slow
    /// stale response cannot overwrite a fresher one.
    pub fn commit_results(&mut self, seq: u64, restaurants: Vec<Restaurant>) -> bool {
        if seq != self.search_seq {
            return false;
        }
        self.restaurants = restaurants;
        true
    }
}
