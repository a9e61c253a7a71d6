use crate::model::WeatherSnapshot;

/// Handle returned by [`DisplayState::subscribe`], used to unsubscribe on
/// view teardown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type CoordObserver = Box<dyn FnMut(f64, f64)>;

/// The widget's one piece of shared mutable state: the last successful
/// snapshot, plus the observers watching its coordinate pair.
///
/// Starts empty and is only ever replaced wholesale by a successful fetch.
/// Failed fetches never touch it (stale-if-error). Observers fire only when
/// the (latitude, longitude) pair actually changes, so re-fetching the same
/// city does not re-center the map.
#[derive(Default)]
pub struct DisplayState {
    snapshot: Option<WeatherSnapshot>,
    observers: Vec<(SubscriptionId, CoordObserver)>,
    next_id: u64,
}

impl DisplayState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> Option<&WeatherSnapshot> {
        self.snapshot.as_ref()
    }

    /// Replace the snapshot wholesale and notify observers if the coordinate
    /// pair changed.
    pub fn replace(&mut self, snapshot: WeatherSnapshot) {
        let coords = snapshot.coordinates();
        let changed = self
            .snapshot
            .as_ref()
            .is_none_or(|prev| prev.coordinates() != coords);

        self.snapshot = Some(snapshot);

        if changed {
            let (lat, lon) = coords;
            for (_, observer) in &mut self.observers {
                observer(lat, lon);
            }
        }
    }

    /// Register a coordinate observer. It is NOT called for a snapshot that
    /// was already present at subscription time.
    pub fn subscribe(&mut self, observer: impl FnMut(f64, f64) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.observers.retain(|(observer_id, _)| *observer_id != id);
    }
}
