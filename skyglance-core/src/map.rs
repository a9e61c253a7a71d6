use std::{cell::RefCell, rc::Rc};

use crate::state::{DisplayState, SubscriptionId};

/// Zoom level used whenever the map re-centers on a snapshot.
pub const SNAPSHOT_ZOOM: u8 = 10;

/// Contract of the external map component: given a center and zoom, render a
/// focused, pannable map with a marker. Tile rendering is not our concern.
pub trait MapView {
    fn set_view(&mut self, latitude: f64, longitude: f64, zoom: u8);
}

/// Keep a map re-centered on the display state's coordinates.
///
/// Registers an observer that calls [`MapView::set_view`] at
/// [`SNAPSHOT_ZOOM`] whenever a new coordinate pair arrives. While no
/// snapshot exists the map is left alone. Returns the subscription id so the
/// front end can unsubscribe on teardown.
pub fn sync_map<M>(state: &mut DisplayState, map: Rc<RefCell<M>>) -> SubscriptionId
where
    M: MapView + 'static,
{
    state.subscribe(move |latitude, longitude| {
        map.borrow_mut().set_view(latitude, longitude, SNAPSHOT_ZOOM);
    })
}
