//! Last-request-wins sequencing for interactively triggered lookups.
//!
//! Each logical input field owns one [`RequestSequencer`]. Every submission
//! takes a ticket; when a response arrives, it is only applied if its ticket
//! is still the latest one issued. A slow early request can therefore never
//! overwrite the result of a later one.

use std::sync::atomic::{AtomicU64, Ordering};

use basurapp_core::GeocodingResult;

use crate::geocoder::Geocoder;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestTicket(u64);

#[derive(Debug, Default)]
pub struct RequestSequencer {
    latest: AtomicU64,
}

impl RequestSequencer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues a ticket newer than every ticket issued before it.
    pub fn issue(&self) -> RequestTicket {
        RequestTicket(self.latest.fetch_add(1, Ordering::AcqRel) + 1)
    }

    #[must_use]
    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        self.latest.load(Ordering::Acquire) == ticket.0
    }
}

/// Wraps a [`Geocoder`] so only the most recent submission's result is kept.
pub struct SequencedGeocoder<G> {
    inner: G,
    sequencer: RequestSequencer,
}

impl<G: Geocoder> SequencedGeocoder<G> {
    pub fn new(inner: G) -> Self {
        Self {
            inner,
            sequencer: RequestSequencer::new(),
        }
    }

    pub fn inner(&self) -> &G {
        &self.inner
    }

    /// Geocodes `address`, returning `None` if a newer request was issued
    /// before this one completed.
    pub async fn geocode_latest(&self, address: &str) -> Option<GeocodingResult> {
        let ticket = self.sequencer.issue();
        let result = self.inner.geocode(address).await;
        if self.sequencer.is_current(ticket) {
            Some(result)
        } else {
            tracing::debug!(address, ?ticket, "discarding stale geocoding response");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use basurapp_core::LngLat;
    use tokio::sync::oneshot;

    use super::*;
    use crate::geocoder::GeocodeFuture;

    /// Completes each address only when its gate is released.
    struct GatedGeocoder {
        gates: Mutex<HashMap<String, oneshot::Receiver<()>>>,
    }

    impl GatedGeocoder {
        fn new(addresses: &[&str]) -> (Self, HashMap<String, oneshot::Sender<()>>) {
            let mut gates = HashMap::new();
            let mut releases = HashMap::new();
            for address in addresses {
                let (tx, rx) = oneshot::channel();
                gates.insert((*address).to_string(), rx);
                releases.insert((*address).to_string(), tx);
            }
            (
                Self {
                    gates: Mutex::new(gates),
                },
                releases,
            )
        }
    }

    impl Geocoder for GatedGeocoder {
        fn geocode<'a>(&'a self, address: &'a str) -> GeocodeFuture<'a, GeocodingResult> {
            let gate = self.gates.lock().unwrap().remove(address);
            Box::pin(async move {
                if let Some(gate) = gate {
                    let _ = gate.await;
                }
                GeocodingResult::matched(LngLat::new(-73.1, 7.1), address, Vec::new())
            })
        }

        fn reverse_geocode(&self, _coordinates: LngLat) -> GeocodeFuture<'_, String> {
            Box::pin(async { String::new() })
        }
    }

    #[test]
    fn tickets_increase_and_only_latest_is_current() {
        let sequencer = RequestSequencer::new();
        let first = sequencer.issue();
        let second = sequencer.issue();
        assert!(second > first);
        assert!(!sequencer.is_current(first));
        assert!(sequencer.is_current(second));
    }

    #[tokio::test]
    async fn single_request_is_kept() {
        let (geocoder, _releases) = GatedGeocoder::new(&[]);
        let sequenced = SequencedGeocoder::new(geocoder);
        let result = sequenced.geocode_latest("calle 45").await;
        assert_eq!(result.map(|r| r.formatted_address).as_deref(), Some("calle 45"));
    }

    #[tokio::test]
    async fn earlier_request_finishing_last_is_discarded() {
        let (geocoder, mut releases) = GatedGeocoder::new(&["first", "second"]);
        let sequenced = SequencedGeocoder::new(geocoder);
        let release_first = releases.remove("first").unwrap();
        let release_second = releases.remove("second").unwrap();

        let (first, second, ()) = tokio::join!(
            sequenced.geocode_latest("first"),
            sequenced.geocode_latest("second"),
            async move {
                release_second.send(()).unwrap();
                tokio::task::yield_now().await;
                release_first.send(()).unwrap();
            },
        );

        assert!(first.is_none());
        assert_eq!(
            second.map(|r| r.formatted_address).as_deref(),
            Some("second")
        );
    }
}
