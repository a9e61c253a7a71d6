use crate::{
    error::FetchError, model::WeatherSnapshot, provider::WeatherProvider, state::DisplayState,
};

/// Contract of the front end's alert surface (a modal, a terminal line, ...).
pub trait Notifier {
    fn alert(&mut self, message: &str);
}

/// The widget itself: last-entered query, provider, notifier, and the single
/// display-state slot.
///
/// `search()` is the click handler. Each invocation issues at most one
/// request; there is no fencing between overlapping searches, so whichever
/// caller resolves last owns the slot.
pub struct WeatherWidget<P, N> {
    query: String,
    provider: P,
    notifier: N,
    state: DisplayState,
}

impl<P: WeatherProvider, N: Notifier> WeatherWidget<P, N> {
    pub fn new(provider: P, notifier: N) -> Self {
        Self {
            query: String::new(),
            provider,
            notifier,
            state: DisplayState::new(),
        }
    }

    /// Store the last-entered city name.
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn snapshot(&self) -> Option<&WeatherSnapshot> {
        self.state.snapshot()
    }

    pub fn state(&self) -> &DisplayState {
        &self.state
    }

    /// Mutable access for attaching observers (e.g. [`crate::map::sync_map`]).
    pub fn state_mut(&mut self) -> &mut DisplayState {
        &mut self.state
    }

    /// Run one search for the stored query.
    ///
    /// Whitespace-only input is rejected with a notice before any network
    /// call; otherwise the text is forwarded to the provider exactly as
    /// entered. On success the display state is replaced wholesale. On
    /// failure the prior snapshot is left untouched: provider-reported
    /// errors are surfaced to the user, transport and parse errors are only
    /// logged.
    pub async fn search(&mut self) {
        if self.query.trim().is_empty() {
            self.notifier.alert(&FetchError::EmptyCity.to_string());
            return;
        }

        match self.provider.current(&self.query).await {
            Ok(snapshot) => self.state.replace(snapshot),
            Err(err) if err.is_user_visible() => self.notifier.alert(&err.to_string()),
            Err(err) => {
                tracing::error!(error = %err, city = %self.query, "weather fetch failed");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icon::WeatherIcon;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Debug)]
    enum Script {
        Success(WeatherSnapshot),
        ProviderError(String),
        TransportError,
    }

    #[derive(Debug)]
    struct ScriptedProvider {
        script: Script,
        cities: Mutex<Vec<String>>,
    }

    impl ScriptedProvider {
        fn new(script: Script) -> Self {
            Self { script, cities: Mutex::new(Vec::new()) }
        }

        fn calls(&self) -> usize {
            self.cities.lock().unwrap().len()
        }

        fn cities(&self) -> Vec<String> {
            self.cities.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl WeatherProvider for ScriptedProvider {
        async fn current(&self, city: &str) -> Result<WeatherSnapshot, FetchError> {
            self.cities.lock().unwrap().push(city.to_string());
            match &self.script {
                Script::Success(snapshot) => Ok(snapshot.clone()),
                Script::ProviderError(message) => {
                    Err(FetchError::Provider { message: message.clone() })
                }
                Script::TransportError => {
                    // Parse errors share the silent-log class with transport
                    // failures and are constructible without a socket.
                    Err(FetchError::from(
                        serde_json::from_str::<i32>("not json").unwrap_err(),
                    ))
                }
            }
        }
    }

    #[derive(Default)]
    struct RecordingNotifier {
        alerts: Vec<String>,
    }

    impl Notifier for RecordingNotifier {
        fn alert(&mut self, message: &str) {
            self.alerts.push(message.to_string());
        }
    }

    fn london() -> WeatherSnapshot {
        WeatherSnapshot {
            temperature_c: 7,
            humidity_pct: 81,
            wind_speed_kmh: 4.1,
            location: "London".to_string(),
            latitude: 51.5,
            longitude: -0.12,
            icon: WeatherIcon::Drizzle,
        }
    }

    fn widget(script: Script) -> WeatherWidget<ScriptedProvider, RecordingNotifier> {
        WeatherWidget::new(ScriptedProvider::new(script), RecordingNotifier::default())
    }

    #[tokio::test]
    async fn empty_input_alerts_without_a_network_call() {
        for query in ["", "   ", "\t\n"] {
            let mut w = widget(Script::Success(london()));
            w.set_query(query);
            w.search().await;

            assert_eq!(w.provider.calls(), 0, "query {query:?}");
            assert_eq!(w.notifier.alerts, vec!["Please enter a city name"]);
            assert!(w.snapshot().is_none());
        }
    }

    #[tokio::test]
    async fn success_replaces_display_state() {
        let mut w = widget(Script::Success(london()));
        w.set_query("London");
        w.search().await;

        assert_eq!(w.provider.calls(), 1);
        assert!(w.notifier.alerts.is_empty());
        assert_eq!(w.snapshot(), Some(&london()));
    }

    #[tokio::test]
    async fn query_is_forwarded_exactly_as_entered() {
        let mut w = widget(Script::Success(london()));
        w.set_query("  London ");
        w.search().await;

        assert_eq!(w.provider.cities(), vec!["  London "]);
    }

    #[tokio::test]
    async fn provider_error_alerts_and_keeps_stale_snapshot() {
        let mut w = widget(Script::Success(london()));
        w.set_query("London");
        w.search().await;

        w.provider = ScriptedProvider::new(Script::ProviderError("city not found".into()));
        w.set_query("Lndn");
        w.search().await;

        assert_eq!(w.notifier.alerts, vec!["city not found"]);
        assert_eq!(w.snapshot(), Some(&london()), "stale snapshot must survive");
    }

    #[tokio::test]
    async fn transport_error_is_silent_and_keeps_stale_snapshot() {
        let mut w = widget(Script::Success(london()));
        w.set_query("London");
        w.search().await;

        w.provider = ScriptedProvider::new(Script::TransportError);
        w.set_query("Paris");
        w.search().await;

        assert!(w.notifier.alerts.is_empty(), "no user notice for transport errors");
        assert_eq!(w.snapshot(), Some(&london()));
    }
}
