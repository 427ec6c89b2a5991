use std::marker::PhantomData;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::Level;
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, Layer, Registry};

pub const DEFAULT_FILTER: &str = "warn,holdem_engine=info";

/// Structured log entry captured by [`TestLogSubscriber`].
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub level: Level,
    pub target: String,
    pub message: String,
    pub fields: Vec<(String, String)>,
}

impl LogEntry {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Collects events in memory so tests can assert on what the engine logged.
#[derive(Debug, Clone, Default)]
pub struct TestLogSubscriber {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl TestLogSubscriber {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn clear(&self) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    pub fn into_layer<S>(self) -> TestLayer<S>
    where
        S: tracing::Subscriber + for<'a> LookupSpan<'a>,
    {
        TestLayer {
            subscriber: self,
            _phantom: PhantomData,
        }
    }
}

pub struct TestLayer<S> {
    subscriber: TestLogSubscriber,
    _phantom: PhantomData<S>,
}

impl<S> Layer<S> for TestLayer<S>
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);

        let entry = LogEntry {
            level: *metadata.level(),
            target: metadata.target().to_string(),
            message: visitor.message.unwrap_or_default(),
            fields: visitor.fields,
        };

        self.subscriber
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(entry);
    }
}

#[derive(Default)]
struct FieldVisitor {
    message: Option<String>,
    fields: Vec<(String, String)>,
}

impl tracing::field::Visit for FieldVisitor {
    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_string());
        } else {
            self.fields.push((field.name().to_string(), value.to_string()));
        }
    }

    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        let value_str = format!("{:?}", value);
        if field.name() == "message" {
            self.message = Some(value_str);
        } else {
            self.fields.push((field.name().to_string(), value_str));
        }
    }
}

/// Installs the stderr subscriber. `RUST_LOG` overrides [`DEFAULT_FILTER`].
///
/// Calling it twice is harmless; the first subscriber stays installed.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}

/// Runs `f` with a capturing subscriber scoped to the current thread.
pub fn capture<T>(f: impl FnOnce() -> T) -> (T, TestLogSubscriber) {
    let subscriber = TestLogSubscriber::new();
    let registry = Registry::default().with(subscriber.clone().into_layer::<Registry>());
    let value = tracing::subscriber::with_default(registry, f);
    (value, subscriber)
}

#[cfg(test)]
mod tests {
    use super::*;
    use holdem_engine::game::Round;
    use holdem_engine::player::Player;
    use holdem_engine::table::Table;
    use tracing::{info, warn};

    #[test]
    fn test_log_subscriber_captures_entries() {
        let ((), logs) = capture(|| {
            info!(pot = 70, "test info message");
            warn!("test warning message");
        });
        let entries = logs.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].level, Level::INFO);
        assert_eq!(entries[0].message, "test info message");
        assert_eq!(entries[0].field("pot"), Some("70"));
        assert_eq!(entries[1].level, Level::WARN);

        logs.clear();
        assert!(logs.entries().is_empty());
    }

    #[test]
    fn engine_reports_rounds_and_rejections() {
        let (round, logs) = capture(|| {
            let mut table = Table::with_seed(20, 50, 8).unwrap();
            for name in ["ann", "bob", "cat"] {
                table.add_player(Player::shared(name, 1500)).unwrap();
            }
            let mut game = table.start_game().unwrap();
            game.call().unwrap();
            game.call().unwrap();
            assert!(game.call().is_err());
            game.check().unwrap();
            game.round()
        });
        assert_eq!(round, Round::Flop);

        let entries = logs.entries();
        let messages: Vec<&str> = entries.iter().map(|e| e.message.as_str()).collect();
        assert!(messages.contains(&"game started"));
        assert!(messages.contains(&"round started"));

        let rejected = entries
            .iter()
            .find(|e| e.message == "action rejected")
            .expect("rejection is logged");
        assert_eq!(rejected.level, Level::WARN);
        assert_eq!(rejected.target, "holdem_engine::game");

        let calls = entries.iter().filter(|e| e.message == "call").count();
        assert_eq!(calls, 2);
    }
}
