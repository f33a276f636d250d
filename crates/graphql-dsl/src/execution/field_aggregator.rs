use crate::execution::AggregationError;
use futures::FutureExt;
use indexmap::IndexMap;
use std::any::Any;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::time::Duration;
use tokio::task::JoinError;
use tokio::task::JoinSet;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

type Result<T, E> = std::result::Result<T, AggregationError<E>>;
type PanicPayload = Box<dyn Any + Send>;
type TaskOutput<V, E> = (usize, std::result::Result<std::result::Result<V, E>, PanicPayload>);

/// Runs the sibling fields of one selection set concurrently and assembles
/// their results in registration order.
///
/// Each computation registered through [`FieldAggregator::add_field()`] is
/// spawned onto the current tokio runtime right away. [`FieldAggregator::finish()`]
/// then waits for all of them. An optional overall timeout (measured from
/// [`FieldAggregator::new()`]) and an optional [`CancellationToken`] bound
/// the wait; without a timeout there is no deadline at all. On timeout, cancellation, failure or panic every remaining
/// computation is aborted and joined before the error is returned, so no
/// task outlives the aggregation. Dropping an aggregator aborts whatever is
/// still running.
pub struct FieldAggregator<V, E> {
    cancellation: Option<CancellationToken>,
    deadline: Option<Instant>,
    results: IndexMap<String, Option<V>>,
    tasks: JoinSet<TaskOutput<V, E>>,
    timeout: Option<Duration>,
}
impl<V, E> FieldAggregator<V, E>
where
    V: Send + 'static,
    E: Send + 'static,
{
    pub fn new(timeout: Option<Duration>) -> Self {
        Self {
            cancellation: None,
            deadline: timeout.map(deadline_after),
            results: IndexMap::new(),
            tasks: JoinSet::new(),
            timeout,
        }
    }

    /// Abort the aggregation as soon as `token` is cancelled.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    /// Register and immediately spawn the computation for `field_name`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn add_field<F>(&mut self, field_name: impl Into<String>, computation: F) -> Result<(), E>
    where
        F: Future<Output = std::result::Result<V, E>> + Send + 'static,
    {
        let field_name = field_name.into();
        if self.results.contains_key(field_name.as_str()) {
            return Err(AggregationError::DuplicateField { field_name });
        }

        let index = self.results.len();
        tracing::trace!(%field_name, index, "spawning field computation");
        self.results.insert(field_name, None);
        self.tasks.spawn(async move {
            (index, AssertUnwindSafe(computation).catch_unwind().await)
        });
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Abort every registered computation and wait for all of them to stop.
    pub async fn cancel(mut self) {
        self.tasks.shutdown().await;
    }

    /// Wait for every registered computation and return their results keyed
    /// by field name, in registration order.
    pub async fn finish(mut self) -> Result<IndexMap<String, V>, E> {
        let token = self.cancellation.take().unwrap_or_else(CancellationToken::new);
        let cancelled = token.cancelled();
        let deadline = self.deadline.zip(self.timeout);
        let timed_out = async move {
            match deadline {
                Some((deadline, timeout)) => {
                    tokio::time::sleep_until(deadline).await;
                    timeout
                },
                None => std::future::pending().await,
            }
        };
        tokio::pin!(cancelled, timed_out);

        loop {
            let event = tokio::select! {
                biased;
                _ = &mut cancelled => Event::Cancelled,
                joined = self.tasks.join_next() => match joined {
                    Some(joined) => Event::Joined(joined),
                    None => break,
                },
                timeout = &mut timed_out => Event::TimedOut(timeout),
            };

            match event {
                Event::Joined(Ok((index, Ok(Ok(value))))) => {
                    if let Some((_, slot)) = self.results.get_index_mut(index) {
                        *slot = Some(value);
                    }
                },

                Event::Joined(Ok((index, Ok(Err(source))))) => {
                    let field_name = self.field_name(index);
                    self.tasks.shutdown().await;
                    tracing::debug!(%field_name, "field failed; aborted remaining fields");
                    return Err(AggregationError::Field { field_name, source });
                },

                Event::Joined(Ok((index, Err(payload)))) => {
                    let field_name = self.field_name(index);
                    self.tasks.shutdown().await;
                    tracing::debug!(%field_name, "field panicked; aborted remaining fields");
                    return Err(AggregationError::Panicked {
                        field_name,
                        message: panic_message(payload.as_ref()),
                    });
                },

                // Only an aborted task fails to join, and this aggregator
                // never aborts a task without returning right away.
                Event::Joined(Err(join_error)) => {
                    self.tasks.shutdown().await;
                    tracing::debug!(%join_error, "field task was aborted by the runtime");
                    return Err(AggregationError::Cancelled);
                },

                Event::Cancelled => {
                    self.tasks.shutdown().await;
                    tracing::debug!("field aggregation cancelled");
                    return Err(AggregationError::Cancelled);
                },

                Event::TimedOut(timeout) => {
                    let pending_fields: Vec<String> = self.results.iter()
                        .filter(|(_, slot)| slot.is_none())
                        .map(|(field_name, _)| field_name.to_string())
                        .collect();
                    self.tasks.shutdown().await;
                    tracing::debug!(
                        ?timeout,
                        pending = pending_fields.len(),
                        "field aggregation timed out",
                    );
                    return Err(AggregationError::Timeout {
                        pending_fields,
                        timeout,
                    });
                },
            }
        }

        let mut values = IndexMap::with_capacity(self.results.len());
        for (field_name, slot) in self.results {
            match slot {
                Some(value) => {
                    values.insert(field_name, value);
                },
                None => return Err(AggregationError::Cancelled),
            }
        }
        tracing::trace!(fields = values.len(), "field aggregation completed");
        Ok(values)
    }

    fn field_name(&self, index: usize) -> String {
        self.results
            .get_index(index)
            .map(|(field_name, _)| field_name.to_string())
            .unwrap_or_default()
    }
}

enum Event<V, E> {
    Cancelled,
    Joined(std::result::Result<TaskOutput<V, E>, JoinError>),
    TimedOut(Duration),
}

/// Create an aggregator, let `init` register its fields, then wait for them.
/// `timeout` is optional, as for [`FieldAggregator::new()`].
///
/// If `init` fails, every computation it already registered is aborted and
/// joined before the error is returned.
pub async fn aggregate<V, E, F>(timeout: Option<Duration>, init: F) -> Result<IndexMap<String, V>, E>
where
    V: Send + 'static,
    E: Send + 'static,
    F: FnOnce(&mut FieldAggregator<V, E>) -> Result<(), E>,
{
    let mut aggregator = FieldAggregator::new(timeout);
    if let Err(err) = init(&mut aggregator) {
        aggregator.cancel().await;
        return Err(err);
    }
    aggregator.finish().await
}

fn deadline_after(timeout: Duration) -> Instant {
    let now = Instant::now();
    // Roughly 30 years: effectively "never" for timeouts too large to add.
    now.checked_add(timeout)
        .unwrap_or_else(|| now + Duration::from_secs(60 * 60 * 24 * 365 * 30))
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&'static str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.to_string()
    } else {
        "unknown panic payload".to_string()
    }
}
