//! # Fetch-on-mount lifecycle
//!
//! Every data-driven view goes `Loading → Loaded | Failed` exactly once per
//! mount. [`mount`] pairs the fetch future with a [`ViewTask`] handle; the view
//! keeps the handle for as long as it is mounted. Dropping the handle aborts the
//! fetch, and an aborted fetch never reaches the sink, so a torn-down view is
//! never written to.

use std::fmt::Display;
use std::future::Future;

use futures::future::{AbortHandle, Abortable};

/// State of a single read request.
#[derive(Clone, Debug, PartialEq)]
pub enum LoadState<T> {
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        Self::Loading
    }
}

impl<T> LoadState<T> {
    pub fn from_result<E: Display>(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Loaded(value),
            Err(e) => Self::Failed(e.to_string()),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// The loaded value. Single-record views render the loading indicator
    /// whenever this is `None`, failures included.
    pub fn loaded(&self) -> Option<&T> {
        match self {
            Self::Loaded(value) => Some(value),
            _ => None,
        }
    }
}

impl<T> LoadState<Vec<T>> {
    /// Items to render. A failed list fetch renders as an empty list.
    pub fn items(&self) -> &[T] {
        match self {
            Self::Loaded(items) => items,
            _ => &[],
        }
    }
}

/// Handle to an in-flight fetch owned by a mounted view.
#[derive(Debug)]
pub struct ViewTask {
    handle: AbortHandle,
}

impl ViewTask {
    pub fn cancel(&self) {
        self.handle.abort();
    }

    pub fn is_cancelled(&self) -> bool {
        self.handle.is_aborted()
    }
}

impl Drop for ViewTask {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Wrap `fetch` so its outcome is delivered to `sink` unless the returned
/// [`ViewTask`] is dropped or cancelled first.
///
/// The caller spawns the returned future on its executor and stores the
/// handle with the view.
pub fn mount<T, E, Fut, S>(fetch: Fut, sink: S) -> (ViewTask, impl Future<Output = ()>)
where
    Fut: Future<Output = Result<T, E>>,
    E: Display,
    S: FnOnce(LoadState<T>),
{
    let (handle, registration) = AbortHandle::new_pair();
    let task = async move {
        match Abortable::new(fetch, registration).await {
            Ok(result) => {
                if let Err(e) = &result {
                    tracing::warn!("fetch failed: {e}");
                }
                sink(LoadState::from_result(result));
            }
            Err(_) => tracing::debug!("view unmounted before fetch resolved"),
        }
    };
    (ViewTask { handle }, task)
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::channel::oneshot;
    use futures::FutureExt;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[tokio::test]
    async fn test_mount_delivers_loaded_value() {
        let state = Rc::new(RefCell::new(LoadState::<u32>::Loading));
        let sink_state = state.clone();

        let (_task, fut) = mount(async { Ok::<_, String>(7) }, move |s| {
            *sink_state.borrow_mut() = s;
        });
        fut.await;

        assert_eq!(*state.borrow(), LoadState::Loaded(7));
    }

    #[tokio::test]
    async fn test_mount_delivers_failure() {
        let state = Rc::new(RefCell::new(LoadState::<Vec<u32>>::Loading));
        let sink_state = state.clone();

        let (_task, fut) = mount(async { Err::<Vec<u32>, _>("offline") }, move |s| {
            *sink_state.borrow_mut() = s;
        });
        fut.await;

        assert_eq!(*state.borrow(), LoadState::Failed("offline".to_string()));
        assert!(state.borrow().items().is_empty());
    }

    #[tokio::test]
    async fn test_dropped_task_never_writes() {
        let written = Rc::new(RefCell::new(false));
        let sink_written = written.clone();
        let (tx, rx) = oneshot::channel::<u32>();

        let (task, fut) = mount(
            async move { rx.await.map_err(|e| e.to_string()) },
            move |_| *sink_written.borrow_mut() = true,
        );

        // Unmount before the response arrives.
        drop(task);
        tx.send(3).unwrap();
        fut.await;

        assert!(!*written.borrow());
    }

    #[tokio::test]
    async fn test_cancel_keeps_handle_alive() {
        let written = Rc::new(RefCell::new(false));
        let sink_written = written.clone();

        let (task, fut) = mount(async { Ok::<_, String>(1) }, move |_| {
            *sink_written.borrow_mut() = true;
        });
        task.cancel();
        assert!(task.is_cancelled());
        fut.await;

        assert!(!*written.borrow());
    }

    #[test]
    fn test_unresolved_fetch_stays_loading() {
        let state = Rc::new(RefCell::new(LoadState::<u32>::Loading));
        let sink_state = state.clone();

        let (_task, fut) = mount(futures::future::pending::<Result<u32, String>>(), move |s| {
            *sink_state.borrow_mut() = s;
        });

        assert!(fut.now_or_never().is_none());
        assert!(state.borrow().is_loading());
    }

    #[test]
    fn test_failed_record_renders_as_absent() {
        let state = LoadState::<u32>::Failed("not found".to_string());
        assert!(state.loaded().is_none());
    }
}
