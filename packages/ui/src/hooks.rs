use std::fmt::Display;
use std::future::Future;
use std::rc::Rc;

use dioxus::prelude::*;
use domain::{mount, LoadState};

/// Run `fetch` once when the calling view mounts and expose its outcome.
///
/// The pending request is tied to the view: when the view unmounts, the
/// [`domain::ViewTask`] stored in the hook is dropped and the late response
/// is discarded instead of written.
pub fn use_fetch<T, E, F, Fut>(fetch: F) -> Signal<LoadState<T>>
where
    T: 'static,
    E: Display + 'static,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, E>> + 'static,
{
    let mut state = use_signal(LoadState::<T>::default);
    use_hook(move || {
        let (task, fut) = mount(fetch(), move |loaded| state.set(loaded));
        spawn(fut);
        Rc::new(task)
    });
    state
}
