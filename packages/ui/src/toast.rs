//! Transient notifications.
//!
//! [`Toaster`] owns the queue and renders it in a fixed corner stack.
//! Anything below it calls [`use_toasts`] and pushes a message; each toast
//! fades out on its own after [`TOAST_LIFETIME`].

use std::time::Duration;

use dioxus::prelude::*;

use crate::timer::sleep;

pub const TOAST_LIFETIME: Duration = Duration::from_secs(3);
const TICK: Duration = Duration::from_millis(250);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Warning,
    Error,
}

impl ToastKind {
    fn class(self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast-success",
            ToastKind::Warning => "toast toast-warning",
            ToastKind::Error => "toast toast-error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
    remaining_ticks: u32,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastQueue {
    next_id: u64,
    toasts: Vec<Toast>,
}

impl ToastQueue {
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            kind,
            message: message.into(),
            remaining_ticks: lifetime_ticks(),
        });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }

    /// Age every toast by one tick and drop the expired ones.
    pub fn tick(&mut self) {
        for toast in &mut self.toasts {
            toast.remaining_ticks = toast.remaining_ticks.saturating_sub(1);
        }
        self.toasts.retain(|t| t.remaining_ticks > 0);
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

fn lifetime_ticks() -> u32 {
    (TOAST_LIFETIME.as_millis() / TICK.as_millis()) as u32
}

/// Copyable handle for pushing toasts from event handlers and tasks.
#[derive(Clone, Copy, PartialEq)]
pub struct Toasts {
    queue: Signal<ToastQueue>,
}

impl Toasts {
    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastKind::Success, message);
    }

    pub fn warning(&self, message: impl Into<String>) {
        self.push(ToastKind::Warning, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastKind::Error, message);
    }

    fn push(&self, kind: ToastKind, message: impl Into<String>) {
        let mut queue = self.queue;
        queue.write().push(kind, message);
    }
}

pub fn use_toasts() -> Toasts {
    use_context::<Toasts>()
}

#[component]
pub fn Toaster(children: Element) -> Element {
    let mut queue = use_signal(ToastQueue::default);
    use_context_provider(|| Toasts { queue });

    // One timer for the whole stack; toasts outlive the view that raised them.
    use_future(move || async move {
        loop {
            sleep(TICK).await;
            if !queue.peek().is_empty() {
                queue.write().tick();
            }
        }
    });

    rsx! {
        {children}
        div { class: "toast-stack",
            for toast in queue.read().toasts().iter() {
                div {
                    key: "{toast.id}",
                    class: toast.kind.class(),
                    role: "status",
                    span { "{toast.message}" }
                    button {
                        class: "toast-close",
                        onclick: {
                            let id = toast.id;
                            move |_| queue.write().dismiss(id)
                        },
                        "×"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_assigns_increasing_ids() {
        let mut queue = ToastQueue::default();
        let a = queue.push(ToastKind::Success, "one");
        let b = queue.push(ToastKind::Error, "two");
        assert!(b > a);
        assert_eq!(queue.toasts().len(), 2);
        assert_eq!(queue.toasts()[1].kind, ToastKind::Error);
    }

    #[test]
    fn test_toast_expires_after_lifetime() {
        let mut queue = ToastQueue::default();
        queue.push(ToastKind::Warning, "Please log in to book a tutor.");
        for _ in 1..lifetime_ticks() {
            queue.tick();
        }
        assert!(!queue.is_empty());
        queue.tick();
        assert!(queue.is_empty());
    }

    #[test]
    fn test_later_toasts_outlive_earlier_ones() {
        let mut queue = ToastQueue::default();
        queue.push(ToastKind::Error, "first");
        queue.tick();
        queue.push(ToastKind::Error, "second");
        for _ in 1..lifetime_ticks() {
            queue.tick();
        }
        let left: Vec<&str> = queue.toasts().iter().map(|t| t.message.as_str()).collect();
        assert_eq!(left, vec!["second"]);
    }

    #[test]
    fn test_dismiss() {
        let mut queue = ToastQueue::default();
        let id = queue.push(ToastKind::Success, "done");
        queue.push(ToastKind::Success, "also done");
        queue.dismiss(id);
        assert_eq!(queue.toasts().len(), 1);
        assert_eq!(queue.toasts()[0].message, "also done");
    }
}
