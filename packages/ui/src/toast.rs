use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Error,
    Info,
    Success,
    Warning,
}

impl ToastKind {
    fn class(self) -> &'static str {
        match self {
            ToastKind::Error => "toast toast_error",
            ToastKind::Info => "toast toast_info",
            ToastKind::Success => "toast toast_success",
            ToastKind::Warning => "toast toast_warning",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            ToastKind::Error => "✕",
            ToastKind::Info => "ℹ",
            ToastKind::Success => "✓",
            ToastKind::Warning => "!",
        }
    }

    fn auto_dismiss(self) -> bool {
        matches!(self, ToastKind::Info | ToastKind::Success)
    }
}

/// Info and success toasts go away on their own after this long.
#[cfg(target_arch = "wasm32")]
const AUTO_DISMISS_SECS: u64 = 4;

/// Older toasts are dropped past this many.
const MAX_VISIBLE: usize = 4;

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub title: String,
    pub body: Option<String>,
    pub kind: ToastKind,
}

/// Visible toasts, newest last.
#[derive(Debug, Clone, PartialEq)]
pub struct ToastQueue {
    items: Vec<Toast>,
    next_id: u64,
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }
}

impl ToastQueue {
    /// Add a toast and return its id. A toast with the same kind and title
    /// replaces the earlier one, so repeated clicks do not stack.
    pub fn push(&mut self, title: String, body: Option<String>, kind: ToastKind) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.retain(|t| !(t.kind == kind && t.title == title));
        self.items.push(Toast {
            id,
            title,
            body,
            kind,
        });
        if self.items.len() > MAX_VISIBLE {
            let excess = self.items.len() - MAX_VISIBLE;
            self.items.drain(..excess);
        }
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|t| t.id != id);
    }

    pub fn items(&self) -> &[Toast] {
        &self.items
    }
}

#[derive(Clone, Copy)]
pub struct Toasts {
    queue: Signal<ToastQueue>,
}

impl Toasts {
    pub fn push(&self, title: String, body: Option<String>, kind: ToastKind) -> u64 {
        let mut queue = self.queue;
        let id = queue.with_mut(|q| q.push(title, body, kind));

        #[cfg(target_arch = "wasm32")]
        if kind.auto_dismiss() {
            let this = *self;
            spawn(async move {
                gloo_timers::future::sleep(std::time::Duration::from_secs(AUTO_DISMISS_SECS)).await;
                this.dismiss(id);
            });
        }
        id
    }

    pub fn dismiss(&self, id: u64) {
        let mut queue = self.queue;
        queue.with_mut(|q| q.dismiss(id));
    }

    pub fn error(&self, title: String, body: Option<String>) {
        self.push(title, body, ToastKind::Error);
    }

    pub fn info(&self, title: String, body: Option<String>) {
        self.push(title, body, ToastKind::Info);
    }

    pub fn success(&self, title: String, body: Option<String>) {
        self.push(title, body, ToastKind::Success);
    }

    pub fn warning(&self, title: String, body: Option<String>) {
        self.push(title, body, ToastKind::Warning);
    }
}

pub fn use_toasts() -> Toasts {
    use_context::<Toasts>()
}

#[component]
pub fn ToastProvider(children: Element) -> Element {
    let queue = use_signal(ToastQueue::default);
    let ctx = Toasts { queue };
    use_context_provider(|| ctx);

    rsx! {
        {children}
        ToastViewport { toasts: ctx }
    }
}

#[component]
fn ToastViewport(toasts: Toasts) -> Element {
    let items = toasts.queue.read().items().to_vec();
    rsx! {
        div { class: "toast_region", role: "status", "aria-live": "polite",
            for toast in items {
                div {
                    key: "{toast.id}",
                    class: toast.kind.class(),
                    span { class: "toast_icon", "{toast.kind.icon()}" }
                    div { class: "toast_content",
                        div { class: "toast_title", "{toast.title}" }
                        if let Some(body) = &toast.body {
                            div { class: "toast_body", "{body}" }
                        }
                    }
                    if !toast.kind.auto_dismiss() {
                        button {
                            class: "toast_close",
                            onclick: move |_| toasts.dismiss(toast.id),
                            "×"
                        }
                    }
                }
            }
        }
    }
}

impl PartialEq for Toasts {
    fn eq(&self, other: &Self) -> bool {
        self.queue == other.queue
    }
}
