//! Browser seams: timers, viewport visibility, scroll progress.
//!
//! Each hook only touches `window` from inside an effect, so components can
//! be rendered to HTML off the browser. Every registration is torn down
//! with `on_cleanup` when the owning component goes away.

use std::time::Duration;

use inctrl_core::SiteConfig;
use inctrl_core::parallax::scroll_progress;
use inctrl_core::trigger::OnceLatch;
use leptos::ev;
use leptos::prelude::*;
use leptos::tachys::html::element::ElementType;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Site config from context, defaults when none was provided.
pub fn use_site_config() -> SiteConfig {
    use_context::<SiteConfig>().unwrap_or_default()
}

/// Repeating timer owned by the calling component.
#[derive(Clone, Copy)]
pub struct Ticker {
    handle: StoredValue<Option<IntervalHandle>>,
}

impl Ticker {
    /// Idle ticker; cleared automatically on teardown.
    pub fn new() -> Self {
        let ticker = Self {
            handle: StoredValue::new(None),
        };
        on_cleanup(move || ticker.stop());
        ticker
    }

    /// (Re)start, calling `tick` every `period`.
    pub fn start(&self, period: Duration, tick: impl Fn() + 'static) {
        self.stop();
        match set_interval_with_handle(tick, period) {
            Ok(handle) => {
                self.handle.try_set_value(Some(handle));
            }
            Err(e) => tracing::warn!(error = ?e, "could not start interval"),
        }
    }

    /// Stop if running.
    pub fn stop(&self) {
        if let Some(handle) = self.handle.try_update_value(Option::take).flatten() {
            handle.clear();
        }
    }
}

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Whether `target` is at least `threshold` visible, as reported by an
/// `IntersectionObserver`. Starts out `false`.
pub fn use_in_view<E>(target: NodeRef<E>, threshold: f64) -> ReadSignal<bool>
where
    E: ElementType,
    E::Output: JsCast + Clone + 'static,
{
    let (visible, set_visible) = signal(false);
    let slot: StoredValue<Option<(IntersectionObserver, ObserverCallback)>, LocalStorage> =
        StoredValue::new_local(None);

    Effect::new(move || {
        let Some(node) = target.get() else {
            return;
        };
        if slot.with_value(Option::is_some) {
            return;
        }
        let element: web_sys::Element = node.unchecked_into();

        let callback: ObserverCallback =
            Closure::new(move |entries: js_sys::Array, _: IntersectionObserver| {
            if let Some(entry) = entries.iter().last() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                set_visible.set(entry.is_intersecting());
            }
        });

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));

        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
            Ok(observer) => {
                observer.observe(&element);
                slot.set_value(Some((observer, callback)));
            }
            Err(e) => tracing::warn!(error = ?e, "IntersectionObserver unavailable"),
        }
    });

    on_cleanup(move || {
        if let Some((observer, _callback)) = slot.try_update_value(Option::take).flatten() {
            observer.disconnect();
        }
    });

    visible
}

/// `true` from the first time `target` becomes visible, forever after.
pub fn use_revealed<E>(target: NodeRef<E>, threshold: f64) -> ReadSignal<bool>
where
    E: ElementType,
    E::Output: JsCast + Clone + 'static,
{
    let visible = use_in_view(target, threshold);
    let (revealed, set_revealed) = signal(false);
    let latch = StoredValue::new(OnceLatch::new());

    Effect::new(move || {
        let now = visible.get();
        if latch.try_update_value(|l| l.observe(now)).unwrap_or(false) {
            set_revealed.set(true);
        }
    });

    revealed
}

/// Progress of `target` through the viewport, `0.0` to `1.0`, updated on
/// scroll and resize.
pub fn use_scroll_progress<E>(target: NodeRef<E>) -> ReadSignal<f64>
where
    E: ElementType,
    E::Output: JsCast + Clone + 'static,
{
    let (progress, set_progress) = signal(0.0_f64);

    Effect::new(move || {
        let Some(node) = target.get() else {
            return;
        };
        let element: web_sys::Element = node.unchecked_into();

        let measure = move || {
            let rect = element.get_bounding_client_rect();
            let viewport = window()
                .inner_height()
                .ok()
                .and_then(|h| h.as_f64())
                .unwrap_or_default();
            set_progress.set(scroll_progress(rect.top(), rect.height(), viewport));
        };
        measure();

        let on_resize = measure.clone();
        let scroll = window_event_listener(ev::scroll, move |_| measure());
        let resize = window_event_listener(ev::resize, move |_| on_resize());
        on_cleanup(move || {
            scroll.remove();
            resize.remove();
        });
    });

    progress
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};

    wasm_bindgen_test_configure!(run_in_browser);

    async fn sleep(ms: i32) {
        let promise = js_sys::Promise::new(&mut |resolve, _| {
            let _ = window().set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms);
        });
        let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
    }

    fn counting(ticks: &Rc<Cell<u32>>) -> impl Fn() + 'static {
        let ticks = Rc::clone(ticks);
        move || ticks.set(ticks.get() + 1)
    }

    #[wasm_bindgen_test]
    async fn ticker_is_cleared_with_its_owner() {
        let ticks = Rc::new(Cell::new(0));
        let owner = Owner::new();
        owner.with(|| Ticker::new().start(Duration::from_millis(5), counting(&ticks)));

        sleep(50).await;
        assert!(ticks.get() > 0);

        owner.cleanup();
        let at_teardown = ticks.get();
        sleep(50).await;
        assert_eq!(ticks.get(), at_teardown);
    }

    #[wasm_bindgen_test]
    async fn restart_replaces_the_running_interval() {
        let first = Rc::new(Cell::new(0));
        let second = Rc::new(Cell::new(0));
        let owner = Owner::new();
        let ticker = owner.with(Ticker::new);

        ticker.start(Duration::from_millis(5), counting(&first));
        sleep(30).await;
        ticker.start(Duration::from_millis(5), counting(&second));
        let first_at_restart = first.get();
        sleep(50).await;

        assert_eq!(first.get(), first_at_restart);
        assert!(second.get() > 0);

        ticker.stop();
        let stopped = second.get();
        sleep(30).await;
        assert_eq!(second.get(), stopped);
        owner.cleanup();
    }
}
