// Statistic that counts up from zero the first time it is seen

use inctrl_core::counter::{CounterRun, TimerCommand, format_count};
use leptos::html;
use leptos::prelude::*;

use crate::hooks::{Ticker, use_in_view, use_site_config};

#[component]
pub fn AnimatedCounter(value: u32, #[prop(optional)] suffix: &'static str) -> impl IntoView {
    let timing = use_site_config().timing;
    let node = NodeRef::<html::Span>::new();
    let visible = use_in_view(node, timing.counter_threshold());
    let run = StoredValue::new(CounterRun::new(value, timing.counter_steps));
    let (shown, set_shown) = signal(0_u32);
    let ticker = Ticker::new();

    let tick = move || {
        let Some((now, command)) = run.try_update_value(CounterRun::on_tick) else {
            ticker.stop();
            return;
        };
        set_shown.set(now);
        if command == TimerCommand::Stop {
            ticker.stop();
        }
    };

    Effect::new(move || {
        let seen = visible.get();
        if run.try_update_value(|r| r.on_visibility(seen)) == Some(TimerCommand::Start) {
            tracing::debug!(target_value = value, "counter started");
            ticker.start(timing.counter_tick(), tick);
        }
    });

    on_cleanup(move || {
        if run.try_update_value(CounterRun::on_teardown) == Some(TimerCommand::Stop) {
            ticker.stop();
        }
    });

    view! {
        <span node_ref=node class="counter-value">
            {move || format_count(shown.get(), suffix)}
        </span>
    }
}
