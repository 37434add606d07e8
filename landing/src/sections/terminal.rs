use crate::config::Timing;
use crate::content::TERMINAL_SEQUENCES;
use crate::sequencer::{Sequencer, line_tone};
use leptos::prelude::*;

/// Cancel every timeout registered for the current cycle.
fn clear_pending(pending: StoredValue<Vec<TimeoutHandle>>) {
    pending.try_update_value(|handles| {
        for handle in handles.drain(..) {
            handle.clear();
        }
    });
}

/// Animated bot session: types each scripted command, prints its output,
/// then moves on to the next one forever.
#[component]
pub fn Terminal() -> impl IntoView {
    let timing = Timing::default();
    let sequencer = RwSignal::new(Sequencer::new(&TERMINAL_SEQUENCES, timing));
    let pending = StoredValue::new(Vec::<TimeoutHandle>::new());
    let active_index = Memo::new(move |_| sequencer.with(|s| s.active_index()));
    let (show_cursor, set_show_cursor) = signal(true);

    // One timer chain per sequence index. A new index tears down the old chain
    // first; the generation check in `apply` catches anything that slipped by.
    Effect::new(move |_| {
        active_index.track();
        clear_pending(pending);

        let Some((generation, steps)) = sequencer.try_update(|s| s.start_cycle()) else {
            return;
        };
        let handles = steps
            .into_iter()
            .filter_map(|scheduled| {
                let step = scheduled.step;
                set_timeout_with_handle(
                    move || {
                        sequencer.try_update(|s| s.apply(generation, step));
                    },
                    scheduled.at,
                )
                .map_err(|err| tracing::warn!(?err, ?step, "could not schedule terminal step"))
                .ok()
            })
            .collect::<Vec<_>>();
        pending.set_value(handles);
    });

    let blink = set_interval_with_handle(
        move || set_show_cursor.update(|visible| *visible = !*visible),
        timing.cursor_blink,
    )
    .map_err(|err| tracing::warn!(?err, "could not start cursor blink"))
    .ok();

    on_cleanup(move || {
        if let Some(handle) = blink {
            handle.clear();
        }
        clear_pending(pending);
        sequencer.try_update(|s| s.cancel());
    });

    let is_executing = move || sequencer.with(|s| s.state().is_executing);
    let typed = move || sequencer.with(|s| s.state().typed_prefix.clone());

    view! {
        <div class="terminal">
            <div class="terminal-header">
                <div class="terminal-header-left">
                    <div class="window-dots">
                        <span class="dot red"></span>
                        <span class="dot yellow"></span>
                        <span class="dot green"></span>
                    </div>
                    <span class="terminal-title">"tg-deploy — bot session"</span>
                </div>
                <div class="terminal-live">
                    <span class="pulse-dot"></span>
                    <span>"LIVE"</span>
                </div>
            </div>

            <div class="terminal-body">
                <div class="terminal-lines">
                    {move || sequencer.with(|s| {
                        s.state().emitted_lines.iter().map(|line| {
                            let class = line_tone(line).class();
                            view! { <div class=class>{line.clone()}</div> }
                        }).collect::<Vec<_>>()
                    })}

                    <Show
                        when=move || !is_executing()
                        fallback=|| view! {
                            <div class="terminal-executing">
                                <span class="bounce-dots">
                                    <span class="bounce-dot"></span>
                                    <span class="bounce-dot delay-1"></span>
                                    <span class="bounce-dot delay-2"></span>
                                </span>
                                <span class="terminal-executing-label">"Выполняется..."</span>
                            </div>
                        }
                    >
                        <div class="terminal-line">
                            <span class="terminal-user">"user@dev"</span>
                            <span class="terminal-sep">":"</span>
                            <span class="terminal-path">"~/project"</span>
                            <span class="terminal-prompt">"$ "</span>
                            <span class="terminal-command">{typed}</span>
                            <span class=move || if show_cursor.get() { "terminal-cursor visible" } else { "terminal-cursor" }>
                                "|"
                            </span>
                        </div>
                    </Show>
                </div>

                <div class="terminal-footer">
                    <div class="terminal-stat">
                        <span class="muted">"Деплоев выполнено:"</span>
                        <span class="value">{move || active_index.get() + 1}</span>
                    </div>
                    <div class="terminal-stat">
                        <span class="muted">"Бот:"</span>
                        <span class="muted">"Онлайн"</span>
                    </div>
                    <div class="terminal-stat">
                        <span class="muted">"Статус:"</span>
                        <span class="muted">{move || if is_executing() { "Деплоит..." } else { "Готов" }}</span>
                    </div>
                </div>
            </div>
        </div>
    }
}
