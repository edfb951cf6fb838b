//! Square-root guessing game page.

use leptos::ev::KeyboardEvent;
use leptos::prelude::*;
use sqrt_game::SquareGame;

use crate::config::StorefrontConfig;

/// The game card.
///
/// The server renders the lowest configured target so that SSR output is
/// deterministic; the browser picks a random target once hydrated.
#[component]
pub fn SquareGamePage() -> impl IntoView {
    let config = use_context::<StorefrontConfig>().unwrap_or_default();
    let initial_target = f64::from(config.game.target_min);
    let game = RwSignal::new(SquareGame::with_target(config.game, initial_target));

    Effect::new(move |_| {
        game.update(|g| {
            g.pick_new_target(&mut rand::thread_rng());
        });
    });

    let target_text = move || game.with(|g| g.target_text().to_string());
    let precision_text = move || game.with(|g| g.precision_text().to_string());
    let guess_text = move || game.with(|g| g.input().to_string());

    let submit = move || {
        game.update(|g| {
            g.submit();
        })
    };

    view! {
        <div class="game-card">
            <h1>"Square root guessing game :0"</h1>

            <p class="description">
                "Guess the square root of "
                <input
                    type="text"
                    prop:value=target_text
                    on:input=move |ev| {
                        let raw = event_target_value(&ev);
                        game.update(|g| {
                            g.set_target_from_input(&raw);
                        })
                    }
                />
                " to "
                <input
                    type="text"
                    prop:value=precision_text
                    on:input=move |ev| {
                        let raw = event_target_value(&ev);
                        game.update(|g| {
                            g.set_precision_from_input(&raw);
                        })
                    }
                />
                " correct digits after the decimal place."
            </p>

            <button
                class="primary"
                on:click=move |_| {
                    game.update(|g| {
                        g.pick_new_target(&mut rand::thread_rng());
                    })
                }
            >
                "Pick a new target number"
            </button>

            <div class="guess-input">
                <label for="guess">"Enter your guess:"</label>
                <input
                    id="guess"
                    type="text"
                    prop:value=guess_text
                    on:input=move |ev| {
                        let raw = event_target_value(&ev);
                        game.update(|g| g.set_input(raw))
                    }
                    on:keyup=move |ev: KeyboardEvent| {
                        if ev.key() == "Enter" {
                            submit();
                        }
                    }
                />
            </div>

            <GuessList game=game/>
        </div>
    }
}

/// Previous guesses, newest first, styled by closeness to the goal.
#[component]
fn GuessList(game: RwSignal<SquareGame>) -> impl IntoView {
    let has_guesses = move || game.with(|g| !g.guesses().is_empty());

    let rows = move || {
        game.with(|g| {
            g.guesses_newest_first()
                .map(|guess| {
                    let class = format!("guess-item {}", g.class_for(guess));
                    let text = guess.describe();
                    view! { <div class=class>{text}</div> }
                })
                .collect_view()
        })
    };

    view! {
        <Show when=has_guesses>
            <div class="guess-list">{rows}</div>
        </Show>
    }
}
