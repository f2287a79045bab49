pub mod data;
pub mod deck;
pub mod filters;
pub mod onboarding;
pub mod reveal;
pub mod storage;
pub mod swipe;

use data::{fetch_candidates, Candidate};
use deck::{Deck, DeckMode, MatchResult};
use filters::{apply_filters, FilterPrefs};
use onboarding::{
    Onboarding, OnboardingStep, GENDER_OPTIONS, GOAL_OPTIONS, MATCHING_DURATION_MS,
    MATCHING_MESSAGE_INTERVAL_MS, TRAIT_OPTIONS, VIBE_OPTIONS,
};
use reveal::{burst_particles, Particle, RevealAnimation, RevealFrame};
use storage::{load_state, save_state};
use swipe::{card_transform, classify_release, DragState, SwipeOutcome};

use gloo_render::{request_animation_frame, AnimationFrame};
use gloo_timers::callback::{Interval, Timeout};
use std::cell::RefCell;
use std::ops::Deref;
use std::rc::Rc;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::window;
use yew::prelude::*;

/// Index policy the product ships with. Bounded mode (terminal "no more
/// athletes" panel) stays available behind this switch.
const DECK_MODE: DeckMode = DeckMode::Cyclic;

/// How long the committed card takes to fly off-screen.
const FLY_OFF_MS: u32 = 300;

const SPRING_BACK_TRANSITION: &str =
    "transform 0.3s cubic-bezier(0.175, 0.885, 0.32, 1.275)";

#[derive(PartialEq, Clone)]
enum FetchStatus {
    Loading,
    Idle,
    Error(String),
}

/// A committed card mid flight. Pointer input is ignored until the fly-off
/// timer resolves the swipe.
#[derive(Clone, PartialEq)]
struct FlyOff {
    target_x: f64,
    target_y: f64,
    outcome: SwipeOutcome,
    super_like: bool,
}

#[function_component(App)]
fn app() -> Html {
    let stored = use_state(load_state);
    let celebration = use_state(|| None::<MatchResult>);

    let on_onboarding_complete = {
        let stored = stored.clone();
        Callback::from(move |_: ()| {
            let mut next = (*stored).clone();
            next.onboarding_complete = true;
            save_state(&next);
            stored.set(next);
        })
    };

    let on_prefs_change = {
        let stored = stored.clone();
        Callback::from(move |prefs: FilterPrefs| {
            let mut next = (*stored).clone();
            next.prefs = prefs;
            save_state(&next);
            stored.set(next);
        })
    };

    let on_accept = {
        let celebration = celebration.clone();
        Callback::from(move |candidate: Candidate| {
            celebration.set(Some(MatchResult {
                candidate,
                super_like: false,
            }));
        })
    };

    let on_super_like = {
        let celebration = celebration.clone();
        Callback::from(move |candidate: Candidate| {
            celebration.set(Some(MatchResult {
                candidate,
                super_like: true,
            }));
        })
    };

    let on_reject = Callback::from(|candidate: Candidate| {
        log::debug!("passed on {}", candidate.id);
    });

    let dismiss_celebration = {
        let celebration = celebration.clone();
        Callback::from(move |_: ()| celebration.set(None))
    };

    if !stored.onboarding_complete {
        return html! {
            <div class="app-container">
                <OnboardingFlow on_complete={on_onboarding_complete} />
            </div>
        };
    }

    let overlay = match celebration.deref() {
        Some(result) => {
            let title = if result.super_like {
                "Super matched!"
            } else {
                "It's a match!"
            };
            html! {
                <Celebration title={title} on_continue={dismiss_celebration}>
                    <img class="celebration-photo"
                        src={result.candidate.photos[0].clone()}
                        alt={result.candidate.name.clone()} />
                    <p class="celebration-name">
                        { format!("{}, {}", result.candidate.name, result.candidate.age) }
                    </p>
                    <p class="celebration-hint">{ "Say hi and set up a session." }</p>
                </Celebration>
            }
        }
        None => html! {},
    };

    html! {
        <div class="app-container">
            <DeckScreen
                prefs={stored.prefs.clone()}
                on_prefs_change={on_prefs_change}
                on_accept={on_accept}
                on_reject={on_reject}
                on_super_like={on_super_like}
            />
            { overlay }
        </div>
    }
}

// ---------------------------------------------------------------------------
// Onboarding flow
// ---------------------------------------------------------------------------

#[derive(Properties, PartialEq)]
struct OnboardingFlowProps {
    on_complete: Callback<()>,
}

#[function_component(OnboardingFlow)]
fn onboarding_flow(props: &OnboardingFlowProps) -> Html {
    let flow = use_state(Onboarding::default);
    let matching_tick = use_state(|| 0u32);
    let tick_counter = use_mut_ref(|| 0u32);

    // The matching phase owns the only timers in the flow: one delay to
    // resolve into Reveal, one interval rotating the status line. Both
    // handles die with the effect, so navigating away cancels them.
    {
        let flow = flow.clone();
        let matching_tick = matching_tick.clone();
        let tick_counter = tick_counter.clone();
        let current_step = flow.step();

        use_effect_with_deps(
            move |step: &OnboardingStep| {
                let mut handles = None;

                if *step == OnboardingStep::Matching {
                    *tick_counter.borrow_mut() = 0;
                    matching_tick.set(0);

                    let timeout = {
                        let flow = flow.clone();
                        Timeout::new(MATCHING_DURATION_MS, move || {
                            let mut next = (*flow).clone();
                            if next.finish_matching() {
                                flow.set(next);
                            }
                        })
                    };

                    let interval = {
                        let matching_tick = matching_tick.clone();
                        let tick_counter = tick_counter.clone();
                        Interval::new(MATCHING_MESSAGE_INTERVAL_MS, move || {
                            let next = tick_counter.borrow().wrapping_add(1);
                            *tick_counter.borrow_mut() = next;
                            matching_tick.set(next);
                        })
                    };

                    handles = Some((timeout, interval));
                }

                move || drop(handles)
            },
            current_step,
        );
    }

    let advance = {
        let flow = flow.clone();
        let on_complete = props.on_complete.clone();
        Callback::from(move |_: ()| {
            let mut next = (*flow).clone();
            if next.advance() {
                if next.step() == OnboardingStep::Complete {
                    on_complete.emit(());
                }
                flow.set(next);
            }
        })
    };

    let back = {
        let flow = flow.clone();
        Callback::from(move |_: ()| {
            let mut next = (*flow).clone();
            if next.back() {
                flow.set(next);
            }
        })
    };

    let skip = {
        let flow = flow.clone();
        let on_complete = props.on_complete.clone();
        Callback::from(move |_: ()| {
            let mut next = (*flow).clone();
            next.skip();
            on_complete.emit(());
            flow.set(next);
        })
    };

    let select_gender = selection_callback(&flow, |flow, id| flow.select_gender(id));
    let select_goal = selection_callback(&flow, |flow, id| flow.select_goal(id));
    let toggle_vibe = selection_callback(&flow, |flow, id| flow.toggle_vibe(id));
    let toggle_strength = selection_callback(&flow, |flow, id| flow.toggle_strength(id));
    let toggle_weakness = selection_callback(&flow, |flow, id| flow.toggle_weakness(id));

    let step = flow.step();
    let body = match step {
        OnboardingStep::Welcome => html! {
            <div class="onboarding-body welcome">
                <p class="welcome-blurb">
                    { "Find a training partner who shows up. Swipe through athletes near you." }
                </p>
            </div>
        },
        OnboardingStep::GenderSelect => render_choice_grid(
            &GENDER_OPTIONS,
            flow.gender.as_deref(),
            &select_gender,
        ),
        OnboardingStep::GoalSelect => render_choice_grid(
            &GOAL_OPTIONS,
            flow.goal.as_deref(),
            &select_goal,
        ),
        OnboardingStep::VibeSelect => render_tag_grid(&VIBE_OPTIONS, &flow.vibes, &toggle_vibe),
        OnboardingStep::StrengthWeaknessSelect => html! {
            <div class="onboarding-body traits">
                <h3>{ "Strong at" }</h3>
                { render_tag_grid(&TRAIT_OPTIONS, &flow.strengths, &toggle_strength) }
                <h3>{ "Working on" }</h3>
                { render_tag_grid(&TRAIT_OPTIONS, &flow.weaknesses, &toggle_weakness) }
            </div>
        },
        OnboardingStep::Matching => html! {
            <div class="onboarding-body matching">
                <div class="matching-spinner"></div>
                <p class="matching-status">{ Onboarding::matching_message(*matching_tick) }</p>
            </div>
        },
        OnboardingStep::Reveal => {
            let advance = advance.clone();
            return html! {
                <Celebration title={"It's a match"} on_continue={advance}>
                    <p class="celebration-name">{ "Your first spotters are lined up." }</p>
                    <p class="celebration-hint">{ "Head into the deck and start swiping." }</p>
                </Celebration>
            };
        }
        OnboardingStep::Complete => html! {},
    };

    let continue_click = {
        let advance = advance.clone();
        Callback::from(move |_: MouseEvent| advance.emit(()))
    };
    let back_click = {
        let back = back.clone();
        Callback::from(move |_: MouseEvent| back.emit(()))
    };
    let skip_click = {
        let skip = skip.clone();
        Callback::from(move |_: MouseEvent| skip.emit(()))
    };

    let show_back = matches!(
        step,
        OnboardingStep::GenderSelect
            | OnboardingStep::GoalSelect
            | OnboardingStep::VibeSelect
            | OnboardingStep::StrengthWeaknessSelect
    );
    let show_continue = step != OnboardingStep::Matching;

    html! {
        <div class="onboarding">
            <header class="onboarding-header">
                {
                    if show_back {
                        html! { <button class="back-button" onclick={back_click}>{ "‹" }</button> }
                    } else {
                        html! {}
                    }
                }
                <h2>{ step.title() }</h2>
                <button class="skip-link" onclick={skip_click}>{ "Skip" }</button>
            </header>
            { body }
            {
                if show_continue {
                    html! {
                        <button class="continue-button"
                            disabled={!flow.can_advance()}
                            onclick={continue_click}>
                            { "Continue" }
                        </button>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

fn selection_callback(
    flow: &UseStateHandle<Onboarding>,
    apply: fn(&mut Onboarding, &str),
) -> Callback<String> {
    let flow = flow.clone();
    Callback::from(move |id: String| {
        let mut next = (*flow).clone();
        apply(&mut next, &id);
        flow.set(next);
    })
}

fn render_choice_grid(options: &[&str], selected: Option<&str>, on_pick: &Callback<String>) -> Html {
    html! {
        <div class="onboarding-body choice-grid">
            { for options.iter().map(|&id| {
                let active = selected == Some(id);
                let on_click = {
                    let on_pick = on_pick.clone();
                    let id = id.to_string();
                    Callback::from(move |_: MouseEvent| on_pick.emit(id.clone()))
                };
                html! {
                    <button key={id}
                        class={classes!("choice-chip", active.then_some("active"))}
                        onclick={on_click}>
                        { option_label(id) }
                    </button>
                }
            }) }
        </div>
    }
}

fn render_tag_grid(
    options: &[&str],
    selected: &std::collections::HashSet<String>,
    on_toggle: &Callback<String>,
) -> Html {
    html! {
        <div class="tag-grid">
            { for options.iter().map(|&id| {
                let active = selected.contains(id);
                let on_click = {
                    let on_toggle = on_toggle.clone();
                    let id = id.to_string();
                    Callback::from(move |_: MouseEvent| on_toggle.emit(id.clone()))
                };
                html! {
                    <button key={id}
                        class={classes!("tag-chip", active.then_some("active"))}
                        onclick={on_click}>
                        { option_label(id) }
                    </button>
                }
            }) }
        </div>
    }
}

fn option_label(id: &str) -> String {
    id.split('-')
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

// ---------------------------------------------------------------------------
// Deck screen
// ---------------------------------------------------------------------------

#[derive(Properties, PartialEq)]
struct DeckScreenProps {
    prefs: FilterPrefs,
    on_prefs_change: Callback<FilterPrefs>,
    on_accept: Callback<Candidate>,
    on_reject: Callback<Candidate>,
    on_super_like: Callback<Candidate>,
}

#[function_component(DeckScreen)]
fn deck_screen(props: &DeckScreenProps) -> Html {
    let status = use_state(|| FetchStatus::Loading);
    let candidates = use_state(|| None::<Vec<Candidate>>);
    let deck = use_state(|| Deck::new(DECK_MODE, 0));
    let drag = use_state(|| None::<DragState>);
    let fly_off = use_state(|| None::<FlyOff>);
    let fly_off_timer = use_mut_ref(|| None::<Timeout>);

    {
        let status = status.clone();
        let candidates = candidates.clone();

        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    match fetch_candidates().await {
                        Ok(fetched) => {
                            log::info!("loaded {} athletes", fetched.len());
                            candidates.set(Some(fetched));
                            status.set(FetchStatus::Idle);
                        }
                        Err(err) => {
                            status.set(FetchStatus::Error(err.to_string()));
                            candidates.set(None);
                        }
                    }
                });
                || ()
            },
            (),
        );
    }

    // Rebuilding the filtered view invalidates every stored index: back to
    // the top with empty history.
    {
        let deck = deck.clone();
        let drag = drag.clone();
        let fly_off = fly_off.clone();
        let fly_off_timer = fly_off_timer.clone();

        use_effect_with_deps(
            move |(candidates, prefs): &(Option<Vec<Candidate>>, FilterPrefs)| {
                let len = candidates
                    .as_ref()
                    .map(|all| apply_filters(all, prefs).len())
                    .unwrap_or(0);
                let mut next = (*deck).clone();
                next.reset(len);
                deck.set(next);
                drag.set(None);
                fly_off.set(None);
                // A swipe resolved against the old view must not land.
                fly_off_timer.borrow_mut().take();
                || ()
            },
            ((*candidates).clone(), props.prefs.clone()),
        );
    }

    // Pending fly-off timer dies with the screen.
    {
        let fly_off_timer = fly_off_timer.clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    fly_off_timer.borrow_mut().take();
                }
            },
            (),
        );
    }

    // Tint the backdrop toward the pending verdict while dragging.
    {
        let drag = drag.clone();
        use_effect_with_deps(
            move |state: &Option<DragState>| {
                let background = state
                    .as_ref()
                    .and_then(|drag| body_background_for_delta(drag.dx()));
                if let Some(window) = window() {
                    if let Some(document) = window.document() {
                        if let Some(body) = document.body() {
                            let style = body.style();
                            let _ = style.set_property("transition", "background 0.25s ease");
                            match background {
                                Some(gradient) => {
                                    let _ = style.set_property("background", &gradient);
                                }
                                None => {
                                    let _ = style.remove_property("background");
                                }
                            }
                        }
                    }
                }
                || ()
            },
            (*drag).clone(),
        );
    }

    let all = candidates.deref().clone().unwrap_or_default();
    let view = apply_filters(&all, &props.prefs);

    let resolve_swipe = {
        let deck = deck.clone();
        let fly_off = fly_off.clone();
        let fly_off_timer = fly_off_timer.clone();
        let on_accept = props.on_accept.clone();
        let on_reject = props.on_reject.clone();
        let on_super_like = props.on_super_like.clone();

        // Commits the top card: fly it off, then advance and notify the host
        // exactly once when the timer lands.
        Callback::from(move |(candidate, leaving): (Candidate, FlyOff)| {
            fly_off.set(Some(leaving.clone()));

            let deck = deck.clone();
            let fly_off = fly_off.clone();
            let on_accept = on_accept.clone();
            let on_reject = on_reject.clone();
            let on_super_like = on_super_like.clone();

            let timeout = Timeout::new(FLY_OFF_MS, move || {
                let mut next = (*deck).clone();
                next.advance();
                deck.set(next);
                fly_off.set(None);

                if leaving.super_like {
                    on_super_like.emit(candidate);
                } else {
                    match leaving.outcome {
                        SwipeOutcome::Accept => on_accept.emit(candidate),
                        SwipeOutcome::Reject => on_reject.emit(candidate),
                        SwipeOutcome::Cancel => {}
                    }
                }
            });
            *fly_off_timer.borrow_mut() = Some(timeout);
        })
    };

    let current_card = deck
        .current()
        .filter(|&index| index < view.len())
        .map(|index| all[view[index]].clone());

    let rewind_click = {
        let deck = deck.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*deck).clone();
            next.rewind();
            deck.set(next);
        })
    };

    let super_like_click = {
        let resolve_swipe = resolve_swipe.clone();
        let current = current_card.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(candidate) = current.clone() else {
                return;
            };
            resolve_swipe.emit((
                candidate,
                FlyOff {
                    target_x: 0.0,
                    target_y: -fly_off_distance(),
                    outcome: SwipeOutcome::Accept,
                    super_like: true,
                },
            ));
        })
    };

    let reset_deck = {
        let deck = deck.clone();
        let view_len = view.len();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*deck).clone();
            next.reset(view_len);
            deck.set(next);
        })
    };

    let reset_filters = {
        let on_prefs_change = props.on_prefs_change.clone();
        Callback::from(move |_: MouseEvent| {
            on_prefs_change.emit(FilterPrefs::default());
        })
    };

    let deck_panel = match status.deref() {
        FetchStatus::Loading => html! { <p class="panel-placeholder">{ "Loading athletes…" }</p> },
        FetchStatus::Error(message) => html! { <p class="panel-error">{ message }</p> },
        FetchStatus::Idle => {
            if view.is_empty() {
                html! {
                    <div class="panel-placeholder empty-deck">
                        <p>{ "No athletes match your filters." }</p>
                        <button class="panel-action" onclick={reset_filters}>
                            { "Reset filters" }
                        </button>
                    </div>
                }
            } else if deck.is_exhausted() {
                html! {
                    <div class="panel-placeholder exhausted-deck">
                        <p>{ "You've seen everyone nearby." }</p>
                        <button class="panel-action" onclick={reset_deck}>
                            { "Start over" }
                        </button>
                    </div>
                }
            } else if let Some(candidate) = current_card.clone() {
                render_card_stack(
                    &candidate,
                    &deck,
                    &drag,
                    &fly_off,
                    &resolve_swipe,
                )
            } else {
                html! { <p class="panel-placeholder">{ "No athletes to show." }</p> }
            }
        }
    };

    let has_card = current_card.is_some() && fly_off.deref().is_none();

    html! {
        <div class="deck-screen">
            { render_filter_bar(&props.prefs, &props.on_prefs_change) }
            <main class="deck-area">
                { deck_panel }
            </main>
            <footer class="deck-controls">
                <button class="control rewind" onclick={rewind_click}>{ "↩" }</button>
                <button class="control super-like"
                    disabled={!has_card}
                    onclick={super_like_click}>
                    { "★" }
                </button>
            </footer>
        </div>
    }
}

fn render_filter_bar(prefs: &FilterPrefs, on_change: &Callback<FilterPrefs>) -> Html {
    let chip = |label: &str, active: bool, next: FilterPrefs| {
        let on_change = on_change.clone();
        let on_click = Callback::from(move |_: MouseEvent| on_change.emit(next.clone()));
        html! {
            <button class={classes!("filter-chip", active.then_some("active"))}
                onclick={on_click}>
                { label.to_string() }
            </button>
        }
    };

    let toggle_competitive = FilterPrefs {
        include_competitive: !prefs.include_competitive,
        ..prefs.clone()
    };
    let toggle_casual = FilterPrefs {
        include_casual: !prefs.include_casual,
        ..prefs.clone()
    };
    let toggle_proximity = FilterPrefs {
        sort_by_proximity: !prefs.sort_by_proximity,
        ..prefs.clone()
    };
    let toggle_nearby = FilterPrefs {
        max_distance_miles: if prefs.max_distance_miles.is_some() {
            None
        } else {
            Some(10.0)
        },
        ..prefs.clone()
    };

    html! {
        <nav class="filter-bar">
            { chip("Competitive", prefs.include_competitive, toggle_competitive) }
            { chip("Casual", prefs.include_casual, toggle_casual) }
            { chip("Nearest first", prefs.sort_by_proximity, toggle_proximity) }
            { chip("Within 10 mi", prefs.max_distance_miles.is_some(), toggle_nearby) }
        </nav>
    }
}

fn render_card_stack(
    candidate: &Candidate,
    deck: &UseStateHandle<Deck>,
    drag: &UseStateHandle<Option<DragState>>,
    fly_off: &UseStateHandle<Option<FlyOff>>,
    resolve_swipe: &Callback<(Candidate, FlyOff)>,
) -> Html {
    let half_width = half_screen_width();
    let is_dragging = drag.deref().is_some();

    let (dx, dy) = drag
        .deref()
        .as_ref()
        .map(|state| (state.dx(), state.dy()))
        .unwrap_or((0.0, 0.0));

    let transform = card_transform(dx, half_width);

    let style = match fly_off.deref() {
        Some(leaving) => {
            let rotation = if leaving.target_x < 0.0 {
                -swipe::MAX_ROTATION_DEG
            } else if leaving.target_x > 0.0 {
                swipe::MAX_ROTATION_DEG
            } else {
                0.0
            };
            format!(
                "transform: translate({:.1}px, {:.1}px) rotate({:.2}deg); transition: transform {}ms ease-in;",
                leaving.target_x, leaving.target_y, rotation, FLY_OFF_MS
            )
        }
        None => format!(
            "transform: translate({:.1}px, {:.1}px) rotate({:.2}deg); transition: {};",
            dx,
            dy,
            transform.rotation_deg,
            if is_dragging {
                "transform 0s"
            } else {
                SPRING_BACK_TRANSITION
            }
        ),
    };

    let pointer_down = {
        let drag = drag.clone();
        let fly_off = fly_off.clone();
        Callback::from(move |event: web_sys::PointerEvent| {
            event.prevent_default();
            if drag.deref().is_some() || fly_off.deref().is_some() {
                return;
            }
            if let Some(target) = event
                .target()
                .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            {
                let _ = target.set_pointer_capture(event.pointer_id());
            }
            drag.set(Some(DragState::begin(
                event.pointer_id(),
                f64::from(event.client_x()),
                f64::from(event.client_y()),
            )));
        })
    };

    let pointer_move = {
        let drag = drag.clone();
        Callback::from(move |event: web_sys::PointerEvent| {
            if let Some(mut state) = drag.deref().clone() {
                if state.pointer_id == event.pointer_id() {
                    event.prevent_default();
                    state.update(f64::from(event.client_x()), f64::from(event.client_y()));
                    drag.set(Some(state));
                }
            }
        })
    };

    let pointer_end = {
        let drag = drag.clone();
        let resolve_swipe = resolve_swipe.clone();
        let candidate = candidate.clone();
        Callback::from(move |event: web_sys::PointerEvent| {
            let Some(state) = drag.deref().clone() else {
                return;
            };
            if state.pointer_id != event.pointer_id() {
                return;
            }
            if let Some(target) = event
                .target()
                .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            {
                let _ = target.release_pointer_capture(event.pointer_id());
            }

            let outcome = classify_release(state.dx());
            drag.set(None);

            if outcome != SwipeOutcome::Cancel {
                let direction = if outcome == SwipeOutcome::Accept {
                    1.0
                } else {
                    -1.0
                };
                resolve_swipe.emit((
                    candidate.clone(),
                    FlyOff {
                        target_x: direction * fly_off_distance(),
                        // Keep the vertical displacement the card left with.
                        target_y: state.dy(),
                        outcome,
                        super_like: false,
                    },
                ));
            }
        })
    };

    let pointer_cancel = {
        let drag = drag.clone();
        Callback::from(move |event: web_sys::PointerEvent| {
            if let Some(state) = drag.deref().clone() {
                if state.pointer_id == event.pointer_id() {
                    if let Some(target) = event
                        .target()
                        .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
                    {
                        let _ = target.release_pointer_capture(event.pointer_id());
                    }
                    drag.set(None);
                }
            }
        })
    };

    let photo_index = deck.photo_index().min(candidate.photos.len() - 1);
    let photo = candidate.photos[photo_index].clone();

    let photo_count = candidate.photos.len();
    let prev_photo = {
        let deck = deck.clone();
        Callback::from(move |event: MouseEvent| {
            event.stop_propagation();
            let mut next = (*deck).clone();
            let current = next.photo_index();
            next.set_photo_index(current.saturating_sub(1), photo_count);
            deck.set(next);
        })
    };
    let next_photo = {
        let deck = deck.clone();
        Callback::from(move |event: MouseEvent| {
            event.stop_propagation();
            let mut next = (*deck).clone();
            next.set_photo_index(next.photo_index() + 1, photo_count);
            deck.set(next);
        })
    };

    let distance_line = match candidate.distance_miles {
        Some(distance) => format!("{:.0} mi away", distance),
        None => "Distance hidden".to_string(),
    };

    html! {
        <div class="card-container">
            <div key={candidate.id.clone()}
                class="athlete-card swipe-enabled"
                style={style}
                onpointerdown={pointer_down}
                onpointermove={pointer_move}
                onpointerup={pointer_end}
                onpointercancel={pointer_cancel}>
                <div class="card-photo">
                    <img src={photo} alt={candidate.name.clone()} draggable="false" />
                    <div class="photo-zone left" onclick={prev_photo}></div>
                    <div class="photo-zone right" onclick={next_photo}></div>
                    <div class="photo-dots">
                        { for (0..photo_count).map(|i| {
                            html! {
                                <span class={classes!("dot", (i == photo_index).then_some("active"))}></span>
                            }
                        }) }
                    </div>
                </div>
                <div class="card-info">
                    <p class="card-name">{ format!("{}, {}", candidate.name, candidate.age) }</p>
                    <p class="card-meta">
                        { format!("{} · {}", candidate.category.label(), distance_line) }
                    </p>
                </div>
                <span class="badge accept"
                    style={format!("opacity: {:.3};", transform.accept_opacity)}>
                    { "SPOT" }
                </span>
                <span class="badge reject"
                    style={format!("opacity: {:.3};", transform.reject_opacity)}>
                    { "PASS" }
                </span>
            </div>
        </div>
    }
}

// ---------------------------------------------------------------------------
// Celebration overlay
// ---------------------------------------------------------------------------

#[derive(Properties, PartialEq)]
struct CelebrationProps {
    title: AttrValue,
    on_continue: Callback<()>,
    children: Children,
}

#[function_component(Celebration)]
fn celebration(props: &CelebrationProps) -> Html {
    let frame = use_state(|| RevealFrame {
        scale: reveal::CARD_SCALE_FROM,
        opacity: 0.0,
        glow_opacity: reveal::GLOW_MIN_OPACITY,
    });
    let particles = use_state(|| burst_particles(&mut rand::thread_rng()));
    let animation = use_mut_ref(RevealAnimation::new);
    let raf = use_mut_ref(|| None::<AnimationFrame>);

    {
        let frame = frame.clone();
        let animation = animation.clone();
        let raf = raf.clone();

        use_effect_with_deps(
            move |_| {
                run_reveal_frame(animation, frame, raf.clone(), 0.0);
                move || {
                    raf.borrow_mut().take();
                }
            },
            (),
        );
    }

    let continue_click = {
        let on_continue = props.on_continue.clone();
        Callback::from(move |_: MouseEvent| on_continue.emit(()))
    };

    let card_style = format!(
        "transform: scale({:.4}); opacity: {:.4};",
        frame.scale, frame.opacity
    );
    let glow_style = format!("opacity: {:.4};", frame.glow_opacity);

    html! {
        <div class="celebration-overlay">
            <div class="burst-layer">
                { for particles.iter().map(render_particle) }
            </div>
            <div class="glow-halo" style={glow_style}></div>
            <div class="celebration-card" style={card_style}>
                <h2>{ props.title.clone() }</h2>
                { for props.children.iter() }
                <button class="continue-button" onclick={continue_click}>
                    { "Continue" }
                </button>
            </div>
        </div>
    }
}

fn run_reveal_frame(
    animation: Rc<RefCell<RevealAnimation>>,
    frame: UseStateHandle<RevealFrame>,
    raf: Rc<RefCell<Option<AnimationFrame>>>,
    last_timestamp: f64,
) {
    let raf_for_set = raf.clone();
    let handle = request_animation_frame(move |timestamp| {
        let dt = if last_timestamp > 0.0 {
            timestamp - last_timestamp
        } else {
            16.0
        };

        let next = animation.borrow_mut().step(dt);
        let finished = animation.borrow().is_finished();
        frame.set(next);

        if finished {
            raf.borrow_mut().take();
        } else {
            run_reveal_frame(animation, frame, raf.clone(), timestamp);
        }
    });
    *raf_for_set.borrow_mut() = Some(handle);
}

fn render_particle(particle: &Particle) -> Html {
    let style = format!(
        "--peak-x: {:.1}px; --peak-y: {:.1}px; --fall: {:.1}px; --spin: {:.0}deg; \
         width: {size:.1}px; height: {size:.1}px; \
         animation-duration: {:.0}ms; animation-delay: {:.0}ms;",
        particle.peak_x,
        particle.peak_y,
        particle.fall,
        particle.rotation_deg,
        particle.duration_ms,
        particle.delay_ms,
        size = particle.size,
    );
    html! {
        <span class="burst-particle" style={style}></span>
    }
}

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn half_screen_width() -> f64 {
    window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|value| value.as_f64())
        .map(|width| width / 2.0)
        .unwrap_or(180.0)
}

fn fly_off_distance() -> f64 {
    half_screen_width() * 2.0 + 200.0
}

fn body_background_for_delta(delta: f64) -> Option<String> {
    let normalized = (delta / swipe::SWIPE_THRESHOLD).clamp(-1.0, 1.0);
    if normalized.abs() < 0.01 {
        return None;
    }

    let strength = normalized.abs();
    let start_alpha = 0.18 * strength;
    let end_alpha = 0.38 * strength + 0.02;
    if normalized < 0.0 {
        Some(format!(
            "radial-gradient(circle at top, rgba(214, 48, 74, {:.3}), rgba(84, 10, 22, {:.3}))",
            start_alpha, end_alpha
        ))
    } else {
        Some(format!(
            "radial-gradient(circle at top, rgba(34, 197, 94, {:.3}), rgba(8, 66, 32, {:.3}))",
            start_alpha, end_alpha
        ))
    }
}

#[wasm_bindgen(start)]
pub fn run_app() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("spotter starting");
    yew::Renderer::<App>::new().render();
}
