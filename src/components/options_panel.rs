//! Collapsible editor for generation options.
//!
//! DESIGN
//! ======
//! The panel never stores options. Each control derives a full replacement
//! value through `state::options` and hands it to `on_change`; only the
//! open/closed toggle is local.

use leptos::prelude::*;

use crate::net::types::ImageGenerationOptions;
use crate::state::options::{
    DIMENSION_MAX, DIMENSION_MIN, DIMENSION_STEP, PRESET_SIZES, STEPS_MAX, STEPS_MIN, STEPS_STEP, is_preset_selected,
    randomize_seed, seed_input_value, with_height_input, with_negative_prompt, with_preset, with_seed_input,
    with_steps_input, with_width_input,
};
use crate::util::browser::random_unit;

#[component]
pub fn OptionsPanel(
    options: Signal<ImageGenerationOptions>,
    on_change: Callback<ImageGenerationOptions>,
    #[prop(into)] disabled: Signal<bool>,
) -> impl IntoView {
    let open = RwSignal::new(false);

    let presets = PRESET_SIZES
        .iter()
        .map(|&preset| {
            view! {
                <button
                    class="btn options-panel__preset"
                    class:options-panel__preset--active=move || is_preset_selected(&options.get(), preset)
                    disabled=move || disabled.get()
                    on:click=move |_| on_change.run(with_preset(&options.get_untracked(), preset))
                >
                    <span class="options-panel__preset-label">{preset.label}</span>
                    <span class="options-panel__preset-size">{format!("{}×{}", preset.width, preset.height)}</span>
                </button>
            }
        })
        .collect_view();

    view! {
        <section class="options-panel" class:options-panel--open=move || open.get()>
            <button class="options-panel__toggle" on:click=move |_| open.update(|o| *o = !*o)>
                {move || if open.get() { "▾ Advanced options" } else { "▸ Advanced options" }}
            </button>
            <div class="options-panel__body" class:options-panel__body--hidden=move || !open.get()>
                <div class="options-panel__group">
                    <span class="options-panel__label">"Size"</span>
                    <div class="options-panel__presets">{presets}</div>
                    <div class="options-panel__dimensions">
                        <label class="options-panel__field">
                            "Width"
                            <input
                                type="number"
                                min=DIMENSION_MIN.to_string()
                                max=DIMENSION_MAX.to_string()
                                step=DIMENSION_STEP.to_string()
                                prop:value=move || options.get().width.to_string()
                                disabled=move || disabled.get()
                                on:change=move |ev| {
                                    on_change.run(with_width_input(&options.get_untracked(), &event_target_value(&ev)));
                                }
                            />
                        </label>
                        <label class="options-panel__field">
                            "Height"
                            <input
                                type="number"
                                min=DIMENSION_MIN.to_string()
                                max=DIMENSION_MAX.to_string()
                                step=DIMENSION_STEP.to_string()
                                prop:value=move || options.get().height.to_string()
                                disabled=move || disabled.get()
                                on:change=move |ev| {
                                    on_change.run(with_height_input(&options.get_untracked(), &event_target_value(&ev)));
                                }
                            />
                        </label>
                    </div>
                </div>

                <div class="options-panel__group">
                    <label class="options-panel__label">
                        {move || format!("Steps: {}", options.get().steps)}
                    </label>
                    <input
                        class="options-panel__slider"
                        type="range"
                        min=STEPS_MIN.to_string()
                        max=STEPS_MAX.to_string()
                        step=STEPS_STEP.to_string()
                        prop:value=move || options.get().steps.to_string()
                        disabled=move || disabled.get()
                        on:input=move |ev| {
                            on_change.run(with_steps_input(&options.get_untracked(), &event_target_value(&ev)));
                        }
                    />
                </div>

                <div class="options-panel__group">
                    <span class="options-panel__label">"Seed"</span>
                    <div class="options-panel__seed">
                        <input
                            type="text"
                            inputmode="numeric"
                            placeholder="Random"
                            prop:value=move || seed_input_value(&options.get())
                            disabled=move || disabled.get()
                            on:change=move |ev| {
                                on_change.run(with_seed_input(&options.get_untracked(), &event_target_value(&ev)));
                            }
                        />
                        <button
                            class="btn options-panel__shuffle"
                            title="Random seed"
                            disabled=move || disabled.get()
                            on:click=move |_| on_change.run(randomize_seed(&options.get_untracked(), random_unit()))
                        >
                            "🎲"
                        </button>
                    </div>
                </div>

                <div class="options-panel__group">
                    <span class="options-panel__label">"Negative prompt"</span>
                    <textarea
                        class="options-panel__negative"
                        rows="2"
                        placeholder="Things to avoid in the image"
                        prop:value=move || options.get().negative_prompt
                        disabled=move || disabled.get()
                        on:input=move |ev| {
                            on_change.run(with_negative_prompt(&options.get_untracked(), &event_target_value(&ev)));
                        }
                    ></textarea>
                </div>
            </div>
        </section>
    }
}
