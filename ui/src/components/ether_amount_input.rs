use api::wallet::purchase::StepDirection;
use api::wallet::purchase::PURCHASE_STEP;
use api::EtherAmount;
use dioxus::prelude::*;

use crate::components::pico::Button;
use crate::components::pico::ButtonType;

/// Ether amount field with step buttons, bounded by `max` when known.
#[component]
pub fn EtherAmountInput(
    value: String,
    #[props(!optional)] max: Option<EtherAmount>,
    on_input: EventHandler<String>,
    on_step: EventHandler<StepDirection>,
) -> Element {
    let max_attr = max.map(|m| m.to_string()).unwrap_or_default();
    let step_attr = PURCHASE_STEP.to_string();

    rsx! {
        fieldset {
            role: "group",
            input {
                r#type: "number",
                name: "purchase-amount",
                min: "0",
                max: "{max_attr}",
                step: "{step_attr}",
                value: "{value}",
                oninput: move |event: FormEvent| on_input.call(event.value()),
            }
            Button {
                button_type: ButtonType::Secondary,
                outline: true,
                on_click: move |_| on_step.call(StepDirection::Down),
                "−"
            }
            Button {
                button_type: ButtonType::Secondary,
                outline: true,
                on_click: move |_| on_step.call(StepDirection::Up),
                "+"
            }
        }
    }
}
