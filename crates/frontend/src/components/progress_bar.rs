//! Countdown progress indicator

use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct ProgressBarProps {
    /// Remaining units
    pub value: u32,
    /// Full-scale value
    pub max: u32,
}

#[function_component(ProgressBar)]
pub fn progress_bar(props: &ProgressBarProps) -> Html {
    let percent = if props.max == 0 {
        0
    } else {
        props.value * 100 / props.max
    };
    html! {
        <div class="progress-track">
            <div class="progress-fill" style={format!("width: {percent}%")}></div>
        </div>
    }
}
