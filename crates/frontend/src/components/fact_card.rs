//! Fact display card

use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct FactCardProps {
    pub text: String,
    pub source: String,
    #[prop_or_default]
    pub category: Option<String>,
    #[prop_or_default]
    pub image: Option<String>,
}

/// Renders the fact text with its source link, plus the category tag and
/// image when the record carries them.
#[function_component(FactCard)]
pub fn fact_card(props: &FactCardProps) -> Html {
    html! {
        <div class="fact">
            if let Some(image) = &props.image {
                <img class="fact-image" src={image.clone()} alt="" />
            }
            <p class="fact-text">{&props.text}</p>
            if let Some(category) = &props.category {
                <span class="fact-category">{category}</span>
            }
            <a class="fact-source" href={props.source.clone()}>{"Source"}</a>
        </div>
    }
}
