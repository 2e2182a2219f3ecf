use yew::prelude::*;

use crate::content;

#[function_component(Timeline)]
pub fn timeline() -> Html {
    let entries = content::TIMELINE.iter().map(|e| {
        html! {
            <li class="timeline-entry">
                <span class="timeline-year">{ e.year }</span>
                <div class="timeline-body">
                    <h3>{ e.title }</h3>
                    <p class="timeline-subtitle">{ e.subtitle }</p>
                    <p>{ e.description }</p>
                </div>
            </li>
        }
    });

    html! {
        <ul class="timeline">
            { for entries }
        </ul>
    }
}
