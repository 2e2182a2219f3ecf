use yew::prelude::*;

use crate::content;

#[function_component(SkillGrid)]
pub fn skill_grid() -> Html {
    let cards = content::SKILLS.iter().map(|s| {
        html! {
            <div class="skill-card">
                <img src={ s.image } alt={ s.name } />
                <span>{ s.name }</span>
            </div>
        }
    });

    html! {
        <div class="skill-grid">
            { for cards }
        </div>
    }
}
