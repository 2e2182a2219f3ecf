use yew::prelude::*;

use crate::content::{self, Demo};

#[function_component(ProjectGrid)]
pub fn project_grid() -> Html {
    let cards = content::PROJECTS.iter().map(|p| {
        let tags = p.technologies.iter().map(|t| {
            html! { <span class="tag">{ *t }</span> }
        });
        let demo_link = match p.demo {
            Demo::Website(url) => Some(("Live Demo", url)),
            Demo::Video(url) => Some(("Video Demo", url)),
            Demo::Prototype(url) => Some(("Prototype", url)),
            // the GitHub link below already covers it
            Demo::None => None,
        };
        let demo_link = demo_link.map(|(label, url)| {
            html! {
                <a href={ url } target="_blank" rel="noreferrer">{ label }</a>
            }
        });
        html! {
            <div class="project-card">
                <img class="card-image" src={ p.image } alt={ p.title } />
                <h3>{ p.title }</h3>
                <p>{ p.description }</p>
                <div class="tag-row">{ for tags }</div>
                <div class="card-actions">
                    <a href={ p.github_url } target="_blank" rel="noreferrer">
                        { "GitHub" }
                    </a>
                    { for demo_link }
                </div>
            </div>
        }
    });

    html! {
        <div class="project-grid">
            { for cards }
        </div>
    }
}
