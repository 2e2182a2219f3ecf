use yew::prelude::*;

use crate::content::{self, CertificateProof};

#[function_component(CertificationGrid)]
pub fn certification_grid() -> Html {
    let cards = content::CERTIFICATES.iter().map(|c| {
        let tags = c.tags.iter().map(|t| {
            html! { <span class="tag">{ *t }</span> }
        });
        let actions = match c.proof {
            CertificateProof::Pdf(url) => html! {
                <>
                    <a href={ url } target="_blank" rel="noreferrer">{ "View PDF" }</a>
                    <a href={ url } download="">{ "Download" }</a>
                </>
            },
            CertificateProof::Web(url) => html! {
                <a href={ url } target="_blank" rel="noreferrer">{ "View Certificate" }</a>
            },
        };
        html! {
            <div class="certification-card">
                <img class="card-image" src={ c.image } alt={ c.title } />
                <h3>{ c.title }</h3>
                <p class="certification-issuer">{ c.issuer }</p>
                <p class="certification-date">{ c.date }</p>
                <div class="tag-row">{ for tags }</div>
                <div class="card-actions">{ actions }</div>
            </div>
        }
    });

    html! {
        <div class="certification-grid">
            { for cards }
        </div>
    }
}
