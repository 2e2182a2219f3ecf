use porto_client::{api::CommentId, Board};
use yew::prelude::*;

use crate::util;

#[derive(Clone, PartialEq, Properties)]
pub struct CommentListProps {
    pub board: Board,
    pub loaded: bool,
    pub on_delete_request: Callback<CommentId>,
}

#[function_component(CommentList)]
pub fn comment_list(p: &CommentListProps) -> Html {
    if !p.loaded {
        return html! {
            <p class="comment-list-empty">{ "Loading comments…" }</p>
        };
    }
    if p.board.is_empty() {
        return html! {
            <p class="comment-list-empty">{ "Be the first to leave a comment!" }</p>
        };
    }

    let items = p.board.comments.iter().map(|c| {
        let on_delete = {
            let id = c.id.clone();
            p.on_delete_request.reform(move |_| id.clone())
        };
        html! {
            <li class="comment-item">
                <div class="comment-header">
                    <span class="comment-author">{ &c.name }</span>
                    <span class="comment-age">{ util::format_age(c.created_at) }</span>
                    <button
                        type="button"
                        class="btn btn-dismiss"
                        aria-label="Delete comment"
                        onclick={ on_delete }
                    >
                        { "✕" }
                    </button>
                </div>
                <p class="comment-body">{ &c.body }</p>
            </li>
        }
    });

    html! {
        <>
            <h3 class="comment-count">{ format!("Comments ({})", p.board.len()) }</h3>
            <ul class="comment-list">
                { for items }
            </ul>
        </>
    }
}
