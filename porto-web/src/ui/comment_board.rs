use std::rc::Rc;

use porto_client::{
    api::{CommentId, Error, NewComment},
    Board, CommentRepository, DeleteFlow, LocalOnlyRepository, RemoteSyncedRepository,
    SubmitState, Subscription, SUCCESS_FLASH_SECS,
};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::{cache::LocalStorageCache, config, store::RestStore, ui, util};

pub enum BoardMsg {
    SnapshotReceived(Board),

    NameChanged(String),
    BodyChanged(String),
    SubmitClicked,
    SubmitComplete(Result<CommentId, Error>),
    SuccessFlashExpired(u32),

    DeleteRequested(CommentId),
    DeleteCancelled,
    DeleteConfirmed,
    DeleteComplete(Result<(), Error>),
    DeleteErrorDismissed,
}

pub struct CommentBoard {
    repo: Rc<dyn CommentRepository>,
    watcher: Subscription,
    board: Board,
    loaded: bool,

    name: String,
    body: String,
    submit: SubmitState,
    // bumped on every success so a stale flash timer cannot fire
    flash_epoch: u32,

    delete_flow: DeleteFlow,
    delete_error: Option<Error>,
}

impl Component for CommentBoard {
    type Message = BoardMsg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let repo: Rc<dyn CommentRepository> = match config::COMMENT_BACKEND {
            config::CommentBackend::RemoteSynced => Rc::new(RemoteSyncedRepository::new(
                RestStore::new(config::DATABASE_URL),
            )),
            config::CommentBackend::LocalOnly => {
                Rc::new(LocalOnlyRepository::new(LocalStorageCache))
            }
        };

        let link = ctx.link().clone();
        let watcher = repo.watch(Box::new(move |board| {
            link.send_message(BoardMsg::SnapshotReceived(board))
        }));

        CommentBoard {
            repo,
            watcher,
            board: Board::stub(),
            loaded: false,
            name: String::new(),
            body: String::new(),
            submit: SubmitState::Idle,
            flash_epoch: 0,
            delete_flow: DeleteFlow::default(),
            delete_error: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            BoardMsg::SnapshotReceived(board) => {
                self.board = board;
                self.loaded = true;
            }

            BoardMsg::NameChanged(name) => self.name = name,
            BoardMsg::BodyChanged(body) => self.body = body,
            BoardMsg::SubmitClicked => {
                if self.submit.is_submitting() {
                    return false;
                }
                // Surface validation failures without ever leaving Idle, so
                // the submit button stays enabled for the fix-up
                if let Err(e) = NewComment::new(&self.name, &self.body) {
                    self.submit = SubmitState::Failed(e);
                    return true;
                }
                self.submit.begin();
                let repo = self.repo.clone();
                let name = self.name.clone();
                let body = self.body.clone();
                ctx.link().send_future(async move {
                    BoardMsg::SubmitComplete(repo.create(&name, &body).await)
                });
            }
            BoardMsg::SubmitComplete(res) => match res {
                Ok(id) => {
                    tracing::debug!(id = %id.as_str(), "comment accepted by store");
                    self.name.clear();
                    self.body.clear();
                    self.submit.finish(Ok(()));
                    self.flash_epoch += 1;
                    let epoch = self.flash_epoch;
                    ctx.link().send_future(async move {
                        util::sleep_for(chrono::Duration::seconds(SUCCESS_FLASH_SECS)).await;
                        BoardMsg::SuccessFlashExpired(epoch)
                    });
                }
                // Inputs stay as typed: store failures are retryable as-is
                Err(e) => self.submit.finish(Err(e)),
            },
            BoardMsg::SuccessFlashExpired(epoch) => {
                if epoch != self.flash_epoch {
                    return false;
                }
                self.submit.expire_success();
            }

            BoardMsg::DeleteRequested(id) => self.delete_flow.request(id),
            BoardMsg::DeleteCancelled => self.delete_flow.cancel(),
            BoardMsg::DeleteConfirmed => {
                if let Some(id) = self.delete_flow.confirm() {
                    let repo = self.repo.clone();
                    ctx.link().send_future(async move {
                        BoardMsg::DeleteComplete(repo.delete(&id).await)
                    });
                }
            }
            BoardMsg::DeleteComplete(res) => {
                // The row itself only disappears once a snapshot without it
                // arrives, whatever the store answered
                if let Err(e) = res {
                    self.delete_error = Some(e);
                }
            }
            BoardMsg::DeleteErrorDismissed => self.delete_error = None,
        }
        true
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.watcher.cancel(); // This should be unneeded as it cancels on drop, but better safe than sorry
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let status = match &self.submit {
            SubmitState::Idle => html! {},
            SubmitState::Submitting => html! {
                <p class="form-status">{ "Sending…" }</p>
            },
            SubmitState::Success => html! {
                <p class="form-status form-status-success">{ "Comment added!" }</p>
            },
            SubmitState::Failed(e) => html! {
                <p class="form-status form-status-error">{ e.user_message() }</p>
            },
        };

        let confirm_dialog = self.delete_flow.pending().map(|id| {
            let author = self
                .board
                .get(id)
                .map(|c| c.name.clone())
                .unwrap_or_else(|| String::from("this comment"));
            html! {
                <div class="modal-backdrop">
                    <div class="modal-box">
                        <p>{ format!("Delete the comment by {}?", author) }</p>
                        <div class="modal-actions">
                            <button
                                type="button"
                                class="btn"
                                onclick={ ctx.link().callback(|_| BoardMsg::DeleteCancelled) }
                            >
                                { "Cancel" }
                            </button>
                            <button
                                type="button"
                                class="btn btn-danger"
                                onclick={ ctx.link().callback(|_| BoardMsg::DeleteConfirmed) }
                            >
                                { "Delete" }
                            </button>
                        </div>
                    </div>
                </div>
            }
        });

        let delete_error = self.delete_error.as_ref().map(|e| {
            html! {
                <p class="form-status form-status-error">
                    { e.user_message() }
                    <button
                        type="button"
                        class="btn btn-dismiss"
                        onclick={ ctx.link().callback(|_| BoardMsg::DeleteErrorDismissed) }
                    >
                        { "✕" }
                    </button>
                </p>
            }
        });

        html! {
            <div class="comment-board">
                <form class="comment-form">
                    <input
                        type="text"
                        placeholder="Your name"
                        value={ self.name.clone() }
                        oninput={ ctx.link().callback(|e: InputEvent| {
                            BoardMsg::NameChanged(e.target_unchecked_into::<HtmlInputElement>().value())
                        }) }
                    />
                    <textarea
                        placeholder="Leave a comment…"
                        value={ self.body.clone() }
                        oninput={ ctx.link().callback(|e: InputEvent| {
                            BoardMsg::BodyChanged(e.target_unchecked_into::<HtmlTextAreaElement>().value())
                        }) }
                    />
                    <button
                        type="button"
                        class="btn btn-primary"
                        disabled={ self.submit.is_submitting() }
                        onclick={ ctx.link().callback(|_| BoardMsg::SubmitClicked) }
                    >
                        { if self.submit.is_submitting() { "Sending…" } else { "Post comment" } }
                    </button>
                    { status }
                </form>
                { for delete_error }
                <ui::CommentList
                    board={ self.board.clone() }
                    loaded={ self.loaded }
                    on_delete_request={ ctx.link().callback(BoardMsg::DeleteRequested) }
                />
                { for confirm_dialog }
            </div>
        }
    }
}
