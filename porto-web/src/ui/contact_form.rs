use porto_client::{
    api::{ContactMessage, Error},
    SubmitState, SUCCESS_FLASH_SECS,
};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::{contact, util};

pub enum ContactMsg {
    NameChanged(String),
    EmailChanged(String),
    MessageChanged(String),
    SubmitClicked,
    SubmitComplete(Result<(), Error>),
    SuccessFlashExpired(u32),
}

/// The contact form relays through a third party and keeps no copy of sent
/// messages; the only state is the in-flight submission.
pub struct ContactForm {
    name: String,
    email: String,
    message: String,
    submit: SubmitState,
    flash_epoch: u32,
}

impl Component for ContactForm {
    type Message = ContactMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        ContactForm {
            name: String::new(),
            email: String::new(),
            message: String::new(),
            submit: SubmitState::Idle,
            flash_epoch: 0,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ContactMsg::NameChanged(name) => self.name = name,
            ContactMsg::EmailChanged(email) => self.email = email,
            ContactMsg::MessageChanged(message) => self.message = message,
            ContactMsg::SubmitClicked => {
                if self.submit.is_submitting() {
                    return false;
                }
                let msg = match ContactMessage::new(&self.name, &self.email, &self.message) {
                    Ok(msg) => msg,
                    Err(e) => {
                        self.submit = SubmitState::Failed(e);
                        return true;
                    }
                };
                self.submit.begin();
                ctx.link().send_future(async move {
                    ContactMsg::SubmitComplete(contact::send_message(&msg).await)
                });
            }
            ContactMsg::SubmitComplete(res) => {
                if res.is_ok() {
                    self.name.clear();
                    self.email.clear();
                    self.message.clear();
                    self.flash_epoch += 1;
                    let epoch = self.flash_epoch;
                    ctx.link().send_future(async move {
                        util::sleep_for(chrono::Duration::seconds(SUCCESS_FLASH_SECS)).await;
                        ContactMsg::SuccessFlashExpired(epoch)
                    });
                }
                self.submit.finish(res);
            }
            ContactMsg::SuccessFlashExpired(epoch) => {
                if epoch != self.flash_epoch {
                    return false;
                }
                self.submit.expire_success();
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let status = match &self.submit {
            SubmitState::Idle | SubmitState::Submitting => html! {},
            SubmitState::Success => html! {
                <p class="form-status form-status-success">{ "Message sent, thank you!" }</p>
            },
            SubmitState::Failed(e) => html! {
                <p class="form-status form-status-error">{ e.user_message() }</p>
            },
        };

        html! {
            <form class="contact-form">
                <input
                    type="text"
                    placeholder="Your name"
                    value={ self.name.clone() }
                    oninput={ ctx.link().callback(|e: InputEvent| {
                        ContactMsg::NameChanged(e.target_unchecked_into::<HtmlInputElement>().value())
                    }) }
                />
                <input
                    type="email"
                    placeholder="Your email"
                    value={ self.email.clone() }
                    oninput={ ctx.link().callback(|e: InputEvent| {
                        ContactMsg::EmailChanged(e.target_unchecked_into::<HtmlInputElement>().value())
                    }) }
                />
                <textarea
                    placeholder="Your message"
                    value={ self.message.clone() }
                    oninput={ ctx.link().callback(|e: InputEvent| {
                        ContactMsg::MessageChanged(e.target_unchecked_into::<HtmlTextAreaElement>().value())
                    }) }
                />
                <button
                    type="button"
                    class="btn btn-primary"
                    disabled={ self.submit.is_submitting() }
                    onclick={ ctx.link().callback(|_| ContactMsg::SubmitClicked) }
                >
                    { if self.submit.is_submitting() { "Sending…" } else { "Send message" } }
                </button>
                { status }
            </form>
        }
    }
}
