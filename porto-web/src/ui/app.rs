use gloo_storage::{LocalStorage, Storage};
use wasm_bindgen::{prelude::Closure, JsCast};
use yew::prelude::*;

use crate::{content, ui, util};

const KEY_THEME: &str = "theme";

// Distance from the viewport top at which a section counts as the one being
// read, for nav highlighting
const SECTION_ANCHOR_PX: f64 = 100.0;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Theme {
    Light,
    Dark,
}

impl Theme {
    fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

pub enum AppMsg {
    ThemeToggled,
    ActiveSectionChanged(&'static str),
}

pub struct App {
    theme: Theme,
    active_section: &'static str,
    // kept alive for as long as the listeners are registered
    scroll_cb: Closure<dyn FnMut()>,
    resize_cb: Closure<dyn FnMut()>,
}

fn apply_theme(theme: Theme) {
    let body = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body());
    match body {
        None => tracing::warn!("no document body to apply theme to"),
        Some(body) => {
            if let Err(e) = body.set_attribute("data-theme", theme.as_str()) {
                tracing::warn!("failed applying theme: {e:?}");
            }
        }
    }
}

fn current_section() -> Option<&'static str> {
    let document = web_sys::window()?.document()?;
    for id in content::SECTIONS {
        if let Some(el) = document.get_element_by_id(id) {
            let rect = el.get_bounding_client_rect();
            if rect.top() <= SECTION_ANCHOR_PX && rect.bottom() >= SECTION_ANCHOR_PX {
                return Some(id);
            }
        }
    }
    None
}

fn section_label(id: &str) -> &'static str {
    match id {
        "about" => "About",
        "skills" => "Skills",
        "projects" => "Projects",
        "certifications" => "Certifications",
        "experience" => "Experience",
        "contact" => "Contact",
        "comments" => "Comments",
        _ => "",
    }
}

impl Component for App {
    type Message = AppMsg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let theme = match LocalStorage::get::<String>(KEY_THEME) {
            Ok(s) if s == "dark" => Theme::Dark,
            _ => Theme::Light,
        };
        apply_theme(theme);
        util::spawn_particles();

        let link = ctx.link().clone();
        let scroll_cb = Closure::<dyn FnMut()>::new(move || {
            if let Some(section) = current_section() {
                link.send_message(AppMsg::ActiveSectionChanged(section));
            }
        });
        let resize_cb = Closure::<dyn FnMut()>::new(|| util::spawn_particles());
        let window = web_sys::window().expect("no window available");
        window
            .add_event_listener_with_callback("scroll", scroll_cb.as_ref().unchecked_ref())
            .expect("failed registering scroll listener");
        window
            .add_event_listener_with_callback("resize", resize_cb.as_ref().unchecked_ref())
            .expect("failed registering resize listener");

        App {
            theme,
            active_section: content::SECTIONS[0],
            scroll_cb,
            resize_cb,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            AppMsg::ThemeToggled => {
                self.theme = self.theme.toggled();
                apply_theme(self.theme);
                if let Err(e) = LocalStorage::set(KEY_THEME, self.theme.as_str()) {
                    tracing::warn!("failed saving theme to local storage: {e}");
                }
            }
            AppMsg::ActiveSectionChanged(section) => {
                if section == self.active_section {
                    return false;
                }
                self.active_section = section;
            }
        }
        true
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        if let Some(window) = web_sys::window() {
            let _ = window.remove_event_listener_with_callback(
                "scroll",
                self.scroll_cb.as_ref().unchecked_ref(),
            );
            let _ = window.remove_event_listener_with_callback(
                "resize",
                self.resize_cb.as_ref().unchecked_ref(),
            );
        }
        util::clear_particles();
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let nav_items = content::SECTIONS.iter().map(|id| {
            let class = match *id == self.active_section {
                true => "nav-link active",
                false => "nav-link",
            };
            html! {
                <a class={ class } href={ format!("#{}", id) }>
                    { section_label(id) }
                </a>
            }
        });

        let theme_label = match self.theme {
            Theme::Light => "🌙",
            Theme::Dark => "☀",
        };

        html! {
            <>
                <nav class="topbar">
                    <span class="brand">{ content::OWNER }</span>
                    { for nav_items }
                    <button
                        type="button"
                        class="btn btn-theme"
                        aria-label="Toggle theme"
                        onclick={ ctx.link().callback(|_| AppMsg::ThemeToggled) }
                    >
                        { theme_label }
                    </button>
                </nav>
                <main>
                    <header class="hero">
                        <h1>{ content::OWNER }</h1>
                        <p>{ "Informatics Engineering student & application developer" }</p>
                    </header>
                    <section id="about">
                        <h2>{ "About" }</h2>
                        <p>{ content::ABOUT }</p>
                    </section>
                    <section id="skills">
                        <h2>{ "Skills" }</h2>
                        <ui::SkillGrid />
                    </section>
                    <section id="projects">
                        <h2>{ "Projects" }</h2>
                        <ui::ProjectGrid />
                    </section>
                    <section id="certifications">
                        <h2>{ "Certifications" }</h2>
                        <ui::CertificationGrid />
                    </section>
                    <section id="experience">
                        <h2>{ "Experience" }</h2>
                        <ui::Timeline />
                    </section>
                    <section id="contact">
                        <h2>{ "Get in touch" }</h2>
                        <ui::ContactForm />
                    </section>
                    <section id="comments">
                        <h2>{ "Comments" }</h2>
                        <ui::CommentBoard />
                    </section>
                </main>
            </>
        }
    }
}
