//! Landing page rendering, with and without a loaded `Info`.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use dioxus::prelude::*;
use futures::channel::oneshot;
use ui::core::client::{FetchError, InfoClient};
use ui::core::info::Info;
use ui::views::{Home, LandingPage};

/// Poll the dom until it stops producing work (or a short quiet period passes).
async fn settle(dom: &mut VirtualDom) {
    for _ in 0..4 {
        let work = tokio::time::timeout(Duration::from_millis(50), dom.wait_for_work()).await;
        if work.is_err() {
            break;
        }
        dom.render_immediate_to_vec();
    }
}

async fn render_home_with(client: InfoClient, app: fn() -> Element) -> String {
    let mut dom = VirtualDom::new(app).with_root_context(client);
    dom.rebuild_in_place();
    settle(&mut dom).await;
    dioxus_ssr::render(&dom)
}

fn untitled_home() -> Element {
    rsx! { Home {} }
}

fn titled_home() -> Element {
    rsx! { Home { title: "RedEagle Project" } }
}

fn fixed(body: &'static str) -> InfoClient {
    InfoClient::from_fn(move || async move { Info::from_json(body) })
}

fn failing(err: FetchError) -> InfoClient {
    InfoClient::from_fn(move || {
        let err = err.clone();
        async move { Err(err) }
    })
}

#[test]
fn renders_empty_title_and_slogan_without_props() {
    let html = dioxus_ssr::render_element(rsx! { LandingPage {} });
    assert!(html.contains(r#"<h1 class="hero__title"></h1>"#), "{html}");
    assert!(html.contains(r#"<p class="hero__slogan"></p>"#), "{html}");
}

#[test]
fn renders_title_in_hero_heading() {
    let html = dioxus_ssr::render_element(rsx! { LandingPage { title: "RedEagle Project" } });
    assert!(
        html.contains(r#"<h1 class="hero__title">RedEagle Project</h1>"#),
        "{html}"
    );
}

#[test]
fn renders_static_header_and_link_columns() {
    let html = dioxus_ssr::render_element(rsx! { LandingPage {} });
    for alt in ["Phoenix Framework", "Dioxus", "Docker"] {
        assert!(html.contains(&format!(r#"alt="{alt}""#)), "missing logo {alt}: {html}");
    }
    assert_eq!(html.matches(r#"class="column resource-column""#).count(), 2);
    assert_eq!(html.matches("<li").count(), 6);
    assert!(html.contains(r#"href="https://discord.gg/elixir""#));
}

#[tokio::test]
async fn successful_load_fills_the_slogan() {
    let html = render_home_with(fixed(r#"{"slogan": "Hello"}"#), titled_home).await;
    assert!(html.contains(r#"<p class="hero__slogan">Hello</p>"#), "{html}");
    assert!(html.contains(r#"<h1 class="hero__title">RedEagle Project</h1>"#));
}

#[tokio::test]
async fn failed_load_keeps_the_slogan_empty() {
    for err in [
        FetchError::Network("connection refused".into()),
        FetchError::Status(500),
        FetchError::Decode("expected value".into()),
    ] {
        let html = render_home_with(failing(err), titled_home).await;
        assert!(html.contains(r#"<p class="hero__slogan"></p>"#), "{html}");
    }
}

#[tokio::test]
async fn body_without_slogan_renders_empty() {
    let html = render_home_with(fixed(r#"{"motto": "unused"}"#), untitled_home).await;
    assert!(html.contains(r#"<p class="hero__slogan"></p>"#), "{html}");
    assert!(html.contains(r#"<h1 class="hero__title"></h1>"#), "{html}");
}

#[tokio::test]
async fn non_string_slogan_renders_empty() {
    let html = render_home_with(fixed(r#"{"slogan": ["not", "text"]}"#), untitled_home).await;
    assert!(html.contains(r#"<p class="hero__slogan"></p>"#), "{html}");
}

#[tokio::test]
async fn loads_exactly_once_per_mount() {
    let calls = Rc::new(Cell::new(0));
    let counter = calls.clone();
    let client = InfoClient::from_fn(move || {
        counter.set(counter.get() + 1);
        async { Info::from_json(r#"{"slogan": "Once"}"#) }
    });

    let mut dom = VirtualDom::new(titled_home).with_root_context(client);
    dom.rebuild_in_place();
    settle(&mut dom).await;

    dom.mark_dirty(ScopeId::ROOT);
    dom.render_immediate_to_vec();
    settle(&mut dom).await;

    assert_eq!(calls.get(), 1);
    assert!(dioxus_ssr::render(&dom).contains("Once"));
}

/// Handle to the root's visibility flag, published so the test can unmount `Home`.
type ShowSlot = Rc<Cell<Option<Signal<bool>>>>;

fn unmountable_home() -> Element {
    let show = use_signal(|| true);
    use_context::<ShowSlot>().set(Some(show));

    rsx! {
        if show() {
            Home { title: "RedEagle Project" }
        } else {
            p { "gone" }
        }
    }
}

#[tokio::test]
async fn response_after_unmount_is_discarded() {
    let (tx, rx) = oneshot::channel::<Result<Info, FetchError>>();
    let pending = Rc::new(RefCell::new(Some(rx)));
    let client = InfoClient::from_fn(move || {
        let rx = pending.borrow_mut().take();
        async move {
            match rx {
                Some(rx) => rx
                    .await
                    .unwrap_or_else(|_| Err(FetchError::Network("sender dropped".into()))),
                None => Err(FetchError::Network("already loaded".into())),
            }
        }
    });

    let slot: ShowSlot = Rc::default();
    let mut dom = VirtualDom::new(unmountable_home)
        .with_root_context(client)
        .with_root_context(slot.clone());
    dom.rebuild_in_place();
    settle(&mut dom).await;
    assert!(dioxus_ssr::render(&dom).contains(r#"<p class="hero__slogan"></p>"#));

    let mut show = slot.get().expect("root rendered");
    dom.in_runtime(|| show.set(false));
    settle(&mut dom).await;

    let _ = tx.send(Info::from_json(r#"{"slogan": "Late"}"#));
    settle(&mut dom).await;

    let html = dioxus_ssr::render(&dom);
    assert!(html.contains("<p>gone</p>"), "{html}");
    assert!(!html.contains("Late"), "{html}");
}
