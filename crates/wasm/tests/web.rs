#![cfg(target_arch = "wasm32")]

use folio_wasm::mount;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn root(id: &str) -> web_sys::Element {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .expect("test runs in a browser");
    let root = document.create_element("div").expect("create root");
    root.set_id(id);
    document
        .body()
        .expect("document has a body")
        .append_child(&root)
        .expect("attach root");
    root
}

#[wasm_bindgen_test]
fn mount_renders_persian_page_and_unmount_releases_everything() {
    let root = root("folio-test-mount");
    let Ok(mut portfolio) = mount("folio-test-mount", None) else {
        panic!("mount failed");
    };

    assert_eq!(portfolio.language(), "fa");
    assert_eq!(portfolio.active_section(), "home");
    assert!(root.inner_html().contains("خانه"));
    assert!(portfolio.active_listeners() > 0);

    let html = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .expect("document element");
    assert_eq!(html.get_attribute("dir").as_deref(), Some("rtl"));

    portfolio.unmount();
    assert_eq!(portfolio.active_listeners(), 0);
    portfolio.unmount();
    assert_eq!(portfolio.active_listeners(), 0);
}

#[wasm_bindgen_test]
fn toggle_switches_direction_and_keeps_one_observer() {
    let root = root("folio-test-toggle");
    let Ok(mut portfolio) = mount("folio-test-toggle", None) else {
        panic!("mount failed");
    };
    let before = portfolio.active_listeners();

    assert!(portfolio.toggle_language().is_ok());
    assert_eq!(portfolio.language(), "en");
    assert!(root.inner_html().contains("Experience"));
    assert_eq!(portfolio.active_listeners(), before);

    assert!(portfolio.toggle_language().is_ok());
    assert_eq!(portfolio.language(), "fa");
    portfolio.unmount();
}

#[wasm_bindgen_test]
fn nav_click_activates_exactly_one_button() {
    let root = root("folio-test-nav");
    let Ok(mut portfolio) = mount("folio-test-nav", None) else {
        panic!("mount failed");
    };

    let button = root
        .query_selector(r#"[data-nav="projects"]"#)
        .expect("query")
        .expect("projects button")
        .dyn_into::<web_sys::HtmlElement>()
        .expect("button element");
    button.click();

    assert_eq!(portfolio.active_section(), "projects");
    let active = root.query_selector_all(".nav-item.active").expect("query");
    assert_eq!(active.length(), 1);
    assert!(portfolio.navigate("blog").is_err());
    portfolio.unmount();
}

#[wasm_bindgen_test]
fn missing_root_is_an_error() {
    assert!(mount("folio-does-not-exist", None).is_err());
}

#[wasm_bindgen_test]
fn invalid_config_is_rejected() {
    root("folio-test-config");
    assert!(mount("folio-test-config", Some(r#"{"reveal_threshold": 0}"#.into())).is_err());
}

#[wasm_bindgen_test]
fn unmount_removes_created_nodes_and_cursor_class() {
    root("folio-test-nodes");
    let document = web_sys::window()
        .and_then(|w| w.document())
        .expect("test runs in a browser");
    let body = document.body().expect("document has a body");
    let Ok(mut portfolio) = mount("folio-test-nodes", None) else {
        panic!("mount failed");
    };

    assert!(document.get_element_by_id("folio-particles").is_some());
    let has_cursor = document.query_selector(".cursor-dot").expect("query").is_some();
    // The pointer is only hidden when a replacement is drawn.
    assert_eq!(body.class_list().contains("custom-cursor"), has_cursor);

    portfolio.unmount();
    assert!(document.get_element_by_id("folio-particles").is_none());
    assert!(document.get_element_by_id("folio-style").is_none());
    assert!(document.query_selector(".cursor-dot").expect("query").is_none());
    assert!(!body.class_list().contains("custom-cursor"));
}

#[wasm_bindgen_test]
async fn particle_frames_stop_after_unmount() {
    root("folio-test-frames");
    let Ok(mut portfolio) = mount("folio-test-frames", None) else {
        panic!("mount failed");
    };
    let running = portfolio.active_listeners();
    next_frame().await;
    assert_eq!(portfolio.active_listeners(), running);

    portfolio.unmount();
    next_frame().await;
    next_frame().await;
    assert_eq!(portfolio.active_listeners(), 0);
}

async fn next_frame() {
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        let window = web_sys::window().expect("test runs in a browser");
        window
            .request_animation_frame(&resolve)
            .expect("request frame");
    });
    wasm_bindgen_futures::JsFuture::from(promise)
        .await
        .expect("frame resolves");
}
