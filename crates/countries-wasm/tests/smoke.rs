#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use countries_wasm::{encode_country_path, regions, CountriesApp};

#[wasm_bindgen_test]
fn lists_five_regions() {
    let value = regions().unwrap();
    let array = js_sys::Array::from(&value);
    assert_eq!(array.length(), 5);
    assert_eq!(array.get(0).as_string().as_deref(), Some("Africa"));
}

#[wasm_bindgen_test]
fn encodes_paths() {
    assert_eq!(encode_country_path("Bosnia and Herzegovina"), "/country/Bosnia%20and%20Herzegovina");
}

#[wasm_bindgen_test]
fn dark_mode_toggles_back() {
    let app = CountriesApp::new("/data.json").unwrap();
    assert!(!app.is_dark());
    app.toggle_dark_mode();
    assert!(app.is_dark());
    app.toggle_dark_mode();
    assert!(!app.is_dark());
}

#[wasm_bindgen_test]
fn unknown_paths_throw_and_keep_the_view() {
    let app = CountriesApp::new("/data.json").unwrap();
    assert!(app.navigate("/about").is_err());
    assert_eq!(app.path(), "/");
    assert!(app.select_region("Atlantis").is_err());
}

#[wasm_bindgen_test]
fn renders_loading_list_before_the_fetch_completes() {
    let app = CountriesApp::new("/data.json").unwrap();
    let screen = app.render().unwrap();
    let body = js_sys::Reflect::get(&screen, &"body".into()).unwrap();
    let view = js_sys::Reflect::get(&body, &"view".into()).unwrap();
    assert_eq!(view.as_string().as_deref(), Some("list"));
    let loading = js_sys::Reflect::get(&body, &"loading".into()).unwrap();
    assert_eq!(loading.as_bool(), Some(true));
}
