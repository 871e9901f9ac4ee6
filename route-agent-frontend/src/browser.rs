//! Thin wrappers over `web_sys` for the few things the app needs from the page.

use log::error;
use route_agent_shared::config::{PageLocation, API_OVERRIDE_PARAM};
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{Element, Event, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, UrlSearchParams};
use yew::Callback;

const UNHANDLED_REJECTION: &str = "unhandledrejection";

/// Reads protocol, origin and the `api` override from `window.location`.
pub fn page_location() -> PageLocation {
    let Some(window) = web_sys::window() else {
        return PageLocation::default();
    };
    let location = window.location();

    let api_override = location
        .search()
        .ok()
        .and_then(|search| UrlSearchParams::new_with_str(&search).ok())
        .and_then(|params| params.get(API_OVERRIDE_PARAM));

    PageLocation {
        protocol: location.protocol().unwrap_or_default(),
        origin: location.origin().unwrap_or_default(),
        api_override,
    }
}

pub fn scroll_into_view(element: &Element) {
    let mut options = ScrollIntoViewOptions::new();
    options
        .behavior(ScrollBehavior::Smooth)
        .block(ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Keeps a window `unhandledrejection` listener alive. Removed again on drop.
pub struct RejectionListener {
    closure: Closure<dyn FnMut(Event)>,
}

impl RejectionListener {
    pub fn install(on_rejection: Callback<()>) -> Option<Self> {
        let window = web_sys::window()?;

        let closure = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
            error!("Unhandled promise rejection on the page");
            on_rejection.emit(());
        });

        window
            .add_event_listener_with_callback(UNHANDLED_REJECTION, closure.as_ref().unchecked_ref())
            .ok()?;

        Some(RejectionListener { closure })
    }
}

impl Drop for RejectionListener {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            let _ = window.remove_event_listener_with_callback(
                UNHANDLED_REJECTION,
                self.closure.as_ref().unchecked_ref(),
            );
        }
    }
}
