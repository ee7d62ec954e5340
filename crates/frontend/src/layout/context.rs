use leptos::prelude::*;

/// Viewports narrower than this render the sidebar as a closable overlay.
const MOBILE_BREAKPOINT_PX: f64 = 768.0;

/// Sidebar visibility state, provided via context in `App`.
#[derive(Clone, Copy)]
pub struct LayoutContext {
    pub collapsed: RwSignal<bool>,
    pub mobile_menu_open: RwSignal<bool>,
}

impl LayoutContext {
    pub fn new() -> Self {
        Self {
            collapsed: RwSignal::new(false),
            mobile_menu_open: RwSignal::new(false),
        }
    }

    pub fn toggle_collapsed(&self) {
        self.collapsed.update(|c| *c = !*c);
    }

    pub fn open_mobile_menu(&self) {
        self.mobile_menu_open.set(true);
    }

    pub fn close_mobile_menu(&self) {
        self.mobile_menu_open.set(false);
    }
}

pub fn use_layout() -> LayoutContext {
    use_context::<LayoutContext>().expect("LayoutContext not found in component tree")
}

/// Whether the current viewport is narrow enough for the mobile overlay.
pub fn is_narrow_viewport() -> bool {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .map(|width| width < MOBILE_BREAKPOINT_PX)
        .unwrap_or(false)
}
