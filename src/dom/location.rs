//! [`Location`] over `window.location` and `history.replaceState`.

use web_sys::{Url, UrlSearchParams, Window};

use crate::error::EnhanceError;
use crate::util::url_sync::Location;

pub struct BrowserLocation {
    window: Window,
}

impl BrowserLocation {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl Location for BrowserLocation {
    fn query_param(&self, name: &str) -> Option<String> {
        let search = self.window.location().search().ok()?;
        UrlSearchParams::new_with_str(&search).ok()?.get(name)
    }

    fn replace_query_param(&mut self, name: &str, value: Option<&str>) -> Result<(), EnhanceError> {
        let history = self
            .window
            .history()
            .map_err(|_| EnhanceError::Unsupported("history.replaceState"))?;
        let url = Url::new(&self.window.location().href()?)?;
        let params = url.search_params();
        match value {
            Some(value) => params.set(name, value),
            None => params.delete(name),
        }
        history.replace_state_with_url(&js_sys::Object::new(), "", Some(&url.href()))?;
        Ok(())
    }
}
