use crate::dom::DomError;
use crate::site::overlay::ParamSource;
use web_sys as web;

impl ParamSource for web::UrlSearchParams {
    fn get(&self, key: &str) -> Option<String> {
        web::UrlSearchParams::get(self, key)
    }
}

/// Query parameters of the page as loaded.
pub fn page_params(window: &web::Window) -> Result<web::UrlSearchParams, DomError> {
    let search = window.location().search()?;
    Ok(web::UrlSearchParams::new_with_str(&search)?)
}
