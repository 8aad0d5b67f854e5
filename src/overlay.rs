use web_sys as web;

const OVERLAY_ID: &str = "status-overlay";
const MESSAGE_ID: &str = "status-message";

#[inline]
pub fn show_error(document: &web::Document, message: &str) {
    if let Some(el) = document.get_element_by_id(MESSAGE_ID) {
        el.set_text_content(Some(message));
    }
    if let Some(el) = document.get_element_by_id(OVERLAY_ID) {
        let _ = el.set_attribute("style", "");
    }
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(OVERLAY_ID) {
        let _ = el.set_attribute("style", "display:none");
    }
}
