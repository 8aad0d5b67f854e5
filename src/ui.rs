use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use vismath_core::ModeDispatcher;
use wasm_bindgen::JsCast;
use web_sys as web;

const MENU_ID: &str = "mode-menu";
const CONTROLS_ID: &str = "controls-panel";

/// Builds the mode menu: one heading per category, then a button per mode.
/// Clicking a button activates the mode and refreshes the controls panel.
pub fn build_mode_menu(
    document: &web::Document,
    dispatcher: Rc<RefCell<ModeDispatcher>>,
) -> anyhow::Result<()> {
    let menu = document
        .get_element_by_id(MENU_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", MENU_ID))?;
    menu.set_inner_html("");

    let entries: Vec<_> = dispatcher.borrow().modes().collect();
    let mut category = "";
    for (index, kind) in entries {
        if kind.category() != category {
            category = kind.category();
            let heading = create(document, "div")?;
            heading.set_class_name("menu-category");
            heading.set_text_content(Some(category));
            let _ = menu.append_child(&heading);
        }

        let button = create(document, "button")?;
        button.set_class_name("mode-btn");
        button.set_text_content(Some(kind.name()));
        let _ = button.set_attribute("data-mode", &index.to_string());
        let _ = menu.append_child(&button);

        let dispatcher = dispatcher.clone();
        dom::on_click(&button, move || {
            dispatcher.borrow_mut().select_mode(index);
            if let Some(doc) = dom::window_document() {
                sync(&doc, &dispatcher.borrow());
            }
        });
    }
    sync(document, &dispatcher.borrow());
    Ok(())
}

/// Marks the active menu button and shows the active mode's controls.
pub fn sync(document: &web::Document, dispatcher: &ModeDispatcher) {
    let active = dispatcher.active_index().map(|i| i.to_string());
    if let Ok(buttons) = document.query_selector_all(".mode-btn") {
        for i in 0..buttons.length() {
            let Some(el) = buttons.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) else {
                continue;
            };
            let on = el.get_attribute("data-mode") == active;
            let _ = el.class_list().toggle_with_force("active", on);
        }
    }
    if let Some(panel) = document.get_element_by_id(CONTROLS_ID) {
        panel.set_inner_html(dispatcher.controls_description());
    }
}

fn create(document: &web::Document, tag: &str) -> anyhow::Result<web::Element> {
    document
        .create_element(tag)
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))
}
