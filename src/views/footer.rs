use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::config::CONFIG;
use crate::dom::text_element;
use crate::views::content::footer_text;

pub fn render_footer() -> Result<Element, JsValue> {
    // Año actual del navegador
    let year = js_sys::Date::new_0().get_full_year();
    text_element(
        "footer",
        "py-8 text-center text-sm text-gray-500",
        &footer_text(year, &CONFIG.brand_name),
    )
}
