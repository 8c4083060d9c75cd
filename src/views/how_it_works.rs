use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{ElementBuilder, text_element};
use crate::utils::constants::SECTION_HOW;
use crate::views::content::HOW_IT_WORKS;

/// Sección "How it works": cuatro pasos
pub fn render_how_it_works() -> Result<Element, JsValue> {
    let mut steps = Vec::with_capacity(HOW_IT_WORKS.len());
    for step in HOW_IT_WORKS {
        steps.push(
            ElementBuilder::new("div")?
                .class("bg-white p-5 rounded-lg shadow-sm")
                .child(text_element("div", "font-semibold", step.title)?)?
                .child(text_element("div", "text-sm text-gray-600 mt-2", step.description)?)?
                .build(),
        );
    }

    Ok(ElementBuilder::new("section")?
        .id(SECTION_HOW)?
        .class("py-8")
        .child(text_element("h3", "text-2xl font-semibold", "How it works")?)?
        .child(
            ElementBuilder::new("div")?
                .class("mt-6 grid grid-cols-1 md:grid-cols-4 gap-6")
                .children(steps)?
                .build(),
        )?
        .build())
}
