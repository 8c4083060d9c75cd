// ============================================================================
// HEADER VIEW - Logo, título y navegación por anclas
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::config::CONFIG;
use crate::dom::{ElementBuilder, text_element};
use crate::views::content::{brand_initials, page_title, NAV_LINKS, TAGLINE};

pub fn render_header() -> Result<Element, JsValue> {
    let brand = CONFIG.brand_name.as_str();

    let logo = text_element(
        "div",
        "w-12 h-12 rounded-xl bg-gradient-to-br from-blue-600 to-teal-400 flex items-center justify-center text-white font-bold",
        &brand_initials(brand),
    )?;

    let titles = ElementBuilder::new("div")?
        .child(text_element("h1", "text-xl font-semibold", &page_title(brand))?)?
        .child(text_element("p", "text-sm text-gray-500", TAGLINE)?)?
        .build();

    let brand_block = ElementBuilder::new("div")?
        .class("flex items-center gap-4")
        .child(logo)?
        .child(titles)?
        .build();

    let mut links = Vec::with_capacity(NAV_LINKS.len());
    for link in NAV_LINKS {
        links.push(
            ElementBuilder::new("a")?
                .attr("href", &format!("#{}", link.anchor))?
                .class("hover:underline")
                .text(link.label)
                .build(),
        );
    }
    let nav = ElementBuilder::new("nav")?
        .class("hidden md:flex gap-6 text-sm")
        .children(links)?
        .build();

    Ok(ElementBuilder::new("header")?
        .class("max-w-6xl mx-auto p-6 flex items-center justify-between")
        .child(brand_block)?
        .child(nav)?
        .build())
}
