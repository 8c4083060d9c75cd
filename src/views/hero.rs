// ============================================================================
// HERO VIEW - Titular, CTAs, estadísticas e itinerario de ejemplo
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::config::CONFIG;
use crate::dom::{ElementBuilder, text_element};
use crate::utils::constants::{SECTION_BOOK, SECTION_SERVICES};
use crate::views::content::{HERO_PITCH, HERO_STATS, HERO_TITLE, ITINERARY_FOOTNOTE, SAMPLE_ITINERARY};

pub fn render_hero() -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("section")?
        .class("grid grid-cols-1 md:grid-cols-2 gap-8 items-center py-12")
        .child(render_pitch()?)?
        .child(render_itinerary_card()?)?
        .build())
}

fn render_pitch() -> Result<Element, JsValue> {
    let ctas = ElementBuilder::new("div")?
        .class("mt-6 flex flex-wrap gap-3")
        .child(
            ElementBuilder::new("a")?
                .attr("href", &format!("#{}", SECTION_BOOK))?
                .class("inline-block bg-blue-600 text-white px-5 py-3 rounded-lg shadow")
                .text("Book a free consult")
                .build(),
        )?
        .child(
            ElementBuilder::new("a")?
                .attr("href", &format!("#{}", SECTION_SERVICES))?
                .class("inline-block border border-gray-300 px-5 py-3 rounded-lg")
                .text("See services")
                .build(),
        )?
        .build();

    let mut stats = Vec::with_capacity(HERO_STATS.len());
    for stat in HERO_STATS {
        stats.push(
            ElementBuilder::new("div")?
                .child(text_element("div", "font-bold text-lg", stat.value)?)?
                .child(text_element("div", "text-gray-500", stat.label)?)?
                .build(),
        );
    }
    let stats_grid = ElementBuilder::new("div")?
        .class("mt-8 grid grid-cols-3 gap-4 text-center text-sm text-gray-700")
        .children(stats)?
        .build();

    Ok(ElementBuilder::new("div")?
        .child(text_element("h2", "text-3xl md:text-4xl font-extrabold", HERO_TITLE)?)?
        .child(text_element(
            "p",
            "mt-4 text-gray-600",
            &format!("{} {}", CONFIG.brand_name, HERO_PITCH),
        )?)?
        .child(ctas)?
        .child(stats_grid)?
        .build())
}

fn render_itinerary_card() -> Result<Element, JsValue> {
    let mut stops = Vec::with_capacity(SAMPLE_ITINERARY.len());
    for stop in SAMPLE_ITINERARY {
        let time = ElementBuilder::new("strong")?.text(stop.time).build();
        let line = ElementBuilder::new("p")?.child(time)?.build();
        // Texto tras el <strong>
        line.append_with_str_1(&format!(" — {}", stop.activity))?;
        stops.push(line);
    }

    let list = ElementBuilder::new("div")?
        .class("text-sm text-gray-600 leading-relaxed")
        .children(stops)?
        .build();

    let footnote = ElementBuilder::new("div")?
        .class("mt-4 border-t pt-4")
        .child(text_element("p", "text-xs text-gray-500", ITINERARY_FOOTNOTE)?)?
        .build();

    Ok(ElementBuilder::new("div")?
        .class("rounded-xl bg-white p-6 shadow")
        .child(text_element("h3", "font-semibold mb-3", "Quick sample itinerary")?)?
        .child(list)?
        .child(footnote)?
        .build())
}
