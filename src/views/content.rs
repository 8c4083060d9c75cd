// ============================================================================
// CONTENT - Textos estáticos de la página
// ============================================================================
// Datos puros, sin DOM, para poder testearlos y reutilizarlos entre vistas.
// ============================================================================

use crate::utils::constants::{SECTION_BOOK, SECTION_CONTACT, SECTION_HOW, SECTION_SERVICES};

pub struct NavLink {
    pub anchor: &'static str,
    pub label: &'static str,
}

pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub struct ItineraryStop {
    pub time: &'static str,
    pub activity: &'static str,
}

/// Paso de "How it works" o tarjeta de servicio
pub struct Card {
    pub title: &'static str,
    pub description: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { anchor: SECTION_HOW, label: "How it works" },
    NavLink { anchor: SECTION_SERVICES, label: "Services" },
    NavLink { anchor: SECTION_BOOK, label: "Book a trip" },
    NavLink { anchor: SECTION_CONTACT, label: "Contact" },
];

pub const TAGLINE: &str = "Door-to-door care • Native-language companions • Real-time family updates";

pub const HERO_TITLE: &str = "Travel with confidence. Travel with care.";

pub const HERO_PITCH: &str = "pairs elderly travelers with trained companions who speak their language, handle logistics, and keep families updated in real time. Door-to-door support for flights, trains, tours, and family visits.";

pub const HERO_STATS: &[Stat] = &[
    Stat { value: "99%", label: "Satisfaction" },
    Stat { value: "24/7", label: "Family updates" },
    Stat { value: "20+", label: "Languages supported" },
];

pub const SAMPLE_ITINERARY: &[ItineraryStop] = &[
    ItineraryStop { time: "9:00", activity: "Door pickup, confirm medications" },
    ItineraryStop { time: "10:30", activity: "Museum visit with 1-hour accessible tour" },
    ItineraryStop { time: "12:30", activity: "Lunch at a calm, senior-friendly restaurant" },
    ItineraryStop { time: "14:00", activity: "Scenic drive and rest stop" },
    ItineraryStop { time: "16:30", activity: "Door drop-off and post-trip check-in" },
];

pub const ITINERARY_FOOTNOTE: &str = "Example itinerary — fully customizable, paced for comfort.";

pub const HOW_IT_WORKS: &[Card] = &[
    Card { title: "Consultation", description: "Tell us health, mobility & interests." },
    Card { title: "Custom plan", description: "We design a personalized, senior-friendly itinerary." },
    Card { title: "Trained companions", description: "Multilingual staff trained in first aid & elder care." },
    Card { title: "Real-time updates", description: "Family receives live location and status updates." },
];

pub const SERVICES: &[Card] = &[
    Card {
        title: "Door-to-door transfers",
        description: "Pickup, luggage handling, mobility assistance, boarding help at airports and stations.",
    },
    Card {
        title: "Guided personalized tours",
        description: "Cultural, religious, scenic or family visit itineraries paced for seniors.",
    },
    Card {
        title: "Medical & emergency support",
        description: "First-aid trained companions, coordination with local healthcare and insurance.",
    },
];

pub const WHY_FAMILIES_CHOOSE_US: &[&str] = &[
    "Background-checked multilingual companions",
    "Clear pricing, no hidden fees",
    "Emergency procedures & insurance",
    "Photos & trip summary for families",
];

pub const SUBMIT_LABEL: &str = "Request booking";
pub const FOLLOW_UP_NOTE: &str = "We will follow up by phone or WhatsApp to confirm details.";
pub const CONFIRMATION_TEXT: &str = "Thanks! Your request was received. We'll contact you shortly.";

pub const OPERATING_AREA: &str = "We operate in major metro areas. Want us to come to your city? Tell us.";
pub const SAFETY_PRIVACY: &str = "All companions are background-checked and trained. Family location updates are only shared with authorized contacts. We recommend travel insurance for medical events.";
pub const LANGUAGES_COPY: &str = "We support English, Hindi, Tamil, Spanish, Mandarin and more via our local partner network.";

pub const FOOTER_SUFFIX: &str = "Designed for safe, joyful travel.";

/// Iniciales para el logo: primera letra de cada tramo en mayúscula
/// ("NestJourneys" -> "NJ")
pub fn brand_initials(brand: &str) -> String {
    let initials: String = brand
        .split_whitespace()
        .flat_map(|word| {
            word.char_indices()
                .filter(|(i, c)| *i == 0 || c.is_uppercase())
                .map(|(_, c)| c)
        })
        .filter(|c| c.is_alphanumeric())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect();

    if initials.is_empty() {
        "?".to_string()
    } else {
        initials
    }
}

pub fn page_title(brand: &str) -> String {
    format!("{} — Personalized Travel for Seniors", brand)
}

pub fn footer_text(year: u32, brand: &str) -> String {
    format!("© {} {}. {}", year, brand, FOOTER_SUFFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brand_initials() {
        assert_eq!(brand_initials("NestJourneys"), "NJ");
        assert_eq!(brand_initials("acme care"), "AC");
        assert_eq!(brand_initials("Solo"), "S");
        assert_eq!(brand_initials(""), "?");
    }

    #[test]
    fn test_footer_text() {
        assert_eq!(
            footer_text(2026, "NestJourneys"),
            "© 2026 NestJourneys. Designed for safe, joyful travel."
        );
    }

    #[test]
    fn test_nav_links_point_to_sections() {
        let anchors: Vec<_> = NAV_LINKS.iter().map(|l| l.anchor).collect();
        assert_eq!(anchors, vec!["how", "services", "book", "contact"]);
    }

    #[test]
    fn test_static_sections_sizes() {
        assert_eq!(HERO_STATS.len(), 3);
        assert_eq!(SAMPLE_ITINERARY.len(), 5);
        assert_eq!(HOW_IT_WORKS.len(), 4);
        assert_eq!(SERVICES.len(), 3);
        assert_eq!(WHY_FAMILIES_CHOOSE_US.len(), 4);
    }
}
