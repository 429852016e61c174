//! End-to-end translation of real digilib scaler URLs.
//!
//! Exercises the public surface the way an embedding application would:
//! classification, full/equivalent translation, passthrough guarantees, and
//! a document rewrite sweep over fake elements.

use digilib_iiif::iiif::{to_equivalent_image, to_full_image};
use digilib_iiif::rewrite::{rewrite_all, ReferenceSlot};
use digilib_iiif::scaler::{classify, iiif_base, is_legacy_scaler, is_scaler, UrlVariant};

const LEGACY_URL: &str = "https://digilib.bbaw.de/digitallibrary/servlet/Scaler?fn=/silo10/Koran/Umwelttexte/Yazdgerd%20III.jpg&wx=0.1&wy=0.15&ww=0.43&wh=0.354&dw=500&dh=400&ws=2&rot=45";
const IIIF_URL: &str = "https://digilib.bbaw.de/digitallibrary/servlet/Scaler/IIIF/silo10!Koran!Umwelttexte!Yazdgerd%20III.jpg/pct:10,15,43,35.4/1000,800/45/default.jpg";

#[test]
fn legacy_url_translates_with_all_geometry() {
    digilib_iiif::logging::init().unwrap();
    assert_eq!(to_equivalent_image(LEGACY_URL).unwrap(), IIIF_URL);
}

#[test]
fn full_translation_discards_geometry() {
    assert_eq!(
        to_full_image(LEGACY_URL).unwrap(),
        "https://digilib.bbaw.de/digitallibrary/servlet/Scaler/IIIF/silo10!Koran!Umwelttexte!Yazdgerd%20III.jpg/full/full/0/default.jpg"
    );
}

#[test]
fn translations_start_with_the_iiif_base() {
    assert!(is_legacy_scaler(LEGACY_URL));
    let base = iiif_base(LEGACY_URL).unwrap();
    assert!(to_full_image(LEGACY_URL).unwrap().starts_with(&base));
    assert!(to_equivalent_image(LEGACY_URL).unwrap().starts_with(&base));
}

#[test]
fn non_scaler_urls_are_returned_byte_for_byte() {
    for url in ["www.example.org", "", "https://host/path?fn=/a.jpg"] {
        assert!(!is_scaler(url));
        assert_eq!(to_full_image(url).unwrap(), url);
        assert_eq!(to_equivalent_image(url).unwrap(), url);
    }
}

#[test]
fn translated_output_is_a_fixed_point() {
    let once = to_equivalent_image(LEGACY_URL).unwrap();
    assert_eq!(classify(&once), UrlVariant::IiifScaler);
    assert_eq!(to_equivalent_image(&once).unwrap(), once);
}

struct Attribute(Option<String>);

impl ReferenceSlot for Attribute {
    fn get(&self) -> Option<String> {
        self.0.clone()
    }

    fn set(&mut self, value: String) {
        self.0 = Some(value);
    }
}

#[test]
fn document_sweep_rewrites_only_legacy_references() {
    let mut hrefs = vec![
        Attribute(Some(LEGACY_URL.to_string())),
        Attribute(Some(IIIF_URL.to_string())),
        Attribute(Some("https://www.example.org/about.html".to_string())),
        Attribute(None),
    ];

    assert_eq!(rewrite_all(&mut hrefs), 1);
    assert_eq!(hrefs[0].0.as_deref(), Some(IIIF_URL));
    assert_eq!(hrefs[1].0.as_deref(), Some(IIIF_URL));
    assert_eq!(
        hrefs[2].0.as_deref(),
        Some("https://www.example.org/about.html")
    );
    assert_eq!(hrefs[3].0, None);
}
