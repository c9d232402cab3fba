//! Every catalog query renders to a self-contained document.

use cms_content::content::catalog::CATALOG;
use cms_content::fragment::{self, QueryDocument, REFERENCE_RECORD, RESPONSIVE_IMAGE};
use cms_content::query::QueryRequest;
use cms_content::{ContentMode, Locale};

#[test]
fn test_every_spread_fragment_is_declared_exactly_once() {
    for spec in CATALOG {
        let text = spec.document().render();
        for fragment in fragment::REGISTRY {
            let spread = format!("...{}", fragment.name);
            let declaration = format!("fragment {} on", fragment.name);
            let declared = text.matches(&declaration).count();
            if text.contains(&spread) {
                assert_eq!(declared, 1, "{} in {}", fragment.name, spec.name);
            } else {
                assert_eq!(declared, 0, "{} unused in {}", fragment.name, spec.name);
            }
        }
    }
}

#[test]
fn test_shared_fragment_text_is_identical_across_queries() {
    let with_image: Vec<String> = CATALOG
        .iter()
        .map(|spec| spec.document().render())
        .filter(|text| text.contains("...responsiveImageFragment"))
        .collect();
    assert!(with_image.len() > 1);
    for text in &with_image {
        assert!(text.contains(RESPONSIVE_IMAGE.definition));
    }
}

#[test]
fn test_reference_fragment_pulls_its_dependency() {
    let document = QueryDocument::new("query Refs { allReferences { ...ReferenceRecordFragment } }")
        .with_fragment(&REFERENCE_RECORD)
        .with_fragment(&RESPONSIVE_IMAGE);
    assert_eq!(
        document.fragment_names(),
        vec!["ReferenceRecordFragment", "responsiveImageFragment"]
    );
}

#[test]
fn test_requests_carry_locale_and_operation_name() {
    let fr = Locale::new("fr");
    for spec in CATALOG {
        let request: QueryRequest = spec.request(ContentMode::Published, &fr);
        assert_eq!(request.operation_name(), Some(spec.name));
        let body = request.body();
        assert_eq!(body.variable_str("locale"), Some("fr"));
        assert!(!body.query.contains("\"fr\""), "{} interpolates the locale", spec.name);
    }
}

#[test]
fn test_every_spread_resolves_in_the_registry() {
    for spec in CATALOG {
        let text = spec.document().render();
        for spread in text.split("...").skip(1) {
            let name: String = spread
                .chars()
                .take_while(|c| c.is_alphanumeric() || *c == '_')
                .collect();
            let resolved = fragment::lookup(&name)
                .unwrap_or_else(|| panic!("{} spreads unknown fragment {}", spec.name, name));
            assert!(spec.document().fragment_names().contains(&resolved.name));
        }
    }
}

#[test]
fn test_image_fragment_declares_the_decoded_fields() {
    for field in ["src", "width", "height", "alt"] {
        assert!(RESPONSIVE_IMAGE.declares_field(field), "missing {}", field);
    }
    let reference = fragment::lookup("ReferenceRecordFragment").unwrap();
    for field in ["id", "title", "slug", "cardCover"] {
        assert!(reference.declares_field(field), "missing {}", field);
    }
}
