//! Integration tests for building and rendering compound selectors.

use kata_selector::{
    Part, Selector, SelectorError, Stringify, attr, class, element, id, pseudo_class,
    pseudo_element,
};

// Rendering

#[test]
fn test_element_only() {
    assert_eq!(element("div").unwrap().stringify(), "div");
}

#[test]
fn test_id_with_classes() {
    let selector = id("main")
        .unwrap()
        .class("container")
        .unwrap()
        .class("editable")
        .unwrap();
    assert_eq!(selector.stringify(), "#main.container.editable");
}

#[test]
fn test_element_attr_pseudo_class() {
    let selector = element("a")
        .unwrap()
        .attr(r#"href$=".png""#)
        .unwrap()
        .pseudo_class("focus")
        .unwrap();
    assert_eq!(selector.stringify(), r#"a[href$=".png"]:focus"#);
}

#[test]
fn test_every_part_in_order() {
    let selector = element("input")
        .unwrap()
        .id("email")
        .unwrap()
        .class("field")
        .unwrap()
        .class("wide")
        .unwrap()
        .attr("type=email")
        .unwrap()
        .attr("required")
        .unwrap()
        .pseudo_class("focus")
        .unwrap()
        .pseudo_class("invalid")
        .unwrap()
        .pseudo_element("placeholder")
        .unwrap();
    assert_eq!(
        selector.stringify(),
        "input#email.field.wide[type=email][required]:focus:invalid::placeholder"
    );
    assert_eq!(selector.last_part(), Some(Part::PseudoElement));
}

#[test]
fn test_classes_keep_insertion_order() {
    let selector = class("b").unwrap().class("a").unwrap().class("c").unwrap();
    assert_eq!(selector.stringify(), ".b.a.c");
    assert_eq!(selector.class_names(), ["b", "a", "c"]);
}

#[test]
fn test_attributes_have_no_separator() {
    let selector = attr("data-x").unwrap().attr("lang|=en").unwrap();
    assert_eq!(selector.stringify(), "[data-x][lang|=en]");
}

#[test]
fn test_pseudo_classes_joined_by_colon() {
    let selector = pseudo_class("first-child")
        .unwrap()
        .pseudo_class("hover")
        .unwrap();
    assert_eq!(selector.stringify(), ":first-child:hover");
}

#[test]
fn test_pseudo_element_alone() {
    assert_eq!(pseudo_element("after").unwrap().stringify(), "::after");
}

#[test]
fn test_empty_selector_renders_empty_string() {
    assert_eq!(Selector::new().stringify(), "");
    assert!(Selector::new().is_empty());
}

#[test]
fn test_stringify_is_repeatable() {
    let selector = element("li").unwrap().class("item").unwrap();
    let first = selector.stringify();
    let second = selector.stringify();
    assert_eq!(first, "li.item");
    assert_eq!(first, second);
    assert_eq!(selector.to_string(), first);
}

#[test]
fn test_same_part_twice_keeps_rank() {
    let selector = class("a").unwrap().class("b").unwrap();
    assert_eq!(selector.last_part(), Some(Part::Class));
    let selector = selector.attr("x").unwrap();
    assert_eq!(selector.last_part(), Some(Part::Attribute));
}

#[test]
fn test_facade_returns_independent_selectors() {
    let first = element("div").unwrap();
    let second = element("span").unwrap();
    assert_eq!(first.stringify(), "div");
    assert_eq!(second.stringify(), "span");
    assert_eq!(first.id("a").unwrap().stringify(), "div#a");
    assert_eq!(second.stringify(), "span");
}

#[test]
fn test_accessors() {
    let selector = element("p")
        .unwrap()
        .id("intro")
        .unwrap()
        .pseudo_element("first-line")
        .unwrap();
    assert_eq!(selector.element_name(), Some("p"));
    assert_eq!(selector.id_value(), Some("intro"));
    assert!(selector.attributes().is_empty());
    assert!(selector.pseudo_classes().is_empty());
    assert_eq!(selector.pseudo_element_name(), Some("first-line"));
}

// Duplicate parts

#[test]
fn test_element_twice_is_duplicate() {
    let err = element("div").unwrap().element("span").unwrap_err();
    assert_eq!(
        err,
        SelectorError::Duplicate {
            part: Part::Element
        }
    );
    assert_eq!(
        err.to_string(),
        "Element, id and pseudo-element should not occur more then one time inside the selector"
    );
}

#[test]
fn test_id_twice_is_duplicate() {
    let err = id("a").unwrap().id("b").unwrap_err();
    assert!(matches!(err, SelectorError::Duplicate { part: Part::Id }));
}

#[test]
fn test_pseudo_element_twice_is_duplicate() {
    let err = pseudo_element("before")
        .unwrap()
        .pseudo_element("after")
        .unwrap_err();
    assert!(matches!(
        err,
        SelectorError::Duplicate {
            part: Part::PseudoElement
        }
    ));
}

#[test]
fn test_duplicate_reported_before_order() {
    let err = element("a")
        .unwrap()
        .class("x")
        .unwrap()
        .element("b")
        .unwrap_err();
    assert_eq!(err.part(), Part::Element);
    assert!(matches!(err, SelectorError::Duplicate { .. }));
}

// Ordering

#[test]
fn test_id_after_class_is_order_violation() {
    let err = class("a").unwrap().id("b").unwrap_err();
    assert_eq!(
        err,
        SelectorError::OrderViolation {
            part: Part::Id,
            after: Part::Class,
        }
    );
    assert_eq!(
        err.to_string(),
        "Selector parts should be arranged in the following order: element, id, class, attribute, pseudo-class, pseudo-element"
    );
}

#[test]
fn test_element_after_id_is_order_violation() {
    let err = id("main").unwrap().element("div").unwrap_err();
    assert!(matches!(
        err,
        SelectorError::OrderViolation {
            part: Part::Element,
            after: Part::Id,
        }
    ));
}

#[test]
fn test_class_after_attr_is_order_violation() {
    let err = attr("href").unwrap().class("link").unwrap_err();
    assert_eq!(err.part(), Part::Class);
}

#[test]
fn test_attr_after_pseudo_class_is_order_violation() {
    let err = pseudo_class("hover").unwrap().attr("href").unwrap_err();
    assert!(matches!(
        err,
        SelectorError::OrderViolation {
            after: Part::PseudoClass,
            ..
        }
    ));
}

#[test]
fn test_pseudo_class_after_pseudo_element_is_order_violation() {
    let err = pseudo_element("after")
        .unwrap()
        .pseudo_class("hover")
        .unwrap_err();
    assert!(matches!(
        err,
        SelectorError::OrderViolation {
            part: Part::PseudoClass,
            after: Part::PseudoElement,
        }
    ));
}

#[test]
fn test_skipping_parts_is_allowed() {
    let selector = element("div")
        .unwrap()
        .pseudo_class("empty")
        .unwrap();
    assert_eq!(selector.stringify(), "div:empty");
}

#[test]
fn test_serialize_selector_fields() {
    let selector = element("a").unwrap().class("nav").unwrap();
    let json = serde_json::to_value(&selector).unwrap();
    assert_eq!(json["element_name"], "a");
    assert_eq!(json["class_names"][0], "nav");
    assert!(json["id_value"].is_null());
    assert!(json.get("last_part").is_none());
}
