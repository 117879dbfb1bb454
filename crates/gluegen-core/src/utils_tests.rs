use crate::utils::{strip_bool_prefix, to_camel_case};

#[test]
fn camel_case_lowers_first_word() {
    assert_eq!(to_camel_case("TargetActor"), "targetActor");
    assert_eq!(to_camel_case("URLPath"), "urlPath");
    assert_eq!(to_camel_case("X"), "x");
    assert_eq!(to_camel_case("value"), "value");
    assert_eq!(to_camel_case(""), "");
}

#[test]
fn bool_prefix_stripped_only_before_capital() {
    assert_eq!(strip_bool_prefix("bHidden"), "Hidden");
    assert_eq!(strip_bool_prefix("bounds"), "bounds");
    assert_eq!(strip_bool_prefix("b"), "b");
    assert_eq!(strip_bool_prefix("Visible"), "Visible");
}
