//! Property tests for handler identifiers.

use proptest::prelude::*;

use lambdapack::HandlerId;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: well-formed `<module>.<function>` parses and displays unchanged.
    #[test]
    fn property_valid_handlers_round_trip(
        module in "[a-z][a-z0-9_]{0,8}(/[a-z][a-z0-9_]{0,8}){0,2}",
        function in "[A-Za-z_$][A-Za-z0-9_$]{0,12}",
    ) {
        let raw = format!("{module}.{function}");
        let handler = HandlerId::parse(&raw).unwrap();

        prop_assert_eq!(handler.module(), module.as_str());
        prop_assert_eq!(handler.function(), function.as_str());
        prop_assert_eq!(handler.to_string(), raw);
    }

    /// PROPERTY: parsing arbitrary input never panics.
    #[test]
    fn property_handler_parse_never_panics(s in "(?s).{0,40}") {
        let _ = HandlerId::parse(&s);
    }
}
