//! Property tests for version labels and object keys.

use proptest::prelude::*;

use lambdapack::{ContentHash, ObjectKey, VersionLabel};

fn label() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9._+-]{1,24}")
        .unwrap()
        .prop_filter("dot segments are not labels", |s| s != "." && s != "..")
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the key is exactly `<file_name>/<version>` and splits back apart.
    #[test]
    fn property_key_is_file_name_slash_version(content in proptest::collection::vec(any::<u8>(), 0..64), v in label()) {
        let file_name = format!("{}.zip", ContentHash::from_bytes(&content).hex());
        let version = VersionLabel::parse(&v).unwrap();

        let key = ObjectKey::new(&file_name, &version);

        prop_assert_eq!(key.as_str(), format!("{}/{}", file_name, v));
        prop_assert_eq!(key.parts(), (file_name.as_str(), v.as_str()));
    }

    /// PROPERTY: distinct versions never collide on the same file name.
    #[test]
    fn property_versions_separate_keys(a in label(), b in label()) {
        prop_assume!(a != b);
        let file_name = "abc.zip";

        let ka = ObjectKey::new(file_name, &VersionLabel::parse(&a).unwrap());
        let kb = ObjectKey::new(file_name, &VersionLabel::parse(&b).unwrap());

        prop_assert_ne!(ka, kb);
    }

    /// PROPERTY: a key built from any accepted label has no dot-only segment.
    #[test]
    fn property_key_segments_are_never_dot_segments(s in "[./a-z0-9]{0,6}") {
        if let Ok(v) = VersionLabel::parse(&s) {
            let key = ObjectKey::new("abc.zip", &v);
            prop_assert!(key.as_str().split('/').all(|seg| seg != "." && seg != ".." && !seg.is_empty()));
        }
    }

    /// PROPERTY: labels containing '/' or whitespace are rejected, never panic.
    #[test]
    fn property_version_parse_never_panics(s in "(?s).{0,32}") {
        match VersionLabel::parse(&s) {
            Ok(v) => {
                prop_assert!(!v.as_str().is_empty());
                prop_assert!(!v.as_str().contains('/'));
                prop_assert!(!v.as_str().chars().any(char::is_whitespace));
            }
            Err(_) => {
                prop_assert!(
                    s.is_empty()
                        || s == "."
                        || s == ".."
                        || s.contains('/')
                        || s.chars().any(|c| c.is_whitespace() || c.is_control())
                );
            }
        }
    }
}
