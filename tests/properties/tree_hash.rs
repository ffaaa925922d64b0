//! Property tests for directory identity.

use std::collections::BTreeMap;
use std::fs;

use proptest::prelude::*;

use lambdapack::infrastructure::hash_directory;

fn file_name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z]{1,8}(\\.js)?").unwrap()
}

fn tree() -> impl Strategy<Value = BTreeMap<String, Vec<u8>>> {
    proptest::collection::btree_map(
        file_name(),
        proptest::collection::vec(any::<u8>(), 0..128),
        1..6,
    )
}

fn materialize(files: &BTreeMap<String, Vec<u8>>) -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    for (name, content) in files {
        fs::write(dir.path().join(name), content).unwrap();
    }
    dir
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 48,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: identical contents in different directories hash the same.
    #[test]
    fn property_identity_is_location_independent(files in tree()) {
        let a = materialize(&files);
        let b = materialize(&files);

        prop_assert_eq!(hash_directory(a.path()).unwrap(), hash_directory(b.path()).unwrap());
    }

    /// PROPERTY: flipping any byte of any file changes the identity.
    #[test]
    fn property_any_byte_change_changes_identity(
        files in tree().prop_filter("needs content", |t| t.values().any(|c| !c.is_empty())),
        pick in any::<prop::sample::Index>(),
    ) {
        let original = materialize(&files);

        let mut changed = files.clone();
        let candidates: Vec<String> = changed
            .iter()
            .filter(|(_, c)| !c.is_empty())
            .map(|(k, _)| k.clone())
            .collect();
        let name = pick.get(&candidates).clone();
        let content = changed.get_mut(&name).unwrap();
        let at = pick.index(content.len());
        content[at] ^= 0x01;
        let modified = materialize(&changed);

        prop_assert_ne!(
            hash_directory(original.path()).unwrap(),
            hash_directory(modified.path()).unwrap()
        );
    }

    /// PROPERTY: renaming a file changes the identity even with equal bytes.
    #[test]
    fn property_rename_changes_identity(files in tree()) {
        let original = materialize(&files);

        let mut renamed = files.clone();
        let (first, content) = renamed.pop_first().unwrap();
        let new_name = format!("{first}x");
        prop_assume!(!renamed.contains_key(&new_name));
        renamed.insert(new_name, content);
        let moved = materialize(&renamed);

        prop_assert_ne!(
            hash_directory(original.path()).unwrap(),
            hash_directory(moved.path()).unwrap()
        );
    }
}
