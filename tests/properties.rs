//! Property tests for host resolution and env parsing.

use proptest::prelude::*;
use sitecfg::core::host;
use sitecfg::{EnvName, EnvVarSet};

proptest! {
    #[test]
    fn test_test_domains_are_local(name in "[a-z][a-z0-9-]{0,15}", tail in "(/[a-z]{0,8})?") {
        let descriptor = host::resolve(&format!("{}.test{}", name, tail));

        prop_assert_eq!(descriptor.env(), EnvName::Local);
        prop_assert!(descriptor.is_debug());
    }

    #[test]
    fn test_staging_hosts_are_proof(prefix in "[a-z]{1,10}", tld in "(com|net|io)") {
        let descriptor = host::resolve(&format!("{}.cremadesignstudio.{}", prefix, tld));

        prop_assert_eq!(descriptor.env(), EnvName::Proof);
        prop_assert!(descriptor.options().is_empty());
    }

    #[test]
    fn test_other_hosts_are_live(name in "[a-z]{1,10}", tld in "(com|org|dev)") {
        let descriptor = host::resolve(&format!("{}.{}", name, tld));

        prop_assert_eq!(descriptor.env(), EnvName::Live);
        prop_assert!(!descriptor.is_debug());
    }

    #[test]
    fn test_resolution_is_pure(host in "\\PC{0,40}") {
        prop_assert_eq!(host::resolve(&host), host::resolve(&host));
    }

    #[test]
    fn test_plain_assignments_parse(key in "[A-Z_][A-Z0-9_]{0,12}", value in "[a-zA-Z0-9:/._-]{0,24}") {
        let vars = EnvVarSet::parse(&format!("{}={}\n", key, value));

        prop_assert_eq!(vars.get(&key), Some(value.as_str()));
    }

    #[test]
    fn test_merge_right_wins(key in "[A-Z]{1,8}", left in "[a-z]{1,8}", right in "[a-z]{1,8}") {
        let mut merged = EnvVarSet::parse(&format!("{}={}\n", key, left));
        merged.merge(EnvVarSet::parse(&format!("{}={}\n", key, right)));

        prop_assert_eq!(merged.get(&key), Some(right.as_str()));
        prop_assert_eq!(merged.len(), 1);
    }
}
