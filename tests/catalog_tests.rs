use potability::catalog::{descriptor, descriptors, lookup};
use potability::scoring::rules;
use potability::ParameterKey;
use pretty_assertions::assert_eq;

#[test]
fn test_every_key_has_a_consistent_descriptor() {
    assert_eq!(descriptors().len(), ParameterKey::ALL.len());
    for key in ParameterKey::ALL {
        let d = descriptor(key);
        assert_eq!(d.key, key);
        assert!(d.min <= d.max, "{} has min > max", key);
        assert!(!d.name.is_empty());
        assert!(!d.normal_range.is_empty());
    }
}

#[test]
fn test_catalog_and_rules_share_order() {
    let catalog_keys: Vec<_> = descriptors().iter().map(|d| d.key).collect();
    let rule_keys: Vec<_> = rules().iter().map(|r| r.key).collect();
    assert_eq!(catalog_keys, rule_keys);
    assert_eq!(catalog_keys, ParameterKey::ALL.to_vec());
}

#[test]
fn test_lookup_by_external_name() {
    assert_eq!(lookup("organicCarbon").map(|d| d.name), Some("Total Organic Carbon"));
    assert_eq!(lookup("ph").map(|d| d.max), Some(14.0));
    assert!(lookup("lead").is_none());
    assert!(lookup("").is_none());
}
