//! Property-based tests for customer filter matching

use proptest::prelude::*;

use customer_search::backend::customers::CustomerFilter;

proptest! {
    #[test]
    fn test_blank_fields_are_absent(name in "[a-z]{0,8}", email in "[a-z]{0,8}") {
        let filter = CustomerFilter::new(Some(name.clone()), Some(email.clone()), Some(String::new()));
        prop_assert_eq!(filter.is_empty(), name.is_empty() && email.is_empty());
        prop_assert_eq!(filter.account_number, None);
    }

    #[test]
    fn test_name_substring_matches(prefix in "[A-Za-z ]{0,8}", needle in "[A-Za-z]{1,8}", suffix in "[A-Za-z ]{0,8}") {
        let name = format!("{}{}{}", prefix, needle, suffix);
        let filter = CustomerFilter::new(Some(needle), None, None);
        prop_assert!(filter.matches(&name, "someone@example.com", std::iter::empty()));
    }

    #[test]
    fn test_account_number_is_exact(account in "[0-9]{10}", extra in "[0-9]{1,3}") {
        let filter = CustomerFilter::new(None, None, Some(account.clone()));
        let longer = format!("{}{}", account, extra);

        prop_assert!(filter.matches("Any", "any@example.com", [account.as_str()].into_iter()));
        prop_assert!(!filter.matches("Any", "any@example.com", [longer.as_str()].into_iter()));
    }
}
