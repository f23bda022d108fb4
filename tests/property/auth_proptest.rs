//! Property-based tests for password hashing, tokens and header parsing

use chrono::Duration;
use proptest::prelude::*;

use customer_search::backend::auth::password::MIN_COST;
use customer_search::backend::auth::{PasswordHasher, TokenService};
use customer_search::backend::middleware::parse_bearer;

fn hasher() -> PasswordHasher {
    PasswordHasher::new(MIN_COST)
}

proptest! {
    // bcrypt is slow even at minimum cost
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn test_hash_then_verify(password in "[ -~]{1,64}") {
        let hash = hasher().hash(&password).unwrap();
        prop_assert_ne!(&hash, &password);
        prop_assert!(hasher().verify(&password, &hash));
    }

    #[test]
    fn test_other_password_fails(password in "[ -~]{1,64}", other in "[ -~]{1,64}") {
        prop_assume!(password != other);
        let hash = hasher().hash(&password).unwrap();
        prop_assert!(!hasher().verify(&other, &hash));
    }
}

proptest! {
    #[test]
    fn test_parse_bearer_never_panics(header in ".*") {
        let _ = parse_bearer(&header);
    }

    #[test]
    fn test_parse_bearer_extracts_token(token in "[A-Za-z0-9._-]{1,200}") {
        let header = format!("Bearer {}", token);
        prop_assert_eq!(parse_bearer(&header), Some(token.as_str()));
    }

    #[test]
    fn test_token_round_trips_user_id(user_id in 1i64..i64::MAX) {
        let tokens = TokenService::new(Some("proptest-secret".into()), Duration::hours(1));
        let token = tokens.issue(user_id).unwrap();
        prop_assert_eq!(tokens.validate(&token).unwrap().user_id(), user_id);
    }

    #[test]
    fn test_garbage_tokens_rejected(token in ".*") {
        let tokens = TokenService::new(Some("proptest-secret".into()), Duration::hours(1));
        prop_assert!(tokens.validate(&token).is_err());
    }
}
