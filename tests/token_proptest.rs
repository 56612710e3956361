//! Property tests for token issuance

use std::time::Duration;

use proptest::prelude::*;

use sso::backend::auth::{create_token, decode_claims};
use sso::shared::{App, User};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn token_claims_echo_inputs(
        user_id in 1i64..i64::MAX,
        app_id in 1i64..i64::MAX,
        local in "[a-z0-9.]{1,24}",
        secret in "[ -~]{1,64}",
        ttl_secs in 60u64..(365 * 24 * 3600),
    ) {
        let user = User {
            id: user_id,
            email: format!("{local}@example.com"),
            password_hash: Vec::new(),
            is_admin: false,
        };
        let app = App { id: app_id, name: "app".to_string(), secret: secret.clone() };

        let token = create_token(&user, &app, Duration::from_secs(ttl_secs)).unwrap();
        let claims = decode_claims(&token, &secret).unwrap();

        prop_assert_eq!(claims.user_id, user_id);
        prop_assert_eq!(claims.app_id, app_id);
        prop_assert_eq!(claims.email, user.email);
        prop_assert_eq!(claims.exp - claims.iat, ttl_secs as i64);
    }

    #[test]
    fn token_rejects_other_secrets(
        secret in "[a-z]{8,32}",
        other in "[A-Z]{8,32}",
    ) {
        let user = User {
            id: 1,
            email: "user@example.com".to_string(),
            password_hash: Vec::new(),
            is_admin: false,
        };
        let app = App { id: 1, name: "app".to_string(), secret };

        let token = create_token(&user, &app, Duration::from_secs(3600)).unwrap();
        prop_assert!(decode_claims(&token, &other).is_err());
    }
}
