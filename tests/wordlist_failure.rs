//! Shared wordlist load failure
//!
//! Runs in its own test binary so the process-wide wordlist is first
//! initialized from a missing file.

use waves_identity::wallet::{MnemonicGenerator, Wordlist};
use waves_identity::{create_new_account, generate_seed_phrase, ErrorCode, Scheme};

#[test]
fn test_failed_load_is_reported_to_every_caller() {
    std::env::set_var("WAVES_IDENTITY_WORDLIST", "/nonexistent/words.json");

    let first = generate_seed_phrase().unwrap_err();
    assert!(first.is(ErrorCode::ResourceUnavailable));

    let second = generate_seed_phrase().unwrap_err();
    assert_eq!(second, first);

    assert!(Wordlist::shared().unwrap_err().is(ErrorCode::ResourceUnavailable));
    assert!(MnemonicGenerator::shared().is_err());

    let err = create_new_account(0, Scheme::MAINNET).unwrap_err();
    assert!(err.is(ErrorCode::ResourceUnavailable));

    // Fixing the source later does not trigger a reload
    std::env::remove_var("WAVES_IDENTITY_WORDLIST");
    assert!(Wordlist::shared().is_err());
}
