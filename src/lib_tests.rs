use super::*;

#[test]
fn exit_codes_are_distinct() {
    assert_eq!(EXIT_SUCCESS, 0);
    assert_ne!(EXIT_SUCCESS, EXIT_CHECK_FAILED);
    assert_ne!(EXIT_SUCCESS, EXIT_CONFIG_ERROR);
    assert_ne!(EXIT_CHECK_FAILED, EXIT_CONFIG_ERROR);
}
