use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        FiligreeError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(FiligreeError::asset("x").to_string().contains("asset error:"));
    assert!(
        FiligreeError::render("x")
            .to_string()
            .contains("render error:")
    );
    assert!(
        FiligreeError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = FiligreeError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
