//! Integration smoke tests for `uni_scout`

use uni_scout::get_version;

#[test]
fn version_is_not_empty() {
    let v = get_version();
    assert!(!v.trim().is_empty());
}
