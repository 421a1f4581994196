use super::*;

#[test]
fn category_and_product_paths() {
    assert_eq!(category("outerwear"), "/shop/outerwear");
    assert_eq!(product("alpine-shell"), "/product/alpine-shell");
}

#[test]
fn login_with_next_carries_protected_path() {
    assert_eq!(login_with_next("/account"), "/login?next=%2Faccount");
    assert_eq!(login_with_next("/admin"), "/login?next=%2Fadmin");
}

#[test]
fn login_with_next_encodes_query_characters() {
    assert_eq!(login_with_next("/account?tab=orders"), "/login?next=%2Faccount%3Ftab%3Dorders");
}

#[test]
fn login_with_next_skips_home_and_login() {
    assert_eq!(login_with_next("/"), "/login");
    assert_eq!(login_with_next("/login"), "/login");
}

#[test]
fn sanitize_next_accepts_local_paths() {
    assert_eq!(sanitize_next(Some("/account")), Some("/account".to_owned()));
    assert_eq!(sanitize_next(Some("  /shop/knitwear ")), Some("/shop/knitwear".to_owned()));
}

#[test]
fn sanitize_next_rejects_offsite_targets() {
    assert_eq!(sanitize_next(None), None);
    assert_eq!(sanitize_next(Some("https://evil.example")), None);
    assert_eq!(sanitize_next(Some("//evil.example")), None);
    assert_eq!(sanitize_next(Some("/\\evil.example")), None);
    assert_eq!(sanitize_next(Some("account")), None);
    assert_eq!(sanitize_next(Some("/acc\nount")), None);
}

#[test]
fn login_with_next_value_decodes_to_original_path() {
    let login = login_with_next("/shop/knitwear?color=oat&size=m");
    let value = login.strip_prefix("/login?next=").unwrap();
    assert!(!value.contains('&'));
    assert_eq!(urlencoding::decode(value).unwrap(), "/shop/knitwear?color=oat&size=m");
}
