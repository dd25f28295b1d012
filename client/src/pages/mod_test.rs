use super::*;

#[test]
fn parse_route_id_accepts_positive_integers_only() {
    assert_eq!(parse_route_id(Some("12")), Some(12));
    assert_eq!(parse_route_id(Some(" 3 ")), Some(3));
    assert_eq!(parse_route_id(Some("0")), None);
    assert_eq!(parse_route_id(Some("-4")), None);
    assert_eq!(parse_route_id(Some("abc")), None);
    assert_eq!(parse_route_id(None), None);
}
